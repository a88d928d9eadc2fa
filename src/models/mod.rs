//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`FileSummary`], [`FileStatus`], [`TagCount`] - Published file records
//! - [`ListResponse`], [`ViewResponse`], [`TagListResponse`] - Backend response bodies
//! - [`ListResult`] - One applied page of a listing
//! - [`AppRoute`] - Hash-based navigation

mod file;
mod route;

pub use file::{
    ErrorBody, FileStatus, FileSummary, ListResponse, ListResult, PullRequest, PullResponse,
    SiblingRef, TagCount, TagListResponse, ViewResponse,
};
pub use route::AppRoute;
