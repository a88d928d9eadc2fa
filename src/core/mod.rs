//! Core view-state logic, independent of the rendering layer.
//!
//! This module provides:
//! - [`ListController`] paginated, tag-filtered listing state
//! - [`FileDetailController`] file metadata, download and pull requests
//! - [`status::present`] status badge mapping
//! - [`FileApi`] the backend seam both controllers are generic over

pub mod api;
mod controller;
mod detail;
pub mod error;
mod query;
mod sequence;
pub mod status;
mod tags;
mod validate;

pub use api::FileApi;
pub use controller::{ListController, ListState};
pub use detail::{DetailState, FileDetailController, PullState};
pub use error::{ErrorState, FetchError, ValidationError};
pub use query::{ListMode, ListQuery};
