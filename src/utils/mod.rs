//! Utility modules for web, DOM, and display formatting.
//!
//! Provides:
//! - [`HttpApi`] - `gloo-net` transport for the publishing API
//! - [`dom`] - Hash navigation, scrolling and download helpers
//! - [`format`] - File size and count formatting
//! - [`log`] - `tracing` subscriber writing to the browser console

pub mod dom;
mod fetch;
pub mod format;
pub mod log;

pub use fetch::HttpApi;
