//! UI components built with Leptos.
//!
//! - [`router`] - Hash routing (main entry point)
//! - [`hooks`] - Controller lifetimes bound to components
//! - [`files`] - File listing and search pages
//! - [`detail`] - File detail page with download and pull
//! - [`home`] - Landing, about and not-found pages
//! - [`nav`] - Navigation bar and search form
//! - [`status`] - File status badge
//! - [`notice`] - Error and loading notices
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod detail;
pub mod files;
pub mod home;
pub mod hooks;
pub mod icons;
pub mod nav;
pub mod notice;
pub mod router;
pub mod status;

pub use router::AppRouter;
