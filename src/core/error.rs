//! Error types for the application.
//!
//! - [`FetchError`] - Transport failures and non-2xx responses
//! - [`ValidationError`] - Client-side checks that block a request
//! - [`ErrorState`] - The `{code, message}` pair views render inline

use thiserror::Error;

use crate::models::FileStatus;

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Request failed before a response arrived (offline, CORS, DNS)
    #[error("Network error: {0}")]
    Network(String),
    /// Request did not complete within the configured timeout
    #[error("Request timed out")]
    Timeout,
    /// Request was cancelled by a newer request or view teardown
    #[error("Request cancelled")]
    Aborted,
    /// Non-2xx response
    #[error("{message}")]
    Http { status: u16, message: String },
    /// Response body was not what the endpoint promises
    #[error("Invalid response: {0}")]
    Decode(String),
}

impl FetchError {
    /// HTTP status code, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Client-side validation failures. These never reach the network.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),
    #[error("file cannot be pulled while it is {0}")]
    NotPullable(FileStatus),
    #[error("file is not loaded yet")]
    NotLoaded,
}

/// Error surfaced to the rendering layer.
///
/// `code` is the HTTP status when there was one; transport failures carry
/// `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorState {
    pub code: Option<u16>,
    pub message: String,
}

impl ErrorState {
    /// Short code for display ("404" or "network").
    pub fn code_label(&self) -> String {
        match self.code {
            Some(code) => code.to_string(),
            None => "network".to_string(),
        }
    }
}

impl From<&FetchError> for ErrorState {
    fn from(err: &FetchError) -> Self {
        Self {
            code: err.status(),
            message: err.to_string(),
        }
    }
}

impl From<FetchError> for ErrorState {
    fn from(err: FetchError) -> Self {
        Self::from(&err)
    }
}
