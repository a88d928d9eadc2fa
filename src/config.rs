//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! Deployment-specific values are read at compile time with `option_env!`.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the navigation bar.
pub const APP_NAME: &str = "Publish";

/// Application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Backend Configuration
// =============================================================================

/// Path prefix the backend is served under when none is configured.
pub const DEFAULT_BASE_PATH: &str = "/";

/// Compile-time override of the backend path prefix (reverse proxy setups).
pub const BASE_PATH_ENV: Option<&str> = option_env!("PUBLISH_BASE_PATH");

/// Files shown per listing page.
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: u32 = 10_000;

// =============================================================================
// Logging
// =============================================================================

/// Default `tracing` level for the browser console.
pub const LOG_LEVEL: tracing::Level = if cfg!(debug_assertions) {
    tracing::Level::DEBUG
} else {
    tracing::Level::INFO
};

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;

// =============================================================================
// Client Configuration
// =============================================================================

/// Settings every controller and the HTTP transport are constructed with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Path prefix of the backend, normalized to start with `/` and have
    /// no trailing slash (`""` for the root).
    pub base_path: String,
    /// Files per page. Never zero.
    pub page_size: u64,
}

impl ClientConfig {
    pub fn new(base_path: &str, page_size: u64) -> Self {
        let trimmed = base_path.trim().trim_matches('/');
        let base_path = if trimmed.is_empty() {
            String::new()
        } else {
            format!("/{}", trimmed)
        };
        Self {
            base_path,
            page_size: page_size.max(1),
        }
    }

    /// Configuration baked in at build time.
    pub fn from_build_env() -> Self {
        Self::new(
            BASE_PATH_ENV.unwrap_or(DEFAULT_BASE_PATH),
            DEFAULT_PAGE_SIZE,
        )
    }

    /// Prefix an API path (`/api/...`) with the base path.
    pub fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_path, path.trim_start_matches('/'))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_PATH, DEFAULT_PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_path_normalization() {
        assert_eq!(ClientConfig::new("/", 10).base_path, "");
        assert_eq!(ClientConfig::new("", 10).base_path, "");
        assert_eq!(ClientConfig::new("gopub/", 10).base_path, "/gopub");
        assert_eq!(ClientConfig::new("/apps/gopub/", 10).base_path, "/apps/gopub");
    }

    #[test]
    fn test_api_url() {
        assert_eq!(
            ClientConfig::new("/", 10).api_url("/api/list?offset=0&limit=10"),
            "/api/list?offset=0&limit=10"
        );
        assert_eq!(
            ClientConfig::new("/gopub", 10).api_url("/api/view/abc"),
            "/gopub/api/view/abc"
        );
    }

    #[test]
    fn test_page_size_never_zero() {
        assert_eq!(ClientConfig::new("/", 0).page_size, 1);
        assert_eq!(ClientConfig::default().page_size, DEFAULT_PAGE_SIZE);
    }
}
