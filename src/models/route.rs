//! Hash-based routing.
//!
//! URL format: `#/path?query`. Hash routes keep the app servable from any
//! base path behind a proxy without server-side rewrite rules.

use crate::utils::dom;

/// Application routes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppRoute {
    /// Landing page: `#/` or empty hash
    Home,
    /// Paginated file listing: `#/files`, optionally `#/files?tags=a&tags=b`
    Files {
        /// Tags preselected when the listing mounts
        tags: Vec<String>,
    },
    /// File detail page: `#/files/<uri>`
    File { uri: String },
    /// Search results: `#/search?file=<term>`
    Search { term: String },
    /// Static about page: `#/about`
    About,
    /// Anything else
    NotFound(String),
}

impl AppRoute {
    /// Parse a URL hash into a route.
    pub fn from_hash(hash: &str) -> Self {
        let trimmed = hash.trim_start_matches('#');
        let (path, query) = trimmed.split_once('?').unwrap_or((trimmed, ""));
        let path = path.trim_matches('/');
        let params: Vec<(String, String)> = serde_urlencoded::from_str(query).unwrap_or_default();

        match path.split_once('/') {
            None => match path {
                "" => Self::Home,
                "files" => Self::Files {
                    tags: params
                        .into_iter()
                        .filter(|(k, _)| k == "tags")
                        .map(|(_, v)| v)
                        .collect(),
                },
                "search" => Self::Search {
                    term: params
                        .into_iter()
                        .find(|(k, _)| k == "file")
                        .map(|(_, v)| v)
                        .unwrap_or_default(),
                },
                "about" => Self::About,
                other => Self::NotFound(other.to_string()),
            },
            Some(("files", uri)) if !uri.is_empty() && !uri.contains('/') => Self::File {
                uri: uri.to_string(),
            },
            Some(_) => Self::NotFound(path.to_string()),
        }
    }

    /// Convert the route to a URL hash (with `#` prefix).
    pub fn to_hash(&self) -> String {
        match self {
            Self::Home => "#/".to_string(),
            Self::Files { tags } if tags.is_empty() => "#/files".to_string(),
            Self::Files { tags } => {
                let pairs: Vec<(&str, &str)> = tags.iter().map(|t| ("tags", t.as_str())).collect();
                format!("#/files?{}", encode(&pairs))
            }
            Self::File { uri } => format!("#/files/{}", uri),
            Self::Search { term } => format!("#/search?{}", encode(&[("file", term.as_str())])),
            Self::About => "#/about".to_string(),
            Self::NotFound(path) => format!("#/{}", path),
        }
    }

    /// Get the current route from the browser URL.
    pub fn current() -> Self {
        Self::from_hash(&dom::get_hash())
    }

    /// Navigate to this route (adds a history entry and fires `hashchange`).
    pub fn push(&self) {
        dom::set_hash(&self.to_hash());
    }

    /// Top-level navigation section, used to highlight the nav bar.
    pub fn section(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Files { .. } | Self::File { .. } => "files",
            Self::Search { .. } => "search",
            Self::About => "about",
            Self::NotFound(_) => "",
        }
    }
}

fn encode(pairs: &[(&str, &str)]) -> String {
    serde_urlencoded::to_string(pairs).unwrap_or_default()
}
