//! Published file records as returned by the backend.
//!
//! These types mirror the JSON bodies of the `/api/list`, `/api/search`,
//! `/api/view` and `/api/tag/list` endpoints. Decoding is lenient: optional
//! fields fall back to defaults and a few legacy response shapes are
//! accepted (see [`TagCount`] and [`ListResponse`]).

use std::collections::BTreeMap;
use std::fmt;

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

// =============================================================================
// File Status
// =============================================================================

/// Lifecycle status of a published file.
///
/// Statuses the client does not know about are kept verbatim in
/// [`FileStatus::Unknown`] so that a newer backend never breaks decoding.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum FileStatus {
    Starting,
    Hashing,
    Available,
    Unavailable,
    Failed,
    Pulling,
    Pullable,
    Unpublished,
    /// Any status string outside the known vocabulary.
    Unknown(String),
}

impl FileStatus {
    /// Every status of the known vocabulary, in lifecycle order.
    pub const KNOWN: [FileStatus; 8] = [
        FileStatus::Unpublished,
        FileStatus::Starting,
        FileStatus::Hashing,
        FileStatus::Available,
        FileStatus::Unavailable,
        FileStatus::Failed,
        FileStatus::Pullable,
        FileStatus::Pulling,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Self::Starting => "starting",
            Self::Hashing => "hashing",
            Self::Available => "available",
            Self::Unavailable => "unavailable",
            Self::Failed => "failed",
            Self::Pulling => "pulling",
            Self::Pullable => "pullable",
            Self::Unpublished => "unpublished",
            Self::Unknown(raw) => raw,
        }
    }

    /// Only archived files waiting for retrieval can be pulled.
    pub fn can_pull(&self) -> bool {
        matches!(self, Self::Pullable)
    }

    /// Only available files have content to download.
    pub fn can_download(&self) -> bool {
        matches!(self, Self::Available)
    }
}

impl Default for FileStatus {
    fn default() -> Self {
        Self::Unknown(String::new())
    }
}

impl From<&str> for FileStatus {
    fn from(raw: &str) -> Self {
        match raw {
            "starting" => Self::Starting,
            "hashing" => Self::Hashing,
            "available" => Self::Available,
            "unavailable" => Self::Unavailable,
            "failed" => Self::Failed,
            "pulling" => Self::Pulling,
            "pullable" => Self::Pullable,
            "unpublished" => Self::Unpublished,
            other => Self::Unknown(other.to_string()),
        }
    }
}

impl From<String> for FileStatus {
    fn from(raw: String) -> Self {
        Self::from(raw.as_str())
    }
}

impl From<FileStatus> for String {
    fn from(status: FileStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for FileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// File Records
// =============================================================================

/// A published file as shown in listings and on the detail page.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct FileSummary {
    /// Stable identifier. `/api/view` omits it; the detail controller
    /// fills it in from the route.
    #[serde(default)]
    pub uri: String,
    pub file_name: String,
    #[serde(default = "first_version")]
    pub version: u32,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub status: FileStatus,
    #[serde(default)]
    pub downloads: u64,
    /// Server-formatted timestamp, rendered verbatim.
    #[serde(default)]
    pub publishing_date: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub owner: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub contact: Option<String>,
    /// MD5 checksum (detail endpoint only).
    #[serde(default, deserialize_with = "blank_as_none")]
    pub hash: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Other versions of the same file.
    #[serde(default)]
    pub siblings: Vec<SiblingRef>,
}

impl FileSummary {
    /// Contact address if one was given at publish time, otherwise the owner.
    pub fn contact_or_owner(&self) -> Option<(&'static str, &str)> {
        self.contact
            .as_deref()
            .map(|c| ("Contact", c))
            .or_else(|| self.owner.as_deref().map(|o| ("Owner", o)))
    }
}

/// Reference to another version of the same logical file.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct SiblingRef {
    pub uri: String,
    #[serde(default = "first_version")]
    pub version: u32,
    #[serde(default)]
    pub status: FileStatus,
    #[serde(default)]
    pub publishing_date: String,
}

fn first_version() -> u32 {
    1
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

// =============================================================================
// Tags
// =============================================================================

/// A tag together with the number of listed files carrying it.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "RawTag")]
pub struct TagCount {
    pub tag: String,
    pub count: u64,
}

/// Older servers list tags as bare strings.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawTag {
    Counted {
        tag: String,
        #[serde(default)]
        count: u64,
    },
    Bare(String),
}

impl From<RawTag> for TagCount {
    fn from(raw: RawTag) -> Self {
        match raw {
            RawTag::Counted { tag, count } => Self { tag, count },
            RawTag::Bare(tag) => Self { tag, count: 0 },
        }
    }
}

// =============================================================================
// Response Bodies
// =============================================================================

/// Body of `/api/list` and `/api/search`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ListResponse {
    #[serde(default, deserialize_with = "list_or_empty_object")]
    pub files: Vec<FileSummary>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default, deserialize_with = "list_or_empty_object")]
    pub tags: Vec<TagCount>,
}

/// Body of `/api/tag/list`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct TagListResponse {
    #[serde(default, deserialize_with = "list_or_empty_object")]
    pub tags: Vec<TagCount>,
}

/// Body of `/api/view/:uri`.
#[derive(Clone, Debug, Deserialize)]
pub struct ViewResponse {
    pub file: FileSummary,
}

/// Body of `/api/pull/:uri`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct PullResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Request body of `/api/pull/:uri`.
#[derive(Clone, Debug, Default, Serialize)]
pub struct PullRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Error body the backend attaches to non-2xx responses.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default, alias = "errorMessage")]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    pub fn into_message(self) -> Option<String> {
        self.error.or(self.message).filter(|m| !m.is_empty())
    }
}

/// The backend answers `{}` instead of `[]` when a search matches nothing.
fn list_or_empty_object<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr<T> {
        List(Vec<T>),
        Object(BTreeMap<String, IgnoredAny>),
    }

    Ok(match Repr::<T>::deserialize(deserializer)? {
        Repr::List(items) => items,
        Repr::Object(fields) => {
            tracing::debug!(fields = fields.len(), "object in place of a file list");
            Vec::new()
        }
    })
}

// =============================================================================
// List Result
// =============================================================================

/// One page of a listing, as applied to the list view.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListResult {
    pub items: Vec<FileSummary>,
    pub total: u64,
    /// Tag counts in server order.
    pub tags: Vec<TagCount>,
}

impl From<ListResponse> for ListResult {
    fn from(resp: ListResponse) -> Self {
        let total = resp.total.unwrap_or(resp.files.len() as u64);
        Self {
            items: resp.files,
            total,
            tags: resp.tags,
        }
    }
}
