//! Status badge presentation.
//!
//! Every view renders file status through [`present`], so a status is
//! labelled the same way in listings, search results and the detail page.

use crate::models::FileStatus;

/// Visual weight of a status badge. Maps 1:1 to a badge CSS class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Success,
    Danger,
    Warning,
    Info,
    Secondary,
    Neutral,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Danger => "danger",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Secondary => "secondary",
            Self::Neutral => "neutral",
        }
    }
}

/// Label and severity of a status badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatusBadge {
    pub label: &'static str,
    pub severity: Severity,
}

/// Badge shown for statuses outside the known vocabulary.
pub const FALLBACK_BADGE: StatusBadge = StatusBadge {
    label: "Unknown",
    severity: Severity::Neutral,
};

/// Map a file status to its badge. Total over all statuses.
pub fn present(status: &FileStatus) -> StatusBadge {
    let (label, severity) = match status {
        FileStatus::Available => ("Available", Severity::Success),
        FileStatus::Unavailable | FileStatus::Failed => ("Unavailable", Severity::Danger),
        FileStatus::Pulling => ("Pulling", Severity::Secondary),
        FileStatus::Pullable => ("Pullable", Severity::Info),
        FileStatus::Starting | FileStatus::Hashing => ("Publishing", Severity::Warning),
        FileStatus::Unpublished => ("Unpublished", Severity::Neutral),
        FileStatus::Unknown(_) => return FALLBACK_BADGE,
    };
    StatusBadge { label, severity }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_known_status_has_a_label() {
        for status in FileStatus::KNOWN {
            let badge = present(&status);
            assert!(!badge.label.is_empty(), "{status} has no label");
            assert_ne!(badge, FALLBACK_BADGE, "{status} fell back");
        }
    }

    #[test]
    fn test_unknown_status_falls_back() {
        assert_eq!(present(&FileStatus::from("creating")), FALLBACK_BADGE);
        assert_eq!(present(&FileStatus::default()), FALLBACK_BADGE);
    }

    #[test]
    fn test_grouped_statuses_share_badges() {
        assert_eq!(
            present(&FileStatus::Failed),
            present(&FileStatus::Unavailable)
        );
        assert_eq!(
            present(&FileStatus::Starting),
            present(&FileStatus::Hashing)
        );
        assert_eq!(present(&FileStatus::Hashing).label, "Publishing");
        assert_eq!(present(&FileStatus::Available).severity, Severity::Success);
    }
}
