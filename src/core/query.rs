//! Listing query parameters and their wire encoding.

use super::tags::TagFilterSet;

/// Which listing endpoint a controller drives.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ListMode {
    /// `GET /api/list`
    #[default]
    Browse,
    /// `GET /api/search`
    Search,
}

impl ListMode {
    pub fn endpoint(self) -> &'static str {
        match self {
            Self::Browse => "/api/list",
            Self::Search => "/api/search",
        }
    }
}

/// Parameters of a listing request.
///
/// `offset` stays a multiple of `page_size` as long as it is only changed
/// through [`ListQuery::go_to_page`] and [`ListQuery::reset_offset`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListQuery {
    pub term: Option<String>,
    pub tags: TagFilterSet,
    pub offset: u64,
    pub page_size: u64,
}

impl ListQuery {
    /// Default query: first page, no term, no tags. A zero page size is
    /// clamped to one.
    pub fn new(page_size: u64) -> Self {
        Self {
            term: None,
            tags: TagFilterSet::new(),
            offset: 0,
            page_size: page_size.max(1),
        }
    }

    /// Set the free-text term. Blank input clears it.
    pub fn set_term(&mut self, term: &str) {
        let term = term.trim();
        self.term = (!term.is_empty()).then(|| term.to_string());
    }

    pub fn go_to_page(&mut self, page_index: u64) {
        self.offset = page_index.saturating_mul(self.page_size);
    }

    pub fn reset_offset(&mut self) {
        self.offset = 0;
    }

    /// Zero-based index of the page the offset points at.
    pub fn page_index(&self) -> u64 {
        self.offset / self.page_size
    }

    /// Query pairs in wire order: `file`, `offset`, `limit`, then one
    /// `tags` pair per selected tag. `file` is only sent in search mode.
    pub fn params(&self, mode: ListMode) -> Vec<(&'static str, String)> {
        let mut params = Vec::with_capacity(3 + self.tags.len());
        if mode == ListMode::Search
            && let Some(term) = &self.term
        {
            params.push(("file", term.clone()));
        }
        params.push(("offset", self.offset.to_string()));
        params.push(("limit", self.page_size.to_string()));
        params.extend(self.tags.iter().map(|t| ("tags", t.to_string())));
        params
    }

    /// Endpoint path plus encoded query string, e.g.
    /// `/api/list?offset=0&limit=10&tags=rnaseq`.
    pub fn to_path(&self, mode: ListMode) -> String {
        let query = serde_urlencoded::to_string(self.params(mode)).unwrap_or_default();
        format!("{}?{}", mode.endpoint(), query)
    }
}

/// Number of pages needed to show `total` items. Zero items means zero
/// pages, which hides the pagination control.
pub fn page_count(total: u64, page_size: u64) -> u64 {
    total.div_ceil(page_size.max(1))
}
