//! Paginated, tag-filtered listing controller.
//!
//! [`ListController`] owns the query of one list or search view, issues
//! fetches through a [`FileApi`] and applies only the response of the most
//! recently issued fetch. Failed fetches keep the previously displayed page
//! and flag the error (the same policy as [`super::detail`]).

use std::cell::RefCell;
use std::rc::Rc;

use super::api::FileApi;
use super::error::{ErrorState, FetchError};
use super::query::{ListMode, ListQuery, page_count};
use super::sequence::{FetchSequence, FetchToken};
use crate::config::ClientConfig;
use crate::models::{FileSummary, ListResult, TagCount};

/// Everything a list view renders.
#[derive(Clone, Debug, PartialEq)]
pub struct ListState {
    pub query: ListQuery,
    pub result: ListResult,
    pub page_count: u64,
    /// A fetch is outstanding.
    pub loading: bool,
    /// At least one fetch succeeded since mount.
    pub loaded: bool,
    /// Error of the latest fetch. Stale items stay in `result`.
    pub error: Option<ErrorState>,
}

impl ListState {
    fn new(page_size: u64) -> Self {
        Self {
            query: ListQuery::new(page_size),
            result: ListResult::default(),
            page_count: 0,
            loading: false,
            loaded: false,
            error: None,
        }
    }

    pub fn items(&self) -> &[FileSummary] {
        &self.result.items
    }

    pub fn tags(&self) -> &[TagCount] {
        &self.result.tags
    }

    pub fn current_page(&self) -> u64 {
        self.query.page_index()
    }

    /// Some fetch succeeded, so there is a result (possibly stale) to show.
    /// Before that, a failure renders the error block alone.
    pub fn has_results(&self) -> bool {
        self.loaded
    }

    /// A successful fetch returned nothing ("No files available").
    pub fn is_empty(&self) -> bool {
        self.loaded && self.error.is_none() && self.result.items.is_empty()
    }
}

type Observer = Box<dyn Fn(&ListState)>;

struct ListInner<A> {
    api: A,
    mode: ListMode,
    state: RefCell<ListState>,
    sequence: FetchSequence,
    observers: RefCell<Vec<Observer>>,
}

/// Controller of one list or search view.
///
/// Cloning is cheap and every clone drives the same state.
pub struct ListController<A> {
    inner: Rc<ListInner<A>>,
}

impl<A> Clone for ListController<A> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<A: FileApi> ListController<A> {
    pub fn new(api: A, mode: ListMode, config: &ClientConfig) -> Self {
        Self {
            inner: Rc::new(ListInner {
                api,
                mode,
                state: RefCell::new(ListState::new(config.page_size)),
                sequence: FetchSequence::new(),
                observers: RefCell::new(Vec::new()),
            }),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> ListState {
        self.inner.state.borrow().clone()
    }

    /// Call `observer` with the new state after every change.
    pub fn subscribe(&self, observer: impl Fn(&ListState) + 'static) {
        if self.inner.sequence.is_disposed() {
            return;
        }
        self.inner.observers.borrow_mut().push(Box::new(observer));
    }

    /// Update the free-text term without fetching.
    pub fn set_term(&self, term: &str) {
        self.update(|s| s.query.set_term(term));
    }

    /// Preselect tags before the first fetch (tags carried by the route).
    pub fn select_tags<I, S>(&self, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.update(|s| {
            s.query.tags = tags.into_iter().collect();
            s.query.reset_offset();
        });
    }

    /// Toggle a tag filter and refetch from the first page.
    pub async fn toggle_tag(&self, tag: &str) {
        self.update(|s| {
            s.query.tags.toggle(tag);
            s.query.reset_offset();
        });
        self.refresh().await;
    }

    /// Drop every tag filter and refetch from the first page.
    pub async fn clear_tags(&self) {
        self.update(|s| {
            s.query.tags.clear();
            s.query.reset_offset();
        });
        self.refresh().await;
    }

    /// Jump to a zero-based page and refetch, keeping term and tags.
    pub async fn go_to_page(&self, page_index: u64) {
        self.update(|s| s.query.go_to_page(page_index));
        self.refresh().await;
    }

    /// Set the term and fetch its first page.
    pub async fn submit_search(&self, term: &str) {
        self.update(|s| {
            s.query.set_term(term);
            s.query.reset_offset();
        });
        self.refresh().await;
    }

    /// Fetch the current query and apply the result if it is still the
    /// latest fetch when it completes.
    pub async fn refresh(&self) {
        let Some((token, query)) = self.begin_fetch() else {
            return;
        };
        let result = self.inner.api.fetch_list(self.inner.mode, &query).await;
        self.complete_fetch(token, result);
    }

    /// Tear down: abort the outstanding request and ignore every later
    /// completion. Observers are dropped.
    pub fn dispose(&self) {
        if self.inner.sequence.is_disposed() {
            return;
        }
        self.inner.sequence.dispose();
        self.inner.api.cancel_pending();
        self.inner.observers.borrow_mut().clear();
        tracing::debug!(mode = ?self.inner.mode, "list controller disposed");
    }

    /// Start a fetch: supersede any outstanding one and mark loading.
    ///
    /// Returns `None` once disposed.
    pub(crate) fn begin_fetch(&self) -> Option<(FetchToken, ListQuery)> {
        if self.inner.sequence.is_disposed() {
            return None;
        }
        self.inner.api.cancel_pending();
        let token = self.inner.sequence.next();
        let query = self.inner.state.borrow().query.clone();
        tracing::debug!(
            token = token.get(),
            path = %query.to_path(self.inner.mode),
            "list fetch started"
        );
        self.update(|s| s.loading = true);
        Some((token, query))
    }

    /// Apply a completed fetch. Returns `false` if it was superseded.
    pub(crate) fn complete_fetch(
        &self,
        token: FetchToken,
        result: Result<ListResult, FetchError>,
    ) -> bool {
        if !self.inner.sequence.is_current(token) {
            tracing::debug!(
                token = token.get(),
                latest = self.inner.sequence.latest().get(),
                "discarding stale list response"
            );
            return false;
        }

        match result {
            Ok(result) => self.update(|s| {
                s.page_count = page_count(result.total, s.query.page_size);
                s.result = result;
                s.loading = false;
                s.loaded = true;
                s.error = None;
            }),
            Err(err) => {
                tracing::warn!(error = %err, status = ?err.status(), "list fetch failed");
                self.update(|s| {
                    s.loading = false;
                    s.error = Some(ErrorState::from(&err));
                });
            }
        }
        true
    }

    fn update(&self, f: impl FnOnce(&mut ListState)) {
        let snapshot = {
            let mut state = self.inner.state.borrow_mut();
            f(&mut state);
            state.clone()
        };
        for observer in self.inner.observers.borrow().iter() {
            observer(&snapshot);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::core::api::mock::MockApi;
    use crate::models::{FileStatus, TagCount};

    fn config() -> ClientConfig {
        ClientConfig::new("/", 10)
    }

    fn file(uri: &str) -> FileSummary {
        FileSummary {
            uri: uri.to_string(),
            file_name: format!("{uri}.txt"),
            status: FileStatus::Available,
            ..Default::default()
        }
    }

    fn page(uris: &[&str], total: u64) -> ListResult {
        ListResult {
            items: uris.iter().map(|u| file(u)).collect(),
            total,
            tags: vec![TagCount {
                tag: "rnaseq".to_string(),
                count: total,
            }],
        }
    }

    fn browse(api: MockApi) -> ListController<MockApi> {
        ListController::new(api, ListMode::Browse, &config())
    }

    #[tokio::test]
    async fn test_refresh_applies_result_and_page_count() {
        let api = MockApi::default();
        api.reply_list(Ok(page(&["a", "b"], 31)));
        let ctrl = browse(api);

        ctrl.refresh().await;

        let state = ctrl.state();
        assert_eq!(state.items().len(), 2);
        assert_eq!(state.result.total, 31);
        assert_eq!(state.page_count, 4);
        assert!(state.loaded);
        assert!(!state.loading);
        assert_eq!(state.error, None);
        assert_eq!(
            ctrl.inner.api.requests(),
            vec!["GET /api/list?offset=0&limit=10"]
        );
    }

    #[tokio::test]
    async fn test_failed_first_load_has_no_results() {
        let api = MockApi::default();
        api.reply_list(Err(FetchError::Http {
            status: 500,
            message: "boom".to_string(),
        }));
        let ctrl = browse(api);

        ctrl.refresh().await;

        let state = ctrl.state();
        assert!(!state.has_results());
        assert!(!state.is_empty());
        assert!(!state.loading);
        assert_eq!(state.error.unwrap().code, Some(500));
    }

    #[tokio::test]
    async fn test_clear_tags_refetches_first_page() {
        let api = MockApi::default();
        api.reply_list(Ok(page(&["a"], 25)));
        api.reply_list(Ok(page(&["b"], 40)));
        let ctrl = browse(api);
        ctrl.select_tags(["rnaseq", "genome"]);
        ctrl.go_to_page(1).await;

        ctrl.clear_tags().await;

        let state = ctrl.state();
        assert!(state.query.tags.is_empty());
        assert_eq!(state.query.offset, 0);
        assert_eq!(
            ctrl.inner.api.requests(),
            vec![
                "GET /api/list?offset=10&limit=10&tags=genome&tags=rnaseq",
                "GET /api/list?offset=0&limit=10",
            ]
        );
    }

    #[tokio::test]
    async fn test_empty_listing_has_no_pages() {
        let api = MockApi::default();
        api.reply_list(Ok(ListResult::default()));
        let ctrl = browse(api);

        ctrl.refresh().await;

        let state = ctrl.state();
        assert!(state.is_empty());
        assert_eq!(state.page_count, 0);
    }

    #[tokio::test]
    async fn test_toggle_tag_on_page_three_resets_offset() {
        let api = MockApi::default();
        api.reply_list(Ok(page(&["a"], 25)));
        api.reply_list(Ok(page(&["b"], 5)));
        let ctrl = browse(api);

        ctrl.go_to_page(2).await;
        assert_eq!(ctrl.state().query.offset, 20);

        ctrl.toggle_tag("rnaseq").await;

        let state = ctrl.state();
        assert_eq!(state.query.offset, 0);
        assert_eq!(state.page_count, 1);
        assert_eq!(
            ctrl.inner.api.requests(),
            vec![
                "GET /api/list?offset=20&limit=10",
                "GET /api/list?offset=0&limit=10&tags=rnaseq",
            ]
        );
    }

    #[tokio::test]
    async fn test_toggle_twice_restores_selection() {
        let api = MockApi::default();
        api.reply_list(Ok(page(&["a"], 1)));
        api.reply_list(Ok(page(&["a"], 1)));
        let ctrl = browse(api);
        let before = ctrl.state().query.tags;

        ctrl.toggle_tag("genome").await;
        ctrl.toggle_tag("genome").await;

        assert_eq!(ctrl.state().query.tags, before);
        assert_eq!(ctrl.state().query.offset, 0);
    }

    #[tokio::test]
    async fn test_go_to_page_keeps_term_and_tags() {
        let api = MockApi::default();
        api.reply_list(Ok(page(&["a"], 40)));
        api.reply_list(Ok(page(&["b"], 40)));
        let ctrl = ListController::new(api, ListMode::Search, &config());

        ctrl.set_term("reads");
        ctrl.toggle_tag("rnaseq").await;
        ctrl.go_to_page(3).await;

        assert_eq!(
            ctrl.inner.api.requests(),
            vec![
                "GET /api/search?file=reads&offset=0&limit=10&tags=rnaseq",
                "GET /api/search?file=reads&offset=30&limit=10&tags=rnaseq",
            ]
        );
    }

    #[tokio::test]
    async fn test_set_term_does_not_fetch() {
        let ctrl = ListController::new(MockApi::default(), ListMode::Search, &config());
        ctrl.set_term("reads");
        assert!(ctrl.inner.api.requests().is_empty());
        assert_eq!(ctrl.state().query.term.as_deref(), Some("reads"));
    }

    #[tokio::test]
    async fn test_submit_search_starts_from_first_page() {
        let api = MockApi::default();
        api.reply_list(Ok(page(&["a"], 30)));
        api.reply_list(Ok(page(&["b"], 2)));
        let ctrl = ListController::new(api, ListMode::Search, &config());

        ctrl.go_to_page(2).await;
        ctrl.submit_search("fastq").await;

        assert_eq!(
            ctrl.inner.api.requests()[1],
            "GET /api/search?file=fastq&offset=0&limit=10"
        );
    }

    #[tokio::test]
    async fn test_failed_refresh_keeps_stale_items() {
        let api = MockApi::default();
        api.reply_list(Ok(page(&["a", "b"], 2)));
        api.reply_list(Err(FetchError::Http {
            status: 500,
            message: "INTERNAL SERVER ERROR".to_string(),
        }));
        let ctrl = browse(api);

        ctrl.refresh().await;
        ctrl.refresh().await;

        let state = ctrl.state();
        assert_eq!(state.items().len(), 2);
        assert_eq!(state.page_count, 1);
        assert!(!state.loading);
        assert!(!state.is_empty());
        let error = state.error.expect("error flagged");
        assert_eq!(error.code, Some(500));
        assert_eq!(error.message, "INTERNAL SERVER ERROR");
    }

    #[tokio::test]
    async fn test_success_clears_previous_error() {
        let api = MockApi::default();
        api.reply_list(Err(FetchError::Timeout));
        api.reply_list(Ok(page(&["a"], 1)));
        let ctrl = browse(api);

        ctrl.refresh().await;
        assert!(ctrl.state().error.is_some());
        ctrl.refresh().await;
        assert_eq!(ctrl.state().error, None);
    }

    #[test]
    fn test_older_completion_after_newer_is_discarded() {
        let ctrl = browse(MockApi::default());

        let (token_a, _) = ctrl.begin_fetch().unwrap();
        let (token_b, _) = ctrl.begin_fetch().unwrap();

        assert!(ctrl.complete_fetch(token_b, Ok(page(&["b"], 1))));
        assert!(!ctrl.complete_fetch(token_a, Ok(page(&["a1", "a2"], 2))));

        let state = ctrl.state();
        assert_eq!(state.items()[0].uri, "b");
        assert_eq!(state.result.total, 1);
        assert_eq!(ctrl.inner.api.cancels.get(), 2);
    }

    #[test]
    fn test_stale_error_does_not_flag_current_view() {
        let ctrl = browse(MockApi::default());

        let (token_a, _) = ctrl.begin_fetch().unwrap();
        let (token_b, _) = ctrl.begin_fetch().unwrap();

        assert!(!ctrl.complete_fetch(token_a, Err(FetchError::Aborted)));
        assert!(ctrl.state().loading);
        assert!(ctrl.complete_fetch(token_b, Ok(page(&["b"], 1))));
        assert_eq!(ctrl.state().error, None);
    }

    #[tokio::test]
    async fn test_racing_fetches_resolve_to_latest() {
        let api = MockApi::default();
        let reply_a = api.defer_list();
        let reply_b = api.defer_list();
        let ctrl = browse(api);

        let fetch_a = ctrl.refresh();
        let fetch_b = async {
            tokio::task::yield_now().await;
            ctrl.toggle_tag("rnaseq").await;
        };
        let driver = async {
            tokio::task::yield_now().await;
            reply_b.send(Ok(page(&["b"], 1))).unwrap();
            while ctrl.state().loading {
                tokio::task::yield_now().await;
            }
            reply_a.send(Ok(page(&["a"], 9))).unwrap();
        };
        tokio::join!(fetch_a, fetch_b, driver);

        let state = ctrl.state();
        assert_eq!(state.items()[0].uri, "b");
        assert_eq!(state.result.total, 1);
        assert!(state.query.tags.is_selected("rnaseq"));
    }

    #[tokio::test]
    async fn test_dispose_drops_in_flight_result() {
        let api = MockApi::default();
        let reply = api.defer_list();
        let ctrl = browse(api);
        let notified = Rc::new(Cell::new(0));
        let counter = Rc::clone(&notified);
        ctrl.subscribe(move |_| counter.set(counter.get() + 1));

        let fetch = ctrl.refresh();
        let driver = async {
            tokio::task::yield_now().await;
            ctrl.dispose();
            reply.send(Ok(page(&["late"], 1))).unwrap();
        };
        tokio::join!(fetch, driver);

        let state = ctrl.state();
        assert!(state.items().is_empty());
        assert!(!state.loaded);
        assert_eq!(notified.get(), 1, "only the loading transition was observed");

        ctrl.refresh().await;
        assert_eq!(ctrl.inner.api.requests().len(), 1, "disposed controller never fetches");
    }

    #[tokio::test]
    async fn test_observers_see_each_transition() {
        let api = MockApi::default();
        api.reply_list(Ok(page(&["a"], 1)));
        let ctrl = browse(api);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let log = Rc::clone(&seen);
        ctrl.subscribe(move |s| log.borrow_mut().push(s.loading));

        ctrl.refresh().await;

        assert_eq!(*seen.borrow(), vec![true, false]);
    }
}
