//! Backend seam.
//!
//! Controllers talk to the publishing backend only through [`FileApi`].
//! The browser implementation lives in [`crate::utils::fetch`]; tests use an
//! in-memory implementation.

use super::error::{ErrorState, FetchError};
use super::query::{ListMode, ListQuery};
use crate::models::{FileSummary, ListResult, TagCount};

/// Operations of the publishing REST API consumed by the front end.
///
/// Futures are polled on the single browser event loop, so they are not
/// required to be `Send`.
#[allow(async_fn_in_trait)]
pub trait FileApi {
    /// `GET /api/list` or `GET /api/search` with the query's parameters.
    async fn fetch_list(&self, mode: ListMode, query: &ListQuery) -> Result<ListResult, FetchError>;

    /// `GET /api/tag/list`
    async fn fetch_tags(&self) -> Result<Vec<TagCount>, FetchError>;

    /// `GET /api/view/:uri`
    async fn fetch_file(&self, uri: &str) -> Result<FileSummary, FetchError>;

    /// `POST /api/pull/:uri`, returning the server's acknowledgement.
    async fn pull(&self, uri: &str, email: Option<&str>) -> Result<String, FetchError>;

    /// Absolute URL of `GET /api/download/:uri`.
    fn download_url(&self, uri: &str) -> String;

    /// Abort the outstanding GET issued through this instance, if any.
    fn cancel_pending(&self) {}
}

/// Tag catalog of the landing page, with the failure ready for display.
pub async fn tag_catalog<A: FileApi>(api: &A) -> Result<Vec<TagCount>, ErrorState> {
    api.fetch_tags().await.map_err(|err| {
        tracing::warn!(error = %err, "tag catalog fetch failed");
        ErrorState::from(&err)
    })
}

#[cfg(test)]
pub(crate) mod mock {
    use std::cell::{Cell, RefCell};
    use std::collections::VecDeque;

    use tokio::sync::oneshot;

    use super::*;

    type Reply<T> = Result<T, FetchError>;

    enum Queued<T> {
        Ready(Reply<T>),
        Deferred(oneshot::Receiver<Reply<T>>),
    }

    impl<T> Queued<T> {
        async fn resolve(self) -> Reply<T> {
            match self {
                Self::Ready(reply) => reply,
                Self::Deferred(rx) => rx.await.unwrap_or(Err(FetchError::Aborted)),
            }
        }
    }

    /// Scripted backend. Replies are consumed in request order; a request
    /// with nothing queued fails with a network error.
    #[derive(Default)]
    pub struct MockApi {
        pub requests: RefCell<Vec<String>>,
        pub cancels: Cell<usize>,
        lists: RefCell<VecDeque<Queued<ListResult>>>,
        tags: RefCell<VecDeque<Reply<Vec<TagCount>>>>,
        files: RefCell<VecDeque<Reply<FileSummary>>>,
        pulls: RefCell<VecDeque<Reply<String>>>,
    }

    impl MockApi {
        pub fn reply_list(&self, reply: Reply<ListResult>) {
            self.lists.borrow_mut().push_back(Queued::Ready(reply));
        }

        /// Queue a list reply that resolves when the returned sender fires.
        pub fn defer_list(&self) -> oneshot::Sender<Reply<ListResult>> {
            let (tx, rx) = oneshot::channel();
            self.lists.borrow_mut().push_back(Queued::Deferred(rx));
            tx
        }

        pub fn reply_tags(&self, reply: Reply<Vec<TagCount>>) {
            self.tags.borrow_mut().push_back(reply);
        }

        pub fn reply_file(&self, reply: Reply<FileSummary>) {
            self.files.borrow_mut().push_back(reply);
        }

        pub fn reply_pull(&self, reply: Reply<String>) {
            self.pulls.borrow_mut().push_back(reply);
        }

        pub fn requests(&self) -> Vec<String> {
            self.requests.borrow().clone()
        }

        fn record(&self, request: String) {
            self.requests.borrow_mut().push(request);
        }
    }

    fn unscripted<T>() -> Reply<T> {
        Err(FetchError::Network("no reply scripted".to_string()))
    }

    impl FileApi for MockApi {
        async fn fetch_list(&self, mode: ListMode, query: &ListQuery) -> Reply<ListResult> {
            self.record(format!("GET {}", query.to_path(mode)));
            let queued = self.lists.borrow_mut().pop_front();
            match queued {
                Some(queued) => queued.resolve().await,
                None => unscripted(),
            }
        }

        async fn fetch_tags(&self) -> Reply<Vec<TagCount>> {
            self.record("GET /api/tag/list".to_string());
            let reply = self.tags.borrow_mut().pop_front();
            reply.unwrap_or_else(unscripted)
        }

        async fn fetch_file(&self, uri: &str) -> Reply<FileSummary> {
            self.record(format!("GET /api/view/{uri}"));
            let reply = self.files.borrow_mut().pop_front();
            reply.unwrap_or_else(unscripted)
        }

        async fn pull(&self, uri: &str, email: Option<&str>) -> Reply<String> {
            self.record(format!("POST /api/pull/{uri} email={}", email.unwrap_or("-")));
            let reply = self.pulls.borrow_mut().pop_front();
            reply.unwrap_or_else(unscripted)
        }

        fn download_url(&self, uri: &str) -> String {
            format!("/api/download/{uri}")
        }

        fn cancel_pending(&self) {
            self.cancels.set(self.cancels.get() + 1);
        }
    }
}
