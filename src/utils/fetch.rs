//! HTTP transport for the publishing API.
//!
//! [`HttpApi`] implements [`FileApi`] on top of `gloo-net`. Every request is
//! raced against [`FETCH_TIMEOUT_MS`] through an `AbortController`, and the
//! most recent GET can be aborted with [`FileApi::cancel_pending`].

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_net::http::{Request, Response};
use gloo_timers::callback::Timeout;
use serde::de::DeserializeOwned;
use web_sys::AbortController;

use crate::config::{ClientConfig, FETCH_TIMEOUT_MS};
use crate::core::{FetchError, FileApi, ListMode, ListQuery};
use crate::models::{
    ErrorBody, FileSummary, ListResponse, ListResult, PullRequest, PullResponse, TagCount,
    TagListResponse, ViewResponse,
};

// =============================================================================
// Abort Handling
// =============================================================================

/// Abort controller armed with a timeout.
///
/// Dropping the guard cancels the timer; the request itself is only aborted
/// by the timer or an explicit [`AbortController::abort`].
struct AbortGuard {
    controller: AbortController,
    timed_out: Rc<Cell<bool>>,
    _timer: Timeout,
}

impl AbortGuard {
    fn arm(timeout_ms: u32) -> Result<Self, FetchError> {
        let controller = AbortController::new()
            .map_err(|_| FetchError::Network("AbortController unavailable".to_string()))?;
        let timed_out = Rc::new(Cell::new(false));

        let timer = {
            let controller = controller.clone();
            let timed_out = Rc::clone(&timed_out);
            Timeout::new(timeout_ms, move || {
                timed_out.set(true);
                controller.abort();
            })
        };

        Ok(Self {
            controller,
            timed_out,
            _timer: timer,
        })
    }

    /// Map a transport error, telling timeouts and cancellations apart.
    fn classify(&self, err: gloo_net::Error) -> FetchError {
        match err {
            gloo_net::Error::JsError(js) if js.name == "AbortError" => {
                if self.timed_out.get() {
                    FetchError::Timeout
                } else {
                    FetchError::Aborted
                }
            }
            gloo_net::Error::SerdeError(e) => FetchError::Decode(e.to_string()),
            other => FetchError::Network(other.to_string()),
        }
    }
}

// =============================================================================
// HttpApi
// =============================================================================

/// Browser implementation of [`FileApi`].
///
/// Give each controller its own instance: `cancel_pending` aborts the
/// latest GET issued through this instance only.
pub struct HttpApi {
    config: ClientConfig,
    inflight: RefCell<Option<(u64, AbortController)>>,
    next_id: Cell<u64>,
}

impl HttpApi {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            inflight: RefCell::new(None),
            next_id: Cell::new(0),
        }
    }

    /// GET `path` and decode a JSON body. Supersedes the previous GET.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let url = self.config.api_url(path);
        let guard = AbortGuard::arm(FETCH_TIMEOUT_MS)?;

        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        if let Some((_, previous)) = self
            .inflight
            .replace(Some((id, guard.controller.clone())))
        {
            previous.abort();
        }

        tracing::trace!(%url, "GET");
        let signal = guard.controller.signal();
        let result = match Request::get(&url).abort_signal(Some(&signal)).send().await {
            Ok(response) => read_json(response, &guard).await,
            Err(err) => Err(guard.classify(err)),
        };

        let mut inflight = self.inflight.borrow_mut();
        if inflight.as_ref().is_some_and(|(current, _)| *current == id) {
            *inflight = None;
        }
        result
    }
}

/// Decode a 2xx JSON body, or turn the response into [`FetchError::Http`].
async fn read_json<T: DeserializeOwned>(
    response: Response,
    guard: &AbortGuard,
) -> Result<T, FetchError> {
    if !response.ok() {
        return Err(http_error(&response).await);
    }
    response.json::<T>().await.map_err(|e| guard.classify(e))
}

/// Build an HTTP error, preferring the server's `{error}`/`{message}` body
/// over the status text.
async fn http_error(response: &Response) -> FetchError {
    let status = response.status();
    let message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(ErrorBody::into_message)
        .unwrap_or_else(|| {
            let text = response.status_text();
            if text.is_empty() {
                format!("HTTP {}", status)
            } else {
                text
            }
        });
    FetchError::Http { status, message }
}

impl FileApi for HttpApi {
    async fn fetch_list(&self, mode: ListMode, query: &ListQuery) -> Result<ListResult, FetchError> {
        self.get_json::<ListResponse>(&query.to_path(mode))
            .await
            .map(ListResult::from)
    }

    async fn fetch_tags(&self) -> Result<Vec<TagCount>, FetchError> {
        self.get_json::<TagListResponse>("/api/tag/list")
            .await
            .map(|resp| resp.tags)
    }

    async fn fetch_file(&self, uri: &str) -> Result<FileSummary, FetchError> {
        self.get_json::<ViewResponse>(&format!("/api/view/{}", uri))
            .await
            .map(|resp| resp.file)
    }

    async fn pull(&self, uri: &str, email: Option<&str>) -> Result<String, FetchError> {
        let url = self.config.api_url(&format!("/api/pull/{}", uri));
        let guard = AbortGuard::arm(FETCH_TIMEOUT_MS)?;
        let body = PullRequest {
            email: email.map(str::to_string),
        };

        let signal = guard.controller.signal();
        let request = Request::post(&url)
            .abort_signal(Some(&signal))
            .json(&body)
            .map_err(|e| guard.classify(e))?;
        let response = request.send().await.map_err(|e| guard.classify(e))?;

        read_json::<PullResponse>(response, &guard)
            .await
            .map(|resp| resp.message.unwrap_or_else(|| "Pull requested".to_string()))
    }

    fn download_url(&self, uri: &str) -> String {
        self.config.api_url(&format!("/api/download/{}", uri))
    }

    fn cancel_pending(&self) {
        if let Some((_, controller)) = self.inflight.borrow_mut().take() {
            controller.abort();
        }
    }
}
