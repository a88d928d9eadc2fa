//! File detail controller: metadata, download link and pull requests.

use std::cell::RefCell;
use std::rc::Rc;

use super::api::FileApi;
use super::error::{ErrorState, ValidationError};
use super::sequence::FetchSequence;
use super::validate;
use crate::models::FileSummary;

/// Progress of a pull request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum PullState {
    #[default]
    Idle,
    Sending,
    /// Server acknowledgement. The file status only changes on reload.
    Sent(String),
    Failed(ErrorState),
}

/// Everything the detail view renders.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DetailState {
    pub uri: String,
    pub file: Option<FileSummary>,
    pub loading: bool,
    /// Error of the latest load. A previously loaded file stays in `file`.
    pub error: Option<ErrorState>,
    /// Raw content of the notification email field.
    pub email: String,
    /// Why the current email blocks submission, if it does.
    pub email_error: Option<ValidationError>,
    pub pull: PullState,
}

impl DetailState {
    /// The pull button is enabled. A sent request keeps it disabled until
    /// the file is loaded again.
    pub fn can_pull(&self) -> bool {
        self.email_error.is_none()
            && matches!(self.pull, PullState::Idle | PullState::Failed(_))
            && self.file.as_ref().is_some_and(|f| f.status.can_pull())
    }
}

type Observer = Box<dyn Fn(&DetailState)>;

struct DetailInner<A> {
    api: A,
    state: RefCell<DetailState>,
    sequence: FetchSequence,
    observers: RefCell<Vec<Observer>>,
}

/// Controller of one file detail view.
pub struct FileDetailController<A> {
    inner: Rc<DetailInner<A>>,
}

impl<A> Clone for FileDetailController<A> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<A: FileApi> FileDetailController<A> {
    pub fn new(api: A, uri: impl Into<String>) -> Self {
        Self {
            inner: Rc::new(DetailInner {
                api,
                state: RefCell::new(DetailState {
                    uri: uri.into(),
                    ..Default::default()
                }),
                sequence: FetchSequence::new(),
                observers: RefCell::new(Vec::new()),
            }),
        }
    }

    pub fn state(&self) -> DetailState {
        self.inner.state.borrow().clone()
    }

    pub fn subscribe(&self, observer: impl Fn(&DetailState) + 'static) {
        if self.inner.sequence.is_disposed() {
            return;
        }
        self.inner.observers.borrow_mut().push(Box::new(observer));
    }

    /// Fetch the file metadata, superseding any outstanding load.
    pub async fn load(&self) {
        if self.inner.sequence.is_disposed() {
            return;
        }
        self.inner.api.cancel_pending();
        let token = self.inner.sequence.next();
        let uri = self.inner.state.borrow().uri.clone();
        self.update(|s| s.loading = true);

        let result = self.inner.api.fetch_file(&uri).await;
        if !self.inner.sequence.is_current(token) {
            tracing::debug!(token = token.get(), %uri, "discarding stale file response");
            return;
        }

        match result {
            Ok(mut file) => {
                if file.uri.is_empty() {
                    file.uri = uri;
                }
                self.update(|s| {
                    s.file = Some(file);
                    s.loading = false;
                    s.error = None;
                    s.pull = PullState::Idle;
                });
            }
            Err(err) => {
                tracing::warn!(error = %err, %uri, "file fetch failed");
                self.update(|s| {
                    s.loading = false;
                    s.error = Some(ErrorState::from(&err));
                });
            }
        }
    }

    /// Update the notification email and re-validate it.
    pub fn set_email(&self, email: &str) {
        let email_error = validate::notification_email(email).err();
        self.update(|s| {
            s.email = email.to_string();
            s.email_error = email_error;
        });
    }

    /// Outcome of validating the current email field: the address to
    /// notify, `None` when left blank.
    pub fn email_validation(&self) -> Result<Option<String>, ValidationError> {
        validate::notification_email(&self.inner.state.borrow().email)
    }

    /// Ask the backend to retrieve an archived file.
    ///
    /// Validation failures return without contacting the server.
    pub async fn pull(&self) -> Result<(), ValidationError> {
        let email = self.email_validation()?;
        let uri = {
            let state = self.inner.state.borrow();
            let file = state.file.as_ref().ok_or(ValidationError::NotLoaded)?;
            if !file.status.can_pull() {
                return Err(ValidationError::NotPullable(file.status.clone()));
            }
            if matches!(state.pull, PullState::Sending | PullState::Sent(_)) {
                return Ok(());
            }
            state.uri.clone()
        };

        self.update(|s| s.pull = PullState::Sending);
        let result = self.inner.api.pull(&uri, email.as_deref()).await;
        if self.inner.sequence.is_disposed() {
            return Ok(());
        }

        match result {
            Ok(message) => {
                tracing::info!(%uri, notify = email.is_some(), "pull requested");
                self.update(|s| s.pull = PullState::Sent(message));
            }
            Err(err) => {
                tracing::warn!(error = %err, %uri, "pull request failed");
                self.update(|s| s.pull = PullState::Failed(ErrorState::from(&err)));
            }
        }
        Ok(())
    }

    /// Download link of the file, or `None` while it has no content.
    pub fn download_url(&self) -> Option<String> {
        let state = self.inner.state.borrow();
        state
            .file
            .as_ref()
            .filter(|f| f.status.can_download())
            .map(|_| self.inner.api.download_url(&state.uri))
    }

    /// Tear down: ignore every later completion and drop observers.
    pub fn dispose(&self) {
        if self.inner.sequence.is_disposed() {
            return;
        }
        self.inner.sequence.dispose();
        self.inner.api.cancel_pending();
        self.inner.observers.borrow_mut().clear();
    }

    fn update(&self, f: impl FnOnce(&mut DetailState)) {
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
    use super::*;
    use crate::core::api::mock::MockApi;
    use crate::core::error::FetchError;
    use crate::models::FileStatus;

    fn file(status: FileStatus) -> FileSummary {
        FileSummary {
            file_name: "reads.fastq.gz".to_string(),
            status,
            ..Default::default()
        }
    }

    async fn loaded(status: FileStatus) -> FileDetailController<MockApi> {
        let api = MockApi::default();
        api.reply_file(Ok(file(status)));
        let ctrl = FileDetailController::new(api, "f00d");
        ctrl.load().await;
        ctrl
    }

    #[tokio::test]
    async fn test_load_fills_uri_from_route() {
        let ctrl = loaded(FileStatus::Available).await;
        let state = ctrl.state();
        assert_eq!(state.file.unwrap().uri, "f00d");
        assert!(!state.loading);
        assert_eq!(ctrl.inner.api.requests(), vec!["GET /api/view/f00d"]);
    }

    #[tokio::test]
    async fn test_load_error_keeps_previous_file() {
        let ctrl = loaded(FileStatus::Available).await;
        ctrl.inner.api.reply_file(Err(FetchError::Http {
            status: 404,
            message: "NOT FOUND".to_string(),
        }));

        ctrl.load().await;

        let state = ctrl.state();
        assert!(state.file.is_some());
        assert_eq!(state.error.unwrap().code, Some(404));
    }

    #[tokio::test]
    async fn test_invalid_email_blocks_pull_without_network() {
        let ctrl = loaded(FileStatus::Pullable).await;
        ctrl.set_email("not-an-email");

        assert!(!ctrl.state().can_pull());
        let err = ctrl.pull().await.unwrap_err();

        assert_eq!(err, ValidationError::InvalidEmail("not-an-email".to_string()));
        assert_eq!(ctrl.inner.api.requests(), vec!["GET /api/view/f00d"]);
        assert_eq!(ctrl.state().pull, PullState::Idle);
    }

    #[tokio::test]
    async fn test_email_validation() {
        let ctrl = loaded(FileStatus::Pullable).await;
        assert_eq!(ctrl.email_validation(), Ok(None));

        ctrl.set_email("  Me@Example.org ");
        assert_eq!(ctrl.state().email_error, None);
        assert!(ctrl.email_validation().unwrap().is_some());

        ctrl.set_email("me@");
        assert!(ctrl.state().email_error.is_some());
        assert!(ctrl.email_validation().is_err());
    }

    #[tokio::test]
    async fn test_pull_with_optional_email() {
        let ctrl = loaded(FileStatus::Pullable).await;
        ctrl.inner.api.reply_pull(Ok("Ok".to_string()));
        ctrl.inner.api.reply_pull(Ok("Ok".to_string()));

        assert!(ctrl.state().can_pull());
        ctrl.pull().await.unwrap();
        ctrl.inner.api.reply_file(Ok(file(FileStatus::Pullable)));
        ctrl.load().await;
        ctrl.set_email("me@example.org");
        ctrl.pull().await.unwrap();

        let requests = ctrl.inner.api.requests();
        assert_eq!(requests[1], "POST /api/pull/f00d email=-");
        assert_eq!(requests[3], "POST /api/pull/f00d email=me@example.org");
        assert_eq!(ctrl.state().pull, PullState::Sent("Ok".to_string()));
        assert_eq!(ctrl.state().file.unwrap().status, FileStatus::Pullable);
    }

    #[tokio::test]
    async fn test_sent_pull_is_not_repeated_until_reload() {
        let ctrl = loaded(FileStatus::Pullable).await;
        ctrl.inner.api.reply_pull(Ok("Ok".to_string()));

        ctrl.pull().await.unwrap();
        assert!(!ctrl.state().can_pull());
        ctrl.pull().await.unwrap();

        assert_eq!(
            ctrl.inner.api.requests(),
            vec!["GET /api/view/f00d", "POST /api/pull/f00d email=-"]
        );

        ctrl.inner.api.reply_file(Ok(file(FileStatus::Pullable)));
        ctrl.load().await;
        assert_eq!(ctrl.state().pull, PullState::Idle);
        assert!(ctrl.state().can_pull());
    }

    #[tokio::test]
    async fn test_pull_requires_pullable_file() {
        let ctrl = loaded(FileStatus::Available).await;
        assert!(!ctrl.state().can_pull());
        assert_eq!(
            ctrl.pull().await,
            Err(ValidationError::NotPullable(FileStatus::Available))
        );
        assert_eq!(ctrl.inner.api.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_pull_server_error_is_reported() {
        let ctrl = loaded(FileStatus::Pullable).await;
        ctrl.inner.api.reply_pull(Err(FetchError::Http {
            status: 400,
            message: "Not managed by Baricadr".to_string(),
        }));

        ctrl.pull().await.unwrap();

        let PullState::Failed(error) = ctrl.state().pull else {
            panic!("pull should have failed");
        };
        assert_eq!(error.code, Some(400));
    }

    #[tokio::test]
    async fn test_download_url_only_when_available() {
        assert_eq!(
            loaded(FileStatus::Available).await.download_url().as_deref(),
            Some("/api/download/f00d")
        );
        assert_eq!(loaded(FileStatus::Pulling).await.download_url(), None);
    }

    #[tokio::test]
    async fn test_disposed_controller_ignores_load() {
        let api = MockApi::default();
        let ctrl = FileDetailController::new(api, "f00d");
        ctrl.dispose();
        ctrl.load().await;
        assert!(ctrl.inner.api.requests().is_empty());
        assert_eq!(ctrl.inner.api.cancels.get(), 1);
    }
}
