//! Hooks binding controllers to the reactive graph.
//!
//! A controller lives as long as the component that called the hook. Its
//! state is mirrored into an [`RwSignal`] through `subscribe`, and it is
//! disposed on cleanup so late responses never reach an unmounted view.

use std::future::Future;

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::core::{DetailState, FileDetailController, ListController, ListMode, ListState};
use crate::utils::{HttpApi, dom};

fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext must be provided at root")
}

// ============================================================================
// List views
// ============================================================================

/// Reactive handle to a [`ListController`].
#[derive(Clone, Copy)]
pub struct ListHandle {
    /// Latest controller state.
    pub state: RwSignal<ListState>,
    controller: StoredValue<ListController<HttpApi>, LocalStorage>,
}

impl ListHandle {
    fn spawn<F, Fut>(&self, task: F)
    where
        F: FnOnce(ListController<HttpApi>) -> Fut,
        Fut: Future<Output = ()> + 'static,
    {
        if let Some(controller) = self.controller.try_get_value() {
            spawn_local(task(controller));
        }
    }

    pub fn refresh(&self) {
        self.spawn(|c| async move { c.refresh().await });
    }

    pub fn toggle_tag(&self, tag: String) {
        self.spawn(move |c| async move { c.toggle_tag(&tag).await });
    }

    /// Drop every tag filter and refetch the first page.
    pub fn clear_tags(&self) {
        self.spawn(|c| async move { c.clear_tags().await });
    }

    pub fn go_to_page(&self, page_index: u64) {
        dom::scroll_to_top();
        self.spawn(move |c| async move { c.go_to_page(page_index).await });
    }

    pub fn submit_search(&self, term: String) {
        self.spawn(move |c| async move { c.submit_search(&term).await });
    }
}

/// Create a list controller for the calling component.
///
/// `tags` preselects filters before the first fetch. Nothing is fetched
/// until the caller asks for it.
pub fn use_list(mode: ListMode, tags: Vec<String>) -> ListHandle {
    let ctx = use_app_context();
    let controller = ListController::new(HttpApi::new(ctx.config.clone()), mode, &ctx.config);
    controller.select_tags(tags);

    let state = RwSignal::new(controller.state());
    controller.subscribe(move |s| {
        let _ = state.try_set(s.clone());
    });

    let stored = StoredValue::new_local(controller);
    on_cleanup(move || {
        stored.try_with_value(|c| c.dispose());
    });

    ListHandle {
        state,
        controller: stored,
    }
}

// ============================================================================
// Detail view
// ============================================================================

/// Reactive handle to a [`FileDetailController`].
#[derive(Clone, Copy)]
pub struct DetailHandle {
    pub state: RwSignal<DetailState>,
    controller: StoredValue<FileDetailController<HttpApi>, LocalStorage>,
}

impl DetailHandle {
    pub fn load(&self) {
        if let Some(c) = self.controller.try_get_value() {
            spawn_local(async move { c.load().await });
        }
    }

    pub fn set_email(&self, email: &str) {
        self.controller.try_with_value(|c| c.set_email(email));
    }

    pub fn pull(&self) {
        if let Some(c) = self.controller.try_get_value() {
            spawn_local(async move {
                if let Err(err) = c.pull().await {
                    tracing::debug!(error = %err, "pull not sent");
                }
            });
        }
    }

    /// Start a browser download of the file if it is available.
    pub fn download(&self) {
        let Some(url) = self.controller.try_with_value(|c| c.download_url()).flatten() else {
            return;
        };
        let name = self
            .state
            .with_untracked(|s| s.file.as_ref().map(|f| f.file_name.clone()))
            .unwrap_or_default();
        if !dom::trigger_download(&url, &name) {
            tracing::warn!(%url, "could not start download");
        }
    }
}

/// Create a detail controller for `uri` and load it.
pub fn use_file_detail(uri: String) -> DetailHandle {
    let ctx = use_app_context();
    let controller = FileDetailController::new(HttpApi::new(ctx.config), uri);

    let state = RwSignal::new(controller.state());
    controller.subscribe(move |s| {
        let _ = state.try_set(s.clone());
    });

    let stored = StoredValue::new_local(controller);
    on_cleanup(move || {
        stored.try_with_value(|c| c.dispose());
    });

    let handle = DetailHandle {
        state,
        controller: stored,
    };
    handle.load();
    handle
}
