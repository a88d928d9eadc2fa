//! Application router component.
//!
//! Handles URL-based routing with hash history, so the app can be served
//! from any path without server-side rewrites. Uses native hashchange
//! events instead of leptos_router.
//!
//! # Page lifetime
//!
//! A page is remounted when its [`Page`] changes. The search page survives
//! term changes so that a new term is submitted to the mounted controller;
//! every other route change builds a fresh page and controller.

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::components::detail::FileDetailPage;
use crate::components::files::{FilesPage, SearchPage};
use crate::components::home::{AboutPage, HomePage, NotFoundPage};
use crate::components::nav::NavBar;
use crate::models::AppRoute;

/// Mounted page, derived from the route.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Page {
    Home,
    Files(Vec<String>),
    File(String),
    Search,
    About,
    NotFound(String),
}

impl From<&AppRoute> for Page {
    fn from(route: &AppRoute) -> Self {
        match route {
            AppRoute::Home => Self::Home,
            AppRoute::Files { tags } => Self::Files(tags.clone()),
            AppRoute::File { uri } => Self::File(uri.clone()),
            AppRoute::Search { .. } => Self::Search,
            AppRoute::About => Self::About,
            AppRoute::NotFound(path) => Self::NotFound(path.clone()),
        }
    }
}

/// Main application router.
///
/// - `#/` → Home (tag catalog)
/// - `#/files?tags=a` → File listing
/// - `#/files/<uri>` → File detail
/// - `#/search?file=<term>` → Search results
/// - `#/about` → About
#[component]
pub fn AppRouter() -> impl IntoView {
    // Create route signal from current URL hash
    let route = RwSignal::new(AppRoute::current());

    // Set up hashchange event listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            let next = AppRoute::current();
            tracing::debug!(route = %next.to_hash(), "navigate");
            route.set(next);
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    let route_memo = Memo::new(move |_| route.get());
    let page = Memo::new(move |_| route.with(|r| Page::from(r)));
    let search_term = Memo::new(move |_| {
        route.with(|r| match r {
            AppRoute::Search { term } => term.clone(),
            _ => String::new(),
        })
    });

    view! {
        <NavBar route=route_memo />
        <main>
            {move || match page.get() {
                Page::Home => view! { <HomePage /> }.into_any(),
                Page::Files(tags) => view! { <FilesPage tags=tags /> }.into_any(),
                Page::File(uri) => view! { <FileDetailPage uri=uri /> }.into_any(),
                Page::Search => view! { <SearchPage term=search_term /> }.into_any(),
                Page::About => view! { <AboutPage /> }.into_any(),
                Page::NotFound(path) => view! { <NotFoundPage path=path /> }.into_any(),
            }}
        </main>
    }
}
