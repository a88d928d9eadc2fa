//! Listing pages: the browsable file list and search results.
//!
//! Both pages drive a [`ListController`](crate::core::ListController)
//! through [`use_list`] and share the same layout: tag filters on the side,
//! file cards with pagination in the main column.

mod pagination;
mod table;
mod tags;

use leptos::prelude::*;

use crate::components::hooks::{ListHandle, use_list};
use crate::components::notice::{ErrorBlock, Loading};
use crate::core::{ListMode, ListState};
use table::FilesTable;
use tags::TagsTable;

stylance::import_crate_style!(css, "src/components/files/files.module.css");

/// `#/files`: every published file, optionally prefiltered by tags.
#[component]
pub fn FilesPage(tags: Vec<String>) -> impl IntoView {
    let list = use_list(ListMode::Browse, tags);
    list.refresh();

    view! {
        <ListLayout list=list what="files">
            <h1 class=css::title>"Files"</h1>
        </ListLayout>
    }
}

/// `#/search?file=<term>`: the page stays mounted while the term changes,
/// each new term is submitted as a fresh search.
#[component]
pub fn SearchPage(term: Memo<String>) -> impl IntoView {
    let list = use_list(ListMode::Search, Vec::new());
    Effect::new(move |_| list.submit_search(term.get()));

    view! {
        <ListLayout list=list what="files">
            <h1 class=css::title>
                {move || {
                    let term = term.get();
                    if term.is_empty() {
                        "Search".to_string()
                    } else {
                        format!("Results for \"{}\"", term)
                    }
                }}
            </h1>
        </ListLayout>
    }
}

#[component]
fn ListLayout(list: ListHandle, what: &'static str, children: Children) -> impl IntoView {
    let first_load = move || list.state.with(|s| s.loading && !s.has_results());
    let has_results = move || list.state.with(ListState::has_results);
    let error = move || list.state.with(|s| s.error.clone());

    view! {
        <div class=css::layout>
            <TagsTable list=list />
            <section class=css::content>
                {children()}
                {move || error().map(|e| view! { <ErrorBlock error=e what=what /> })}
                <Show when=first_load>
                    <Loading />
                </Show>
                <Show when=has_results>
                    <FilesTable list=list />
                </Show>
            </section>
        </div>
    }
}
