//! File cards of a listing page.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::css;
use super::pagination::Pagination;
use crate::components::hooks::ListHandle;
use crate::components::icons as ic;
use crate::components::status::StatusBadge;
use crate::core::ListState;
use crate::models::{AppRoute, FileStatus, FileSummary};
use crate::utils::format::{format_found, format_size};

#[component]
pub fn FilesTable(list: ListHandle) -> impl IntoView {
    let items = Memo::new(move |_| list.state.with(|s| s.items().to_vec()));
    let total = Memo::new(move |_| list.state.with(|s| s.result.total));
    let empty = Memo::new(move |_| list.state.with(ListState::is_empty));

    view! {
        <Show
            when=move || !empty.get()
            fallback=|| view! { <h2 class=css::muted>"No files available"</h2> }
        >
            <h2 class=css::found>{move || format_found(total.get())}</h2>
            <div class=css::cards>
                <For
                    each=move || items.get()
                    key=card_key
                    children=|file| view! { <FileCard file=file /> }
                />
            </div>
            <Pagination list=list />
        </Show>
    }
}

/// Identity of a rendered card. Any displayed field that can change between
/// fetches is part of it, so a refetched file is rebuilt rather than reused.
fn card_key(file: &FileSummary) -> (String, FileStatus, u64, u32) {
    (file.uri.clone(), file.status.clone(), file.downloads, file.version)
}

#[component]
fn FileCard(file: FileSummary) -> impl IntoView {
    let href = AppRoute::File {
        uri: file.uri.clone(),
    }
    .to_hash();
    let tags = file.tags.join(", ");

    view! {
        <article class=css::card>
            <header class=css::cardHeader>
                <StatusBadge status=file.status.clone() />
                <span class=css::muted>{format!("v{}", file.version)}</span>
            </header>
            <h3 class=css::cardTitle>
                <Icon icon=ic::FILE />
                <a href=href>{file.file_name.clone()}</a>
            </h3>
            <dl class=css::meta>
                <dt>"Size"</dt>
                <dd>{format_size(file.size)}</dd>
                <dt>"Published"</dt>
                <dd>{file.publishing_date.clone()}</dd>
                <dt>"Downloads"</dt>
                <dd>{file.downloads.to_string()}</dd>
            </dl>
            {(!tags.is_empty()).then(|| view! {
                <p class=css::cardTags>
                    <Icon icon=ic::TAG />
                    <span>{tags}</span>
                </p>
            })}
        </article>
    }
}
