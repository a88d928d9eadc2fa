//! Page selector under a listing.

use std::collections::BTreeSet;

use leptos::prelude::*;
use leptos_icons::Icon;

use super::css;
use crate::components::hooks::ListHandle;
use crate::components::icons as ic;

/// Pages always shown at each end of the selector.
const EDGE_PAGES: u64 = 1;
/// Pages shown on each side of the current one.
const NEIGHBOR_PAGES: u64 = 2;

/// One entry of the page selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageLink {
    Page(u64),
    Gap,
}

/// Zero-based pages to offer for `page_count` pages around `current`.
///
/// A gap hiding a single page is replaced by that page.
pub fn page_window(current: u64, page_count: u64) -> Vec<PageLink> {
    if page_count == 0 {
        return Vec::new();
    }
    let last = page_count - 1;
    let current = current.min(last);

    let mut pages = BTreeSet::new();
    pages.extend(0..EDGE_PAGES.min(page_count));
    pages.extend(current.saturating_sub(NEIGHBOR_PAGES)..=(current + NEIGHBOR_PAGES).min(last));
    pages.extend(page_count.saturating_sub(EDGE_PAGES)..page_count);

    let mut links = Vec::with_capacity(pages.len() + 2);
    let mut previous: Option<u64> = None;
    for page in pages {
        match previous {
            Some(prev) if page == prev + 2 => links.push(PageLink::Page(prev + 1)),
            Some(prev) if page > prev + 2 => links.push(PageLink::Gap),
            _ => {}
        }
        links.push(PageLink::Page(page));
        previous = Some(page);
    }
    links
}

/// Hidden while the listing fits on a single page (or is empty).
#[component]
pub fn Pagination(list: ListHandle) -> impl IntoView {
    let page_count = Memo::new(move |_| list.state.with(|s| s.page_count));
    let current = Memo::new(move |_| list.state.with(|s| s.current_page()));

    let go_previous = move |_| {
        let page = current.get_untracked();
        if page > 0 {
            list.go_to_page(page - 1);
        }
    };
    let go_next = move |_| {
        let page = current.get_untracked();
        if page + 1 < page_count.get_untracked() {
            list.go_to_page(page + 1);
        }
    };

    view! {
        <Show when=move || { page_count.get() > 1 }>
            <nav class=css::pagination aria-label="Pages">
                <button
                    class=css::pageButton
                    title="Previous page"
                    disabled=move || current.get() == 0
                    on:click=go_previous
                >
                    <Icon icon=ic::CHEVRON_LEFT />
                </button>

                {move || {
                    let selected = current.get();
                    page_window(selected, page_count.get())
                        .into_iter()
                        .map(|link| match link {
                            PageLink::Page(page) => view! {
                                <button
                                    class={if page == selected { css::pageCurrent } else { css::pageButton }}
                                    aria-current={(page == selected).then_some("page")}
                                    on:click=move |_| list.go_to_page(page)
                                >
                                    {(page + 1).to_string()}
                                </button>
                            }
                            .into_any(),
                            PageLink::Gap => view! { <span class=css::pageGap>"..."</span> }.into_any(),
                        })
                        .collect_view()
                }}

                <button
                    class=css::pageButton
                    title="Next page"
                    disabled=move || { current.get() + 1 >= page_count.get() }
                    on:click=go_next
                >
                    <Icon icon=ic::CHEVRON_RIGHT />
                </button>
            </nav>
        </Show>
    }
}
