//! Tag filter sidebar.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::css;
use crate::components::hooks::ListHandle;
use crate::components::icons as ic;

/// Tags of the current result, in server order, with a checkbox each.
#[component]
pub fn TagsTable(list: ListHandle) -> impl IntoView {
    let tags = Memo::new(move |_| list.state.with(|s| s.tags().to_vec()));
    let any_selected = Memo::new(move |_| list.state.with(|s| !s.query.tags.is_empty()));

    view! {
        <aside class=css::tags>
            <h2 class=css::tagsTitle>
                <Icon icon=ic::TAG />
                <span>"Tags"</span>
            </h2>

            <Show
                when=move || tags.with(|t| !t.is_empty())
                fallback=|| view! { <p class=css::muted>"No tag found"</p> }
            >
                <ul class=css::tagList>
                    <For
                        each=move || tags.get()
                        key=|t| (t.tag.clone(), t.count)
                        children=move |t| {
                            let tag = t.tag.clone();
                            let checked = {
                                let tag = tag.clone();
                                move || list.state.with(|s| s.query.tags.is_selected(&tag))
                            };
                            view! {
                                <li>
                                    <label class=css::tag>
                                        <input
                                            type="checkbox"
                                            prop:checked=checked
                                            on:change=move |_| list.toggle_tag(tag.clone())
                                        />
                                        <b>{t.tag}</b>
                                        <span class=css::muted>{format!("({})", t.count)}</span>
                                    </label>
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>

            <Show when=move || any_selected.get()>
                <button class=css::clearButton on:click=move |_| list.clear_tags()>
                    <Icon icon=ic::CLOSE />
                    <span>"Clear filters"</span>
                </button>
            </Show>
        </aside>
    }
}
