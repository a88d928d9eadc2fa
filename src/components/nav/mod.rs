//! Navigation bar with section links and the search form.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::config::APP_NAME;
use crate::models::AppRoute;

stylance::import_crate_style!(css, "src/components/nav/nav.module.css");

#[component]
pub fn NavBar(route: Memo<AppRoute>) -> impl IntoView {
    // Mirror the term of the current search route into the input.
    let term = RwSignal::new(String::new());
    Effect::new(move |_| {
        if let AppRoute::Search { term: current } = route.get() {
            term.set(current);
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let value = term.get_untracked().trim().to_string();
        AppRoute::Search { term: value }.push();
    };

    let link_class = move |section: &'static str| {
        move || {
            if route.with(AppRoute::section) == section {
                css::active
            } else {
                css::link
            }
        }
    };

    view! {
        <nav class=css::bar>
            <a class=css::brand href=AppRoute::Home.to_hash()>
                <Icon icon=ic::FILES />
                <span>{APP_NAME}</span>
            </a>

            <div class=css::links>
                <a class={link_class("home")} href=AppRoute::Home.to_hash()>
                    <Icon icon=ic::HOME />
                    <span>"Home"</span>
                </a>
                <a class={link_class("files")} href={AppRoute::Files { tags: vec![] }.to_hash()}>
                    <Icon icon=ic::FILE />
                    <span>"Files"</span>
                </a>
                <a class={link_class("about")} href=AppRoute::About.to_hash()>
                    <Icon icon=ic::INFO />
                    <span>"About"</span>
                </a>
            </div>

            <form class=css::search role="search" on:submit=on_submit>
                <input
                    class=css::searchInput
                    type="search"
                    placeholder="Search files"
                    aria-label="Search files"
                    prop:value=move || term.get()
                    on:input=move |ev| term.set(event_target_value(&ev))
                />
                <button class=css::searchButton type="submit" title="Search">
                    <Icon icon=ic::SEARCH />
                </button>
            </form>
        </nav>
    }
}
