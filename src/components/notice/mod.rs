//! Error and loading notices shared by the pages.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::core::ErrorState;

stylance::import_crate_style!(css, "src/components/notice/notice.module.css");

/// "Error <code> fetching <what>: <message>"
#[component]
pub fn ErrorBlock(error: ErrorState, #[prop(into)] what: String) -> impl IntoView {
    view! {
        <div class=css::error role="alert">
            <span class=css::icon><Icon icon=ic::ALERT /></span>
            <span>
                "Error " <i>{error.code_label()}</i> " fetching " {what} ": "
                <i>{error.message}</i>
            </span>
        </div>
    }
}

#[component]
pub fn Loading(#[prop(into, optional)] label: Option<String>) -> impl IntoView {
    view! {
        <div class=css::loading aria-busy="true">
            {label.unwrap_or_else(|| "Loading...".to_string())}
        </div>
    }
}
