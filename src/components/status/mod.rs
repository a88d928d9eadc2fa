//! File status badge.
//!
//! The single place a [`FileStatus`] is rendered, so listings, search
//! results and the detail page all label statuses identically.

use leptos::prelude::*;

use crate::core::status::present;
use crate::models::FileStatus;

stylance::import_crate_style!(css, "src/components/status/status.module.css");

#[component]
pub fn StatusBadge(status: FileStatus) -> impl IntoView {
    let badge = present(&status);

    view! {
        <span
            class=css::badge
            data-severity=badge.severity.as_str()
            title=status.as_str().to_string()
        >
            {badge.label}
        </span>
    }
}
