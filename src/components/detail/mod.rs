//! `#/files/<uri>`: metadata of one file, its other versions, and the
//! download and pull actions.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::hooks::{DetailHandle, use_file_detail};
use crate::components::icons as ic;
use crate::components::notice::{ErrorBlock, Loading};
use crate::components::status::StatusBadge;
use crate::core::{PullState, ValidationError};
use crate::models::{AppRoute, FileSummary, SiblingRef};
use crate::utils::format::format_size;

stylance::import_crate_style!(css, "src/components/detail/detail.module.css");

#[component]
pub fn FileDetailPage(uri: String) -> impl IntoView {
    let detail = use_file_detail(uri);
    let file = Memo::new(move |_| detail.state.with(|s| s.file.clone()));
    let first_load = move || detail.state.with(|s| s.loading && s.file.is_none());
    let error = move || detail.state.with(|s| s.error.clone());

    view! {
        <div class=css::page>
            {move || error().map(|e| view! { <ErrorBlock error=e what="file" /> })}
            <Show when=first_load>
                <Loading />
            </Show>
            {move || file.get().map(|f| view! { <FileInfo file=f detail=detail /> })}
        </div>
    }
}

#[component]
fn FileInfo(file: FileSummary, detail: DetailHandle) -> impl IntoView {
    let can_download = file.status.can_download();
    let pullable = file.status.can_pull();
    let owner = file
        .contact_or_owner()
        .map(|(label, value)| (label, value.to_string()));

    view! {
        <article class=css::file>
            <header class=css::header>
                <h1 class=css::title>
                    <Icon icon=ic::FILE />
                    <span>{file.file_name.clone()}</span>
                </h1>
                <div class=css::subtitle>
                    <StatusBadge status=file.status.clone() />
                    <span>{format!("Version {}", file.version)}</span>
                </div>
            </header>

            <dl class=css::meta>
                <dt>"Size"</dt>
                <dd>{format_size(file.size)}</dd>
                <dt>"Published"</dt>
                <dd>{file.publishing_date.clone()}</dd>
                <dt>"Downloads"</dt>
                <dd>{file.downloads.to_string()}</dd>
                {owner.map(|(label, value)| view! {
                    <dt>{label}</dt>
                    <dd class=css::iconValue><Icon icon=ic::USER />{value}</dd>
                })}
                {file.hash.clone().map(|hash| view! {
                    <dt>"MD5"</dt>
                    <dd class=css::iconValue><Icon icon=ic::HASH /><code>{hash}</code></dd>
                })}
                {(!file.tags.is_empty()).then(|| view! {
                    <dt>"Tags"</dt>
                    <dd class=css::tagLinks>
                        {file.tags.iter().map(|tag| view! {
                            <a href={AppRoute::Files { tags: vec![tag.clone()] }.to_hash()}>
                                {tag.clone()}
                            </a>
                        }).collect_view()}
                    </dd>
                })}
            </dl>

            {can_download.then(|| view! {
                <button class=css::primaryButton on:click=move |_| detail.download()>
                    <Icon icon=ic::DOWNLOAD />
                    <span>"Download"</span>
                </button>
            })}

            {pullable.then(|| view! { <PullForm detail=detail /> })}

            {(!file.siblings.is_empty()).then(|| view! {
                <Siblings siblings=file.siblings.clone() />
            })}
        </article>
    }
}

/// Email field and button requesting retrieval of an archived file.
#[component]
fn PullForm(detail: DetailHandle) -> impl IntoView {
    let email = move || detail.state.with(|s| s.email.clone());
    let email_error = move || {
        detail.state.with(|s| match &s.email_error {
            Some(err @ ValidationError::InvalidEmail(_)) => Some(err.to_string()),
            _ => None,
        })
    };
    let disabled = move || !detail.state.with(|s| s.can_pull());
    let pull = move || detail.state.with(|s| s.pull.clone());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        detail.pull();
    };

    view! {
        <form class=css::pull on:submit=on_submit>
            <p class=css::hint>
                "This file is archived. Request it back, optionally leaving an email address "
                "to be notified when it is available."
            </p>
            <div class=css::pullRow>
                <input
                    class=css::emailInput
                    type="email"
                    placeholder="Notification email (optional)"
                    aria-label="Notification email"
                    aria-invalid=move || email_error().is_some().to_string()
                    prop:value=email
                    on:input=move |ev| detail.set_email(&event_target_value(&ev))
                />
                <button class=css::primaryButton type="submit" disabled=disabled>
                    <Icon icon=ic::PULL />
                    <span>"Pull"</span>
                </button>
            </div>
            {move || email_error().map(|msg| view! { <p class=css::fieldError>{msg}</p> })}
            {move || match pull() {
                PullState::Idle => ().into_any(),
                PullState::Sending => view! { <Loading label="Requesting file..." /> }.into_any(),
                PullState::Sent(message) => view! { <p class=css::success>{message}</p> }.into_any(),
                PullState::Failed(error) => view! { <ErrorBlock error=error what="pull" /> }.into_any(),
            }}
        </form>
    }
}

/// Other versions of the same file.
#[component]
fn Siblings(siblings: Vec<SiblingRef>) -> impl IntoView {
    view! {
        <section class=css::siblings>
            <h2>"Other versions"</h2>
            <ul>
                {siblings
                    .into_iter()
                    .map(|sibling| {
                        let href = AppRoute::File { uri: sibling.uri }.to_hash();
                        view! {
                            <li>
                                <a href=href>{format!("Version {}", sibling.version)}</a>
                                <StatusBadge status=sibling.status />
                                <span class=css::hint>{sibling.publishing_date}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}
