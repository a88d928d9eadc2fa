//! Static pages: landing page with the tag catalog, about, not found.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::components::notice::{ErrorBlock, Loading};
use crate::config::{APP_NAME, APP_VERSION};
use crate::core::api::tag_catalog;
use crate::models::AppRoute;
use crate::utils::HttpApi;

stylance::import_crate_style!(css, "src/components/home/home.module.css");

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let tags = LocalResource::new(move || {
        let api = HttpApi::new(ctx.config.clone());
        async move { tag_catalog(&api).await }
    });

    view! {
        <div class=css::page>
            <section class=css::hero>
                <h1>{APP_NAME}</h1>
                <p>
                    "Browse the files published on this server, filter them by tag, "
                    "or search them by name."
                </p>
                <a class=css::cta href={AppRoute::Files { tags: vec![] }.to_hash()}>
                    <Icon icon=ic::FILES />
                    <span>"Browse files"</span>
                </a>
            </section>

            <section>
                <h2 class=css::heading>
                    <Icon icon=ic::TAG />
                    <span>"Tags"</span>
                </h2>
                <Suspense fallback=|| view! { <Loading /> }>
                    {move || tags.get().map(|result| match result {
                        Ok(tags) if tags.is_empty() => view! {
                            <p class=css::muted>"No tag found"</p>
                        }.into_any(),
                        Ok(tags) => view! {
                            <ul class=css::catalog>
                                {tags.into_iter().map(|t| {
                                    let href = AppRoute::Files { tags: vec![t.tag.clone()] }.to_hash();
                                    view! {
                                        <li>
                                            <a href=href>{t.tag}</a>
                                            <span class=css::muted>{format!("({})", t.count)}</span>
                                        </li>
                                    }
                                }).collect_view()}
                            </ul>
                        }.into_any(),
                        Err(err) => view! {
                            <ErrorBlock error=err what="tags" />
                        }.into_any(),
                    })}
                </Suspense>
            </section>
        </div>
    }
}

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class=css::page>
            <h1>{format!("About {}", APP_NAME)}</h1>
            <p>
                "Files are published from the server's storage and listed here with "
                "their status. Available files can be downloaded directly. Archived "
                "files are marked as pullable: request them back from the file page "
                "and, optionally, leave an email address to be told when they are ready."
            </p>
            <p>
                "Listings can be narrowed by ticking tags in the sidebar. A tag link "
                "on a file page or on the home page opens a listing already filtered "
                "by that tag."
            </p>
            <p class=css::muted>{format!("Version {}", APP_VERSION)}</p>
        </div>
    }
}

#[component]
pub fn NotFoundPage(path: String) -> impl IntoView {
    view! {
        <div class=css::page>
            <h1>"Page not found"</h1>
            <p class=css::muted>{format!("Nothing lives at /{}.", path)}</p>
            <a href=AppRoute::Home.to_hash()>"Back to the home page"</a>
        </div>
    }
}
