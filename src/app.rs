//! Root application module.
//!
//! Contains the main App component and the [`AppContext`] shared by every
//! page.

use leptos::prelude::*;

use crate::components::AppRouter;
use crate::config::ClientConfig;

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide context.
///
/// Provided at the root of the component tree and read by pages with
/// `use_context::<AppContext>()`. Each page builds its own controllers
/// (and HTTP transport) from [`AppContext::config`].
#[derive(Clone, Debug)]
pub struct AppContext {
    /// Backend location and paging settings.
    pub config: ClientConfig,
}

impl AppContext {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new(ClientConfig::from_build_env())
    }
}

/// Root application component with error boundary.
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::default();
    tracing::info!(base_path = %ctx.config.base_path, page_size = ctx.config.page_size, "starting");
    provide_context(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    min-height: 100vh;
                    padding: 2rem;
                    font-family: system-ui, sans-serif;
                ">
                    <div style="max-width: 600px; text-align: center;">
                        <h1 style="color: #dc3545; margin-bottom: 1rem;">
                            "Something went wrong"
                        </h1>
                        <p style="color: #6c757d; margin-bottom: 2rem;">
                            "An unexpected error occurred. Please try reloading the page."
                        </p>
                        <ul style="text-align: left; color: #dc3545; font-size: 0.9rem;">
                            {move || errors.get()
                                .into_iter()
                                .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                .collect::<Vec<_>>()
                            }
                        </ul>
                        <button
                            on:click=move |_| {
                                if let Some(window) = web_sys::window() {
                                    let _ = window.location().reload();
                                }
                            }
                            style="
                                background: #0d6efd;
                                color: white;
                                border: none;
                                padding: 0.75rem 2rem;
                                border-radius: 4px;
                                cursor: pointer;
                                font-size: 1rem;
                            "
                        >
                            "Reload Page"
                        </button>
                    </div>
                </div>
            }
        >
            <AppRouter />
        </ErrorBoundary>
    }
}
