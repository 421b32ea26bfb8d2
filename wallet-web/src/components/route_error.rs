//! Fallback view for a route whose view failed

use leptos::prelude::*;

fn current_url() -> String {
    web_sys::window()
        .and_then(|w| w.location().href().ok())
        .unwrap_or_default()
}

#[component]
pub fn RouteErrorView(#[prop(into)] message: String) -> impl IntoView {
    let url = current_url();
    log::error!("Route error at {}: {}", url, message);

    let go_home = move |_| {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href("/") {
                log::warn!("Failed to navigate home: {:?}", e);
            }
        }
    };
    let retry = move |_| {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().reload() {
                log::warn!("Failed to reload: {:?}", e);
            }
        }
    };

    view! {
        <div class="app-container" style="display: flex; justify-content: center; align-items: center; min-height: 100vh;">
            <div class="card" style="max-width: 480px; width: 100%; text-align: center;">
                <h1 class="card-title">"Something went wrong"</h1>
                <p style="color: var(--text-secondary); margin-bottom: 24px;">
                    "We couldn't load this page. Please try again or return to the homepage."
                </p>
                <div class="error-details">
                    <p style="font-family: monospace; white-space: pre-wrap;">{message}</p>
                    <p style="font-size: 0.8em; color: var(--text-secondary);">{format!("URL: {}", url)}</p>
                </div>
                <button class="btn" style="width: 100%;" on:click=go_home>"Go to Home"</button>
                <button class="btn btn-secondary" style="width: 100%; margin-top: 12px;" on:click=retry>"Retry"</button>
            </div>
        </div>
    }
}
