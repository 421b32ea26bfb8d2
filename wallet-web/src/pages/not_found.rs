use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::HOME;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="app-container" style="display: flex; justify-content: center; align-items: center; min-height: calc(100vh - 60px);">
            <div class="card" style="max-width: 500px; text-align: center;">
                <h1 style="margin-bottom: 16px; font-size: 32px; font-weight: 700;">"404 - Page Not Found"</h1>
                <p style="color: var(--text-secondary); margin-bottom: 24px;">"The page you're looking for doesn't exist."</p>
                <A href=HOME attr:class="btn">"Go to Home"</A>
            </div>
        </div>
    }
}
