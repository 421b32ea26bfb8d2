use leptos::prelude::*;

#[component]
pub fn Loader(#[prop(optional, into)] label: Option<String>) -> impl IntoView {
    view! {
        <div class="loader" role="status">
            <div class="spinner"></div>
            <p style="color: var(--text-secondary);">{label.unwrap_or_else(|| "Loading...".to_string())}</p>
        </div>
    }
}
