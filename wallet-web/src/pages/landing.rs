use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::{ABOUT, DASHBOARD, SIGN_UP};
use crate::state::auth::use_auth_context;

const FEATURES: [(&str, &str); 3] = [
    ("Instant funding", "Top up with Paystack or Flutterwave in a few taps."),
    ("Full history", "Every credit and debit, with status and balance before and after."),
    ("Secure & Protected", "Token-based sessions and encrypted transport on every request."),
];

#[component]
pub fn LandingPage() -> impl IntoView {
    let auth = use_auth_context();
    let state = *auth.state();

    let features = FEATURES
        .into_iter()
        .map(|(title, text)| {
            view! {
                <div class="card feature">
                    <h3>{title}</h3>
                    <p style="color: var(--text-secondary);">{text}</p>
                </div>
            }
        })
        .collect_view();

    view! {
        <section class="hero">
            <span class="pill">"Rated #1 Digital Wallet 2025"</span>
            <h1 class="hero-title">"Your money, one wallet away"</h1>
            <p class="hero-subtitle">
                "Fund, track and spend from a single naira wallet built for everyday payments."
            </p>
            <div class="hero-actions">
                {move || {
                    if state.with(|s| s.is_authenticated()) {
                        view! { <A href=DASHBOARD attr:class="btn">"Go to Dashboard"</A> }.into_any()
                    } else {
                        view! { <A href=SIGN_UP attr:class="btn">"Get Started Free"</A> }.into_any()
                    }
                }}
                <A href=ABOUT attr:class="btn btn-secondary">"Learn more"</A>
            </div>
        </section>
        <section class="feature-grid">{features}</section>
    }
}
