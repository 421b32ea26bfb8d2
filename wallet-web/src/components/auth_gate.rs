//! Renders protected content only once the startup auth check has passed

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::Loader;
use crate::routes::{dashboard_gate, GateDecision};
use crate::state::auth::use_auth_context;

#[component]
pub fn AuthGate(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth_context();
    let state = *auth.state();
    let navigate = use_navigate();

    Effect::new(move |_| {
        if let GateDecision::Redirect(to) = state.with(dashboard_gate) {
            log::info!("No session, redirecting to {}", to);
            navigate(to, Default::default());
        }
    });

    move || match state.with(dashboard_gate) {
        GateDecision::Wait => view! { <Loader/> }.into_any(),
        GateDecision::Redirect(_) => ().into_any(),
        GateDecision::Render => children().into_any(),
    }
}
