use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::routes::{DASHBOARD, SIGN_UP};
use crate::state::auth::use_auth_context;
use crate::utils::validation::validate_sign_in;

#[component]
pub fn SignInPage() -> impl IntoView {
    let auth = use_auth_context();
    let navigate = use_navigate();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let (email, password) = (email.get_untracked(), password.get_untracked());
        if let Err(e) = validate_sign_in(&email, &password) {
            set_error.set(Some(e.to_string()));
            return;
        }
        set_error.set(None);
        set_submitting.set(true);

        let auth = auth.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match auth.sign_in(email.trim(), &password).await {
                Ok(_) => navigate(DASHBOARD, Default::default()),
                Err(e) => {
                    set_error.try_set(Some(e.display_message()));
                }
            }
            set_submitting.try_set(false);
        });
    };

    view! {
        <div class="auth-page">
            <form class="card auth-card" on:submit=on_submit>
                <h1 class="card-title">"Welcome back"</h1>
                <p style="color: var(--text-secondary); margin-bottom: 24px;">"Sign in to your wallet"</p>

                <label for="signin-email">"Email"</label>
                <input
                    id="signin-email"
                    type="email"
                    autocomplete="email"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />

                <label for="signin-password">"Password"</label>
                <input
                    id="signin-password"
                    type="password"
                    autocomplete="current-password"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />

                {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}

                <button class="btn" type="submit" style="width: 100%;" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Signing in..." } else { "Sign In" }}
                </button>

                <p class="auth-switch">
                    "Don't have an account? " <A href=SIGN_UP>"Sign up"</A>
                </p>
            </form>
        </div>
    }
}
