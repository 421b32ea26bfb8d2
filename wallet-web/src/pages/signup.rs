//! Sign-up form: registers, signs straight in and opens the dashboard

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::routes::{DASHBOARD, PRIVACY, SIGN_IN};
use crate::state::auth::use_auth_context;
use crate::utils::constants::MIN_PASSWORD_LEN;
use crate::utils::validation::validate_sign_up;

#[component]
pub fn SignUpPage() -> impl IntoView {
    let auth = use_auth_context();
    let navigate = use_navigate();

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let name = name.get_untracked();
        let email = email.get_untracked();
        let password = password.get_untracked();
        if let Err(e) = validate_sign_up(&name, &email, &password) {
            set_error.set(Some(e.to_string()));
            return;
        }
        set_error.set(None);
        set_submitting.set(true);

        let auth = auth.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match auth.sign_up(name.trim(), email.trim(), &password).await {
                Ok(user) => {
                    log::info!("Account created for {}", user.username);
                    navigate(DASHBOARD, Default::default());
                }
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
                <h1 class="card-title">"Create your account"</h1>

                <label for="signup-name">"Username"</label>
                <input
                    id="signup-name"
                    type="text"
                    autocomplete="username"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />

                <label for="signup-email">"Email"</label>
                <input
                    id="signup-email"
                    type="email"
                    autocomplete="email"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />

                <label for="signup-password">"Password"</label>
                <input
                    id="signup-password"
                    type="password"
                    autocomplete="new-password"
                    placeholder=format!("At least {} characters", MIN_PASSWORD_LEN)
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />

                {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}

                <button class="btn" type="submit" style="width: 100%;" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Creating account..." } else { "Sign Up" }}
                </button>

                <p class="auth-switch">
                    "By signing up you agree to our " <A href=PRIVACY>"privacy policy"</A> "."
                </p>
                <p class="auth-switch">
                    "Already have an account? " <A href=SIGN_IN>"Sign in"</A>
                </p>
            </form>
        </div>
    }
}
