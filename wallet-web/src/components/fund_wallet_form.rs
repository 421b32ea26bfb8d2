//! Wallet funding form
//!
//! Validates locally, then hands the request to the wallet container. The
//! outcome is announced through the page's toast; a failure also leaves the
//! container's error text visible under the form.

use leptos::prelude::*;
use leptos::task::spawn_local;
use shared::PaymentMethod;

use crate::components::toast::ToastMessage;
use crate::config::use_config;
use crate::state::wallet::use_wallet_context;
use crate::utils::constants::MIN_FUNDING_MINOR_UNITS;
use crate::utils::format::format_minor_currency;
use crate::utils::validation::validate_funding;

#[component]
pub fn FundWalletForm(
    toast: RwSignal<Option<ToastMessage>>,
    #[prop(optional, into)] on_done: Option<Callback<()>>,
) -> impl IntoView {
    let wallet = use_wallet_context();
    let state = *wallet.state();
    let config = use_config();
    let minimum = format_minor_currency(MIN_FUNDING_MINOR_UNITS, &config.currency, &config.locale);

    let (amount, set_amount) = signal(String::new());
    let (method, set_method) = signal(PaymentMethod::default().as_str().to_string());
    let (form_error, set_form_error) = signal(None::<String>);
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }

        let request = match validate_funding(&amount.get_untracked(), &method.get_untracked()) {
            Ok(request) => request,
            Err(e) => {
                set_form_error.set(Some(e.to_string()));
                return;
            }
        };
        set_form_error.set(None);
        wallet.clear_error();
        set_submitting.set(true);

        let wallet = wallet.clone();
        spawn_local(async move {
            match wallet.initiate_funding(request).await {
                Ok(response) => {
                    toast.set(Some(ToastMessage::success(format!(
                        "{} ({})",
                        response.message, response.transaction_reference
                    ))));
                    set_amount.set(String::new());
                    if let Some(cb) = on_done {
                        cb.run(());
                    }
                }
                Err(e) => {
                    toast.set(Some(ToastMessage::error(e.display_message())));
                }
            }
            set_submitting.try_set(false);
        });
    };

    let options = PaymentMethod::ALL
        .into_iter()
        .map(|m| view! { <option value=m.as_str()>{m.name()}</option> })
        .collect_view();

    view! {
        <form class="card fund-form" on:submit=on_submit>
            <h3 class="card-title">"Fund Wallet"</h3>

            <label for="fund-amount">"Amount (₦)"</label>
            <input
                id="fund-amount"
                type="text"
                inputmode="decimal"
                placeholder="100.00"
                prop:value=move || amount.get()
                on:input=move |ev| set_amount.set(event_target_value(&ev))
            />
            <p class="hint">{format!("Minimum {}", minimum)}</p>

            <label for="fund-method">"Payment method"</label>
            <select
                id="fund-method"
                prop:value=move || method.get()
                on:change=move |ev| set_method.set(event_target_value(&ev))
            >
                {options}
            </select>

            {move || form_error.get().map(|e| view! { <p class="form-error">{e}</p> })}
            {move || state.with(|s| s.error.clone()).map(|e| view! { <p class="form-error">{e}</p> })}

            <button class="btn" type="submit" disabled=move || submitting.get()>
                {move || if submitting.get() { "Processing..." } else { "Continue to payment" }}
            </button>
        </form>
    }
}
