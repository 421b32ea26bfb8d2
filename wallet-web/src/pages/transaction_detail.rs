//! Single transaction, looked up by reference

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;
use shared::WalletTransaction;

use crate::components::{AuthGate, Loader};
use crate::config::use_config;
use crate::routes::DASHBOARD;
use crate::state::wallet::{use_wallet_context, WalletState};
use crate::utils::format::{format_amount, format_currency, format_date};
use crate::utils::transaction::{parse_transaction, status_color, type_color, type_icon};

/// What the detail page can show for a reference.
#[derive(Debug, Clone, PartialEq)]
enum Lookup {
    Found(WalletTransaction),
    Pending,
    Failed(String),
}

/// Errors left over from other dashboard views are ignored while a lookup
/// is in flight.
fn lookup(state: &WalletState, reference: &str) -> Lookup {
    if let Some(transaction) = state
        .current_transaction
        .as_ref()
        .filter(|t| t.reference == reference)
    {
        return Lookup::Found(transaction.clone());
    }
    match (&state.error, state.is_loading) {
        (Some(error), false) => Lookup::Failed(error.clone()),
        _ => Lookup::Pending,
    }
}

#[component]
pub fn TransactionDetailPage() -> impl IntoView {
    view! {
        <AuthGate>
            <TransactionDetail/>
        </AuthGate>
    }
}

#[component]
fn TransactionDetail() -> impl IntoView {
    let wallet = use_wallet_context();
    let state = *wallet.state();
    let config = use_config();
    let params = use_params_map();
    let reference = move || params.with(|p| p.get("reference")).unwrap_or_default();

    Effect::new({
        let wallet = wallet.clone();
        move |_| {
            let reference = reference();
            if reference.is_empty() {
                return;
            }
            wallet.clear_error();
            let wallet = wallet.clone();
            spawn_local(async move { wallet.fetch_transaction_by_reference(&reference).await });
        }
    });

    move || {
        let transaction = match state.with(|s| lookup(s, &reference())) {
            Lookup::Found(transaction) => transaction,
            Lookup::Failed(error) => {
                return view! {
                    <div class="card">
                        <p class="form-error">{error}</p>
                        <A href=DASHBOARD attr:class="btn">"Back to dashboard"</A>
                    </div>
                }
                .into_any()
            }
            Lookup::Pending => return view! { <Loader label="Loading transaction..."/> }.into_any(),
        };

        let parsed = parse_transaction(&transaction);
        let money = |amount: &str| format_currency(amount, &config.currency, &config.locale);
        let rows: Vec<(&'static str, String)> = vec![
            ("Reference", transaction.reference.clone()),
            ("Amount", format!("{} {}", format_amount(&transaction.amount), config.currency)),
            ("Type", if parsed.is_credit { "Credit" } else { "Debit" }.to_string()),
            ("Source", transaction.source.label().to_string()),
            ("Status", transaction.status.label().to_string()),
            ("Balance before", money(&transaction.balance_before)),
            ("Balance after", money(&transaction.balance_after)),
            ("Created", format_date(&parsed.created_at)),
            ("Updated", format_date(&parsed.updated_at)),
        ];

        view! {
            <div class="app-container" style="max-width: 640px; margin: 0 auto; padding: 48px 24px;">
                <A href=DASHBOARD attr:class="link-button">"← Back to dashboard"</A>
                <div class="card" style="margin-top: 16px;">
                    <div style="display: flex; align-items: center; gap: 16px;">
                        <span class=format!("tx-icon {}", type_color(transaction.transaction_type))>
                            {type_icon(transaction.transaction_type)}
                        </span>
                        <div>
                            <h2 class=format!("tx-amount {}", type_color(transaction.transaction_type))>
                                {money(&transaction.amount)}
                            </h2>
                            <span class=format!("badge {}", status_color(transaction.status))>
                                {transaction.status.label()}
                            </span>
                        </div>
                    </div>
                    {transaction.description.clone().map(|d| view! { <p class="tx-description">{d}</p> })}
                    {parsed.is_pending.then(|| view! {
                        <p class="notice">"Awaiting confirmation from the payment provider."</p>
                    })}
                    <dl class="detail-list">
                        {rows
                            .into_iter()
                            .map(|(label, value)| view! { <dt>{label}</dt><dd>{value}</dd> })
                            .collect_view()}
                    </dl>
                </div>
            </div>
        }
        .into_any()
    }
}
