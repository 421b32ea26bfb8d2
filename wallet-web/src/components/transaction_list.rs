//! Transaction rows, optionally grouped under date headers

use leptos::prelude::*;
use leptos_router::components::A;
use shared::{TransactionType, WalletTransaction};

use crate::config::use_config;
use crate::routes::transaction_path;
use crate::utils::format::{format_currency, format_relative_time};
use crate::utils::transaction::{group_by_date, status_color, type_color, type_icon};

#[component]
fn TransactionRow(transaction: WalletTransaction) -> impl IntoView {
    let config = use_config();
    let sign = match transaction.transaction_type {
        TransactionType::Credit => "+",
        TransactionType::Debit => "-",
    };
    let amount = format!(
        "{}{}",
        sign,
        format_currency(&transaction.amount, &config.currency, &config.locale)
    );
    let title = transaction
        .description
        .clone()
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| transaction.source.label().to_string());
    let title = shared::truncate_text(&title, 48);
    let when = format_relative_time(&transaction.created_at, chrono::Utc::now());

    view! {
        <A href=transaction_path(&transaction.reference) attr:class="tx-row">
            <span class=format!("tx-icon {}", type_color(transaction.transaction_type))>
                {type_icon(transaction.transaction_type)}
            </span>
            <div class="tx-main">
                <p class="tx-title">{title}</p>
                <p class="tx-meta">
                    {shared::truncate_reference(&transaction.reference)} " · " {when}
                </p>
            </div>
            <div class="tx-side">
                <p class=format!("tx-amount {}", type_color(transaction.transaction_type))>{amount}</p>
                <span class=format!("badge {}", status_color(transaction.status))>
                    {transaction.status.label()}
                </span>
            </div>
        </A>
    }
}

#[component]
pub fn TransactionList(
    #[prop(into)] transactions: Signal<Vec<WalletTransaction>>,
    #[prop(optional)] grouped: bool,
) -> impl IntoView {
    move || {
        let list = transactions.get();
        if list.is_empty() {
            return view! {
                <p class="empty-state">"No transactions yet. More activity will appear here as you use the app."</p>
            }
            .into_any();
        }

        if grouped {
            group_by_date(&list)
                .into_iter()
                .map(|(day, items)| {
                    view! {
                        <div class="tx-group">
                            <h4 class="tx-group-title">{day}</h4>
                            {items
                                .into_iter()
                                .map(|transaction| view! { <TransactionRow transaction=transaction/> })
                                .collect_view()}
                        </div>
                    }
                })
                .collect_view()
                .into_any()
        } else {
            list.into_iter()
                .map(|transaction| view! { <TransactionRow transaction=transaction/> })
                .collect_view()
                .into_any()
        }
    }
}
