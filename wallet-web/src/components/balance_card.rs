use leptos::prelude::*;

use crate::config::use_config;
use crate::utils::format::format_currency;

#[component]
pub fn BalanceCard(
    #[prop(into)] balance: Signal<String>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(optional, into)] on_fund: Option<Callback<()>>,
    #[prop(optional, into)] on_refresh: Option<Callback<()>>,
) -> impl IntoView {
    let config = use_config();
    let formatted = move || format_currency(&balance.get(), &config.currency, &config.locale);

    view! {
        <div class="card balance-card">
            <div style="display: flex; justify-content: space-between; align-items: center; margin-bottom: 8px;">
                <p style="color: var(--text-secondary);">"Total Wallet Balance"</p>
                {on_refresh.map(|cb| view! {
                    <button class="link-button" title="Update balance" on:click=move |_| cb.run(())>"↻"</button>
                })}
            </div>
            <h2 class="balance-amount" class:dimmed=move || loading.get()>{formatted}</h2>
            {on_fund.map(|cb| view! {
                <button class="btn" on:click=move |_| cb.run(())>"Fund Wallet"</button>
            })}
        </div>
    }
}
