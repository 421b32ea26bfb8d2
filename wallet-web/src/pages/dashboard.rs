//! User dashboard: balance, monthly stats, activity and funding

use leptos::prelude::*;
use leptos::task::spawn_local;
use shared::{TransactionStatus, TransactionType};

use crate::components::{
    AuthGate, BalanceCard, FlowChart, FundWalletForm, Toast, ToastMessage, TransactionList,
};
use crate::config::use_config;
use crate::state::auth::use_auth_context;
use crate::state::wallet::use_wallet_context;
use crate::utils::format::{
    format_date, format_minor_currency, format_number, format_percentage, percentage_change,
};
use crate::utils::transaction::{filter_transactions, monthly_flow, transaction_total, TransactionFilters};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Overview,
    Transactions,
    Profile,
}

impl Tab {
    const ALL: [Tab; 3] = [Tab::Overview, Tab::Transactions, Tab::Profile];

    fn label(&self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Transactions => "Transactions",
            Tab::Profile => "Profile",
        }
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <AuthGate>
            <Dashboard/>
        </AuthGate>
    }
}

#[component]
fn Dashboard() -> impl IntoView {
    let auth = use_auth_context();
    let user = *auth.state();
    let wallet = use_wallet_context();
    let state = *wallet.state();
    let config = use_config();

    let (tab, set_tab) = signal(Tab::Overview);
    let (show_fund, set_show_fund) = signal(false);
    let toast = RwSignal::new(None::<ToastMessage>);

    let refresh = {
        let wallet = wallet.clone();
        move || {
            let wallet = wallet.clone();
            spawn_local(async move { wallet.refresh_wallet().await });
        }
    };
    refresh();

    let refresh_balance = Callback::new({
        let wallet = wallet.clone();
        move |_| {
            let wallet = wallet.clone();
            spawn_local(async move { wallet.fetch_balance().await });
        }
    });

    let balance = Signal::derive(move || state.with(|s| s.balance.clone()));
    let loading = Signal::derive(move || state.with(|s| s.is_loading));
    let transactions = Signal::derive(move || state.with(|s| s.transactions.clone()));
    let recent = Signal::derive({
        let limit = config.recent_transactions_limit as usize;
        move || state.with(|s| s.transactions.iter().take(limit).cloned().collect::<Vec<_>>())
    });

    let greeting = move || {
        user.with(|s| s.user.as_ref().map(|u| u.display_name()))
            .unwrap_or_default()
    };

    let on_logout = {
        let auth = auth.clone();
        move |_| auth.logout()
    };

    let stat_cards = {
        let config = config.clone();
        move || {
            let flow = monthly_flow(&transactions.get(), chrono::Utc::now(), 2);
            let (previous, current) = match flow.as_slice() {
                [previous, current] => (previous.clone(), current.clone()),
                _ => return ().into_any(),
            };
            let money = |minor: i64| format_minor_currency(minor, &config.currency, &config.locale);
            let income_change = percentage_change(current.credit_minor as f64, previous.credit_minor as f64);
            let expense_change = percentage_change(current.debit_minor as f64, previous.debit_minor as f64);
            view! {
                <div class="stat-grid">
                    <div class="card stat">
                        <p class="stat-label">"Total Income"</p>
                        <p class="stat-value green">{money(current.credit_minor)}</p>
                        <p class="stat-change">{format!("{} from last month", format_percentage(income_change))}</p>
                    </div>
                    <div class="card stat">
                        <p class="stat-label">"Total Expenses"</p>
                        <p class="stat-value red">{money(current.debit_minor)}</p>
                        <p class="stat-change">{format!("{} from last month", format_percentage(expense_change))}</p>
                    </div>
                </div>
            }
            .into_any()
        }
    };

    let tabs = Tab::ALL
        .into_iter()
        .map(|t| {
            view! {
                <button
                    class="sidebar-item"
                    class:active=move || tab.get() == t
                    on:click=move |_| set_tab.set(t)
                >
                    {t.label()}
                </button>
            }
        })
        .collect_view();

    let on_refresh = {
        let refresh = refresh.clone();
        move |_| refresh()
    };

    view! {
        <div class="dashboard">
            <aside class="sidebar">
                <div class="nav-title">"TonyWallet"</div>
                {tabs}
                <button class="sidebar-item danger" on:click=on_logout>"Logout"</button>
            </aside>

            <main class="dashboard-main">
                <header class="dashboard-header">
                    <div>
                        <h1>{move || format!("Welcome back, {}", greeting())}</h1>
                        <p style="color: var(--text-secondary);">"Here's what's happening today."</p>
                    </div>
                    <button class="btn btn-secondary" on:click=on_refresh disabled=move || loading.get()>
                        "Refresh"
                    </button>
                </header>

                {move || match tab.get() {
                    Tab::Overview => view! {
                        <BalanceCard
                            balance=balance
                            loading=loading
                            on_refresh=refresh_balance
                            on_fund=Callback::new(move |_| set_show_fund.update(|open| *open = !*open))
                        />
                        {move || show_fund.get().then(|| view! {
                            <FundWalletForm
                                toast=toast
                                on_done=Callback::new(move |_| set_show_fund.set(false))
                            />
                        })}
                        {stat_cards.clone()}
                        <FlowChart transactions=transactions/>
                        <div class="card">
                            <div style="display: flex; justify-content: space-between; align-items: center;">
                                <h3 class="card-title">"Recent Activity"</h3>
                                <button class="link-button" on:click=move |_| set_tab.set(Tab::Transactions)>
                                    "View All"
                                </button>
                            </div>
                            <TransactionList transactions=recent/>
                        </div>
                    }
                    .into_any(),
                    Tab::Transactions => view! { <TransactionsPanel/> }.into_any(),
                    Tab::Profile => view! { <ProfilePanel/> }.into_any(),
                }}
            </main>

            <Toast message=toast/>
        </div>
    }
}

/// Full history with client-side type/status filters and totals.
#[component]
fn TransactionsPanel() -> impl IntoView {
    let wallet = use_wallet_context();
    let state = *wallet.state();
    let config = use_config();

    let (kind, set_kind) = signal(String::new());
    let (status, set_status) = signal(String::new());

    let filtered = Signal::derive(move || {
        let filters = TransactionFilters {
            kind: match kind.get().as_str() {
                "CREDIT" => Some(TransactionType::Credit),
                "DEBIT" => Some(TransactionType::Debit),
                _ => None,
            },
            status: match status.get().as_str() {
                "PENDING" => Some(TransactionStatus::Pending),
                "COMPLETED" => Some(TransactionStatus::Completed),
                "FAILED" => Some(TransactionStatus::Failed),
                "REVERSED" => Some(TransactionStatus::Reversed),
                _ => None,
            },
            ..Default::default()
        };
        state.with(|s| filter_transactions(&s.transactions, &filters))
    });

    let totals = move || {
        let list = filtered.get();
        let credit = transaction_total(&list, Some(TransactionType::Credit));
        let debit = transaction_total(&list, Some(TransactionType::Debit));
        format!(
            "In {} · Out {}",
            format_minor_currency(credit, &config.currency, &config.locale),
            format_minor_currency(debit, &config.currency, &config.locale)
        )
    };

    view! {
        <div class="card">
            <h3 class="card-title">
                {move || format!("Transactions ({})", format_number(state.with(|s| s.transaction_count) as f64, 0))}
            </h3>
            <div class="filter-bar">
                <select on:change=move |ev| set_kind.set(event_target_value(&ev))>
                    <option value="">"All types"</option>
                    <option value="CREDIT">"Credit"</option>
                    <option value="DEBIT">"Debit"</option>
                </select>
                <select on:change=move |ev| set_status.set(event_target_value(&ev))>
                    <option value="">"All statuses"</option>
                    <option value="PENDING">"Pending"</option>
                    <option value="COMPLETED">"Completed"</option>
                    <option value="FAILED">"Failed"</option>
                    <option value="REVERSED">"Reversed"</option>
                </select>
            </div>
            <p class="stat-change">{totals}</p>
            <TransactionList transactions=filtered grouped=true/>
        </div>
    }
}

#[component]
fn ProfilePanel() -> impl IntoView {
    let auth = use_auth_context();
    let state = *auth.state();

    let latest = auth.clone();
    spawn_local(async move { latest.refresh_user().await });

    move || {
        let Some(user) = state.with(|s| s.user.clone()) else {
            return ().into_any();
        };
        let rows: Vec<(&'static str, String)> = vec![
            ("Username", user.username.clone()),
            ("Email", user.email.clone()),
            ("Phone", user.phone_number.clone().unwrap_or_else(|| "-".to_string())),
            ("Verified", if user.is_verified { "Yes" } else { "No" }.to_string()),
            ("Member since", format_date(&user.date_joined)),
        ];
        view! {
            <div class="card">
                <div class="profile-header">
                    <span class="avatar-circle large">{user.initials()}</span>
                    <h3>{user.display_name()}</h3>
                </div>
                <dl class="detail-list">
                    {rows
                        .into_iter()
                        .map(|(label, value)| view! { <dt>{label}</dt><dd>{value}</dd> })
                        .collect_view()}
                </dl>
            </div>
        }
        .into_any()
    }
}
