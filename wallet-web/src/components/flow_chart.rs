//! Monthly income/expense bars built from the loaded transactions

use leptos::prelude::*;
use shared::WalletTransaction;

use crate::utils::constants::FLOW_CHART_MONTHS;
use crate::utils::transaction::monthly_flow;

const BAR_MAX_PX: i64 = 160;

fn bar_height(value: i64, max: i64) -> i64 {
    if max == 0 {
        0
    } else {
        (value * BAR_MAX_PX / max).max(if value > 0 { 2 } else { 0 })
    }
}

#[component]
pub fn FlowChart(#[prop(into)] transactions: Signal<Vec<WalletTransaction>>) -> impl IntoView {
    view! {
        <div class="card">
            <h3 class="card-title">"Transaction Overview"</h3>
            <div class="flow-legend">
                <span class="legend income">"Income"</span>
                <span class="legend expense">"Expense"</span>
            </div>
            <div class="flow-chart">
                {move || {
                    let flow = monthly_flow(&transactions.get(), chrono::Utc::now(), FLOW_CHART_MONTHS);
                    let max = flow
                        .iter()
                        .map(|m| m.credit_minor.max(m.debit_minor))
                        .max()
                        .unwrap_or(0);
                    flow.into_iter()
                        .map(|month| {
                            let income = bar_height(month.credit_minor, max);
                            let expense = bar_height(month.debit_minor, max);
                            view! {
                                <div class="flow-month">
                                    <div class="flow-bars">
                                        <div class="bar income" style=format!("height: {}px;", income)></div>
                                        <div class="bar expense" style=format!("height: {}px;", expense)></div>
                                    </div>
                                    <span class="flow-label">{month.label}</span>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}
