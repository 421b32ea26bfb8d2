//! Transaction display helpers: flags, colors, grouping and aggregates.
//!
//! All sums are in minor units; see [`crate::utils::format::parse_minor_units`].

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use shared::{TransactionSource, TransactionStatus, TransactionType, WalletTransaction};

use crate::utils::format::{format_long_date, parse_minor_units};

/// A transaction with its amounts parsed and its type/status unpacked.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedTransaction {
    pub transaction: WalletTransaction,
    pub amount_minor: i64,
    pub balance_before_minor: i64,
    pub balance_after_minor: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_credit: bool,
    pub is_debit: bool,
    pub is_pending: bool,
    pub is_completed: bool,
    pub is_failed: bool,
    pub is_reversed: bool,
}

pub fn parse_transaction(transaction: &WalletTransaction) -> ParsedTransaction {
    let minor = |value: &str| parse_minor_units(value).unwrap_or(0);
    ParsedTransaction {
        amount_minor: minor(&transaction.amount),
        balance_before_minor: minor(&transaction.balance_before),
        balance_after_minor: minor(&transaction.balance_after),
        created_at: transaction.created_at,
        updated_at: transaction.updated_at,
        is_credit: transaction.transaction_type == TransactionType::Credit,
        is_debit: transaction.transaction_type == TransactionType::Debit,
        is_pending: transaction.status == TransactionStatus::Pending,
        is_completed: transaction.status == TransactionStatus::Completed,
        is_failed: transaction.status == TransactionStatus::Failed,
        is_reversed: transaction.status == TransactionStatus::Reversed,
        transaction: transaction.clone(),
    }
}

pub fn type_color(kind: TransactionType) -> &'static str {
    match kind {
        TransactionType::Credit => "green",
        TransactionType::Debit => "red",
    }
}

pub fn status_color(status: TransactionStatus) -> &'static str {
    match status {
        TransactionStatus::Pending => "yellow",
        TransactionStatus::Completed => "green",
        TransactionStatus::Failed => "red",
        TransactionStatus::Reversed => "gray",
    }
}

/// Arrow for the direction money moved: into the wallet points down.
pub fn type_icon(kind: TransactionType) -> &'static str {
    match kind {
        TransactionType::Credit => "↓",
        TransactionType::Debit => "↑",
    }
}

/// Transactions bucketed by calendar day (UTC), keeping the input order
/// both across and within days.
pub fn group_by_date(transactions: &[WalletTransaction]) -> Vec<(String, Vec<WalletTransaction>)> {
    let mut groups: Vec<(NaiveDate, String, Vec<WalletTransaction>)> = Vec::new();
    for transaction in transactions {
        let day = transaction.created_at.date_naive();
        match groups.iter_mut().find(|(d, _, _)| *d == day) {
            Some((_, _, items)) => items.push(transaction.clone()),
            None => groups.push((day, format_long_date(&transaction.created_at), vec![transaction.clone()])),
        }
    }
    groups.into_iter().map(|(_, label, items)| (label, items)).collect()
}

/// Sum of amounts, optionally restricted to one direction.
pub fn transaction_total(transactions: &[WalletTransaction], kind: Option<TransactionType>) -> i64 {
    transactions
        .iter()
        .filter(|t| kind.is_none_or(|k| t.transaction_type == k))
        .map(|t| parse_minor_units(&t.amount).unwrap_or(0))
        .sum()
}

/// Optional constraints for narrowing a transaction list client-side.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionFilters {
    pub kind: Option<TransactionType>,
    pub status: Option<TransactionStatus>,
    pub source: Option<TransactionSource>,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    pub limit: Option<usize>,
}

impl TransactionFilters {
    pub fn matches(&self, transaction: &WalletTransaction) -> bool {
        self.kind.is_none_or(|k| transaction.transaction_type == k)
            && self.status.is_none_or(|s| transaction.status == s)
            && self.source.is_none_or(|s| transaction.source == s)
            && self.start.is_none_or(|start| transaction.created_at >= start)
            && self.end.is_none_or(|end| transaction.created_at <= end)
    }
}

pub fn filter_transactions(transactions: &[WalletTransaction], filters: &TransactionFilters) -> Vec<WalletTransaction> {
    transactions
        .iter()
        .filter(|t| filters.matches(t))
        .take(filters.limit.unwrap_or(usize::MAX))
        .cloned()
        .collect()
}

/// Money in and out of the wallet during one calendar month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyFlow {
    pub year: i32,
    pub month: u32,
    /// Short month name, e.g. "May"
    pub label: String,
    pub credit_minor: i64,
    pub debit_minor: i64,
}

const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Completed credit and debit totals for the `months` calendar months up to
/// and including the month of `now`, oldest first. Months with no activity
/// are present with zero totals.
pub fn monthly_flow(transactions: &[WalletTransaction], now: DateTime<Utc>, months: usize) -> Vec<MonthlyFlow> {
    let current = now.year() * 12 + now.month0() as i32;
    let mut flow: Vec<MonthlyFlow> = (0..months as i32)
        .rev()
        .map(|back| {
            let index = current - back;
            let month0 = index.rem_euclid(12) as u32;
            MonthlyFlow {
                year: index.div_euclid(12),
                month: month0 + 1,
                label: MONTH_LABELS[month0 as usize].to_string(),
                credit_minor: 0,
                debit_minor: 0,
            }
        })
        .collect();

    for transaction in transactions.iter().filter(|t| t.status == TransactionStatus::Completed) {
        let created = transaction.created_at;
        let Some(bucket) = flow
            .iter_mut()
            .find(|m| m.year == created.year() && m.month == created.month())
        else {
            continue;
        };
        let amount = parse_minor_units(&transaction.amount).unwrap_or(0);
        match transaction.transaction_type {
            TransactionType::Credit => bucket.credit_minor += amount,
            TransactionType::Debit => bucket.debit_minor += amount,
        }
    }
    flow
}
