use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Direction of a ledger entry
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionType {
    Credit,
    Debit,
}

/// Lifecycle of a ledger entry: `PENDING` then one of the terminal states
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionStatus {
    Pending,
    Completed,
    Failed,
    Reversed,
}

impl TransactionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TransactionStatus::Pending => "Pending",
            TransactionStatus::Completed => "Completed",
            TransactionStatus::Failed => "Failed",
            TransactionStatus::Reversed => "Reversed",
        }
    }
}

/// What caused a ledger entry
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionSource {
    Funding,
    OrderPayment,
    Refund,
    Reversal,
    AdminAdjustment,
}

impl TransactionSource {
    pub fn label(&self) -> &'static str {
        match self {
            TransactionSource::Funding => "Wallet funding",
            TransactionSource::OrderPayment => "Order payment",
            TransactionSource::Refund => "Refund",
            TransactionSource::Reversal => "Reversal",
            TransactionSource::AdminAdjustment => "Adjustment",
        }
    }
}

/// The signed-in user's wallet (`GET /wallet/`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Wallet {
    pub user: i64,
    pub email: String,
    pub username: String,
    /// Decimal string, e.g. `"1234.50"`
    pub balance: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Immutable ledger entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WalletTransaction {
    pub id: i64,
    pub wallet: i64,
    pub user_email: String,
    pub transaction_type: TransactionType,
    pub amount: String,
    pub balance_before: String,
    pub balance_after: String,
    pub status: TransactionStatus,
    pub source: TransactionSource,
    pub reference: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub metadata: Map<String, Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// `GET /wallet/transactions/`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionListResponse {
    pub count: u64,
    pub transactions: Vec<WalletTransaction>,
}

/// `GET /wallet/balance/`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WalletBalanceResponse {
    pub balance: String,
    pub currency: String,
}

/// Payment gateway used to fund the wallet
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    #[default]
    Paystack,
    Flutterwave,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 2] = [PaymentMethod::Paystack, PaymentMethod::Flutterwave];

    /// Wire identifier, also used as form option value
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Paystack => "paystack",
            PaymentMethod::Flutterwave => "flutterwave",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PaymentMethod::Paystack => "Paystack",
            PaymentMethod::Flutterwave => "Flutterwave",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_str() == value)
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// `POST /wallet/fund/`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FundWalletRequest {
    /// Decimal string; the API accepts both string and number forms
    pub amount: String,
    pub payment_method: PaymentMethod,
}

/// Pending funding intent; the payment itself completes at the gateway
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FundWalletResponse {
    pub message: String,
    pub transaction_reference: String,
    pub amount: String,
    pub payment_method: String,
    pub status: TransactionStatus,
    pub next_step: String,
}

/// `POST /wallet/debit/` (internal; used by checkout flows)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DebitWalletRequest {
    pub amount: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DebitWalletResponse {
    pub message: String,
    pub transaction: WalletTransaction,
}
