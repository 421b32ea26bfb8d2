//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the wallet web client and the
//! wallet REST API. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: Registration, login, tokens and user profile
//!   - **[`dto::wallet`]**: Wallet, transactions, funding and debit
//!   - **[`dto::error`]**: Error payload returned on non-2xx responses
//! - **[`utils`]**: Shared display helpers
//!   - **[`utils::format_reference`]**: Shorten a transaction reference with an ellipsis
//!   - **[`utils::truncate_reference`]**: `format_reference` with the default 10/4 split
//!
//! ## Wire Format
//!
//! - Field names are **snake_case** on both sides
//! - Monetary values travel as **decimal strings** (`"1234.50"`), never floats
//! - Enum tags that the API sends in upper case (`CREDIT`, `PENDING`) keep that spelling
//! - Timestamps are ISO-8601 and deserialize into `chrono::DateTime<Utc>`
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::wallet::{FundWalletRequest, PaymentMethod};
//!
//! let request = FundWalletRequest {
//!     amount: "5000.00".to_string(),
//!     payment_method: PaymentMethod::Paystack,
//! };
//! let body = serde_json::to_string(&request).unwrap();
//! assert_eq!(body, r#"{"amount":"5000.00","payment_method":"paystack"}"#);
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
pub use dto::*;
pub use utils::*;
