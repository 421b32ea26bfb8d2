//! # Data Transfer Objects (DTOs)
//!
//! Data structures exchanged with the wallet REST API.
//!
//! ## Module Organization
//!
//! - [`auth`] - Registration, login, tokens and the user profile
//! - [`wallet`] - Wallet record, transactions, funding and debit
//! - [`error`] - Error body attached to non-2xx responses
//!
//! ## Serialization Format
//!
//! - **Field naming**: snake_case (default serde behavior)
//! - **Optional fields**: Omitted when `None` using `#[serde(skip_serializing_if = "Option::is_none")]`
//! - **Money**: decimal strings
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /api/auth/login/
//! Content-Type: application/json
//!
//! {
//!   "email": "ada@example.com",
//!   "password": "correct-horse"
//! }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "access_token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
//!   "refresh_token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
//!   "user": { "email": "ada@example.com" }
//! }
//! ```

pub mod auth;
pub mod error;
pub mod wallet;

pub use auth::*;
pub use error::*;
pub use wallet::*;
