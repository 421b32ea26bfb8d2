//! # Error Types
//!
//! Every request-layer failure is an [`ApiError`]: a tagged value carrying
//! what went wrong ([`ApiErrorKind`]), a user-facing message and, when the
//! server answered, the HTTP status.
//!
//! ## Error Categories
//!
//! - **Network**: the fetch itself failed (offline, CORS, DNS)
//! - **Http**: the server answered with a non-2xx status
//! - **Unauthenticated**: no access token was stored, so no request was sent
//! - **Decode**: a 2xx body did not match the expected shape
//!
//! Form input problems are [`ValidationError`]s and never reach the network.

use shared::{ErrorBody, FieldErrors};
use thiserror::Error;

/// Message shown when nothing more specific is known.
pub const GENERIC_ERROR_MESSAGE: &str = "An unexpected error occurred.";

/// Message of the synthesized 401 raised when no token is stored.
pub const MISSING_TOKEN_MESSAGE: &str = "Unauthenticated: no access token found.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    Network,
    Http,
    Unauthenticated,
    Decode,
}

/// Tagged request-layer error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
    pub status: Option<u16>,
    pub detail: Option<String>,
    pub errors: Option<FieldErrors>,
}

impl ApiError {
    pub fn network(message: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::Network,
            message: message.into(),
            status: None,
            detail: None,
            errors: None,
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::Decode,
            message: message.into(),
            status: None,
            detail: None,
            errors: None,
        }
    }

    /// Synthesized client-side before any network call.
    pub fn missing_token() -> Self {
        Self {
            kind: ApiErrorKind::Unauthenticated,
            message: MISSING_TOKEN_MESSAGE.to_string(),
            status: Some(401),
            detail: None,
            errors: None,
        }
    }

    /// Build an HTTP error from the parsed body; `fallback` is used when the
    /// body carries neither `error` nor `detail`. Field errors sent under
    /// `error` end up in `errors`.
    pub fn from_body(status: u16, body: ErrorBody, fallback: impl FnOnce(u16) -> String) -> Self {
        let message = body
            .message()
            .map(str::to_string)
            .unwrap_or_else(|| fallback(status));
        let detail = body.detail.clone();
        Self {
            kind: ApiErrorKind::Http,
            message,
            status: Some(status),
            detail,
            errors: body.into_field_errors(),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status == Some(401)
    }

    /// Text a state container stores for display. Server-supplied and
    /// synthesized messages pass through; transport and decode failures
    /// collapse into [`GENERIC_ERROR_MESSAGE`].
    pub fn display_message(&self) -> String {
        match self.kind {
            ApiErrorKind::Http | ApiErrorKind::Unauthenticated => self.message.clone(),
            ApiErrorKind::Network | ApiErrorKind::Decode => GENERIC_ERROR_MESSAGE.to_string(),
        }
    }
}

/// Failure of the underlying transport, before any HTTP status exists.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Failed to build request: {0}")]
    Request(String),
}

impl From<TransportError> for ApiError {
    fn from(err: TransportError) -> Self {
        ApiError::network(err.to_string())
    }
}

/// Client-side form validation failure. `Display` is the inline message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill out all fields")]
    MissingFields,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Password must be at least {0} characters long")]
    PasswordTooShort(usize),
    #[error("Please enter a valid amount")]
    InvalidAmount,
    #[error("Minimum funding amount is ₦{0}")]
    BelowMinimum(String),
    #[error("Please choose a payment method")]
    InvalidPaymentMethod,
}
