//! Form validation
//!
//! Each validator returns the first failing rule as a [`ValidationError`];
//! its `Display` text is what the form shows inline.

use std::sync::LazyLock;

use regex::Regex;
use shared::{FundWalletRequest, PaymentMethod};

use crate::error::ValidationError;
use crate::utils::constants::{MIN_FUNDING_MINOR_UNITS, MIN_PASSWORD_LEN};
use crate::utils::format::parse_minor_units;

static EMAIL_PATTERN: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$"));

// Positive decimal, at most two fraction digits
static AMOUNT_PATTERN: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"^\d+(\.\d{1,2})?$"));

fn pattern_matches(pattern: &LazyLock<Result<Regex, regex::Error>>, value: &str) -> bool {
    match pattern.as_ref() {
        Ok(re) => re.is_match(value),
        Err(e) => {
            log::error!("invalid validation pattern: {}", e);
            false
        }
    }
}

pub fn is_valid_email(email: &str) -> bool {
    pattern_matches(&EMAIL_PATTERN, email)
}

/// Parse a user-entered amount into minor units.
pub fn parse_amount(input: &str) -> Result<i64, ValidationError> {
    let input = input.trim();
    if !pattern_matches(&AMOUNT_PATTERN, input) {
        return Err(ValidationError::InvalidAmount);
    }
    match parse_minor_units(input) {
        Some(minor) if minor > 0 => Ok(minor),
        _ => Err(ValidationError::InvalidAmount),
    }
}

fn any_blank(fields: &[&str]) -> bool {
    fields.iter().any(|f| f.trim().is_empty())
}

pub fn validate_sign_in(email: &str, password: &str) -> Result<(), ValidationError> {
    if any_blank(&[email, password]) {
        return Err(ValidationError::MissingFields);
    }
    if !is_valid_email(email.trim()) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

pub fn validate_sign_up(name: &str, email: &str, password: &str) -> Result<(), ValidationError> {
    if any_blank(&[name, email, password]) {
        return Err(ValidationError::MissingFields);
    }
    if !is_valid_email(email.trim()) {
        return Err(ValidationError::InvalidEmail);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort(MIN_PASSWORD_LEN));
    }
    Ok(())
}

/// Validate the funding form and build the request with a normalized
/// two-decimal amount.
pub fn validate_funding(amount: &str, payment_method: &str) -> Result<FundWalletRequest, ValidationError> {
    let minor = parse_amount(amount)?;
    if minor < MIN_FUNDING_MINOR_UNITS {
        return Err(ValidationError::BelowMinimum(format!(
            "{}.{:02}",
            MIN_FUNDING_MINOR_UNITS / 100,
            MIN_FUNDING_MINOR_UNITS % 100
        )));
    }
    let payment_method = PaymentMethod::parse(payment_method).ok_or(ValidationError::InvalidPaymentMethod)?;

    Ok(FundWalletRequest {
        amount: format!("{}.{:02}", minor / 100, minor % 100),
        payment_method,
    })
}
