//! # Formatting Utilities for Wallet Web
//!
//! Money and date formatting for display.
//!
//! Amounts arrive from the API as decimal strings ("15000.50"). They are
//! converted to integer minor units (kobo for NGN) before any grouping so
//! that no precision is lost on the way to the screen.
//!
//! ## Functions
//!
//! - [`format_currency`] - Amount with currency symbol and locale grouping
//! - [`format_amount`] - Amount with `en-NG` grouping, no symbol
//! - [`format_date`] / [`format_relative_time`] - Timestamps
//! - [`percentage_change`] / [`format_percentage`] - Period comparisons

use chrono::{DateTime, Utc};

use crate::utils::constants::DEFAULT_LOCALE;

/// Parse a decimal string into minor units (hundredths), rounding any
/// further fraction digits half away from zero.
///
/// ```rust
/// use wallet_web::utils::format::parse_minor_units;
///
/// assert_eq!(parse_minor_units("1234.5"), Some(123_450));
/// assert_eq!(parse_minor_units("-0.005"), Some(-1));
/// assert_eq!(parse_minor_units("abc"), None);
/// ```
pub fn parse_minor_units(amount: &str) -> Option<i64> {
    let amount = amount.trim();
    let (negative, digits) = match amount.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, amount.strip_prefix('+').unwrap_or(amount)),
    };

    let (whole, fraction) = match digits.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (digits, ""),
    };
    if whole.is_empty() && fraction.is_empty() {
        return None;
    }
    if !whole.chars().all(|c| c.is_ascii_digit()) || !fraction.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let whole: i64 = if whole.is_empty() { 0 } else { whole.parse().ok()? };
    let mut cents: i64 = 0;
    for (i, ch) in fraction.chars().take(2).enumerate() {
        let digit = i64::from(ch.to_digit(10)?);
        cents += if i == 0 { digit * 10 } else { digit };
    }
    if fraction.chars().nth(2).is_some_and(|c| c >= '5') {
        cents += 1;
    }

    let minor = whole.checked_mul(100)?.checked_add(cents)?;
    Some(if negative { -minor } else { minor })
}

/// Group separator and decimal mark for a locale tag.
fn separators(locale: &str) -> (char, char) {
    let language = locale
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();
    match language.as_str() {
        "de" | "fr" | "es" | "it" | "pt" | "nl" | "id" | "tr" => ('.', ','),
        _ => (',', '.'),
    }
}

fn group_digits(integer: &str, group: char) -> String {
    let mut result = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            result.push(group);
        }
        result.push(ch);
    }
    result
}

/// Minor units to a grouped two-decimal string, sign excluded.
fn format_minor_units(minor: i64, locale: &str) -> String {
    let (group, decimal) = separators(locale);
    let abs = minor.unsigned_abs();
    let integer = (abs / 100).to_string();
    format!("{}{}{:02}", group_digits(&integer, group), decimal, abs % 100)
}

fn currency_symbol(currency: &str) -> String {
    match currency.to_ascii_uppercase().as_str() {
        "NGN" => "₦".to_string(),
        "USD" => "$".to_string(),
        "EUR" => "€".to_string(),
        "GBP" => "£".to_string(),
        other => format!("{} ", other),
    }
}

/// Format a number with commas (e.g., 1234567.89 -> "1,234,567.89")
///
/// # Examples
///
/// ```rust
/// use wallet_web::utils::format::format_number;
///
/// assert_eq!(format_number(1234567.89, 2), "1,234,567.89");
/// assert_eq!(format_number(-100.0, 0), "-100");
/// ```
pub fn format_number(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.prec$}", value.abs(), prec = decimals);
    let (integer, fraction) = match formatted.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (formatted.as_str(), None),
    };

    let sign = if value < 0.0 && formatted.chars().any(|c| c != '0' && c != '.') {
        "-"
    } else {
        ""
    };
    match fraction {
        Some(fraction) => format!("{}{}.{}", sign, group_digits(integer, ','), fraction),
        None => format!("{}{}", sign, group_digits(integer, ',')),
    }
}

/// Format a decimal amount as money. Unparseable input formats as zero.
///
/// # Examples
///
/// ```rust
/// use wallet_web::utils::format::format_currency;
///
/// assert_eq!(format_currency("1234.5", "NGN", "en-NG"), "₦1,234.50");
/// assert_eq!(format_currency("-20", "EUR", "de-DE"), "-€20,00");
/// ```
pub fn format_currency(amount: &str, currency: &str, locale: &str) -> String {
    format_minor_currency(parse_minor_units(amount).unwrap_or(0), currency, locale)
}

/// [`format_currency`] for a value already in minor units
pub fn format_minor_currency(minor: i64, currency: &str, locale: &str) -> String {
    let sign = if minor < 0 { "-" } else { "" };
    format!("{}{}{}", sign, currency_symbol(currency), format_minor_units(minor, locale))
}

/// Grouped two-decimal amount without a currency symbol
pub fn format_amount(amount: &str) -> String {
    let minor = parse_minor_units(amount).unwrap_or(0);
    let sign = if minor < 0 { "-" } else { "" };
    format!("{}{}", sign, format_minor_units(minor, DEFAULT_LOCALE))
}

/// "2 May 2024, 10:15"
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%-d %b %Y, %H:%M").to_string()
}

/// "2 May 2024"
pub fn format_short_date(date: &DateTime<Utc>) -> String {
    date.format("%-d %b %Y").to_string()
}

/// "2 May 2024" with the full month name, used for grouping headers
pub fn format_long_date(date: &DateTime<Utc>) -> String {
    date.format("%-d %B %Y").to_string()
}

/// Age of `date` relative to `now`; a week or more falls back to the short date.
pub fn format_relative_time(date: &DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - *date).num_seconds();
    match seconds {
        s if s < 60 => "Just now".to_string(),
        s if s < 3_600 => format!("{} minutes ago", s / 60),
        s if s < 86_400 => format!("{} hours ago", s / 3_600),
        s if s < 604_800 => format!("{} days ago", s / 86_400),
        _ => format_short_date(date),
    }
}

/// Percent change from `previous` to `current`; 0 when there is no baseline.
pub fn percentage_change(current: f64, previous: f64) -> f64 {
    if previous == 0.0 {
        return 0.0;
    }
    (current - previous) / previous * 100.0
}

/// Format percentage change with sign
pub fn format_percentage(pct: f64) -> String {
    if pct >= 0.0 {
        format!("+{:.2}%", pct)
    } else {
        format!("{:.2}%", pct)
    }
}
