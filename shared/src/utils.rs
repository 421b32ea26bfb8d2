//! # Shared Utility Functions
//!
//! Display helpers that any client of the wallet API needs.
//!
//! ## Reference Formatting
//!
//! Transaction references such as `TXN-A1B2C3D4E5F6A7B8` are long and mostly noise:
//! - [`format_reference`] - Keep the first N and last M characters around an ellipsis
//! - [`truncate_reference`] - `format_reference` with the 10/4 split used in lists
//! - [`truncate_text`] - Cut free text at a character budget
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::truncate_reference;
//!
//! assert_eq!(truncate_reference("TXN-A1B2C3D4E5F6A7B8"), "TXN-A1B2C3...A7B8");
//! assert_eq!(truncate_reference("TXN-A1B2C3D4E5F6"), "TXN-A1B2C3D4E5F6");
//! ```

/// Shorten `reference` to its first `prefix_len` and last `suffix_len` characters.
///
/// References of at most `max_len` characters are returned unchanged.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_reference;
///
/// assert_eq!(format_reference("FUND-20240502-XYZ987", 12, 4, 3), "FUND...987");
/// assert_eq!(format_reference("short", 12, 4, 4), "short");
/// ```
pub fn format_reference(reference: &str, max_len: usize, prefix_len: usize, suffix_len: usize) -> String {
    let chars: Vec<char> = reference.chars().collect();
    let len = chars.len();

    if len <= max_len || prefix_len + suffix_len >= len {
        return reference.to_string();
    }

    let prefix: String = chars[..prefix_len].iter().collect();
    let suffix: String = chars[len - suffix_len..].iter().collect();

    format!("{}...{}", prefix, suffix)
}

/// References longer than 16 characters become `first10...last4`.
pub fn truncate_reference(reference: &str) -> String {
    format_reference(reference, 16, 10, 4)
}

/// Cut `text` after `max_len` characters and append `...`.
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }
    let head: String = text.chars().take(max_len).collect();
    format!("{}...", head)
}
