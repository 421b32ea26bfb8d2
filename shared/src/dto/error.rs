use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Per-field validation messages, keyed by field name.
pub type FieldErrors = HashMap<String, Vec<String>>;

/// The `error` member of an error payload: a plain message, or the
/// serializer's field errors when request validation fails.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum ErrorField {
    Message(String),
    Fields(FieldErrors),
}

/// Error payload returned by the API on non-2xx responses.
///
/// Views either set `error` explicitly or fall through to the framework's
/// `detail`. Validation failures put the field map under `error`; some
/// responses use a separate `errors` member for it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
}

/// First message of the alphabetically first field that has one.
fn first_field_message(fields: &FieldErrors) -> Option<&str> {
    fields
        .iter()
        .filter_map(|(field, messages)| messages.first().map(|m| (field, m)))
        .min_by(|a, b| a.0.cmp(b.0))
        .map(|(_, message)| message.as_str())
}

impl ErrorBody {
    /// `error` (or its first field message), else `detail`
    pub fn message(&self) -> Option<&str> {
        let from_error = match &self.error {
            Some(ErrorField::Message(message)) => Some(message.as_str()),
            Some(ErrorField::Fields(fields)) => first_field_message(fields),
            None => None,
        };
        from_error.or(self.detail.as_deref())
    }

    /// `errors` if present, else the field map carried under `error`.
    pub fn into_field_errors(self) -> Option<FieldErrors> {
        match (self.errors, self.error) {
            (Some(errors), _) => Some(errors),
            (None, Some(ErrorField::Fields(fields))) => Some(fields),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_preferred_over_detail() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"error":"Insufficient balance","detail":"x"}"#).unwrap();
        assert_eq!(body.message(), Some("Insufficient balance"));
        assert!(body.into_field_errors().is_none());
    }

    #[test]
    fn test_detail_fallback() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"detail":"Authentication credentials were not provided."}"#)
                .unwrap();
        assert_eq!(
            body.message(),
            Some("Authentication credentials were not provided.")
        );
        assert_eq!(ErrorBody::default().message(), None);
    }

    #[test]
    fn test_serializer_errors_under_error() {
        let body: ErrorBody = serde_json::from_str(
            r#"{"error":{"payment_method":["\"cash\" is not a valid choice."],
                "amount":["Ensure that there are no more than 12 digits in total."]}}"#,
        )
        .unwrap();
        assert_eq!(
            body.message(),
            Some("Ensure that there are no more than 12 digits in total.")
        );

        let fields = body.into_field_errors().unwrap();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields["payment_method"], vec!["\"cash\" is not a valid choice.".to_string()]);
    }
}
