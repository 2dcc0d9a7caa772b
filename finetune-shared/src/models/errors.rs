use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Error body returned by the academy API.
///
/// The server answers with one of several shapes: `{"non_field_errors": [..]}`,
/// `{"detail": ".."}`, `{"error": ".."}` or field-keyed validation arrays such
/// as `{"correo": [".."]}`. All of them deserialize into this type.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ErrorResponse {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub non_field_errors: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Remaining keys, usually per-field validation messages.
    #[serde(flatten)]
    pub fields: BTreeMap<String, serde_json::Value>,
}

impl ErrorResponse {
    /// Creates an error response carrying a single general message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            non_field_errors: vec![message.into()],
            ..Self::default()
        }
    }

    /// The first human-readable message in the body, if any.
    ///
    /// General errors win over `detail`, which wins over `error`; field
    /// errors are consulted last, in key order.
    #[must_use]
    pub fn first_message(&self) -> Option<String> {
        self.non_field_errors
            .first()
            .cloned()
            .or_else(|| self.detail.clone())
            .or_else(|| self.error.clone())
            .or_else(|| self.fields.values().find_map(message_from_value))
    }
}

fn message_from_value(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(text) => Some(text.clone()),
        serde_json::Value::Array(items) => items.iter().find_map(message_from_value),
        _ => None,
    }
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.first_message() {
            Some(message) => f.write_str(&message),
            None => f.write_str("unknown error"),
        }
    }
}

impl std::error::Error for ErrorResponse {}
