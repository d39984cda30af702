//! Shared error response structures

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Error body returned by every API endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub message: String,

    /// Field path to error messages, present for validation failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<HashMap<String, Vec<String>>>,

    /// Raw payload returned by the provider, when relaying is enabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            errors: None,
            data: None,
        }
    }

    /// Create an error response carrying field errors
    pub fn with_errors(message: impl Into<String>, errors: HashMap<String, Vec<String>>) -> Self {
        Self {
            message: message.into(),
            errors: Some(errors),
            data: None,
        }
    }

    /// Attach the provider's error payload
    pub fn with_data(mut self, data: Option<serde_json::Value>) -> Self {
        self.data = data;
        self
    }
}

/// Messages used across the application
pub mod error_codes {
    pub const INVALID_PAYLOAD: &str = "Invalid payload";
    pub const INVALID_MESSAGE: &str = "Invalid message";
    pub const MISSING_MESSAGE_ID: &str = "Bad Request: Missing messageId in path parameters";
    pub const MISSING_DELETE_FILTER: &str =
        "Bad Request: Missing messageId or tag in query parameters";
    pub const NOT_FOUND: &str = "The requested resource was not found";
}
