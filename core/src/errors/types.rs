//! Error raised by calls to the SMS provider

use serde_json::Value;
use thiserror::Error;

/// Failure reported by the provider or by the transport reaching it
///
/// `status` is the provider's HTTP status. It is `None` when no response was
/// received at all.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct ProviderError {
    pub status: Option<u16>,
    pub message: String,
    /// Provider error body, parsed as JSON when possible
    pub data: Option<Value>,
}

impl ProviderError {
    pub fn new(status: Option<u16>, message: impl Into<String>, data: Option<Value>) -> Self {
        Self {
            status,
            message: message.into(),
            data,
        }
    }

    /// Non-2xx response from the provider
    pub fn http(status: u16, message: impl Into<String>, data: Option<Value>) -> Self {
        Self::new(Some(status), message, data)
    }

    /// The provider could not be reached
    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(None, message, None)
    }
}
