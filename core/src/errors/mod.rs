//! Domain-specific error types and error handling.

mod types;

pub use types::ProviderError;

use std::collections::HashMap;
use thiserror::Error;

use sms_shared::validation::ValidationErrors;

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    /// Payload or message failed validation; carries field path to messages
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        errors: HashMap<String, Vec<String>>,
    },

    /// Request was malformed in a way not covered by field validation
    #[error("Bad request: {message}")]
    BadRequest { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    #[error(transparent)]
    Provider(#[from] ProviderError),
}

impl DomainError {
    pub fn validation(message: impl Into<String>, errors: &ValidationErrors) -> Self {
        DomainError::Validation {
            message: message.into(),
            errors: errors.to_field_errors(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        DomainError::BadRequest {
            message: message.into(),
        }
    }

    /// Field errors when this is a validation failure
    pub fn field_errors(&self) -> Option<&HashMap<String, Vec<String>>> {
        match self {
            DomainError::Validation { errors, .. } => Some(errors),
            _ => None,
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
