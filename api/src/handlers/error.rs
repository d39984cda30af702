//! Mapping from domain errors to HTTP responses

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use std::fmt;

use sms_core::errors::DomainError;
use sms_shared::errors::ErrorResponse;

/// Domain error on its way out of a handler
///
/// `include_data` controls whether a provider error body is relayed.
#[derive(Debug)]
pub struct ApiError {
    error: DomainError,
    include_data: bool,
}

impl ApiError {
    pub fn new(error: DomainError, include_data: bool) -> Self {
        Self {
            error,
            include_data,
        }
    }

    pub fn domain_error(&self) -> &DomainError {
        &self.error
    }

    fn body(&self) -> ErrorResponse {
        match &self.error {
            DomainError::Validation { message, errors } => {
                ErrorResponse::with_errors(message.clone(), errors.clone())
            }
            DomainError::BadRequest { message } => ErrorResponse::new(message.clone()),
            DomainError::Provider(e) => {
                let data = if self.include_data { e.data.clone() } else { None };
                ErrorResponse::new(e.message.clone()).with_data(data)
            }
            DomainError::Internal { .. } => ErrorResponse::new("Internal server error"),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match &self.error {
            DomainError::Validation { .. } | DomainError::BadRequest { .. } => {
                StatusCode::BAD_REQUEST
            }
            // Only error statuses are relayed; anything else means the call never completed
            DomainError::Provider(e) => e
                .status
                .and_then(|s| StatusCode::from_u16(s).ok())
                .filter(|s| s.is_client_error() || s.is_server_error())
                .unwrap_or(StatusCode::BAD_GATEWAY),
            DomainError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %self.error, "Request failed");
        } else {
            tracing::warn!(status = status.as_u16(), error = %self.error, "Request rejected");
        }

        HttpResponse::build(status).json(self.body())
    }
}
