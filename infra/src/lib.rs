//! # Infrastructure Layer
//!
//! Concrete implementations behind the core crate's seams:
//! - **Provider**: reqwest client for the SMS provider's REST API, with an
//!   OAuth2 client credentials token cache
//! - **Metrics**: Prometheus recorder installation and rendering

/// SMS provider HTTP gateway
pub mod provider;

/// Prometheus metrics exporter
pub mod metrics;

pub use self::metrics::PrometheusExporter;
pub use provider::{ProviderClient, ProviderGateway, TokenProvider};

use sms_shared::config::ConfigError;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// HTTP client could not be built
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Metrics recorder error
    #[error("Metrics error: {0}")]
    Metrics(String),
}
