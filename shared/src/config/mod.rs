//! Configuration module with business-specific sub-modules
//!
//! - `environment` - Environment detection and default log filter
//! - `provider` - SMS provider endpoints, credentials and message defaults
//! - `server` - HTTP server binding

pub mod environment;
pub mod provider;
pub mod server;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use environment::Environment;
pub use provider::ProviderConfig;
pub use server::ServerConfig;

/// Errors raised while loading configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} not set")]
    Missing(String),

    #[error("{key} has an invalid value: {value}")]
    Invalid { key: String, value: String },
}

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    pub environment: Environment,

    pub server: ServerConfig,

    pub provider: ProviderConfig,

    /// Relay the provider's raw error body to callers
    #[serde(default = "default_include_error_data")]
    pub include_error_data: bool,
}

impl AppConfig {
    /// Load configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let include_error_data = match lookup("INCLUDE_ERROR_DATA") {
            Some(value) => parse_bool("INCLUDE_ERROR_DATA", &value)?,
            None => default_include_error_data(),
        };

        Ok(Self {
            environment: Environment::from_lookup(&lookup),
            server: ServerConfig::from_lookup(&lookup)?,
            provider: ProviderConfig::from_lookup(&lookup)?,
            include_error_data,
        })
    }
}

fn default_include_error_data() -> bool {
    true
}

pub(crate) fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::Invalid {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}
