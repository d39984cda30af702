//! Server configuration module

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server host address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Worker threads (0 = number of CPU cores)
    #[serde(default)]
    pub workers: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("0.0.0.0"),
            port: 8080,
            workers: 0, // Use all CPU cores
        }
    }
}

impl ServerConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    pub fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let port = match lookup("SERVER_PORT") {
            Some(value) => value.parse::<u16>().map_err(|_| ConfigError::Invalid {
                key: "SERVER_PORT".to_string(),
                value,
            })?,
            None => defaults.port,
        };
        let workers = lookup("SERVER_WORKERS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.workers);

        Ok(Self {
            host: lookup("SERVER_HOST").unwrap_or(defaults.host),
            port,
            workers,
        })
    }

    /// Get the bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
