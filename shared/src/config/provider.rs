//! SMS provider configuration module

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Connection settings and message defaults for the SMS provider
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProviderConfig {
    /// Base URL of the provider's message API, without trailing slash
    pub base_url: String,

    /// OAuth2 token endpoint
    pub token_url: String,

    pub client_id: String,

    #[serde(skip_serializing)]
    pub client_secret: String,

    /// Sender id used when a payload does not name one
    pub default_sender: String,

    /// Raw obfuscation option ("None", "Content" or "ContentAndRecipient")
    #[serde(default = "default_obfuscation")]
    pub obfuscation: String,

    /// Timeout for provider requests in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Seconds shaved off a token's lifetime before it is refreshed
    #[serde(default = "default_token_expiry_margin")]
    pub token_expiry_margin_secs: u64,
}

impl ProviderConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(&|key: &str| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| -> Result<String, ConfigError> {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| ConfigError::Missing(key.to_string()))
        };

        let base_url = required("PROVIDER_BASE_URL")?;
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ConfigError::Invalid {
                key: "PROVIDER_BASE_URL".to_string(),
                value: base_url,
            });
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token_url: required("PROVIDER_TOKEN_URL")?,
            client_id: required("PROVIDER_CLIENT_ID")?,
            client_secret: required("PROVIDER_CLIENT_SECRET")?,
            default_sender: required("DEFAULT_SENDER")?,
            obfuscation: lookup("PROVIDER_OBFUSCATION").unwrap_or_else(default_obfuscation),
            request_timeout_secs: lookup("PROVIDER_REQUEST_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(default_request_timeout),
            token_expiry_margin_secs: lookup("PROVIDER_TOKEN_EXPIRY_MARGIN_SECS")
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(default_token_expiry_margin),
        })
    }

    /// Build a URL below the provider base URL
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

fn default_obfuscation() -> String {
    String::from("Content")
}

fn default_request_timeout() -> u64 {
    30
}

fn default_token_expiry_margin() -> u64 {
    60
}
