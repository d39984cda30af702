//! OAuth2 client credentials token cache
//!
//! One token is shared by every request. It is refreshed when it is within
//! the configured margin of expiring, or after the provider rejects it.

use serde::Deserialize;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

use sms_core::errors::ProviderError;
use sms_core::telemetry;
use sms_shared::config::ProviderConfig;

/// Lifetime assumed when the token endpoint omits `expires_in`
const DEFAULT_TOKEN_LIFETIME_SECS: u64 = 300;

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<u64>,
}

#[derive(Debug, Clone)]
struct CachedToken {
    value: String,
    refresh_at: Instant,
}

/// Fetches and caches provider access tokens
pub struct TokenProvider {
    http: reqwest::Client,
    token_url: String,
    client_id: String,
    client_secret: String,
    margin: Duration,
    cached: RwLock<Option<CachedToken>>,
}

impl TokenProvider {
    pub fn new(http: reqwest::Client, config: &ProviderConfig) -> Self {
        Self {
            http,
            token_url: config.token_url.clone(),
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
            margin: Duration::from_secs(config.token_expiry_margin_secs),
            cached: RwLock::new(None),
        }
    }

    /// Current access token, fetching a new one when needed
    pub async fn token(&self) -> Result<String, ProviderError> {
        if let Some(token) = self.valid_cached().await {
            return Ok(token);
        }

        let mut cached = self.cached.write().await;
        // Another request may have refreshed while we waited for the lock
        if let Some(token) = cached.as_ref().filter(|t| Instant::now() < t.refresh_at) {
            return Ok(token.value.clone());
        }

        let fresh = self.fetch().await?;
        let value = fresh.value.clone();
        *cached = Some(fresh);
        Ok(value)
    }

    /// Drop the cached token so the next request fetches a new one
    pub async fn invalidate(&self) {
        *self.cached.write().await = None;
    }

    async fn valid_cached(&self) -> Option<String> {
        self.cached
            .read()
            .await
            .as_ref()
            .filter(|t| Instant::now() < t.refresh_at)
            .map(|t| t.value.clone())
    }

    async fn fetch(&self) -> Result<CachedToken, ProviderError> {
        let result = self.request_token().await;
        telemetry::record_token_request(result.is_ok());

        match &result {
            Ok(_) => tracing::debug!("Obtained provider access token"),
            Err(e) => tracing::error!(status = ?e.status, error = %e, "Failed to obtain provider access token"),
        }
        result
    }

    async fn request_token(&self) -> Result<CachedToken, ProviderError> {
        let form = [
            ("grant_type", "client_credentials"),
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
        ];

        let response = self
            .http
            .post(&self.token_url)
            .form(&form)
            .send()
            .await
            .map_err(|e| {
                ProviderError::transport(format!(
                    "POST request to '{}' failed: {}",
                    self.token_url, e
                ))
            })?;

        let status = response.status();
        if !status.is_success() {
            // Token failures never relay the token endpoint's status
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::new(
                None,
                format!(
                    "POST request to '{}' failed: {}",
                    self.token_url,
                    status.canonical_reason().unwrap_or("Unknown Status")
                ),
                super::client::error_body(&body),
            ));
        }

        let token: TokenResponse = response.json().await.map_err(|e| {
            ProviderError::transport(format!(
                "POST request to '{}' returned an unreadable token: {}",
                self.token_url, e
            ))
        })?;

        let lifetime = Duration::from_secs(token.expires_in.unwrap_or(DEFAULT_TOKEN_LIFETIME_SECS));
        Ok(CachedToken {
            value: token.access_token,
            refresh_at: Instant::now() + lifetime.saturating_sub(self.margin),
        })
    }
}
