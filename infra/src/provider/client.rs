//! Authenticated HTTP calls to the provider
//!
//! Every call carries a bearer token from [`TokenProvider`]. Non-2xx
//! responses become a [`ProviderError`] holding the status and the response
//! body, parsed as JSON when possible.

use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

use sms_core::errors::ProviderError;
use sms_core::telemetry;
use sms_shared::config::ProviderConfig;

use super::token::TokenProvider;
use crate::InfrastructureError;

/// reqwest client plus token cache for the provider API
pub struct ProviderClient {
    http: reqwest::Client,
    tokens: TokenProvider,
}

impl ProviderClient {
    pub fn new(config: &ProviderConfig) -> Result<Self, InfrastructureError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        let tokens = TokenProvider::new(http.clone(), config);

        Ok(Self { http, tokens })
    }

    pub async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, ProviderError> {
        let response = self.send(Method::GET, url, |r| r).await?;
        read_json(&Method::GET, url, response).await
    }

    pub async fn post<B, T>(&self, url: &str, body: &B) -> Result<T, ProviderError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.send(Method::POST, url, |r| r.json(body)).await?;
        read_json(&Method::POST, url, response).await
    }

    pub async fn delete(&self, url: &str, query: &[(&str, &str)]) -> Result<(), ProviderError> {
        self.send(Method::DELETE, url, |r| r.query(query)).await?;
        Ok(())
    }

    async fn send<F>(&self, method: Method, url: &str, build: F) -> Result<Response, ProviderError>
    where
        F: FnOnce(RequestBuilder) -> RequestBuilder,
    {
        let token = self.tokens.token().await?;
        let request = build(self.http.request(method.clone(), url).bearer_auth(token));

        tracing::debug!(method = %method, url = %url, "Calling provider");

        let result = match request.send().await {
            Ok(response) if response.status().is_success() => {
                tracing::info!(
                    method = %method,
                    url = %url,
                    status = response.status().as_u16(),
                    "Provider request succeeded"
                );
                Ok(response)
            }
            Ok(response) => Err(self.status_error(&method, url, response).await),
            Err(e) => Err(ProviderError::transport(format!(
                "{} request to '{}' failed: {}",
                method, url, e
            ))),
        };

        telemetry::record_provider_request(method.as_str(), result.is_ok());
        result
    }

    async fn status_error(&self, method: &Method, url: &str, response: Response) -> ProviderError {
        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            self.tokens.invalidate().await;
        }

        let body = response.text().await.unwrap_or_default();
        ProviderError::http(
            status.as_u16(),
            format!(
                "{} request to '{}' failed: {}",
                method,
                url,
                status.canonical_reason().unwrap_or("Unknown Status")
            ),
            error_body(&body),
        )
    }
}

async fn read_json<T: DeserializeOwned>(
    method: &Method,
    url: &str,
    response: Response,
) -> Result<T, ProviderError> {
    response.json().await.map_err(|e| {
        ProviderError::transport(format!(
            "{} request to '{}' returned an unreadable body: {}",
            method, url, e
        ))
    })
}

/// Provider error body as JSON, or as a plain string when it is not JSON
pub(crate) fn error_body(body: &str) -> Option<Value> {
    if body.trim().is_empty() {
        return None;
    }
    Some(serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string())))
}
