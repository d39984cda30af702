//! Send orchestrator: validate, build, submit, report

use chrono::{DateTime, Utc};
use serde_json::Value;
use std::sync::Arc;

use sms_shared::errors::error_codes;

use crate::domain::entities::{PayloadSmsMessage, ProviderSmsMessage};
use crate::domain::value_objects::{resolve_obfuscation, ProviderSmsMessageResponse};
use crate::errors::{DomainError, DomainResult};
use crate::services::validation::validate_payload;
use crate::telemetry;

use super::builder::MessageBuilder;
use super::config::SmsServiceConfig;
use super::traits::SmsProvider;

/// Service handling the send endpoint
pub struct SmsService<P: SmsProvider> {
    provider: Arc<P>,
    config: SmsServiceConfig,
}

impl<P: SmsProvider> SmsService<P> {
    pub fn new(provider: Arc<P>, config: SmsServiceConfig) -> Self {
        Self { provider, config }
    }

    pub fn config(&self) -> &SmsServiceConfig {
        &self.config
    }

    /// Send or schedule the messages described by a raw request body
    ///
    /// A body that is not JSON counts as a failed attempt.
    pub async fn send_sms_body(&self, body: &[u8]) -> DomainResult<ProviderSmsMessageResponse> {
        self.send_sms_body_at(body, Utc::now()).await
    }

    pub async fn send_sms_body_at(
        &self,
        body: &[u8],
        now: DateTime<Utc>,
    ) -> DomainResult<ProviderSmsMessageResponse> {
        let payload: Value = match serde_json::from_slice(body) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::warn!(error = %e, "Request body is not JSON");
                telemetry::record_send(false, 0);
                return Err(DomainError::bad_request(format!(
                    "{}: {}",
                    error_codes::INVALID_PAYLOAD,
                    e
                )));
            }
        };

        self.send_sms_at(&payload, now).await
    }

    /// Send or schedule the messages described by a JSON payload
    pub async fn send_sms(&self, body: &Value) -> DomainResult<ProviderSmsMessageResponse> {
        self.send_sms_at(body, Utc::now()).await
    }

    /// Same as [`send_sms`](Self::send_sms) with an explicit validation clock
    ///
    /// Every outcome records one attempt and the number of submitted
    /// messages, tagged success or failed. Nothing reaches the provider
    /// unless the payload and every built message are valid.
    pub async fn send_sms_at(
        &self,
        body: &Value,
        now: DateTime<Utc>,
    ) -> DomainResult<ProviderSmsMessageResponse> {
        let (payload, messages) = match self.prepare(body, now) {
            Ok(prepared) => prepared,
            Err(e) => {
                telemetry::record_send(false, 0);
                return Err(e);
            }
        };

        let timing = payload.timing();
        let scheduled = timing.as_ref().map(|t| format!(" {}", t)).unwrap_or_default();
        let obfuscation = messages
            .first()
            .and_then(|m| m.content.options.obfuscate)
            .map(|o| format!("with {} obfuscation", o))
            .unwrap_or_else(|| "without obfuscation".to_string());
        let count = messages.len();
        let (action, done, verb) = match timing {
            Some(_) => ("Scheduling", "Scheduled", "schedule"),
            None => ("Sending", "Sent", "send"),
        };

        tracing::info!(
            message_count = count,
            "{} {} SMS message(s) {}{}",
            action,
            count,
            obfuscation,
            scheduled
        );

        match self.provider.submit_messages(&messages).await {
            Ok(response) => {
                tracing::info!(
                    request_id = %response.request_id,
                    message_count = count,
                    "{} {} SMS message(s){}",
                    done,
                    count,
                    scheduled
                );
                telemetry::record_send(true, count);
                Ok(response)
            }
            Err(e) => {
                tracing::error!(
                    status = ?e.status,
                    error = %e,
                    message_count = count,
                    "Failed to {} {} SMS message(s){}",
                    verb,
                    count,
                    scheduled
                );
                telemetry::record_send(false, count);
                Err(DomainError::Provider(e))
            }
        }
    }

    fn prepare(
        &self,
        body: &Value,
        now: DateTime<Utc>,
    ) -> DomainResult<(PayloadSmsMessage, Vec<ProviderSmsMessage>)> {
        if let Err(errors) = validate_payload(body) {
            let fields: Vec<String> = errors.to_field_errors().into_keys().collect();
            tracing::warn!(fields = ?fields, "Payload validation failed");
            return Err(DomainError::validation(error_codes::INVALID_PAYLOAD, &errors));
        }

        let payload: PayloadSmsMessage = serde_json::from_value(body.clone()).map_err(|e| {
            tracing::warn!(error = %e, "Payload could not be read");
            DomainError::bad_request(format!("{}: {}", error_codes::INVALID_PAYLOAD, e))
        })?;

        let obfuscate = resolve_obfuscation(self.config.obfuscation.as_deref());
        let messages = MessageBuilder::new(&self.config.default_sender, obfuscate)
            .build_all(&payload, now)?;

        Ok((payload, messages))
    }
}
