//! Builds provider messages from a caller payload

use chrono::{DateTime, Utc};

use sms_shared::errors::error_codes;
use sms_shared::phone::{mask_phone_number, normalize_receiver};

use crate::domain::entities::{
    MessageContent, MessageSchedule, PayloadSmsMessage, ProviderSmsMessage, SmsOptions,
};
use crate::domain::value_objects::{Encoding, ObfuscateOption};
use crate::errors::{DomainError, DomainResult};
use crate::services::validation::validate_message_at;

/// Turns one payload into one provider message per receiver
#[derive(Debug, Clone, Copy)]
pub struct MessageBuilder<'a> {
    default_sender: &'a str,
    obfuscate: Option<ObfuscateOption>,
}

impl<'a> MessageBuilder<'a> {
    pub fn new(default_sender: &'a str, obfuscate: Option<ObfuscateOption>) -> Self {
        Self {
            default_sender,
            obfuscate,
        }
    }

    /// Build the message for a single receiver without validating it
    pub fn build(&self, receiver: &str, payload: &PayloadSmsMessage) -> ProviderSmsMessage {
        let sender = payload
            .sender
            .clone()
            .unwrap_or_else(|| self.default_sender.to_string());

        ProviderSmsMessage {
            recipient: normalize_receiver(receiver),
            content: MessageContent {
                text: payload.message.clone(),
                options: SmsOptions {
                    encoding: Encoding::Gsm,
                    sender,
                    obfuscate: self.obfuscate,
                },
            },
            schedule: payload.timing().map(MessageSchedule::from_timing),
            expiration: None,
            callback: None,
            // Shared by every message in the batch; an empty id is dropped
            reference_id: payload.reference_id.clone().filter(|r| !r.is_empty()),
            priority: None,
        }
    }

    /// Build and validate every message in receiver order
    ///
    /// Stops at the first message that fails validation and returns only
    /// that message's errors; later receivers are never built.
    pub fn build_all(
        &self,
        payload: &PayloadSmsMessage,
        now: DateTime<Utc>,
    ) -> DomainResult<Vec<ProviderSmsMessage>> {
        let mut messages = Vec::with_capacity(payload.receivers.len());

        for (index, receiver) in payload.receivers.iter().enumerate() {
            let message = self.build(receiver, payload);

            if let Err(errors) = validate_message_at(&message, now) {
                let fields: Vec<String> = errors.to_field_errors().into_keys().collect();
                tracing::warn!(
                    receiver = %mask_phone_number(receiver),
                    position = index + 1,
                    fields = ?fields,
                    "Provider message validation failed"
                );
                return Err(DomainError::validation(
                    format!("{} for receiver {}", error_codes::INVALID_MESSAGE, index + 1),
                    &errors,
                ));
            }

            messages.push(message);
        }

        Ok(messages)
    }
}
