//! [`SmsProvider`] implementation over the provider's REST API

use async_trait::async_trait;
use reqwest::Url;

use sms_core::domain::entities::ProviderSmsMessage;
use sms_core::domain::value_objects::{
    ProviderSmsMessageResponse, ScheduledMessageDetail, ScheduledSmsMessagesPage,
};
use sms_core::errors::ProviderError;
use sms_core::services::scheduled::ScheduledMessageFilter;
use sms_core::services::sms::SmsProvider;
use sms_shared::config::ProviderConfig;

use super::client::ProviderClient;
use crate::InfrastructureError;

const MESSAGES_PATH: &str = "messages";
const SCHEDULES_PATH: &str = "schedules";

/// Provider gateway used by the running service
pub struct ProviderGateway {
    client: ProviderClient,
    config: ProviderConfig,
}

impl ProviderGateway {
    pub fn new(config: ProviderConfig) -> Result<Self, InfrastructureError> {
        let client = ProviderClient::new(&config)?;

        tracing::info!(
            base_url = %config.base_url,
            timeout_secs = config.request_timeout_secs,
            "Provider gateway initialized"
        );

        Ok(Self { client, config })
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self, InfrastructureError> {
        Self::new(ProviderConfig::from_env()?)
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    fn schedule_url(&self, message_id: &str) -> Result<String, ProviderError> {
        let base = self.config.endpoint(SCHEDULES_PATH);
        let mut url = Url::parse(&base)
            .map_err(|e| ProviderError::transport(format!("Invalid provider URL '{}': {}", base, e)))?;
        url.path_segments_mut()
            .map_err(|_| ProviderError::transport(format!("Invalid provider URL '{}'", base)))?
            .push(message_id);
        Ok(url.to_string())
    }
}

#[async_trait]
impl SmsProvider for ProviderGateway {
    async fn submit_messages(
        &self,
        messages: &[ProviderSmsMessage],
    ) -> Result<ProviderSmsMessageResponse, ProviderError> {
        self.client
            .post(&self.config.endpoint(MESSAGES_PATH), messages)
            .await
    }

    async fn list_scheduled(
        &self,
        query: Option<&str>,
    ) -> Result<ScheduledSmsMessagesPage, ProviderError> {
        let base = self.config.endpoint(SCHEDULES_PATH);
        let url = match query.filter(|q| !q.is_empty()) {
            Some(query) => format!("{}?{}", base, query),
            None => base,
        };
        self.client.get(&url).await
    }

    async fn get_scheduled(&self, message_id: &str) -> Result<ScheduledMessageDetail, ProviderError> {
        let url = self.schedule_url(message_id)?;
        self.client.get(&url).await
    }

    async fn delete_scheduled(&self, filter: &ScheduledMessageFilter) -> Result<(), ProviderError> {
        self.client
            .delete(&self.config.endpoint(SCHEDULES_PATH), &filter.query_pairs())
            .await
    }
}
