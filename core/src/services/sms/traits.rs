//! Seam to the SMS provider's HTTP API

use async_trait::async_trait;

use crate::domain::entities::ProviderSmsMessage;
use crate::domain::value_objects::{
    ProviderSmsMessageResponse, ScheduledMessageDetail, ScheduledSmsMessagesPage,
};
use crate::errors::ProviderError;
use crate::services::scheduled::ScheduledMessageFilter;

/// Operations the facade performs against the provider
#[async_trait]
pub trait SmsProvider: Send + Sync {
    /// Submit a batch in one call (`POST /messages`)
    async fn submit_messages(
        &self,
        messages: &[ProviderSmsMessage],
    ) -> Result<ProviderSmsMessageResponse, ProviderError>;

    /// Fetch one page of scheduled messages; `query` is passed through verbatim
    async fn list_scheduled(
        &self,
        query: Option<&str>,
    ) -> Result<ScheduledSmsMessagesPage, ProviderError>;

    /// Fetch a single scheduled message
    async fn get_scheduled(&self, message_id: &str) -> Result<ScheduledMessageDetail, ProviderError>;

    /// Delete scheduled messages by id and/or tag
    async fn delete_scheduled(&self, filter: &ScheduledMessageFilter) -> Result<(), ProviderError>;
}
