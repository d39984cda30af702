//! In-memory provider used by tests across the workspace

use async_trait::async_trait;
use std::sync::Mutex;

use crate::domain::entities::ProviderSmsMessage;
use crate::domain::value_objects::{
    MessageAcknowledgement, ProviderSmsMessageResponse, ScheduledMessageDetail,
    ScheduledSmsMessage, ScheduledSmsMessagesPage,
};
use crate::errors::ProviderError;
use crate::services::scheduled::ScheduledMessageFilter;

use super::traits::SmsProvider;

/// Records every call and answers from canned pages
#[derive(Default)]
pub struct MockSmsProvider {
    failure: Option<ProviderError>,
    pages: Vec<ScheduledSmsMessagesPage>,
    submitted: Mutex<Vec<Vec<ProviderSmsMessage>>>,
    list_queries: Mutex<Vec<Option<String>>>,
    deleted: Mutex<Vec<ScheduledMessageFilter>>,
}

impl MockSmsProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call fails with `error` after being recorded
    pub fn failing(error: ProviderError) -> Self {
        Self {
            failure: Some(error),
            ..Self::default()
        }
    }

    /// Serve `pages` in order; `page=N` in the query selects page N
    pub fn with_pages(mut self, pages: Vec<ScheduledSmsMessagesPage>) -> Self {
        self.pages = pages;
        self
    }

    /// Split `items` into pages of `per_page` entries
    pub fn with_items(self, items: Vec<ScheduledSmsMessage>, per_page: usize) -> Self {
        let per_page = per_page.max(1);
        let total = items.len();
        let chunks: Vec<Vec<ScheduledSmsMessage>> =
            items.chunks(per_page).map(|c| c.to_vec()).collect();
        let page_count = chunks.len().max(1) as u32;

        let pages = chunks
            .into_iter()
            .enumerate()
            .map(|(i, items)| ScheduledSmsMessagesPage {
                current_page: i as u32 + 1,
                items,
                pages: page_count,
                results: total as u64,
                results_per_page: per_page as u32,
            })
            .collect();
        self.with_pages(pages)
    }

    pub fn submitted_batches(&self) -> Vec<Vec<ProviderSmsMessage>> {
        self.submitted.lock().unwrap().clone()
    }

    pub fn submit_count(&self) -> usize {
        self.submitted.lock().unwrap().len()
    }

    pub fn list_queries(&self) -> Vec<Option<String>> {
        self.list_queries.lock().unwrap().clone()
    }

    pub fn deleted_filters(&self) -> Vec<ScheduledMessageFilter> {
        self.deleted.lock().unwrap().clone()
    }

    fn check_failure(&self) -> Result<(), ProviderError> {
        match &self.failure {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }

    fn page(&self, number: u32) -> ScheduledSmsMessagesPage {
        match self.pages.get(number.saturating_sub(1) as usize) {
            Some(page) => page.clone(),
            None => ScheduledSmsMessagesPage {
                current_page: number,
                items: Vec::new(),
                pages: self.pages.len().max(1) as u32,
                results: self.pages.iter().map(|p| p.items.len() as u64).sum(),
                results_per_page: 0,
            },
        }
    }
}

fn requested_page(query: Option<&str>) -> u32 {
    query
        .unwrap_or_default()
        .split('&')
        .filter_map(|pair| pair.strip_prefix("page="))
        .find_map(|value| value.parse().ok())
        .unwrap_or(1)
}

#[async_trait]
impl SmsProvider for MockSmsProvider {
    async fn submit_messages(
        &self,
        messages: &[ProviderSmsMessage],
    ) -> Result<ProviderSmsMessageResponse, ProviderError> {
        self.submitted.lock().unwrap().push(messages.to_vec());
        self.check_failure()?;

        let batch = self.submit_count();
        Ok(ProviderSmsMessageResponse {
            request_id: format!("mock-request-{}", batch),
            messages: messages
                .iter()
                .enumerate()
                .map(|(i, m)| MessageAcknowledgement {
                    message_id: format!("mock-msg-{}-{}", batch, i + 1),
                    reference_id: m.reference_id.clone(),
                    recipient: Some(m.recipient.clone()),
                })
                .collect(),
        })
    }

    async fn list_scheduled(
        &self,
        query: Option<&str>,
    ) -> Result<ScheduledSmsMessagesPage, ProviderError> {
        self.list_queries.lock().unwrap().push(query.map(str::to_string));
        self.check_failure()?;
        Ok(self.page(requested_page(query)))
    }

    async fn get_scheduled(&self, message_id: &str) -> Result<ScheduledMessageDetail, ProviderError> {
        self.check_failure()?;
        self.pages
            .iter()
            .flat_map(|p| p.items.iter())
            .find(|item| item.message_id == message_id)
            .map(|item| ScheduledMessageDetail {
                message_id: item.message_id.clone(),
                scheduled_at_date: item.scheduled_at_date.clone(),
                send_at_date: item.send_at_date.clone(),
                tag: item.tag.clone(),
                recipient: Some(item.recipient.clone()),
            })
            .ok_or_else(|| {
                ProviderError::http(
                    404,
                    format!("GET request to 'mock://schedules/{}' failed: Not Found", message_id),
                    None,
                )
            })
    }

    async fn delete_scheduled(&self, filter: &ScheduledMessageFilter) -> Result<(), ProviderError> {
        self.deleted.lock().unwrap().push(filter.clone());
        self.check_failure()
    }
}

/// Scheduled message fixture with predictable dates
pub fn scheduled_message(message_id: &str, tag: Option<&str>) -> ScheduledSmsMessage {
    ScheduledSmsMessage {
        message_id: message_id.to_string(),
        product_id: "mock-product".to_string(),
        recipient: "+4781549300".to_string(),
        scheduled_at_date: "2026-10-17T10:00:00Z".to_string(),
        send_at_date: "2026-10-18T10:00:00Z".to_string(),
        tag: tag.map(str::to_string),
    }
}
