//! Scheduled message listing, lookup and deletion

use std::sync::Arc;

use sms_shared::errors::error_codes;

use crate::domain::value_objects::{ScheduledMessageDetail, ScheduledSmsMessagesPage};
use crate::errors::{DomainError, DomainResult};
use crate::services::sms::traits::SmsProvider;

use super::types::ScheduledMessageFilter;

/// Upper bound on pages fetched by a single [`ScheduledMessageService::list_all`]
pub const MAX_PAGES: u32 = 1000;

/// Query keys consumed by the facade and never forwarded when walking pages
const WALK_KEYS: [&str; 2] = ["page", "all"];

/// Service behind the scheduled message endpoints
pub struct ScheduledMessageService<P: SmsProvider> {
    provider: Arc<P>,
}

impl<P: SmsProvider> ScheduledMessageService<P> {
    pub fn new(provider: Arc<P>) -> Self {
        Self { provider }
    }

    /// Fetch one page; the raw query string is forwarded unchanged
    pub async fn list(&self, query: Option<&str>) -> DomainResult<ScheduledSmsMessagesPage> {
        let query = query.filter(|q| !q.is_empty());
        let page = self.provider.list_scheduled(query).await.map_err(|e| {
            tracing::error!(status = ?e.status, error = %e, "Failed to list scheduled messages");
            DomainError::Provider(e)
        })?;

        tracing::info!(
            current_page = page.current_page,
            pages = page.pages,
            results = page.results,
            "Listed scheduled messages"
        );
        Ok(page)
    }

    /// Walk every page and return the items as a single page
    pub async fn list_all(&self, query: Option<&str>) -> DomainResult<ScheduledSmsMessagesPage> {
        let base = walk_query(query.unwrap_or_default());
        let mut items = Vec::new();
        let mut page_number = 1;

        loop {
            let page_query = if base.is_empty() {
                format!("page={}", page_number)
            } else {
                format!("{}&page={}", base, page_number)
            };

            let page = self
                .provider
                .list_scheduled(Some(&page_query))
                .await
                .map_err(|e| {
                    tracing::error!(
                        status = ?e.status,
                        error = %e,
                        page = page_number,
                        "Failed to list scheduled messages"
                    );
                    DomainError::Provider(e)
                })?;

            let done = !page.has_next() || page.items.is_empty();
            items.extend(page.items);

            if done {
                break;
            }
            if page_number >= MAX_PAGES {
                tracing::warn!(pages = page_number, "Stopped walking scheduled messages at page limit");
                break;
            }
            page_number += 1;
        }

        tracing::info!(
            pages = page_number,
            results = items.len(),
            "Listed all scheduled messages"
        );
        Ok(ScheduledSmsMessagesPage::collected(items))
    }

    /// Look up one scheduled message
    pub async fn get(&self, message_id: &str) -> DomainResult<ScheduledMessageDetail> {
        let message_id = message_id.trim();
        if message_id.is_empty() {
            return Err(DomainError::bad_request(error_codes::MISSING_MESSAGE_ID));
        }

        self.provider.get_scheduled(message_id).await.map_err(|e| {
            tracing::error!(
                message_id = %message_id,
                status = ?e.status,
                error = %e,
                "Failed to get scheduled message"
            );
            DomainError::Provider(e)
        })
    }

    /// Delete every scheduled message matching the filter
    pub async fn delete(&self, filter: &ScheduledMessageFilter) -> DomainResult<()> {
        self.provider.delete_scheduled(filter).await.map_err(|e| {
            tracing::error!(
                message_id = ?filter.message_id,
                tag = ?filter.tag,
                status = ?e.status,
                error = %e,
                "Failed to delete scheduled messages"
            );
            DomainError::Provider(e)
        })?;

        tracing::info!(
            message_id = ?filter.message_id,
            tag = ?filter.tag,
            "Deleted scheduled messages"
        );
        Ok(())
    }
}

/// Drop the paging keys from a raw query string, keeping the rest in order
fn walk_query(query: &str) -> String {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .filter(|pair| {
            let key = pair.split('=').next().unwrap_or_default();
            !WALK_KEYS.contains(&key)
        })
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walk_query_strips_paging_keys() {
        assert_eq!(walk_query("all=true&page=4&tag=x"), "tag=x");
        assert_eq!(walk_query("tag=x&fromDate=2026-10-01"), "tag=x&fromDate=2026-10-01");
        assert_eq!(walk_query(""), "");
        assert_eq!(walk_query("all=true"), "");
    }
}
