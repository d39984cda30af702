//! Types used by the scheduled message service

use sms_shared::errors::error_codes;

use crate::errors::{DomainError, DomainResult};

/// Selects which scheduled messages a delete applies to
///
/// At least one of `message_id` or `tag` is always present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledMessageFilter {
    pub message_id: Option<String>,
    pub tag: Option<String>,
}

impl ScheduledMessageFilter {
    /// Build a filter from raw query values; blank values count as missing
    pub fn new(message_id: Option<String>, tag: Option<String>) -> DomainResult<Self> {
        let message_id = message_id.filter(|v| !v.trim().is_empty());
        let tag = tag.filter(|v| !v.trim().is_empty());

        if message_id.is_none() && tag.is_none() {
            return Err(DomainError::bad_request(error_codes::MISSING_DELETE_FILTER));
        }

        Ok(Self { message_id, tag })
    }

    pub fn by_message_id(message_id: impl Into<String>) -> DomainResult<Self> {
        Self::new(Some(message_id.into()), None)
    }

    pub fn by_tag(tag: impl Into<String>) -> DomainResult<Self> {
        Self::new(None, Some(tag.into()))
    }

    /// Query parameters to send to the provider, only those supplied
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        let mut pairs = Vec::with_capacity(2);
        if let Some(id) = &self.message_id {
            pairs.push(("messageId", id.as_str()));
        }
        if let Some(tag) = &self.tag {
            pairs.push(("tag", tag.as_str()));
        }
        pairs
    }
}
