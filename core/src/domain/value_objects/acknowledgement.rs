//! Provider response shapes relayed to callers

use serde::{Deserialize, Serialize};

use sms_shared::types::ProviderPage;

/// Provider acknowledgement for a submitted batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderSmsMessageResponse {
    pub request_id: String,
    pub messages: Vec<MessageAcknowledgement>,
}

/// Per-message acknowledgement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageAcknowledgement {
    pub message_id: String,
    #[serde(default)]
    pub reference_id: Option<String>,
    #[serde(default)]
    pub recipient: Option<String>,
}

/// Scheduled message as listed by the provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledSmsMessage {
    pub message_id: String,
    pub product_id: String,
    pub recipient: String,
    /// When the message was requested
    pub scheduled_at_date: String,
    /// When the message is (or was) sent
    pub send_at_date: String,
    #[serde(default)]
    pub tag: Option<String>,
}

/// Single scheduled message as returned by the provider's lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledMessageDetail {
    pub message_id: String,
    pub scheduled_at_date: String,
    pub send_at_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient: Option<String>,
}

pub type ScheduledSmsMessagesPage = ProviderPage<ScheduledSmsMessage>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_acknowledgement_keeps_nulls() {
        let response: ProviderSmsMessageResponse = serde_json::from_value(json!({
            "requestId": "req-1",
            "messages": [{ "messageId": "m-1", "referenceId": null, "recipient": "+4781549300" }]
        }))
        .unwrap();
        assert_eq!(response.messages[0].reference_id, None);

        let body = serde_json::to_value(&response).unwrap();
        assert_eq!(body["messages"][0]["referenceId"], serde_json::Value::Null);
        assert_eq!(body["requestId"], "req-1");
    }

    #[test]
    fn test_scheduled_page_parses() {
        let page: ScheduledSmsMessagesPage = serde_json::from_value(json!({
            "currentPage": 1,
            "items": [{
                "messageId": "m-1",
                "productId": "p-1",
                "recipient": "+4781549300",
                "scheduledAtDate": "2026-10-17T10:00:00Z",
                "sendAtDate": "2026-10-18T10:00:00Z",
                "tag": null
            }],
            "pages": 1,
            "results": 1,
            "resultsPerPage": 25
        }))
        .unwrap();
        assert_eq!(page.items[0].product_id, "p-1");
        assert!(page.items[0].tag.is_none());
    }
}
