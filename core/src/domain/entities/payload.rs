//! Simplified send request accepted from callers

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::domain::value_objects::{resolve_timing, MessageTiming};

/// Caller payload for the send endpoint
///
/// Exists only for the duration of one request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayloadSmsMessage {
    /// Raw receivers, each `+{cc}{n}`, `00{cc}{n}` or `{cc}{n}`
    pub receivers: Vec<String>,

    pub message: String,

    /// Falls back to the configured default sender
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender: Option<String>,

    /// Copied onto every derived message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_id: Option<String>,

    /// Schedule offset from now in milliseconds; ignored unless an integer
    #[serde(
        default,
        deserialize_with = "integer_or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub scheduled_in: Option<i64>,

    /// Schedule instant as ISO 8601 UTC; ignored unless a string
    #[serde(
        default,
        deserialize_with = "string_or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub scheduled_at: Option<String>,
}

impl PayloadSmsMessage {
    pub fn new(receivers: Vec<String>, message: impl Into<String>) -> Self {
        Self {
            receivers,
            message: message.into(),
            sender: None,
            reference_id: None,
            scheduled_in: None,
            scheduled_at: None,
        }
    }

    /// Scheduling mode selected for every message built from this payload
    pub fn timing(&self) -> Option<MessageTiming> {
        resolve_timing(self.scheduled_in, self.scheduled_at.as_deref())
    }
}

fn integer_or_none<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_i64().or_else(|| {
        // 600000.0 is still an integer
        value
            .as_f64()
            .filter(|f| f.fract() == 0.0 && f.abs() <= i64::MAX as f64)
            .map(|f| f as i64)
    }))
}

fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => Some(s),
        _ => None,
    })
}
