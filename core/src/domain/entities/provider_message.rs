//! Message in the provider's submission format

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{
    CallbackMode, Encoding, MessageTiming, ObfuscateOption, Priority,
};

/// One provider message; built per receiver and discarded after submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderSmsMessage {
    /// MSISDN with leading `+`
    pub recipient: String,

    pub content: MessageContent,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<MessageSchedule>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration: Option<MessageExpiration>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback: Option<MessageCallback>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageContent {
    pub text: String,
    pub options: SmsOptions,
}

/// `content.options`, keyed with the provider's dotted names
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmsOptions {
    #[serde(rename = "sms.encoding", default)]
    pub encoding: Encoding,

    #[serde(rename = "sms.sender")]
    pub sender: String,

    #[serde(
        rename = "sms.obfuscate",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub obfuscate: Option<ObfuscateOption>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MessageSchedule {
    /// Offset in milliseconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relative: Option<i64>,

    /// ISO 8601 UTC timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub absolute: Option<String>,

    /// Grouping label for later bulk lookup or delete
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

impl MessageSchedule {
    pub fn from_timing(timing: MessageTiming) -> Self {
        match timing {
            MessageTiming::Relative(ms) => Self {
                relative: Some(ms),
                ..Default::default()
            },
            MessageTiming::Absolute(at) => Self {
                absolute: Some(at),
                ..Default::default()
            },
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MessageExpiration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relative: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub absolute: Option<String>,
}

impl MessageExpiration {
    pub fn from_timing(timing: MessageTiming) -> Self {
        match timing {
            MessageTiming::Relative(ms) => Self {
                relative: Some(ms),
                absolute: None,
            },
            MessageTiming::Absolute(at) => Self {
                relative: None,
                absolute: Some(at),
            },
        }
    }
}

/// Delivery report callback settings
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageCallback {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<CallbackMode>,

    /// Required for `URL` mode
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub urls: Option<Vec<String>>,

    /// Required for `Gate` mode
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gate_id: Option<String>,

    /// Milliseconds, 0 to 8 hours
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl: Option<i64>,
}
