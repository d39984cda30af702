//! Provider enumerations, serialized with the provider's exact spelling

use serde::{Deserialize, Serialize};
use std::fmt;

/// Character encoding for `sms.encoding`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Encoding {
    AutoDetect,
    #[default]
    #[serde(rename = "GSM")]
    Gsm,
    #[serde(rename = "UCS2")]
    Ucs2,
}

/// Obfuscation applied by the provider after processing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObfuscateOption {
    ContentAndRecipient,
    Content,
}

impl fmt::Display for ObfuscateOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObfuscateOption::ContentAndRecipient => write!(f, "ContentAndRecipient"),
            ObfuscateOption::Content => write!(f, "Content"),
        }
    }
}

/// Delivery report callback mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CallbackMode {
    Profile,
    #[serde(rename = "URL")]
    Url,
    Gate,
    None,
}

impl CallbackMode {
    /// Modes that deliver callbacks and therefore honour a ttl
    pub fn delivers(&self) -> bool {
        !matches!(self, CallbackMode::None)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    Normal,
    High,
    Low,
}

/// Map the configured obfuscation option to a provider value
///
/// `"None"` disables obfuscation. Unknown or missing values fall back to
/// `Content`. Matching is case-sensitive.
pub fn resolve_obfuscation(option: Option<&str>) -> Option<ObfuscateOption> {
    match option {
        Some("None") => None,
        Some("ContentAndRecipient") => Some(ObfuscateOption::ContentAndRecipient),
        _ => Some(ObfuscateOption::Content),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_obfuscation() {
        assert_eq!(resolve_obfuscation(Some("None")), None);
        assert_eq!(resolve_obfuscation(Some("Content")), Some(ObfuscateOption::Content));
        assert_eq!(
            resolve_obfuscation(Some("ContentAndRecipient")),
            Some(ObfuscateOption::ContentAndRecipient)
        );
        assert_eq!(resolve_obfuscation(Some("none")), Some(ObfuscateOption::Content));
        assert_eq!(resolve_obfuscation(Some("Everything")), Some(ObfuscateOption::Content));
        assert_eq!(resolve_obfuscation(None), Some(ObfuscateOption::Content));
    }

    #[test]
    fn test_provider_spelling() {
        assert_eq!(serde_json::to_string(&Encoding::Gsm).unwrap(), "\"GSM\"");
        assert_eq!(serde_json::to_string(&Encoding::Ucs2).unwrap(), "\"UCS2\"");
        assert_eq!(serde_json::to_string(&CallbackMode::Url).unwrap(), "\"URL\"");
        assert!(serde_json::from_str::<Priority>("\"Urgent\"").is_err());
    }

    #[test]
    fn test_callback_mode_delivers() {
        assert!(CallbackMode::Profile.delivers());
        assert!(CallbackMode::Url.delivers());
        assert!(CallbackMode::Gate.delivers());
        assert!(!CallbackMode::None.delivers());
    }
}
