//! Configuration for the send orchestrator

use sms_shared::config::ProviderConfig;

/// Message defaults applied while building provider messages
#[derive(Debug, Clone)]
pub struct SmsServiceConfig {
    /// Sender id used when the payload has none
    pub default_sender: String,
    /// Raw obfuscation option, resolved once per request
    pub obfuscation: Option<String>,
}

impl SmsServiceConfig {
    pub fn new(default_sender: impl Into<String>) -> Self {
        Self {
            default_sender: default_sender.into(),
            obfuscation: None,
        }
    }

    pub fn with_obfuscation(mut self, obfuscation: impl Into<String>) -> Self {
        self.obfuscation = Some(obfuscation.into());
        self
    }
}

impl From<&ProviderConfig> for SmsServiceConfig {
    fn from(config: &ProviderConfig) -> Self {
        Self {
            default_sender: config.default_sender.clone(),
            obfuscation: Some(config.obfuscation.clone()),
        }
    }
}
