pub mod payload;
pub mod provider_message;

pub use payload::PayloadSmsMessage;
pub use provider_message::{
    MessageCallback, MessageContent, MessageExpiration, MessageSchedule, ProviderSmsMessage,
    SmsOptions,
};
