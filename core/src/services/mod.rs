//! Application services: sending, scheduled message management and validation.

pub mod scheduled;
pub mod sms;
pub mod validation;

// Re-export commonly used types
pub use scheduled::{ScheduledMessageFilter, ScheduledMessageService};
pub use sms::{MessageBuilder, MockSmsProvider, SmsProvider, SmsService, SmsServiceConfig};
