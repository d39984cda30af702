//! Validation rule sets for inbound payloads and outbound provider messages.
//!
//! Both return a field path to messages mapping through
//! [`ValidationErrors`](sms_shared::validation::ValidationErrors).

pub mod message;
pub mod payload;

pub use message::{parse_instant, validate_message, validate_message_at};
pub use payload::{validate_payload, MAX_RECEIVERS};
