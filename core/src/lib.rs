//! # SMS Facade Core
//!
//! Domain layer for the SMS facade: caller payload and provider message
//! types, the message builder and validators, the send orchestrator and the
//! scheduled message service. The provider itself sits behind
//! [`SmsProvider`](services::sms::SmsProvider).

pub mod domain;
pub mod errors;
pub mod services;
pub mod telemetry;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
