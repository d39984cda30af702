//! SMS send pipeline: message building, provider seam and orchestration

pub mod builder;
pub mod config;
pub mod mock;
pub mod service;
pub mod traits;

#[cfg(test)]
mod tests;

pub use builder::MessageBuilder;
pub use config::SmsServiceConfig;
pub use mock::MockSmsProvider;
pub use service::SmsService;
pub use traits::SmsProvider;
