//! Scheduled message management

pub mod service;
pub mod types;

#[cfg(test)]
mod tests;

pub use service::{ScheduledMessageService, MAX_PAGES};
pub use types::ScheduledMessageFilter;
