//! Route handlers

pub mod metrics;
pub mod scheduled;
pub mod sms;
