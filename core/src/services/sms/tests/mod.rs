//! Tests for the send orchestrator


#[cfg(test)]
mod metrics_tests;
