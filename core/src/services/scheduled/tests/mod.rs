//! Tests for the scheduled message service

#[cfg(test)]
mod service_tests;
