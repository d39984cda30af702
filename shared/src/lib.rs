//! Shared utilities and common types for the SMS facade
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types loaded from the environment
//! - Error response structures
//! - Utility functions (receiver normalization, field validation)
//! - Provider page and health types

pub mod config;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{AppConfig, ConfigError, Environment, ProviderConfig, ServerConfig};
pub use errors::{error_codes, ErrorResponse};
pub use types::{HealthResponse, ProviderPage};
pub use utils::{phone, validation};
