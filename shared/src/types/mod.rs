//! Type definitions module
//!
//! - `pagination` - Page envelope returned by the provider's list endpoints
//! - `response` - Health check response

pub mod pagination;
pub mod response;

pub use pagination::ProviderPage;
pub use response::{HealthResponse, HealthStatus};
