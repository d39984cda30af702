//! SMS provider access
//!
//! - [`ProviderGateway`]: implements the core `SmsProvider` trait
//! - [`ProviderClient`]: authenticated JSON calls with provider error mapping
//! - [`TokenProvider`]: OAuth2 client credentials token cache

pub mod client;
pub mod gateway;
pub mod token;

pub use client::ProviderClient;
pub use gateway::ProviderGateway;
pub use token::TokenProvider;
