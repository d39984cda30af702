//! Domain layer: caller payload, provider message and provider response shapes.

pub mod entities;
pub mod value_objects;

// Re-export commonly used domain types
pub use entities::*;
pub use value_objects::*;
