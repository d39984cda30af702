//! Common utility functions

pub mod phone;
pub mod validation;

pub use phone::*;
pub use validation::*;
