//! Application layer - Use cases and business logic
//!
//! This layer contains:
//! - Services: the `/trade` request pipeline
//! - Errors: Domain-specific errors

pub mod errors;
pub mod services;
