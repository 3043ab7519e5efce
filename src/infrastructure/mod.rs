//! Infrastructure layer - External concerns
//!
//! This layer contains:
//! - Config: Configuration loading
//! - Adapters: Platform integrations (Discord, console)
//! - Health: Liveness endpoint

pub mod config;
pub mod adapters;
pub mod health;
