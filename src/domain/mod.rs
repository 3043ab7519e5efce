//! Domain layer - Core business logic with no platform dependencies
//!
//! This layer contains:
//! - Entities: Core business objects (User, TradeRequest, Notification, CommandSpec)
//! - Traits: Abstractions for infrastructure (Bot, Invocation)
//! - Rules: Business logic invariants

pub mod entities;
pub mod rules;
pub mod traits;
