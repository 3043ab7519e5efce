//! Domain traits - Abstractions for infrastructure implementations

pub mod bot;
pub mod invocation;

pub use bot::{Bot, ChannelRef};
pub use invocation::Invocation;
