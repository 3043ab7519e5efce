//! Platform adapters

pub mod console;
pub mod discord;

pub use console::{ConsoleAdapter, ConsoleInvocation};
pub use discord::{DiscordBot, SlashInvocation, TradeHandler};
