//! Application services - Business logic orchestration

pub mod trade_service;

pub use trade_service::{TerminalReply, TradeService};
