//! Discord bot that relays `/trade` requests to a fixed trade channel

pub mod domain;
pub mod application;
pub mod infrastructure;
