//! Console adapter for development/testing

use async_trait::async_trait;
use std::collections::HashMap;

use crate::application::errors::BotError;
use crate::domain::entities::{Notification, User};
use crate::domain::entities::command::TRADE_COMMAND;
use crate::domain::traits::{Bot, ChannelRef, Invocation};

/// Console bot adapter: every channel exists and notifications go to stdout
pub struct ConsoleAdapter;

impl ConsoleAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Bot for ConsoleAdapter {
    fn resolve_channel(&self, channel_id: &str) -> Option<ChannelRef> {
        Some(ChannelRef::new(channel_id).with_name("console"))
    }

    async fn send_notification(&self, channel: &ChannelRef, notification: &Notification) -> Result<String, BotError> {
        let rendered = serde_json::to_string_pretty(notification)
            .map_err(|e| BotError::Internal(format!("Failed to render notification: {}", e)))?;
        println!("[BOT -> #{}]\n{}", channel.id, rendered);
        Ok("console_msg".to_string())
    }
}

/// A `/trade` invocation assembled from command-line arguments
pub struct ConsoleInvocation {
    user: User,
    options: HashMap<String, String>,
}

impl ConsoleInvocation {
    pub fn new(user: User) -> Self {
        Self {
            user,
            options: HashMap::new(),
        }
    }

    pub fn with_option(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(name.into(), value.into());
        self
    }
}

#[async_trait]
impl Invocation for ConsoleInvocation {
    fn command_name(&self) -> &str {
        TRADE_COMMAND
    }

    fn string_option(&self, name: &str) -> Option<String> {
        self.options.get(name).cloned()
    }

    fn invoker(&self) -> User {
        self.user.clone()
    }

    async fn defer(&self) -> Result<(), BotError> {
        println!("[BOT] is thinking...");
        Ok(())
    }

    async fn reply(&self, content: &str) -> Result<(), BotError> {
        println!("[BOT] {}", content);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::command::OPT_ITEM_TO_TRADE;

    #[test]
    fn every_channel_resolves() {
        let channel = ConsoleAdapter::new().resolve_channel("123");
        assert_eq!(channel.map(|c| c.id), Some("123".to_string()));
    }

    #[test]
    fn invocation_exposes_options() {
        let invocation = ConsoleInvocation::new(User::new("local")).with_option(OPT_ITEM_TO_TRADE, "Dragon");
        assert_eq!(invocation.command_name(), "trade");
        assert_eq!(invocation.string_option(OPT_ITEM_TO_TRADE).as_deref(), Some("Dragon"));
        assert!(invocation.string_option("missing").is_none());
    }

    #[tokio::test]
    async fn send_renders_notification() {
        let adapter = ConsoleAdapter::new();
        let channel = ChannelRef::new("1");
        let id = adapter
            .send_notification(&channel, &Notification::new("title"))
            .await
            .expect("console send never fails");
        assert_eq!(id, "console_msg");
    }
}
