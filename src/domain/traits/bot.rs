use async_trait::async_trait;
use crate::domain::entities::Notification;
use crate::application::errors::BotError;

/// Bot trait - the live platform session shared by every invocation
#[async_trait]
pub trait Bot: Send + Sync {
    /// Look up a channel by id in the local cache. Never touches the network.
    fn resolve_channel(&self, channel_id: &str) -> Option<ChannelRef>;

    /// Post a notification to a resolved channel, returning the new message id
    async fn send_notification(&self, channel: &ChannelRef, notification: &Notification) -> Result<String, BotError>;
}

/// A channel that was found in the cache
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelRef {
    pub id: String,
    pub name: Option<String>,
}

impl ChannelRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}
