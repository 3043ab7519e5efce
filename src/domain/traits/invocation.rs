use async_trait::async_trait;
use crate::domain::entities::User;
use crate::application::errors::BotError;

/// One inbound slash command invocation
#[async_trait]
pub trait Invocation: Send + Sync {
    fn command_name(&self) -> &str;

    /// Value of a named string argument, if the platform supplied one
    fn string_option(&self, name: &str) -> Option<String>;

    /// The user who ran the command
    fn invoker(&self) -> User;

    /// Acknowledge now and promise a reply later
    async fn defer(&self) -> Result<(), BotError>;

    /// Deliver the final reply to the invoker
    async fn reply(&self, content: &str) -> Result<(), BotError>;
}
