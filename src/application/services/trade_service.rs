use uuid::Uuid;

use crate::application::errors::TradeError;
use crate::domain::entities::command::{OPT_ITEM_LOOKING_FOR, OPT_ITEM_TO_TRADE, OPT_PRIVATE_SERVER_LINK};
use crate::domain::entities::TradeRequest;
use crate::domain::rules::is_valid_server_link;
use crate::domain::traits::{Bot, Invocation};

/// The single reply every invocation ends with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalReply {
    Sent,
    ChannelNotFound,
    InvalidLink,
    DispatchFailed,
}

impl TerminalReply {
    pub fn content(&self) -> &'static str {
        match self {
            TerminalReply::Sent => "✅ Your trade request has been successfully sent to the trade channel!",
            TerminalReply::ChannelNotFound => {
                "Error: The trade channel could not be found. Please check the channel ID."
            }
            TerminalReply::InvalidLink => {
                "Error: Invalid private server link format. It must be in the format \
                 `https://www.roblox.com/share?code=________________________&type=Server`."
            }
            TerminalReply::DispatchFailed => "An error occurred while sending your trade request.",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, TerminalReply::Sent)
    }
}

impl From<&TradeError> for TerminalReply {
    fn from(err: &TradeError) -> Self {
        match err {
            TradeError::ChannelNotFound(_) => TerminalReply::ChannelNotFound,
            TradeError::InvalidLink(_) => TerminalReply::InvalidLink,
            TradeError::Dispatch(_) => TerminalReply::DispatchFailed,
        }
    }
}

/// Service that turns `/trade` invocations into channel announcements
pub struct TradeService<B: Bot> {
    bot: B,
    channel_id: String,
}

impl<B: Bot> TradeService<B> {
    pub fn new(bot: B, channel_id: impl Into<String>) -> Self {
        Self {
            bot,
            channel_id: channel_id.into(),
        }
    }

    pub fn bot(&self) -> &B {
        &self.bot
    }

    pub fn channel_id(&self) -> &str {
        &self.channel_id
    }

    /// Handle one invocation. Always replies to the invoker exactly once,
    /// whichever step fails.
    pub async fn handle<I: Invocation + ?Sized>(&self, invocation: &I) -> TerminalReply {
        let request_id = Uuid::new_v4();
        tracing::info!("[{}] /{} from {}", request_id, invocation.command_name(), invocation.invoker());

        if let Err(e) = invocation.defer().await {
            tracing::warn!("[{}] Failed to defer reply: {}", request_id, e);
        }

        let reply = match self.process(invocation, request_id).await {
            Ok(message_id) => {
                tracing::info!("[{}] Trade request posted as message {}", request_id, message_id);
                TerminalReply::Sent
            }
            Err(e) => {
                match &e {
                    TradeError::InvalidLink(_) => tracing::info!("[{}] Rejected: {}", request_id, e),
                    _ => tracing::error!("[{}] {}", request_id, e),
                }
                TerminalReply::from(&e)
            }
        };

        if let Err(e) = invocation.reply(reply.content()).await {
            tracing::error!("[{}] Failed to deliver reply: {}", request_id, e);
        }

        reply
    }

    async fn process<I: Invocation + ?Sized>(&self, invocation: &I, request_id: Uuid) -> Result<String, TradeError> {
        let channel = self
            .bot
            .resolve_channel(&self.channel_id)
            .ok_or_else(|| TradeError::ChannelNotFound(self.channel_id.clone()))?;

        let request = TradeRequest::new(
            invocation.invoker(),
            required_option(invocation, OPT_ITEM_TO_TRADE, request_id),
            required_option(invocation, OPT_ITEM_LOOKING_FOR, request_id),
            required_option(invocation, OPT_PRIVATE_SERVER_LINK, request_id),
        );

        if !is_valid_server_link(&request.private_server_link) {
            return Err(TradeError::InvalidLink(request.private_server_link));
        }

        let notification = request.to_notification();
        self.bot
            .send_notification(&channel, &notification)
            .await
            .map_err(TradeError::Dispatch)
    }
}

/// Presence is enforced by the command schema; a missing value is logged and read as empty.
fn required_option<I: Invocation + ?Sized>(invocation: &I, name: &str, request_id: Uuid) -> String {
    invocation.string_option(name).unwrap_or_else(|| {
        tracing::warn!("[{}] Missing required option {}, using an empty value", request_id, name);
        String::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_sent_is_success() {
        assert!(TerminalReply::Sent.is_success());
        assert!(!TerminalReply::ChannelNotFound.is_success());
        assert!(!TerminalReply::InvalidLink.is_success());
        assert!(!TerminalReply::DispatchFailed.is_success());
    }

    #[test]
    fn invalid_link_reply_spells_out_expected_format() {
        let content = TerminalReply::InvalidLink.content();
        assert!(content.contains("https://www.roblox.com/share?code="));
        assert!(content.contains("&type=Server"));
    }

    #[test]
    fn errors_map_to_replies() {
        assert_eq!(
            TerminalReply::from(&TradeError::ChannelNotFound("1".into())),
            TerminalReply::ChannelNotFound
        );
        assert_eq!(
            TerminalReply::from(&TradeError::InvalidLink("x".into())),
            TerminalReply::InvalidLink
        );
        assert_eq!(
            TerminalReply::from(&TradeError::Dispatch(crate::application::errors::BotError::Network("down".into()))),
            TerminalReply::DispatchFailed
        );
    }
}
