use super::{Notification, User};

pub const TRADE_COLOUR: u32 = 0xFFD700;
pub const TRADE_TITLE: &str = "✨ New Trade Request ✨";
pub const TRADE_DESCRIPTION: &str = "A user has submitted a trade request.";
pub const TRADE_FOOTER: &str = "Trade Bot | Use the /trade command to create your own request!";

/// A trade request submitted through `/trade`. Lives for one invocation only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradeRequest {
    pub trader: User,
    pub item_to_trade: String,
    pub item_looking_for: String,
    pub private_server_link: String,
}

impl TradeRequest {
    pub fn new(
        trader: User,
        item_to_trade: impl Into<String>,
        item_looking_for: impl Into<String>,
        private_server_link: impl Into<String>,
    ) -> Self {
        Self {
            trader,
            item_to_trade: item_to_trade.into(),
            item_looking_for: item_looking_for.into(),
            private_server_link: private_server_link.into(),
        }
    }

    /// Builds the complete announcement in one go
    pub fn to_notification(&self) -> Notification {
        Notification::new(TRADE_TITLE)
            .with_colour(TRADE_COLOUR)
            .with_description(TRADE_DESCRIPTION)
            .with_field("Trader", self.trader.display_reference(), false)
            .with_field("Item to Trade", &self.item_to_trade, true)
            .with_field("Item Looking For", &self.item_looking_for, true)
            .with_field(
                "Private Server Link",
                format!("[Click to Join]({})", self.private_server_link),
                false,
            )
            .with_thumbnail_opt(self.trader.avatar_url.clone())
            .with_footer(TRADE_FOOTER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> TradeRequest {
        let trader = User::new("42")
            .with_username("trader")
            .with_mention("<@42>")
            .with_avatar("https://cdn.example/avatar.png");
        TradeRequest::new(
            trader,
            "Dragon",
            "Unicorn",
            "https://www.roblox.com/share?code=ABC123XYZ&type=Server",
        )
    }

    #[test]
    fn notification_carries_every_field_in_display_order() {
        let n = request().to_notification();

        assert_eq!(n.title, TRADE_TITLE);
        assert_eq!(n.colour, 0xFFD700);
        assert_eq!(n.description.as_deref(), Some(TRADE_DESCRIPTION));
        assert_eq!(n.footer.as_deref(), Some(TRADE_FOOTER));
        assert_eq!(n.thumbnail.as_deref(), Some("https://cdn.example/avatar.png"));

        let layout: Vec<(&str, bool)> = n.fields.iter().map(|f| (f.name.as_str(), f.inline)).collect();
        assert_eq!(
            layout,
            vec![
                ("Trader", false),
                ("Item to Trade", true),
                ("Item Looking For", true),
                ("Private Server Link", false),
            ]
        );
    }

    #[test]
    fn notification_values_come_from_request() {
        let n = request().to_notification();

        assert_eq!(n.field("Trader").map(|f| f.value.as_str()), Some("<@42>"));
        assert_eq!(n.field("Item to Trade").map(|f| f.value.as_str()), Some("Dragon"));
        assert_eq!(n.field("Item Looking For").map(|f| f.value.as_str()), Some("Unicorn"));
        assert_eq!(
            n.field("Private Server Link").map(|f| f.value.as_str()),
            Some("[Click to Join](https://www.roblox.com/share?code=ABC123XYZ&type=Server)")
        );
    }

    #[test]
    fn missing_avatar_leaves_thumbnail_empty() {
        let mut req = request();
        req.trader.avatar_url = None;
        assert!(req.to_notification().thumbnail.is_none());
    }
}
