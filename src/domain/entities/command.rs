/// Name of the one command this bot serves
pub const TRADE_COMMAND: &str = "trade";

pub const OPT_ITEM_TO_TRADE: &str = "item_to_trade";
pub const OPT_ITEM_LOOKING_FOR: &str = "item_looking_for";
pub const OPT_PRIVATE_SERVER_LINK: &str = "private_server_link";

/// A string option declared on a slash command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOption {
    pub name: String,
    pub description: String,
    pub required: bool,
}

/// Slash command schema as declared to the platform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub name: String,
    pub description: String,
    pub options: Vec<CommandOption>,
}

impl CommandSpec {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            options: Vec::new(),
        }
    }

    pub fn with_required_option(mut self, name: impl Into<String>, description: impl Into<String>) -> Self {
        self.options.push(CommandOption {
            name: name.into(),
            description: description.into(),
            required: true,
        });
        self
    }

    pub fn matches(&self, input: &str) -> bool {
        self.name == input
    }

    /// The `/trade` command
    pub fn trade() -> Self {
        Self::new(TRADE_COMMAND, "Sends a trade request to the designated channel.")
            .with_required_option(OPT_ITEM_TO_TRADE, "The item you want to trade.")
            .with_required_option(OPT_ITEM_LOOKING_FOR, "The item you are looking for.")
            .with_required_option(OPT_PRIVATE_SERVER_LINK, "The private server link for the trade.")
    }
}
