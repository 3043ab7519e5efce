//! Discord adapter

use async_trait::async_trait;
use serenity::all::{
    ActivityData, Cache, ChannelId, Client, Command, CommandDataOptionValue, CommandInteraction,
    CommandOptionType, Context, CreateCommand, CreateCommandOption, CreateEmbed, CreateEmbedFooter,
    CreateMessage, EditInteractionResponse, EventHandler, GatewayIntents, Http, Interaction,
    Mentionable, OnlineStatus, Ready,
};
use std::sync::Arc;

use crate::application::errors::BotError;
use crate::application::services::TradeService;
use crate::domain::entities::{CommandSpec, Notification, User};
use crate::domain::traits::{Bot, ChannelRef, Invocation};

/// Discord session handle backed by the gateway's HTTP client and cache
#[derive(Clone)]
pub struct DiscordBot {
    http: Arc<Http>,
    cache: Arc<Cache>,
}

impl DiscordBot {
    pub fn new(http: Arc<Http>, cache: Arc<Cache>) -> Self {
        Self { http, cache }
    }

    pub fn from_context(ctx: &Context) -> Self {
        Self::new(ctx.http.clone(), ctx.cache.clone())
    }
}

#[async_trait]
impl Bot for DiscordBot {
    fn resolve_channel(&self, channel_id: &str) -> Option<ChannelRef> {
        let id = parse_channel_id(channel_id)?;
        let channel = self.cache.channel(id)?;
        Some(ChannelRef::new(id.to_string()).with_name(channel.name.clone()))
    }

    async fn send_notification(&self, channel: &ChannelRef, notification: &Notification) -> Result<String, BotError> {
        let id = parse_channel_id(&channel.id)
            .ok_or_else(|| BotError::NotFound(format!("channel {}", channel.id)))?;

        tracing::debug!("Sending notification to #{}", channel.name.as_deref().unwrap_or(&channel.id));

        let message = id
            .send_message(&self.http, CreateMessage::new().embed(render_embed(notification)))
            .await
            .map_err(to_bot_error)?;

        Ok(message.id.to_string())
    }
}

/// A slash command interaction received over the gateway
pub struct SlashInvocation {
    command: CommandInteraction,
    http: Arc<Http>,
}

impl SlashInvocation {
    pub fn new(command: CommandInteraction, http: Arc<Http>) -> Self {
        Self { command, http }
    }
}

#[async_trait]
impl Invocation for SlashInvocation {
    fn command_name(&self) -> &str {
        &self.command.data.name
    }

    fn string_option(&self, name: &str) -> Option<String> {
        self.command
            .data
            .options
            .iter()
            .find(|o| o.name == name)
            .and_then(|o| match &o.value {
                CommandDataOptionValue::String(s) => Some(s.clone()),
                _ => None,
            })
    }

    fn invoker(&self) -> User {
        let user = &self.command.user;
        User::new(user.id.to_string())
            .with_username(user.tag())
            .with_mention(user.mention().to_string())
            .with_avatar(user.face())
    }

    async fn defer(&self) -> Result<(), BotError> {
        // Ephemeral: only the invoker sees the status reply
        self.command
            .defer_ephemeral(&self.http)
            .await
            .map_err(to_bot_error)
    }

    async fn reply(&self, content: &str) -> Result<(), BotError> {
        self.command
            .edit_response(&self.http, EditInteractionResponse::new().content(content))
            .await
            .map(|_| ())
            .map_err(to_bot_error)
    }
}

/// Gateway event handler serving a single slash command
pub struct TradeHandler {
    spec: CommandSpec,
    channel_id: String,
    presence: String,
}

impl TradeHandler {
    pub fn new(spec: CommandSpec, channel_id: impl Into<String>, presence: impl Into<String>) -> Self {
        Self {
            spec,
            channel_id: channel_id.into(),
            presence: presence.into(),
        }
    }
}

#[async_trait]
impl EventHandler for TradeHandler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        tracing::info!("Logged in as {}!", ready.user.tag());

        ctx.set_presence(Some(ActivityData::watching(&self.presence)), OnlineStatus::Online);

        match register_commands(&ctx.http, std::slice::from_ref(&self.spec)).await {
            Ok(count) => tracing::info!("Registered {} slash command(s) globally", count),
            Err(e) => tracing::error!("Failed to register slash commands: {}", e),
        }
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let Interaction::Command(command) = interaction else {
            return;
        };
        if !self.spec.matches(&command.data.name) {
            return;
        }

        let service = TradeService::new(DiscordBot::from_context(&ctx), self.channel_id.as_str());
        let invocation = SlashInvocation::new(command, ctx.http.clone());
        service.handle(&invocation).await;
    }
}

/// Connect to the gateway and serve events until the connection ends
pub async fn run(token: &str, handler: TradeHandler) -> Result<(), BotError> {
    let mut client = Client::builder(token, GatewayIntents::GUILDS)
        .event_handler(handler)
        .await
        .map_err(to_bot_error)?;

    tracing::info!("Connecting to Discord gateway");
    client.start().await.map_err(to_bot_error)
}

/// Replace the global command set with `specs`
pub async fn register_commands(http: &Arc<Http>, specs: &[CommandSpec]) -> Result<usize, BotError> {
    let commands: Vec<CreateCommand> = specs.iter().map(build_command).collect();
    let registered = Command::set_global_commands(http, commands)
        .await
        .map_err(|e| BotError::Registration(e.to_string()))?;
    Ok(registered.len())
}

fn build_command(spec: &CommandSpec) -> CreateCommand {
    spec.options.iter().fold(
        CreateCommand::new(&spec.name).description(&spec.description),
        |cmd, opt| {
            cmd.add_option(
                CreateCommandOption::new(CommandOptionType::String, &opt.name, &opt.description)
                    .required(opt.required),
            )
        },
    )
}

fn render_embed(notification: &Notification) -> CreateEmbed {
    let mut embed = CreateEmbed::new()
        .colour(notification.colour)
        .title(&notification.title);
    if let Some(ref description) = notification.description {
        embed = embed.description(description);
    }
    for field in &notification.fields {
        embed = embed.field(&field.name, &field.value, field.inline);
    }
    if let Some(ref thumbnail) = notification.thumbnail {
        embed = embed.thumbnail(thumbnail);
    }
    if let Some(ref footer) = notification.footer {
        embed = embed.footer(CreateEmbedFooter::new(footer));
    }
    embed
}

/// Snowflakes are non-zero u64s
fn parse_channel_id(raw: &str) -> Option<ChannelId> {
    raw.trim()
        .parse::<u64>()
        .ok()
        .filter(|id| *id != 0)
        .map(ChannelId::new)
}

fn to_bot_error(err: serenity::Error) -> BotError {
    match err {
        serenity::Error::Http(e) => match e.status_code().map(|s| s.as_u16()) {
            Some(401) => BotError::PermissionDenied(format!("invalid token: {}", e)),
            Some(403) => BotError::PermissionDenied(e.to_string()),
            Some(404) => BotError::NotFound(e.to_string()),
            _ => BotError::Network(e.to_string()),
        },
        other => BotError::Network(other.to_string()),
    }
}
