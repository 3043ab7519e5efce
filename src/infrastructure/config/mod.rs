//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use crate::application::errors::ConfigError;

/// Channel that receives trade announcements unless overridden
pub const DEFAULT_TRADE_CHANNEL_ID: &str = "1419373453626183760";

/// Bot configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub bot: BotConfig,
    pub trade: TradeConfig,
    #[serde(default)]
    pub health: HealthConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct BotConfig {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Shown as the bot's "Watching ..." activity
    pub presence: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct TradeConfig {
    pub channel_id: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct HealthConfig {
    pub enabled: bool,
    pub port: u16,
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            port: 3000,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bot: BotConfig {
                name: "trade-bot".to_string(),
                token: None,
                presence: "/trade".to_string(),
            },
            trade: TradeConfig {
                channel_id: DEFAULT_TRADE_CHANNEL_ID.to_string(),
            },
            health: HealthConfig::default(),
        }
    }
}

impl Config {
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)
            .map_err(|e| ConfigError::Parse(format!("Failed to read config: {}", e)))?;

        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(content)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse config: {}", e)))
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        serde_yaml::to_string(self)
            .map_err(|e| ConfigError::Parse(format!("Failed to serialize config: {}", e)))
    }

    pub fn load_env() -> Self {
        Config::default().with_env_overrides()
    }

    /// Load `path` if it exists, falling back to defaults. Environment
    /// overrides apply either way.
    pub fn load_or_env(path: impl AsRef<Path>) -> Self {
        Self::load_or_overrides(path.as_ref(), |key| std::env::var(key).ok())
    }

    fn load_or_overrides(path: &Path, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let base = if path.exists() {
            Config::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config: {}, using defaults", e);
                Config::default()
            })
        } else {
            Config::default()
        };
        base.with_overrides(lookup)
    }

    /// Apply `DISCORD_BOT_TOKEN`, `PORT` and `TRADE_CHANNEL_ID` on top of this config
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(token) = lookup("DISCORD_BOT_TOKEN") {
            self.bot.token = Some(token);
        }

        if let Some(channel_id) = lookup("TRADE_CHANNEL_ID") {
            self.trade.channel_id = channel_id;
        }

        if let Some(port) = lookup("PORT") {
            match port.parse() {
                Ok(port) => self.health.port = port,
                Err(_) => tracing::warn!("Ignoring PORT={:?}, keeping port {}", port, self.health.port),
            }
        }

        self
    }

    pub fn token(&self) -> Result<&str, ConfigError> {
        self.bot
            .token
            .as_deref()
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ConfigError::MissingField("bot.token (or DISCORD_BOT_TOKEN)".to_string()))
    }
}
