//! Application layer errors

use thiserror::Error;

/// Platform and transport errors
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Registration error: {0}")]
    Registration(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Errors that end a single `/trade` invocation
#[derive(Error, Debug)]
pub enum TradeError {
    #[error("trade channel {0} could not be resolved")]
    ChannelNotFound(String),

    #[error("invalid private server link: {0}")]
    InvalidLink(String),

    #[error("failed to dispatch trade notification: {0}")]
    Dispatch(#[source] BotError),
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Parse error: {0}")]
    Parse(String),
}
