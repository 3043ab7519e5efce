use clap::{Parser, Subcommand};
use std::process::ExitCode;

use trade_bot::application::errors::BotError;
use trade_bot::application::services::TradeService;
use trade_bot::domain::entities::command::{OPT_ITEM_LOOKING_FOR, OPT_ITEM_TO_TRADE, OPT_PRIVATE_SERVER_LINK};
use trade_bot::domain::entities::{CommandSpec, User};
use trade_bot::infrastructure::adapters::discord;
use trade_bot::infrastructure::adapters::{ConsoleAdapter, ConsoleInvocation, TradeHandler};
use trade_bot::infrastructure::config::Config;
use trade_bot::infrastructure::health;

#[derive(Parser)]
#[command(name = "trade-bot")]
#[command(about = "Relays /trade requests to a Discord trade channel", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "config.yaml")]
    config: String,

    /// Bot token (overrides config and DISCORD_BOT_TOKEN)
    #[arg(short, long)]
    token: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Connect to Discord and serve /trade
    Run,
    /// Show version
    Version,
    /// Generate default config
    InitConfig,
    /// Run one /trade request against the console adapter
    Trade {
        #[arg(long)]
        item_to_trade: String,
        #[arg(long)]
        item_looking_for: String,
        #[arg(long)]
        link: String,
        /// Name shown as the trader
        #[arg(long, default_value = "local-user")]
        user: String,
    },
}

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run => run_bot(&cli.config, cli.token),
        Commands::Version => {
            println!("trade-bot v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::InitConfig => init_config(),
        Commands::Trade { item_to_trade, item_looking_for, link, user } => {
            let invocation = ConsoleInvocation::new(User::new(user.clone()).with_username(user))
                .with_option(OPT_ITEM_TO_TRADE, item_to_trade)
                .with_option(OPT_ITEM_LOOKING_FOR, item_looking_for)
                .with_option(OPT_PRIVATE_SERVER_LINK, link);
            run_trade(&cli.config, invocation)
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn load_config(config_path: &str, token_override: Option<String>) -> Config {
    let mut config = Config::load_or_env(config_path);

    if let Some(token) = token_override {
        config.bot.token = Some(token);
    }
    config
}

fn run_bot(config_path: &str, token_override: Option<String>) -> Result<(), BotError> {
    let config = load_config(config_path, token_override);
    let token = config.token()?.to_string();

    tracing::info!("Starting {} (trade channel {})", config.bot.name, config.trade.channel_id);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| BotError::Internal(format!("Failed to start runtime: {}", e)))?;

    rt.block_on(async {
        if config.health.enabled {
            health::spawn(config.health.port, config.bot.name.clone())
                .await
                .map_err(|e| BotError::Network(format!("Failed to bind health endpoint: {}", e)))?;
        }

        let handler = TradeHandler::new(CommandSpec::trade(), &config.trade.channel_id, &config.bot.presence);
        discord::run(&token, handler).await
    })
}

fn run_trade(config_path: &str, invocation: ConsoleInvocation) -> Result<(), BotError> {
    let config = load_config(config_path, None);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| BotError::Internal(format!("Failed to start runtime: {}", e)))?;

    let service = TradeService::new(ConsoleAdapter::new(), config.trade.channel_id);
    let reply = rt.block_on(service.handle(&invocation));

    if reply.is_success() {
        Ok(())
    } else {
        Err(BotError::Internal(format!("trade request was not sent ({:?})", reply)))
    }
}

fn init_config() -> Result<(), BotError> {
    let yaml = Config::default().to_yaml()?;
    println!("{}", yaml);
    println!("\nSave this to config.yaml and adjust as needed.");
    Ok(())
}
