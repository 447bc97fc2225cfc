//! Homework bot CLI
//!
//! Credentials come from the environment; every option can also be set there.

use std::time::Duration;

use clap::Parser;
use homework_bot::config::{PRACTICUM_TOKEN_VAR, TELEGRAM_CHAT_ID_VAR, TELEGRAM_TOKEN_VAR};
use homework_bot::translator::Locale;
use homework_bot::{Config, Credentials};
use tracing::Level;

#[derive(Parser)]
#[command(name = "homework-bot")]
#[command(about = "Forward homework review status changes to Telegram")]
#[command(version)]
struct Args {
    /// Practicum API OAuth token
    #[arg(long, env = PRACTICUM_TOKEN_VAR, hide_env_values = true)]
    practicum_token: Option<String>,

    /// Telegram bot token
    #[arg(long, env = TELEGRAM_TOKEN_VAR, hide_env_values = true)]
    telegram_token: Option<String>,

    /// Telegram chat that receives notifications
    #[arg(long, env = TELEGRAM_CHAT_ID_VAR)]
    telegram_chat_id: Option<String>,

    /// Status endpoint (overrides the built-in one)
    #[arg(long, env = "HOMEWORK_BOT_ENDPOINT")]
    endpoint: Option<String>,

    /// Delay between polling cycles, e.g. "10m" or "600s"
    #[arg(long, env = "HOMEWORK_BOT_RETRY_PERIOD", value_parser = humantime::parse_duration)]
    retry_period: Option<Duration>,

    /// Timeout for a single HTTP request
    #[arg(long, env = "HOMEWORK_BOT_REQUEST_TIMEOUT", value_parser = humantime::parse_duration)]
    request_timeout: Option<Duration>,

    /// Language of the messages sent to the chat
    #[arg(long, env = "HOMEWORK_BOT_LOCALE", value_enum, default_value_t = Locale::En)]
    locale: Locale,

    /// Log level
    #[arg(short, long, env = "HOMEWORK_BOT_LOG_LEVEL", default_value = "info", value_parser = parse_log_level)]
    log_level: Level,
}

fn parse_log_level(s: &str) -> Result<Level, String> {
    s.parse().map_err(|_| {
        format!(
            "Invalid log level: {}. Use: trace, debug, info, warn, error",
            s
        )
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .init();

    tracing::debug!(
        "Parsed command line arguments: endpoint={:?}, retry_period={:?}, request_timeout={:?}, locale={:?}, log_level={:?}",
        args.endpoint,
        args.retry_period,
        args.request_timeout,
        args.locale,
        args.log_level
    );

    let credentials = Credentials {
        practicum_token: args.practicum_token,
        telegram_token: args.telegram_token,
        telegram_chat_id: args.telegram_chat_id,
    };
    let mut config = match Config::from_credentials(credentials) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("CRITICAL: {}. Refusing to start.", e);
            std::process::exit(1);
        }
    };

    if let Some(endpoint) = args.endpoint {
        config.endpoint = endpoint;
    }
    if let Some(retry_period) = args.retry_period {
        config.retry_period = retry_period;
    }
    if let Some(request_timeout) = args.request_timeout {
        config.request_timeout = request_timeout;
    }
    config.locale = args.locale;

    tracing::info!("Starting homework bot");
    tracing::info!("Endpoint: {}", config.endpoint);
    tracing::info!("Retry period: {:?}", config.retry_period);
    tracing::debug!("Configuration: {:?}", config);

    homework_bot::run(config).await?;

    Ok(())
}
