//! Configuration for the homework bot

use std::time::Duration;

use crate::translator::Locale;
use crate::HomeworkBotError;

/// Status endpoint polled when no override is given
pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Delay between two polling cycles
pub const DEFAULT_RETRY_PERIOD: Duration = Duration::from_secs(600);

/// Upper bound for a single HTTP request
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Environment variables holding the required credentials
pub const PRACTICUM_TOKEN_VAR: &str = "PRACTICUM_TOKEN";
pub const TELEGRAM_TOKEN_VAR: &str = "TELEGRAM_TOKEN";
pub const TELEGRAM_CHAT_ID_VAR: &str = "TELEGRAM_CHAT_ID";

/// Credentials as read from the environment, before validation
#[derive(Clone, Default)]
pub struct Credentials {
    pub practicum_token: Option<String>,
    pub telegram_token: Option<String>,
    pub telegram_chat_id: Option<String>,
}

/// Immutable configuration, built once at startup
#[derive(Clone)]
pub struct Config {
    pub endpoint: String,
    pub practicum_token: String,
    pub telegram_token: String,
    pub telegram_chat_id: String,
    pub retry_period: Duration,
    pub request_timeout: Duration,
    pub locale: Locale,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("endpoint", &self.endpoint)
            .field("telegram_chat_id", &self.telegram_chat_id)
            .field("retry_period", &self.retry_period)
            .field("request_timeout", &self.request_timeout)
            .field("locale", &self.locale)
            .finish_non_exhaustive()
    }
}

impl Config {
    /// Configuration with the given credentials and default settings
    pub fn new(
        practicum_token: impl Into<String>,
        telegram_token: impl Into<String>,
        telegram_chat_id: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            practicum_token: practicum_token.into(),
            telegram_token: telegram_token.into(),
            telegram_chat_id: telegram_chat_id.into(),
            retry_period: DEFAULT_RETRY_PERIOD,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            locale: Locale::default(),
        }
    }

    /// Validate raw credentials. Empty values count as missing, and every
    /// missing variable is named in the error.
    pub fn from_credentials(credentials: Credentials) -> crate::Result<Self> {
        let practicum_token = present(credentials.practicum_token);
        let telegram_token = present(credentials.telegram_token);
        let telegram_chat_id = present(credentials.telegram_chat_id);

        match (practicum_token, telegram_token, telegram_chat_id) {
            (Some(practicum_token), Some(telegram_token), Some(telegram_chat_id)) => {
                Ok(Self::new(practicum_token, telegram_token, telegram_chat_id))
            }
            (practicum_token, telegram_token, telegram_chat_id) => {
                let missing: Vec<&str> = [
                    (PRACTICUM_TOKEN_VAR, practicum_token.is_none()),
                    (TELEGRAM_TOKEN_VAR, telegram_token.is_none()),
                    (TELEGRAM_CHAT_ID_VAR, telegram_chat_id.is_none()),
                ]
                .into_iter()
                .filter(|(_, is_missing)| *is_missing)
                .map(|(name, _)| name)
                .collect();
                Err(HomeworkBotError::Config(format!(
                    "missing environment variables: {}",
                    missing.join(", ")
                )))
            }
        }
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
