//! Homework bot - homework review status notifier
//!
//! Polls the homework status API, validates what comes back, and forwards
//! status changes to a Telegram chat.

pub mod api;
pub mod config;
pub mod error;
pub mod homework;
pub mod io;
pub mod notifier;
pub mod poller;
pub mod telegram;
pub mod translator;
pub mod validator;


pub use config::{Config, Credentials};
pub use error::{HomeworkBotError, Result, ShapeError};

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::api::{PracticumClient, StatusApi};
use crate::io::ReqwestHttpClient;
use crate::notifier::Notifier;
use crate::poller::Poller;
use crate::telegram::TelegramNotifier;

/// Run the homework bot with the given configuration. Only returns on a
/// startup error; the polling loop itself never ends.
pub async fn run(config: Config) -> Result<()> {
    let http: Arc<dyn io::HttpClient> =
        Arc::new(ReqwestHttpClient::with_timeout(config.request_timeout)?);

    let api: Arc<dyn StatusApi> = Arc::new(PracticumClient::new(&config, Arc::clone(&http)));
    let notifier: Arc<dyn Notifier> =
        Arc::new(TelegramNotifier::new(&config, Arc::clone(&http)));

    let poller = Poller::new(api, notifier, &config, current_epoch_secs());

    tracing::info!("Homework bot started");
    poller.run().await;

    Ok(())
}

/// Seconds since the Unix epoch
pub fn current_epoch_secs() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs() as i64
}
