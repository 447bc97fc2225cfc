//! Poller: sequences fetch, validation, translation and notification
//!
//! One cycle runs fetch → validate → translate → notify. Every failure inside
//! a cycle is turned into a diagnostic message for the recipient, and the
//! loop always sleeps for the retry period before the next cycle.
//!
//! The cursor only moves forward, and only after a payload passed validation.

use std::sync::Arc;
use std::time::Duration;

use crate::api::StatusApi;
use crate::config::Config;
use crate::homework::Homework;
use crate::notifier::{notify, Notifier};
use crate::translator::VerdictTable;
use crate::validator::{validate_current_date, validate_record, validate_response};

/// What a single polling cycle did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// The newest record was reported to the recipient
    Notified { homework: Homework, cursor: i64 },
    /// The API had nothing new
    NoNewWork { cursor: i64 },
    /// The cycle failed and the diagnostic was sent instead
    Failed { diagnostic: String },
}

/// Owns the cursor and drives the polling loop
pub struct Poller {
    api: Arc<dyn StatusApi>,
    notifier: Arc<dyn Notifier>,
    verdicts: VerdictTable,
    retry_period: Duration,
    cursor: i64,
}

impl std::fmt::Debug for Poller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Poller")
            .field("notifier", &self.notifier.type_name())
            .field("retry_period", &self.retry_period)
            .field("cursor", &self.cursor)
            .finish()
    }
}

impl Poller {
    pub fn new(
        api: Arc<dyn StatusApi>,
        notifier: Arc<dyn Notifier>,
        config: &Config,
        cursor: i64,
    ) -> Self {
        Self {
            api,
            notifier,
            verdicts: VerdictTable::new(config.locale),
            retry_period: config.retry_period,
            cursor,
        }
    }

    /// Lower bound (seconds since epoch) used for the next fetch
    pub fn cursor(&self) -> i64 {
        self.cursor
    }

    /// Poll forever. Each cycle is followed by the retry period, whatever its outcome.
    pub async fn run(mut self) {
        tracing::info!(
            "Polling every {:?} starting from {}",
            self.retry_period,
            self.cursor
        );

        loop {
            let outcome = self.run_cycle().await;
            tracing::debug!("Cycle finished: {:?}", outcome);
            tokio::time::sleep(self.retry_period).await;
        }
    }

    /// Run one cycle. Errors never escape: they are reported to the recipient.
    pub async fn run_cycle(&mut self) -> CycleOutcome {
        match self.poll_once().await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::error!("Polling cycle failed: {}", e);
                let diagnostic = self.verdicts.diagnostic(&e.to_string());
                notify(self.notifier.as_ref(), &diagnostic).await;
                CycleOutcome::Failed { diagnostic }
            }
        }
    }

    async fn poll_once(&mut self) -> crate::Result<CycleOutcome> {
        let payload = self.api.fetch(self.cursor).await?;
        let homeworks = validate_response(&payload)?;
        tracing::info!("Received {} homework record(s)", homeworks.len());

        let Some(newest) = homeworks.first() else {
            tracing::info!("No new work since {}", self.cursor);
            match validate_current_date(&payload) {
                Ok(current_date) => self.advance_cursor(current_date),
                Err(e) => tracing::debug!("Keeping cursor {}: {}", self.cursor, e),
            }
            return Ok(CycleOutcome::NoNewWork {
                cursor: self.cursor,
            });
        };

        let current_date = validate_current_date(&payload)?;
        let homework = validate_record(newest)?;
        let message = self.verdicts.translate(&homework);
        tracing::info!("Homework '{}' is now {}", homework.name, homework.status);
        notify(self.notifier.as_ref(), &message).await;
        self.advance_cursor(current_date);

        Ok(CycleOutcome::Notified {
            homework,
            cursor: self.cursor,
        })
    }

    fn advance_cursor(&mut self, current_date: i64) {
        if current_date < self.cursor {
            tracing::warn!(
                "Ignoring current_date {} older than cursor {}",
                current_date,
                self.cursor
            );
            return;
        }
        self.cursor = current_date;
    }
}
