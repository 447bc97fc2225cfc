//! Notifier trait for delivering messages to the recipient

use async_trait::async_trait;

/// Trait for sending text to the configured recipient
#[async_trait]
pub trait Notifier: Send + Sync + std::fmt::Debug {
    /// Get the notifier type name (e.g. "telegram")
    fn type_name(&self) -> &str;

    /// Deliver a message, reporting failures as [`crate::HomeworkBotError::Delivery`]
    async fn send(&self, message: &str) -> crate::Result<()>;
}

/// Deliver `message` on a best-effort basis.
///
/// Failures are logged and dropped; this never returns an error.
pub async fn notify(notifier: &dyn Notifier, message: &str) {
    match notifier.send(message).await {
        Ok(()) => {
            tracing::debug!("Message delivered via {}: {}", notifier.type_name(), message)
        }
        Err(e) => tracing::error!(
            "Failed to deliver message via {}: {}",
            notifier.type_name(),
            e
        ),
    }
}
