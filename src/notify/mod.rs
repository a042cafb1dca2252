//! Notification channel
//!
//! Alert delivery is modeled as a single injected capability so the scan
//! logic never knows which channel (or test double) is behind it.

mod message;
mod telegram;

pub use message::{format_alert, format_summary, MORNING_BRIEFING};
pub use telegram::{TelegramConfig, TelegramNotifier, TELEGRAM_API_URL};

use async_trait::async_trait;

/// Errors from notification dispatch
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    /// Transport-level failure (connect, TLS, timeout)
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The channel API rejected the message
    #[error("channel API error: HTTP {status} - {body}")]
    Api { status: u16, body: String },
    /// A required credential was absent from the environment
    #[error("missing environment variable {0}")]
    MissingCredential(&'static str),
}

/// A channel that delivers rich-text messages to the configured destination
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver one message; blocks the caller until the channel accepts it
    async fn send(&self, text: &str) -> Result<(), NotifyError>;
}

/// Notifier that logs instead of sending; used by dry runs
#[derive(Debug, Default)]
pub struct NullNotifier;

#[async_trait]
impl Notifier for NullNotifier {
    async fn send(&self, text: &str) -> Result<(), NotifyError> {
        tracing::info!(chars = text.len(), "Dry run, message not dispatched");
        Ok(())
    }
}
