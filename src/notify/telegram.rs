//! Telegram bot notifier
//!
//! Sends messages through the Bot API sendMessage method with HTML parse
//! mode. The bot token and destination chat are read from the environment;
//! both are required.

use super::{Notifier, NotifyError};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

/// Telegram Bot API base URL
pub const TELEGRAM_API_URL: &str = "https://api.telegram.org";

/// Environment variable holding the bot credential
const BOT_TOKEN_VAR: &str = "TELEGRAM_BOT_TOKEN";

/// Environment variable holding the destination chat identifier
const CHAT_ID_VAR: &str = "TELEGRAM_CHAT_ID";

/// Configuration for the Telegram notifier
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    /// Base URL for the Bot API
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// Bot credential
    pub bot_token: String,
    /// Destination chat or channel identifier
    pub chat_id: String,
}

impl TelegramConfig {
    /// Read credentials from the environment, failing fast when absent
    pub fn from_env() -> Result<Self, NotifyError> {
        let bot_token =
            std::env::var(BOT_TOKEN_VAR).map_err(|_| NotifyError::MissingCredential(BOT_TOKEN_VAR))?;
        let chat_id =
            std::env::var(CHAT_ID_VAR).map_err(|_| NotifyError::MissingCredential(CHAT_ID_VAR))?;

        Ok(Self {
            base_url: TELEGRAM_API_URL.to_string(),
            timeout: Duration::from_secs(10),
            bot_token,
            chat_id,
        })
    }
}

/// Notifier backed by the Telegram Bot API
pub struct TelegramNotifier {
    config: TelegramConfig,
    client: Client,
}

impl TelegramNotifier {
    /// Create a notifier with the given configuration
    pub fn new(config: TelegramConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Create a notifier from environment credentials
    pub fn from_env() -> Result<Self, NotifyError> {
        Ok(Self::new(TelegramConfig::from_env()?))
    }

    fn send_message_url(&self) -> String {
        format!(
            "{}/bot{}/sendMessage",
            self.config.base_url, self.config.bot_token
        )
    }
}

/// Bot API sendMessage request body
#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
    parse_mode: &'a str,
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send(&self, text: &str) -> Result<(), NotifyError> {
        let request = SendMessageRequest {
            chat_id: &self.config.chat_id,
            text,
            parse_mode: "HTML",
        };

        let response = self
            .client
            .post(self.send_message_url())
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(NotifyError::Api { status, body });
        }

        tracing::debug!(chars = text.len(), "Telegram message delivered");
        Ok(())
    }
}
