//! AMFI API client for fund NAV lookups
//!
//! Fetches the published NAV history for a mutual-fund scheme. The history
//! is ordered newest first; only the head entry is used.

use super::QuoteError;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::str::FromStr;
use std::time::Duration;

/// AMFI API base URL
pub const AMFI_API_URL: &str = "https://api.mfapi.in";

/// Configuration for the AMFI client
#[derive(Debug, Clone)]
pub struct AmfiConfig {
    /// Base URL for the AMFI API
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for AmfiConfig {
    fn default() -> Self {
        Self {
            base_url: AMFI_API_URL.to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

/// Client for the AMFI mutual-fund API
pub struct AmfiClient {
    config: AmfiConfig,
    client: Client,
}

impl AmfiClient {
    /// Create a new AMFI client with default configuration
    pub fn new() -> Self {
        Self::with_config(AmfiConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: AmfiConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Fetch the latest published NAV for a scheme code
    pub async fn latest_nav(&self, scheme_code: &str) -> Result<Decimal, QuoteError> {
        let url = format!("{}/mf/{}", self.config.base_url, scheme_code);

        tracing::debug!(url = %url, "Fetching NAV history from AMFI API");

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(QuoteError::Status(response.status()));
        }

        let body = response.text().await?;
        Self::parse_nav(&body)
    }

    /// Extract the newest NAV from a history payload
    fn parse_nav(body: &str) -> Result<Decimal, QuoteError> {
        let history: NavHistory = serde_json::from_str(body)?;
        let entry = history.data.first().ok_or(QuoteError::MissingQuote)?;
        Ok(Decimal::from_str(&entry.nav)?)
    }
}

impl Default for AmfiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// NAV history response from the AMFI API
#[derive(Debug, Deserialize)]
struct NavHistory {
    /// History entries, newest first
    #[serde(default)]
    data: Vec<NavEntry>,
}

/// One published NAV observation
#[derive(Debug, Deserialize)]
struct NavEntry {
    /// Publication date (DD-MM-YYYY)
    #[allow(dead_code)]
    date: Option<String>,
    /// NAV as a numeric string
    nav: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_amfi_client_creation() {
        let client = AmfiClient::new();
        assert_eq!(client.config.base_url, AMFI_API_URL);
    }

    #[test]
    fn test_amfi_config_default() {
        let config = AmfiConfig::default();
        assert_eq!(config.base_url, AMFI_API_URL);
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_amfi_config_custom() {
        let config = AmfiConfig {
            base_url: "https://test.example.com".to_string(),
            timeout: Duration::from_secs(30),
        };

        let client = AmfiClient::with_config(config);
        assert_eq!(client.config.base_url, "https://test.example.com");
        assert_eq!(client.config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_parse_nav() {
        let body = r#"{
            "meta": {"scheme_name": "Nippon India ETF Nifty 50 BeES"},
            "data": [
                {"date": "05-08-2026", "nav": "285.1234"},
                {"date": "04-08-2026", "nav": "283.9900"}
            ]
        }"#;

        let nav = AmfiClient::parse_nav(body).unwrap();
        assert_eq!(nav, dec!(285.1234));
    }

    #[test]
    fn test_parse_nav_empty_history() {
        let body = r#"{"data": []}"#;
        let result = AmfiClient::parse_nav(body);
        assert!(matches!(result, Err(QuoteError::MissingQuote)));
    }

    #[test]
    fn test_parse_nav_missing_data_field() {
        let body = r#"{"status": "SUCCESS"}"#;
        let result = AmfiClient::parse_nav(body);
        assert!(matches!(result, Err(QuoteError::MissingQuote)));
    }

    #[test]
    fn test_parse_nav_invalid_json() {
        let result = AmfiClient::parse_nav("not json");
        assert!(matches!(result, Err(QuoteError::Malformed(_))));
    }

    #[test]
    fn test_parse_nav_bad_number() {
        let body = r#"{"data": [{"date": "05-08-2026", "nav": "N.A."}]}"#;
        let result = AmfiClient::parse_nav(body);
        assert!(matches!(result, Err(QuoteError::BadNumber(_))));
    }
}
