//! Yahoo Finance chart API client for market prices
//!
//! The chart endpoint rejects default HTTP client user agents, so requests
//! carry a browser-like one. The current price sits under
//! chart.result[0].meta.regularMarketPrice.

use super::QuoteError;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::time::Duration;

/// Yahoo Finance API base URL
pub const YAHOO_API_URL: &str = "https://query1.finance.yahoo.com";

/// User agent sent with every request
const BROWSER_USER_AGENT: &str = "Mozilla/5.0";

/// Configuration for the Yahoo client
#[derive(Debug, Clone)]
pub struct YahooConfig {
    /// Base URL for the chart API
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// User-Agent header value
    pub user_agent: String,
}

impl Default for YahooConfig {
    fn default() -> Self {
        Self {
            base_url: YAHOO_API_URL.to_string(),
            timeout: Duration::from_secs(10),
            user_agent: BROWSER_USER_AGENT.to_string(),
        }
    }
}

/// Client for the Yahoo Finance chart API
pub struct YahooClient {
    config: YahooConfig,
    client: Client,
}

impl YahooClient {
    /// Create a new Yahoo client with default configuration
    pub fn new() -> Self {
        Self::with_config(YahooConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: YahooConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Fetch the current market price for a ticker symbol
    pub async fn market_price(&self, symbol: &str) -> Result<Decimal, QuoteError> {
        let url = format!("{}/v8/finance/chart/{}", self.config.base_url, symbol);

        tracing::debug!(url = %url, "Fetching market price from Yahoo chart API");

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(QuoteError::Status(response.status()));
        }

        let body = response.text().await?;
        Self::parse_price(&body)
    }

    /// Extract the regular market price from a chart payload
    fn parse_price(body: &str) -> Result<Decimal, QuoteError> {
        let chart: ChartResponse = serde_json::from_str(body)?;
        chart
            .chart
            .result
            .unwrap_or_default()
            .into_iter()
            .next()
            .and_then(|r| r.meta.regular_market_price)
            .ok_or(QuoteError::MissingQuote)
    }
}

impl Default for YahooClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Top-level chart response
#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: ChartEnvelope,
}

/// Chart envelope; `result` is null when the symbol is unknown
#[derive(Debug, Deserialize)]
struct ChartEnvelope {
    result: Option<Vec<ChartResult>>,
}

/// One chart result
#[derive(Debug, Deserialize)]
struct ChartResult {
    meta: ChartMeta,
}

/// Chart metadata; the price is absent outside trading data windows
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChartMeta {
    regular_market_price: Option<Decimal>,
    #[allow(dead_code)]
    symbol: Option<String>,
}
