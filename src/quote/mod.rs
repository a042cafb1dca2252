//! Quote fetching module
//!
//! REST clients for the two third-party quote providers: AMFI for fund NAVs
//! and Yahoo Finance for exchange prices. Every failure path collapses to a
//! [`QuoteError`] so a scan can skip the instrument and move on; no fetch is
//! ever retried.

mod amfi;
mod yahoo;

pub use amfi::{AmfiClient, AmfiConfig, AMFI_API_URL};
pub use yahoo::{YahooClient, YahooConfig, YAHOO_API_URL};

use async_trait::async_trait;
use rust_decimal::Decimal;

/// Why a quote lookup produced no value
#[derive(Debug, thiserror::Error)]
pub enum QuoteError {
    /// Transport-level failure (connect, TLS, timeout)
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// Provider answered with a non-success status
    #[error("provider returned HTTP {0}")]
    Status(reqwest::StatusCode),
    /// Body was not the expected JSON shape
    #[error("malformed payload: {0}")]
    Malformed(#[from] serde_json::Error),
    /// A numeric field did not parse as a decimal
    #[error("invalid numeric field: {0}")]
    BadNumber(#[from] rust_decimal::Error),
    /// Payload parsed but held no quote (empty history, closed market, delisted symbol)
    #[error("quote missing from payload")]
    MissingQuote,
}

/// Trait for quote lookups, one call per value, no caching across scans
#[async_trait]
pub trait QuoteSource: Send + Sync {
    /// Latest published NAV for an AMFI scheme code
    async fn nav(&self, scheme_code: &str) -> Result<Decimal, QuoteError>;

    /// Latest market price for an exchange ticker symbol
    async fn market_price(&self, symbol: &str) -> Result<Decimal, QuoteError>;
}

/// Production quote source backed by the AMFI and Yahoo REST APIs
pub struct RestQuotes {
    nav: AmfiClient,
    price: YahooClient,
}

impl RestQuotes {
    /// Create a quote source with default provider configuration
    pub fn new() -> Self {
        Self {
            nav: AmfiClient::new(),
            price: YahooClient::new(),
        }
    }
}

impl Default for RestQuotes {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QuoteSource for RestQuotes {
    async fn nav(&self, scheme_code: &str) -> Result<Decimal, QuoteError> {
        self.nav.latest_nav(scheme_code).await
    }

    async fn market_price(&self, symbol: &str) -> Result<Decimal, QuoteError> {
        self.price.market_price(symbol).await
    }
}
