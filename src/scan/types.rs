//! Scan domain types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An exchange-traded fund tracked by the scanner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Instrument {
    /// Display name (e.g., "Nifty BeES")
    pub name: String,
    /// Exchange ticker for the market price feed (e.g., "NIFTYBEES.NS")
    pub symbol: String,
    /// AMFI scheme code for the NAV feed (e.g., "120716")
    pub scheme_code: String,
    /// NAV units per market-quoted unit; always positive
    pub nav_ratio: Decimal,
}

/// Gap classification relative to the alert threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// Market price above adjusted NAV by more than the threshold
    Premium,
    /// Market price below adjusted NAV by more than the threshold
    Discount,
    /// Gap within the threshold either side
    Neutral,
}

/// Result of evaluating one instrument in one scan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Evaluation {
    /// Instrument display name
    pub name: String,
    /// Fetched market price
    pub market_price: Decimal,
    /// Raw NAV scaled by the instrument's ratio
    pub adjusted_nav: Decimal,
    /// Signed gap percentage; positive means premium
    pub gap_pct: Decimal,
    /// Classification against the alert threshold
    pub verdict: Verdict,
}

/// One instrument's gap, journaled for the end-of-day summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GapRecord {
    /// Instrument display name
    pub name: String,
    /// Signed gap percentage
    pub gap_pct: Decimal,
    /// Market price at scan time
    pub market_price: Decimal,
    /// Adjusted NAV at scan time
    pub adjusted_nav: Decimal,
    /// When the scan observed this gap
    pub timestamp: DateTime<Utc>,
}
