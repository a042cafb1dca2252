//! Gap computation and classification

use super::{Evaluation, Instrument, Verdict};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Default alert threshold in percent. The gap must strictly exceed it
/// (either side) before an alert fires; exactly ±threshold stays neutral.
pub const ALERT_THRESHOLD_PCT: Decimal = dec!(0.5);

/// Scale a raw NAV by the instrument's unit-conversion ratio
pub fn adjusted_nav(raw_nav: Decimal, ratio: Decimal) -> Decimal {
    raw_nav * ratio
}

/// Signed gap between market price and adjusted NAV, in percent
///
/// Positive means the market trades at a premium to NAV. Requires a
/// positive adjusted NAV.
pub fn gap_pct(market_price: Decimal, adjusted_nav: Decimal) -> Decimal {
    (market_price - adjusted_nav) / adjusted_nav * dec!(100)
}

/// Classify a gap against the threshold
pub fn classify(gap_pct: Decimal, threshold: Decimal) -> Verdict {
    if gap_pct > threshold {
        Verdict::Premium
    } else if gap_pct < -threshold {
        Verdict::Discount
    } else {
        Verdict::Neutral
    }
}

/// Evaluate one instrument from freshly fetched quote values
pub fn evaluate(
    instrument: &Instrument,
    raw_nav: Decimal,
    market_price: Decimal,
    threshold: Decimal,
) -> Evaluation {
    let adjusted_nav = adjusted_nav(raw_nav, instrument.nav_ratio);
    let gap_pct = gap_pct(market_price, adjusted_nav);

    Evaluation {
        name: instrument.name.clone(),
        market_price,
        adjusted_nav,
        gap_pct,
        verdict: classify(gap_pct, threshold),
    }
}
