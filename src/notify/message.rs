//! Message rendering for the notification channel
//!
//! Telegram HTML with the formatting conventions users see on their phone:
//! bold headline, ₹ prices, NAV to 3 decimals, gap to 2 decimals with an
//! explicit sign.

use crate::scan::{Evaluation, GapRecord, Verdict};
use rust_decimal::Decimal;

/// Static message sent once every morning
pub const MORNING_BRIEFING: &str = "🌅 <b>Good morning!</b>\n\n\
    The ETF NAV gap scanner is live for today's session.\n\
    You will get an alert when any tracked ETF trades at a \
    meaningful premium or discount to its NAV.";

/// Render the alert for a premium/discount evaluation
///
/// Returns `None` for neutral evaluations; nothing is dispatched for those.
pub fn format_alert(eval: &Evaluation) -> Option<String> {
    match eval.verdict {
        Verdict::Premium => Some(format!(
            "🚨 <b>{} — PREMIUM ALERT</b>\n\n\
             📈 Market Price: ₹{}\n\
             📊 NAV: ₹{:.3}\n\
             ⚡ Gap: {} (Trading at PREMIUM)\n\n\
             ETF is overpriced vs underlying assets.\n\
             Historically this gap closes within 1-2 sessions.",
            eval.name,
            eval.market_price,
            eval.adjusted_nav,
            signed_pct(eval.gap_pct),
        )),
        Verdict::Discount => Some(format!(
            "🟢 <b>{} — DISCOUNT ALERT</b>\n\n\
             📉 Market Price: ₹{}\n\
             📊 NAV: ₹{:.3}\n\
             ⚡ Gap: {} (Trading at DISCOUNT)\n\n\
             ETF is cheaper than underlying assets.\n\
             Potential buy opportunity. Gap usually closes within 1-2 sessions.",
            eval.name,
            eval.market_price,
            eval.adjusted_nav,
            signed_pct(eval.gap_pct),
        )),
        Verdict::Neutral => None,
    }
}

/// Render the end-of-day summary, one line per selected record
pub fn format_summary(records: &[GapRecord]) -> String {
    let mut lines = vec!["📋 <b>Daily NAV Gap Summary</b>".to_string(), String::new()];
    for record in records {
        lines.push(format!(
            "• {}: {} (₹{} vs NAV ₹{:.3})",
            record.name,
            signed_pct(record.gap_pct),
            record.market_price,
            record.adjusted_nav,
        ));
    }
    lines.join("\n")
}

/// Two-decimal percentage with an explicit sign, e.g. "+3.13%" / "-0.31%"
fn signed_pct(gap_pct: Decimal) -> String {
    if gap_pct.is_sign_negative() {
        format!("{:.2}%", gap_pct)
    } else {
        format!("+{:.2}%", gap_pct)
    }
}
