//! Discrepancy evaluation and scan orchestration
//!
//! Compares market prices against adjusted NAVs, classifies the gap, and
//! drives alerting and the daily gap journal.

mod evaluator;
mod journal;
mod scanner;
mod types;

pub use evaluator::{adjusted_nav, classify, evaluate, gap_pct, ALERT_THRESHOLD_PCT};
pub use journal::{GapLog, SUMMARY_LIMIT};
pub use scanner::{ScanOutcome, Scanner};
pub use types::{Evaluation, GapRecord, Instrument, Verdict};
