//! Daily gap journal
//!
//! Append-only accumulator of the day's observed gaps, drained once per day
//! by the summary operation. Owned by the run loop and passed by reference
//! into each operation; nothing here is shared or global.

use super::GapRecord;

/// Maximum records included in one daily summary
pub const SUMMARY_LIMIT: usize = 4;

/// The day's gap records, in append order
#[derive(Debug, Default)]
pub struct GapLog {
    records: Vec<GapRecord>,
}

impl GapLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record observed during a scan
    pub fn push(&mut self, record: GapRecord) {
        self.records.push(record);
    }

    /// Number of records accumulated so far
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the log holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Drain the log, returning up to `limit` records ordered by descending
    /// absolute gap. Ties keep append order. The log is empty afterwards
    /// regardless of how many records were returned.
    pub fn drain_top(&mut self, limit: usize) -> Vec<GapRecord> {
        let mut records = std::mem::take(&mut self.records);
        // Stable sort preserves append order among equal |gap| values
        records.sort_by(|a, b| b.gap_pct.abs().cmp(&a.gap_pct.abs()));
        records.truncate(limit);
        records
    }
}
