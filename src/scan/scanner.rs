//! Scan orchestration
//!
//! One scan walks the configured instruments in declaration order: fetch
//! both quote values, evaluate the gap, alert on premium/discount, journal
//! the record. A fetch failure skips that instrument for this scan only; a
//! notification failure aborts the scan and propagates.

use super::{evaluate, Evaluation, GapLog, GapRecord, Instrument, SUMMARY_LIMIT};
use crate::notify::{format_alert, format_summary, Notifier, MORNING_BRIEFING};
use crate::quote::QuoteSource;
use crate::telemetry::{
    ALERTS_SENT_TOTAL, FETCH_FAILURES_TOTAL, SCANS_TOTAL, SCAN_DURATION_MS, SUMMARIES_SENT_TOTAL,
};
use chrono::Utc;
use metrics::{counter, histogram};
use rust_decimal::Decimal;
use std::sync::Arc;
use std::time::Instant;

/// Counters from one scan pass
#[derive(Debug, Default)]
pub struct ScanOutcome {
    /// Evaluations for every instrument with both quotes available
    pub evaluations: Vec<Evaluation>,
    /// Instruments skipped because a quote fetch failed
    pub skipped: usize,
    /// Alerts dispatched this scan
    pub alerts_sent: usize,
}

/// Walks instruments, evaluates gaps, and dispatches notifications
pub struct Scanner {
    instruments: Vec<Instrument>,
    threshold: Decimal,
    quotes: Arc<dyn QuoteSource>,
    notifier: Arc<dyn Notifier>,
}

impl Scanner {
    /// Create a scanner over the configured instruments
    pub fn new(
        instruments: Vec<Instrument>,
        threshold: Decimal,
        quotes: Arc<dyn QuoteSource>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            instruments,
            threshold,
            quotes,
            notifier,
        }
    }

    /// Run one full scan, appending a gap record per evaluated instrument
    ///
    /// Returns an error only when notification dispatch fails; quote
    /// failures are absorbed as skips.
    pub async fn run_scan(&self, log: &mut GapLog) -> anyhow::Result<ScanOutcome> {
        tracing::info!(instruments = self.instruments.len(), "Scanning ETFs");
        let started = Instant::now();
        let mut outcome = ScanOutcome::default();

        for instrument in &self.instruments {
            let raw_nav = match self.quotes.nav(&instrument.scheme_code).await {
                Ok(nav) => nav,
                Err(e) => {
                    tracing::warn!(name = %instrument.name, error = %e, "NAV fetch failed, skipping");
                    counter!(FETCH_FAILURES_TOTAL).increment(1);
                    outcome.skipped += 1;
                    continue;
                }
            };

            let market_price = match self.quotes.market_price(&instrument.symbol).await {
                Ok(price) => price,
                Err(e) => {
                    tracing::warn!(name = %instrument.name, error = %e, "Price fetch failed, skipping");
                    counter!(FETCH_FAILURES_TOTAL).increment(1);
                    outcome.skipped += 1;
                    continue;
                }
            };

            let eval = evaluate(instrument, raw_nav, market_price, self.threshold);
            tracing::info!(
                name = %eval.name,
                price = %eval.market_price,
                adjusted_nav = %eval.adjusted_nav,
                gap_pct = %eval.gap_pct,
                verdict = ?eval.verdict,
                "Evaluated instrument"
            );

            if let Some(text) = format_alert(&eval) {
                // Dispatch failure is not recovered; the scan aborts here
                self.notifier.send(&text).await?;
                counter!(ALERTS_SENT_TOTAL).increment(1);
                outcome.alerts_sent += 1;
                tracing::info!(name = %eval.name, verdict = ?eval.verdict, "Alert sent");
            }

            log.push(GapRecord {
                name: eval.name.clone(),
                gap_pct: eval.gap_pct,
                market_price: eval.market_price,
                adjusted_nav: eval.adjusted_nav,
                timestamp: Utc::now(),
            });
            outcome.evaluations.push(eval);
        }

        counter!(SCANS_TOTAL).increment(1);
        histogram!(SCAN_DURATION_MS).record(started.elapsed().as_millis() as f64);
        tracing::info!(
            evaluated = outcome.evaluations.len(),
            skipped = outcome.skipped,
            alerts = outcome.alerts_sent,
            "Scan complete"
        );

        Ok(outcome)
    }

    /// Send the end-of-day summary and clear the journal
    ///
    /// No-op on an empty journal. Returns whether a message was sent.
    pub async fn send_daily_summary(&self, log: &mut GapLog) -> anyhow::Result<bool> {
        if log.is_empty() {
            tracing::info!("No gap records today, skipping summary");
            return Ok(false);
        }

        let recorded = log.len();
        let top = log.drain_top(SUMMARY_LIMIT);
        let text = format_summary(&top);
        self.notifier.send(&text).await?;
        counter!(SUMMARIES_SENT_TOTAL).increment(1);
        tracing::info!(recorded, summarized = top.len(), "Daily summary sent");
        Ok(true)
    }

    /// Send the static morning briefing
    pub async fn send_morning_briefing(&self) -> anyhow::Result<()> {
        self.notifier.send(MORNING_BRIEFING).await?;
        tracing::info!("Morning briefing sent");
        Ok(())
    }

    /// Instruments this scanner walks, in declaration order
    pub fn instruments(&self) -> &[Instrument] {
        &self.instruments
    }
}
