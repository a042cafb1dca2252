//! Scan command implementation

use crate::config::Config;
use crate::notify::{Notifier, NullNotifier, TelegramNotifier};
use crate::quote::{QuoteSource, RestQuotes};
use crate::scan::{GapLog, Scanner};
use clap::Args;
use std::sync::Arc;

#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Evaluate and log without sending any notification
    #[arg(long)]
    pub dry_run: bool,
}

impl ScanArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let notifier: Arc<dyn Notifier> = if self.dry_run {
            Arc::new(NullNotifier)
        } else {
            Arc::new(TelegramNotifier::from_env()?)
        };
        let quotes: Arc<dyn QuoteSource> = Arc::new(RestQuotes::new());
        let scanner = Scanner::new(
            config.instruments.clone(),
            config.alert.threshold_pct,
            quotes,
            notifier,
        );

        let mut log = GapLog::new();
        let outcome = scanner.run_scan(&mut log).await?;

        for eval in &outcome.evaluations {
            println!(
                "{}: price ₹{} | NAV ₹{:.3} | gap {:.2}% [{:?}]",
                eval.name, eval.market_price, eval.adjusted_nav, eval.gap_pct, eval.verdict
            );
        }
        if outcome.skipped > 0 {
            println!("{} instrument(s) skipped (fetch failed)", outcome.skipped);
        }
        println!("{} alert(s) sent", outcome.alerts_sent);

        Ok(())
    }
}
