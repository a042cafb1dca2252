//! Run command implementation
//!
//! One immediate scan at startup, then the cooperative poll loop: scan on
//! the configured interval, briefing and summary once per local day. A
//! notification dispatch error ends the loop and the process.

use crate::config::Config;
use crate::notify::{Notifier, TelegramNotifier};
use crate::quote::{QuoteSource, RestQuotes};
use crate::scan::{GapLog, Scanner};
use crate::schedule::{parse_time, DailyJob, POLL_INTERVAL};
use chrono::Utc;
use chrono_tz::Tz;
use clap::Args;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

#[derive(Args, Debug)]
pub struct RunArgs {}

impl RunArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let tz: Tz = config
            .schedule
            .timezone
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid timezone {:?}: {}", config.schedule.timezone, e))?;
        let briefing_at = parse_time(&config.schedule.briefing_time)?;
        let summary_at = parse_time(&config.schedule.summary_time)?;

        let quotes: Arc<dyn QuoteSource> = Arc::new(RestQuotes::new());
        let notifier: Arc<dyn Notifier> = Arc::new(TelegramNotifier::from_env()?);
        let scanner = Scanner::new(
            config.instruments.clone(),
            config.alert.threshold_pct,
            quotes,
            notifier,
        );
        let mut log = GapLog::new();

        let now_local = Utc::now().with_timezone(&tz).naive_local();
        let mut briefing = DailyJob::starting("morning-briefing", briefing_at, now_local);
        let mut summary = DailyJob::starting("daily-summary", summary_at, now_local);

        tracing::info!(
            instruments = scanner.instruments().len(),
            interval_secs = config.schedule.scan_interval_secs,
            timezone = %tz,
            "Scanner starting"
        );

        // Immediate scan on startup, then the interval takes over
        scanner.run_scan(&mut log).await?;
        let interval = Duration::from_secs(config.schedule.scan_interval_secs);
        let mut next_scan = Instant::now() + interval;

        loop {
            tokio::time::sleep(POLL_INTERVAL).await;
            let now_local = Utc::now().with_timezone(&tz).naive_local();

            if config.schedule.briefing_enabled && briefing.due(now_local) {
                tracing::info!(job = briefing.name(), "Daily job due");
                scanner.send_morning_briefing().await?;
                briefing.mark_run(now_local.date());
            }

            if config.schedule.summary_enabled && summary.due(now_local) {
                tracing::info!(job = summary.name(), "Daily job due");
                scanner.send_daily_summary(&mut log).await?;
                summary.mark_run(now_local.date());
            }

            if Instant::now() >= next_scan {
                scanner.run_scan(&mut log).await?;
                next_scan = Instant::now() + interval;
            }
        }
    }
}
