//! Cooperative scheduling primitives
//!
//! The run loop polls once a second and asks each job whether it is due.
//! Daily jobs are keyed to wall-clock time in the configured timezone, so
//! all callers convert to local time before ticking; nothing here touches
//! the system clock or a UTC offset.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::time::Duration;

/// How long the run loop sleeps between due-job checks
pub const POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Parse a schedule time like "15:45"
pub fn parse_time(s: &str) -> anyhow::Result<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M")
        .map_err(|e| anyhow::anyhow!("invalid schedule time {:?}: {}", s, e))
}

/// A job that runs once per local calendar day at or after a wall-clock time
#[derive(Debug, Clone)]
pub struct DailyJob {
    name: &'static str,
    at: NaiveTime,
    last_run: Option<NaiveDate>,
}

impl DailyJob {
    /// Create a job as of `now`. A slot that already passed today is not
    /// run retroactively; the job first fires tomorrow.
    pub fn starting(name: &'static str, at: NaiveTime, now: NaiveDateTime) -> Self {
        let last_run = (now.time() >= at).then(|| now.date());
        Self { name, at, last_run }
    }

    /// Job name, for logging
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether the job should run at local time `now`
    pub fn due(&self, now: NaiveDateTime) -> bool {
        now.time() >= self.at && self.last_run != Some(now.date())
    }

    /// Record that the job ran on `day`
    pub fn mark_run(&mut self, day: NaiveDate) {
        self.last_run = Some(day);
    }
}
