//! Configuration types for nav-gap

use crate::scan::Instrument;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

/// Root configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_instruments")]
    pub instruments: Vec<Instrument>,
    #[serde(default)]
    pub alert: AlertConfig,
    #[serde(default)]
    pub schedule: ScheduleConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            instruments: default_instruments(),
            alert: AlertConfig::default(),
            schedule: ScheduleConfig::default(),
            telemetry: TelemetryConfig::default(),
        }
    }
}

/// Alerting configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AlertConfig {
    /// Alert when |gap| strictly exceeds this many percent
    #[serde(default = "default_threshold_pct")]
    pub threshold_pct: Decimal,
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            threshold_pct: default_threshold_pct(),
        }
    }
}

/// Scheduling configuration
///
/// Daily job times are wall-clock times in `timezone`, not in the host
/// timezone or UTC.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleConfig {
    /// Seconds between scans
    #[serde(default = "default_scan_interval_secs")]
    pub scan_interval_secs: u64,

    /// IANA timezone name for the daily jobs (e.g., "Asia/Kolkata")
    #[serde(default = "default_timezone")]
    pub timezone: String,

    /// Send the morning briefing
    #[serde(default = "default_true")]
    pub briefing_enabled: bool,

    /// Briefing time, "HH:MM" in `timezone`
    #[serde(default = "default_briefing_time")]
    pub briefing_time: String,

    /// Send the end-of-day gap summary
    #[serde(default = "default_true")]
    pub summary_enabled: bool,

    /// Summary time, "HH:MM" in `timezone`
    #[serde(default = "default_summary_time")]
    pub summary_time: String,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            scan_interval_secs: default_scan_interval_secs(),
            timezone: default_timezone(),
            briefing_enabled: true,
            briefing_time: default_briefing_time(),
            summary_enabled: true,
            summary_time: default_summary_time(),
        }
    }
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_metrics_port")]
    pub metrics_port: u16,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            metrics_port: default_metrics_port(),
            log_level: default_log_level(),
        }
    }
}

/// The NSE BeES ETFs tracked out of the box, with their AMFI scheme codes
/// and NAV-to-unit conversion ratios.
fn default_instruments() -> Vec<Instrument> {
    vec![
        Instrument {
            name: "Nifty BeES".to_string(),
            symbol: "NIFTYBEES.NS".to_string(),
            scheme_code: "120716".to_string(),
            nav_ratio: dec!(1.60),
        },
        Instrument {
            name: "Bank BeES".to_string(),
            symbol: "BANKBEES.NS".to_string(),
            scheme_code: "120684".to_string(),
            nav_ratio: dec!(9.885),
        },
        Instrument {
            name: "Gold BeES".to_string(),
            symbol: "GOLDBEES.NS".to_string(),
            scheme_code: "120503".to_string(),
            nav_ratio: dec!(1.1658),
        },
        Instrument {
            name: "Nifty Next 50".to_string(),
            symbol: "JUNIORBEES.NS".to_string(),
            scheme_code: "120823".to_string(),
            nav_ratio: dec!(1.179),
        },
    ]
}

fn default_threshold_pct() -> Decimal {
    dec!(0.5)
}
fn default_scan_interval_secs() -> u64 {
    300
}
fn default_timezone() -> String {
    "Asia/Kolkata".to_string()
}
fn default_briefing_time() -> String {
    "08:45".to_string()
}
fn default_summary_time() -> String {
    "15:45".to_string()
}
fn default_true() -> bool {
    true
}
fn default_metrics_port() -> u16 {
    9090
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
