//! Prometheus metrics

use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::{Ipv4Addr, SocketAddr};

/// Scans completed
pub const SCANS_TOTAL: &str = "navgap_scans_total";
/// Alerts dispatched to the notification channel
pub const ALERTS_SENT_TOTAL: &str = "navgap_alerts_sent_total";
/// Instruments skipped because a quote fetch failed
pub const FETCH_FAILURES_TOTAL: &str = "navgap_fetch_failures_total";
/// Daily summaries dispatched
pub const SUMMARIES_SENT_TOTAL: &str = "navgap_summaries_sent_total";
/// Wall-clock duration of one scan pass
pub const SCAN_DURATION_MS: &str = "navgap_scan_duration_ms";

/// Start the Prometheus exporter on the given port
pub fn init_metrics(port: u16) -> anyhow::Result<()> {
    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, port));
    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .map_err(|e| anyhow::anyhow!("Failed to start metrics exporter: {}", e))?;

    tracing::info!(%addr, "Prometheus metrics exporter listening");
    Ok(())
}
