//! Metrics collection and exposition.
//!
//! # Metrics
//! - `vault_tx_submissions_total` (counter): contract calls by function, status
//! - `vault_wallet_request_duration_seconds` (histogram): wallet round trip
//! - `vault_pending_calls` (gauge): calls currently awaiting the wallet
//! - `vault_wallet_sessions_total` (counter): connect/disconnect/restore events
//!
//! Recording is a no-op until [`init_metrics`] installs the exporter.

use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;

/// Install the Prometheus exporter with an HTTP scrape listener on `addr`.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

pub fn record_submission(function: &str, status: &'static str) {
    metrics::counter!(
        "vault_tx_submissions_total",
        "function" => function.to_string(),
        "status" => status
    )
    .increment(1);
}

pub fn record_wallet_latency(function: &str, secs: f64) {
    metrics::histogram!(
        "vault_wallet_request_duration_seconds",
        "function" => function.to_string()
    )
    .record(secs);
}

pub fn set_pending_calls(count: usize) {
    metrics::gauge!("vault_pending_calls").set(count as f64);
}

pub fn record_session_event(event: &'static str) {
    metrics::counter!("vault_wallet_sessions_total", "event" => event).increment(1);
}
