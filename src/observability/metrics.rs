//! Metrics collection and exposition.
//!
//! # Metrics
//! - `relay_requests_total` (counter): local requests by route, method, status
//! - `relay_request_duration_seconds` (histogram): local latency by route
//! - `upstream_calls_total` (counter): upstream calls by method, status

use std::net::SocketAddr;
use std::time::Instant;

use axum::http::Method;
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter on its own listener.
///
/// Failures are logged, never fatal; the relay serves without metrics.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

/// Record one local relay request.
pub fn record_relay_request(route: &'static str, method: &Method, status: u16, start: Instant) {
    metrics::counter!(
        "relay_requests_total",
        "route" => route,
        "method" => method.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    metrics::histogram!("relay_request_duration_seconds", "route" => route)
        .record(start.elapsed().as_secs_f64());
}

/// Record one upstream call outcome.
pub fn record_upstream_call(method: &Method, status: u16) {
    metrics::counter!(
        "upstream_calls_total",
        "method" => method.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
}
