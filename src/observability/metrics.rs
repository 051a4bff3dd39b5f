//! Dispatch metrics.
//!
//! # Metrics
//! - `storefront_dispatch_total` (counter): dispatches by outcome
//! - `storefront_request_duration_seconds` (histogram): latency

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Record one dispatched request.
pub fn record_dispatch(outcome: &'static str, start: Instant) {
    metrics::counter!("storefront_dispatch_total", "outcome" => outcome).increment(1);
    metrics::histogram!("storefront_request_duration_seconds")
        .record(start.elapsed().as_secs_f64());
}

/// Install the Prometheus exporter with its scrape listener.
///
/// Must run inside the Tokio runtime; the exporter serves scrapes from a
/// background task.
pub fn install_exporter(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()
}
