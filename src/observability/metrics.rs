//! Metrics collection and exposition.
//!
//! # Metrics
//! - `trailing_slash_requests_total` (counter): requests seen, by `outcome`
//!   (`redirect` or `passthrough`)
//! - `trailing_slash_redirects_total` (counter): redirects issued, by `status`
//!
//! Without an installed recorder every call is a no-op.

use std::net::SocketAddr;

use metrics::counter;
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Start the Prometheus scrape endpoint. Must run inside a tokio runtime.
///
/// Fails if the recorder is already installed or the listener cannot bind.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

pub fn record_redirect(status: u16) {
    counter!("trailing_slash_requests_total", "outcome" => "redirect").increment(1);
    counter!("trailing_slash_redirects_total", "status" => status.to_string()).increment(1);
}

pub fn record_passthrough() {
    counter!("trailing_slash_requests_total", "outcome" => "passthrough").increment(1);
}
