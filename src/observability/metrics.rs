//! Metrics collection and exposition.
//!
//! # Metrics
//! - `airdrop_requests_total` (counter): requests by network and outcome
//! - `airdrop_upstream_duration_seconds` (histogram): funding + confirmation latency
//!
//! Recording is a no-op until `init_metrics` installs the Prometheus recorder.

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

use crate::blockchain::Network;

/// Install the Prometheus recorder and its scrape endpoint.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

/// Count one finished airdrop request. `network` is absent when the request
/// was rejected before a network was resolved.
pub fn record_airdrop(network: Option<Network>, outcome: &'static str) {
    let network = network.map(|n| n.as_str()).unwrap_or("unknown");
    metrics::counter!("airdrop_requests_total", "network" => network, "outcome" => outcome)
        .increment(1);
}

/// Record how long the upstream calls took.
pub fn record_upstream_duration(network: Network, start: Instant) {
    metrics::histogram!("airdrop_upstream_duration_seconds", "network" => network.as_str())
        .record(start.elapsed().as_secs_f64());
}
