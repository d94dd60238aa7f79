//! Prometheus metrics export.

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::sync::OnceLock;

static RECORDER: OnceLock<PrometheusHandle> = OnceLock::new();

/// Install the global Prometheus recorder. Must run once at startup, before
/// any counter is touched; a second call panics.
pub fn init_metrics() {
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .expect("failed to install Prometheus recorder");

    if RECORDER.set(handle).is_err() {
        panic!("metrics recorder already initialized");
    }
}

/// Render the current metrics in Prometheus text exposition format, for the
/// /metrics endpoint.
pub fn get_metrics() -> String {
    RECORDER
        .get()
        .map(PrometheusHandle::render)
        .unwrap_or_else(|| "# metrics recorder not initialized".to_string())
}
