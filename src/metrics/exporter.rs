//! Prometheus metrics exporter
//!
//! Installs a global Prometheus recorder and exposes its output as an
//! axum route on the main server.

use crate::metrics::recorder::init_metrics;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::sync::OnceLock;
use std::time::Duration;

/// Global prometheus handle
static PROMETHEUS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Metrics configuration
#[derive(Debug, Clone)]
pub struct MetricsConfig {
    /// How often histograms are drained
    pub upkeep_interval: Duration,

    /// Buckets for the wait histogram, in seconds
    pub wait_buckets: Vec<f64>,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            upkeep_interval: Duration::from_secs(5),
            wait_buckets: vec![0.001, 0.01, 0.1, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0, 60.0],
        }
    }
}

/// Install the Prometheus recorder.
///
/// This function can only install once; subsequent calls return the existing handle.
pub fn install_recorder(config: &MetricsConfig) -> Result<&'static PrometheusHandle, MetricsError> {
    init_metrics();

    if let Some(handle) = PROMETHEUS_HANDLE.get() {
        return Ok(handle);
    }

    let handle = PrometheusBuilder::new()
        .set_buckets_for_metric(
            metrics_exporter_prometheus::Matcher::Full("delaybox_wait_seconds".to_string()),
            &config.wait_buckets,
        )
        .map_err(|e| MetricsError::SetupFailed(e.to_string()))?
        .install_recorder()
        .map_err(|e| MetricsError::SetupFailed(e.to_string()))?;

    Ok(PROMETHEUS_HANDLE.get_or_init(|| handle))
}

/// Periodically run recorder upkeep so histogram storage stays bounded.
pub fn spawn_upkeep(
    handle: &'static PrometheusHandle,
    interval: Duration,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        loop {
            ticker.tick().await;
            handle.run_upkeep();
        }
    })
}

/// Render metrics as a string
pub fn render_metrics() -> Option<String> {
    PROMETHEUS_HANDLE.get().map(|h| h.render())
}

/// Errors that can occur during metrics setup
#[derive(Debug, thiserror::Error)]
pub enum MetricsError {
    #[error("Failed to setup metrics: {0}")]
    SetupFailed(String),
}

/// Axum route serving the Prometheus text format.
///
/// Answers 503 until [`install_recorder`] has run.
pub fn metrics_route() -> axum::routing::MethodRouter {
    axum::routing::get(|| async {
        match render_metrics() {
            Some(metrics) => (
                [(header::CONTENT_TYPE, "text/plain; version=0.0.4; charset=utf-8")],
                metrics,
            )
                .into_response(),
            None => (StatusCode::SERVICE_UNAVAILABLE, "Metrics not initialized").into_response(),
        }
    })
}
