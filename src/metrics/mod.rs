//! Metrics and observability module
//!
//! Request and outcome metrics go through the `metrics` facade. When the
//! Prometheus recorder is installed they are served on `/metrics`.
//!
//! Key metrics exposed:
//! - Requests per endpoint
//! - Rejected range expressions per endpoint and reason
//! - Waited durations and generated payload sizes

pub mod exporter;
pub mod recorder;

pub use exporter::{
    install_recorder, metrics_route, render_metrics, spawn_upkeep, MetricsConfig, MetricsError,
};
pub use recorder::{init_metrics, record_payload, record_rejected, record_request, record_wait};
