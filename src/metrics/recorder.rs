//! Metrics recorder for latency and payload requests

use metrics::{counter, describe_counter, describe_histogram, histogram};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

static METRICS_INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Initialize metric descriptions (call once at startup)
pub fn init_metrics() {
    if METRICS_INITIALIZED.swap(true, Ordering::SeqCst) {
        return;
    }

    describe_counter!(
        "delaybox_requests_total",
        "Total number of range requests received per endpoint"
    );
    describe_counter!(
        "delaybox_rejected_total",
        "Total number of requests rejected for an invalid range expression"
    );
    describe_histogram!(
        "delaybox_wait_seconds",
        "Latency applied to latency requests"
    );
    describe_histogram!(
        "delaybox_payload_bytes",
        "Size of payloads returned by data requests"
    );
}

/// Record a request hitting a range endpoint
pub fn record_request(endpoint: &'static str) {
    counter!("delaybox_requests_total", "endpoint" => endpoint).increment(1);
}

/// Record a rejected range expression
pub fn record_rejected(endpoint: &'static str, reason: &'static str) {
    counter!("delaybox_rejected_total", "endpoint" => endpoint, "reason" => reason).increment(1);
}

/// Record the delay applied to a latency request
pub fn record_wait(waited: Duration) {
    histogram!("delaybox_wait_seconds").record(waited.as_secs_f64());
}

/// Record the size of a generated payload
pub fn record_payload(bytes: u64) {
    histogram!("delaybox_payload_bytes").record(bytes as f64);
}
