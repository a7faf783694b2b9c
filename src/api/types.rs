use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Body returned by the latency endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LatencyResponse {
    /// Waited duration in nanoseconds
    pub waited: u64,
    pub waited_human: String,
}

impl LatencyResponse {
    pub fn new(waited: Duration) -> Self {
        Self {
            waited: u64::try_from(waited.as_nanos()).unwrap_or(u64::MAX),
            waited_human: humantime::format_duration(waited).to_string(),
        }
    }

    pub fn waited(&self) -> Duration {
        Duration::from_nanos(self.waited)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}
