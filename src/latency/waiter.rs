//! Latency generation
//!
//! The random source is passed in by the caller, so tests can seed it and
//! the server can draw a fresh generator per request.

use super::types::DurationRange;
use rand::Rng;
use std::time::Duration;
use tokio::time::sleep;

impl DurationRange {
    /// Pick the delay to apply.
    ///
    /// Without an upper bound this is exactly `lower`. Otherwise it is drawn
    /// uniformly from `[lower, upper)`; `upper` itself is never returned.
    /// When the window is empty (`lower == upper`) the result is `lower`.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        if self.upper <= self.lower {
            return self.lower;
        }

        rng.gen_range(self.lower..self.upper)
    }

    /// Sleep for a sampled delay and return how long was waited.
    ///
    /// Only the calling task is parked; other requests keep running.
    pub async fn wait<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        let delay = self.sample(rng);
        tracing::debug!(range = %self, delay = ?delay, "waiting");
        sleep(delay).await;
        delay
    }
}
