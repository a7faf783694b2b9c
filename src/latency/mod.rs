//! Latency ranges: parse a duration range expression and wait within it.

pub mod types;
pub mod waiter;

pub use types::DurationRange;
