//! delaybox: an HTTP test double with controllable latency and payload size.
//!
//! Clients ask for a latency window (`/latency/1s-10s`) or a payload size
//! window (`/data/10kb-1mb`); the server waits or generates data inside the
//! window and replies.

pub mod api;
pub mod config;
pub mod latency;
pub mod metrics;
pub mod range;
pub mod size;

pub use config::ServerConfig;
pub use latency::DurationRange;
pub use range::{BoundKind, RangeError};
pub use size::{ByteUnit, SizeRange};
