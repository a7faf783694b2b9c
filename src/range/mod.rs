//! Range expressions shared by the latency and size endpoints.
//!
//! A range expression is either a single bound (`"10kb"`), a pair
//! (`"1s-10s"`) or a bound followed by a dangling separator (`"10kb-"`).
//! This module only knows how to cut the expression into its bound
//! segments and how to check the ordering of already-parsed bounds; the
//! domain modules decide what a bound segment means.

pub mod error;
pub mod parser;

pub use error::{BoundKind, RangeError, Result};
pub use parser::{split_range, validate_bounds};
