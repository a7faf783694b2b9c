use std::fmt;
use thiserror::Error;

/// Which end of a range an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundKind {
    Lower,
    Upper,
}

impl BoundKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BoundKind::Lower => "lower",
            BoundKind::Upper => "upper",
        }
    }
}

impl fmt::Display for BoundKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    #[error("failed parsing {stage} bound: {cause}")]
    Parse { stage: BoundKind, cause: String },

    #[error("{0} bound is negative: bounds cannot be negative")]
    NegativeBound(BoundKind),

    #[error("upper bound cannot be less than lower bound")]
    InvertedBound,
}

impl RangeError {
    pub(crate) fn parse(stage: BoundKind, cause: impl fmt::Display) -> Self {
        RangeError::Parse {
            stage,
            cause: cause.to_string(),
        }
    }

    /// Short machine-readable reason, used for metric labels and error codes.
    pub fn reason(&self) -> &'static str {
        match self {
            RangeError::Parse { .. } => "parse",
            RangeError::NegativeBound(_) => "negative_bound",
            RangeError::InvertedBound => "inverted_bound",
        }
    }
}

pub type Result<T> = std::result::Result<T, RangeError>;
