use crate::range::{split_range, validate_bounds, BoundKind, RangeError, Result};
use std::fmt;
use std::str::FromStr;

/// Multiplier selected by the unit suffix of a size bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ByteUnit {
    Byte,
    Kilobyte,
    Megabyte,
    Gigabyte,
}

impl ByteUnit {
    /// Largest first, as used when picking a canonical unit for display.
    const DESCENDING: [ByteUnit; 4] = [
        ByteUnit::Gigabyte,
        ByteUnit::Megabyte,
        ByteUnit::Kilobyte,
        ByteUnit::Byte,
    ];

    /// Match a unit suffix case-insensitively.
    ///
    /// Unknown or empty suffixes fall back to [`ByteUnit::Byte`] instead of
    /// failing, so `"10"` and `"10xyz"` both mean ten bytes.
    pub fn parse(token: &str) -> Self {
        match token.to_ascii_lowercase().as_str() {
            "kb" => ByteUnit::Kilobyte,
            "mb" => ByteUnit::Megabyte,
            "gb" => ByteUnit::Gigabyte,
            _ => ByteUnit::Byte,
        }
    }

    pub fn multiplier(&self) -> i64 {
        match self {
            ByteUnit::Byte => 1,
            ByteUnit::Kilobyte => 1024,
            ByteUnit::Megabyte => 1024 * 1024,
            ByteUnit::Gigabyte => 1024 * 1024 * 1024,
        }
    }

    pub fn suffix(&self) -> &'static str {
        match self {
            ByteUnit::Byte => "b",
            ByteUnit::Kilobyte => "kb",
            ByteUnit::Megabyte => "mb",
            ByteUnit::Gigabyte => "gb",
        }
    }
}

impl fmt::Display for ByteUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// A payload size window in bytes, parsed from expressions like `"10kb"`,
/// `"10kb-20kb"` or `"1mb-"`.
///
/// A zero `upper` means the bound is unset and the payload is exactly
/// `lower` bytes long.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SizeRange {
    pub lower: i64,
    pub upper: i64,
}

impl SizeRange {
    /// Build a validated range.
    pub fn new(lower: i64, upper: i64) -> Result<Self> {
        let range = Self { lower, upper };
        range.validate()?;
        Ok(range)
    }

    pub fn exact(bytes: i64) -> Self {
        Self {
            lower: bytes,
            upper: 0,
        }
    }

    /// Parse an expression without checking bound ordering or sign.
    pub fn parse(input: &str) -> Result<Self> {
        let (lower, upper) = split_range(input)?;

        let lower = parse_bound(lower, BoundKind::Lower)?;
        let upper = match upper {
            Some(segment) => parse_bound(segment, BoundKind::Upper)?,
            None => 0,
        };

        Ok(Self { lower, upper })
    }

    pub fn validate(&self) -> Result<()> {
        validate_bounds(&self.lower, &self.upper)
    }

    pub fn has_upper(&self) -> bool {
        self.upper != 0
    }
}

/// `[-]digits[letters]` scaled by the unit the letters name.
fn parse_bound(segment: &str, stage: BoundKind) -> Result<i64> {
    let digits_start = usize::from(segment.starts_with('-'));
    let digits_end = segment[digits_start..]
        .find(|c: char| !c.is_ascii_digit())
        .map_or(segment.len(), |idx| idx + digits_start);

    if digits_end == digits_start {
        return Err(RangeError::parse(
            stage,
            format!("expected an integer followed by a unit, got {segment:?}"),
        ));
    }

    let (number, unit) = segment.split_at(digits_end);
    if !unit.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(RangeError::parse(
            stage,
            format!("invalid unit {unit:?} in {segment:?}"),
        ));
    }

    let value: i64 = number.parse().map_err(|e| RangeError::parse(stage, e))?;
    value
        .checked_mul(ByteUnit::parse(unit).multiplier())
        .ok_or_else(|| RangeError::parse(stage, format!("{segment:?} overflows a 64-bit byte count")))
}

fn fmt_bytes(f: &mut fmt::Formatter<'_>, bytes: i64) -> fmt::Result {
    let unit = ByteUnit::DESCENDING
        .into_iter()
        .find(|unit| bytes != 0 && bytes % unit.multiplier() == 0)
        .unwrap_or(ByteUnit::Byte);

    write!(f, "{}{}", bytes / unit.multiplier(), unit)
}

impl FromStr for SizeRange {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self> {
        let range = Self::parse(s)?;
        range.validate()?;
        Ok(range)
    }
}

impl fmt::Display for SizeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_bytes(f, self.lower)?;
        if self.has_upper() {
            f.write_str("-")?;
            fmt_bytes(f, self.upper)?;
        }
        Ok(())
    }
}
