use crate::range::{split_range, validate_bounds, BoundKind, RangeError, Result};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// A latency window parsed from expressions like `"1s"`, `"1s-10s"` or `"250ms-"`.
///
/// A zero `upper` means the bound is unset and the range is the exact
/// value `lower`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DurationRange {
    pub lower: Duration,
    pub upper: Duration,
}

impl DurationRange {
    /// Build a validated range.
    pub fn new(lower: Duration, upper: Duration) -> Result<Self> {
        let range = Self { lower, upper };
        range.validate()?;
        Ok(range)
    }

    /// A range that always yields `value`.
    pub fn exact(value: Duration) -> Self {
        Self {
            lower: value,
            upper: Duration::ZERO,
        }
    }

    /// Parse an expression without checking bound ordering.
    ///
    /// Each bound goes through `humantime`, so any unit it understands
    /// (`ns`, `us`, `ms`, `s`, `m`, `h`, ...) and compound forms such as
    /// `1m30s` are accepted. Use [`DurationRange::validate`] or the
    /// `FromStr` impl to also enforce ordering.
    pub fn parse(input: &str) -> Result<Self> {
        let (lower, upper) = split_range(input)?;

        let lower = parse_bound(lower, BoundKind::Lower)?;
        let upper = match upper {
            Some(segment) => parse_bound(segment, BoundKind::Upper)?,
            None => Duration::ZERO,
        };

        Ok(Self { lower, upper })
    }

    pub fn validate(&self) -> Result<()> {
        validate_bounds(&self.lower, &self.upper)
    }

    pub fn has_upper(&self) -> bool {
        !self.upper.is_zero()
    }
}

fn parse_bound(segment: &str, stage: BoundKind) -> Result<Duration> {
    humantime::parse_duration(segment.trim()).map_err(|e| RangeError::parse(stage, e))
}

impl FromStr for DurationRange {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self> {
        let range = Self::parse(s)?;
        range.validate()?;
        Ok(range)
    }
}

impl fmt::Display for DurationRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", humantime::format_duration(self.lower))?;
        if self.has_upper() {
            write!(f, "-{}", humantime::format_duration(self.upper))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(n: u64) -> Duration {
        Duration::from_secs(n)
    }

    #[test]
    fn test_parse_single_bound() {
        let range = DurationRange::parse("1s").unwrap();
        assert_eq!(range, DurationRange::exact(secs(1)));
        assert!(!range.has_upper());
    }

    #[test]
    fn test_parse_two_bounds() {
        let range = DurationRange::parse("1s-10s").unwrap();
        assert_eq!(range.lower, secs(1));
        assert_eq!(range.upper, secs(10));
    }

    #[test]
    fn test_parse_sub_second_and_mixed_units() {
        let range = DurationRange::parse("250ms-2m").unwrap();
        assert_eq!(range.lower, Duration::from_millis(250));
        assert_eq!(range.upper, secs(120));

        let range = DurationRange::parse("500us").unwrap();
        assert_eq!(range.lower, Duration::from_micros(500));
    }

    #[test]
    fn test_parse_trailing_separator() {
        let range = DurationRange::parse("5s-").unwrap();
        assert_eq!(range, DurationRange::exact(secs(5)));
    }

    #[test]
    fn test_parse_invalid_fails_on_lower() {
        match DurationRange::parse("invalid") {
            Err(RangeError::Parse { stage, .. }) => assert_eq!(stage, BoundKind::Lower),
            other => panic!("expected lower parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_invalid_upper() {
        let err = DurationRange::parse("1s-soon").unwrap_err();
        assert!(matches!(
            err,
            RangeError::Parse {
                stage: BoundKind::Upper,
                ..
            }
        ));
        assert!(err.to_string().starts_with("failed parsing upper bound"));
    }

    #[test]
    fn test_parse_rejects_empty_and_unitless() {
        assert!(DurationRange::parse("").is_err());
        assert!(DurationRange::parse("10").is_err());
        assert!(DurationRange::parse("-1s").is_err());
    }

    #[test]
    fn test_from_str_validates_ordering() {
        assert_eq!(
            "10s-1s".parse::<DurationRange>(),
            Err(RangeError::InvertedBound)
        );
        // Unchecked parse still succeeds
        assert!(DurationRange::parse("10s-1s").is_ok());
        assert!("1s-1s".parse::<DurationRange>().is_ok());
    }

    #[test]
    fn test_new_validates() {
        assert!(DurationRange::new(secs(1), secs(2)).is_ok());
        assert!(DurationRange::new(secs(5), Duration::ZERO).is_ok());
        assert_eq!(
            DurationRange::new(secs(2), secs(1)),
            Err(RangeError::InvertedBound)
        );
    }

    #[test]
    fn test_display_round_trips() {
        for input in ["1s", "1s-10s", "250ms-1s 500ms", "2h", "0s-3m"] {
            let range: DurationRange = input.parse().unwrap();
            let reparsed: DurationRange = range.to_string().parse().unwrap();
            assert_eq!(range, reparsed, "round trip of {input}");
        }
        assert_eq!(DurationRange::exact(secs(1)).to_string(), "1s");
        assert_eq!(
            DurationRange::new(secs(1), secs(10)).unwrap().to_string(),
            "1s-10s"
        );
    }
}
