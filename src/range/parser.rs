//! Splitting range expressions and validating their bounds

use super::error::{BoundKind, RangeError, Result};

const SEPARATOR: char = '-';

/// Split a range expression into its lower segment and optional upper segment.
///
/// The lower segment may carry a leading `-` sign, so the separator is the
/// first `-` after the first character. A separator with nothing after it
/// (`"10kb-"`) leaves the upper bound unset.
pub fn split_range(input: &str) -> Result<(&str, Option<&str>)> {
    let input = input.trim();
    if input.is_empty() {
        return Err(RangeError::parse(
            BoundKind::Lower,
            "range expression cannot be empty",
        ));
    }

    // Skip the first char so a sign on the lower bound is not read as the separator
    let sign_len = input.chars().next().map_or(0, char::len_utf8);
    let split_at = input[sign_len..]
        .find(SEPARATOR)
        .map(|idx| idx + sign_len);

    match split_at {
        None => Ok((input, None)),
        Some(idx) => {
            let lower = &input[..idx];
            let upper = &input[idx + SEPARATOR.len_utf8()..];
            if upper.is_empty() {
                Ok((lower, None))
            } else {
                Ok((lower, Some(upper)))
            }
        }
    }
}

/// Check bound ordering for an already-parsed range.
///
/// `T::default()` is the zero value. A zero upper bound means "unset" and
/// never triggers the inversion check.
pub fn validate_bounds<T>(lower: &T, upper: &T) -> Result<()>
where
    T: PartialOrd + Default,
{
    let zero = T::default();

    if *lower < zero {
        return Err(RangeError::NegativeBound(BoundKind::Lower));
    }

    if *upper < zero {
        return Err(RangeError::NegativeBound(BoundKind::Upper));
    }

    if *upper > zero && *lower > *upper {
        return Err(RangeError::InvertedBound);
    }

    Ok(())
}
