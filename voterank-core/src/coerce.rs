//! Coercion of loosely-typed numeric input into vote counts and timestamps.
//!
//! Scoring never rejects input. Anything that is not a clean non-negative
//! integer is truncated toward zero and clamped, so callers holding counts as
//! floats (JSON, spreadsheets, other languages) get the same answer everywhere.
//!
//! Out-of-range values saturate at the target range. There is no 32-bit
//! wraparound: `3e9` upvotes means 3 billion upvotes, not a negative number.

/// Coerce a raw number into a non-negative vote count.
///
/// NaN and negatives become 0, fractions truncate toward zero, and anything
/// above `i64::MAX` saturates.
pub fn coerce_count(raw: f64) -> i64 {
    // `as` casts from float saturate and map NaN to 0.
    (raw.trunc() as i64).max(0)
}

/// Coerce a raw number into whole seconds since the Unix epoch.
///
/// NaN becomes 0, fractions truncate toward zero, infinities saturate.
pub fn coerce_timestamp(raw: f64) -> i64 {
    raw.trunc() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_truncates_toward_zero() {
        assert_eq!(coerce_count(3.9), 3);
        assert_eq!(coerce_count(0.999), 0);
        assert_eq!(coerce_count(42.0), 42);
    }

    #[test]
    fn test_count_clamps_negatives() {
        assert_eq!(coerce_count(-1.0), 0);
        assert_eq!(coerce_count(-0.5), 0);
        assert_eq!(coerce_count(f64::NEG_INFINITY), 0);
    }

    #[test]
    fn test_count_nan_is_zero() {
        assert_eq!(coerce_count(f64::NAN), 0);
        assert_eq!(coerce_timestamp(f64::NAN), 0);
    }

    #[test]
    fn test_large_values_saturate_instead_of_wrapping() {
        // Past the 32-bit range a bitwise truncation would wrap negative.
        assert_eq!(coerce_count(3_000_000_000.0), 3_000_000_000);
        assert_eq!(coerce_count(1e30), i64::MAX);
        assert_eq!(coerce_timestamp(1e30), i64::MAX);
        assert_eq!(coerce_timestamp(-1e30), i64::MIN);
    }

    #[test]
    fn test_timestamp_truncates_toward_zero() {
        assert_eq!(coerce_timestamp(1_134_028_003.75), 1_134_028_003);
        assert_eq!(coerce_timestamp(-10.5), -10);
    }
}
