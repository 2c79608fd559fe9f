/// "Best" score: lower bound of the Wilson score interval on the upvote ratio.
///
/// Treats each vote as a Bernoulli trial (upvote = success) and asks how low the
/// true upvote ratio could plausibly be. Few votes give a wide interval and a
/// low bound, so 1 up / 0 down does not outrank 900 up / 100 down.
use crate::constants::DEFAULT_Z;
use crate::types::VoteTally;

/// Wilson lower bound at the default one-sided 80% confidence (`DEFAULT_Z`).
pub fn best_score(upvotes: i64, downvotes: i64) -> f64 {
    best_score_with_z(upvotes, downvotes, DEFAULT_Z)
}

/// Wilson lower bound for a caller-chosen z (e.g. 1.96 for ~95%).
///
/// Returns exactly 0.0 when no votes have been cast. `z` is expected to be
/// positive; the result is clamped to [0, 1] regardless.
pub fn best_score_with_z(upvotes: i64, downvotes: i64, z: f64) -> f64 {
    let tally = VoteTally::new(upvotes, downvotes);
    if tally.total() == 0 {
        return 0.0;
    }

    let n = tally.total() as f64;
    let p = tally.upvotes() as f64 / n;
    let z2 = z * z;

    let center = p + z2 / (2.0 * n);
    let margin = z * ((p * (1.0 - p) + z2 / (4.0 * n)) / n).sqrt();
    let denominator = 1.0 + z2 / n;

    // Rounding can leave the u = 0 case a hair below zero.
    ((center - margin) / denominator).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPS: f64 = 1e-9;

    fn assert_approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < EPS,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_no_votes_is_zero() {
        assert_eq!(best_score(0, 0), 0.0);
        assert_eq!(best_score_with_z(0, 0, 1.96), 0.0);
        assert_eq!(best_score_with_z(0, 0, 0.0), 0.0);
    }

    #[test]
    fn test_known_values_at_95_percent() {
        assert_approx(best_score_with_z(10, 0, 1.96), 0.7224598312333834);
        assert_approx(best_score_with_z(80, 20, 1.96), 0.7111690380734976);
        assert_approx(best_score_with_z(1, 1, 1.96), 0.09452865480086611);
    }

    #[test]
    fn test_all_upvotes_closed_form() {
        // With p = 1 the bound reduces to n / (n + z^2).
        let z2 = DEFAULT_Z * DEFAULT_Z;
        assert_approx(best_score(5, 0), 5.0 / (5.0 + z2));
    }

    #[test]
    fn test_all_downvotes_is_zero() {
        assert_approx(best_score(0, 25), 0.0);
    }

    #[test]
    fn test_more_evidence_beats_lucky_streak() {
        assert!(best_score(900, 100) > best_score(1, 0));
    }

    #[test]
    fn test_higher_confidence_is_more_conservative() {
        assert!(best_score_with_z(10, 2, 1.96) < best_score(10, 2));
    }

    #[test]
    fn test_negative_inputs_are_clamped() {
        assert_eq!(best_score(-4, -4), 0.0);
        assert_eq!(best_score(7, -3), best_score(7, 0));
    }

    #[test]
    fn test_repeat_calls_are_bit_identical() {
        let a = best_score(320, 40);
        let b = best_score(320, 40);
        assert_eq!(a.to_bits(), b.to_bits());
    }

    proptest! {
        #[test]
        fn prop_bound_within_unit_interval(
            up in 0i64..1_000_000,
            down in 0i64..1_000_000,
            z in 0.01f64..5.0,
        ) {
            prop_assume!(up + down > 0);
            let score = best_score_with_z(up, down, z);
            prop_assert!((0.0..=1.0).contains(&score), "score {} out of range", score);
        }

        #[test]
        fn prop_more_upvotes_never_lowers_bound(
            up in 0i64..10_000,
            down in 0i64..10_000,
        ) {
            prop_assert!(best_score(up + 1, down) >= best_score(up, down));
        }
    }
}
