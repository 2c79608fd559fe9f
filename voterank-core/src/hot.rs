/// Time-decayed "hot" score.
///
/// Log-scaled net votes plus a linear freshness term. Ten times the net votes
/// buys the same rank as being posted `HOT_DECAY_SECONDS` later. The freshness
/// term carries the sign of the net score, so a fresh downvoted item sinks
/// below a stale downvoted one.
use crate::constants::{HOT_DECAY_SECONDS, HOT_EPOCH, HOT_PRECISION};
use crate::types::VoteTally;

/// Compute the hot score for an item.
///
/// `created_at` is in seconds since the Unix epoch. The result is rounded to
/// `HOT_PRECISION` decimal digits so the same inputs give the same key in any
/// implementation that follows the formula.
pub fn hot_score(upvotes: i64, downvotes: i64, created_at: i64) -> f64 {
    let net = VoteTally::new(upvotes, downvotes).net();

    // log10(0) would be -inf; an even split counts as order 0.
    let order = (net.unsigned_abs().max(1) as f64).log10();
    let sign = net.signum() as f64;
    let seconds = created_at.saturating_sub(HOT_EPOCH) as f64;

    round_to_decimals(order + sign * seconds / HOT_DECAY_SECONDS, HOT_PRECISION)
}

/// Round half away from zero to `digits` decimal places.
fn round_to_decimals(value: f64, digits: i32) -> f64 {
    let scale = 10f64.powi(digits);
    (value * scale).round() / scale
}
