use crate::types::VoteTally;

/// Net score: upvotes minus downvotes, after clamping both to non-negative.
pub fn net_score(upvotes: i64, downvotes: i64) -> i64 {
    VoteTally::new(upvotes, downvotes).net()
}
