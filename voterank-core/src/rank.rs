use crate::best::best_score_with_z;
use crate::constants::DEFAULT_Z;
use crate::hot::hot_score;
use crate::score::net_score;
use crate::types::{RankResult, VoteItem};

/// Compute every ranking key for an item, using the default Wilson z.
pub fn rank_item(item: &VoteItem) -> RankResult {
    rank_item_with_z(item, DEFAULT_Z)
}

/// Same as [`rank_item`] with a caller-chosen z for the best score.
pub fn rank_item_with_z(item: &VoteItem, z: f64) -> RankResult {
    let tally = item.tally();
    let (upvotes, downvotes) = (tally.upvotes(), tally.downvotes());

    RankResult {
        score: net_score(upvotes, downvotes),
        hot: hot_score(upvotes, downvotes, item.created_at),
        best: best_score_with_z(upvotes, downvotes, z),
    }
}
