use crate::coerce::{coerce_count, coerce_timestamp};

/// Upvote and downvote counts, both guaranteed non-negative.
///
/// Every scoring function funnels its inputs through this type, so the
/// clamping rule lives in exactly one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VoteTally {
    upvotes: i64,
    downvotes: i64,
}

impl VoteTally {
    /// Negative counts are clamped to zero.
    pub fn new(upvotes: i64, downvotes: i64) -> Self {
        VoteTally {
            upvotes: upvotes.max(0),
            downvotes: downvotes.max(0),
        }
    }

    /// Build a tally from loosely-typed counts (see [`coerce_count`]).
    pub fn from_raw(upvotes: f64, downvotes: f64) -> Self {
        VoteTally {
            upvotes: coerce_count(upvotes),
            downvotes: coerce_count(downvotes),
        }
    }

    pub fn upvotes(&self) -> i64 {
        self.upvotes
    }

    pub fn downvotes(&self) -> i64 {
        self.downvotes
    }

    /// Upvotes minus downvotes. Cannot overflow since both sides are non-negative.
    pub fn net(&self) -> i64 {
        self.upvotes - self.downvotes
    }

    /// Total votes cast, saturating at `i64::MAX`.
    pub fn total(&self) -> i64 {
        self.upvotes.saturating_add(self.downvotes)
    }
}

/// A voted content item: the input to [`rank_item`](crate::rank_item).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VoteItem {
    pub upvotes: i64,
    pub downvotes: i64,
    /// Creation time, seconds since the Unix epoch (UTC).
    pub created_at: i64,
}

impl VoteItem {
    /// Build an item from loosely-typed numbers, e.g. values parsed from JSON.
    pub fn from_raw(upvotes: f64, downvotes: f64, created_at: f64) -> Self {
        let tally = VoteTally::from_raw(upvotes, downvotes);
        VoteItem {
            upvotes: tally.upvotes(),
            downvotes: tally.downvotes(),
            created_at: coerce_timestamp(created_at),
        }
    }

    /// Vote counts with negatives clamped, since the public fields can hold anything.
    pub fn tally(&self) -> VoteTally {
        VoteTally::new(self.upvotes, self.downvotes)
    }
}

/// All three ranking keys for one item. Sort descending on whichever key fits the view.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankResult {
    /// Net votes (upvotes - downvotes).
    pub score: i64,
    /// Time-decayed popularity.
    pub hot: f64,
    /// Wilson lower bound on the upvote ratio, in [0, 1].
    pub best: f64,
}
