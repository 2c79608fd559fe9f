//! voterank-core: ranking keys for voted content.
//!
//! Three pure functions over (upvotes, downvotes, created_at):
//! - `net_score`: upvotes minus downvotes.
//! - `hot_score`: log-scaled net votes plus a freshness term, for "trending" views.
//! - `best_score`: Wilson lower bound on the upvote ratio, for "top quality" views.
//!
//! No IO, no state, no failure modes. Out-of-range input is clamped rather than
//! rejected: negative vote counts count as zero. Sort descending on whichever key you need.
//!
//! # Quick start
//!
//! ```rust
//! use voterank_core::{rank_item, VoteItem};
//!
//! let item = VoteItem { upvotes: 320, downvotes: 40, created_at: 1_700_000_000 };
//! let ranks = rank_item(&item);
//!
//! assert_eq!(ranks.score, 280);
//! assert!(ranks.best > 0.85 && ranks.best < 0.9);
//! println!("score {} hot {:.7} best {:.4}", ranks.score, ranks.hot, ranks.best);
//! ```

pub mod best;
pub mod coerce;
pub mod constants;
pub mod hot;
pub mod rank;
pub mod score;
pub mod types;

// Re-export primary public API at crate root.
pub use best::{best_score, best_score_with_z};
pub use coerce::{coerce_count, coerce_timestamp};
pub use constants::{DEFAULT_Z, HOT_DECAY_SECONDS, HOT_EPOCH};
pub use hot::hot_score;
pub use rank::{rank_item, rank_item_with_z};
pub use score::net_score;
pub use types::{RankResult, VoteItem, VoteTally};
