/// Reference instant for the hot score: 2005-12-08T07:46:43Z.
///
/// Only differences from this origin matter for ordering. Keeping the same
/// origin as other hot-ranked systems makes scores directly comparable.
pub const HOT_EPOCH: i64 = 1_134_028_003;

/// Seconds of age that weigh the same as one order of magnitude of net votes.
///
/// 45000s is 12.5 hours: an item has to collect ten times the net votes to
/// keep up with an otherwise identical item posted 12.5 hours later.
pub const HOT_DECAY_SECONDS: f64 = 45_000.0;

/// Decimal digits kept in a hot score.
pub const HOT_PRECISION: i32 = 7;

/// Default z for the Wilson lower bound: one-sided 80% confidence.
pub const DEFAULT_Z: f64 = 1.281_551_565_545;
