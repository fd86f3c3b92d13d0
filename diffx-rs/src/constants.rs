//! Tuning constants shared across the diff pipeline.
//!
//! The heuristic thresholds are independently derived from the concepts in
//! Neil Fraser's "Diff Strategies" writeup and imara-diff (Apache-2.0);
//! the core algorithm is from Myers 1986, "An O(ND) Difference Algorithm
//! and Its Variations".

/// Minimum length of a diagonal run (matching elements) that counts as
/// significant alignment progress. A run this long is likely a good anchor
/// point for splitting the search. Chosen empirically: long enough to be
/// meaningful, short enough to trigger on real-world text.
pub const SIGNIFICANT_MATCH_LEN: isize = 16;

/// Floor for the auto-calculated cost limit. The limit is
/// `max(MIN_COST_LIMIT, sqrt(n) * sqrt(m) / 4)` unless overridden.
pub const MIN_COST_LIMIT: usize = 256;

/// Maximum frequency for an element to be considered as a histogram
/// anchor. Elements appearing more often are ignored. Git uses 64.
pub const MAX_CHAIN_LENGTH: usize = 64;

/// Largest acceptable position imbalance (|posA/|A| - posB/|B||) for a
/// histogram anchor candidate. Candidates whose best match sits further
/// away than this are rejected.
pub const MAX_ANCHOR_IMBALANCE: f64 = 1.5;

/// Score bonus for keeping a blank line as a separator next to a change
/// region instead of inside it.
pub const BLANK_LINE_BONUS: i32 = 10;

/// Score bonus when a change region starts at the beginning of the
/// sequence.
pub const SEQUENCE_START_BONUS: i32 = 3;

/// Score bonus when a change region ends at the end of the sequence.
pub const SEQUENCE_END_BONUS: i32 = 3;

/// Score bonus for a boundary that lines up with punctuation.
pub const PUNCTUATION_BONUS: i32 = 2;
