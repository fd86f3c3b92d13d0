//! diffx - Readable sequence diffs
//!
//! This library computes edit scripts between two sequences of comparable
//! elements (lines, words, tokens) optimized for human readability rather
//! than pure mathematical minimality.
//!
//! # Overview
//!
//! Plain Myers implementations produce the shortest edit script, but on
//! real text the shortest script often matches high-frequency tokens
//! ("the", punctuation, common keywords) across unrelated contexts and
//! fragments the output. diffx layers three countermeasures on top of the
//! Myers O(ND) core:
//!
//! - Preprocessing: filters out high-frequency elements that cause
//!   spurious matches, then expands the result back onto the original
//!   coordinates
//! - Heuristics: early termination for expensive comparisons, anchored on
//!   significant diagonal runs
//! - Postprocessing: shifts change boundaries toward blank lines,
//!   punctuation, and sequence edges
//!
//! A second top-level driver, [`diff_histogram`], decomposes the input
//! around the rarest positionally balanced shared element instead, in the
//! style of Git's histogram diff, falling back to Myers where no good
//! anchor exists.
//!
//! # Example
//!
//! ```
//! use diffx::{diff, DiffOptions, OpType};
//!
//! let a = ["The", "quick", "brown", "fox", "jumps"];
//! let b = ["A", "slow", "red", "fox", "leaps"];
//! let ops = diff(&a, &b, DiffOptions::default());
//!
//! let fox_kept = ops.iter().any(|op| {
//!     op.kind == OpType::Equal && (op.a_start..op.a_end).any(|i| a[i] == "fox")
//! });
//! assert!(fox_kept);
//! ```

pub mod constants;
pub mod diff;
pub mod element;
pub mod histogram;
pub mod op;
pub mod options;

mod filter;
mod myers;
mod shift;

// Re-export commonly used items
pub use diff::{diff, diff_elements};
pub use element::{to_elements, Element, StringElement};
pub use histogram::{diff_elements_histogram, diff_histogram};
pub use op::{merge_adjacent_ops, DiffOp, OpType};
pub use options::DiffOptions;
