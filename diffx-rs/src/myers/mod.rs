//! Divide-and-conquer Myers core.
//!
//! This module holds the per-call scratch state, the bidirectional
//! middle-snake search with its heuristics, and the recursion that turns
//! change marks into edit operations.

mod compare;
mod context;
mod snake;

pub(crate) use context::DiffContext;
