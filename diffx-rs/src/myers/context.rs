//! Per-call algorithm state.

use crate::constants::MIN_COST_LIMIT;
use crate::element::Element;
use crate::options::DiffOptions;

/// The result of the middle-snake search: the midpoint where the edit
/// path can be split, and whether each half still needs a minimal search.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Partition {
    pub xmid: usize,
    pub ymid: usize,
    pub lo_minimal: bool,
    pub hi_minimal: bool,
}

/// Algorithm state owned by one diff call.
///
/// The diagonal arrays are allocated once here and reused by every
/// middle-snake search in the recursion; they are sized `n + m + 3` so
/// that the parity-adjusted diagonal range plus its one-slot lookahead
/// always stays in bounds.
pub(crate) struct DiffContext<'a, E> {
    pub(crate) xvec: &'a [E],
    pub(crate) yvec: &'a [E],
    /// Farthest-reaching x per diagonal, forward search.
    pub(crate) fdiag: Vec<isize>,
    /// Farthest-reaching x per diagonal, backward search.
    pub(crate) bdiag: Vec<isize>,
    /// Marks changed (deleted) elements in xvec.
    pub(crate) xchanges: Vec<bool>,
    /// Marks changed (inserted) elements in yvec.
    pub(crate) ychanges: Vec<bool>,
    pub(crate) use_heuristic: bool,
    pub(crate) cost_limit: usize,
}

impl<'a, E: Element> DiffContext<'a, E> {
    /// Creates a new context for comparing two sequences.
    pub(crate) fn new(a: &'a [E], b: &'a [E], opts: &DiffOptions) -> Self {
        let n = a.len();
        let m = b.len();
        let diag_size = n + m + 3;

        let mut cost_limit = opts.cost_limit;
        if cost_limit == 0 && opts.use_heuristic {
            // sqrt(n) * sqrt(m) / 4, but at least MIN_COST_LIMIT
            cost_limit = ((n as f64).sqrt() * (m as f64).sqrt() / 4.0) as usize;
            if cost_limit < MIN_COST_LIMIT {
                cost_limit = MIN_COST_LIMIT;
            }
        }

        DiffContext {
            xvec: a,
            yvec: b,
            fdiag: vec![0; diag_size],
            bdiag: vec![0; diag_size],
            xchanges: vec![false; n],
            ychanges: vec![false; m],
            use_heuristic: opts.use_heuristic,
            cost_limit,
        }
    }

    /// Reports whether `xvec[i]` equals `yvec[j]`.
    pub(crate) fn equal(&self, i: usize, j: usize) -> bool {
        self.xvec[i].equal(&self.yvec[j])
    }

    /// Marks elements in `xvec[xoff..xlim]` as deleted.
    pub(crate) fn mark_deleted(&mut self, xoff: usize, xlim: usize) {
        for flag in &mut self.xchanges[xoff..xlim] {
            *flag = true;
        }
    }

    /// Marks elements in `yvec[yoff..ylim]` as inserted.
    pub(crate) fn mark_inserted(&mut self, yoff: usize, ylim: usize) {
        for flag in &mut self.ychanges[yoff..ylim] {
            *flag = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::to_elements;

    #[test]
    fn test_cost_limit_auto_calculated() {
        let a = to_elements(&["a"; 4]);
        let b = to_elements(&["b"; 4]);
        let ctx = DiffContext::new(&a, &b, &DiffOptions::default());

        // Small inputs land on the floor
        assert_eq!(ctx.cost_limit, MIN_COST_LIMIT);
    }

    #[test]
    fn test_cost_limit_override() {
        let a = to_elements(&["a"]);
        let b = to_elements(&["b"]);
        let opts = DiffOptions::new().cost_limit(10);
        let ctx = DiffContext::new(&a, &b, &opts);

        assert_eq!(ctx.cost_limit, 10);
    }

    #[test]
    fn test_cost_limit_zero_without_heuristics() {
        let a = to_elements(&["a"]);
        let b = to_elements(&["b"]);
        let opts = DiffOptions::new().heuristic(false);
        let ctx = DiffContext::new(&a, &b, &opts);

        assert_eq!(ctx.cost_limit, 0);
    }

    #[test]
    fn test_scratch_sizes() {
        let a = to_elements(&["a", "b", "c"]);
        let b = to_elements(&["x", "y"]);
        let ctx = DiffContext::new(&a, &b, &DiffOptions::default());

        assert_eq!(ctx.fdiag.len(), 3 + 2 + 3);
        assert_eq!(ctx.bdiag.len(), 3 + 2 + 3);
        assert_eq!(ctx.xchanges.len(), 3);
        assert_eq!(ctx.ychanges.len(), 2);
    }

    #[test]
    fn test_mark_ranges() {
        let a = to_elements(&["a", "b", "c", "d"]);
        let b = to_elements(&["x", "y"]);
        let mut ctx = DiffContext::new(&a, &b, &DiffOptions::default());

        ctx.mark_deleted(1, 3);
        ctx.mark_inserted(0, 1);

        assert_eq!(ctx.xchanges, vec![false, true, true, false]);
        assert_eq!(ctx.ychanges, vec![true, false]);
    }
}
