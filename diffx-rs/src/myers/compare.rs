//! Divide-and-conquer recursion and op reconstruction.

use crate::element::Element;
use crate::op::{DiffOp, OpType};

use super::context::DiffContext;

impl<'a, E: Element> DiffContext<'a, E> {
    /// Compares `xvec[xoff..xlim]` with `yvec[yoff..ylim]` and records
    /// changes in the mark arrays.
    ///
    /// Peels the equal prefix and suffix, handles the empty-side base
    /// cases, then splits at the middle snake and recurses. Each half
    /// carries its own minimality requirement from the partition.
    pub(crate) fn compare_seq(
        &mut self,
        mut xoff: usize,
        mut xlim: usize,
        mut yoff: usize,
        mut ylim: usize,
        find_minimal: bool,
    ) {
        while xoff < xlim && yoff < ylim && self.equal(xoff, yoff) {
            xoff += 1;
            yoff += 1;
        }
        while xoff < xlim && yoff < ylim && self.equal(xlim - 1, ylim - 1) {
            xlim -= 1;
            ylim -= 1;
        }

        if xoff == xlim {
            self.mark_inserted(yoff, ylim);
            return;
        }
        if yoff == ylim {
            self.mark_deleted(xoff, xlim);
            return;
        }

        let mut part = self.find_middle_snake(xoff, xlim, yoff, ylim, find_minimal);

        // Stale diagonal entries from outer frames can, in rare cases,
        // surface a split at a frame corner; recursing on it would revisit
        // the whole frame. The greedy fallback always makes progress.
        if (part.xmid == xlim && part.ymid == ylim) || (part.xmid == xoff && part.ymid == yoff) {
            part = self.greedy_fallback(xoff, xlim, yoff, ylim);
        }

        self.compare_seq(xoff, part.xmid, yoff, part.ymid, part.lo_minimal);
        self.compare_seq(part.xmid, xlim, part.ymid, ylim, part.hi_minimal);
    }

    /// Converts the change marks into a sequence of ops with a single
    /// linear scan, grouping consecutive changes.
    pub(crate) fn build_ops(&self) -> Vec<DiffOp> {
        let mut ops = Vec::new();
        let n = self.xvec.len();
        let m = self.yvec.len();
        let (mut i, mut j) = (0, 0);

        while i < n || j < m {
            let eq_a_start = i;
            let eq_b_start = j;
            while i < n && j < m && !self.xchanges[i] && !self.ychanges[j] {
                i += 1;
                j += 1;
            }
            if i > eq_a_start {
                ops.push(DiffOp {
                    kind: OpType::Equal,
                    a_start: eq_a_start,
                    a_end: i,
                    b_start: eq_b_start,
                    b_end: j,
                });
            }

            let del_start = i;
            while i < n && self.xchanges[i] {
                i += 1;
            }
            if i > del_start {
                ops.push(DiffOp {
                    kind: OpType::Delete,
                    a_start: del_start,
                    a_end: i,
                    b_start: j,
                    b_end: j,
                });
            }

            let ins_start = j;
            while j < m && self.ychanges[j] {
                j += 1;
            }
            if j > ins_start {
                ops.push(DiffOp {
                    kind: OpType::Insert,
                    a_start: i,
                    a_end: i,
                    b_start: ins_start,
                    b_end: j,
                });
            }
        }

        ops
    }
}
