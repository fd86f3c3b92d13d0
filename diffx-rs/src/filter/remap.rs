//! Expansion of filtered-coordinate ops back onto the original inputs.

use crate::op::{merge_adjacent_ops, DiffOp, OpType};

/// Tracks how filtered indices map back to original indices.
#[derive(Debug, Clone)]
pub(crate) struct IndexMapping {
    /// Filtered A index -> original A index, ascending.
    pub(crate) a_to_orig: Vec<usize>,
    /// Filtered B index -> original B index, ascending.
    pub(crate) b_to_orig: Vec<usize>,
    /// Original length of A.
    pub(crate) orig_n: usize,
    /// Original length of B.
    pub(crate) orig_m: usize,
}

impl IndexMapping {
    /// Converts ops on the filtered sequences back to original indices,
    /// inserting Delete/Insert entries for the filtered-out elements.
    ///
    /// Equal ops are expanded element by element: a filtered-out element
    /// may sit between two indices that are adjacent in the filtered
    /// sequence but not in the original, and that gap belongs to the
    /// change region, not the Equal. When both gaps precede an element,
    /// the Delete is emitted before the Insert.
    pub(crate) fn map_ops(&self, ops: &[DiffOp]) -> Vec<DiffOp> {
        let mut result: Vec<DiffOp> = Vec::with_capacity(ops.len() * 3);
        let mut a_pos = 0;
        let mut b_pos = 0;

        for op in ops {
            match op.kind {
                OpType::Equal => {
                    for k in 0..(op.a_end - op.a_start) {
                        let orig_a = self.a_to_orig[op.a_start + k];
                        let orig_b = self.b_to_orig[op.b_start + k];

                        if orig_a > a_pos {
                            result.push(DiffOp {
                                kind: OpType::Delete,
                                a_start: a_pos,
                                a_end: orig_a,
                                b_start: b_pos,
                                b_end: b_pos,
                            });
                            a_pos = orig_a;
                        }
                        if orig_b > b_pos {
                            result.push(DiffOp {
                                kind: OpType::Insert,
                                a_start: a_pos,
                                a_end: a_pos,
                                b_start: b_pos,
                                b_end: orig_b,
                            });
                            b_pos = orig_b;
                        }

                        result.push(DiffOp {
                            kind: OpType::Equal,
                            a_start: orig_a,
                            a_end: orig_a + 1,
                            b_start: orig_b,
                            b_end: orig_b + 1,
                        });
                        a_pos = orig_a + 1;
                        b_pos = orig_b + 1;
                    }
                }
                OpType::Delete => {
                    for i in op.a_start..op.a_end {
                        let orig_a = self.a_to_orig[i];
                        if orig_a > a_pos {
                            result.push(DiffOp {
                                kind: OpType::Delete,
                                a_start: a_pos,
                                a_end: orig_a,
                                b_start: b_pos,
                                b_end: b_pos,
                            });
                        }
                        result.push(DiffOp {
                            kind: OpType::Delete,
                            a_start: orig_a,
                            a_end: orig_a + 1,
                            b_start: b_pos,
                            b_end: b_pos,
                        });
                        a_pos = orig_a + 1;
                    }
                }
                OpType::Insert => {
                    for i in op.b_start..op.b_end {
                        let orig_b = self.b_to_orig[i];
                        if orig_b > b_pos {
                            result.push(DiffOp {
                                kind: OpType::Insert,
                                a_start: a_pos,
                                a_end: a_pos,
                                b_start: b_pos,
                                b_end: orig_b,
                            });
                        }
                        result.push(DiffOp {
                            kind: OpType::Insert,
                            a_start: a_pos,
                            a_end: a_pos,
                            b_start: orig_b,
                            b_end: orig_b + 1,
                        });
                        b_pos = orig_b + 1;
                    }
                }
            }
        }

        // Flush the trailing gap
        if a_pos < self.orig_n {
            result.push(DiffOp {
                kind: OpType::Delete,
                a_start: a_pos,
                a_end: self.orig_n,
                b_start: b_pos,
                b_end: b_pos,
            });
        }
        if b_pos < self.orig_m {
            result.push(DiffOp {
                kind: OpType::Insert,
                a_start: self.orig_n,
                a_end: self.orig_n,
                b_start: b_pos,
                b_end: self.orig_m,
            });
        }

        merge_adjacent_ops(result)
    }
}
