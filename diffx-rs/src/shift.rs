//! Boundary shifting for readable diffs.
//!
//! When identical elements flank a change region there are several valid
//! placements for it. This pass slides each Delete/Insert along such runs
//! and keeps the placement that scores best: blank lines stay separators,
//! boundaries line up with punctuation and with the sequence edges.
//!
//! A shift trades matched pairs with the adjacent Equal ops, so the op
//! list stays contiguous and exactly covering both inputs. Sliding never
//! changes the multiset of changed elements. A shift that no adjacent
//! Equal can absorb is not representable and is skipped.

use crate::constants::{
    BLANK_LINE_BONUS, PUNCTUATION_BONUS, SEQUENCE_END_BONUS, SEQUENCE_START_BONUS,
};
use crate::element::Element;
use crate::op::{merge_adjacent_ops, DiffOp, OpType};

/// Adjusts diff boundaries for readability, then merges adjacent ops.
pub(crate) fn shift_boundaries<E: Element>(ops: Vec<DiffOp>, a: &[E], b: &[E]) -> Vec<DiffOp> {
    if ops.is_empty() {
        return ops;
    }

    let mut src = ops;
    let mut result: Vec<DiffOp> = Vec::with_capacity(src.len());

    for i in 0..src.len() {
        let op = src[i];
        let next = src[i + 1..].first_mut();

        match op.kind {
            OpType::Equal => {
                // An earlier shift may have drained this op entirely
                if op.a_end > op.a_start {
                    result.push(op);
                }
            }
            OpType::Delete => shift_change(&mut result, next, op, a),
            OpType::Insert => shift_change(&mut result, next, op, b),
        }
    }

    merge_adjacent_ops(result)
}

/// Slides one change region to its best-scoring placement and rebalances
/// the neighboring Equal ops accordingly.
///
/// The region spans `seq[start..end)` where `seq` is A for a Delete and B
/// for an Insert; the four index fields of every touched op move in
/// lockstep, which keeps the list contiguous in both coordinates.
fn shift_change<E: Element>(
    result: &mut Vec<DiffOp>,
    mut next: Option<&mut DiffOp>,
    op: DiffOp,
    seq: &[E],
) {
    let (start, end) = if op.kind == OpType::Delete {
        (op.a_start, op.a_end)
    } else {
        (op.b_start, op.b_end)
    };
    if end == start {
        result.push(op);
        return;
    }

    // How far the region can slide along runs of identical elements
    let mut run_forward = 0;
    while end + run_forward < seq.len() && seq[start + run_forward].equal(&seq[end + run_forward])
    {
        run_forward += 1;
    }
    let mut run_backward = 0;
    while run_backward < start
        && seq[end - run_backward - 1].equal(&seq[start - run_backward - 1])
    {
        run_backward += 1;
    }

    // A shift hands matched pairs across the region, so the donating side
    // must be an Equal op with enough pairs to give
    let next_equal_len = next
        .as_deref()
        .map_or(0, |n| if n.kind == OpType::Equal { n.a_end - n.a_start } else { 0 });
    let prev_equal_len = result
        .last()
        .map_or(0, |p| if p.kind == OpType::Equal { p.a_end - p.a_start } else { 0 });

    let max_forward = run_forward.min(next_equal_len);
    let max_backward = run_backward.min(prev_equal_len);

    if max_forward == 0 && max_backward == 0 {
        result.push(op);
        return;
    }

    // Score every legal placement; only a strictly better score moves the
    // region off its original position
    let mut best_shift: isize = 0;
    let mut best_score = score_boundary(start, end, seq);

    for shift in 1..=max_forward {
        let score = score_boundary(start + shift, end + shift, seq);
        if score > best_score {
            best_score = score;
            best_shift = shift as isize;
        }
    }
    for shift in 1..=max_backward {
        let score = score_boundary(start - shift, end - shift, seq);
        if score > best_score {
            best_score = score;
            best_shift = -(shift as isize);
        }
    }

    if best_shift == 0 {
        result.push(op);
        return;
    }

    let k = best_shift.unsigned_abs();
    let mut shifted = op;

    if best_shift > 0 {
        // The following Equal donates its first k pairs to the side
        // before the region
        shifted.a_start += k;
        shifted.a_end += k;
        shifted.b_start += k;
        shifted.b_end += k;

        if let Some(n) = next.as_deref_mut() {
            n.a_start += k;
            n.b_start += k;
        }

        match result.last_mut() {
            Some(p) if p.kind == OpType::Equal => {
                p.a_end += k;
                p.b_end += k;
            }
            _ => result.push(DiffOp {
                kind: OpType::Equal,
                a_start: op.a_start,
                a_end: op.a_start + k,
                b_start: op.b_start,
                b_end: op.b_start + k,
            }),
        }
        result.push(shifted);
    } else {
        // The preceding Equal donates its last k pairs to the side after
        // the region
        shifted.a_start -= k;
        shifted.a_end -= k;
        shifted.b_start -= k;
        shifted.b_end -= k;

        if let Some(p) = result.last_mut() {
            p.a_end -= k;
            p.b_end -= k;
            if p.a_end == p.a_start {
                result.pop();
            }
        }
        result.push(shifted);

        match next.as_deref_mut() {
            Some(n) if n.kind == OpType::Equal => {
                n.a_start -= k;
                n.b_start -= k;
            }
            _ => result.push(DiffOp {
                kind: OpType::Equal,
                a_start: op.a_end - k,
                a_end: op.a_end,
                b_start: op.b_end - k,
                b_end: op.b_end,
            }),
        }
    }
}

/// Scores a change-region placement. Higher is better. All checks return
/// false for elements without textual content, so the pass is inert on
/// non-string element types.
fn score_boundary<E: Element>(start: usize, end: usize, elems: &[E]) -> i32 {
    let mut score = 0;

    if start > 0 && is_blank(&elems[start - 1]) {
        score += BLANK_LINE_BONUS;
    }
    if end < elems.len() && is_blank(&elems[end]) {
        score += BLANK_LINE_BONUS;
    }

    if start == 0 {
        score += SEQUENCE_START_BONUS;
    }
    if end == elems.len() {
        score += SEQUENCE_END_BONUS;
    }

    if start > 0 && ends_with_punctuation(&elems[start - 1]) {
        score += PUNCTUATION_BONUS;
    }
    if end < elems.len() && starts_with_list_marker(&elems[end]) {
        score += PUNCTUATION_BONUS;
    }

    score
}

/// Whitespace-only content.
fn is_blank<E: Element>(e: &E) -> bool {
    e.as_text().map_or(false, |s| s.trim().is_empty())
}

/// Sentence-ending punctuation.
fn ends_with_punctuation<E: Element>(e: &E) -> bool {
    e.as_text().map_or(false, |s| {
        matches!(s.trim().chars().last(), Some('.' | '!' | '?' | ':' | ';'))
    })
}

/// List and quote markers that commonly open a block.
fn starts_with_list_marker<E: Element>(e: &E) -> bool {
    e.as_text().map_or(false, |s| {
        matches!(s.trim().chars().next(), Some('-' | '*' | '#' | '>'))
    })
}
