//! Top-level Myers diff driver.
//!
//! Wires the pipeline together: frequency preprocessing, the
//! divide-and-conquer core, index remapping, and boundary shifting.

use crate::element::{to_elements, Element};
use crate::filter::filter_confusing_elements;
use crate::myers::DiffContext;
use crate::op::{DiffOp, OpType};
use crate::options::DiffOptions;
use crate::shift::shift_boundaries;

/// Compares two string slices and returns edit operations.
pub fn diff<S: AsRef<str>>(a: &[S], b: &[S], options: DiffOptions) -> Vec<DiffOp> {
    let a = to_elements(a);
    let b = to_elements(b);
    diff_elements(&a, &b, options)
}

/// Compares two element slices and returns edit operations.
///
/// Applying the result to A reconstructs B: keep `a[a_start..a_end]` for
/// Equal, take `b[b_start..b_end]` for Insert, skip Delete.
pub fn diff_elements<E: Element>(a: &[E], b: &[E], options: DiffOptions) -> Vec<DiffOp> {
    // Trivial cases
    if a.is_empty() && b.is_empty() {
        return Vec::new();
    }
    if a.is_empty() {
        return vec![DiffOp { kind: OpType::Insert, a_start: 0, a_end: 0, b_start: 0, b_end: b.len() }];
    }
    if b.is_empty() {
        return vec![DiffOp { kind: OpType::Delete, a_start: 0, a_end: a.len(), b_start: 0, b_end: 0 }];
    }

    let ops = if options.preprocessing {
        match filter_confusing_elements(a, b) {
            Some(filtered) => {
                let mut ctx = DiffContext::new(&filtered.a, &filtered.b, &options);
                ctx.compare_seq(0, filtered.a.len(), 0, filtered.b.len(), options.force_minimal);
                filtered.mapping.map_ops(&ctx.build_ops())
            }
            None => run_core(a, b, &options),
        }
    } else {
        run_core(a, b, &options)
    };

    if options.postprocessing {
        shift_boundaries(ops, a, b)
    } else {
        ops
    }
}

/// Runs the Myers core directly over the given sequences.
fn run_core<E: Element>(a: &[E], b: &[E], options: &DiffOptions) -> Vec<DiffOp> {
    let mut ctx = DiffContext::new(a, b, options);
    ctx.compare_seq(0, a.len(), 0, b.len(), options.force_minimal);
    ctx.build_ops()
}
