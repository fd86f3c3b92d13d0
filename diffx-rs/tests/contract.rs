//! Cross-cutting contract tests for both diff drivers.
//!
//! Checks the op-list invariants (reconstruction, coverage, canonical
//! form, determinism) over seeded random inputs and a set of literal
//! scenarios.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use diffx::{diff, diff_histogram, merge_adjacent_ops, DiffOp, DiffOptions, OpType};

const ALPHABET: &[&str] = &["alpha", "beta", "gamma", "delta", "", "end.", "-item"];

/// Applies ops to `a`, reproducing `b`.
fn apply(a: &[String], b: &[String], ops: &[DiffOp]) -> Vec<String> {
    let mut result = Vec::new();
    for op in ops {
        match op.kind {
            OpType::Equal => result.extend_from_slice(&a[op.a_start..op.a_end]),
            OpType::Insert => result.extend_from_slice(&b[op.b_start..op.b_end]),
            OpType::Delete => {}
        }
    }
    result
}

/// Asserts the structural invariants of a valid op list:
/// contiguity in both coordinates, exact coverage of both inputs,
/// canonical merged form, and elementwise-equal Equal ops.
fn assert_valid_ops(a: &[String], b: &[String], ops: &[DiffOp], label: &str) {
    let mut a_pos = 0;
    let mut b_pos = 0;
    let mut prev_kind: Option<OpType> = None;

    for op in ops {
        assert_eq!(op.a_start, a_pos, "{}: gap in A coordinates: {:?}", label, ops);
        assert_eq!(op.b_start, b_pos, "{}: gap in B coordinates: {:?}", label, ops);

        match op.kind {
            OpType::Equal => {
                assert!(op.a_end > op.a_start, "{}: empty Equal: {:?}", label, op);
                assert_eq!(
                    op.a_end - op.a_start,
                    op.b_end - op.b_start,
                    "{}: skewed Equal: {:?}",
                    label,
                    op
                );
                for k in 0..(op.a_end - op.a_start) {
                    assert_eq!(
                        a[op.a_start + k],
                        b[op.b_start + k],
                        "{}: Equal over unequal elements: {:?}",
                        label,
                        op
                    );
                }
                a_pos = op.a_end;
                b_pos = op.b_end;
            }
            OpType::Delete => {
                assert!(op.a_end > op.a_start, "{}: empty Delete: {:?}", label, op);
                assert_eq!(op.b_end, op.b_start, "{}: Delete with B extent: {:?}", label, op);
                a_pos = op.a_end;
            }
            OpType::Insert => {
                assert!(op.b_end > op.b_start, "{}: empty Insert: {:?}", label, op);
                assert_eq!(op.a_end, op.a_start, "{}: Insert with A extent: {:?}", label, op);
                b_pos = op.b_end;
            }
        }

        // Contiguity makes adjacent same-type ops always mergeable, so
        // canonical form means adjacent kinds must differ
        if let Some(prev) = prev_kind {
            assert_ne!(prev, op.kind, "{}: unmerged adjacent ops: {:?}", label, ops);
        }
        prev_kind = Some(op.kind);
    }

    assert_eq!(a_pos, a.len(), "{}: A not fully covered: {:?}", label, ops);
    assert_eq!(b_pos, b.len(), "{}: B not fully covered: {:?}", label, ops);

    // Reconstruction
    assert_eq!(&apply(a, b, ops), b, "{}: reconstruction failed: {:?}", label, ops);

    // The merger must be a no-op on driver output
    assert_eq!(
        merge_adjacent_ops(ops.to_vec()),
        ops,
        "{}: output not in merged form",
        label
    );
}

fn random_seq(rng: &mut StdRng, max_len: usize) -> Vec<String> {
    let len = rng.gen_range(0..=max_len);
    (0..len)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())].to_string())
        .collect()
}

/// Derives `b` from `a` by a few random replacements, insertions, and
/// deletions. Keeps most content shared, like a realistic edit.
fn mutate(rng: &mut StdRng, a: &[String]) -> Vec<String> {
    let mut b: Vec<String> = a.to_vec();
    let edits = rng.gen_range(0..=4);
    for _ in 0..edits {
        if b.is_empty() {
            b.push(ALPHABET[rng.gen_range(0..ALPHABET.len())].to_string());
            continue;
        }
        let pos = rng.gen_range(0..b.len());
        match rng.gen_range(0..3) {
            0 => b[pos] = ALPHABET[rng.gen_range(0..ALPHABET.len())].to_string(),
            1 => b.insert(pos, ALPHABET[rng.gen_range(0..ALPHABET.len())].to_string()),
            _ => {
                b.remove(pos);
            }
        }
    }
    b
}

fn all_configs() -> Vec<(&'static str, DiffOptions)> {
    vec![
        ("default", DiffOptions::default()),
        ("no-preprocessing", DiffOptions::new().preprocessing(false)),
        ("no-postprocessing", DiffOptions::new().postprocessing(false)),
        ("raw", DiffOptions::new().preprocessing(false).postprocessing(false)),
        ("minimal", DiffOptions::new().minimal(true).preprocessing(false)),
    ]
}

#[test]
fn invariants_hold_on_random_inputs() {
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for round in 0..60 {
        let a = random_seq(&mut rng, 40);
        // Alternate between unrelated inputs and realistic edits
        let b = if round % 2 == 0 {
            random_seq(&mut rng, 40)
        } else {
            mutate(&mut rng, &a)
        };

        for (name, opts) in all_configs() {
            let label = format!("myers/{} round {}", name, round);
            let ops = diff(&a, &b, opts);
            assert_valid_ops(&a, &b, &ops, &label);
        }

        for (name, opts) in [
            ("default", DiffOptions::default()),
            ("no-postprocessing", DiffOptions::new().postprocessing(false)),
        ] {
            let label = format!("histogram/{} round {}", name, round);
            let ops = diff_histogram(&a, &b, opts);
            assert_valid_ops(&a, &b, &ops, &label);
        }
    }
}

#[test]
fn identical_runs_produce_identical_ops() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..20 {
        let a = random_seq(&mut rng, 30);
        let b = mutate(&mut rng, &a);

        for (_, opts) in all_configs() {
            assert_eq!(diff(&a, &b, opts), diff(&a, &b, opts));
        }
        let opts = DiffOptions::default();
        assert_eq!(diff_histogram(&a, &b, opts), diff_histogram(&a, &b, opts));
    }
}

/// Total elements deleted plus inserted, the quantity minimal mode
/// actually minimizes.
fn changed_elements(ops: &[DiffOp]) -> usize {
    ops.iter()
        .map(|op| match op.kind {
            OpType::Delete => op.a_end - op.a_start,
            OpType::Insert => op.b_end - op.b_start,
            OpType::Equal => 0,
        })
        .sum()
}

#[test]
fn minimal_mode_never_changes_more_elements() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..40 {
        let a = random_seq(&mut rng, 40);
        let b = mutate(&mut rng, &a);

        let minimal = changed_elements(&diff(
            &a,
            &b,
            DiffOptions::new().minimal(true).preprocessing(false),
        ));

        for (name, opts) in all_configs() {
            let other = changed_elements(&diff(&a, &b, opts));
            assert!(
                minimal <= other,
                "minimal changed {} > {} with {}: a={:?} b={:?}",
                minimal,
                other,
                name,
                a,
                b
            );
        }
    }
}

#[test]
fn filtering_is_transparent() {
    let mut rng = StdRng::seed_from_u64(99);

    for _ in 0..30 {
        let a = random_seq(&mut rng, 40);
        let b = random_seq(&mut rng, 40);

        let with = diff(&a, &b, DiffOptions::default());
        let without = diff(&a, &b, DiffOptions::new().preprocessing(false));

        assert_eq!(apply(&a, &b, &with), b);
        assert_eq!(apply(&a, &b, &without), b);
    }
}

fn strs(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| s.to_string()).collect()
}

fn change_regions(ops: &[DiffOp]) -> usize {
    let mut regions = 0;
    let mut in_change = false;
    for op in ops {
        match op.kind {
            OpType::Equal => in_change = false,
            OpType::Delete | OpType::Insert => {
                if !in_change {
                    regions += 1;
                    in_change = true;
                }
            }
        }
    }
    regions
}

#[test]
fn scenario_fox_sentence() {
    let a = strs(&["The", "quick", "brown", "fox", "jumps"]);
    let b = strs(&["A", "slow", "red", "fox", "leaps"]);

    let ops = diff(&a, &b, DiffOptions::default());
    assert_valid_ops(&a, &b, &ops, "fox");

    let fox_kept = ops
        .iter()
        .any(|op| op.kind == OpType::Equal && (op.a_start..op.a_end).any(|i| a[i] == "fox"));
    assert!(fox_kept, "ops: {:?}", ops);
    assert_eq!(change_regions(&ops), 2, "ops: {:?}", ops);
}

#[test]
fn scenario_pure_insert() {
    let a = strs(&["a", "c"]);
    let b = strs(&["a", "b", "c"]);

    let ops = diff(&a, &b, DiffOptions::default());

    assert_eq!(
        ops,
        vec![
            DiffOp { kind: OpType::Equal, a_start: 0, a_end: 1, b_start: 0, b_end: 1 },
            DiffOp { kind: OpType::Insert, a_start: 1, a_end: 1, b_start: 1, b_end: 2 },
            DiffOp { kind: OpType::Equal, a_start: 1, a_end: 2, b_start: 2, b_end: 3 },
        ]
    );
}

#[test]
fn scenario_pure_delete() {
    let a = strs(&["a", "b", "c"]);
    let b = strs(&["a", "c"]);

    let ops = diff(&a, &b, DiffOptions::default());

    assert_eq!(
        ops,
        vec![
            DiffOp { kind: OpType::Equal, a_start: 0, a_end: 1, b_start: 0, b_end: 1 },
            DiffOp { kind: OpType::Delete, a_start: 1, a_end: 2, b_start: 1, b_end: 1 },
            DiffOp { kind: OpType::Equal, a_start: 2, a_end: 3, b_start: 1, b_end: 2 },
        ]
    );
}

#[test]
fn scenario_all_different() {
    let a = strs(&["a", "b", "c"]);
    let b = strs(&["x", "y", "z"]);

    let ops = diff(&a, &b, DiffOptions::default());
    assert_valid_ops(&a, &b, &ops, "all-different");

    assert!(ops.iter().any(|op| op.kind == OpType::Delete));
    assert!(ops.iter().any(|op| op.kind == OpType::Insert));
}

#[test]
fn scenario_histogram_avoids_stopword_anchor() {
    let a = strs(&["the", "quick", "fox"]);
    let b = strs(&["the", "slow", "fox"]);

    let ops = diff_histogram(&a, &b, DiffOptions::default());
    assert_valid_ops(&a, &b, &ops, "stopword-anchor");

    assert_eq!(ops.len(), 4, "ops: {:?}", ops);
    assert_eq!(ops[0].kind, OpType::Equal);
    assert_eq!(ops[3].kind, OpType::Equal);

    let fox_kept = ops
        .iter()
        .any(|op| op.kind == OpType::Equal && (op.a_start..op.a_end).any(|i| a[i] == "fox"));
    assert!(fox_kept, "ops: {:?}", ops);
}

#[test]
fn scenario_blank_separators_stay_in_equals() {
    let a = strs(&["l1", "", "l2", "l3", "", "l4"]);
    let b = strs(&["l1", "", "NEW", "l3", "", "l4"]);

    let ops = diff(&a, &b, DiffOptions::default());
    assert_valid_ops(&a, &b, &ops, "blank-separators");

    // The blanks at A positions 1 and 4 remain inside Equal ops
    for blank_idx in [1, 4] {
        let inside_equal = ops.iter().any(|op| {
            op.kind == OpType::Equal && op.a_start <= blank_idx && blank_idx < op.a_end
        });
        assert!(inside_equal, "blank at {} not in Equal: {:?}", blank_idx, ops);
    }

    // A single single-element change region sits between them
    assert_eq!(change_regions(&ops), 1, "ops: {:?}", ops);
    for op in &ops {
        match op.kind {
            OpType::Delete => assert_eq!(op.a_end - op.a_start, 1),
            OpType::Insert => assert_eq!(op.b_end - op.b_start, 1),
            OpType::Equal => {}
        }
    }
}
