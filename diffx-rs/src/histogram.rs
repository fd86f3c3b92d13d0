//! Histogram-style diff driver.
//!
//! An alternative top-level decomposition in the style of Git's histogram
//! diff:
//!
//! 1. Count element frequencies in sequence A
//! 2. Find the lowest-frequency, most positionally balanced element that
//!    appears in both (the best anchor)
//! 3. Split at that anchor and recurse on both sides
//! 4. Fall back to Myers where no good anchor exists
//!
//! High-frequency tokens like "the", "for", "-" are never chosen as
//! anchors, which naturally avoids matching them across unrelated
//! contexts.
//!
//! References: JGit HistogramDiff (Eclipse License), raygard/hdiff (0BSD),
//! and Bram Cohen's patience diff concept.

use rustc_hash::FxHashMap;

use crate::constants::{MAX_ANCHOR_IMBALANCE, MAX_CHAIN_LENGTH};
use crate::element::{to_elements, Element};
use crate::myers::DiffContext;
use crate::op::{merge_adjacent_ops, DiffOp, OpType};
use crate::options::DiffOptions;
use crate::shift::shift_boundaries;

/// Configuration for the histogram recursion.
struct HistogramOptions {
    /// Maximum frequency for an element to be considered as an anchor.
    max_chain_length: usize,
    /// Whether to run Myers on subranges with no usable anchor.
    fallback_to_myers: bool,
    /// Whether common words are barred from anchoring.
    filter_stopwords: bool,
}

impl Default for HistogramOptions {
    fn default() -> Self {
        HistogramOptions {
            max_chain_length: MAX_CHAIN_LENGTH,
            fallback_to_myers: true,
            filter_stopwords: true,
        }
    }
}

/// Common words that make poor anchors even at low frequency: they appear
/// all over natural language but carry little meaning. Single-character
/// punctuation and code keywords are intentionally absent, those ARE
/// meaningful anchors in code diffs. The check is case-sensitive.
fn is_stopword<E: Element>(e: &E) -> bool {
    match e.as_text() {
        Some(s) => matches!(
            s,
            // Articles and determiners
            "a" | "an" | "the"
            // Very common prepositions
            | "in" | "on" | "to" | "for" | "of" | "with"
            // Conjunctions
            | "and" | "or"
            // Copulas
            | "is" | "are" | "be"
        ),
        None => false,
    }
}

/// Compares two string slices with the histogram driver.
pub fn diff_histogram<S: AsRef<str>>(a: &[S], b: &[S], options: DiffOptions) -> Vec<DiffOp> {
    let a = to_elements(a);
    let b = to_elements(b);
    diff_elements_histogram(&a, &b, options)
}

/// Compares two element slices with the histogram driver.
pub fn diff_elements_histogram<E: Element>(
    a: &[E],
    b: &[E],
    options: DiffOptions,
) -> Vec<DiffOp> {
    let hist_opts = HistogramOptions::default();

    let mut ops = histogram_diff(a, b, &hist_opts);

    if options.anchor_elimination {
        ops = merge_adjacent_ops(ops);
    }
    if options.postprocessing {
        ops = shift_boundaries(ops, a, b);
    }

    ops
}

/// Runs the histogram algorithm over the full sequences: trims the equal
/// prefix and suffix into flanking Equal ops and recurses into the middle.
fn histogram_diff<E: Element>(a: &[E], b: &[E], opts: &HistogramOptions) -> Vec<DiffOp> {
    if a.is_empty() && b.is_empty() {
        return Vec::new();
    }
    if a.is_empty() {
        return vec![DiffOp { kind: OpType::Insert, a_start: 0, a_end: 0, b_start: 0, b_end: b.len() }];
    }
    if b.is_empty() {
        return vec![DiffOp { kind: OpType::Delete, a_start: 0, a_end: a.len(), b_start: 0, b_end: 0 }];
    }

    let mut prefix_len = 0;
    while prefix_len < a.len() && prefix_len < b.len() && a[prefix_len].equal(&b[prefix_len]) {
        prefix_len += 1;
    }

    let mut suffix_len = 0;
    while suffix_len < a.len() - prefix_len
        && suffix_len < b.len() - prefix_len
        && a[a.len() - 1 - suffix_len].equal(&b[b.len() - 1 - suffix_len])
    {
        suffix_len += 1;
    }

    if prefix_len + suffix_len >= a.len() && prefix_len + suffix_len >= b.len() {
        return vec![DiffOp { kind: OpType::Equal, a_start: 0, a_end: a.len(), b_start: 0, b_end: b.len() }];
    }

    let (a_start, a_end) = (prefix_len, a.len() - suffix_len);
    let (b_start, b_end) = (prefix_len, b.len() - suffix_len);

    let mut result = Vec::new();
    if prefix_len > 0 {
        result.push(DiffOp {
            kind: OpType::Equal,
            a_start: 0,
            a_end: prefix_len,
            b_start: 0,
            b_end: prefix_len,
        });
    }

    result.extend(histogram_recursive(
        &a[a_start..a_end],
        &b[b_start..b_end],
        a_start,
        b_start,
        opts,
    ));

    if suffix_len > 0 {
        result.push(DiffOp {
            kind: OpType::Equal,
            a_start: a.len() - suffix_len,
            a_end: a.len(),
            b_start: b.len() - suffix_len,
            b_end: b.len(),
        });
    }

    merge_adjacent_ops(result)
}

/// Emits a whole-subrange replacement: Delete then Insert.
fn replace_all(a_len: usize, b_len: usize, a_offset: usize, b_offset: usize) -> Vec<DiffOp> {
    vec![
        DiffOp {
            kind: OpType::Delete,
            a_start: a_offset,
            a_end: a_offset + a_len,
            b_start: b_offset,
            b_end: b_offset,
        },
        DiffOp {
            kind: OpType::Insert,
            a_start: a_offset + a_len,
            a_end: a_offset + a_len,
            b_start: b_offset,
            b_end: b_offset + b_len,
        },
    ]
}

/// The core histogram recursion over one subrange.
fn histogram_recursive<E: Element>(
    a: &[E],
    b: &[E],
    a_offset: usize,
    b_offset: usize,
    opts: &HistogramOptions,
) -> Vec<DiffOp> {
    if a.is_empty() && b.is_empty() {
        return Vec::new();
    }
    if a.is_empty() {
        return vec![DiffOp {
            kind: OpType::Insert,
            a_start: a_offset,
            a_end: a_offset,
            b_start: b_offset,
            b_end: b_offset + b.len(),
        }];
    }
    if b.is_empty() {
        return vec![DiffOp {
            kind: OpType::Delete,
            a_start: a_offset,
            a_end: a_offset + a.len(),
            b_start: b_offset,
            b_end: b_offset,
        }];
    }

    // Inverted index over A: hash -> occurrence positions. The list
    // length doubles as the frequency.
    let mut a_index: FxHashMap<u64, Vec<usize>> = FxHashMap::default();
    for (i, e) in a.iter().enumerate() {
        a_index.entry(e.hash()).or_default().push(i);
    }

    // Pick the best anchor: low frequency AND a balanced split.
    // Score = freq * (1 + 2 * position imbalance), lower is better.
    let mut best_idx: Option<usize> = None;
    let mut best_score = (opts.max_chain_length + 1) as f64 * 3.0;
    let mut best_hash = 0u64;

    for (i, e) in b.iter().enumerate() {
        if opts.filter_stopwords && is_stopword(e) {
            continue;
        }

        let h = e.hash();
        let occurrences = match a_index.get(&h) {
            Some(v) => v,
            None => continue,
        };
        let freq = occurrences.len();
        if freq == 0 || freq > opts.max_chain_length {
            continue;
        }

        let b_ratio = i as f64 / b.len() as f64;
        let mut best_pos_imbalance = 2.0_f64;
        for &a_idx in occurrences {
            // Hash collisions must not sneak in as anchors
            if !a[a_idx].equal(e) {
                continue;
            }
            let a_ratio = a_idx as f64 / a.len() as f64;
            let imbalance = (a_ratio - b_ratio).abs();
            if imbalance < best_pos_imbalance {
                best_pos_imbalance = imbalance;
            }
        }

        if best_pos_imbalance > MAX_ANCHOR_IMBALANCE {
            continue;
        }

        let score = freq as f64 * (1.0 + best_pos_imbalance * 2.0);
        if score < best_score {
            best_score = score;
            best_idx = Some(i);
            best_hash = h;
        }
    }

    // No good anchor: let Myers find common subsequences the histogram
    // missed, or replace the whole range if the fallback is disabled
    let best_idx = match best_idx {
        Some(idx) => idx,
        None => {
            return if opts.fallback_to_myers {
                myers_fallback(a, b, a_offset, b_offset)
            } else {
                replace_all(a.len(), b.len(), a_offset, b_offset)
            };
        }
    };

    // Of the anchor's occurrences in A, take the one whose position
    // ratio is closest to the anchor's position in B
    let b_ratio = best_idx as f64 / b.len() as f64;
    let mut a_match: Option<usize> = None;
    let mut best_ratio_diff = 2.0_f64;
    if let Some(occurrences) = a_index.get(&best_hash) {
        for &idx in occurrences {
            if !a[idx].equal(&b[best_idx]) {
                continue;
            }
            let ratio_diff = (idx as f64 / a.len() as f64 - b_ratio).abs();
            if ratio_diff < best_ratio_diff {
                best_ratio_diff = ratio_diff;
                a_match = Some(idx);
            }
        }
    }

    let a_match = match a_match {
        Some(idx) => idx,
        None => {
            return if opts.fallback_to_myers {
                myers_fallback(a, b, a_offset, b_offset)
            } else {
                replace_all(a.len(), b.len(), a_offset, b_offset)
            };
        }
    };

    // Extend the match to its full extent in both directions
    let mut match_start_a = a_match;
    let mut match_start_b = best_idx;
    let mut match_end_a = a_match + 1;
    let mut match_end_b = best_idx + 1;

    while match_start_a > 0
        && match_start_b > 0
        && a[match_start_a - 1].equal(&b[match_start_b - 1])
    {
        match_start_a -= 1;
        match_start_b -= 1;
    }
    while match_end_a < a.len() && match_end_b < b.len() && a[match_end_a].equal(&b[match_end_b]) {
        match_end_a += 1;
        match_end_b += 1;
    }

    let mut result = Vec::new();

    if match_start_a > 0 || match_start_b > 0 {
        result.extend(histogram_recursive(
            &a[..match_start_a],
            &b[..match_start_b],
            a_offset,
            b_offset,
            opts,
        ));
    }

    result.push(DiffOp {
        kind: OpType::Equal,
        a_start: a_offset + match_start_a,
        a_end: a_offset + match_end_a,
        b_start: b_offset + match_start_b,
        b_end: b_offset + match_end_b,
    });

    if match_end_a < a.len() || match_end_b < b.len() {
        result.extend(histogram_recursive(
            &a[match_end_a..],
            &b[match_end_b..],
            a_offset + match_end_a,
            b_offset + match_end_b,
            opts,
        ));
    }

    result
}

/// Runs the Myers core over one subrange and rebases the ops.
fn myers_fallback<E: Element>(
    a: &[E],
    b: &[E],
    a_offset: usize,
    b_offset: usize,
) -> Vec<DiffOp> {
    // Preprocessing and postprocessing already happen at the driver level
    let opts = DiffOptions::new()
        .preprocessing(false)
        .postprocessing(false)
        .anchor_elimination(false);

    let mut ctx = DiffContext::new(a, b, &opts);
    ctx.compare_seq(0, a.len(), 0, b.len(), false);
    let mut ops = ctx.build_ops();

    for op in &mut ops {
        op.a_start += a_offset;
        op.a_end += a_offset;
        op.b_start += b_offset;
        op.b_end += b_offset;
    }

    ops
}
