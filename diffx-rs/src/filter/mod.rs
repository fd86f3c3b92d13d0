//! Frequency-based preprocessing.
//!
//! High-frequency elements make poor alignment anchors: the search happily
//! matches them across unrelated contexts and fragments the diff. This
//! module classifies elements by frequency, removes the confusing ones
//! before the core runs, and (in [`remap`]) expands the result back onto
//! the original coordinates.
//!
//! The approach is independently derived from Neil Fraser's "Diff
//! Strategies" writeup and imara-diff (Apache-2.0).

mod remap;

pub(crate) use remap::IndexMapping;

use rustc_hash::FxHashMap;

use crate::element::Element;

/// How an element is treated during filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ElementClass {
    /// Useful as an anchor: reasonable frequency, present in both sides.
    Keep,
    /// Definitely changed: no matches in the other sequence.
    Discard,
    /// High frequency: poor anchor, kept only next to a kept element.
    Provisional,
}

/// The filtered view of one input pair plus the mapping back.
pub(crate) struct Filtered<'a, E> {
    pub(crate) a: Vec<&'a E>,
    pub(crate) b: Vec<&'a E>,
    pub(crate) mapping: IndexMapping,
}

/// Removes high-frequency elements that cause spurious matches.
///
/// Returns `None` when filtering is not worthwhile: empty inputs, more
/// than 3/4 of all elements kept, or everything filtered away. The caller
/// then diffs the original sequences directly.
pub(crate) fn filter_confusing_elements<'a, E: Element>(
    a: &'a [E],
    b: &'a [E],
) -> Option<Filtered<'a, E>> {
    if a.is_empty() || b.is_empty() {
        return None;
    }

    let mut a_freq: FxHashMap<u64, usize> = FxHashMap::default();
    let mut b_freq: FxHashMap<u64, usize> = FxHashMap::default();
    for e in a {
        *a_freq.entry(e.hash()).or_insert(0) += 1;
    }
    for e in b {
        *b_freq.entry(e.hash()).or_insert(0) += 1;
    }

    // Elements appearing more often than this are poor anchors
    let threshold = (5 + (a.len() + b.len()) / 64).max(8);

    let classify = |elems: &[E], own: &FxHashMap<u64, usize>, other: &FxHashMap<u64, usize>| {
        elems
            .iter()
            .map(|e| {
                let h = e.hash();
                let other_freq = other.get(&h).copied().unwrap_or(0);
                let freq = own.get(&h).copied().unwrap_or(0) + other_freq;
                if other_freq == 0 {
                    ElementClass::Discard
                } else if freq > threshold {
                    ElementClass::Provisional
                } else {
                    ElementClass::Keep
                }
            })
            .collect::<Vec<_>>()
    };

    let a_class = classify(a, &a_freq, &b_freq);
    let b_class = classify(b, &b_freq, &a_freq);

    // If most elements would be kept, filtering buys nothing
    let keep_count = a_class.iter().filter(|c| **c == ElementClass::Keep).count()
        + b_class.iter().filter(|c| **c == ElementClass::Keep).count();
    if keep_count > (a.len() + b.len()) * 3 / 4 {
        return None;
    }

    let (filtered_a, a_to_orig) = filter_sequence(a, &a_class);
    let (filtered_b, b_to_orig) = filter_sequence(b, &b_class);

    if filtered_a.is_empty() && filtered_b.is_empty() {
        return None;
    }

    Some(Filtered {
        a: filtered_a,
        b: filtered_b,
        mapping: IndexMapping {
            a_to_orig,
            b_to_orig,
            orig_n: a.len(),
            orig_m: b.len(),
        },
    })
}

/// Filters one sequence by element class, recording the original index of
/// every emitted element. Provisional elements survive only when an
/// immediate neighbor is kept.
fn filter_sequence<'a, E: Element>(
    elems: &'a [E],
    classes: &[ElementClass],
) -> (Vec<&'a E>, Vec<usize>) {
    let mut result = Vec::with_capacity(elems.len());
    let mut to_orig = Vec::with_capacity(elems.len());

    for (i, class) in classes.iter().enumerate() {
        match class {
            ElementClass::Keep => {
                result.push(&elems[i]);
                to_orig.push(i);
            }
            ElementClass::Provisional => {
                let prev_keep = i > 0 && classes[i - 1] == ElementClass::Keep;
                let next_keep = i + 1 < classes.len() && classes[i + 1] == ElementClass::Keep;
                if prev_keep || next_keep {
                    result.push(&elems[i]);
                    to_orig.push(i);
                }
            }
            ElementClass::Discard => {}
        }
    }

    (result, to_orig)
}
