//! Bidirectional middle-snake search (Myers 1986, section 4b).
//!
//! Finds the optimal split point for divide-and-conquer by running the
//! forward and backward frontiers toward each other until they overlap.
//! Three heuristics keep pathological inputs tractable when the caller
//! does not demand a minimal result:
//!
//! 1. Significant match detection: long diagonal runs indicate good
//!    alignment and are remembered as fallback split points
//! 2. Cost limit: early termination once the edit distance exceeds a
//!    size-derived threshold
//! 3. Expense threshold: an aggressive `sqrt(n) + sqrt(m)` cutoff for
//!    clearly diverged inputs
//!
//! Heuristic thresholds are independently derived from the concepts in
//! Neil Fraser's "Diff Strategies" and imara-diff (Apache-2.0).

use crate::constants::SIGNIFICANT_MATCH_LEN;
use crate::element::Element;

use super::context::{DiffContext, Partition};

/// A diagonal run of matches found during the search. The endpoint is in
/// frame-local coordinates.
struct SnakeInfo {
    x: isize,
    y: isize,
    forward: bool,
}

impl<'a, E: Element> DiffContext<'a, E> {
    /// Finds the middle snake inside `[xoff, xlim) x [yoff, ylim)`.
    ///
    /// Returns the split point and whether each half must continue with a
    /// strictly minimal search. When `find_minimal` is set, every
    /// heuristic is disabled and the split is exact.
    pub(crate) fn find_middle_snake(
        &mut self,
        xoff: usize,
        xlim: usize,
        yoff: usize,
        ylim: usize,
        find_minimal: bool,
    ) -> Partition {
        let n = (xlim - xoff) as isize;
        let m = (ylim - yoff) as isize;

        // One side empty: the whole frame is insertions or deletions
        if n == 0 {
            return Partition { xmid: xoff, ymid: ylim, lo_minimal: true, hi_minimal: true };
        }
        if m == 0 {
            return Partition { xmid: xlim, ymid: yoff, lo_minimal: true, hi_minimal: true };
        }

        let delta = n - m;
        let delta_odd = delta & 1 != 0;

        // Diagonal k is stored at index k + offset; k ranges over -m..=n
        let offset = m + 1;
        let diag_len = self.fdiag.len() as isize;

        // Forward search starts at (0,0), backward at (n,m)
        self.fdiag[(offset + 1) as usize] = 0;
        self.bdiag[(offset + delta - 1) as usize] = n;

        // In bidirectional search each side explores half the distance
        let max_d = (n + m + 1) / 2;

        let mut cost_limit = max_d;
        if self.cost_limit > 0 && !find_minimal {
            cost_limit = (self.cost_limit as isize).min(max_d);
        }

        // Best snake seen so far, for heuristic fallback
        let mut best: Option<(isize, SnakeInfo)> = None;

        // Aggressive cutoff for clearly diverged inputs
        let mut too_expensive = cost_limit;
        if self.use_heuristic && !find_minimal {
            too_expensive = too_expensive.min(isqrt(n) + isqrt(m));
        }

        for d in 0..=max_d {
            if self.use_heuristic && !find_minimal && d > too_expensive {
                if let Some((_, snake)) = &best {
                    return snake_to_partition(snake, xoff, yoff);
                }
            }

            // Forward search.
            // Clamp k so that 0 <= x <= n and 0 <= y <= m stay reachable,
            // then restore parity with d.
            let mut k_min = (-d).max(-m);
            let k_max = d.min(n);
            if (k_min + d) % 2 != 0 {
                k_min += 1;
            }

            let mut k = k_min;
            while k <= k_max {
                let k_pos = offset + k;
                if k_pos - 1 < 0 || k_pos + 1 >= diag_len {
                    k += 2;
                    continue;
                }
                let k_idx = k_pos as usize;

                // Come from k+1 (deletion, moving down) or k-1 (insertion,
                // moving right), whichever reaches further
                let mut x = if k == -d || (k != d && self.fdiag[k_idx - 1] < self.fdiag[k_idx + 1])
                {
                    self.fdiag[k_idx + 1]
                } else {
                    self.fdiag[k_idx - 1] + 1
                };
                let mut y = x - k;

                if y < 0 || y > m || x < 0 || x > n {
                    // Stale neighbors can derive points outside the frame;
                    // record and move on
                    self.fdiag[k_idx] = x;
                    k += 2;
                    continue;
                }

                let snake_start = x;
                while x < n && y < m && self.equal(xoff + x as usize, yoff + y as usize) {
                    x += 1;
                    y += 1;
                }
                let snake_len = x - snake_start;
                self.fdiag[k_idx] = x;

                if self.use_heuristic && snake_len >= SIGNIFICANT_MATCH_LEN {
                    // Long run: score it by length with a bonus for being
                    // near the middle of the frame. Only a strictly higher
                    // score replaces the incumbent.
                    let mid_dist = ((x + y) / 2 - (n + m) / 4).abs();
                    let score = snake_len * 2 - mid_dist;
                    if score > best.as_ref().map_or(0, |(s, _)| *s) {
                        best = Some((score, SnakeInfo { x, y, forward: true }));
                    }
                }

                // When delta is odd, overlap is detected on forward steps
                if delta_odd && k >= delta - (d - 1) && k <= delta + (d - 1) {
                    let b_pos = offset + k - delta;
                    if b_pos >= 0
                        && b_pos < diag_len
                        && self.fdiag[k_idx] >= self.bdiag[b_pos as usize]
                    {
                        return Partition {
                            xmid: xoff + x as usize,
                            ymid: yoff + y as usize,
                            lo_minimal: true,
                            hi_minimal: true,
                        };
                    }
                }

                k += 2;
            }

            // Backward search, mirrored.
            let mut k_min = (-d).max(-m);
            let k_max = d.min(n);
            if (k_min + d) % 2 != 0 {
                k_min += 1;
            }

            let mut k = k_min;
            while k <= k_max {
                let k_pos = offset + k;
                if k_pos - 1 < 0 || k_pos + 1 >= diag_len {
                    k += 2;
                    continue;
                }
                let k_idx = k_pos as usize;

                let mut x = if k == d || (k != -d && self.bdiag[k_idx - 1] < self.bdiag[k_idx + 1])
                {
                    self.bdiag[k_idx - 1]
                } else {
                    self.bdiag[k_idx + 1] - 1
                };
                let mut y = x - k - delta;

                if y < 0 || y > m || x < 0 || x > n {
                    self.bdiag[k_idx] = x;
                    k += 2;
                    continue;
                }

                let snake_start = x;
                while x > 0 && y > 0 && self.equal(xoff + x as usize - 1, yoff + y as usize - 1) {
                    x -= 1;
                    y -= 1;
                }
                let snake_len = snake_start - x;
                self.bdiag[k_idx] = x;

                if self.use_heuristic && snake_len >= SIGNIFICANT_MATCH_LEN {
                    let mid_dist = ((x + y) / 2 - (n + m) / 4).abs();
                    let score = snake_len * 2 - mid_dist;
                    if score > best.as_ref().map_or(0, |(s, _)| *s) {
                        best = Some((score, SnakeInfo { x, y, forward: false }));
                    }
                }

                // When delta is even, overlap is detected on backward steps
                if !delta_odd && k + delta >= -d && k + delta <= d {
                    let f_pos = offset + k + delta;
                    if f_pos >= 0 && f_pos < diag_len {
                        let fx = self.fdiag[f_pos as usize];
                        if fx >= self.bdiag[k_idx] {
                            let fy = fx - (k + delta);
                            // The forward entry may be stale from an outer
                            // recursion frame; only trust in-frame points
                            if fx >= 0 && fx <= n && fy >= 0 && fy <= m {
                                return Partition {
                                    xmid: xoff + fx as usize,
                                    ymid: yoff + fy as usize,
                                    lo_minimal: true,
                                    hi_minimal: true,
                                };
                            }
                        }
                    }
                }

                k += 2;
            }

            // Cost limit, distinct from the expense cutoff above
            if d >= cost_limit {
                if let Some((_, snake)) = &best {
                    return snake_to_partition(snake, xoff, yoff);
                }
            }
        }

        // Search exhausted without overlap; possible with a user-set low
        // cost limit. Use the best snake if any.
        if let Some((_, snake)) = &best {
            return snake_to_partition(snake, xoff, yoff);
        }

        self.greedy_fallback(xoff, xlim, yoff, ylim)
    }

    /// Simple split for when the optimal search fails: match from the
    /// frame start, or concede one element to guarantee progress.
    ///
    /// On a trimmed frame (mismatching first elements) the result never
    /// lands on a frame corner, so recursing on both halves always
    /// shrinks the problem.
    pub(super) fn greedy_fallback(
        &self,
        xoff: usize,
        xlim: usize,
        yoff: usize,
        ylim: usize,
    ) -> Partition {
        let n = xlim - xoff;
        let m = ylim - yoff;

        let mut x = 0;
        let mut y = 0;
        while x < n && y < m && self.equal(xoff + x, yoff + y) {
            x += 1;
            y += 1;
        }

        if x > 0 {
            return Partition {
                xmid: xoff + x,
                ymid: yoff + y,
                lo_minimal: false,
                hi_minimal: false,
            };
        }

        // Nothing matches at the start: advance one step in the longer
        // dimension so recursion terminates
        if n >= m {
            Partition { xmid: xoff + 1, ymid: yoff, lo_minimal: false, hi_minimal: false }
        } else {
            Partition { xmid: xoff, ymid: yoff + 1, lo_minimal: false, hi_minimal: false }
        }
    }
}

/// Converts a captured snake into a partition. A forward snake leaves the
/// upper half unverified, a backward snake the lower half.
fn snake_to_partition(snake: &SnakeInfo, xoff: usize, yoff: usize) -> Partition {
    if snake.forward {
        Partition {
            xmid: xoff + snake.x as usize,
            ymid: yoff + snake.y as usize,
            lo_minimal: true,
            hi_minimal: false,
        }
    } else {
        Partition {
            xmid: xoff + snake.x as usize,
            ymid: yoff + snake.y as usize,
            lo_minimal: false,
            hi_minimal: true,
        }
    }
}

/// Integer square root by Newton's method.
pub(crate) fn isqrt(n: isize) -> isize {
    if n <= 0 {
        return 0;
    }
    if n == 1 {
        return 1;
    }

    let mut x = n;
    let mut y = (x + 1) / 2;
    while y < x {
        x = y;
        y = (x + n / x) / 2;
    }
    x
}
