//! Most frequent value of a lane.
//!
//! ## Purpose
//!
//! This module returns a single modal value per lane.
//!
//! ## Design notes
//!
//! * **Algorithm**: Sort a scratch copy, then scan runs of equal values.
//!   O(n log n) time, O(n) scratch.
//! * **Tie-break**: When several values share the highest count, the
//!   smallest of them wins. Runs are scanned in ascending order and only a
//!   strictly greater count replaces the current best.
//! * **NaN**: A lane containing NaN has a NaN mode.
//!
//! ## Invariants
//!
//! * The result is always an element of the lane (for non-empty, NaN-free input).
//! * Exactly one value is returned, never the full set of modes.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::cmp::Ordering::Equal;
use num_traits::Float;

/// Most frequent value of a lane, smallest on ties; NaN when empty.
pub fn mode<T: Float>(values: &[T]) -> T {
    mode_with_count(values).0
}

/// Most frequent value together with its number of occurrences.
///
/// Returns `(NaN, 0)` for an empty lane.
pub fn mode_with_count<T: Float>(values: &[T]) -> (T, usize) {
    if values.is_empty() {
        return (T::nan(), 0);
    }
    if values.iter().any(|v| v.is_nan()) {
        return (T::nan(), 0);
    }

    let mut sorted: Vec<T> = values.to_vec();
    sorted.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap_or(Equal));

    let mut best = sorted[0];
    let mut best_count = 0usize;
    let mut run_value = sorted[0];
    let mut run_count = 0usize;

    for &v in &sorted {
        if v == run_value {
            run_count += 1;
        } else {
            if run_count > best_count {
                best = run_value;
                best_count = run_count;
            }
            run_value = v;
            run_count = 1;
        }
    }
    if run_count > best_count {
        best = run_value;
        best_count = run_count;
    }

    (best, best_count)
}
