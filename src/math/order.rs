//! Order statistics: maximum, minimum, peak-to-peak and median.
//!
//! ## Purpose
//!
//! This module computes the order-based statistics of a single lane.
//!
//! ## Design notes
//!
//! * **Algorithm**: Median uses Quickselect (`select_nth_unstable_by`) for O(n)
//!   selection on a scratch copy.
//! * **NaN**: Any NaN in the lane propagates to the result.
//! * **Identity**: `max` and `min` have no identity, so an empty lane is an error.
//!
//! ## Invariants
//!
//! * `min <= median <= max` for finite, non-empty input.
//! * `peak_to_peak >= 0` for finite, non-empty input.
//!
//! ## Non-goals
//!
//! * This module does not provide quantiles other than the median.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::cmp::Ordering::Equal;
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::MatrixStatError;

// ============================================================================
// Extremes
// ============================================================================

/// Largest value of a lane.
pub fn max<T: Float>(values: &[T]) -> Result<T, MatrixStatError> {
    extreme(values, "maximum", |a, b| a > b)
}

/// Smallest value of a lane.
pub fn min<T: Float>(values: &[T]) -> Result<T, MatrixStatError> {
    extreme(values, "minimum", |a, b| a < b)
}

/// Peak-to-peak distance `max - min` of a lane.
pub fn peak_to_peak<T: Float>(values: &[T]) -> Result<T, MatrixStatError> {
    let hi = max(values)?;
    let lo = min(values)?;
    Ok(hi - lo)
}

fn extreme<T: Float>(
    values: &[T],
    operation: &'static str,
    better: impl Fn(T, T) -> bool,
) -> Result<T, MatrixStatError> {
    let (&first, rest) = values
        .split_first()
        .ok_or(MatrixStatError::ZeroSizeReduction { operation })?;

    let mut best = first;
    if best.is_nan() {
        return Ok(best);
    }
    for &v in rest {
        if v.is_nan() {
            return Ok(v);
        }
        if better(v, best) {
            best = v;
        }
    }
    Ok(best)
}

// ============================================================================
// Median
// ============================================================================

/// Median of a lane; NaN when empty or when the lane contains NaN.
///
/// Even-length lanes return the mean of the two middle values.
pub fn median<T: Float>(values: &[T]) -> T {
    if values.is_empty() || values.iter().any(|v| v.is_nan()) {
        return T::nan();
    }
    let mut scratch: Vec<T> = values.to_vec();
    median_inplace(&mut scratch)
}

/// Median via Quickselect. Reorders `vals`.
#[inline]
fn median_inplace<T: Float>(vals: &mut [T]) -> T {
    let n = vals.len();
    let mid = n / 2;

    vals.select_nth_unstable_by(mid, |a, b| a.partial_cmp(b).unwrap_or(Equal));
    let upper = vals[mid];

    if n % 2 == 0 {
        // Largest value of the lower half
        let lower = vals[..mid].iter().copied().fold(T::neg_infinity(), T::max);
        (lower + upper) / (T::one() + T::one())
    } else {
        upper
    }
}
