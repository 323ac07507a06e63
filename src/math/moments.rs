//! Sum, mean, population variance and standard deviation.
//!
//! ## Purpose
//!
//! This module computes the moment-based statistics of a single lane.
//!
//! ## Design notes
//!
//! * **Summation**: Pairwise. Lanes shorter than 8 are summed left to right;
//!   lanes up to 128 use eight interleaved accumulators; longer lanes split
//!   at a multiple of 8 near the middle and recurse. Rounding matches
//!   NumPy's `sum` over a contiguous lane.
//! * **Variance**: Two-pass (mean first, then squared deviations) and divided
//!   by `N`, not `N - 1`.
//! * **Generics**: All functions are generic over `Float`.
//!
//! ## Invariants
//!
//! * `sum(&[]) == 0`.
//! * `mean`, `variance` and `std_dev` of an empty lane are NaN.
//! * `variance >= 0` for finite input.
//!
//! ## Non-goals
//!
//! * This module does not provide sample (`N - 1`) or weighted variants.

// External dependencies
use num_traits::Float;

// ============================================================================
// Helpers
// ============================================================================

/// Lane length as a float.
#[inline]
pub(crate) fn count<T: Float>(n: usize) -> T {
    T::from(n).unwrap_or_else(T::nan)
}

/// Accumulators in a pairwise block.
const LANES: usize = 8;

/// Longest run summed without splitting.
const BLOCK: usize = 128;

/// Pairwise sum of `term(v)` over `values`.
fn pairwise<T: Float, F: Fn(T) -> T>(values: &[T], term: &F) -> T {
    let n = values.len();

    if n < LANES {
        values.iter().fold(T::zero(), |acc, &v| acc + term(v))
    } else if n <= BLOCK {
        let mut r = [T::zero(); LANES];
        for (acc, &v) in r.iter_mut().zip(values) {
            *acc = term(v);
        }

        let whole = n - n % LANES;
        for chunk in values[LANES..whole].chunks_exact(LANES) {
            for (acc, &v) in r.iter_mut().zip(chunk) {
                *acc = *acc + term(v);
            }
        }

        let mut total = ((r[0] + r[1]) + (r[2] + r[3])) + ((r[4] + r[5]) + (r[6] + r[7]));
        for &v in &values[whole..] {
            total = total + term(v);
        }
        total
    } else {
        let mut half = n / 2;
        half -= half % LANES;
        pairwise(&values[..half], term) + pairwise(&values[half..], term)
    }
}

// ============================================================================
// Moments
// ============================================================================

/// Pairwise sum of a lane.
pub fn sum<T: Float>(values: &[T]) -> T {
    pairwise(values, &|v| v)
}

/// Arithmetic mean of a lane; NaN when empty.
pub fn mean<T: Float>(values: &[T]) -> T {
    if values.is_empty() {
        return T::nan();
    }
    sum(values) / count(values.len())
}

/// Population variance of a lane; NaN when empty.
///
/// # Formula
///
/// ```text
/// var = sum((x_i - mean)^2) / N
/// ```
pub fn variance<T: Float>(values: &[T]) -> T {
    if values.is_empty() {
        return T::nan();
    }

    let m = mean(values);
    let squares = pairwise(values, &|v| {
        let d = v - m;
        d * d
    });

    squares / count(values.len())
}

/// Population standard deviation of a lane; NaN when empty.
#[inline]
pub fn std_dev<T: Float>(values: &[T]) -> T {
    variance(values).sqrt()
}
