//! Flat list output.
//!
//! Every statistic contributes one `(name, value)` pair per produced value:
//! a scalar or error gives one pair, a per-lane sequence gives one pair per
//! element in lane order. Statistic order follows the summary.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::output::{StatSummary, StatValue};

/// One `(statistic name, value)` pair. The value is never a `Sequence`.
pub type ListEntry<T> = (&'static str, StatValue<T>);

/// Flatten a summary into `(name, value)` pairs.
pub fn to_pairs<T: Float>(summary: &StatSummary<T>) -> Vec<ListEntry<T>> {
    let mut pairs = Vec::new();
    for (statistic, value) in summary.iter() {
        let name = statistic.name();
        match value {
            StatValue::Sequence(values) => {
                pairs.extend(values.iter().map(|&v| (name, StatValue::Scalar(v))));
            }
            other => pairs.push((name, other.clone())),
        }
    }
    pairs
}
