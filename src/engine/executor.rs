//! Execution engine for matrix statistics.
//!
//! ## Purpose
//!
//! This module runs every statistic over a reshaped matrix and assembles the
//! ordered [`StatSummary`]. It is the point where per-statistic failures are
//! caught and stored as data.
//!
//! ## Design notes
//!
//! * **Isolation**: Each statistic is reduced independently. An error from
//!   one reduction becomes `StatValue::Error` and the loop continues.
//! * **Shape of values**: `Axis::Whole` produces scalars; any other axis
//!   produces sequences of the lane count.
//! * **Logging**: Failures are reported through `log::debug!`; no logger is
//!   installed by this crate.
//!
//! ## Invariants
//!
//! * The summary holds exactly the requested statistics, in the requested order.
//! * This function never returns an error.
//!
//! ## Non-goals
//!
//! * This module does not validate input data (handled by `validator`).
//! * This module does not encode results (handled by `formats`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::ToString;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::string::ToString;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::reduction::Axis;
use crate::algorithms::statistic::Statistic;
use crate::engine::output::{StatSummary, StatValue};
use crate::primitives::errors::MatrixStatError;
use crate::primitives::matrix::Matrix;

// ============================================================================
// Executor
// ============================================================================

/// Runs a set of statistics over a matrix.
#[derive(Debug, Clone, Copy)]
pub struct StatExecutor<'a> {
    statistics: &'a [Statistic],
}

impl Default for StatExecutor<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl StatExecutor<'static> {
    /// Executor over all nine statistics in canonical order.
    pub const fn new() -> Self {
        Self {
            statistics: &Statistic::ALL,
        }
    }
}

impl<'a> StatExecutor<'a> {
    /// Executor over a custom list of statistics.
    pub const fn with_statistics(statistics: &'a [Statistic]) -> Self {
        Self { statistics }
    }

    /// Statistics this executor computes.
    pub fn statistics(&self) -> &'a [Statistic] {
        self.statistics
    }

    /// Reduce `matrix` along `axis` for every statistic.
    pub fn run<T: Float>(&self, matrix: &Matrix<T>, axis: Axis) -> StatSummary<T> {
        log::trace!(
            "computing {} statistics over {} matrix along {}",
            self.statistics.len(),
            matrix.shape(),
            axis
        );

        let entries: Vec<(Statistic, StatValue<T>)> = self
            .statistics
            .iter()
            .map(|&statistic| (statistic, Self::evaluate(matrix, axis, statistic)))
            .collect();

        StatSummary::new(matrix.shape(), axis, entries)
    }

    /// Reduce one statistic, converting a failure into `StatValue::Error`.
    pub fn evaluate<T: Float>(matrix: &Matrix<T>, axis: Axis, statistic: Statistic) -> StatValue<T> {
        match Self::try_evaluate(matrix, axis, statistic) {
            Ok(value) => value,
            Err(err) => {
                log::debug!("statistic '{}' failed: {}", statistic, err);
                StatValue::Error(err.to_string())
            }
        }
    }

    fn try_evaluate<T: Float>(
        matrix: &Matrix<T>,
        axis: Axis,
        statistic: Statistic,
    ) -> Result<StatValue<T>, MatrixStatError> {
        let mut values = axis.reduce(matrix, statistic)?;
        if axis.is_whole() {
            // Whole-matrix reduction always yields exactly one lane
            let value = values.pop().unwrap_or_else(T::nan);
            Ok(StatValue::Scalar(value))
        } else {
            Ok(StatValue::Sequence(values))
        }
    }
}
