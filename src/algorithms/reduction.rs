//! Axis selection and reduction of a matrix.
//!
//! ## Purpose
//!
//! This module applies a [`Statistic`] to every lane selected by an [`Axis`]:
//! the whole matrix, each column, or each row.
//!
//! ## Design notes
//!
//! * **Uniform shape**: `reduce` always returns one value per lane; the whole
//!   matrix is a single lane.
//! * **Fail fast per statistic**: The first failing lane fails the whole
//!   reduction for that statistic.
//!
//! ## Invariants
//!
//! * `Whole` yields exactly 1 value, `Columns` yields `cols`, `Rows` yields `rows`.
//! * A reduction with zero lanes succeeds with an empty vector.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt;
use num_traits::Float;

// Internal dependencies
use crate::algorithms::statistic::Statistic;
use crate::primitives::errors::MatrixStatError;
use crate::primitives::matrix::Matrix;

// ============================================================================
// Axis
// ============================================================================

/// Direction of reduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Axis {
    /// Reduce all elements to one scalar (`axis = None`).
    #[default]
    Whole,

    /// Reduce each column independently (`axis = 0`).
    Columns,

    /// Reduce each row independently (`axis = 1`).
    Rows,
}

impl Axis {
    /// Parse a numeric axis selector: `None`, `Some(0)` or `Some(1)`.
    pub fn from_index(axis: Option<i64>) -> Result<Self, MatrixStatError> {
        match axis {
            None => Ok(Self::Whole),
            Some(0) => Ok(Self::Columns),
            Some(1) => Ok(Self::Rows),
            Some(other) => Err(MatrixStatError::InvalidAxis(other)),
        }
    }

    /// Numeric selector of this axis.
    pub const fn index(&self) -> Option<usize> {
        match self {
            Self::Whole => None,
            Self::Columns => Some(0),
            Self::Rows => Some(1),
        }
    }

    /// Whether this axis produces a scalar per statistic.
    #[inline]
    pub const fn is_whole(&self) -> bool {
        matches!(self, Self::Whole)
    }

    /// Number of lanes this axis produces for `matrix`.
    pub fn lane_count<T: Copy>(&self, matrix: &Matrix<T>) -> usize {
        match self {
            Self::Whole => 1,
            Self::Columns => matrix.cols(),
            Self::Rows => matrix.rows(),
        }
    }

    /// Reduce every lane of `matrix` with `statistic`.
    pub fn reduce<T: Float>(
        &self,
        matrix: &Matrix<T>,
        statistic: Statistic,
    ) -> Result<Vec<T>, MatrixStatError> {
        match self {
            Self::Whole => Ok(vec![statistic.compute(matrix.as_slice())?]),
            Self::Columns => matrix
                .iter_columns()
                .map(|col| statistic.compute(&col))
                .collect(),
            Self::Rows => matrix
                .iter_rows()
                .map(|row| statistic.compute(row))
                .collect(),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Whole => f.write_str("whole matrix"),
            Self::Columns => f.write_str("columns (axis 0)"),
            Self::Rows => f.write_str("rows (axis 1)"),
        }
    }
}
