//! Shape and row-major matrix storage.
//!
//! ## Purpose
//!
//! This module reshapes a flat sequence into a two-dimensional matrix and
//! exposes the lanes (rows, columns or the whole buffer) that reductions
//! operate on.
//!
//! ## Design notes
//!
//! * **Row-major**: Element `(r, c)` lives at `r * cols + c`.
//! * **Owned buffer**: The matrix owns a single contiguous `Vec<T>`.
//! * **Column lanes**: Columns are strided, so they are gathered into a new vector.
//!
//! ## Invariants
//!
//! * `data.len() == shape.rows * shape.cols` for every constructed matrix.
//! * Zero-sized dimensions are allowed and produce empty lanes.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt;

// Internal dependencies
use crate::primitives::errors::MatrixStatError;

// ============================================================================
// Shape
// ============================================================================

/// Target dimensions `(rows, cols)` of the reshaped matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    /// Number of rows.
    pub rows: usize,

    /// Number of columns.
    pub cols: usize,
}

impl Shape {
    /// Create a new shape.
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Build a shape from a dimension slice, which must hold exactly two values.
    pub fn from_dims(dims: &[usize]) -> Result<Self, MatrixStatError> {
        match dims {
            [rows, cols] => Ok(Self::new(*rows, *cols)),
            _ => Err(MatrixStatError::InvalidInputType),
        }
    }

    /// Total number of elements, or `None` on overflow.
    pub fn size(&self) -> Option<usize> {
        self.rows.checked_mul(self.cols)
    }
}

impl From<(usize, usize)> for Shape {
    fn from((rows, cols): (usize, usize)) -> Self {
        Self::new(rows, cols)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.rows, self.cols)
    }
}

// ============================================================================
// Matrix
// ============================================================================

/// Dense row-major matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    data: Vec<T>,
    shape: Shape,
}

impl<T: Copy> Matrix<T> {
    /// Reshape a flat buffer into a matrix, filling rows left to right, top to bottom.
    pub fn from_flat(data: Vec<T>, shape: Shape) -> Result<Self, MatrixStatError> {
        if shape.size() != Some(data.len()) {
            return Err(MatrixStatError::ShapeMismatch {
                rows: shape.rows,
                cols: shape.cols,
                len: data.len(),
            });
        }
        Ok(Self { data, shape })
    }

    /// Matrix dimensions.
    #[inline]
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.shape.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.shape.cols
    }

    /// All elements in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Element at `(row, col)`, if in bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        if row < self.shape.rows && col < self.shape.cols {
            Some(self.data[row * self.shape.cols + col])
        } else {
            None
        }
    }

    /// Borrow row `r`.
    ///
    /// # Panics
    ///
    /// Panics if `r >= rows`.
    #[inline]
    pub fn row(&self, r: usize) -> &[T] {
        let start = r * self.shape.cols;
        &self.data[start..start + self.shape.cols]
    }

    /// Gather column `c` into a new vector.
    ///
    /// # Panics
    ///
    /// Panics if `c >= cols`.
    pub fn column(&self, c: usize) -> Vec<T> {
        assert!(c < self.shape.cols, "column {} out of bounds", c);
        (0..self.shape.rows)
            .map(|r| self.data[r * self.shape.cols + c])
            .collect()
    }

    /// Iterate over rows as slices.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..self.shape.rows).map(move |r| self.row(r))
    }

    /// Iterate over columns as gathered vectors.
    pub fn iter_columns(&self) -> impl Iterator<Item = Vec<T>> + '_ {
        (0..self.shape.cols).map(move |c| self.column(c))
    }

    /// Consume the matrix and return the row-major buffer.
    pub fn into_inner(self) -> Vec<T> {
        self.data
    }
}
