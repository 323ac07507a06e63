//! High-level API for matrix statistics.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points:
//!
//! * A fluent builder (`MatrixStats::new().shape(..).axis(..).build()?`) for
//!   typed, reusable configurations.
//! * [`matrix_stat_summary`], which takes the loosely typed selectors
//!   (`Option<&[usize]>`, `Option<i64>`, `&str`) and validates them in order.
//! * [`summary_from_json`], which accepts an untyped JSON array.
//!
//! ## Design notes
//!
//! * **Validate once**: Axis and output format become closed enums at the
//!   entry point; everything downstream matches on them exhaustively.
//! * **Ordered checks**: shape type, shape/length product, axis, output format.
//! * **Duplicate detection**: Setting a builder parameter twice fails at `build()`.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`MatrixStatsBuilder`] via `MatrixStats::new()`.
//! 2. Chain configuration methods (`.shape()`, `.axis()`, `.output_format()`).
//! 3. Call `.build()` to validate the configuration.
//! 4. Call `.compute(&data)` (flat) or `.compute_nested(&elements)`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;
use serde_json::Value;

// Internal dependencies
use crate::engine::executor::StatExecutor;
use crate::engine::validator::Validator;
use crate::primitives::input::{elements_from_json, flatten};

// Publicly re-exported types
pub use crate::algorithms::reduction::Axis;
pub use crate::algorithms::statistic::Statistic;
pub use crate::engine::output::{OutputFormat, StatSummary, StatValue};
pub use crate::formats::json::decode_json;
pub use crate::formats::{Cell, ListEntry, Output, Table};
pub use crate::primitives::errors::{ErrorKind, MatrixStatError};
pub use crate::primitives::input::Element;
pub use crate::primitives::matrix::{Matrix, Shape};

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a matrix statistics evaluation.
#[derive(Debug, Clone, Default)]
pub struct MatrixStatsBuilder {
    /// Target `(rows, cols)`. Required.
    pub shape: Option<Shape>,

    /// Reduction axis (default: whole matrix).
    pub axis: Option<Axis>,

    /// Output encoding (default: dict).
    pub output_format: Option<OutputFormat>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl MatrixStatsBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target shape `(rows, cols)`.
    pub fn shape(mut self, rows: usize, cols: usize) -> Self {
        if self.shape.is_some() {
            self.duplicate_param = Some("shape");
        }
        self.shape = Some(Shape::new(rows, cols));
        self
    }

    /// Set the reduction axis.
    pub fn axis(mut self, axis: Axis) -> Self {
        if self.axis.is_some() {
            self.duplicate_param = Some("axis");
        }
        self.axis = Some(axis);
        self
    }

    /// Set the output encoding.
    pub fn output_format(mut self, format: OutputFormat) -> Self {
        if self.output_format.is_some() {
            self.duplicate_param = Some("output_format");
        }
        self.output_format = Some(format);
        self
    }

    /// Validate the configuration.
    ///
    /// Fails with `DuplicateParameter` if a setter was called twice and with
    /// `InvalidInputType` if no shape was given.
    pub fn build(self) -> Result<MatrixStats, MatrixStatError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;
        let shape = self.shape.ok_or(MatrixStatError::InvalidInputType)?;

        Ok(MatrixStats {
            shape,
            axis: self.axis.unwrap_or_default(),
            output_format: self.output_format.unwrap_or_default(),
        })
    }
}

// ============================================================================
// Configured Evaluator
// ============================================================================

/// Validated configuration, reusable across inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatrixStats {
    shape: Shape,
    axis: Axis,
    output_format: OutputFormat,
}

impl MatrixStats {
    /// Create a new builder (alias of [`MatrixStatsBuilder::new`]).
    #[allow(clippy::new_ret_no_self)]
    pub fn new() -> MatrixStatsBuilder {
        MatrixStatsBuilder::new()
    }

    /// Configured shape.
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Configured axis.
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Configured output format.
    pub fn output_format(&self) -> OutputFormat {
        self.output_format
    }

    /// Compute all statistics over a flat input and encode them.
    pub fn compute<T: Float>(&self, input: &[T]) -> Result<Output<T>, MatrixStatError> {
        let summary = self.summarize(input)?;
        Output::encode(summary, self.output_format)
    }

    /// Flatten one level of nesting, then compute and encode.
    pub fn compute_nested<T: Float>(
        &self,
        input: &[Element<T>],
    ) -> Result<Output<T>, MatrixStatError> {
        let flat = flatten(input);
        self.compute(&flat)
    }

    /// Compute all statistics over a flat input without encoding.
    pub fn summarize<T: Float>(&self, input: &[T]) -> Result<StatSummary<T>, MatrixStatError> {
        Validator::validate_length(self.shape, input.len())?;
        let matrix = Matrix::from_flat(input.to_vec(), self.shape)?;
        Ok(StatExecutor::new().run(&matrix, self.axis))
    }
}

// ============================================================================
// Dynamic Entry Points
// ============================================================================

/// Compute the nine statistics of `input` reshaped to `shape`.
///
/// * `input`: numbers and/or sequences of numbers, flattened one level.
/// * `shape`: must be `Some` and hold exactly two dimensions.
/// * `axis`: `None` (whole matrix), `Some(0)` (columns) or `Some(1)` (rows).
/// * `output_format`: `"dict"`, `"list"`, `"json"` or `"dataframe"`.
///
/// # Errors
///
/// Structural errors, checked in this order: `InvalidInputType`,
/// `ShapeMismatch`, `InvalidAxis`, `InvalidOutputFormat`. A per-axis
/// `"dataframe"` whose columns cannot be aligned fails with `TableConstruction`.
/// Failing statistics never produce an error; they appear as
/// `StatValue::Error` inside the output.
pub fn matrix_stat_summary<T: Float>(
    input: &[Element<T>],
    shape: Option<&[usize]>,
    axis: Option<i64>,
    output_format: &str,
) -> Result<Output<T>, MatrixStatError> {
    let flat: Vec<T> = flatten(input);
    let (shape, axis, format) =
        Validator::validate_call(flat.len(), shape, axis, output_format)?;

    let matrix = Matrix::from_flat(flat, shape)?;
    let summary = StatExecutor::new().run(&matrix, axis);
    Output::encode(summary, format)
}

/// [`matrix_stat_summary`] over an untyped JSON array.
///
/// A non-array `input` fails with `InvalidInputType`; an element that is not a
/// number (or a sequence of numbers) fails with `NonNumericElement`.
pub fn summary_from_json(
    input: &Value,
    shape: Option<&[usize]>,
    axis: Option<i64>,
    output_format: &str,
) -> Result<Output<f64>, MatrixStatError> {
    let elements = elements_from_json(input)?;
    matrix_stat_summary(&elements, shape, axis, output_format)
}
