//! Input validation for matrix statistics calls.
//!
//! ## Purpose
//!
//! This module provides the structural checks that run before any statistic
//! is computed. A failure here aborts the whole call.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Fixed order**: shape type, shape/length product, axis, output format.
//! * **Parse, don't re-check**: Axis and format are parsed into closed enums
//!   once, so later layers match on them exhaustively.
//!
//! ## Key concepts
//!
//! * **Type errors**: missing shape, or a shape that is not two integers.
//! * **Value errors**: shape product mismatch, unknown axis, unknown format.
//!
//! ## Invariants
//!
//! * A validated `Shape` satisfies `rows * cols == len` for the validated input.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not flatten or reshape input data.
//! * This module does not inspect element values (NaN and infinities are allowed).

// Internal dependencies
use crate::algorithms::reduction::Axis;
use crate::engine::output::OutputFormat;
use crate::primitives::errors::MatrixStatError;
use crate::primitives::matrix::Shape;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for matrix statistics calls.
///
/// Provides static methods for each structural check. All methods fail fast
/// upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Structural Checks
    // ========================================================================

    /// Check 1: the shape must be present and hold exactly two integers.
    pub fn validate_shape(shape: Option<&[usize]>) -> Result<Shape, MatrixStatError> {
        let dims = shape.ok_or(MatrixStatError::InvalidInputType)?;
        Shape::from_dims(dims)
    }

    /// Check 2: `rows * cols` must equal the flattened input length.
    pub fn validate_length(shape: Shape, len: usize) -> Result<(), MatrixStatError> {
        if shape.size() != Some(len) {
            return Err(MatrixStatError::ShapeMismatch {
                rows: shape.rows,
                cols: shape.cols,
                len,
            });
        }
        Ok(())
    }

    /// Check 3: the axis must be 0, 1 or absent.
    pub fn validate_axis(axis: Option<i64>) -> Result<Axis, MatrixStatError> {
        Axis::from_index(axis)
    }

    /// Check 4: the output format must be one of the supported names.
    pub fn validate_output_format(name: &str) -> Result<OutputFormat, MatrixStatError> {
        name.parse()
    }

    // ========================================================================
    // Combined
    // ========================================================================

    /// Run all four checks in order against an already flattened input length.
    pub fn validate_call(
        len: usize,
        shape: Option<&[usize]>,
        axis: Option<i64>,
        output_format: &str,
    ) -> Result<(Shape, Axis, OutputFormat), MatrixStatError> {
        let shape = Self::validate_shape(shape)?;
        Self::validate_length(shape, len)?;
        let axis = Self::validate_axis(axis)?;
        let format = Self::validate_output_format(output_format)?;
        Ok((shape, axis, format))
    }

    // ========================================================================
    // Builder Validation
    // ========================================================================

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), MatrixStatError> {
        if let Some(param) = duplicate_param {
            return Err(MatrixStatError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
