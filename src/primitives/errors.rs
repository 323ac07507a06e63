//! Error types for matrix statistics.
//!
//! ## Purpose
//!
//! This module defines the single error enum returned by every fallible
//! operation in the crate, together with a coarse classification that
//! separates malformed calls from computational failures.
//!
//! ## Design notes
//!
//! * **Two tiers**: Structural errors abort a call. Computational errors
//!   (e.g. reducing an empty lane without an identity) are produced by the
//!   math layer and turned into string values by the executor.
//! * **Stable messages**: `Display` output is part of the contract and is
//!   asserted verbatim in tests.
//! * **no_std**: `std::error::Error` is only implemented with the `std` feature.
//!
//! ## Key concepts
//!
//! * **ErrorKind::Type**: the input is not a sequence or the shape is not two integers.
//! * **ErrorKind::Value**: well-typed arguments with an invalid value.
//! * **ErrorKind::Computation**: raised while reducing one statistic.
//! * **ErrorKind::Configuration**: builder misuse.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt;

/// Coarse classification of a [`MatrixStatError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed input sequence or shape.
    Type,

    /// Shape/length mismatch, unknown axis or unknown output format.
    Value,

    /// Failure while reducing a single statistic.
    Computation,

    /// Invalid builder usage.
    Configuration,
}

/// Errors produced while validating, reducing or encoding matrix statistics.
#[derive(Debug, Clone, PartialEq)]
pub enum MatrixStatError {
    /// Input is not a sequence, or the shape is missing or not two integers.
    InvalidInputType,

    /// `rows * cols` does not equal the number of flattened elements.
    ShapeMismatch {
        /// Requested number of rows.
        rows: usize,
        /// Requested number of columns.
        cols: usize,
        /// Number of flattened input elements.
        len: usize,
    },

    /// Axis selector other than 0, 1 or none.
    InvalidAxis(i64),

    /// Output format name outside the supported set.
    InvalidOutputFormat(String),

    /// A JSON input element is neither a number nor a sequence of numbers.
    NonNumericElement {
        /// Position in the flattened input.
        index: usize,
    },

    /// Reduction without an identity applied to an empty lane.
    ZeroSizeReduction {
        /// Name of the reduction (`maximum`, `minimum`).
        operation: &'static str,
    },

    /// A table could not be assembled from the computed columns.
    TableConstruction(String),

    /// Encoding the results as JSON failed.
    Serialization(String),

    /// A builder parameter was set more than once.
    DuplicateParameter {
        /// Name of the parameter.
        parameter: &'static str,
    },
}

impl MatrixStatError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInputType | Self::NonNumericElement { .. } => ErrorKind::Type,
            Self::ShapeMismatch { .. } | Self::InvalidAxis(_) | Self::InvalidOutputFormat(_) => {
                ErrorKind::Value
            }
            Self::ZeroSizeReduction { .. }
            | Self::TableConstruction(_)
            | Self::Serialization(_) => ErrorKind::Computation,
            Self::DuplicateParameter { .. } => ErrorKind::Configuration,
        }
    }
}

impl fmt::Display for MatrixStatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInputType => write!(
                f,
                "Input must be a list and shape must be a tuple of two integers"
            ),
            Self::ShapeMismatch { .. } => {
                write!(f, "Product of shape must match number of elements in list")
            }
            Self::InvalidAxis(_) => write!(f, "Axis value must be either 0, 1, or None"),
            Self::InvalidOutputFormat(_) => write!(
                f,
                "Output format must either be one of: 'dict','json','dataframe','list'"
            ),
            Self::NonNumericElement { index } => {
                write!(f, "Input element at position {} is not numeric", index)
            }
            Self::ZeroSizeReduction { operation } => write!(
                f,
                "zero-size array to reduction operation {} which has no identity",
                operation
            ),
            Self::TableConstruction(msg) => write!(f, "{}", msg),
            Self::Serialization(msg) => write!(f, "Serialization failed: {}", msg),
            Self::DuplicateParameter { parameter } => write!(
                f,
                "Parameter '{}' was set multiple times. Each parameter can only be configured once.",
                parameter
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MatrixStatError {}
