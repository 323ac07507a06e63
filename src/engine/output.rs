//! Computed statistics and their values.
//!
//! ## Purpose
//!
//! This module defines the result of one evaluation: an ordered mapping from
//! statistic to value, where each value is a scalar, a per-lane sequence, or
//! the error message of a failed reduction. It also defines the closed set of
//! output formats the result can be encoded in.
//!
//! ## Design notes
//!
//! * **Error as data**: A failed statistic is stored as `StatValue::Error`
//!   next to the successful ones.
//! * **Ordered**: Entries keep `Statistic::ALL` order; serialization and
//!   display follow it.
//! * **Native values**: Values are plain `T` and `Vec<T>`.
//! * **Serialization**: `Serialize` is implemented by hand so that the
//!   summary encodes as a flat JSON object (`name -> number | array | string`).
//!
//! ## Invariants
//!
//! * Every statistic appears at most once.
//! * With `Axis::Whole`, no value is a `Sequence`.
//! * With a per-lane axis, every non-error value is a `Sequence` of the lane count.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::string::String;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt;
use core::str::FromStr;
use num_traits::Float;
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

// Internal dependencies
use crate::algorithms::reduction::Axis;
use crate::algorithms::statistic::Statistic;
use crate::primitives::errors::MatrixStatError;
use crate::primitives::matrix::Shape;

// ============================================================================
// OutputFormat
// ============================================================================

/// Encoding of the computed statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    /// Ordered mapping from statistic name to value.
    #[default]
    Dict,

    /// Flat sequence of `(name, value)` pairs.
    List,

    /// JSON object string.
    Json,

    /// Table with statistic rows (whole matrix) or statistic columns (per lane).
    DataFrame,
}

impl OutputFormat {
    /// Every supported format.
    pub const ALL: [OutputFormat; 4] = [
        OutputFormat::Dict,
        OutputFormat::List,
        OutputFormat::Json,
        OutputFormat::DataFrame,
    ];

    /// Name accepted by `FromStr`.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Dict => "dict",
            Self::List => "list",
            Self::Json => "json",
            Self::DataFrame => "dataframe",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = MatrixStatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|f| f.name() == s)
            .ok_or_else(|| MatrixStatError::InvalidOutputFormat(s.into()))
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// StatValue
// ============================================================================

/// Value of a single statistic.
#[derive(Debug, Clone, PartialEq)]
pub enum StatValue<T> {
    /// Whole-matrix result.
    Scalar(T),

    /// One value per row or per column.
    Sequence(Vec<T>),

    /// Message of the error raised while reducing this statistic.
    Error(String),
}

impl<T: Copy> StatValue<T> {
    /// The scalar value, if this is a `Scalar`.
    pub fn as_scalar(&self) -> Option<T> {
        match self {
            Self::Scalar(v) => Some(*v),
            _ => None,
        }
    }

    /// The per-lane values, if this is a `Sequence`.
    pub fn as_sequence(&self) -> Option<&[T]> {
        match self {
            Self::Sequence(values) => Some(values),
            _ => None,
        }
    }

    /// The error message, if this statistic failed.
    pub fn as_error(&self) -> Option<&str> {
        match self {
            Self::Error(msg) => Some(msg),
            _ => None,
        }
    }

    /// Whether this statistic failed.
    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

/// Widen a value for display and serialization.
#[inline]
pub(crate) fn to_f64<T: Float>(value: T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

impl<T: Float> Serialize for StatValue<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Scalar(v) => serializer.serialize_f64(to_f64(*v)),
            Self::Sequence(values) => {
                let mut seq = serializer.serialize_seq(Some(values.len()))?;
                for v in values {
                    seq.serialize_element(&to_f64(*v))?;
                }
                seq.end()
            }
            Self::Error(msg) => serializer.serialize_str(msg),
        }
    }
}

impl<T: Float> fmt::Display for StatValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(v) => write!(f, "{}", to_f64(*v)),
            Self::Sequence(values) => {
                write!(f, "[")?;
                for (i, v) in values.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", to_f64(*v))?;
                }
                write!(f, "]")
            }
            Self::Error(msg) => write!(f, "{}", msg),
        }
    }
}

// ============================================================================
// StatSummary
// ============================================================================

/// Ordered results of one evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct StatSummary<T> {
    shape: Shape,
    axis: Axis,
    entries: Vec<(Statistic, StatValue<T>)>,
}

impl<T: Copy> StatSummary<T> {
    /// Assemble a summary from entries in canonical order.
    pub(crate) fn new(shape: Shape, axis: Axis, entries: Vec<(Statistic, StatValue<T>)>) -> Self {
        Self {
            shape,
            axis,
            entries,
        }
    }

    /// Shape of the reduced matrix.
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Axis the statistics were reduced along.
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Value of `statistic`.
    pub fn get(&self, statistic: Statistic) -> Option<&StatValue<T>> {
        self.entries
            .iter()
            .find(|(s, _)| *s == statistic)
            .map(|(_, v)| v)
    }

    /// Value of the statistic with output key `name`.
    pub fn get_by_name(&self, name: &str) -> Option<&StatValue<T>> {
        Statistic::from_name(name).and_then(|s| self.get(s))
    }

    /// Iterate over `(statistic, value)` in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Statistic, &StatValue<T>)> + '_ {
        self.entries.iter().map(|(s, v)| (*s, v))
    }

    /// Statistics whose reduction failed.
    pub fn failures(&self) -> impl Iterator<Item = (Statistic, &str)> + '_ {
        self.entries
            .iter()
            .filter_map(|(s, v)| v.as_error().map(|msg| (*s, msg)))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the summary holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consume the summary and return its entries.
    pub fn into_entries(self) -> Vec<(Statistic, StatValue<T>)> {
        self.entries
    }
}

impl<T: Float> Serialize for StatSummary<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (statistic, value) in &self.entries {
            map.serialize_entry(statistic.name(), value)?;
        }
        map.end()
    }
}

impl<T: Float> fmt::Display for StatSummary<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Shape: {}", self.shape)?;
        writeln!(f, "  Axis: {}", self.axis)?;
        writeln!(f)?;
        writeln!(f, "Statistics:")?;
        for (statistic, value) in &self.entries {
            writeln!(f, "  {:<8} {}", statistic.name(), value)?;
        }
        Ok(())
    }
}
