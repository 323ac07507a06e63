//! The nine descriptive statistics.
//!
//! ## Purpose
//!
//! This module names the supported statistics, fixes their canonical order,
//! and dispatches a lane to the matching math routine.
//!
//! ## Design notes
//!
//! * **Closed set**: `Statistic` is an enum; adding a statistic is a compile-time change.
//! * **Canonical order**: `Statistic::ALL` drives result, list and table ordering.
//! * **Fallible**: Only `max`, `min` and `range` can fail (empty lane).
//!
//! ## Key concepts
//!
//! * **Lane**: a row, a column or the whole matrix, flattened to a slice.
//!
//! ## Invariants
//!
//! * `ALL` lists every variant exactly once, in the order
//!   mean, var, std, max, min, sum, median, range, mode.
//! * `name()` and `from_name()` are inverses.

// External dependencies
use core::fmt;
use num_traits::Float;

// Internal dependencies
use crate::math::{mode, moments, order};
use crate::primitives::errors::MatrixStatError;

// ============================================================================
// Statistic
// ============================================================================

/// One of the computed descriptive statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Statistic {
    /// Arithmetic mean.
    Mean,

    /// Population variance.
    Var,

    /// Population standard deviation.
    Std,

    /// Maximum.
    Max,

    /// Minimum.
    Min,

    /// Sum.
    Sum,

    /// Median (mean of the two middle values for even counts).
    Median,

    /// Peak-to-peak (`max - min`).
    Range,

    /// Most frequent value, smallest on ties.
    Mode,
}

impl Statistic {
    /// Every statistic in canonical output order.
    pub const ALL: [Statistic; 9] = [
        Statistic::Mean,
        Statistic::Var,
        Statistic::Std,
        Statistic::Max,
        Statistic::Min,
        Statistic::Sum,
        Statistic::Median,
        Statistic::Range,
        Statistic::Mode,
    ];

    /// Key used in every output format.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Mean => "mean",
            Self::Var => "var",
            Self::Std => "std",
            Self::Max => "max",
            Self::Min => "min",
            Self::Sum => "sum",
            Self::Median => "median",
            Self::Range => "range",
            Self::Mode => "mode",
        }
    }

    /// Look up a statistic by its output key.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.name() == name)
    }

    /// Reduce one lane to a single value.
    pub fn compute<T: Float>(&self, lane: &[T]) -> Result<T, MatrixStatError> {
        match self {
            Self::Mean => Ok(moments::mean(lane)),
            Self::Var => Ok(moments::variance(lane)),
            Self::Std => Ok(moments::std_dev(lane)),
            Self::Max => order::max(lane),
            Self::Min => order::min(lane),
            Self::Sum => Ok(moments::sum(lane)),
            Self::Median => Ok(order::median(lane)),
            Self::Range => order::peak_to_peak(lane),
            Self::Mode => Ok(mode::mode(lane)),
        }
    }
}

impl fmt::Display for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
