//! # matrix-stats: Descriptive Statistics over a Reshaped Matrix
//!
//! Compute a fixed set of descriptive statistics over a numeric sequence
//! reshaped into a two-dimensional matrix, reduced over the whole matrix,
//! per column or per row, and returned as an ordered mapping, a flat list of
//! pairs, a JSON string or a labelled table.
//!
//! ## What is computed?
//!
//! Nine statistics, always in this order:
//!
//! | Key      | Statistic                                         |
//! |----------|---------------------------------------------------|
//! | `mean`   | Arithmetic mean                                   |
//! | `var`    | Population variance (divides by N)                |
//! | `std`    | Population standard deviation                     |
//! | `max`    | Maximum                                           |
//! | `min`    | Minimum                                           |
//! | `sum`    | Sum                                               |
//! | `median` | Median (mean of the two middle values when even)  |
//! | `range`  | Peak-to-peak, `max - min`                         |
//! | `mode`   | Most frequent value, smallest value on ties       |
//!
//! Each statistic is computed independently. If one reduction fails (for
//! example `max` of an empty column) its value is the error message and every
//! other statistic is still returned.
//!
//! ## Quick Start
//!
//! ### Typical Use
//!
//! ```rust
//! use matrix_stats::prelude::*;
//!
//! let data = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
//!
//! // Configure: reshape to 2 rows x 3 columns, reduce the whole matrix
//! let stats = MatrixStats::new().shape(2, 3).build()?;
//!
//! let output = stats.compute(&data)?;
//! println!("{}", output);
//! # let summary = output.as_dict().unwrap();
//! # assert_eq!(summary.get(Statistic::Mean), Some(&StatValue::Scalar(3.5)));
//! # Result::<(), MatrixStatError>::Ok(())
//! ```
//!
//! ```text
//! Summary:
//!   Shape: (2, 3)
//!   Axis: whole matrix
//!
//! Statistics:
//!   mean     3.5
//!   var      2.9166666666666665
//!   std      1.707825127659933
//!   max      6
//!   min      1
//!   sum      21
//!   median   3.5
//!   range    5
//!   mode     1
//! ```
//!
//! ### Loosely Typed Entry Point
//!
//! [`matrix_stat_summary`](crate::prelude::matrix_stat_summary) accepts the
//! selectors in their raw form and validates them in a fixed order:
//!
//! ```rust
//! use matrix_stats::prelude::*;
//!
//! // One level of nesting is flattened before reshaping
//! let input: Vec<Element<f64>> = vec![vec![1.0, 2.0, 3.0].into(), vec![4.0, 5.0, 6.0].into()];
//!
//! let output = matrix_stat_summary(&input, Some(&[2, 3]), Some(0), "list")?;
//! let pairs = output.as_list().unwrap();
//!
//! // One pair per column for every per-axis statistic
//! assert_eq!(pairs[0], ("mean", StatValue::Scalar(2.5)));
//! assert_eq!(pairs[1], ("mean", StatValue::Scalar(3.5)));
//! assert_eq!(pairs[2], ("mean", StatValue::Scalar(4.5)));
//! # Result::<(), MatrixStatError>::Ok(())
//! ```
//!
//! ## Validation
//!
//! Four structural checks run before anything is computed. The first failure
//! aborts the call:
//!
//! | # | Check                                          | Error                  | Kind    |
//! |---|------------------------------------------------|------------------------|---------|
//! | 1 | Input is a sequence, shape has two integers    | `InvalidInputType`     | `Type`  |
//! | 2 | `rows * cols` equals the flattened length      | `ShapeMismatch`        | `Value` |
//! | 3 | Axis is `None`, `0` or `1`                     | `InvalidAxis`          | `Value` |
//! | 4 | Format is `dict`, `list`, `json`, `dataframe`  | `InvalidOutputFormat`  | `Value` |
//!
//! ```rust
//! use matrix_stats::prelude::*;
//!
//! let input: Vec<Element<f64>> = (1..=5).map(|i| Element::Value(i as f64)).collect();
//!
//! let err = matrix_stat_summary(&input, Some(&[2, 2]), None, "dict").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::Value);
//! assert_eq!(err.to_string(), "Product of shape must match number of elements in list");
//! ```
//!
//! ## Axis
//!
//! | Axis      | Selector | Result per statistic                 |
//! |-----------|----------|--------------------------------------|
//! | `Whole`   | `None`   | One scalar                           |
//! | `Columns` | `0`      | One value per column (`cols` values) |
//! | `Rows`    | `1`      | One value per row (`rows` values)    |
//!
//! ```rust
//! use matrix_stats::prelude::*;
//!
//! let data = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
//!
//! let by_row = MatrixStats::new().shape(2, 3).axis(Rows).build()?.summarize(&data)?;
//! assert_eq!(by_row.get(Statistic::Mean).unwrap().as_sequence(), Some(&[2.0, 5.0][..]));
//!
//! let by_col = MatrixStats::new().shape(2, 3).axis(Columns).build()?.summarize(&data)?;
//! assert_eq!(by_col.get(Statistic::Sum).unwrap().as_sequence(), Some(&[5.0, 7.0, 9.0][..]));
//! # Result::<(), MatrixStatError>::Ok(())
//! ```
//!
//! ## Output Formats
//!
//! | Format      | Variant               | Shape                                                            |
//! |-------------|-----------------------|------------------------------------------------------------------|
//! | `dict`      | `Output::Dict`        | Ordered `statistic -> value` mapping ([`StatSummary`](crate::prelude::StatSummary)) |
//! | `list`      | `Output::List`        | Flat `(name, value)` pairs, sequences expanded element by element |
//! | `json`      | `Output::Json`        | JSON object string                                               |
//! | `dataframe` | `Output::DataFrame`   | [`Table`](crate::prelude::Table): statistic rows (whole) or statistic columns (per axis) |
//!
//! ```rust
//! use matrix_stats::prelude::*;
//!
//! let data = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
//!
//! let output = MatrixStats::new()
//!     .shape(2, 3)
//!     .axis(Rows)
//!     .output_format(DataFrame)
//!     .build()?
//!     .compute(&data)?;
//!
//! let table = output.as_table().unwrap();
//! assert_eq!(table.shape(), (2, 9));
//! println!("{}", table);
//! # Result::<(), MatrixStatError>::Ok(())
//! ```
//!
//! ```text
//!    mean                 var                std  max  min  sum  median  range  mode
//! 0     2  0.6666666666666666  0.816496580927726    3    1    6       2      2     1
//! 1     5  0.6666666666666666  0.816496580927726    6    4   15       5      2     4
//! ```
//!
//! JSON output writes non-finite numbers as the bare tokens `NaN`, `Infinity`
//! and `-Infinity`; [`decode_json`](crate::prelude::decode_json) reads them back.
//!
//! ## Per-Statistic Failures
//!
//! A matrix with zero rows is valid, but `max`, `min` and `range` have no
//! identity and cannot reduce an empty lane:
//!
//! ```rust
//! use matrix_stats::prelude::*;
//!
//! let empty: Vec<f64> = Vec::new();
//! let summary = MatrixStats::new().shape(0, 3).build()?.summarize(&empty)?;
//!
//! assert_eq!(
//!     summary.get(Statistic::Max).unwrap().as_error(),
//!     Some("zero-size array to reduction operation maximum which has no identity")
//! );
//! assert_eq!(summary.get(Statistic::Sum), Some(&StatValue::Scalar(0.0)));
//! # Result::<(), MatrixStatError>::Ok(())
//! ```
//!
//! ## Builder
//!
//! | Parameter           | Default         | Options                              |
//! |---------------------|-----------------|--------------------------------------|
//! | **shape**           | (required)      | `(rows, cols)`                       |
//! | **axis**            | `Whole`         | `Whole`, `Columns`, `Rows`           |
//! | **output_format**   | `Dict`          | `Dict`, `List`, `Json`, `DataFrame`  |
//!
//! Each parameter may be set once; setting it again makes `build()` fail with
//! `DuplicateParameter`.
//!
//! ## Minimal Usage (no_std)
//!
//! The crate supports `no_std + alloc`. Disable default features:
//!
//! ```toml
//! [dependencies]
//! matrix-stats = { version = "0.1", default-features = false }
//! ```
//!
//! ## Logging
//!
//! The crate logs through the [`log`](https://docs.rs/log) facade: `trace!`
//! for each evaluation, `debug!` for each failed statistic. Install any
//! logger implementation to see these records.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - data structures and basic utilities.
//
// Contains the error type, input elements with one-level flattening,
// and the row-major matrix.
mod primitives;

// Layer 2: Math - pure per-lane reductions.
//
// Contains moments (sum, mean, variance, std), order statistics
// (max, min, peak-to-peak, median) and the mode.
mod math;

// Layer 3: Algorithms - statistics over matrix lanes.
//
// Contains the `Statistic` enumeration and axis-driven reduction.
mod algorithms;

// Layer 4: Engine - orchestration and execution control.
//
// Contains structural validation, the per-statistic execution loop,
// and result assembly.
mod engine;

// Layer 5: Formats - output encodings.
//
// Contains the dict, list, JSON and table encodings.
mod formats;

// High-level API.
//
// Provides the `MatrixStats` builder and the loosely typed entry points.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard matrix-stats prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use matrix_stats::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        Axis::{self, Columns, Rows, Whole},
        Cell, Element, ErrorKind, ListEntry, Matrix, MatrixStatError, MatrixStats,
        MatrixStatsBuilder, Output,
        OutputFormat::{self, DataFrame, Dict, Json, List},
        Shape, StatSummary, StatValue, Statistic, Table, decode_json, matrix_stat_summary,
        summary_from_json,
    };
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing purposes.
/// It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
/// Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and utilities.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal statistics and reductions.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal execution engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal output encodings.
    pub mod formats {
        pub use crate::formats::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
