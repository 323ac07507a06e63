//! Layer 5: Formats
//!
//! # Purpose
//!
//! This layer encodes a computed [`StatSummary`] in the requested
//! [`OutputFormat`]:
//! - `Dict`: the ordered summary itself
//! - `List`: flat `(name, value)` pairs
//! - `Json`: a JSON object string
//! - `DataFrame`: a labelled table
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Formats ← You are here
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};
#[cfg(feature = "std")]
use std::{string::String, vec::Vec};

// External dependencies
use core::fmt;
use num_traits::Float;

// Internal dependencies
use crate::engine::output::StatSummary;
use crate::primitives::errors::MatrixStatError;

/// Flat `(name, value)` pairs.
pub mod list;

/// Labelled table.
pub mod table;

/// JSON object string.
pub mod json;

pub use crate::engine::output::OutputFormat;
pub use list::ListEntry;
pub use table::{Cell, Table};

// ============================================================================
// Output
// ============================================================================

/// Statistics encoded in one output format.
#[derive(Debug, Clone, PartialEq)]
pub enum Output<T> {
    /// Ordered mapping from statistic to value.
    Dict(StatSummary<T>),

    /// Flat `(name, value)` pairs.
    List(Vec<ListEntry<T>>),

    /// JSON object string.
    Json(String),

    /// Labelled table.
    DataFrame(Table<T>),
}

impl<T: Float> Output<T> {
    /// Encode `summary` in `format`.
    pub fn encode(summary: StatSummary<T>, format: OutputFormat) -> Result<Self, MatrixStatError> {
        match format {
            OutputFormat::Dict => Ok(Output::Dict(summary)),
            OutputFormat::List => Ok(Output::List(list::to_pairs(&summary))),
            OutputFormat::Json => json::to_json(&summary).map(Output::Json),
            OutputFormat::DataFrame => Table::from_summary(&summary)
                .map(Output::DataFrame)
                .inspect_err(|e| log::debug!("dataframe construction failed: {}", e)),
        }
    }

    /// Format this output is encoded in.
    pub fn format(&self) -> OutputFormat {
        match self {
            Output::Dict(_) => OutputFormat::Dict,
            Output::List(_) => OutputFormat::List,
            Output::Json(_) => OutputFormat::Json,
            Output::DataFrame(_) => OutputFormat::DataFrame,
        }
    }

    /// The summary, if `Dict`.
    pub fn as_dict(&self) -> Option<&StatSummary<T>> {
        match self {
            Output::Dict(summary) => Some(summary),
            _ => None,
        }
    }

    /// The pairs, if `List`.
    pub fn as_list(&self) -> Option<&[ListEntry<T>]> {
        match self {
            Output::List(pairs) => Some(pairs),
            _ => None,
        }
    }

    /// The JSON string, if `Json`.
    pub fn as_json(&self) -> Option<&str> {
        match self {
            Output::Json(s) => Some(s),
            _ => None,
        }
    }

    /// The table, if `DataFrame`.
    pub fn as_table(&self) -> Option<&Table<T>> {
        match self {
            Output::DataFrame(table) => Some(table),
            _ => None,
        }
    }

    /// Consume and return the summary, if `Dict`.
    pub fn into_dict(self) -> Option<StatSummary<T>> {
        match self {
            Output::Dict(summary) => Some(summary),
            _ => None,
        }
    }
}

impl<T: Float> fmt::Display for Output<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Output::Dict(summary) => write!(f, "{}", summary),
            Output::List(pairs) => {
                for (name, value) in pairs {
                    writeln!(f, "({}, {})", name, value)?;
                }
                Ok(())
            }
            Output::Json(s) => f.write_str(s),
            Output::DataFrame(table) => write!(f, "{}", table),
        }
    }
}
