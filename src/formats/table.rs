//! Tabular output (dataframe encoding).
//!
//! ## Purpose
//!
//! This module builds a labelled two-dimensional table from computed
//! statistics. Whole-matrix results become one row per statistic with a
//! single `value` column; per-lane results become one column per statistic
//! with one row per lane.
//!
//! ## Design notes
//!
//! * **Named columns**: `from_columns` follows "table from a mapping of
//!   column name to values": sequences must share one length, scalar and
//!   error values are repeated down the column.
//! * **Named rows**: `from_rows` places each value in a single named column
//!   and requires every value to hold exactly one cell.
//! * **Construction errors**: Mismatched lengths are returned as
//!   `TableConstruction`, never padded.
//! * **Storage**: Column-major `Vec<Vec<Cell<T>>>`.
//!
//! ## Invariants
//!
//! * Every column holds `index.len()` cells.
//! * `columns.len() == data.len()`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{
    format,
    string::{String, ToString},
    vec::Vec,
};
#[cfg(feature = "std")]
use std::{
    format,
    string::{String, ToString},
    vec::Vec,
};

// External dependencies
use core::fmt;
use num_traits::Float;
use serde::ser::{Serialize, SerializeStruct, Serializer};

// Internal dependencies
use crate::engine::output::{StatSummary, StatValue, to_f64};
use crate::primitives::errors::MatrixStatError;

/// Name of the single column of a whole-matrix table.
pub const VALUE_COLUMN: &str = "value";

// ============================================================================
// Cell
// ============================================================================

/// One table cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell<T> {
    /// Numeric result.
    Number(T),

    /// Error message of a failed statistic.
    Text(String),
}

impl<T: Copy> Cell<T> {
    /// The number, if this cell holds one.
    pub fn as_number(&self) -> Option<T> {
        match self {
            Cell::Number(v) => Some(*v),
            Cell::Text(_) => None,
        }
    }

    /// The text, if this cell holds an error message.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Number(_) => None,
            Cell::Text(s) => Some(s),
        }
    }
}

impl<T: Float> fmt::Display for Cell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Number(v) => write!(f, "{}", to_f64(*v)),
            Cell::Text(s) => f.write_str(s),
        }
    }
}

impl<T: Float> Serialize for Cell<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Cell::Number(v) => serializer.serialize_f64(to_f64(*v)),
            Cell::Text(s) => serializer.serialize_str(s),
        }
    }
}

// ============================================================================
// Table
// ============================================================================

/// Labelled table of statistic values.
#[derive(Debug, Clone, PartialEq)]
pub struct Table<T> {
    index: Vec<String>,
    columns: Vec<String>,
    data: Vec<Vec<Cell<T>>>,
}

impl<T: Float> Table<T> {
    /// Build the table for a summary: statistic rows for the whole matrix,
    /// statistic columns for a per-lane axis.
    pub fn from_summary(summary: &StatSummary<T>) -> Result<Self, MatrixStatError> {
        let named = summary
            .iter()
            .map(|(statistic, value)| (statistic.name().to_string(), value.clone()))
            .collect();

        if summary.axis().is_whole() {
            Self::from_rows(named, VALUE_COLUMN)
        } else {
            Self::from_columns(named)
        }
    }

    /// Build a table from named columns.
    ///
    /// Sequences become columns and must all have the same length. Scalars
    /// and error messages are repeated to that length. The row index is
    /// `0..n`.
    pub fn from_columns(columns: Vec<(String, StatValue<T>)>) -> Result<Self, MatrixStatError> {
        if columns.is_empty() {
            return Ok(Self {
                index: Vec::new(),
                columns: Vec::new(),
                data: Vec::new(),
            });
        }

        let mut height: Option<usize> = None;
        for (_, value) in &columns {
            if let StatValue::Sequence(values) = value {
                match height {
                    None => height = Some(values.len()),
                    Some(h) if h != values.len() => {
                        return Err(MatrixStatError::TableConstruction(
                            "All arrays must be of the same length".into(),
                        ));
                    }
                    Some(_) => {}
                }
            }
        }
        let height = height.ok_or_else(|| {
            MatrixStatError::TableConstruction(
                "If using all scalar values, you must pass an index".into(),
            )
        })?;

        let mut names = Vec::with_capacity(columns.len());
        let mut data = Vec::with_capacity(columns.len());
        for (name, value) in columns {
            let cells = match value {
                StatValue::Sequence(values) => values.into_iter().map(Cell::Number).collect(),
                StatValue::Scalar(v) => vec![Cell::Number(v); height],
                StatValue::Error(msg) => vec![Cell::Text(msg); height],
            };
            names.push(name);
            data.push(cells);
        }

        Ok(Self {
            index: (0..height).map(|i| i.to_string()).collect(),
            columns: names,
            data,
        })
    }

    /// Build a single-column table with one named row per entry.
    ///
    /// A sequence is accepted only when it holds exactly one value.
    pub fn from_rows(
        rows: Vec<(String, StatValue<T>)>,
        column: &str,
    ) -> Result<Self, MatrixStatError> {
        let mut index = Vec::with_capacity(rows.len());
        let mut cells = Vec::with_capacity(rows.len());

        for (label, value) in rows {
            let cell = match value {
                StatValue::Scalar(v) => Cell::Number(v),
                StatValue::Error(msg) => Cell::Text(msg),
                StatValue::Sequence(values) => match values.as_slice() {
                    [single] => Cell::Number(*single),
                    _ => {
                        return Err(MatrixStatError::TableConstruction(format!(
                            "1 columns passed, passed data had {} columns",
                            values.len()
                        )));
                    }
                },
            };
            index.push(label);
            cells.push(cell);
        }

        Ok(Self {
            index,
            columns: vec![column.to_string()],
            data: vec![cells],
        })
    }

    /// Row labels.
    pub fn index(&self) -> &[String] {
        &self.index
    }

    /// Column labels.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// `(rows, columns)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.index.len(), self.columns.len())
    }

    /// Cells of the column named `name`, top to bottom.
    pub fn column(&self, name: &str) -> Option<&[Cell<T>]> {
        self.columns
            .iter()
            .position(|c| c == name)
            .map(|i| self.data[i].as_slice())
    }

    /// Cell at row label `row` and column label `column`.
    pub fn get(&self, row: &str, column: &str) -> Option<&Cell<T>> {
        let r = self.index.iter().position(|label| label == row)?;
        self.column(column).map(|cells| &cells[r])
    }

    /// Cells of row `r`, left to right.
    pub fn row(&self, r: usize) -> Option<Vec<&Cell<T>>> {
        if r >= self.index.len() {
            return None;
        }
        Some(self.data.iter().map(|col| &col[r]).collect())
    }
}

impl<T: Float> fmt::Display for Table<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<Vec<String>> = self
            .data
            .iter()
            .map(|col| col.iter().map(|c| c.to_string()).collect())
            .collect();

        let index_width = self.index.iter().map(String::len).max().unwrap_or(0);
        let widths: Vec<usize> = self
            .columns
            .iter()
            .zip(&rendered)
            .map(|(name, cells)| {
                cells
                    .iter()
                    .map(String::len)
                    .chain(core::iter::once(name.len()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        write!(f, "{:width$}", "", width = index_width)?;
        for (name, &w) in self.columns.iter().zip(&widths) {
            write!(f, "  {:>w$}", name, w = w)?;
        }
        writeln!(f)?;

        for (r, label) in self.index.iter().enumerate() {
            write!(f, "{:<width$}", label, width = index_width)?;
            for (cells, &w) in rendered.iter().zip(&widths) {
                write!(f, "  {:>w$}", cells[r], w = w)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<T: Float> Serialize for Table<T> {
    /// Encodes as `{"columns": [...], "index": [...], "data": [[row], ...]}`.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let rows: Vec<Vec<&Cell<T>>> = (0..self.index.len())
            .filter_map(|r| self.row(r))
            .collect();

        let mut state = serializer.serialize_struct("Table", 3)?;
        state.serialize_field("columns", &self.columns)?;
        state.serialize_field("index", &self.index)?;
        state.serialize_field("data", &rows)?;
        state.end()
    }
}
