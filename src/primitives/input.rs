//! Input elements and one-level flattening.
//!
//! ## Purpose
//!
//! This module models the accepted input: a sequence whose elements are
//! either numbers or sequences of numbers. Before reshaping, nested elements
//! are concatenated in order to produce a flat sequence.
//!
//! ## Design notes
//!
//! * **One level only**: `Element` cannot nest deeper than one sequence.
//! * **Order preserving**: Flattening keeps the original element order.
//! * **JSON entry**: `elements_from_json` converts an untyped JSON array
//!   into elements, rejecting non-array input and non-numeric values.
//!
//! ## Invariants
//!
//! * `flatten(x).len()` equals the number of numbers contained in `x`.
//!
//! ## Non-goals
//!
//! * This module does not validate lengths against a shape (handled by `engine::validator`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use serde_json::Value;

// Internal dependencies
use crate::primitives::errors::MatrixStatError;

// ============================================================================
// Element
// ============================================================================

/// One top-level element of the input sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum Element<T> {
    /// A single number.
    Value(T),

    /// A sequence of numbers, concatenated in place during flattening.
    Nested(Vec<T>),
}

impl<T> Element<T> {
    /// Number of values this element contributes after flattening.
    pub fn len(&self) -> usize {
        match self {
            Element::Value(_) => 1,
            Element::Nested(values) => values.len(),
        }
    }

    /// Whether this element contributes no values.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> From<Vec<T>> for Element<T> {
    fn from(values: Vec<T>) -> Self {
        Element::Nested(values)
    }
}

impl From<f64> for Element<f64> {
    fn from(value: f64) -> Self {
        Element::Value(value)
    }
}

impl From<f32> for Element<f32> {
    fn from(value: f32) -> Self {
        Element::Value(value)
    }
}

// ============================================================================
// Flattening
// ============================================================================

/// Concatenate nested elements one level deep, keeping scalars as singletons.
pub fn flatten<T: Copy>(input: &[Element<T>]) -> Vec<T> {
    let total = input.iter().map(Element::len).sum();
    let mut flat = Vec::with_capacity(total);

    for element in input {
        match element {
            Element::Value(v) => flat.push(*v),
            Element::Nested(values) => flat.extend_from_slice(values),
        }
    }

    flat
}

// ============================================================================
// JSON Conversion
// ============================================================================

/// Convert a JSON array (flat or one level nested) into input elements.
///
/// Returns `InvalidInputType` when `value` is not an array and
/// `NonNumericElement` for any value that is not a number at the expected depth.
pub fn elements_from_json(value: &Value) -> Result<Vec<Element<f64>>, MatrixStatError> {
    let items = value.as_array().ok_or(MatrixStatError::InvalidInputType)?;

    let mut elements = Vec::with_capacity(items.len());
    let mut position = 0usize;

    for item in items {
        match item {
            Value::Array(inner) => {
                let mut values = Vec::with_capacity(inner.len());
                for v in inner {
                    values.push(json_number(v, position)?);
                    position += 1;
                }
                elements.push(Element::Nested(values));
            }
            other => {
                elements.push(Element::Value(json_number(other, position)?));
                position += 1;
            }
        }
    }

    Ok(elements)
}

fn json_number(value: &Value, index: usize) -> Result<f64, MatrixStatError> {
    value
        .as_f64()
        .ok_or(MatrixStatError::NonNumericElement { index })
}
