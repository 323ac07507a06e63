#![cfg(feature = "dev")]
//! Tests for input flattening and the row-major matrix.
//!
//! ## Test Organization
//!
//! 1. **Flattening** - One-level concatenation of input elements
//! 2. **JSON Input** - Conversion of untyped arrays
//! 3. **Shape** - Construction from dimensions
//! 4. **Matrix** - Reshape and lane access

use matrix_stats::internals::primitives::errors::MatrixStatError;
use matrix_stats::internals::primitives::input::{Element, elements_from_json, flatten};
use matrix_stats::internals::primitives::matrix::{Matrix, Shape};

// ============================================================================
// Flattening Tests
// ============================================================================

/// Test flattening preserves element order.
#[test]
fn test_flatten_mixed() {
    let input = vec![
        Element::Nested(vec![1.0, 2.0]),
        Element::Value(3.0),
        Element::Nested(vec![]),
        Element::Nested(vec![4.0]),
    ];

    assert_eq!(flatten(&input), vec![1.0, 2.0, 3.0, 4.0]);
}

/// Test element lengths.
#[test]
fn test_element_len() {
    assert_eq!(Element::Value(1.0).len(), 1);
    assert_eq!(Element::Nested(vec![1.0, 2.0, 3.0]).len(), 3);
    assert!(Element::<f64>::Nested(vec![]).is_empty());
}

/// Test conversions into elements.
#[test]
fn test_element_from() {
    assert_eq!(Element::from(2.5f64), Element::Value(2.5));
    assert_eq!(Element::from(vec![1.0, 2.0]), Element::Nested(vec![1.0, 2.0]));
}

// ============================================================================
// JSON Input Tests
// ============================================================================

/// Test conversion of a nested JSON array.
#[test]
fn test_elements_from_json() {
    let value = serde_json::json!([1, [2.5, 3], 4]);
    let elements = elements_from_json(&value).unwrap();

    assert_eq!(
        elements,
        vec![
            Element::Value(1.0),
            Element::Nested(vec![2.5, 3.0]),
            Element::Value(4.0)
        ]
    );
}

/// Test that a scalar JSON value is rejected.
#[test]
fn test_elements_from_json_scalar() {
    let value = serde_json::json!(5);
    assert_eq!(
        elements_from_json(&value).unwrap_err(),
        MatrixStatError::InvalidInputType
    );
}

/// Test that deeper nesting is reported as non-numeric.
#[test]
fn test_elements_from_json_too_deep() {
    let value = serde_json::json!([[1, [2]]]);
    assert_eq!(
        elements_from_json(&value).unwrap_err(),
        MatrixStatError::NonNumericElement { index: 1 }
    );
}

/// Test that null is rejected.
#[test]
fn test_elements_from_json_null() {
    let value = serde_json::json!([null]);
    assert_eq!(
        elements_from_json(&value).unwrap_err(),
        MatrixStatError::NonNumericElement { index: 0 }
    );
}

// ============================================================================
// Shape Tests
// ============================================================================

/// Test shape construction from dimensions.
#[test]
fn test_shape_from_dims() {
    assert_eq!(Shape::from_dims(&[2, 3]).unwrap(), Shape::new(2, 3));
    assert_eq!(
        Shape::from_dims(&[6]).unwrap_err(),
        MatrixStatError::InvalidInputType
    );
    assert_eq!(Shape::from((4, 5)), Shape::new(4, 5));
    assert_eq!(Shape::new(2, 3).to_string(), "(2, 3)");
}

/// Test shape size and overflow.
#[test]
fn test_shape_size() {
    assert_eq!(Shape::new(2, 3).size(), Some(6));
    assert_eq!(Shape::new(0, 3).size(), Some(0));
    assert_eq!(Shape::new(usize::MAX, 2).size(), None);
}

// ============================================================================
// Matrix Tests
// ============================================================================

/// Test row-major reshape and element access.
#[test]
fn test_matrix_from_flat() {
    let m = Matrix::from_flat(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], Shape::new(2, 3)).unwrap();

    assert_eq!(m.rows(), 2);
    assert_eq!(m.cols(), 3);
    assert_eq!(m.get(0, 2), Some(3.0));
    assert_eq!(m.get(1, 0), Some(4.0));
    assert_eq!(m.get(2, 0), None);
    assert_eq!(m.row(1), &[4.0, 5.0, 6.0]);
    assert_eq!(m.column(1), vec![2.0, 5.0]);
}

/// Test lane iterators.
#[test]
fn test_matrix_lanes() {
    let m = Matrix::from_flat(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], Shape::new(3, 2)).unwrap();

    let rows: Vec<&[f64]> = m.iter_rows().collect();
    assert_eq!(rows, vec![&[1.0, 2.0][..], &[3.0, 4.0][..], &[5.0, 6.0][..]]);

    let cols: Vec<Vec<f64>> = m.iter_columns().collect();
    assert_eq!(cols, vec![vec![1.0, 3.0, 5.0], vec![2.0, 4.0, 6.0]]);
}

/// Test reshape failure on mismatched length.
#[test]
fn test_matrix_shape_mismatch() {
    let err = Matrix::from_flat(vec![1.0, 2.0, 3.0], Shape::new(2, 2)).unwrap_err();
    assert_eq!(
        err,
        MatrixStatError::ShapeMismatch {
            rows: 2,
            cols: 2,
            len: 3
        }
    );
}

/// Test zero-size matrices.
#[test]
fn test_matrix_zero_size() {
    let m = Matrix::<f64>::from_flat(vec![], Shape::new(0, 4)).unwrap();
    assert_eq!(m.iter_rows().count(), 0);
    assert!(m.iter_columns().all(|c| c.is_empty()));
    assert!(m.into_inner().is_empty());
}
