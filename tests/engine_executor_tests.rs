#![cfg(feature = "dev")]
//! Tests for the per-statistic execution loop.
//!
//! ## Test Organization
//!
//! 1. **Execution** - Canonical order and value shapes
//! 2. **Failure Isolation** - Errors stored next to results
//! 3. **Custom Statistics** - Subsets of statistics

use approx::assert_relative_eq;

use matrix_stats::internals::algorithms::reduction::Axis;
use matrix_stats::internals::algorithms::statistic::Statistic;
use matrix_stats::internals::engine::executor::StatExecutor;
use matrix_stats::internals::engine::output::StatValue;
use matrix_stats::internals::primitives::matrix::{Matrix, Shape};

fn sample() -> Matrix<f64> {
    Matrix::from_flat(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], Shape::new(2, 3)).unwrap()
}

// ============================================================================
// Execution Tests
// ============================================================================

/// Test that the default executor runs all statistics in order.
#[test]
fn test_run_all_statistics() {
    let summary = StatExecutor::new().run(&sample(), Axis::Whole);

    let order: Vec<Statistic> = summary.iter().map(|(s, _)| s).collect();
    assert_eq!(order, Statistic::ALL.to_vec());
    assert_eq!(summary.shape(), Shape::new(2, 3));
    assert_eq!(summary.axis(), Axis::Whole);
}

/// Test that whole-matrix results are scalars.
#[test]
fn test_whole_yields_scalars() {
    let summary = StatExecutor::default().run(&sample(), Axis::Whole);

    assert!(summary.iter().all(|(_, v)| matches!(v, StatValue::Scalar(_))));
    assert_relative_eq!(
        summary.get(Statistic::Median).and_then(StatValue::as_scalar).unwrap(),
        3.5
    );
}

/// Test that per-axis results hold one value per lane.
#[test]
fn test_per_axis_yields_sequences() {
    let m = sample();

    let by_col = StatExecutor::new().run(&m, Axis::Columns);
    assert!(by_col.iter().all(|(_, v)| v.as_sequence().map(<[f64]>::len) == Some(3)));

    let by_row = StatExecutor::new().run(&m, Axis::Rows);
    assert!(by_row.iter().all(|(_, v)| v.as_sequence().map(<[f64]>::len) == Some(2)));
}

// ============================================================================
// Failure Isolation Tests
// ============================================================================

/// Test that one failure is stored as an error value.
#[test]
fn test_evaluate_failure() {
    let empty = Matrix::<f64>::from_flat(vec![], Shape::new(0, 0)).unwrap();

    let value = StatExecutor::evaluate(&empty, Axis::Whole, Statistic::Max);
    assert_eq!(
        value.as_error(),
        Some("zero-size array to reduction operation maximum which has no identity")
    );

    let value = StatExecutor::evaluate(&empty, Axis::Whole, Statistic::Sum);
    assert_eq!(value, StatValue::Scalar(0.0));
}

/// Test that failures do not stop later statistics.
#[test]
fn test_run_collects_failures() {
    let empty = Matrix::<f64>::from_flat(vec![], Shape::new(0, 3)).unwrap();
    let summary = StatExecutor::new().run(&empty, Axis::Whole);

    assert_eq!(summary.len(), 9);
    assert_eq!(summary.failures().count(), 3);
    assert!(summary.get(Statistic::Mode).is_some());
}

// ============================================================================
// Custom Statistics Tests
// ============================================================================

/// Test an executor over a subset of statistics.
#[test]
fn test_with_statistics() {
    let subset = [Statistic::Range, Statistic::Mean];
    let executor = StatExecutor::with_statistics(&subset);
    assert_eq!(executor.statistics(), &subset);

    let summary = executor.run(&sample(), Axis::Rows);
    let entries = summary.into_entries();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0], (Statistic::Range, StatValue::Sequence(vec![2.0, 2.0])));
    assert_eq!(entries[1], (Statistic::Mean, StatValue::Sequence(vec![2.0, 5.0])));
}
