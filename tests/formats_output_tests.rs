//! Tests for the output encodings.
//!
//! ## Test Organization
//!
//! 1. **Dict** - Ordered mapping and display
//! 2. **List** - Flat pairs with sequence expansion
//! 3. **JSON** - Object encoding, non-finite tokens and decoding
//! 4. **JSON Round-Trip** - Decoded JSON against the dict output
//! 5. **DataFrame** - Whole-matrix and per-axis tables

use approx::assert_relative_eq;
use serde_json::Value;

use matrix_stats::prelude::*;

const DATA: [f64; 6] = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];

fn compute(axis: Axis, format: OutputFormat) -> Output<f64> {
    MatrixStats::new()
        .shape(2, 3)
        .axis(axis)
        .output_format(format)
        .build()
        .unwrap()
        .compute(&DATA)
        .unwrap()
}

// ============================================================================
// Dict Tests
// ============================================================================

/// Test that dict output carries the summary.
#[test]
fn test_dict_output() {
    let output = compute(Whole, Dict);
    assert_eq!(output.format(), Dict);
    assert!(output.as_list().is_none());

    let summary = output.as_dict().unwrap();
    assert_eq!(summary.get_by_name("sum"), Some(&StatValue::Scalar(21.0)));
    assert_eq!(summary.get_by_name("unknown"), None);
}

/// Test summary display.
#[test]
fn test_dict_display() {
    let text = compute(Whole, Dict).to_string();
    assert!(text.starts_with("Summary:\n  Shape: (2, 3)\n  Axis: whole matrix\n"));
    assert!(text.contains("  mean     3.5\n"));
    assert!(text.contains("  sum      21\n"));
}

// ============================================================================
// List Tests
// ============================================================================

/// Test that whole-matrix list output has one pair per statistic.
#[test]
fn test_list_whole() {
    let output = compute(Whole, List);
    let pairs = output.as_list().unwrap();

    assert_eq!(pairs.len(), 9);
    assert_eq!(pairs[0], ("mean", StatValue::Scalar(3.5)));
    assert_eq!(pairs[8], ("mode", StatValue::Scalar(1.0)));
}

/// Test that per-axis sequences expand element by element.
#[test]
fn test_list_expands_sequences() {
    let output = compute(Rows, List);
    let pairs = output.as_list().unwrap();

    // 9 statistics x 2 rows
    assert_eq!(pairs.len(), 18);
    assert_eq!(pairs[0], ("mean", StatValue::Scalar(2.0)));
    assert_eq!(pairs[1], ("mean", StatValue::Scalar(5.0)));
    assert_eq!(pairs[10], ("sum", StatValue::Scalar(6.0)));
    assert_eq!(pairs[11], ("sum", StatValue::Scalar(15.0)));
    assert!(pairs.iter().all(|(_, v)| v.as_sequence().is_none()));
}

/// Test that failed statistics keep one pair holding the message.
#[test]
fn test_list_keeps_errors() {
    let output = MatrixStats::new()
        .shape(0, 2)
        .axis(Columns)
        .output_format(List)
        .build()
        .unwrap()
        .compute::<f64>(&[])
        .unwrap();
    let pairs = output.as_list().unwrap();

    let max: Vec<&StatValue<f64>> = pairs
        .iter()
        .filter(|(name, _)| *name == "max")
        .map(|(_, v)| v)
        .collect();
    assert_eq!(max.len(), 1);
    assert!(max[0].is_error());

    let sums = pairs.iter().filter(|(name, _)| *name == "sum").count();
    assert_eq!(sums, 2);
}

// ============================================================================
// JSON Tests
// ============================================================================

/// Test whole-matrix JSON encoding.
#[test]
fn test_json_whole() {
    let output = compute(Whole, Json);
    let text = output.as_json().unwrap();

    assert!(text.starts_with("{\"mean\":3.5,\"var\":"));
    assert!(text.contains("\"sum\":21.0"));

    let parsed: Value = serde_json::from_str(text).unwrap();
    assert_eq!(parsed["max"], 6.0);
    assert_relative_eq!(parsed["var"].as_f64().unwrap(), 17.5 / 6.0);
}

/// Test per-axis JSON encoding as arrays.
#[test]
fn test_json_per_axis() {
    let output = compute(Columns, Json);
    let parsed: Value = serde_json::from_str(output.as_json().unwrap()).unwrap();

    assert_eq!(parsed["mean"], serde_json::json!([2.5, 3.5, 4.5]));
    assert_eq!(parsed["mode"], serde_json::json!([1.0, 2.0, 3.0]));
}

/// Test that errors encode as strings and non-finite numbers as bare tokens.
#[test]
fn test_json_errors_and_nan() {
    let output = MatrixStats::new()
        .shape(0, 3)
        .output_format(Json)
        .build()
        .unwrap()
        .compute::<f64>(&[])
        .unwrap();
    let text = output.as_json().unwrap();

    assert!(text.starts_with("{\"mean\":NaN,\"var\":NaN,\"std\":NaN,\"max\":\"zero-size"));
    assert!(text.contains("\"sum\":0.0"));

    let entries = decode_json(text).unwrap();
    assert_eq!(entries.len(), 9);
    assert!(entries[0].1.as_scalar().unwrap().is_nan());
    assert_eq!(
        entries[3].1.as_error(),
        Some("zero-size array to reduction operation maximum which has no identity")
    );
    assert_eq!(entries[5].1, StatValue::Scalar(0.0));
}

/// Test that infinities encode with their sign.
#[test]
fn test_json_infinity_tokens() {
    let output = MatrixStats::new()
        .shape(1, 2)
        .output_format(Json)
        .build()
        .unwrap()
        .compute(&[f64::INFINITY, 1.0])
        .unwrap();
    let text = output.as_json().unwrap();

    assert!(text.contains("\"max\":Infinity"));
    assert!(text.contains("\"var\":NaN"));
    assert!(text.contains("\"min\":1.0"));

    let output = MatrixStats::new()
        .shape(1, 2)
        .axis(Rows)
        .output_format(Json)
        .build()
        .unwrap()
        .compute(&[f64::NEG_INFINITY, 1.0])
        .unwrap();
    assert!(output.as_json().unwrap().contains("\"min\":[-Infinity]"));
}

/// Test that token-like text inside error strings is left alone.
#[test]
fn test_decode_json_tokens_in_strings() {
    let text = r#"{"mean":[NaN,1.5],"max":"NaN and -Infinity \" Infinity"}"#;
    let entries = decode_json(text).unwrap();

    assert_eq!(entries[0].0, Statistic::Mean);
    let means = entries[0].1.as_sequence().unwrap();
    assert!(means[0].is_nan());
    assert_eq!(means[1], 1.5);
    assert_eq!(
        entries[1].1.as_error(),
        Some("NaN and -Infinity \" Infinity")
    );
}

/// Test that malformed summaries are rejected.
#[test]
fn test_decode_json_rejects() {
    let unknown = decode_json(r#"{"mean":1.0,"average":2.0}"#).unwrap_err();
    assert_eq!(
        unknown,
        MatrixStatError::Serialization("unknown statistic 'average'".into())
    );
    assert_eq!(
        unknown.to_string(),
        "Serialization failed: unknown statistic 'average'"
    );

    let not_object = decode_json("[1.0]").unwrap_err();
    assert_eq!(not_object.kind(), ErrorKind::Computation);

    let bad_array = decode_json(r#"{"sum":[1.0,"x"]}"#).unwrap_err();
    assert!(matches!(bad_array, MatrixStatError::Serialization(_)));
}

// ============================================================================
// JSON Round-Trip Tests
// ============================================================================

fn assert_same_number(expected: f64, actual: f64) {
    if expected.is_nan() {
        assert!(actual.is_nan(), "expected NaN, got {}", actual);
    } else if expected.is_infinite() {
        assert_eq!(expected, actual);
    } else {
        assert_relative_eq!(expected, actual);
    }
}

fn assert_round_trip(data: &[f64], rows: usize, cols: usize, axis: Axis) {
    let config = MatrixStats::new().shape(rows, cols).axis(axis);
    let summary = config.clone().build().unwrap().summarize(data).unwrap();
    let output = config.output_format(Json).build().unwrap().compute(data).unwrap();

    let decoded = decode_json(output.as_json().unwrap()).unwrap();
    assert_eq!(decoded.len(), 9);

    for ((statistic, expected), (decoded_statistic, actual)) in summary.iter().zip(&decoded) {
        assert_eq!(statistic, *decoded_statistic);
        match (expected, actual) {
            (StatValue::Scalar(e), StatValue::Scalar(a)) => assert_same_number(*e, *a),
            (StatValue::Sequence(e), StatValue::Sequence(a)) => {
                assert_eq!(e.len(), a.len(), "{} length", statistic);
                for (e, a) in e.iter().zip(a) {
                    assert_same_number(*e, *a);
                }
            }
            (StatValue::Error(e), StatValue::Error(a)) => assert_eq!(e, a),
            _ => panic!("{}: {:?} decoded as {:?}", statistic, expected, actual),
        }
    }
}

/// Test that JSON decodes to the dict output for every axis.
#[test]
fn test_json_round_trip() {
    let data = [0.5, -2.0, 3.25, 7.0, 7.0, 1.0e-3, 12.0, -4.5];
    for axis in [Whole, Columns, Rows] {
        assert_round_trip(&data, 2, 4, axis);
    }
}

/// Test the round trip with non-finite values and empty lanes.
#[test]
fn test_json_round_trip_non_finite() {
    for axis in [Whole, Columns, Rows] {
        assert_round_trip(&[f64::INFINITY, 1.0], 1, 2, axis);
        assert_round_trip(&[f64::NAN, f64::NEG_INFINITY, 2.0, 2.0], 2, 2, axis);
        assert_round_trip(&[], 0, 3, axis);
    }
}

// ============================================================================
// DataFrame Tests
// ============================================================================

/// Test whole-matrix table: statistic rows, one value column.
#[test]
fn test_dataframe_whole() {
    let output = compute(Whole, DataFrame);
    let table = output.as_table().unwrap();

    assert_eq!(table.shape(), (9, 1));
    assert_eq!(table.columns(), ["value"]);
    assert_eq!(table.index()[0], "mean");
    assert_eq!(table.index()[8], "mode");
    assert_eq!(table.get("median", "value"), Some(&Cell::Number(3.5)));
}

/// Test per-axis table: statistic columns, one row per lane.
#[test]
fn test_dataframe_per_axis() {
    let output = compute(Columns, DataFrame);
    let table = output.as_table().unwrap();

    assert_eq!(table.shape(), (3, 9));
    assert_eq!(table.index(), ["0", "1", "2"]);
    assert_eq!(table.columns()[0], "mean");

    let means: Vec<f64> = table
        .column("mean")
        .unwrap()
        .iter()
        .filter_map(Cell::as_number)
        .collect();
    assert_eq!(means, vec![2.5, 3.5, 4.5]);

    let row = table.row(1).unwrap();
    assert_eq!(row.len(), 9);
    assert_eq!(*row[5], Cell::Number(7.0));
    assert!(table.row(3).is_none());
}

/// Test that a whole-matrix failure becomes a text cell.
#[test]
fn test_dataframe_error_cell() {
    let output = MatrixStats::new()
        .shape(0, 3)
        .output_format(DataFrame)
        .build()
        .unwrap()
        .compute::<f64>(&[])
        .unwrap();
    let table = output.as_table().unwrap();

    assert_eq!(
        table.get("min", "value").and_then(Cell::as_text),
        Some("zero-size array to reduction operation minimum which has no identity")
    );
}

/// Test that per-axis error messages are broadcast down the column.
#[test]
fn test_dataframe_broadcasts_errors() {
    let output = MatrixStats::new()
        .shape(0, 2)
        .axis(Columns)
        .output_format(DataFrame)
        .build()
        .unwrap()
        .compute::<f64>(&[])
        .unwrap();
    let table = output.as_table().unwrap();

    assert_eq!(table.shape(), (2, 9));
    let max = table.column("max").unwrap();
    assert!(max.iter().all(|c| c.as_text().is_some()));
}

/// Test table display alignment.
#[test]
fn test_dataframe_display() {
    let output = compute(Rows, DataFrame);
    let text = output.to_string();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 3);
    assert!(lines[0].trim_start().starts_with("mean"));
    assert!(lines[1].starts_with('0'));
    assert!(lines[2].starts_with('1'));
    assert!(lines[2].ends_with(" 4"));
}

/// Test the split JSON layout of a table.
#[test]
fn test_dataframe_serialize() {
    let output = compute(Rows, DataFrame);
    let value = serde_json::to_value(output.as_table().unwrap()).unwrap();

    assert_eq!(value["index"], serde_json::json!(["0", "1"]));
    assert_eq!(value["columns"][0], "mean");
    assert_eq!(value["data"][1][0], 5.0);
}
