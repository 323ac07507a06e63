//! JSON output.
//!
//! ## Purpose
//!
//! This module encodes a summary as one JSON object in canonical statistic
//! order: scalars as numbers, sequences as arrays, failed statistics as
//! strings. [`decode_json`] reads such an object back.
//!
//! ## Design notes
//!
//! * **Non-finite numbers**: Written as the bare tokens `NaN`, `Infinity`
//!   and `-Infinity`. Strict JSON has no spelling for them, so the object
//!   is assembled here instead of through `Serialize`; keys, finite numbers
//!   and error strings still go through `serde_json`.
//! * **Decoding**: Bare tokens outside string literals are swapped for
//!   marked strings before `serde_json` parses the text, then mapped back.
//!
//! ## Invariants
//!
//! * Finite numbers keep their `serde_json` spelling (`21.0`, `0.5`).
//! * Decoded entries come back in canonical statistic order.

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
use num_traits::Float;
use serde_json::Value;

// Internal dependencies
use crate::algorithms::statistic::Statistic;
use crate::engine::output::{StatSummary, StatValue, to_f64};
use crate::primitives::errors::MatrixStatError;

const NAN_TOKEN: &str = "NaN";
const INF_TOKEN: &str = "Infinity";
const NEG_INF_TOKEN: &str = "-Infinity";

/// Prefix of the strings that stand in for bare tokens while decoding.
const MARKER: char = '\u{1}';

// ============================================================================
// Encoding
// ============================================================================

/// Encode a summary as a compact JSON object.
pub fn to_json<T: Float>(summary: &StatSummary<T>) -> Result<String, MatrixStatError> {
    let mut out = String::from("{");

    for (i, (statistic, value)) in summary.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        push_str(&mut out, statistic.name())?;
        out.push(':');

        match value {
            StatValue::Scalar(v) => push_number(&mut out, to_f64(*v))?,
            StatValue::Sequence(values) => {
                out.push('[');
                for (j, v) in values.iter().enumerate() {
                    if j > 0 {
                        out.push(',');
                    }
                    push_number(&mut out, to_f64(*v))?;
                }
                out.push(']');
            }
            StatValue::Error(message) => push_str(&mut out, message)?,
        }
    }

    out.push('}');
    Ok(out)
}

fn push_str(out: &mut String, text: &str) -> Result<(), MatrixStatError> {
    out.push_str(&serde_json::to_string(text).map_err(serialization)?);
    Ok(())
}

fn push_number(out: &mut String, value: f64) -> Result<(), MatrixStatError> {
    if value.is_nan() {
        out.push_str(NAN_TOKEN);
    } else if value == f64::INFINITY {
        out.push_str(INF_TOKEN);
    } else if value == f64::NEG_INFINITY {
        out.push_str(NEG_INF_TOKEN);
    } else {
        out.push_str(&serde_json::to_string(&value).map_err(serialization)?);
    }
    Ok(())
}

fn serialization(err: serde_json::Error) -> MatrixStatError {
    MatrixStatError::Serialization(err.to_string())
}

// ============================================================================
// Decoding
// ============================================================================

/// Decode a summary object written by [`to_json`].
///
/// Numbers become `Scalar`, arrays become `Sequence` and strings become
/// `Error`. A key that is not a statistic name, or an array holding a
/// non-number, fails with `Serialization`.
pub fn decode_json(text: &str) -> Result<Vec<(Statistic, StatValue<f64>)>, MatrixStatError> {
    let value: Value = serde_json::from_str(&quote_non_finite(text)).map_err(serialization)?;
    let object = value
        .as_object()
        .ok_or_else(|| MatrixStatError::Serialization("expected a JSON object".to_string()))?;

    if let Some(key) = object.keys().find(|k| Statistic::from_name(k).is_none()) {
        return Err(MatrixStatError::Serialization(format!(
            "unknown statistic '{}'",
            key
        )));
    }

    Statistic::ALL
        .iter()
        .filter_map(|&statistic| object.get(statistic.name()).map(|v| (statistic, v)))
        .map(|(statistic, v)| decode_value(v).map(|value| (statistic, value)))
        .collect()
}

fn decode_value(value: &Value) -> Result<StatValue<f64>, MatrixStatError> {
    match value {
        Value::Array(items) => items
            .iter()
            .map(decode_number)
            .collect::<Result<Vec<_>, _>>()
            .map(StatValue::Sequence),
        Value::String(s) => Ok(match non_finite(s) {
            Some(v) => StatValue::Scalar(v),
            None => StatValue::Error(s.clone()),
        }),
        other => decode_number(other).map(StatValue::Scalar),
    }
}

fn decode_number(value: &Value) -> Result<f64, MatrixStatError> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => non_finite(s),
        _ => None,
    };
    number.ok_or_else(|| {
        MatrixStatError::Serialization(format!("expected a number, found {}", value))
    })
}

fn non_finite(text: &str) -> Option<f64> {
    match text.strip_prefix(MARKER)? {
        NAN_TOKEN => Some(f64::NAN),
        INF_TOKEN => Some(f64::INFINITY),
        NEG_INF_TOKEN => Some(f64::NEG_INFINITY),
        _ => None,
    }
}

/// Rewrite bare non-finite tokens outside string literals as marked strings.
fn quote_non_finite(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_string = false;
    let mut escaped = false;
    let mut rest = text;

    while let Some(c) = rest.chars().next() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
        } else if c == '"' {
            in_string = true;
        } else if let Some(token) = [NEG_INF_TOKEN, INF_TOKEN, NAN_TOKEN]
            .into_iter()
            .find(|token| rest.starts_with(token))
        {
            out.push_str("\"\\u0001");
            out.push_str(token);
            out.push('"');
            rest = &rest[token.len()..];
            continue;
        }
        out.push(c);
        rest = &rest[c.len_utf8()..];
    }
    out
}
