use matrix_stats::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::error::Error;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize, Serialize)]
struct ValidationData {
    name: String,
    notes: String,
    input: InputData,
    params: Params,
    #[serde(skip_deserializing)]
    result: ResultData,
}

#[derive(Debug, Deserialize, Serialize)]
struct InputData {
    /// Flat or one-level nested array of numbers.
    data: Value,
}

#[derive(Debug, Deserialize, Serialize)]
struct Params {
    shape: Option<Vec<usize>>,
    axis: Option<i64>,
}

#[derive(Debug, Deserialize, Serialize, Default)]
struct ResultData {
    summary: Value,
    error: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let input_dir = Path::new("../output/numpy");
    let output_dir = Path::new("../output/matrix_stats");

    if !input_dir.exists() {
        eprintln!(
            "Input directory {:?} does not exist. Expected one JSON case per file \
             with `name`, `notes`, `input.data` and `params` (`shape`, `axis`).",
            input_dir
        );
        return Ok(());
    }

    fs::create_dir_all(output_dir)?;

    for entry in fs::read_dir(input_dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) == Some("json") {
            println!("Processing {:?}", path.file_name().unwrap_or_default());
            process_file(&path, output_dir)?;
        }
    }

    Ok(())
}

fn process_file(input_path: &Path, output_dir: &Path) -> Result<(), Box<dyn Error>> {
    let file = fs::File::open(input_path)?;
    let mut data: ValidationData = serde_json::from_reader(file)?;

    let output = summary_from_json(
        &data.input.data,
        data.params.shape.as_deref(),
        data.params.axis,
        "json",
    );

    // Structural errors are part of the reference output
    match output {
        Ok(output) => {
            let json = output.as_json().ok_or("expected JSON output")?;
            data.result.summary = summary_value(json)?;
        }
        Err(err) => {
            data.result.error = Some(err.to_string());
        }
    }

    let file_name = input_path.file_name().ok_or("input path has no file name")?;
    let output_path = output_dir.join(file_name);
    let output_json = serde_json::to_string_pretty(&data)?;
    fs::write(output_path, output_json)?;

    Ok(())
}

/// Decode the summary, spelling non-finite numbers as strings so the result
/// stays strict JSON.
fn summary_value(json: &str) -> Result<Value, Box<dyn Error>> {
    let mut summary = Map::new();
    for (statistic, value) in decode_json(json)? {
        let value = match value {
            StatValue::Scalar(v) => number(v),
            StatValue::Sequence(values) => Value::Array(values.into_iter().map(number).collect()),
            StatValue::Error(message) => Value::String(message),
        };
        summary.insert(statistic.name().to_string(), value);
    }
    Ok(Value::Object(summary))
}

fn number(v: f64) -> Value {
    if v.is_nan() {
        Value::from("NaN")
    } else if v.is_infinite() {
        Value::from(if v > 0.0 { "Infinity" } else { "-Infinity" })
    } else {
        Value::from(v)
    }
}
