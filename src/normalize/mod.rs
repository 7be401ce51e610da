//! Normalization of tabular input into a record-oriented dataset.
//!
//! Every supported shape ends up as a JSON array of flat objects, the form
//! the scatter template consumes.

pub mod columnar;

pub use columnar::*;

use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::error::{Result, ScatterVizError};
use crate::model::{DataInput, Dataset};

/// Whether the normalized dataset should be serialized to JSON text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emit {
    Dataset,
    Json,
}

impl From<bool> for Emit {
    fn from(as_json: bool) -> Self {
        if as_json {
            Emit::Json
        } else {
            Emit::Dataset
        }
    }
}

/// Handling of text input (file paths and raw JSON payloads)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextPolicy {
    /// Text is assumed to already be a record array. File contents are
    /// round-tripped through the JSON parser, raw text is passed through
    /// untouched. The result is always JSON text, whatever [`Emit`] asks for.
    #[default]
    Trusted,
    /// Text is parsed and its shape detected like any in-memory value, so
    /// columnar JSON is transposed and [`Emit`] is honored.
    Reshape,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeOptions {
    pub columns: ColumnPolicy,
    pub text: TextPolicy,
}

/// Outcome of [`normalize`]
#[derive(Debug, Clone, PartialEq)]
pub enum Normalized {
    Dataset(Dataset),
    Serialized(String),
}

impl Normalized {
    /// JSON text of the result, serializing an in-memory dataset if needed
    pub fn into_json(self) -> Result<String> {
        match self {
            Normalized::Dataset(dataset) => Ok(dataset.to_json()?),
            Normalized::Serialized(text) => Ok(text),
        }
    }

    /// Dataset form of the result, parsing serialized text if needed
    pub fn into_dataset(self) -> Result<Dataset> {
        match self {
            Normalized::Dataset(dataset) => Ok(dataset),
            Normalized::Serialized(text) => Ok(serde_json::from_str(&text)?),
        }
    }
}

/// Normalize `input` into a record-oriented dataset.
///
/// Text naming an existing file is read and its JSON re-serialized; any other
/// text is taken as a JSON payload. Tabular values are exported to records,
/// columns are transposed (see [`transpose`]) and rows pass through as they
/// are.
pub fn normalize(
    input: DataInput<'_>,
    emit: Emit,
    options: &NormalizeOptions,
) -> Result<Normalized> {
    debug!(shape = input.shape_name(), ?emit, "normalizing input");

    let dataset = match input {
        DataInput::Text(text) => return normalize_text(text, emit, options),
        DataInput::Tabular(table) => {
            let json = table.to_records_json()?;
            serde_json::from_str::<Dataset>(&json)?
        }
        DataInput::Columns(columns) => transpose(&columns, options.columns)?,
        DataInput::Rows(rows) => Dataset::new(rows),
    };

    debug!(records = dataset.len(), "normalized dataset");

    match emit {
        Emit::Dataset => Ok(Normalized::Dataset(dataset)),
        Emit::Json => Ok(Normalized::Serialized(dataset.to_json()?)),
    }
}

fn normalize_text(text: String, emit: Emit, options: &NormalizeOptions) -> Result<Normalized> {
    let path = Path::new(&text);
    let from_file = path.is_file();

    match options.text {
        TextPolicy::Trusted if from_file => {
            debug!(path = %path.display(), "reading JSON data file");
            let contents = std::fs::read_to_string(path)?;
            let value: Value = serde_json::from_str(&contents)?;
            Ok(Normalized::Serialized(serde_json::to_string(&value)?))
        }
        TextPolicy::Trusted => Ok(Normalized::Serialized(text)),
        TextPolicy::Reshape => {
            let value: Value = if from_file {
                debug!(path = %path.display(), "reading JSON data file");
                serde_json::from_str(&std::fs::read_to_string(path)?)?
            } else {
                serde_json::from_str(&text)?
            };

            if value.is_string() {
                return Err(ScatterVizError::UnsupportedShape(
                    "JSON text holds a bare string, not tabular data".to_string(),
                ));
            }
            normalize(DataInput::from_json(value)?, emit, options)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Columns, Record, Table};
    use serde_json::json;
    use std::io::Write;

    fn parse(normalized: Normalized) -> Value {
        serde_json::from_str(&normalized.into_json().unwrap()).unwrap()
    }

    fn columns_input(value: Value) -> DataInput<'static> {
        DataInput::try_from(value).unwrap()
    }

    #[test]
    fn test_columnar_scenario() {
        let out = normalize(
            columns_input(json!({"a": [1, 2, 3], "b": [4, 5, 6]})),
            Emit::Json,
            &NormalizeOptions::default(),
        )
        .unwrap();
        assert_eq!(parse(out), json!([{"a": 1, "b": 4}, {"a": 2, "b": 5}, {"a": 3, "b": 6}]));
    }

    #[test]
    fn test_columnar_truncation_scenario() {
        let out = normalize(
            columns_input(json!({"a": [1, 2], "b": [4, 5, 6]})),
            Emit::Json,
            &NormalizeOptions::default(),
        )
        .unwrap();
        assert_eq!(parse(out), json!([{"a": 1, "b": 4}, {"a": 2, "b": 5}]));
    }

    #[test]
    fn test_strict_columns() {
        let options = NormalizeOptions {
            columns: ColumnPolicy::Strict,
            ..Default::default()
        };
        let input = columns_input(json!({"a": [1, 2], "b": [4, 5, 6]}));
        let result = normalize(input, Emit::Json, &options);
        assert!(matches!(result, Err(ScatterVizError::ColumnLengthMismatch { .. })));
    }

    #[test]
    fn test_zero_columns() {
        let out =
            normalize(Columns::new().into(), Emit::Json, &NormalizeOptions::default()).unwrap();
        assert_eq!(out, Normalized::Serialized("[]".to_string()));
    }

    #[test]
    fn test_rows_identity() {
        let rows: Vec<Record> = vec![
            json!({"x": 1, "y": 2}).as_object().unwrap().clone(),
            json!({"x": 3, "y": "four"}).as_object().unwrap().clone(),
        ];
        let out =
            normalize(rows.clone().into(), Emit::Dataset, &NormalizeOptions::default()).unwrap();
        assert_eq!(out, Normalized::Dataset(Dataset::new(rows)));
    }

    #[test]
    fn test_rows_serialized() {
        let out = normalize(
            columns_input(json!([{"x": 1, "y": 2}])),
            Emit::Json,
            &NormalizeOptions::default(),
        )
        .unwrap();
        assert_eq!(out, Normalized::Serialized(r#"[{"x":1,"y":2}]"#.to_string()));
    }

    #[test]
    fn test_raw_text_passes_through() {
        let raw = r#"[ {"x": 1,   "y": 2} ]"#;
        let out = normalize(raw.into(), Emit::Json, &NormalizeOptions::default()).unwrap();
        assert_eq!(out, Normalized::Serialized(raw.to_string()));

        // Trusted text is never validated
        let out = normalize("not json".into(), Emit::Json, &NormalizeOptions::default()).unwrap();
        assert_eq!(out, Normalized::Serialized("not json".to_string()));
    }

    #[test]
    fn test_text_ignores_emit_dataset() {
        let raw = r#"[{"x":1}]"#;
        let out = normalize(raw.into(), Emit::Dataset, &NormalizeOptions::default()).unwrap();
        assert_eq!(out, Normalized::Serialized(raw.to_string()));
    }

    #[test]
    fn test_file_path_scenario() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[\n  {{\"x\": 1, \"y\": 2}}\n]\n").unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let out = normalize(path.into(), Emit::Json, &NormalizeOptions::default()).unwrap();
        assert_eq!(out, Normalized::Serialized(r#"[{"x":1,"y":2}]"#.to_string()));
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[{{\"x\": 1,").unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let result = normalize(path.into(), Emit::Json, &NormalizeOptions::default());
        assert!(matches!(result, Err(ScatterVizError::Parse(_))));
    }

    #[test]
    fn test_reshape_transposes_columnar_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"a": [1, 2], "b": [3, 4]}}"#).unwrap();
        let path = file.path().to_str().unwrap().to_string();
        let options = NormalizeOptions {
            text: TextPolicy::Reshape,
            ..Default::default()
        };

        let out = normalize(path.into(), Emit::Dataset, &options).unwrap();
        let dataset = out.into_dataset().unwrap();
        assert_eq!(
            serde_json::to_value(&dataset).unwrap(),
            json!([{"a": 1, "b": 3}, {"a": 2, "b": 4}])
        );
    }

    #[test]
    fn test_reshape_rejects_malformed_and_scalars() {
        let options = NormalizeOptions {
            text: TextPolicy::Reshape,
            ..Default::default()
        };
        assert!(matches!(
            normalize("not json".into(), Emit::Json, &options),
            Err(ScatterVizError::Parse(_))
        ));
        assert!(matches!(
            normalize("42".into(), Emit::Json, &options),
            Err(ScatterVizError::UnsupportedShape(_))
        ));
        assert!(matches!(
            normalize(r#""nested""#.into(), Emit::Json, &options),
            Err(ScatterVizError::UnsupportedShape(_))
        ));
    }

    #[test]
    fn test_tabular_export() {
        let mut table = Table::new(["x", "y"]);
        table.push_row(vec![json!(1), json!(2)]);
        let options = NormalizeOptions::default();
        let out = normalize(DataInput::tabular(&table), Emit::Dataset, &options).unwrap();
        match out {
            Normalized::Dataset(dataset) => {
                assert_eq!(dataset.to_json().unwrap(), r#"[{"x":1,"y":2}]"#)
            }
            other => panic!("expected dataset, got {:?}", other),
        }
    }

    struct BrokenExport;

    impl crate::model::TabularExport for BrokenExport {
        fn to_records_json(&self) -> Result<String> {
            Ok("{\"x\": [1".to_string())
        }
    }

    #[test]
    fn test_tabular_malformed_export() {
        let options = NormalizeOptions::default();
        let result = normalize(DataInput::tabular(&BrokenExport), Emit::Json, &options);
        assert!(matches!(result, Err(ScatterVizError::Parse(_))));
    }

    #[test]
    fn test_unsupported_scalar_scenario() {
        assert!(matches!(
            DataInput::try_from(json!(42)),
            Err(ScatterVizError::UnsupportedShape(_))
        ));
        assert!(matches!(
            DataInput::try_from(Value::Null),
            Err(ScatterVizError::UnsupportedShape(_))
        ));
    }
}
