use std::fmt;

use serde_json::Value;

use crate::error::{Result, ScatterVizError};
use crate::model::{Dataset, Record, TabularExport};

/// Columnar data: field name to a column of values, aligned by position.
///
/// Field order is insertion order and becomes the key order of the
/// transposed records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Columns {
    fields: Vec<(String, Vec<Value>)>,
}

impl Columns {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Insert a column. Re-inserting a name replaces its values in place.
    pub fn insert(&mut self, name: impl Into<String>, values: Vec<Value>) {
        let name = name.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = values,
            None => self.fields.push((name, values)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&[Value]> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Value])> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v.as_slice()))
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Length of the shortest column, 0 when there are no columns
    pub fn min_len(&self) -> usize {
        self.fields.iter().map(|(_, v)| v.len()).min().unwrap_or(0)
    }

    /// Length of the longest column, 0 when there are no columns
    pub fn max_len(&self) -> usize {
        self.fields.iter().map(|(_, v)| v.len()).max().unwrap_or(0)
    }
}

impl<K: Into<String>> FromIterator<(K, Vec<Value>)> for Columns {
    fn from_iter<I: IntoIterator<Item = (K, Vec<Value>)>>(iter: I) -> Self {
        let mut columns = Columns::new();
        for (name, values) in iter {
            columns.insert(name, values);
        }
        columns
    }
}

/// A value to be normalized, tagged by its recognized shape
pub enum DataInput<'a> {
    /// Path to a JSON file, or a raw JSON payload already in record form
    Text(String),
    /// A data-frame-like value that exports row-oriented JSON
    Tabular(&'a dyn TabularExport),
    /// Field name to column of values
    Columns(Columns),
    /// Records already in row-oriented form
    Rows(Vec<Record>),
}

impl<'a> DataInput<'a> {
    pub fn tabular<T: TabularExport>(value: &'a T) -> Self {
        DataInput::Tabular(value)
    }

    /// Short name of the variant, for logging
    pub fn shape_name(&self) -> &'static str {
        match self {
            DataInput::Text(_) => "text",
            DataInput::Tabular(_) => "tabular",
            DataInput::Columns(_) => "columns",
            DataInput::Rows(_) => "rows",
        }
    }

    /// Detect the shape of a dynamic JSON value.
    ///
    /// Strings become `Text`, objects of arrays become `Columns` and arrays
    /// of objects become `Rows`. Everything else is rejected.
    pub fn from_json(value: Value) -> Result<DataInput<'static>> {
        match value {
            Value::String(s) => Ok(DataInput::Text(s)),
            Value::Object(map) => {
                let mut columns = Columns::new();
                for (name, column) in map {
                    match column {
                        Value::Array(values) => columns.insert(name, values),
                        other => {
                            return Err(ScatterVizError::UnsupportedShape(format!(
                                "mapping field '{}' holds {} instead of a sequence",
                                name,
                                JsonKind(&other)
                            )))
                        }
                    }
                }
                Ok(DataInput::Columns(columns))
            }
            Value::Array(items) => {
                let mut rows = Vec::with_capacity(items.len());
                for (i, item) in items.into_iter().enumerate() {
                    match item {
                        Value::Object(record) => rows.push(record),
                        other => {
                            return Err(ScatterVizError::UnsupportedShape(format!(
                                "sequence element {} is {} instead of a mapping",
                                i,
                                JsonKind(&other)
                            )))
                        }
                    }
                }
                Ok(DataInput::Rows(rows))
            }
            other => Err(ScatterVizError::UnsupportedShape(format!(
                "{} is not tabular data",
                JsonKind(&other)
            ))),
        }
    }
}

impl TryFrom<Value> for DataInput<'static> {
    type Error = ScatterVizError;

    fn try_from(value: Value) -> Result<Self> {
        DataInput::from_json(value)
    }
}

impl From<String> for DataInput<'_> {
    fn from(text: String) -> Self {
        DataInput::Text(text)
    }
}

impl From<&str> for DataInput<'_> {
    fn from(text: &str) -> Self {
        DataInput::Text(text.to_string())
    }
}

impl From<Columns> for DataInput<'_> {
    fn from(columns: Columns) -> Self {
        DataInput::Columns(columns)
    }
}

impl From<Vec<Record>> for DataInput<'_> {
    fn from(rows: Vec<Record>) -> Self {
        DataInput::Rows(rows)
    }
}

impl From<Dataset> for DataInput<'_> {
    fn from(dataset: Dataset) -> Self {
        DataInput::Rows(dataset.records)
    }
}

impl fmt::Debug for DataInput<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataInput::Text(s) => f.debug_tuple("Text").field(s).finish(),
            DataInput::Tabular(_) => f.write_str("Tabular(..)"),
            DataInput::Columns(c) => f.debug_tuple("Columns").field(c).finish(),
            DataInput::Rows(r) => f.debug_tuple("Rows").field(r).finish(),
        }
    }
}

/// Describes a JSON value's kind in error messages
struct JsonKind<'a>(&'a Value);

impl fmt::Display for JsonKind<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "boolean {}", b),
            Value::Number(n) => write!(f, "number {}", n),
            Value::String(_) => write!(f, "a string"),
            Value::Array(_) => write!(f, "a sequence"),
            Value::Object(_) => write!(f, "a mapping"),
        }
    }
}
