use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A flat mapping of field name to scalar value.
///
/// Flatness is expected but not enforced; nested values pass through as-is.
pub type Record = Map<String, Value>;

/// Ordered sequence of records, serialized as a JSON array of objects
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset {
    pub records: Vec<Record>,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Compact JSON array literal
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
