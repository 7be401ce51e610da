use serde_json::Value;

use crate::error::Result;
use crate::model::{Dataset, Record};

/// A value able to export itself as row-oriented JSON, i.e. an array of
/// records (`orient="records"` in data-frame terms).
///
/// Implement this as an adapter for data-frame types to feed them to the
/// normalizer.
pub trait TabularExport {
    fn to_records_json(&self) -> Result<String>;
}

/// Minimal in-memory data frame: a header plus rows of cells
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl Table {
    pub fn new<S: Into<String>>(columns: impl IntoIterator<Item = S>) -> Self {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<Value>) {
        self.rows.push(row);
    }

    /// Pair each row with the header. Short rows yield only the fields they
    /// have, cells past the header are dropped.
    pub fn to_records(&self) -> Vec<Record> {
        self.rows
            .iter()
            .map(|row| {
                self.columns
                    .iter()
                    .zip(row.iter())
                    .map(|(name, cell)| (name.clone(), cell.clone()))
                    .collect()
            })
            .collect()
    }
}

impl TabularExport for Table {
    fn to_records_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&Dataset::new(self.to_records()))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_table_exports_records() {
        let mut table = Table::new(["station", "level"]);
        table.push_row(vec![json!(123), json!(1.2)]);
        table.push_row(vec![json!(124), json!(0.2)]);
        assert_eq!(
            table.to_records_json().unwrap(),
            r#"[{"station":123,"level":1.2},{"station":124,"level":0.2}]"#
        );
    }

    #[test]
    fn test_ragged_rows() {
        let mut table = Table::new(["a", "b"]);
        table.push_row(vec![json!(1)]);
        table.push_row(vec![json!(1), json!(2), json!(3)]);
        assert_eq!(table.to_records_json().unwrap(), r#"[{"a":1},{"a":1,"b":2}]"#);
    }
}
