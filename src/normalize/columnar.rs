use serde::Deserialize;
use tracing::warn;

use crate::error::{Result, ScatterVizError};
use crate::model::{Columns, Dataset, Record};

/// How columns of unequal length are transposed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnPolicy {
    /// Stop at the shortest column. Extra values are dropped with a warning
    /// in the log, not an error
    #[default]
    Truncate,
    /// Fail when any column differs in length from the first
    Strict,
}

/// Transpose columnar data into records.
///
/// Record `i` holds value `i` of every column, keyed in column order. The
/// number of records is the length of the shortest column under
/// [`ColumnPolicy::Truncate`]. No columns yields an empty dataset.
pub fn transpose(columns: &Columns, policy: ColumnPolicy) -> Result<Dataset> {
    let len = columns.min_len();

    match policy {
        ColumnPolicy::Strict => check_lengths(columns)?,
        ColumnPolicy::Truncate => {
            let longest = columns.max_len();
            if longest > len {
                warn!(
                    rows = len,
                    dropped = longest - len,
                    "columns differ in length, truncating to the shortest"
                );
            }
        }
    }

    let records = (0..len)
        .map(|i| {
            columns
                .iter()
                .map(|(name, values)| (name.to_string(), values[i].clone()))
                .collect::<Record>()
        })
        .collect();

    Ok(Dataset::new(records))
}

fn check_lengths(columns: &Columns) -> Result<()> {
    let mut iter = columns.iter();
    let expected = match iter.next() {
        Some((_, values)) => values.len(),
        None => return Ok(()),
    };

    for (name, values) in iter {
        if values.len() != expected {
            return Err(ScatterVizError::ColumnLengthMismatch {
                field: name.to_string(),
                expected,
                found: values.len(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn columns(pairs: &[(&str, Vec<Value>)]) -> Columns {
        pairs.iter().cloned().collect()
    }

    #[test]
    fn test_equal_lengths() {
        let input = columns(&[
            ("a", vec![json!(1), json!(2), json!(3)]),
            ("b", vec![json!(4), json!(5), json!(6)]),
        ]);
        let dataset = transpose(&input, ColumnPolicy::Truncate).unwrap();
        assert_eq!(dataset.len(), 3);
        assert!(dataset.iter().all(|r| r.contains_key("a") && r.contains_key("b")));
        assert_eq!(
            serde_json::to_value(&dataset).unwrap(),
            json!([{"a": 1, "b": 4}, {"a": 2, "b": 5}, {"a": 3, "b": 6}])
        );
    }

    #[test]
    fn test_truncates_to_shortest() {
        let input = columns(&[
            ("a", vec![json!(1), json!(2)]),
            ("b", vec![json!(4), json!(5), json!(6)]),
        ]);
        let dataset = transpose(&input, ColumnPolicy::Truncate).unwrap();
        assert_eq!(
            serde_json::to_value(&dataset).unwrap(),
            json!([{"a": 1, "b": 4}, {"a": 2, "b": 5}])
        );
    }

    #[test]
    fn test_empty_column_gives_no_records() {
        let input = columns(&[("a", vec![]), ("b", vec![json!(1)])]);
        assert!(transpose(&input, ColumnPolicy::Truncate).unwrap().is_empty());
    }

    #[test]
    fn test_no_columns() {
        let dataset = transpose(&Columns::new(), ColumnPolicy::Strict).unwrap();
        assert!(dataset.is_empty());
    }

    #[test]
    fn test_strict_rejects_mismatch() {
        let input = columns(&[
            ("a", vec![json!(1), json!(2)]),
            ("b", vec![json!(4), json!(5), json!(6)]),
        ]);
        match transpose(&input, ColumnPolicy::Strict) {
            Err(ScatterVizError::ColumnLengthMismatch { field, expected, found }) => {
                assert_eq!(field, "b");
                assert_eq!(expected, 2);
                assert_eq!(found, 3);
            }
            other => panic!("expected length mismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_key_order_follows_columns() {
        let input = columns(&[("z", vec![json!(1)]), ("a", vec![json!(2)])]);
        let dataset = transpose(&input, ColumnPolicy::Strict).unwrap();
        assert_eq!(dataset.to_json().unwrap(), r#"[{"z":1,"a":2}]"#);
    }
}
