use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScatterVizError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Unexpected data format or shape: {0}")]
    UnsupportedShape(String),

    #[error("Column length mismatch: column '{field}' has {found} values, expected {expected}")]
    ColumnLengthMismatch {
        field: String,
        expected: usize,
        found: usize,
    },

    #[error("Cannot read asset {}: {source}", .path.display())]
    Asset {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

pub type Result<T> = std::result::Result<T, ScatterVizError>;
