pub mod error;
pub mod model;
pub mod normalize;
pub mod visualization;
pub mod config;

pub use crate::config::Config;
pub use crate::error::{Result, ScatterVizError};
pub use crate::model::{Columns, DataInput, Dataset, Record, Table, TabularExport};
pub use crate::normalize::{normalize, ColumnPolicy, Emit, NormalizeOptions, Normalized, TextPolicy};
pub use crate::visualization::{
    default_output_path, generate_html, local_url, render_document, AssetMode, PlotSpec,
    RenderOptions,
};
