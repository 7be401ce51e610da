use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::Result;
use crate::model::DataInput;
use crate::normalize::{normalize, Emit, NormalizeOptions};
use crate::visualization::assets::{read_asset, AssetBlocks, AssetMode};
use crate::visualization::render::{escape_html, js_string, render, script_safe};
use crate::visualization::templates::SCATTER_TEMPLATE;

/// What to plot and how to label it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlotSpec {
    /// Record field for the x axis
    pub x_key: String,
    /// Record field for the y axis
    pub y_key: String,
    /// Page title, defaults to "Scatter plot of <x_key> and <y_key>"
    pub title: Option<String>,
    pub x_label: String,
    pub y_label: String,
}

impl PlotSpec {
    pub fn new(x_key: impl Into<String>, y_key: impl Into<String>) -> Self {
        Self {
            x_key: x_key.into(),
            y_key: y_key.into(),
            ..Default::default()
        }
    }

    pub fn title(&self) -> String {
        self.title
            .clone()
            .unwrap_or_else(|| format!("Scatter plot of {} and {}", self.x_key, self.y_key))
    }
}

#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    pub assets: AssetMode,
    /// Template file to use instead of the built-in page
    pub template: Option<PathBuf>,
    pub normalize: NormalizeOptions,
}

/// Fill the page template with the data literal, labels and asset blocks
pub fn render_document(
    template: &str,
    data_json: &str,
    spec: &PlotSpec,
    assets: &AssetBlocks,
) -> String {
    let values = [
        ("title", escape_html(&spec.title())),
        ("xlab", escape_html(&spec.x_label)),
        ("ylab", escape_html(&spec.y_label)),
        ("xlab_js", js_string(&spec.x_label)),
        ("ylab_js", js_string(&spec.y_label)),
        ("xkey", js_string(&spec.x_key)),
        ("ykey", js_string(&spec.y_key)),
        ("c3css", assets.c3css.clone()),
        ("d3js", assets.d3js.clone()),
        ("c3js", assets.c3js.clone()),
        ("data", script_safe(data_json)),
    ];

    render(template, |name| {
        values
            .iter()
            .find(|(token, _)| *token == name)
            .map(|(_, value)| value.as_str())
    })
}

/// Normalize `input`, render the scatter page and write it to `output_path`
pub fn generate_html(
    input: DataInput<'_>,
    spec: &PlotSpec,
    options: &RenderOptions,
    output_path: &Path,
) -> Result<PathBuf> {
    let data_json = normalize(input, Emit::Json, &options.normalize)?.into_json()?;

    let template = match &options.template {
        Some(path) => read_asset(path)?,
        None => SCATTER_TEMPLATE.to_string(),
    };
    let assets = options.assets.load()?;

    let html = render_document(&template, &data_json, spec, &assets);

    std::fs::write(output_path, html)?;
    info!(path = %output_path.display(), "wrote scatter plot");
    Ok(output_path.to_path_buf())
}

/// Output path when none is given: `<data>.html` next to a data file, or
/// `scatter.html` for raw JSON. A data file that already ends in `.html`
/// gets `<stem>.scatter.html` so it is never overwritten.
pub fn default_output_path(data: &str) -> PathBuf {
    let path = Path::new(data);
    if !path.is_file() {
        return PathBuf::from("scatter.html");
    }

    let candidate = path.with_extension("html");
    if candidate == path {
        let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("data");
        path.with_file_name(format!("{}.scatter.html", stem))
    } else {
        candidate
    }
}

/// URL of the written page on a local web server serving its directory
pub fn local_url(port: u16, output_path: &Path) -> String {
    let file_name = output_path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("");
    format!("http://localhost:{}/{}", port, file_name)
}
