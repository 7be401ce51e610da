use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, ScatterVizError};
use crate::visualization::templates::{
    C3_CSS_CDN, C3_CSS_FILE, C3_JS_CDN, C3_JS_FILE, D3_JS_CDN, D3_JS_FILE,
};

/// Where the charting library comes from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AssetMode {
    /// Read the library files from `dir` and inline them, giving a
    /// self-contained page
    Inline { dir: PathBuf },
    /// Link the library from a CDN; the page only renders online
    #[default]
    Cdn,
}

/// Markup blocks for the stylesheet and scripts, ready for substitution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetBlocks {
    pub c3css: String,
    pub d3js: String,
    pub c3js: String,
}

impl AssetMode {
    pub fn load(&self) -> Result<AssetBlocks> {
        match self {
            AssetMode::Inline { dir } => {
                debug!(dir = %dir.display(), "inlining charting assets");
                Ok(AssetBlocks {
                    c3css: format!(
                        "<style type=\"text/css\">{}</style>",
                        read_asset(&dir.join(C3_CSS_FILE))?
                    ),
                    d3js: format!(
                        "<script type=\"text/javascript\">\n{}</script>",
                        read_asset(&dir.join(D3_JS_FILE))?
                    ),
                    c3js: format!(
                        "<script type=\"text/javascript\">\n{}\n</script>",
                        read_asset(&dir.join(C3_JS_FILE))?
                    ),
                })
            }
            AssetMode::Cdn => Ok(AssetBlocks {
                c3css: format!(
                    "<link href=\"{}\" media=\"screen\" rel=\"stylesheet\" type=\"text/css\" />",
                    C3_CSS_CDN
                ),
                d3js: format!("<script src=\"{}\"></script>", D3_JS_CDN),
                c3js: format!("<script src=\"{}\"></script>", C3_JS_CDN),
            }),
        }
    }
}

/// Read a text asset or template file
pub fn read_asset(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| ScatterVizError::Asset {
        path: path.to_path_buf(),
        source,
    })
}
