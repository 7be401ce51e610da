//! Configuration for scatterviz.
//!
//! [`Config::load`] layers, lowest priority first: built-in defaults, a TOML
//! file (`scatterviz.toml` in the working directory unless a path is given)
//! and `SCATTERVIZ_*` environment variables such as
//! `SCATTERVIZ_OUTPUT__ASSET_MODE=inline`. Command-line flags are applied on
//! top by the binary.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::Result;
use crate::normalize::{ColumnPolicy, NormalizeOptions, TextPolicy};
use crate::visualization::{AssetMode, RenderOptions};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[normalize]
strict_columns = false
reshape_text   = false

[output]
asset_mode = "cdn"
assets_dir = "assets"
"#;

const DEFAULT_CONFIG_FILE: &str = "scatterviz.toml";
const ENV_PREFIX: &str = "SCATTERVIZ";

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub normalize: NormalizeConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// `[normalize]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NormalizeConfig {
    /// Fail on columns of unequal length instead of truncating
    #[serde(default)]
    pub strict_columns: bool,
    /// Parse text input and detect its shape instead of trusting it
    #[serde(default)]
    pub reshape_text: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetModeKind {
    Inline,
    #[default]
    Cdn,
}

/// `[output]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub asset_mode: AssetModeKind,
    /// Directory holding c3.min.css, d3.min.js and c3.min.js for inline mode
    #[serde(default = "default_assets_dir")]
    pub assets_dir: PathBuf,
    #[serde(default)]
    pub template: Option<PathBuf>,
}

fn default_assets_dir() -> PathBuf { PathBuf::from("assets") }

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            asset_mode: AssetModeKind::default(),
            assets_dir: default_assets_dir(),
            template: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load the layered configuration. An explicit `path` must exist, the
    /// default file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, None)
    }

    /// Like [`Config::load`], reading environment variables from `env`
    /// instead of the process environment when given.
    pub fn load_with_env(
        path: Option<&Path>,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::from(Path::new(DEFAULT_CONFIG_FILE)).required(false),
        };

        let cfg = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(file)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(env),
            )
            .build()?
            .try_deserialize()?;
        Ok(cfg)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        Self {
            normalize: NormalizeConfig::default(),
            output: OutputConfig::default(),
        }
    }

    pub fn normalize_options(&self) -> NormalizeOptions {
        NormalizeOptions {
            columns: if self.normalize.strict_columns {
                ColumnPolicy::Strict
            } else {
                ColumnPolicy::Truncate
            },
            text: if self.normalize.reshape_text {
                TextPolicy::Reshape
            } else {
                TextPolicy::Trusted
            },
        }
    }

    pub fn asset_mode(&self) -> AssetMode {
        match self.output.asset_mode {
            AssetModeKind::Inline => AssetMode::Inline {
                dir: self.output.assets_dir.clone(),
            },
            AssetModeKind::Cdn => AssetMode::Cdn,
        }
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            assets: self.asset_mode(),
            template: self.output.template.clone(),
            normalize: self.normalize_options(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
