use std::path::PathBuf;
use clap::{Args, Parser, Subcommand};
use anyhow::Result;
use tracing_subscriber::EnvFilter;

use scatterviz::{
    default_output_path, generate_html, local_url, normalize, AssetMode, ColumnPolicy, Config,
    DataInput, Emit, NormalizeOptions, PlotSpec, TextPolicy,
};

#[derive(Parser)]
#[command(name = "scatterviz")]
#[command(author, version, about = "Render tabular JSON as a self-contained scatter plot page")]
struct Cli {
    /// Configuration file (default: ./scatterviz.toml if present)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct NormalizeArgs {
    /// Fail when columns differ in length instead of truncating
    #[arg(long)]
    strict: bool,

    /// Parse DATA as JSON and detect its shape instead of trusting it to be records
    #[arg(long)]
    reshape: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate an HTML scatter plot page
    Plot {
        /// Path to a JSON file, or a raw JSON array of records
        #[arg(value_name = "DATA")]
        data: String,

        /// Record field for the x axis
        #[arg(short = 'x', long)]
        x_key: String,

        /// Record field for the y axis
        #[arg(short = 'y', long)]
        y_key: String,

        /// Output HTML file path (default: <data>.html, or scatter.html for raw JSON)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Page title (default: "Scatter plot of <x> and <y>")
        #[arg(long)]
        title: Option<String>,

        /// X axis label
        #[arg(long, default_value = "")]
        xlab: String,

        /// Y axis label
        #[arg(long, default_value = "")]
        ylab: String,

        /// Inline c3.min.css, d3.min.js and c3.min.js from this directory.
        /// Only inline mode produces a self-contained page that works offline
        /// (default: CDN links, unless the config selects inline)
        #[arg(long, value_name = "DIR", conflicts_with = "cdn")]
        assets: Option<PathBuf>,

        /// Link the charting library from a CDN; the page needs network access
        #[arg(long)]
        cdn: bool,

        /// Page template to use instead of the built-in one
        #[arg(long, value_name = "PATH")]
        template: Option<PathBuf>,

        /// Print the page URL on a local web server at this port
        #[arg(long)]
        port: Option<u16>,

        #[command(flatten)]
        normalize: NormalizeArgs,
    },

    /// Print the normalized record array
    Normalize {
        /// Path to a JSON file, or a raw JSON payload
        #[arg(value_name = "DATA")]
        data: String,

        /// Pretty-print the output
        #[arg(long)]
        pretty: bool,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        normalize: NormalizeArgs,
    },
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_env("RUST_LOG").unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
}

fn normalize_options(config: &Config, args: &NormalizeArgs) -> NormalizeOptions {
    let mut options = config.normalize_options();
    if args.strict {
        options.columns = ColumnPolicy::Strict;
    }
    if args.reshape {
        options.text = TextPolicy::Reshape;
    }
    options
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Plot {
            data,
            x_key,
            y_key,
            output,
            title,
            xlab,
            ylab,
            assets,
            cdn,
            template,
            port,
            normalize: normalize_args,
        } => {
            let mut options = config.render_options();
            options.normalize = normalize_options(&config, &normalize_args);
            if let Some(dir) = assets {
                options.assets = AssetMode::Inline { dir };
            } else if cdn {
                options.assets = AssetMode::Cdn;
            }
            if template.is_some() {
                options.template = template;
            }

            let spec = PlotSpec {
                x_key,
                y_key,
                title,
                x_label: xlab,
                y_label: ylab,
            };
            let output_path = output.unwrap_or_else(|| default_output_path(&data));

            let written = generate_html(DataInput::Text(data), &spec, &options, &output_path)?;
            println!("Scatter plot generated: {}", written.display());

            if let Some(port) = port {
                println!("Serve its directory and open: {}", local_url(port, &written));
            }
        }

        Commands::Normalize {
            data,
            pretty,
            output,
            normalize: normalize_args,
        } => {
            let options = normalize_options(&config, &normalize_args);
            let json = normalize(DataInput::Text(data), Emit::Json, &options)?.into_json()?;

            let json = if pretty {
                let value: serde_json::Value = serde_json::from_str(&json)?;
                serde_json::to_string_pretty(&value)?
            } else {
                json
            };

            match output {
                Some(path) => {
                    std::fs::write(&path, json)?;
                    println!("Normalized data written to: {}", path.display());
                }
                None => println!("{}", json),
            }
        }
    }

    Ok(())
}
