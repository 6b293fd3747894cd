/*!
ggscale Command Line Interface

Applies scale specifications to JSON data records and inspects the transform
registry and palette synthesis.
*/

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use ggscale::plot::scale::palettes::{default_discrete_colors, manual_discrete_colors};
use ggscale::plot::scale::{scales_from_json, Color, ALL_TRANSFORM_NAMES};
use ggscale::{apply_scales, Data, VERSION};

#[derive(Parser)]
#[command(name = "ggscale")]
#[command(about = "Scale transformations for grammar-of-graphics data")]
#[command(version = VERSION)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Apply a list of scales to a list of data records
    Apply {
        /// JSON file holding an array of scale specifications
        #[arg(long)]
        scales: PathBuf,

        /// JSON file holding an array of data records
        #[arg(long)]
        data: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },

    /// List the registered transform names
    Transforms,

    /// Print distinguishable colours as hex
    Palette {
        /// Number of colours
        n: usize,

        /// Colours to start from (any CSS colour)
        #[arg(long, num_args = 1..)]
        seed: Vec<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Debug,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // RUST_LOG overrides the flag
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn read_file(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Apply {
            scales,
            data,
            format,
        } => {
            let scales = scales_from_json(&read_file(&scales)?)
                .with_context(|| format!("decoding scales from {}", scales.display()))?;
            let datas: Vec<Data> = serde_json::from_str(&read_file(&data)?)
                .with_context(|| format!("decoding data from {}", data.display()))?;
            info!(scales = scales.len(), records = datas.len(), "applying scales");

            let aess = apply_scales(&scales, &datas)?;
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&aess)?),
                OutputFormat::Debug => println!("{:#?}", aess),
            }
        }

        Commands::Transforms => {
            for name in ALL_TRANSFORM_NAMES {
                println!("{}", name);
            }
        }

        Commands::Palette { n, seed } => {
            let seed = seed
                .iter()
                .map(|s| Color::parse(s))
                .collect::<Result<Vec<_>, _>>()?;
            let colors = if seed.is_empty() {
                default_discrete_colors(n)
            } else {
                manual_discrete_colors(n, &seed)
            };
            for color in colors {
                println!("{}", color);
            }
        }
    }

    Ok(())
}
