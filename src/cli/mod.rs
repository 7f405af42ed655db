use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use gazeframe::gaze::RoleHints;

mod config;
mod demo;
mod inspect;

/// gazeframe - build and inspect schema-resolved gaze data
#[derive(Parser)]
#[command(name = "gazeframe")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a gaze container from a CSV or Parquet file and describe it
    Inspect {
        /// Input .csv or .parquet file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Load role hints and experiment from a TOML config file
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// CSV orientation: 'row' (header + one observation per line) or 'col' (one field per line)
        #[arg(short, long)]
        orientation: Option<String>,

        /// Pixel coordinate columns
        #[arg(long, value_delimiter = ',')]
        pixel: Option<Vec<String>>,

        /// Degrees-of-visual-angle position columns
        #[arg(long, value_delimiter = ',')]
        position: Option<Vec<String>>,

        /// Angular velocity columns
        #[arg(long, value_delimiter = ',')]
        velocity: Option<Vec<String>>,

        /// Angular acceleration columns
        #[arg(long, value_delimiter = ',')]
        acceleration: Option<Vec<String>>,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write a synthetic gaze recording to Parquet
    Demo {
        /// Output Parquet file path
        #[arg(value_name = "OUTPUT", default_value = "demo_gaze.parquet")]
        output: PathBuf,

        /// Number of samples to generate
        #[arg(short = 'n', long, default_value = "5000")]
        samples: usize,

        /// Sampling rate in Hz
        #[arg(short = 'r', long, default_value = "1000.0")]
        sampling_rate: f64,
    },
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Inspect {
            file,
            config,
            orientation,
            pixel,
            position,
            velocity,
            acceleration,
            json,
        } => inspect::run(inspect::InspectArgs {
            file,
            config,
            orientation,
            hints: RoleHints {
                pixel,
                position,
                velocity,
                acceleration,
            },
            json,
        }),
        Commands::Demo {
            output,
            samples,
            sampling_rate,
        } => demo::run(output, samples, sampling_rate),
    }
}
