//! # gazeframe
//!
//! Command-line front end for building gaze containers from files.
//!
//! ## Usage
//!
//! ```bash
//! # Write a synthetic recording
//! gazeframe demo demo_gaze.parquet
//!
//! # Resolve roles and describe the result
//! gazeframe inspect demo_gaze.parquet --pixel x_pix,y_pix
//!
//! # CSV input with roles and experiment from a config file
//! gazeframe inspect samples.csv --config gazeframe.toml --json
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::init_logging(cli.verbosity());
    cli::dispatch(cli)
}
