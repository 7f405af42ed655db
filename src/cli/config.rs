//! TOML configuration file support.
//!
//! Role hints and the experiment descriptor can live in a config file instead
//! of being repeated on the command line:
//!
//! ```toml
//! # gazeframe.toml
//! orientation = "row"
//!
//! [columns]
//! pixel = ["x_pix", "y_pix"]
//! position = ["x_dva", "y_dva"]
//!
//! [experiment]
//! sampling_rate = 1000.0
//!
//! [experiment.screen]
//! width_px = 1280
//! height_px = 1024
//! width_cm = 38.0
//! height_cm = 30.2
//! distance_cm = 68.0
//! origin = "lower left"
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use gazeframe::gaze::{Experiment, RoleHints};

/// Root configuration structure for gazeframe.toml files.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Matrix orientation for CSV input ("row" or "col").
    pub orientation: Option<String>,

    /// Column role hints.
    #[serde(default)]
    pub columns: RoleHints,

    /// Experiment descriptor attached to every container.
    pub experiment: Option<Experiment>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }
}
