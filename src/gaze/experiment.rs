use serde::{Deserialize, Serialize};

use crate::error::ExperimentError;

fn default_origin() -> String {
    "lower left".to_string()
}

/// Physical screen geometry of a recording setup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Screen {
    /// Screen width in pixels
    pub width_px: u32,
    /// Screen height in pixels
    pub height_px: u32,
    /// Screen width in centimeters
    pub width_cm: f64,
    /// Screen height in centimeters
    pub height_cm: f64,
    /// Eye-to-screen distance in centimeters
    pub distance_cm: f64,
    /// Location of the pixel origin ("lower left", "center", ...)
    #[serde(default = "default_origin")]
    pub origin: String,
}

/// Calibration context of an eye-tracking experiment.
///
/// Gaze containers hold it behind an `Arc` and never modify it, so one
/// descriptor can back any number of containers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experiment {
    /// Screen geometry
    pub screen: Screen,
    /// Sampling rate of the eye tracker in Hz
    pub sampling_rate: f64,
}

impl Experiment {
    /// Create a validated experiment with a lower-left pixel origin.
    pub fn new(
        width_px: u32,
        height_px: u32,
        width_cm: f64,
        height_cm: f64,
        distance_cm: f64,
        sampling_rate: f64,
    ) -> Result<Self, ExperimentError> {
        let experiment = Self {
            screen: Screen {
                width_px,
                height_px,
                width_cm,
                height_cm,
                distance_cm,
                origin: default_origin(),
            },
            sampling_rate,
        };
        experiment.validate()?;
        Ok(experiment)
    }

    /// Replace the pixel origin.
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.screen.origin = origin.into();
        self
    }

    /// Check that every dimension and the sampling rate are positive.
    pub fn validate(&self) -> Result<(), ExperimentError> {
        let checks = [
            ("screen.width_px", self.screen.width_px as f64),
            ("screen.height_px", self.screen.height_px as f64),
            ("screen.width_cm", self.screen.width_cm),
            ("screen.height_cm", self.screen.height_cm),
            ("screen.distance_cm", self.screen.distance_cm),
            ("sampling_rate", self.sampling_rate),
        ];
        for (field, value) in checks {
            if !(value.is_finite() && value > 0.0) {
                return Err(ExperimentError::NonPositive { field, value });
            }
        }
        Ok(())
    }
}
