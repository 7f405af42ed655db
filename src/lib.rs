//! # gazeframe - Schema-Resolved Gaze Data
//!
//! `gazeframe` turns raw eye-tracking samples into a [`GazeContainer`]: an
//! Arrow-backed table plus a validated mapping from semantic roles (pixel,
//! position, velocity, acceleration) to concrete columns.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use gazeframe::gaze::{from_array, ColumnRole, Experiment, RoleHints};
//! use gazeframe::table::{Orientation, RawMatrix};
//!
//! let experiment = Arc::new(Experiment::new(1280, 1024, 38.0, 30.2, 68.0, 1000.0)?);
//!
//! let samples = RawMatrix::from_rows(&[
//!     [0.0, 640.0, 512.0],
//!     [1.0, 641.5, 511.0],
//!     [2.0, 643.0, 510.5],
//! ])?;
//!
//! let gaze = from_array(
//!     &samples,
//!     ["time", "x_pix", "y_pix"],
//!     Some(experiment),
//!     Orientation::Row,
//!     RoleHints::new().pixel(["x_pix", "y_pix"]),
//! )?;
//!
//! assert_eq!(gaze.n_observations(), 3);
//! assert_eq!(gaze.roles().unresolved().len(), 3);
//! assert_eq!(gaze.role_of("x_pix"), Some(ColumnRole::Pixel));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Record batches produced elsewhere go through [`gaze::from_table`], which
//! copies the batch and leaves the caller's data untouched.
//!
//! ## Architecture
//!
//! - [`table`]: raw matrices, column schemas and the owned [`NamedTable`](table::NamedTable)
//! - [`gaze`]: role hints, role resolution, experiment descriptor and the container
//! - [`error`]: error types shared by both

// Documentation lints - enforce complete documentation for publication
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

/// Error types
pub mod error;
pub mod gaze;
pub mod table;

pub use error::GazeError;
pub use gaze::GazeContainer;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::error::{ExperimentError, GazeError};
    pub use crate::gaze::{
        from_array, from_table, ColumnRole, ContainerSummary, Experiment, GazeContainer,
        RoleHints, RoleMapping, Screen,
    };
    pub use crate::table::{ColumnSchema, IntoNamedTable, MatrixSource, NamedTable, Orientation, RawMatrix};
}
