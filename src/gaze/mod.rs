//! # Gaze Containers
//!
//! A [`GazeContainer`] couples one owned [`NamedTable`](crate::table::NamedTable)
//! with a resolved mapping from semantic role to column labels:
//!
//! | Role | Coordinate space | Unit |
//! |------|------------------|------|
//! | pixel | screen coordinates | px |
//! | position | degrees of visual angle | dva |
//! | velocity | angular velocity | dva/s |
//! | acceleration | angular acceleration | dva/s² |
//!
//! Roles are given as [`RoleHints`]. Resolution validates all hints at once
//! before the container exists: unknown labels, labels listed twice, and
//! labels claimed by two roles are all rejected. Roles without hints stay
//! unresolved; nothing is inferred.
//!
//! An optional [`Experiment`] is attached by `Arc` and never read here.

mod container;
mod experiment;
pub mod integration;
mod roles;


pub use container::{ContainerSummary, GazeContainer};
pub use experiment::{Experiment, Screen};
pub use integration::{from_array, from_table};
pub use roles::{ColumnRole, RoleHints, RoleMapping};
