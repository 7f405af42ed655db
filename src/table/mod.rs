//! # Internal Tabular Representation
//!
//! Every gaze container owns exactly one [`NamedTable`]: an Arrow
//! `RecordBatch` whose rows are time-ordered observations and whose columns
//! carry unique labels.
//!
//! Two adapters produce a `NamedTable`:
//!
//! ```text
//!   RawMatrix + ColumnSchema + Orientation        RecordBatch (caller owned)
//!                 │                                        │
//!                 ▼                                        ▼
//!          ┌─────────────┐                         ┌──────────────┐
//!          │ MatrixSource│                         │ &RecordBatch │
//!          └─────────────┘                         └──────────────┘
//!                 │          IntoNamedTable                │
//!                 └──────────────────┬─────────────────────┘
//!                                    ▼
//!                              ┌────────────┐
//!                              │ NamedTable │
//!                              └────────────┘
//! ```
//!
//! The matrix path is a pure reshape/relabel: values are copied verbatim
//! into non-nullable `Float64` columns. The record batch path deep-copies
//! the caller's columns so the resulting table never shares buffers with
//! the source.

mod matrix;
mod named;
mod schema;

#[cfg(test)]
mod tests;

pub use matrix::RawMatrix;
pub use named::{IntoNamedTable, MatrixSource, NamedTable};
pub use schema::{ColumnSchema, Orientation};

pub(crate) use schema::find_duplicate;
