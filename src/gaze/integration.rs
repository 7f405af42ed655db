//! Construction entry points for raw matrices and Arrow record batches.

use std::sync::Arc;

use arrow::record_batch::RecordBatch;

use crate::error::GazeError;
use crate::table::{ColumnSchema, MatrixSource, Orientation, RawMatrix};

use super::{Experiment, GazeContainer, RoleHints};

/// Build a [`GazeContainer`] from a two-dimensional numeric array.
///
/// `schema` names the fields along the non-observation axis of `data`.
/// Duplicate labels are rejected before the shape is checked.
///
/// ```
/// use gazeframe::gaze::{from_array, ColumnRole, RoleHints};
/// use gazeframe::table::{Orientation, RawMatrix};
///
/// let data = RawMatrix::from_rows(&[[0.0, 0.0], [1.0, 1.0], [2.0, 2.0]])?;
/// let gaze = from_array(
///     &data,
///     ["x", "y"],
///     None,
///     Orientation::Row,
///     RoleHints::new().pixel(["x", "y"]),
/// )?;
///
/// assert_eq!(gaze.n_observations(), 3);
/// assert_eq!(gaze.columns_for(ColumnRole::Pixel).unwrap(), ["x", "y"]);
/// assert!(gaze.columns_for(ColumnRole::Position).is_none());
/// # Ok::<(), gazeframe::error::GazeError>(())
/// ```
pub fn from_array<I, S>(
    data: &RawMatrix,
    schema: I,
    experiment: Option<Arc<Experiment>>,
    orientation: Orientation,
    hints: RoleHints,
) -> Result<GazeContainer, GazeError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let schema = ColumnSchema::new(schema)?;
    GazeContainer::from_source(
        MatrixSource::new(data, &schema, orientation),
        experiment,
        &hints,
    )
}

/// Build a [`GazeContainer`] from an Arrow record batch.
///
/// The batch is copied; the caller keeps ownership and it is never modified.
pub fn from_table(
    data: &RecordBatch,
    experiment: Option<Arc<Experiment>>,
    hints: RoleHints,
) -> Result<GazeContainer, GazeError> {
    GazeContainer::from_source(data, experiment, &hints)
}
