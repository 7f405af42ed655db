use std::fmt;
use std::sync::Arc;

use arrow::array::{ArrayRef, Float64Array};
use arrow::record_batch::RecordBatch;
use log::debug;
use serde::Serialize;

use crate::error::GazeError;
use crate::table::{IntoNamedTable, NamedTable};

use super::{ColumnRole, Experiment, RoleHints, RoleMapping};

/// Canonical in-memory gaze data.
///
/// Owns its table and a role mapping fixed at construction. Derived columns
/// may be appended later with [`GazeContainer::add_column`], but the role
/// assignment never changes.
#[derive(Debug, Clone)]
pub struct GazeContainer {
    table: NamedTable,
    roles: RoleMapping,
    experiment: Option<Arc<Experiment>>,
}

impl GazeContainer {
    /// Resolve `hints` against `table` and assemble the container.
    ///
    /// Construction is all-or-nothing: any validation failure returns an
    /// error and no container. Physical derivability (e.g. angular roles
    /// without an experiment) is not checked here.
    pub fn build(
        table: NamedTable,
        experiment: Option<Arc<Experiment>>,
        hints: &RoleHints,
    ) -> Result<Self, GazeError> {
        let roles = RoleMapping::resolve(hints, &table)?;

        debug!(
            "Built gaze container: {} observations, {} columns, {} resolved roles, experiment {}",
            table.num_rows(),
            table.num_columns(),
            roles.resolved().count(),
            if experiment.is_some() { "attached" } else { "absent" }
        );

        Ok(Self {
            table,
            roles,
            experiment,
        })
    }

    /// Materialize any [`IntoNamedTable`] source and build from it.
    pub fn from_source<S: IntoNamedTable>(
        source: S,
        experiment: Option<Arc<Experiment>>,
        hints: &RoleHints,
    ) -> Result<Self, GazeError> {
        let table = source.into_named_table()?;
        Self::build(table, experiment, hints)
    }

    /// The owned table.
    pub fn table(&self) -> &NamedTable {
        &self.table
    }

    /// The owned table as an Arrow batch.
    pub fn record_batch(&self) -> &RecordBatch {
        self.table.record_batch()
    }

    /// Number of observations.
    pub fn n_observations(&self) -> usize {
        self.table.num_rows()
    }

    /// Number of columns, including derived ones.
    pub fn n_columns(&self) -> usize {
        self.table.num_columns()
    }

    /// Column labels in table order.
    pub fn column_names(&self) -> Vec<&str> {
        self.table.column_names()
    }

    /// Column by label.
    pub fn column(&self, name: &str) -> Option<&ArrayRef> {
        self.table.column(name)
    }

    /// `Float64` column by label.
    pub fn column_f64(&self, name: &str) -> Option<&Float64Array> {
        self.table.column_f64(name)
    }

    /// The resolved role mapping.
    pub fn roles(&self) -> &RoleMapping {
        &self.roles
    }

    /// Columns assigned to `role`, or `None` if the role is unresolved.
    pub fn columns_for(&self, role: ColumnRole) -> Option<&[String]> {
        self.roles.get(role)
    }

    /// The role assigned to `column`, if any.
    pub fn role_of(&self, column: &str) -> Option<ColumnRole> {
        self.roles.role_of(column)
    }

    /// The shared experiment descriptor.
    pub fn experiment(&self) -> Option<&Arc<Experiment>> {
        self.experiment.as_ref()
    }

    /// Whether an experiment descriptor is attached.
    pub fn has_experiment(&self) -> bool {
        self.experiment.is_some()
    }

    /// Append a derived column.
    ///
    /// Fails with `DuplicateColumnLabel` if `name` exists and with
    /// `ShapeMismatch` if `array` does not have one value per observation.
    /// The container is left untouched on failure.
    pub fn add_column(&mut self, name: &str, array: ArrayRef) -> Result<(), GazeError> {
        self.table = self.table.with_column(name, array)?;
        debug!("Added derived column '{name}'");
        Ok(())
    }

    /// Serializable overview of the container.
    pub fn summary(&self) -> ContainerSummary {
        ContainerSummary {
            n_observations: self.n_observations(),
            columns: self.column_names().into_iter().map(String::from).collect(),
            roles: self.roles.clone(),
            unresolved: self.roles.unresolved(),
            experiment: self.experiment.as_deref().cloned(),
        }
    }
}

/// Overview of a container, suitable for printing or JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct ContainerSummary {
    /// Number of observations
    pub n_observations: usize,
    /// Column labels in table order
    pub columns: Vec<String>,
    /// Resolved roles
    pub roles: RoleMapping,
    /// Roles without columns
    pub unresolved: Vec<ColumnRole>,
    /// Attached experiment, if any
    pub experiment: Option<Experiment>,
}

impl fmt::Display for ContainerSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Observations: {}", self.n_observations)?;
        writeln!(f, "Columns ({}): {}", self.columns.len(), self.columns.join(", "))?;
        writeln!(f, "Roles:")?;
        for role in ColumnRole::ALL {
            match self.roles.get(role) {
                Some(cols) => writeln!(f, "  {role:<13} [{}] {}", role.unit(), cols.join(", "))?,
                None => writeln!(f, "  {role:<13} <unresolved>")?,
            }
        }
        match &self.experiment {
            Some(exp) => write!(
                f,
                "Experiment: {}x{} px, {}x{} cm at {} cm, {} Hz (origin: {})",
                exp.screen.width_px,
                exp.screen.height_px,
                exp.screen.width_cm,
                exp.screen.height_cm,
                exp.screen.distance_cm,
                exp.sampling_rate,
                exp.screen.origin
            ),
            None => write!(f, "Experiment: <none>"),
        }
    }
}
