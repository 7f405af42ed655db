use crate::gaze::ColumnRole;

/// Errors that can occur while building a gaze container
#[derive(Debug, thiserror::Error)]
pub enum GazeError {
    /// Schema length and data axis length disagree
    #[error("Shape mismatch in {context}: expected {expected}, found {found}")]
    ShapeMismatch {
        /// What was being measured (e.g. "schema length vs. matrix columns")
        context: String,
        /// Expected length
        expected: usize,
        /// Actual length found
        found: usize,
    },

    /// A column label occurs more than once
    #[error("Duplicate column label: '{0}'")]
    DuplicateColumnLabel(String),

    /// A role hint names a column the table does not have
    #[error("Unknown {role} column: '{column}'")]
    UnknownColumn {
        /// Role whose hint list referenced the column
        role: ColumnRole,
        /// The missing column label
        column: String,
    },

    /// A column is claimed by more than one role
    #[error("Column '{column}' is claimed by more than one role: {}", format_roles(.roles))]
    AmbiguousColumnRole {
        /// The contested column label
        column: String,
        /// Every role that claimed the column, in canonical order
        roles: Vec<ColumnRole>,
    },

    /// Orientation token is neither `row` nor `col`
    #[error("Invalid orientation '{0}': expected 'row' or 'col'")]
    InvalidOrientation(String),

    /// Error from the Arrow library during table construction
    #[error("Arrow error: {0}")]
    ArrowError(#[from] arrow::error::ArrowError),
}

impl GazeError {
    pub(crate) fn shape(context: impl Into<String>, expected: usize, found: usize) -> Self {
        Self::ShapeMismatch {
            context: context.into(),
            expected,
            found,
        }
    }
}

fn format_roles(roles: &[ColumnRole]) -> String {
    roles
        .iter()
        .map(|r| r.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Errors raised when an experiment descriptor is physically impossible
#[derive(Debug, thiserror::Error)]
pub enum ExperimentError {
    /// A dimension or rate that must be positive is not
    #[error("{field} must be positive and finite, got {value}")]
    NonPositive {
        /// Name of the offending field
        field: &'static str,
        /// Value that was supplied
        value: f64,
    },
}
