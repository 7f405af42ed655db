use std::collections::{BTreeMap, HashMap};
use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::GazeError;
use crate::table::{find_duplicate, NamedTable};

/// Semantic category of a gaze column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnRole {
    /// Screen coordinates in pixels
    Pixel,
    /// Position in degrees of visual angle
    Position,
    /// Angular velocity (dva/s)
    Velocity,
    /// Angular acceleration (dva/s²)
    Acceleration,
}

impl ColumnRole {
    /// All roles in canonical order.
    pub const ALL: [ColumnRole; 4] = [
        ColumnRole::Pixel,
        ColumnRole::Position,
        ColumnRole::Velocity,
        ColumnRole::Acceleration,
    ];

    /// Lowercase role name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnRole::Pixel => "pixel",
            ColumnRole::Position => "position",
            ColumnRole::Velocity => "velocity",
            ColumnRole::Acceleration => "acceleration",
        }
    }

    /// Unit of the coordinate space the role lives in.
    pub fn unit(&self) -> &'static str {
        match self {
            ColumnRole::Pixel => "px",
            ColumnRole::Position => "dva",
            ColumnRole::Velocity => "dva/s",
            ColumnRole::Acceleration => "dva/s^2",
        }
    }
}

impl fmt::Display for ColumnRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Caller-supplied column role hints.
///
/// Each field is optional and independent. An absent or empty list leaves
/// the role unresolved.
///
/// ```
/// use gazeframe::gaze::{ColumnRole, RoleHints};
///
/// let hints = RoleHints::new()
///     .pixel(["x_pix", "y_pix"])
///     .position(["x_dva", "y_dva"]);
/// assert_eq!(hints.get(ColumnRole::Pixel).unwrap(), ["x_pix", "y_pix"]);
/// assert!(hints.get(ColumnRole::Velocity).is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RoleHints {
    /// Pixel coordinate columns
    pub pixel: Option<Vec<String>>,
    /// Degrees-of-visual-angle position columns
    pub position: Option<Vec<String>>,
    /// Angular velocity columns
    pub velocity: Option<Vec<String>>,
    /// Angular acceleration columns
    pub acceleration: Option<Vec<String>>,
}

impl RoleHints {
    /// Hints with every role absent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pixel columns.
    pub fn pixel<I, S>(self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with(ColumnRole::Pixel, columns)
    }

    /// Set the position columns.
    pub fn position<I, S>(self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with(ColumnRole::Position, columns)
    }

    /// Set the velocity columns.
    pub fn velocity<I, S>(self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with(ColumnRole::Velocity, columns)
    }

    /// Set the acceleration columns.
    pub fn acceleration<I, S>(self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with(ColumnRole::Acceleration, columns)
    }

    /// Set the columns for `role`.
    pub fn with<I, S>(mut self, role: ColumnRole, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        *self.slot_mut(role) = Some(columns.into_iter().map(Into::into).collect());
        self
    }

    /// The hint list for `role`, if one was given.
    pub fn get(&self, role: ColumnRole) -> Option<&[String]> {
        match role {
            ColumnRole::Pixel => self.pixel.as_deref(),
            ColumnRole::Position => self.position.as_deref(),
            ColumnRole::Velocity => self.velocity.as_deref(),
            ColumnRole::Acceleration => self.acceleration.as_deref(),
        }
    }

    /// Whether no role names any column.
    pub fn is_empty(&self) -> bool {
        ColumnRole::ALL
            .iter()
            .all(|r| self.get(*r).map_or(true, <[String]>::is_empty))
    }

    /// Overlay `other` on top of `self`; roles set in `other` win.
    pub fn merge(mut self, other: RoleHints) -> Self {
        for role in ColumnRole::ALL {
            if let Some(columns) = other.get(role) {
                *self.slot_mut(role) = Some(columns.to_vec());
            }
        }
        self
    }

    fn slot_mut(&mut self, role: ColumnRole) -> &mut Option<Vec<String>> {
        match role {
            ColumnRole::Pixel => &mut self.pixel,
            ColumnRole::Position => &mut self.position,
            ColumnRole::Velocity => &mut self.velocity,
            ColumnRole::Acceleration => &mut self.acceleration,
        }
    }
}

/// Resolved role → column assignment of a gaze container.
///
/// Only resolved roles are stored; a role with no entry is unresolved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RoleMapping {
    roles: BTreeMap<ColumnRole, Vec<String>>,
}

impl RoleMapping {
    /// Validate `hints` against `table` and build the mapping.
    ///
    /// Checks run over all hint lists before anything is built:
    /// 1. every hinted label exists in the table (`UnknownColumn`),
    /// 2. no label repeats inside one list (`DuplicateColumnLabel`),
    /// 3. no label is claimed by two roles (`AmbiguousColumnRole`).
    pub fn resolve(hints: &RoleHints, table: &NamedTable) -> Result<Self, GazeError> {
        let given: Vec<(ColumnRole, &[String])> = ColumnRole::ALL
            .iter()
            .filter_map(|role| hints.get(*role).map(|cols| (*role, cols)))
            .filter(|(_, cols)| !cols.is_empty())
            .collect();

        for (role, columns) in &given {
            if let Some(missing) = columns.iter().find(|c| !table.contains(c)) {
                return Err(GazeError::UnknownColumn {
                    role: *role,
                    column: missing.clone(),
                });
            }
        }

        for (_, columns) in &given {
            if let Some(dup) = find_duplicate(columns.iter().map(String::as_str)) {
                return Err(GazeError::DuplicateColumnLabel(dup.to_string()));
            }
        }

        let mut claims: HashMap<&str, Vec<ColumnRole>> = HashMap::new();
        let mut order: Vec<&str> = Vec::new();
        for (role, columns) in &given {
            for column in columns.iter() {
                let roles = claims.entry(column.as_str()).or_insert_with(|| {
                    order.push(column.as_str());
                    Vec::new()
                });
                roles.push(*role);
            }
        }
        for column in order {
            if let Some(roles) = claims.remove(column).filter(|r| r.len() > 1) {
                return Err(GazeError::AmbiguousColumnRole {
                    column: column.to_string(),
                    roles,
                });
            }
        }

        let roles: BTreeMap<ColumnRole, Vec<String>> = given
            .into_iter()
            .map(|(role, cols)| (role, cols.to_vec()))
            .collect();

        debug!(
            "Resolved column roles: {}",
            roles
                .iter()
                .map(|(role, cols)| format!("{role}={cols:?}"))
                .collect::<Vec<_>>()
                .join(" ")
        );

        Ok(Self { roles })
    }

    /// Columns assigned to `role`, or `None` if unresolved.
    pub fn get(&self, role: ColumnRole) -> Option<&[String]> {
        self.roles.get(&role).map(Vec::as_slice)
    }

    /// Whether `role` has columns assigned.
    pub fn is_resolved(&self, role: ColumnRole) -> bool {
        self.roles.contains_key(&role)
    }

    /// Resolved roles in canonical order.
    pub fn resolved(&self) -> impl Iterator<Item = (ColumnRole, &[String])> {
        self.roles.iter().map(|(role, cols)| (*role, cols.as_slice()))
    }

    /// Unresolved roles in canonical order.
    pub fn unresolved(&self) -> Vec<ColumnRole> {
        ColumnRole::ALL
            .into_iter()
            .filter(|r| !self.is_resolved(*r))
            .collect()
    }

    /// The role a column was assigned to, if any.
    pub fn role_of(&self, column: &str) -> Option<ColumnRole> {
        self.roles
            .iter()
            .find(|(_, cols)| cols.iter().any(|c| c == column))
            .map(|(role, _)| *role)
    }

    /// Whether no role is resolved.
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}
