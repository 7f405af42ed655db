use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::error::GazeError;

/// Which matrix axis holds the observations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Each row of the matrix is one observation.
    Row,
    /// Each column of the matrix is one observation.
    #[default]
    Col,
}

impl Orientation {
    /// The token this orientation parses from.
    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Row => "row",
            Orientation::Col => "col",
        }
    }
}

impl FromStr for Orientation {
    type Err = GazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "row" => Ok(Orientation::Row),
            "col" => Ok(Orientation::Col),
            other => Err(GazeError::InvalidOrientation(other.to_string())),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered, duplicate-free list of column labels for a raw matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSchema {
    labels: Vec<String>,
}

impl ColumnSchema {
    /// Create a schema, rejecting repeated labels.
    pub fn new<I, S>(labels: I) -> Result<Self, GazeError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        if let Some(dup) = find_duplicate(labels.iter().map(String::as_str)) {
            return Err(GazeError::DuplicateColumnLabel(dup.to_string()));
        }
        Ok(Self { labels })
    }

    /// Number of labels.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the schema has no labels.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Labels in declaration order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Iterate over labels in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }
}

/// Returns the first label that has already been seen earlier in `labels`.
pub(crate) fn find_duplicate<'a, I>(labels: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    labels.into_iter().find(|label| !seen.insert(*label))
}
