use crate::error::GazeError;

use super::Orientation;

/// Dense two-dimensional numeric array stored row-major.
///
/// The matrix carries no axis semantics; an [`Orientation`] supplied by the
/// caller decides whether rows or columns are observations.
#[derive(Debug, Clone, PartialEq)]
pub struct RawMatrix {
    rows: usize,
    cols: usize,
    values: Vec<f64>,
}

impl RawMatrix {
    /// Wrap row-major `values` as a `rows` x `cols` matrix.
    pub fn new(rows: usize, cols: usize, values: Vec<f64>) -> Result<Self, GazeError> {
        let context = || format!("matrix buffer for {rows}x{cols}");
        let expected = rows
            .checked_mul(cols)
            .ok_or_else(|| GazeError::shape(context(), usize::MAX, values.len()))?;
        if values.len() != expected {
            return Err(GazeError::shape(context(), expected, values.len()));
        }
        Ok(Self { rows, cols, values })
    }

    /// Build a matrix from nested rows. Ragged input is rejected.
    ///
    /// The width is taken from the first row, so an empty slice yields a
    /// 0x0 matrix. Use [`RawMatrix::from_rows_with_width`] when zero rows
    /// must still carry a column count.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self, GazeError> {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        Self::from_rows_with_width(rows, cols)
    }

    /// Build a `rows.len()` x `cols` matrix from nested rows.
    ///
    /// Every row must have exactly `cols` values.
    pub fn from_rows_with_width<R: AsRef<[f64]>>(rows: &[R], cols: usize) -> Result<Self, GazeError> {
        if let Some((i, row)) = rows
            .iter()
            .map(AsRef::as_ref)
            .enumerate()
            .find(|(_, row)| row.len() != cols)
        {
            return Err(GazeError::shape(format!("length of matrix row {i}"), cols, row.len()));
        }
        // Every row is already in memory, so the product cannot overflow.
        let mut values = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            values.extend_from_slice(row.as_ref());
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            values,
        })
    }

    /// `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Value at `(row, col)`, or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows && col < self.cols {
            Some(self.values[row * self.cols + col])
        } else {
            None
        }
    }

    /// A single row as a slice.
    pub fn row(&self, row: usize) -> Option<&[f64]> {
        if row < self.rows {
            let start = row * self.cols;
            Some(&self.values[start..start + self.cols])
        } else {
            None
        }
    }

    /// The row-major backing buffer.
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Swap rows and columns.
    pub fn transpose(&self) -> RawMatrix {
        let mut values = Vec::with_capacity(self.values.len());
        for c in 0..self.cols {
            for r in 0..self.rows {
                values.push(self.values[r * self.cols + c]);
            }
        }
        RawMatrix {
            rows: self.cols,
            cols: self.rows,
            values,
        }
    }

    /// Length of the observation axis.
    pub fn observation_count(&self, orientation: Orientation) -> usize {
        match orientation {
            Orientation::Row => self.rows,
            Orientation::Col => self.cols,
        }
    }

    /// Length of the non-observation (field) axis.
    pub fn field_count(&self, orientation: Orientation) -> usize {
        match orientation {
            Orientation::Row => self.cols,
            Orientation::Col => self.rows,
        }
    }
}
