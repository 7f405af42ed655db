use std::borrow::Cow;
use std::sync::Arc;

use arrow::array::{make_array, Array, ArrayRef, Float64Array, MutableArrayData};
use arrow::datatypes::{DataType, Field, Schema, SchemaRef};
use arrow::record_batch::{RecordBatch, RecordBatchOptions};
use log::debug;

use crate::error::GazeError;

use super::{find_duplicate, ColumnSchema, Orientation, RawMatrix};

/// Anything that can be turned into a [`NamedTable`].
///
/// Both construction paths (raw matrix and caller-supplied record batch)
/// implement this, so the gaze container only depends on the resulting
/// table shape and never on where it came from.
pub trait IntoNamedTable {
    /// Materialize the source as an owned, uniquely-labelled table.
    fn into_named_table(self) -> Result<NamedTable, GazeError>;
}

/// A raw matrix together with the labels and orientation needed to read it.
#[derive(Debug, Clone, Copy)]
pub struct MatrixSource<'a> {
    /// Numeric data
    pub data: &'a RawMatrix,
    /// One label per field
    pub schema: &'a ColumnSchema,
    /// Which axis holds observations
    pub orientation: Orientation,
}

impl<'a> MatrixSource<'a> {
    /// Bundle matrix, schema and orientation.
    pub fn new(data: &'a RawMatrix, schema: &'a ColumnSchema, orientation: Orientation) -> Self {
        Self {
            data,
            schema,
            orientation,
        }
    }
}

impl IntoNamedTable for MatrixSource<'_> {
    fn into_named_table(self) -> Result<NamedTable, GazeError> {
        NamedTable::from_matrix(self.data, self.schema, self.orientation)
    }
}

impl IntoNamedTable for &RecordBatch {
    fn into_named_table(self) -> Result<NamedTable, GazeError> {
        NamedTable::from_record_batch(self)
    }
}

impl IntoNamedTable for NamedTable {
    fn into_named_table(self) -> Result<NamedTable, GazeError> {
        Ok(self)
    }
}

/// Row-per-observation table with unique column labels.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedTable {
    batch: RecordBatch,
}

impl NamedTable {
    /// Reshape and label a raw matrix.
    ///
    /// With [`Orientation::Col`] the matrix is transposed first so that
    /// observations become rows. No numeric transformation is applied.
    pub fn from_matrix(
        data: &RawMatrix,
        schema: &ColumnSchema,
        orientation: Orientation,
    ) -> Result<Self, GazeError> {
        let field_count = data.field_count(orientation);
        if schema.len() != field_count {
            return Err(GazeError::shape(
                format!(
                    "schema length vs. {} axis of {}x{} matrix (orientation '{orientation}')",
                    match orientation {
                        Orientation::Row => "column",
                        Orientation::Col => "row",
                    },
                    data.rows(),
                    data.cols()
                ),
                field_count,
                schema.len(),
            ));
        }

        let rows: Cow<'_, RawMatrix> = match orientation {
            Orientation::Row => Cow::Borrowed(data),
            Orientation::Col => Cow::Owned(data.transpose()),
        };
        let n_obs = rows.rows();

        let fields: Vec<Field> = schema
            .iter()
            .map(|label| Field::new(label, DataType::Float64, false))
            .collect();
        let columns: Vec<ArrayRef> = (0..rows.cols())
            .map(|c| {
                let values: Vec<f64> = rows
                    .as_slice()
                    .iter()
                    .skip(c)
                    .step_by(rows.cols())
                    .copied()
                    .collect();
                Arc::new(Float64Array::from(values)) as ArrayRef
            })
            .collect();

        debug!(
            "Materialized {}x{} matrix as table with {} observations and {} columns",
            data.rows(),
            data.cols(),
            n_obs,
            columns.len()
        );

        let batch = RecordBatch::try_new_with_options(
            Arc::new(Schema::new(fields)),
            columns,
            &RecordBatchOptions::new().with_row_count(Some(n_obs)),
        )?;
        Ok(Self { batch })
    }

    /// Copy a caller-owned record batch.
    ///
    /// Column order and labels are kept as-is. Every column buffer is
    /// deep-copied so the table shares no memory with `source`.
    pub fn from_record_batch(source: &RecordBatch) -> Result<Self, GazeError> {
        let schema = source.schema_ref();
        if let Some(dup) = find_duplicate(schema.fields().iter().map(|f| f.name().as_str())) {
            return Err(GazeError::DuplicateColumnLabel(dup.to_string()));
        }

        let columns: Vec<ArrayRef> = source.columns().iter().map(deep_copy).collect();
        let schema: SchemaRef = Arc::new(schema.as_ref().clone());

        debug!(
            "Copied record batch with {} rows and {} columns",
            source.num_rows(),
            columns.len()
        );

        let batch = RecordBatch::try_new_with_options(
            schema,
            columns,
            &RecordBatchOptions::new().with_row_count(Some(source.num_rows())),
        )?;
        Ok(Self { batch })
    }

    /// Number of observations (rows).
    pub fn num_rows(&self) -> usize {
        self.batch.num_rows()
    }

    /// Number of columns.
    pub fn num_columns(&self) -> usize {
        self.batch.num_columns()
    }

    /// Column labels in table order.
    pub fn column_names(&self) -> Vec<&str> {
        self.batch
            .schema_ref()
            .fields()
            .iter()
            .map(|f| f.name().as_str())
            .collect()
    }

    /// Whether a column with this label exists.
    pub fn contains(&self, name: &str) -> bool {
        self.batch.schema_ref().index_of(name).is_ok()
    }

    /// Column by label.
    pub fn column(&self, name: &str) -> Option<&ArrayRef> {
        self.batch.column_by_name(name)
    }

    /// Column by label, if it is `Float64`.
    pub fn column_f64(&self, name: &str) -> Option<&Float64Array> {
        self.column(name)
            .and_then(|c| c.as_any().downcast_ref::<Float64Array>())
    }

    /// The underlying Arrow batch.
    pub fn record_batch(&self) -> &RecordBatch {
        &self.batch
    }

    /// Consume the table, returning the Arrow batch.
    pub fn into_record_batch(self) -> RecordBatch {
        self.batch
    }

    /// A new table with `array` appended as column `name`.
    pub(crate) fn with_column(&self, name: &str, array: ArrayRef) -> Result<Self, GazeError> {
        if self.contains(name) {
            return Err(GazeError::DuplicateColumnLabel(name.to_string()));
        }
        if array.len() != self.num_rows() {
            return Err(GazeError::shape(
                format!("length of derived column '{name}'"),
                self.num_rows(),
                array.len(),
            ));
        }

        let mut fields: Vec<Arc<Field>> = self.batch.schema_ref().fields().iter().cloned().collect();
        fields.push(Arc::new(Field::new(
            name,
            array.data_type().clone(),
            array.null_count() > 0,
        )));
        let mut columns = self.batch.columns().to_vec();
        columns.push(array);

        let batch = RecordBatch::try_new_with_options(
            Arc::new(Schema::new_with_metadata(
                fields,
                self.batch.schema_ref().metadata().clone(),
            )),
            columns,
            &RecordBatchOptions::new().with_row_count(Some(self.num_rows())),
        )?;
        Ok(Self { batch })
    }
}

fn deep_copy(array: &ArrayRef) -> ArrayRef {
    let data = array.to_data();
    let mut copy = MutableArrayData::new(vec![&data], false, data.len());
    copy.extend(0, 0, data.len());
    make_array(copy.freeze())
}
