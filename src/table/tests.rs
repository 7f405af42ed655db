use super::*;
use crate::error::GazeError;
use arrow::array::{Array, ArrayRef, Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use std::sync::Arc;

fn xy_schema() -> ColumnSchema {
    ColumnSchema::new(["x", "y"]).unwrap()
}

#[test]
fn test_orientation_parsing() {
    assert_eq!("row".parse::<Orientation>().unwrap(), Orientation::Row);
    assert_eq!("col".parse::<Orientation>().unwrap(), Orientation::Col);
    assert_eq!(Orientation::default(), Orientation::Col);

    let err = "column".parse::<Orientation>().unwrap_err();
    assert!(matches!(err, GazeError::InvalidOrientation(ref t) if t == "column"));
}

#[test]
fn test_schema_rejects_duplicates() {
    let err = ColumnSchema::new(["x", "y", "x"]).unwrap_err();
    assert!(matches!(err, GazeError::DuplicateColumnLabel(ref l) if l == "x"));
}

#[test]
fn test_matrix_new_checks_buffer_length() {
    assert!(RawMatrix::new(2, 3, vec![0.0; 6]).is_ok());
    let err = RawMatrix::new(2, 3, vec![0.0; 5]).unwrap_err();
    assert!(matches!(
        err,
        GazeError::ShapeMismatch {
            expected: 6,
            found: 5,
            ..
        }
    ));
}

#[test]
fn test_matrix_new_rejects_overflowing_shape() {
    for rows in [usize::MAX, usize::MAX / 2 + 1] {
        let err = RawMatrix::new(rows, 2, Vec::new()).unwrap_err();
        assert!(matches!(
            err,
            GazeError::ShapeMismatch {
                expected: usize::MAX,
                found: 0,
                ..
            }
        ));
    }
}

#[test]
fn test_matrix_from_rows_empty_input() {
    let none: [[f64; 2]; 0] = [];
    assert_eq!(RawMatrix::from_rows(&none).unwrap().shape(), (0, 0));

    let data = RawMatrix::from_rows_with_width(&none, 2).unwrap();
    assert_eq!(data.shape(), (0, 2));
    let schema = ColumnSchema::new(["x", "y"]).unwrap();
    let table = NamedTable::from_matrix(&data, &schema, Orientation::Row).unwrap();
    assert_eq!(table.num_rows(), 0);
    assert_eq!(table.column_names(), vec!["x", "y"]);

    assert!(RawMatrix::from_rows_with_width(&[[1.0, 2.0]], usize::MAX).is_err());
    let err = RawMatrix::from_rows_with_width(&[[1.0, 2.0, 3.0]], 2).unwrap_err();
    assert!(matches!(
        err,
        GazeError::ShapeMismatch {
            expected: 2,
            found: 3,
            ..
        }
    ));
}

#[test]
fn test_matrix_from_rows_rejects_ragged_input() {
    let err = RawMatrix::from_rows(&[vec![1.0, 2.0], vec![3.0]]).unwrap_err();
    assert!(matches!(err, GazeError::ShapeMismatch { .. }));
}

#[test]
fn test_matrix_transpose() {
    let m = RawMatrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();
    let t = m.transpose();
    assert_eq!(t.shape(), (3, 2));
    assert_eq!(t.row(0).unwrap(), &[1.0, 4.0]);
    assert_eq!(t.row(2).unwrap(), &[3.0, 6.0]);
    assert_eq!(t.get(1, 1), Some(5.0));
    assert_eq!(t.get(3, 0), None);
    assert_eq!(t.transpose(), m);
}

#[test]
fn test_from_matrix_row_orientation() {
    let m = RawMatrix::from_rows(&[[0.0, 10.0], [1.0, 11.0], [2.0, 12.0]]).unwrap();
    let table = NamedTable::from_matrix(&m, &xy_schema(), Orientation::Row).unwrap();

    assert_eq!(table.num_rows(), 3);
    assert_eq!(table.column_names(), vec!["x", "y"]);
    let x = table.column_f64("x").unwrap();
    let y = table.column_f64("y").unwrap();
    assert_eq!(x.values().to_vec(), vec![0.0, 1.0, 2.0]);
    assert_eq!(y.values().to_vec(), vec![10.0, 11.0, 12.0]);

    let field = table.record_batch().schema().field(0).clone();
    assert_eq!(field.data_type(), &DataType::Float64);
    assert!(!field.is_nullable());
}

#[test]
fn test_from_matrix_col_orientation_transposes() {
    // Two fields, four observations laid out along the columns.
    let m = RawMatrix::from_rows(&[[0.0, 1.0, 2.0, 3.0], [5.0, 6.0, 7.0, 8.0]]).unwrap();
    let table = NamedTable::from_matrix(&m, &xy_schema(), Orientation::Col).unwrap();

    assert_eq!(table.num_rows(), 4);
    assert_eq!(
        table.column_f64("y").unwrap().values().to_vec(),
        vec![5.0, 6.0, 7.0, 8.0]
    );
}

#[test]
fn test_from_matrix_shape_mismatch() {
    let m = RawMatrix::from_rows(&[[0.0, 0.0, 0.0], [1.0, 1.0, 1.0]]).unwrap();

    let err = NamedTable::from_matrix(&m, &xy_schema(), Orientation::Row).unwrap_err();
    assert!(matches!(
        err,
        GazeError::ShapeMismatch {
            expected: 3,
            found: 2,
            ..
        }
    ));

    // The same matrix read column-wise has two fields and matches.
    assert!(NamedTable::from_matrix(&m, &xy_schema(), Orientation::Col).is_ok());
}

#[test]
fn test_from_matrix_without_observations() {
    let m = RawMatrix::new(0, 2, Vec::new()).unwrap();
    let table = NamedTable::from_matrix(&m, &xy_schema(), Orientation::Row).unwrap();
    assert_eq!(table.num_rows(), 0);
    assert_eq!(table.num_columns(), 2);
}

#[test]
fn test_from_record_batch_keeps_order_and_types() {
    let schema = Arc::new(Schema::new(vec![
        Field::new("trial", DataType::Utf8, false),
        Field::new("time", DataType::Int64, false),
        Field::new("x", DataType::Float64, true),
    ]));
    let batch = RecordBatch::try_new(
        schema,
        vec![
            Arc::new(StringArray::from(vec!["a", "a"])) as ArrayRef,
            Arc::new(Int64Array::from(vec![0, 1])),
            Arc::new(Float64Array::from(vec![Some(1.5), None])),
        ],
    )
    .unwrap();

    let table = NamedTable::from_record_batch(&batch).unwrap();
    assert_eq!(table.column_names(), vec!["trial", "time", "x"]);
    assert_eq!(table.record_batch(), &batch);
    assert!(table.column_f64("time").is_none());
    assert_eq!(table.column("x").unwrap().null_count(), 1);
}

#[test]
fn test_from_record_batch_does_not_share_buffers() {
    let schema = Arc::new(Schema::new(vec![Field::new("x", DataType::Float64, false)]));
    let batch = RecordBatch::try_new(
        schema,
        vec![Arc::new(Float64Array::from(vec![1.0, 2.0, 3.0])) as ArrayRef],
    )
    .unwrap();

    let table = NamedTable::from_record_batch(&batch).unwrap();
    let source = batch.column(0).as_any().downcast_ref::<Float64Array>().unwrap();
    let copy = table.column_f64("x").unwrap();
    assert_ne!(source.values().as_ptr(), copy.values().as_ptr());
}

#[test]
fn test_from_record_batch_rejects_duplicate_labels() {
    let schema = Arc::new(Schema::new(vec![
        Field::new("x", DataType::Float64, false),
        Field::new("x", DataType::Float64, false),
    ]));
    let batch = RecordBatch::try_new(
        schema,
        vec![
            Arc::new(Float64Array::from(vec![1.0])) as ArrayRef,
            Arc::new(Float64Array::from(vec![2.0])),
        ],
    )
    .unwrap();

    let err = NamedTable::from_record_batch(&batch).unwrap_err();
    assert!(matches!(err, GazeError::DuplicateColumnLabel(ref l) if l == "x"));
}

#[test]
fn test_with_column() {
    let m = RawMatrix::from_rows(&[[0.0, 0.0], [1.0, 1.0]]).unwrap();
    let table = NamedTable::from_matrix(&m, &xy_schema(), Orientation::Row).unwrap();

    let extended = table
        .with_column("time", Arc::new(Int64Array::from(vec![0, 4])))
        .unwrap();
    assert_eq!(extended.column_names(), vec!["x", "y", "time"]);
    assert_eq!(table.num_columns(), 2);

    assert!(matches!(
        table.with_column("x", Arc::new(Int64Array::from(vec![0, 4]))),
        Err(GazeError::DuplicateColumnLabel(_))
    ));
    assert!(matches!(
        table.with_column("time", Arc::new(Int64Array::from(vec![0]))),
        Err(GazeError::ShapeMismatch { .. })
    ));
}
