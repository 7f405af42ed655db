use anyhow::{bail, Context, Result};
use arrow::compute::concat_batches;
use arrow::record_batch::RecordBatch;
use log::info;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[cfg(feature = "colorized_output")]
use console::style;

use gazeframe::gaze::{from_array, from_table, GazeContainer, RoleHints};
use gazeframe::table::{Orientation, RawMatrix};

use super::config::Config;

/// Options for the inspect command.
pub struct InspectArgs {
    pub file: PathBuf,
    pub config: Option<PathBuf>,
    pub orientation: Option<String>,
    pub hints: RoleHints,
    pub json: bool,
}

/// Build a gaze container from a CSV or Parquet file and describe it.
pub fn run(args: InspectArgs) -> Result<()> {
    let gaze = load_container(&args)?;

    let summary = gaze.summary();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    #[cfg(feature = "colorized_output")]
    {
        println!("{}", style("Gaze Container").bold().cyan());
        println!("{}", style("==============").cyan());
    }

    #[cfg(not(feature = "colorized_output"))]
    {
        println!("Gaze Container");
        println!("==============");
    }

    println!("File: {}", args.file.display());
    println!("{summary}");
    Ok(())
}

/// Command-line flags win over the config file, role by role.
fn load_container(args: &InspectArgs) -> Result<GazeContainer> {
    if !args.file.exists() {
        bail!("File does not exist: {}", args.file.display());
    }

    let config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    let hints = config.columns.merge(args.hints.clone());
    let experiment = match config.experiment {
        Some(experiment) => {
            experiment
                .validate()
                .context("Invalid experiment in config file")?;
            Some(Arc::new(experiment))
        }
        None => None,
    };
    let orientation = match args.orientation.as_deref().or(config.orientation.as_deref()) {
        Some(token) => token.parse::<Orientation>()?,
        None => Orientation::Row,
    };

    let ext = args
        .file
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let gaze = match ext.as_str() {
        "csv" => {
            let (schema, data) = read_csv_matrix(&args.file, orientation)?;
            info!(
                "Read {}x{} matrix from {} (orientation '{orientation}')",
                data.rows(),
                data.cols(),
                args.file.display()
            );
            from_array(&data, schema, experiment, orientation, hints)?
        }
        "parquet" | "pq" => {
            let batch = read_parquet_batch(&args.file)?;
            info!(
                "Read {} rows, {} columns from {}",
                batch.num_rows(),
                batch.num_columns(),
                args.file.display()
            );
            from_table(&batch, experiment, hints)?
        }
        other => bail!("Unsupported file extension: .{other}"),
    };
    Ok(gaze)
}

/// Read a numeric CSV file as labels plus a raw matrix.
///
/// With `row` orientation the header line holds the labels and every later
/// line is one observation. With `col` orientation there is no header: each
/// line starts with a label followed by that field's values.
fn read_csv_matrix(path: &Path, orientation: Orientation) -> Result<(Vec<String>, RawMatrix)> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_path(path)
        .context("opening CSV")?;

    let mut labels = Vec::new();
    let mut rows: Vec<Vec<f64>> = Vec::new();

    for (line_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV line {}", line_no + 1))?;
        let mut fields = record.iter();

        match orientation {
            Orientation::Row if line_no == 0 => {
                labels.extend(fields.map(str::to_string));
                continue;
            }
            Orientation::Row => {}
            Orientation::Col => {
                let label = fields
                    .next()
                    .with_context(|| format!("CSV line {}: missing label", line_no + 1))?;
                labels.push(label.to_string());
            }
        }

        let values = fields
            .enumerate()
            .map(|(j, tok)| parse_cell(tok, line_no + 1, j))
            .collect::<Result<Vec<f64>>>()?;
        rows.push(values);
    }

    // A header-only file still has one column per label.
    let matrix = match orientation {
        Orientation::Row => RawMatrix::from_rows_with_width(&rows, labels.len())?,
        Orientation::Col => RawMatrix::from_rows(&rows)?,
    };
    Ok((labels, matrix))
}

/// Empty cells are missing samples and become NaN.
fn parse_cell(tok: &str, line: usize, field: usize) -> Result<f64> {
    if tok.is_empty() {
        return Ok(f64::NAN);
    }
    tok.parse::<f64>()
        .with_context(|| format!("CSV line {line}, field {field}: '{tok}' is not a number"))
}

/// Read every record batch of a Parquet file into one batch.
fn read_parquet_batch(path: &Path) -> Result<RecordBatch> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;
    let schema = builder.schema().clone();
    let reader = builder.build().context("building parquet reader")?;

    let batches = reader
        .collect::<std::result::Result<Vec<_>, _>>()
        .context("reading parquet record batch")?;
    concat_batches(&schema, &batches).context("concatenating record batches")
}

#[cfg(test)]
mod tests {
    use super::*;
    use gazeframe::gaze::ColumnRole;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(content: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_read_csv_row_layout() {
        let file = write_csv("time,x,y\n0,1.5,2.5\n1,,3.0\n");
        let (labels, matrix) = read_csv_matrix(file.path(), Orientation::Row).unwrap();

        assert_eq!(labels, vec!["time", "x", "y"]);
        assert_eq!(matrix.shape(), (2, 3));
        assert_eq!(matrix.get(0, 1), Some(1.5));
        assert!(matrix.get(1, 1).unwrap().is_nan());
    }

    #[test]
    fn test_read_csv_col_layout() {
        let file = write_csv("x,0,1,2,3\ny,5,6,7,8\n");
        let (labels, matrix) = read_csv_matrix(file.path(), Orientation::Col).unwrap();

        assert_eq!(labels, vec!["x", "y"]);
        assert_eq!(matrix.shape(), (2, 4));
        assert_eq!(matrix.observation_count(Orientation::Col), 4);
    }

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    fn inspect_args(file: &NamedTempFile, config: Option<&NamedTempFile>) -> InspectArgs {
        InspectArgs {
            file: file.path().to_path_buf(),
            config: config.map(|c| c.path().to_path_buf()),
            orientation: None,
            hints: RoleHints::new(),
            json: false,
        }
    }

    #[test]
    fn test_orientation_defaults_to_row() {
        let csv = write_csv("x,y\n0,1\n2,3\n4,5\n");
        let gaze = load_container(&inspect_args(&csv, None)).unwrap();
        assert_eq!(gaze.n_observations(), 3);
        assert_eq!(gaze.table().column_names(), vec!["x", "y"]);
    }

    #[test]
    fn test_flags_override_config() {
        let csv = write_csv("x,y,u,v\n0,1,2,3\n4,5,6,7\n");
        let config = write_config(
            "orientation = \"col\"\n\n[columns]\npixel = [\"x\", \"y\"]\nposition = [\"u\", \"v\"]\n",
        );

        let mut args = inspect_args(&csv, Some(&config));
        args.orientation = Some("row".to_string());
        args.hints = RoleHints::new().pixel(["y", "x"]);
        let gaze = load_container(&args).unwrap();

        assert_eq!(gaze.n_observations(), 2);
        assert_eq!(gaze.columns_for(ColumnRole::Pixel).unwrap(), ["y", "x"]);
        // Roles without a flag keep the config value.
        assert_eq!(gaze.columns_for(ColumnRole::Position).unwrap(), ["u", "v"]);
    }

    #[test]
    fn test_config_orientation_used_without_flag() {
        let csv = write_csv("x,0,1,2\ny,3,4,5\n");
        let config = write_config("orientation = \"col\"\n");
        let gaze = load_container(&inspect_args(&csv, Some(&config))).unwrap();
        assert_eq!(gaze.n_observations(), 3);
        assert_eq!(gaze.table().column_names(), vec!["x", "y"]);
    }

    #[test]
    fn test_invalid_config_orientation() {
        let csv = write_csv("x,y\n0,1\n");
        let config = write_config("orientation = \"diagonal\"\n");
        let err = load_container(&inspect_args(&csv, Some(&config))).unwrap_err();
        assert!(err.to_string().contains("diagonal"));
    }

    #[test]
    fn test_header_only_csv_keeps_columns() {
        let csv = write_csv("x,y\n");
        let gaze = load_container(&inspect_args(&csv, None)).unwrap();
        assert_eq!(gaze.n_observations(), 0);
        assert_eq!(gaze.n_columns(), 2);
    }

    #[test]
    fn test_run_prints_summary() {
        let csv = write_csv("x,y\n0,1\n");
        let mut args = inspect_args(&csv, None);
        args.hints = RoleHints::new().pixel(["x", "y"]);
        args.json = true;
        run(args).unwrap();
    }

    #[test]
    fn test_read_csv_rejects_text() {
        let file = write_csv("x,y\n1,abc\n");
        assert!(read_csv_matrix(file.path(), Orientation::Row).is_err());
    }
}
