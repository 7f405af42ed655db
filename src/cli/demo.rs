use anyhow::{Context, Result};
use arrow::array::{ArrayRef, Float64Array, Int64Array};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use log::info;
use parquet::arrow::ArrowWriter;
use parquet::basic::{Compression, ZstdLevel};
use parquet::file::properties::WriterProperties;
use std::path::PathBuf;
use std::sync::Arc;

use gazeframe::gaze::{from_table, ColumnRole, RoleHints};

/// Screen used for the synthetic recording.
const SCREEN_WIDTH_PX: f64 = 1280.0;
const SCREEN_HEIGHT_PX: f64 = 1024.0;

/// Write a synthetic gaze recording to Parquet
pub fn run(output: PathBuf, samples: usize, sampling_rate: f64) -> Result<()> {
    info!("gazeframe demo recording");
    info!("========================");

    let batch = generate_recording(samples, sampling_rate)?;

    // The demo columns must resolve as pixel roles.
    let gaze = from_table(
        &batch,
        None,
        RoleHints::new().pixel(["x_pix", "y_pix"]),
    )?;
    info!(
        "Generated {} samples at {} Hz, pixel columns {:?}",
        gaze.n_observations(),
        sampling_rate,
        gaze.columns_for(ColumnRole::Pixel).unwrap_or_default()
    );

    let props = WriterProperties::builder()
        .set_compression(Compression::ZSTD(ZstdLevel::try_new(3)?))
        .build();

    let file = std::fs::File::create(&output)
        .with_context(|| format!("Failed to create {}", output.display()))?;
    let mut writer = ArrowWriter::try_new(file, batch.schema(), Some(props))
        .context("Failed to create Parquet writer")?;
    writer.write(&batch).context("Failed to write record batch")?;
    writer.close().context("Failed to finalize Parquet file")?;

    info!("Wrote {}", output.display());
    info!(
        "Try: gazeframe inspect {} --pixel x_pix,y_pix",
        output.display()
    );
    Ok(())
}

/// Fixations on a 3x3 grid joined by short linear saccades.
fn generate_recording(samples: usize, sampling_rate: f64) -> Result<RecordBatch> {
    const FIXATION_SAMPLES: usize = 250;
    const SACCADE_SAMPLES: usize = 20;
    let cycle = FIXATION_SAMPLES + SACCADE_SAMPLES;

    let targets: Vec<(f64, f64)> = (0..9)
        .map(|i| {
            let col = (i % 3) as f64;
            let row = (i / 3) as f64;
            (
                SCREEN_WIDTH_PX * (0.2 + 0.3 * col),
                SCREEN_HEIGHT_PX * (0.2 + 0.3 * row),
            )
        })
        .collect();

    let mut time = Vec::with_capacity(samples);
    let mut x = Vec::with_capacity(samples);
    let mut y = Vec::with_capacity(samples);

    for i in 0..samples {
        let fixation = i / cycle;
        let phase = i % cycle;
        let (fx, fy) = targets[fixation % targets.len()];
        let (nx, ny) = targets[(fixation + 1) % targets.len()];

        let (px, py) = if phase < FIXATION_SAMPLES {
            // Small deterministic drift around the target.
            let t = phase as f64;
            (fx + 2.0 * (t * 0.07).sin(), fy + 2.0 * (t * 0.05).cos())
        } else {
            let s = (phase - FIXATION_SAMPLES + 1) as f64 / SACCADE_SAMPLES as f64;
            (fx + (nx - fx) * s, fy + (ny - fy) * s)
        };

        time.push((i as f64 * 1000.0 / sampling_rate).round() as i64);
        x.push(px);
        y.push(py);
    }

    let schema = Arc::new(Schema::new(vec![
        Field::new("time", DataType::Int64, false),
        Field::new("x_pix", DataType::Float64, false),
        Field::new("y_pix", DataType::Float64, false),
    ]));
    let batch = RecordBatch::try_new(
        schema,
        vec![
            Arc::new(Int64Array::from(time)) as ArrayRef,
            Arc::new(Float64Array::from(x)),
            Arc::new(Float64Array::from(y)),
        ],
    )?;
    Ok(batch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use arrow::array::Array;

    #[test]
    fn test_generate_recording() {
        let batch = generate_recording(600, 1000.0).unwrap();
        assert_eq!(batch.num_rows(), 600);
        assert_eq!(batch.num_columns(), 3);

        let time = batch
            .column(0)
            .as_any()
            .downcast_ref::<Int64Array>()
            .unwrap();
        assert_eq!(time.value(0), 0);
        assert_eq!(time.value(599), 599);
    }

    #[test]
    fn test_demo_writes_parquet() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("demo.parquet");
        run(path.clone(), 100, 500.0).unwrap();
        assert!(path.exists());
    }
}
