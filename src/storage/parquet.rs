//! Parquet I/O for generated graphs
//!
//! Based on `DuckDB` (Raasveldt et al., SIGMOD 2019) columnar storage patterns.
//!
//! # Format
//!
//! Graphs are stored as two Parquet files:
//! - `{path}_edges.parquet`: (source, target, weight), one row per stored arc
//! - `{path}_meta.parquet`: (`num_nodes`, directed), a single row
//!
//! The metadata file keeps trailing isolated vertices and the direction tag,
//! neither of which can be recovered from the arcs alone.

use super::{CsrGraph, Direction};
use anyhow::{bail, Context, Result};
use arrow::array::{ArrayRef, BooleanArray, Float32Array, UInt32Array, UInt64Array};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use parquet::arrow::arrow_writer::ArrowWriter;
use parquet::file::properties::WriterProperties;
use std::fs::File;
use std::path::Path;
use std::sync::Arc;

impl CsrGraph {
    /// Write graph to Parquet files
    ///
    /// Creates two files:
    /// - `{path}_edges.parquet`: Arc list (source, target, weight)
    /// - `{path}_meta.parquet`: Vertex count and direction tag
    ///
    /// # Errors
    ///
    /// Returns error if file I/O fails or Arrow conversion fails
    #[allow(clippy::unused_async)] // Async API for future I/O operations
    pub async fn write_parquet<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let base_path = path.as_ref();

        self.write_edges_parquet(base_path)?;
        self.write_meta_parquet(base_path)?;

        Ok(())
    }

    /// Read graph from Parquet files
    ///
    /// # Errors
    ///
    /// Returns error if files don't exist, Arrow conversion fails, or the arcs
    /// reference vertices beyond the stored vertex count
    #[allow(clippy::unused_async)] // Async API for future I/O operations
    pub async fn read_parquet<P: AsRef<Path>>(path: P) -> Result<Self> {
        let base_path = path.as_ref();

        let (num_nodes, direction) = Self::read_meta_parquet(base_path)?;
        let (sources, targets, weights) = Self::read_edges_parquet(base_path)?;

        Self::from_arcs(num_nodes, &sources, &targets, Some(&weights), direction)
            .context("Stored arcs do not match stored vertex count")
    }

    fn write_edges_parquet(&self, base_path: &Path) -> Result<()> {
        let edges_path = format!("{}_edges.parquet", base_path.display());

        let mut sources = Vec::with_capacity(self.num_edges());
        let mut targets = Vec::with_capacity(self.num_edges());
        let mut weights = Vec::with_capacity(self.num_edges());

        for (src, dst, weight) in self.arcs() {
            sources.push(src);
            targets.push(dst);
            weights.push(weight);
        }

        let schema = Arc::new(Schema::new(vec![
            Field::new("source", DataType::UInt32, false),
            Field::new("target", DataType::UInt32, false),
            Field::new("weight", DataType::Float32, false),
        ]));

        let batch = RecordBatch::try_new(
            schema.clone(),
            vec![
                Arc::new(UInt32Array::from(sources)) as ArrayRef,
                Arc::new(UInt32Array::from(targets)) as ArrayRef,
                Arc::new(Float32Array::from(weights)) as ArrayRef,
            ],
        )
        .context("Failed to create RecordBatch")?;

        write_batch(&edges_path, schema, &batch)
    }

    fn write_meta_parquet(&self, base_path: &Path) -> Result<()> {
        let meta_path = format!("{}_meta.parquet", base_path.display());

        let schema = Arc::new(Schema::new(vec![
            Field::new("num_nodes", DataType::UInt64, false),
            Field::new("directed", DataType::Boolean, false),
        ]));

        let batch = RecordBatch::try_new(
            schema.clone(),
            vec![
                Arc::new(UInt64Array::from(vec![self.num_nodes() as u64])) as ArrayRef,
                Arc::new(BooleanArray::from(vec![self.is_directed()])) as ArrayRef,
            ],
        )
        .context("Failed to create meta RecordBatch")?;

        write_batch(&meta_path, schema, &batch)
    }

    fn read_edges_parquet(base_path: &Path) -> Result<(Vec<u32>, Vec<u32>, Vec<f32>)> {
        let edges_path = format!("{}_edges.parquet", base_path.display());

        let file =
            File::open(&edges_path).with_context(|| format!("Failed to open {edges_path}"))?;

        let reader = ParquetRecordBatchReaderBuilder::try_new(file)?.build()?;

        let mut sources = Vec::new();
        let mut targets = Vec::new();
        let mut weights = Vec::new();

        for batch_result in reader {
            let batch: RecordBatch = batch_result?;

            let src_col = batch
                .column(0)
                .as_any()
                .downcast_ref::<UInt32Array>()
                .context("Invalid source column type")?;

            let dst_col = batch
                .column(1)
                .as_any()
                .downcast_ref::<UInt32Array>()
                .context("Invalid target column type")?;

            let weight_col = batch
                .column(2)
                .as_any()
                .downcast_ref::<Float32Array>()
                .context("Invalid weight column type")?;

            sources.extend(src_col.values().iter().copied());
            targets.extend(dst_col.values().iter().copied());
            weights.extend(weight_col.values().iter().copied());
        }

        Ok((sources, targets, weights))
    }

    fn read_meta_parquet(base_path: &Path) -> Result<(usize, Direction)> {
        let meta_path = format!("{}_meta.parquet", base_path.display());

        let file =
            File::open(&meta_path).with_context(|| format!("Failed to open {meta_path}"))?;

        let reader = ParquetRecordBatchReaderBuilder::try_new(file)?.build()?;

        for batch_result in reader {
            let batch: RecordBatch = batch_result?;
            if batch.num_rows() == 0 {
                continue;
            }

            let nodes = batch
                .column(0)
                .as_any()
                .downcast_ref::<UInt64Array>()
                .context("Invalid num_nodes column type")?;

            let directed = batch
                .column(1)
                .as_any()
                .downcast_ref::<BooleanArray>()
                .context("Invalid directed column type")?;

            let num_nodes =
                usize::try_from(nodes.value(0)).context("Stored vertex count exceeds usize")?;
            let direction = if directed.value(0) {
                Direction::Directed
            } else {
                Direction::Undirected
            };

            return Ok((num_nodes, direction));
        }

        bail!("{meta_path} contains no metadata row")
    }
}

fn write_batch(path: &str, schema: Arc<Schema>, batch: &RecordBatch) -> Result<()> {
    let file = File::create(path).with_context(|| format!("Failed to create {path}"))?;

    let props = WriterProperties::builder()
        .set_compression(parquet::basic::Compression::ZSTD(
            parquet::basic::ZstdLevel::try_new(3)?,
        ))
        .build();

    let mut writer = ArrowWriter::try_new(file, schema, Some(props))?;
    writer.write(batch)?;
    writer.close()?;

    Ok(())
}
