//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `node_snapshots.csv`
//! - `deliveries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::{DeliveryRow, NodeSnapshotRow, OutputResult};
use crate::writer::OutputWriter;

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    snapshots:  Writer<File>,
    deliveries: Writer<File>,
    finished:   bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut snapshots = Writer::from_path(dir.join("node_snapshots.csv"))?;
        snapshots.write_record(["tick", "node_id", "x", "y", "degree"])?;

        let mut deliveries = Writer::from_path(dir.join("deliveries.csv"))?;
        deliveries.write_record([
            "tick", "source", "destination", "delivered", "hops", "path", "requests",
        ])?;

        Ok(Self {
            snapshots,
            deliveries,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[NodeSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.tick.to_string(),
                row.node_id.to_string(),
                format!("{:.3}", row.x),
                format!("{:.3}", row.y),
                row.degree.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_delivery(&mut self, row: &DeliveryRow) -> OutputResult<()> {
        // Path ids are space-separated within the single `path` field.
        let path = row
            .path
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        self.deliveries.write_record(&[
            row.tick.to_string(),
            row.source.to_string(),
            row.destination.to_string(),
            (row.delivered as u8).to_string(),
            row.hops.map(|h| h.to_string()).unwrap_or_default(),
            path,
            row.requests.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.flush()?;
        self.deliveries.flush()?;
        Ok(())
    }
}
