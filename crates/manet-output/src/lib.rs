//! `manet-output` — simulation output writers for the MANET routing
//! simulator.
//!
//! | Backend | Files created                                |
//! |---------|----------------------------------------------|
//! | CSV     | `node_snapshots.csv`, `deliveries.csv`       |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `manet_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use manet_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run_ticks(20, &mut obs);
//! sim.finish(&mut obs);
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{DeliveryRow, NodeSnapshotRow};
pub use writer::OutputWriter;
