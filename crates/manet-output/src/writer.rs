//! The `OutputWriter` trait implemented by backend writers.

use crate::{DeliveryRow, NodeSnapshotRow, OutputResult};

/// Sink for recorded simulation events.
///
/// Errors are stored by [`SimOutputObserver`][crate::SimOutputObserver] and
/// retrieved with its `take_error`.
pub trait OutputWriter {
    /// Write the positions and degrees of every node at one tick.
    fn write_snapshots(&mut self, rows: &[NodeSnapshotRow]) -> OutputResult<()>;

    /// Write the outcome of one send.
    fn write_delivery(&mut self, row: &DeliveryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
