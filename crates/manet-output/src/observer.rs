//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use manet_core::Tick;
use manet_routing::Delivery;
use manet_sim::SimObserver;
use manet_topology::Topology;

use crate::row::{DeliveryRow, NodeSnapshotRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that records node snapshots and deliveries to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After the run, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Record the initial layout, before any movement tick.
    pub fn record_topology(&mut self, tick: Tick, topology: &Topology) {
        self.on_snapshot(tick, topology);
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                log::warn!("output write failed: {e}");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_snapshot(&mut self, tick: Tick, topology: &Topology) {
        let graph = topology.graph();
        let rows: Vec<NodeSnapshotRow> = topology
            .nodes()
            .iter()
            .map(|node| NodeSnapshotRow {
                tick:    tick.0,
                node_id: node.id.0,
                x:       node.pos.x,
                y:       node.pos.y,
                degree:  graph.degree(node.id).unwrap_or(0) as u32,
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_delivery(&mut self, tick: Tick, delivery: &Delivery) {
        let row = DeliveryRow {
            tick:        tick.0,
            source:      delivery.source.0,
            destination: delivery.destination.0,
            delivered:   delivery.is_delivered(),
            hops:        delivery.hop_count(),
            path:        delivery
                .path
                .as_ref()
                .map(|p| p.nodes().iter().map(|id| id.0).collect())
                .unwrap_or_default(),
            requests:    delivery.requests.len() as u32,
        };
        let result = self.writer.write_delivery(&row);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
