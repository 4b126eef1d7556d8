//! Simulation observer trait for status reporting and data collection.

use manet_core::Tick;
use manet_routing::{Delivery, RouteRequest};
use manet_topology::Topology;

/// Callbacks invoked by [`Simulation`][crate::Simulation] as ticks run and
/// sends complete.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — delivery counter
///
/// ```rust,ignore
/// struct Counter { delivered: usize, failed: usize }
///
/// impl SimObserver for Counter {
///     fn on_delivery(&mut self, _tick: Tick, delivery: &Delivery) {
///         if delivery.is_delivered() { self.delivered += 1 } else { self.failed += 1 }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the start of each movement tick, before nodes move.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after nodes moved and the neighbor graph was recomputed.
    ///
    /// `edges` is the edge count of the new graph.
    fn on_tick_end(&mut self, _tick: Tick, _edges: usize) {}

    /// Called once per movement tick with read-only access to the new
    /// positions and neighbor graph.
    fn on_snapshot(&mut self, _tick: Tick, _topology: &Topology) {}

    /// Called for each simulated RREQ forwarding step of a send, in
    /// expansion order, before [`on_delivery`](Self::on_delivery).
    fn on_route_request(&mut self, _tick: Tick, _request: &RouteRequest) {}

    /// Called once per send with its outcome.
    fn on_delivery(&mut self, _tick: Tick, _delivery: &Delivery) {}

    /// Called after a proactive table-exchange round with the number of
    /// route writes it made.
    fn on_tables_propagated(&mut self, _tick: Tick, _writes: usize) {}

    /// Called by [`Simulation::finish`][crate::Simulation::finish].
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

/// Reports sends and table rounds through the `log` facade, one status
/// line per event.
pub struct LogObserver;

impl SimObserver for LogObserver {
    fn on_route_request(&mut self, _tick: Tick, request: &RouteRequest) {
        log::info!("{request}.");
    }

    fn on_delivery(&mut self, _tick: Tick, delivery: &Delivery) {
        match &delivery.path {
            Some(path) => log::info!(
                "Data sent via path: {path} with {} hops.",
                path.hop_count()
            ),
            None => log::info!("No route found. Message cannot be delivered."),
        }
    }

    fn on_tables_propagated(&mut self, tick: Tick, writes: usize) {
        log::info!("Routing stimulated and updated across the network ({writes} updates at {tick}).");
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        log::info!("simulation ended at {final_tick}");
    }
}
