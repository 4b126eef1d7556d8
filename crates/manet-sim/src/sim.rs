//! The `Simulation` struct and its driver operations.

use manet_core::{NodeId, Point, SimClock, SimConfig, SimRng, Tick};
use manet_routing::{Path, ProactiveRouting, RouteFinder, RoutingProtocol, TableRow};
use manet_topology::Topology;

use crate::{Selection, SelectionEvent, SimError, SimObserver, SimResult};

/// The simulation runner.
///
/// `Simulation<P>` owns all state: topology, protocol tables, RNG, clock,
/// current selection and the most recently found path.  Nothing happens on
/// its own; the embedding driver calls [`step`](Self::step) on its movement
/// schedule and the other operations in response to user input.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Simulation<P: RoutingProtocol> {
    /// Configuration the simulation was built from.
    pub config: SimConfig,

    /// Counts movement ticks.
    pub clock: SimClock,

    /// Node positions and the neighbor graph.
    pub topology: Topology,

    /// The routing variant and its tables.
    pub protocol: P,

    pub(crate) rng:             SimRng,
    pub(crate) selection:       Selection,
    pub(crate) active_path:     Option<Path>,
    pub(crate) movement_active: bool,
}

impl<P: RoutingProtocol> Simulation<P> {
    // ── Movement ──────────────────────────────────────────────────────────

    /// Enable movement ticks and clear the active path.
    ///
    /// Does nothing if movement is already running.
    pub fn start_movement(&mut self) {
        if self.movement_active {
            return;
        }
        self.movement_active = true;
        self.active_path = None;
        log::info!("Node movement started.");
    }

    pub fn stop_movement(&mut self) {
        self.movement_active = false;
        log::info!("Node movement stopped.");
    }

    pub fn is_moving(&self) -> bool {
        self.movement_active
    }

    /// Run one movement tick: every node jumps to a random point inside the
    /// movement bounds and the neighbor graph is recomputed.
    ///
    /// Does nothing and returns `false` while movement is stopped.  Routing
    /// tables are not touched.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> bool {
        if !self.movement_active {
            return false;
        }
        let now = self.clock.current_tick;
        observer.on_tick_start(now);

        self.topology.reposition(self.config.movement_bounds(), &mut self.rng);

        observer.on_tick_end(now, self.topology.graph().edge_count());
        observer.on_snapshot(now, &self.topology);
        self.clock.advance();
        true
    }

    /// Call [`step`](Self::step) `n` times.  Returns the number of ticks
    /// that actually moved nodes.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> u64 {
        let mut moved = 0;
        for _ in 0..n {
            if self.step(observer) {
                moved += 1;
            }
        }
        moved
    }

    /// Notify `observer` that the run is over.
    pub fn finish<O: SimObserver>(&self, observer: &mut O) {
        observer.on_sim_end(self.clock.current_tick);
    }

    // ── Selection ─────────────────────────────────────────────────────────

    /// Pick the node under `point`, if any, and advance the selection cycle.
    ///
    /// A click that hits no node leaves the selection unchanged.
    pub fn click(&mut self, point: Point) -> Option<SelectionEvent> {
        let id = self.topology.node_at(point, self.config.hit_radius)?;
        Some(self.pick(id))
    }

    /// Advance the selection cycle with `id`.
    pub fn select(&mut self, id: NodeId) -> SimResult<SelectionEvent> {
        self.topology.node(id)?;
        Ok(self.pick(id))
    }

    fn pick(&mut self, id: NodeId) -> SelectionEvent {
        let event = self.selection.pick(id);
        if matches!(event, SelectionEvent::Source(_)) {
            self.active_path = None;
        }
        log::info!("{event}");
        event
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    // ── Sending ───────────────────────────────────────────────────────────

    /// Route from the selected source to the selected destination over the
    /// current neighbor graph.
    ///
    /// The found path becomes the active path (cleared when none exists).
    /// Fails with [`SimError::InvalidSelection`] unless both endpoints are
    /// selected.
    pub fn send<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<Option<Path>> {
        let (source, destination) = self
            .selection
            .endpoints()
            .map_err(|missing| SimError::InvalidSelection { missing })?;
        log::info!("Sending data from {source} to {destination}...");

        let now = self.clock.current_tick;
        let delivery = self.protocol.send(self.topology.graph(), source, destination)?;
        for request in &delivery.requests {
            observer.on_route_request(now, request);
        }
        observer.on_delivery(now, &delivery);

        self.active_path = delivery.path.clone();
        Ok(delivery.path)
    }

    /// Path found by the most recent send.  Cleared by a first source pick,
    /// by a send that finds no path and when movement starts.  A reset pick
    /// keeps it.
    pub fn active_path(&self) -> Option<&Path> {
        self.active_path.as_ref()
    }

    pub fn current_tick(&self) -> Tick {
        self.clock.current_tick
    }
}

impl<F: RouteFinder> Simulation<ProactiveRouting<F>> {
    /// Run one table-exchange round over the current neighbor graph.
    /// Returns the number of route writes.
    pub fn propagate_tables<O: SimObserver>(&mut self, observer: &mut O) -> usize {
        let writes = self.protocol.propagate(self.topology.graph());
        observer.on_tables_propagated(self.clock.current_tick, writes);
        writes
    }

    /// `true` if nodes moved since the last seed or propagation.
    pub fn tables_stale(&self) -> bool {
        self.protocol.is_stale(self.topology.graph())
    }

    /// All routing-table entries with current hop counts.
    pub fn table_report(&self) -> SimResult<Vec<TableRow>> {
        Ok(self.protocol.report(self.topology.graph())?)
    }
}
