//! Proactive variant: routes to every destination exist before any send.
//!
//! # Table model
//!
//! 1. **Seeding** gives every node a direct entry `d → d` for every other
//!    node `d`.  These are assumed routes, not checked against the graph.
//! 2. **Propagation** is one synchronous round of table exchange: using the
//!    tables as they stood when the round began, each node copies every
//!    destination a neighbor advertises (other than itself) and routes it via
//!    that neighbor.  Neighbors are visited in creation order, so the last
//!    neighbor advertising a destination wins.  The round is not repeated
//!    until convergence.
//! 3. Tables are never refreshed when nodes move.  [`ProactiveRouting::is_stale`]
//!    reports when the graph has been recomputed since the last seed or
//!    propagation.
//!
//! Paths shown to the user still come from the breadth-first search; the
//! tables are inspection state.

use manet_core::{NodeId, ProtocolKind};
use manet_topology::NeighborGraph;

use crate::{
    BfsRouteFinder, Delivery, RouteFinder, RoutingProtocol, RoutingResult, RoutingTables,
};

/// One line of the routing-table inspection view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableRow {
    pub node:        NodeId,
    pub destination: NodeId,
    pub next_hop:    NodeId,
    pub hold_time:   u32,
    /// Current hop distance to `destination`; `None` if it is unreachable
    /// in the graph the report was built from.
    pub hops:        Option<u32>,
}

pub struct ProactiveRouting<F: RouteFinder = BfsRouteFinder> {
    finder:            F,
    tables:            RoutingTables,
    /// Graph generation the tables were last seeded or propagated against.
    synced_generation: u64,
    rounds:            u64,
}

impl ProactiveRouting<BfsRouteFinder> {
    /// Tables for every node in `graph`, pre-seeded with direct routes.
    pub fn seeded(graph: &NeighborGraph) -> Self {
        Self::with_finder(BfsRouteFinder, graph)
    }
}

impl<F: RouteFinder> ProactiveRouting<F> {
    pub fn with_finder(finder: F, graph: &NeighborGraph) -> Self {
        let mut tables = RoutingTables::new(graph.node_count());
        for node in graph.node_ids() {
            let Some(table) = tables.get_mut(node) else {
                continue;
            };
            for dest in graph.node_ids().filter(|&d| d != node) {
                table.update(dest, dest);
            }
        }
        log::debug!(
            "seeded {} routing tables with {} direct routes",
            tables.len(),
            tables.entry_count()
        );
        Self {
            finder,
            tables,
            synced_generation: graph.generation(),
            rounds: 0,
        }
    }

    /// Run one synchronous round of table exchange over `graph`.
    ///
    /// Returns the number of route writes performed.
    pub fn propagate(&mut self, graph: &NeighborGraph) -> usize {
        let advertised = self.tables.clone();
        let mut writes = 0;

        for node in graph.node_ids() {
            let Some(table) = self.tables.get_mut(node) else {
                continue;
            };
            for &neighbor in graph.neighbors(node).unwrap_or_default() {
                let Some(offer) = advertised.get(neighbor) else {
                    continue;
                };
                for dest in offer.destinations().filter(|&d| d != node) {
                    table.update(dest, neighbor);
                    writes += 1;
                }
            }
        }

        self.synced_generation = graph.generation();
        self.rounds += 1;
        log::info!(
            "routing round {} propagated {} route updates (graph gen {})",
            self.rounds,
            writes,
            self.synced_generation
        );
        writes
    }

    /// `true` if `graph` was recomputed after the tables were last seeded or
    /// propagated.  Stale entries may name next hops that are no longer
    /// neighbors; they are kept as-is.
    pub fn is_stale(&self, graph: &NeighborGraph) -> bool {
        graph.generation() != self.synced_generation
    }

    /// Number of propagation rounds run so far.
    pub fn rounds(&self) -> u64 {
        self.rounds
    }

    /// Every table entry with the current hop distance to its destination.
    pub fn report(&self, graph: &NeighborGraph) -> RoutingResult<Vec<TableRow>> {
        let mut rows = Vec::with_capacity(self.tables.entry_count());
        for (node, table) in self.tables.iter() {
            for (destination, entry) in table.iter() {
                let hops = if graph.contains(node) && graph.contains(destination) {
                    self.finder.find_path(graph, node, destination)?.map(|p| p.hop_count())
                } else {
                    None
                };
                rows.push(TableRow {
                    node,
                    destination,
                    next_hop: entry.next_hop,
                    hold_time: entry.hold_time,
                    hops,
                });
            }
        }
        Ok(rows)
    }
}

impl<F: RouteFinder> RoutingProtocol for ProactiveRouting<F> {
    fn kind(&self) -> ProtocolKind {
        ProtocolKind::Proactive
    }

    fn send(
        &mut self,
        graph:       &NeighborGraph,
        source:      NodeId,
        destination: NodeId,
    ) -> RoutingResult<Delivery> {
        let path = self.finder.find_path(graph, source, destination)?;
        Ok(Delivery { source, destination, path, requests: Vec::new() })
    }

    fn tables(&self) -> &RoutingTables {
        &self.tables
    }
}
