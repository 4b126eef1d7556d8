//! Reactive variant: routes are discovered only when a send asks for one.
//!
//! A discovery floods a simulated route request (RREQ) outward from the
//! source in breadth-first order; every forwarding step is recorded.  When
//! the flood reaches the destination, routes are installed along the found
//! path in both directions: each node on it learns the destination via its
//! successor and the source via its predecessor.

use manet_core::{NodeId, ProtocolKind};
use manet_topology::NeighborGraph;

use crate::{
    BfsRouteFinder, Delivery, Path, RouteFinder, RoutingProtocol, RoutingResult, RoutingTables,
};

pub struct ReactiveRouting<F: RouteFinder = BfsRouteFinder> {
    finder:      F,
    tables:      RoutingTables,
    discoveries: u64,
}

impl ReactiveRouting<BfsRouteFinder> {
    /// Empty tables for every node in `graph`.
    pub fn new(graph: &NeighborGraph) -> Self {
        Self::with_finder(BfsRouteFinder, graph)
    }
}

impl<F: RouteFinder> ReactiveRouting<F> {
    pub fn with_finder(finder: F, graph: &NeighborGraph) -> Self {
        Self {
            finder,
            tables: RoutingTables::new(graph.node_count()),
            discoveries: 0,
        }
    }

    /// Flood an RREQ from `source` towards `destination`.
    pub fn discover(
        &mut self,
        graph:       &NeighborGraph,
        source:      NodeId,
        destination: NodeId,
    ) -> RoutingResult<Delivery> {
        log::debug!("{source} is sending RREQ to find a route to {destination}");
        let mut requests = Vec::new();
        let path = self.finder.find_path_traced(graph, source, destination, &mut |req| {
            log::debug!("{req}");
            requests.push(req);
        })?;
        self.discoveries += 1;

        match &path {
            Some(p) => {
                log::debug!("route found: {p}");
                self.install(p);
            }
            None => log::debug!("no path found from {source} to {destination}"),
        }
        Ok(Delivery { source, destination, path, requests })
    }

    /// Number of discoveries run so far.
    pub fn discoveries(&self) -> u64 {
        self.discoveries
    }

    fn install(&mut self, path: &Path) {
        let (source, destination) = (path.source(), path.destination());
        for (from, to) in path.hops() {
            if let Some(t) = self.tables.get_mut(from) {
                t.update(destination, to);
            }
            if let Some(t) = self.tables.get_mut(to) {
                t.update(source, from);
            }
        }
    }
}

impl<F: RouteFinder> RoutingProtocol for ReactiveRouting<F> {
    fn kind(&self) -> ProtocolKind {
        ProtocolKind::Reactive
    }

    fn send(
        &mut self,
        graph:       &NeighborGraph,
        source:      NodeId,
        destination: NodeId,
    ) -> RoutingResult<Delivery> {
        self.discover(graph, source, destination)
    }

    fn tables(&self) -> &RoutingTables {
        &self.tables
    }
}
