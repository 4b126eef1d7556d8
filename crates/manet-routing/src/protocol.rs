//! The seam between the simulation driver and the protocol variants.

use manet_core::{NodeId, ProtocolKind};
use manet_topology::NeighborGraph;

use crate::{Path, RouteRequest, RoutingResult, RoutingTable, RoutingTables};

/// Outcome of one send attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    pub source:      NodeId,
    pub destination: NodeId,
    /// The minimum-hop path, or `None` when the destination is unreachable.
    pub path:        Option<Path>,
    /// Simulated RREQ forwarding steps in expansion order.  Always empty for
    /// the proactive variant.
    pub requests:    Vec<RouteRequest>,
}

impl Delivery {
    pub fn is_delivered(&self) -> bool {
        self.path.is_some()
    }

    pub fn hop_count(&self) -> Option<u32> {
        self.path.as_ref().map(Path::hop_count)
    }
}

/// A routing protocol variant driven by `manet_sim::Simulation`.
///
/// The graph is passed in on every call, never stored, so a protocol always
/// searches whatever snapshot the caller hands it.
pub trait RoutingProtocol {
    fn kind(&self) -> ProtocolKind;

    /// Find a path from `source` to `destination` and do the variant's
    /// bookkeeping for it.
    fn send(
        &mut self,
        graph:       &NeighborGraph,
        source:      NodeId,
        destination: NodeId,
    ) -> RoutingResult<Delivery>;

    /// All per-node routing tables.
    fn tables(&self) -> &RoutingTables;

    /// Routing table of `id`, or `None` for an unknown node.
    fn routing_table(&self, id: NodeId) -> Option<&RoutingTable> {
        self.tables().get(id)
    }
}
