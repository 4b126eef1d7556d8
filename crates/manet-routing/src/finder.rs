//! Route-finding trait and the default breadth-first search.
//!
//! # Pluggability
//!
//! Protocol variants call searches through the [`RouteFinder`] trait, so a
//! different search strategy can be swapped in without touching the table
//! bookkeeping.  The default [`BfsRouteFinder`] is what both variants use.
//!
//! # Search order
//!
//! BFS from the source, expanding each node's neighbors in the neighbor
//! graph's iteration order (node-creation order).  A node is marked visited
//! when it is enqueued, so it is enqueued at most once, and the first
//! predecessor recorded for it is the one that sticks.  When several
//! neighbors sit at the same hop distance, the one enqueued earliest wins.
//! The destination test happens as nodes are dequeued.

use std::collections::VecDeque;
use std::fmt;

use manet_core::NodeId;
use manet_topology::NeighborGraph;

use crate::{Path, RoutingError, RoutingResult};

// ── RouteRequest ──────────────────────────────────────────────────────────────

/// One simulated route-request forwarding step: `from` passes the RREQ on
/// to its neighbor `to`, which is `hop` hops from the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteRequest {
    pub from: NodeId,
    pub to:   NodeId,
    pub hop:  u32,
}

impl fmt::Display for RouteRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} forwards RREQ to {}", self.from, self.to)
    }
}

// ── RouteFinder trait ─────────────────────────────────────────────────────────

/// Pluggable path search over a [`NeighborGraph`] snapshot.
///
/// Implementations must be `Send + Sync` so a finder can be shared with a
/// view layer running on another thread.
pub trait RouteFinder: Send + Sync {
    /// Search for a path from `source` to `destination`, reporting every
    /// forwarding step to `on_forward` in expansion order.
    ///
    /// Returns `Ok(None)` if the destination is unreachable and
    /// [`RoutingError::UnknownNode`] if either endpoint is not in `graph`.
    fn find_path_traced(
        &self,
        graph:       &NeighborGraph,
        source:      NodeId,
        destination: NodeId,
        on_forward:  &mut dyn FnMut(RouteRequest),
    ) -> RoutingResult<Option<Path>>;

    /// [`find_path_traced`](Self::find_path_traced) without the trace.
    fn find_path(
        &self,
        graph:       &NeighborGraph,
        source:      NodeId,
        destination: NodeId,
    ) -> RoutingResult<Option<Path>> {
        self.find_path_traced(graph, source, destination, &mut |_: RouteRequest| {})
    }
}

// ── BfsRouteFinder ────────────────────────────────────────────────────────────

/// Unweighted breadth-first search; every path it returns is minimal in hop
/// count.
#[derive(Debug, Clone, Copy, Default)]
pub struct BfsRouteFinder;

impl RouteFinder for BfsRouteFinder {
    fn find_path_traced(
        &self,
        graph:       &NeighborGraph,
        source:      NodeId,
        destination: NodeId,
        on_forward:  &mut dyn FnMut(RouteRequest),
    ) -> RoutingResult<Option<Path>> {
        bfs(graph, source, destination, on_forward)
    }
}

/// Minimum-hop path from `source` to `destination` with [`BfsRouteFinder`].
pub fn find_path(
    graph:       &NeighborGraph,
    source:      NodeId,
    destination: NodeId,
) -> RoutingResult<Option<Path>> {
    BfsRouteFinder.find_path(graph, source, destination)
}

/// [`find_path`] reporting each RREQ forwarding step to `on_forward`.
pub fn find_path_traced<F>(
    graph:          &NeighborGraph,
    source:         NodeId,
    destination:    NodeId,
    mut on_forward: F,
) -> RoutingResult<Option<Path>>
where
    F: FnMut(RouteRequest),
{
    BfsRouteFinder.find_path_traced(graph, source, destination, &mut on_forward)
}

/// Hop distance between two nodes, or `None` when no path exists.
pub fn hop_count(
    graph:       &NeighborGraph,
    source:      NodeId,
    destination: NodeId,
) -> RoutingResult<Option<u32>> {
    Ok(find_path(graph, source, destination)?.map(|p| p.hop_count()))
}

// ── BFS internals ─────────────────────────────────────────────────────────────

fn bfs(
    graph:       &NeighborGraph,
    source:      NodeId,
    destination: NodeId,
    on_forward:  &mut dyn FnMut(RouteRequest),
) -> RoutingResult<Option<Path>> {
    for id in [source, destination] {
        if !graph.contains(id) {
            return Err(RoutingError::UnknownNode(id));
        }
    }
    if source == destination {
        return Ok(Some(Path::trivial(source)));
    }

    let n = graph.node_count();
    let mut visited = vec![false; n];
    // prev[v] = node that first enqueued v; None for the source and for
    // unreached nodes.
    let mut prev: Vec<Option<NodeId>> = vec![None; n];
    let mut hops = vec![0u32; n];
    let mut queue = VecDeque::with_capacity(n);

    if let Some(s) = source.slot() {
        visited[s] = true;
    }
    queue.push_back(source);

    while let Some(node) = queue.pop_front() {
        if node == destination {
            return Ok(reconstruct(&prev, destination));
        }
        let Some(node_slot) = node.slot() else {
            continue;
        };
        let hop = hops[node_slot] + 1;

        for &next in graph.neighbors(node).unwrap_or_default() {
            let Some(s) = next.slot() else {
                continue;
            };
            if visited[s] {
                continue;
            }
            visited[s] = true;
            prev[s] = Some(node);
            hops[s] = hop;
            queue.push_back(next);
            on_forward(RouteRequest { from: node, to: next, hop });
        }
    }

    Ok(None)
}

/// Walk `prev` back from `destination` to the source.
fn reconstruct(prev: &[Option<NodeId>], destination: NodeId) -> Option<Path> {
    let mut nodes = vec![destination];
    let mut cur = destination;
    while let Some(p) = cur.slot().and_then(|s| prev[s]) {
        nodes.push(p);
        cur = p;
    }
    nodes.reverse();
    Path::new(nodes)
}
