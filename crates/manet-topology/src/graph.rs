//! Undirected neighbor graph.
//!
//! # Data layout
//!
//! One adjacency list per node, indexed by creation slot
//! (`NodeId::slot()`).  Every list is kept in node-creation order, which is
//! the iteration order route discovery expands neighbors in, so searches
//! (and their tie-breaks) are reproducible.
//!
//! # Generations
//!
//! Each full recomputation produces a graph with a higher `generation`.
//! Routing tables remember the generation they were built against, which is
//! how staleness after movement is detected without ever refreshing them.

use manet_core::{NodeId, Point};

/// Symmetric, loop-free adjacency over nodes `1..=node_count`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NeighborGraph {
    adjacency:  Vec<Vec<NodeId>>,
    generation: u64,
}

impl NeighborGraph {
    /// Derive the graph from node positions: an edge joins every unordered
    /// pair whose Euclidean distance is at most `range`.
    ///
    /// O(n²) pair checks.  `positions[i]` belongs to `NodeId::from_slot(i)`.
    pub fn from_positions(positions: &[Point], range: f64, generation: u64) -> Self {
        Self { adjacency: build_adjacency(positions, range), generation }
    }

    /// Build a graph from an explicit undirected edge list.
    ///
    /// Self-loops, duplicate edges, and edges naming nodes outside
    /// `1..=node_count` are ignored.  Adjacency lists are sorted into
    /// creation order.
    pub fn from_edges(node_count: usize, edges: &[(NodeId, NodeId)]) -> Self {
        let mut adjacency = vec![Vec::new(); node_count];
        for &(a, b) in edges {
            let (Some(sa), Some(sb)) = (a.slot(), b.slot()) else {
                continue;
            };
            if sa == sb || sa >= node_count || sb >= node_count {
                continue;
            }
            if !adjacency[sa].contains(&b) {
                adjacency[sa].push(b);
                adjacency[sb].push(a);
            }
        }
        for list in &mut adjacency {
            list.sort_unstable();
        }
        Self { adjacency, generation: 0 }
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Recomputation counter this graph was produced at.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    // ── Queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn contains(&self, id: NodeId) -> bool {
        id.slot().is_some_and(|s| s < self.adjacency.len())
    }

    /// Neighbors of `id` in creation order, or `None` for an unknown node.
    #[inline]
    pub fn neighbors(&self, id: NodeId) -> Option<&[NodeId]> {
        id.slot()
            .and_then(|s| self.adjacency.get(s))
            .map(Vec::as_slice)
    }

    pub fn degree(&self, id: NodeId) -> Option<usize> {
        self.neighbors(id).map(<[NodeId]>::len)
    }

    pub fn are_neighbors(&self, a: NodeId, b: NodeId) -> bool {
        self.neighbors(a).is_some_and(|n| n.contains(&b))
    }

    /// All node identities in creation order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.adjacency.len()).map(NodeId::from_slot)
    }

    /// Every undirected edge once, as `(u, v)` with `u < v`.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.adjacency.iter().enumerate().flat_map(|(slot, list)| {
            let u = NodeId::from_slot(slot);
            list.iter().copied().filter(move |&v| u < v).map(move |v| (u, v))
        })
    }
}

// ── Construction internals ────────────────────────────────────────────────────

#[cfg(not(feature = "parallel"))]
pub(crate) fn build_adjacency(positions: &[Point], range: f64) -> Vec<Vec<NodeId>> {
    build_adjacency_sequential(positions, range)
}

#[cfg(any(not(feature = "parallel"), test))]
pub(crate) fn build_adjacency_sequential(positions: &[Point], range: f64) -> Vec<Vec<NodeId>> {
    let n = positions.len();
    let mut adjacency = vec![Vec::new(); n];
    // Visiting pairs (i, j) with i < j in row-major order appends to every
    // list in ascending slot order, so no sort is needed afterwards.
    for i in 0..n {
        for j in (i + 1)..n {
            if positions[i].distance(positions[j]) <= range {
                adjacency[i].push(NodeId::from_slot(j));
                adjacency[j].push(NodeId::from_slot(i));
            }
        }
    }
    adjacency
}

#[cfg(feature = "parallel")]
pub(crate) fn build_adjacency(positions: &[Point], range: f64) -> Vec<Vec<NodeId>> {
    use rayon::prelude::*;

    // Each row scans all other nodes on its own; distance is exactly
    // symmetric in IEEE arithmetic, so rows agree with each other.
    (0..positions.len())
        .into_par_iter()
        .map(|i| {
            positions
                .iter()
                .enumerate()
                .filter(|&(j, &p)| j != i && positions[i].distance(p) <= range)
                .map(|(j, _)| NodeId::from_slot(j))
                .collect()
        })
        .collect()
}
