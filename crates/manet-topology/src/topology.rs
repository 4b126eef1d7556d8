//! The `Topology`: mobile nodes, their positions, and the derived graph.
//!
//! # Eager recomputation
//!
//! Every operation that changes a position finishes by rebuilding the
//! [`NeighborGraph`] from scratch (no incremental update) and re-indexing
//! the R-tree, so the graph a caller reads always matches the current
//! positions and range.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) maps `(x, y)` to node identities.  It only backs
//! [`Topology::node_at`] (click hit-testing); neighbor derivation is the
//! plain pairwise scan in [`NeighborGraph::from_positions`].

use rstar::{AABB, RTree, RTreeObject};

use manet_core::{Bounds, NodeId, Point, SimRng};

use crate::{NeighborGraph, TopologyError, TopologyResult};

// ── MobileNode ────────────────────────────────────────────────────────────────

/// One mobile node: a stable identity and its current position.
///
/// Neighbors live in the topology's [`NeighborGraph`]; routing tables live
/// with the routing protocol.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MobileNode {
    pub id:  NodeId,
    pub pos: Point,
}

// ── R-tree node entry ─────────────────────────────────────────────────────────

#[derive(Clone)]
struct NodeEntry {
    point: [f64; 2],
    id:    NodeId,
}

impl RTreeObject for NodeEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

// ── Topology ──────────────────────────────────────────────────────────────────

/// Ordered node collection plus communication range and the neighbor graph
/// derived from them.
pub struct Topology {
    /// Nodes in creation order; `nodes[i].id == NodeId::from_slot(i)`.
    nodes: Vec<MobileNode>,

    /// Communication range the current graph was computed with.
    range: f64,

    graph: NeighborGraph,

    spatial_idx: RTree<NodeEntry>,
}

impl Topology {
    /// Create `count` nodes (identities `1..=count`) at uniform-random
    /// points inside `bounds` and compute their neighbor graph.
    ///
    /// # Panics
    /// Panics if `bounds` is not [valid](Bounds::is_valid).
    pub fn place(count: usize, bounds: Bounds, range: f64, rng: &mut SimRng) -> Self {
        let nodes = (0..count)
            .map(|slot| MobileNode { id: NodeId::from_slot(slot), pos: rng.point_in(bounds) })
            .collect();
        Self::with_nodes(nodes, range)
    }

    /// Create nodes at fixed positions, in order, and compute their graph.
    ///
    /// Fails with [`TopologyError::InvalidPosition`] naming the first node
    /// whose coordinates are not finite.
    pub fn from_positions(
        positions: impl IntoIterator<Item = Point>,
        range:     f64,
    ) -> TopologyResult<Self> {
        let nodes = positions
            .into_iter()
            .enumerate()
            .map(|(slot, pos)| {
                let id = NodeId::from_slot(slot);
                if pos.is_finite() {
                    Ok(MobileNode { id, pos })
                } else {
                    Err(TopologyError::InvalidPosition(id, pos))
                }
            })
            .collect::<TopologyResult<Vec<_>>>()?;
        Ok(Self::with_nodes(nodes, range))
    }

    fn with_nodes(nodes: Vec<MobileNode>, range: f64) -> Self {
        let mut topology = Self {
            nodes,
            range,
            graph: NeighborGraph::default(),
            spatial_idx: RTree::new(),
        };
        topology.rebuild(0);
        topology
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Move every node to a new uniform-random point inside `bounds`, then
    /// recompute the neighbor graph.
    ///
    /// Callers pass margin-adjusted bounds (see [`Bounds::inset`]) when nodes
    /// must stay fully visible in a rendered arena.
    ///
    /// # Panics
    /// Panics if `bounds` is not [valid](Bounds::is_valid).
    pub fn reposition(&mut self, bounds: Bounds, rng: &mut SimRng) {
        for node in &mut self.nodes {
            node.pos = rng.point_in(bounds);
        }
        self.recompute_neighbors(self.range);
    }

    /// Move a single node, then recompute the neighbor graph.
    ///
    /// A non-finite `pos` is rejected and the topology is left unchanged.
    pub fn set_position(&mut self, id: NodeId, pos: Point) -> TopologyResult<()> {
        let node = self.node_mut(id)?;
        if !pos.is_finite() {
            return Err(TopologyError::InvalidPosition(id, pos));
        }
        node.pos = pos;
        self.recompute_neighbors(self.range);
        Ok(())
    }

    /// Clear all neighbor sets and re-derive them from current positions
    /// with communication range `range`.
    ///
    /// Deterministic: calling it twice with unchanged positions yields the
    /// same adjacency (only the generation counter advances).
    pub fn recompute_neighbors(&mut self, range: f64) {
        self.range = range;
        self.rebuild(self.graph.generation() + 1);
    }

    fn rebuild(&mut self, generation: u64) {
        let positions: Vec<Point> = self.nodes.iter().map(|n| n.pos).collect();
        self.graph = NeighborGraph::from_positions(&positions, self.range, generation);

        let entries: Vec<NodeEntry> = self
            .nodes
            .iter()
            .map(|n| NodeEntry { point: [n.pos.x, n.pos.y], id: n.id })
            .collect();
        self.spatial_idx = RTree::bulk_load(entries);

        log::debug!(
            "neighbor graph gen {}: {} nodes, {} edges (range {})",
            generation,
            self.graph.node_count(),
            self.graph.edge_count(),
            self.range,
        );
    }

    // ── Queries ───────────────────────────────────────────────────────────

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn range(&self) -> f64 {
        self.range
    }

    /// All nodes in creation order.
    #[inline]
    pub fn nodes(&self) -> &[MobileNode] {
        &self.nodes
    }

    pub fn node(&self, id: NodeId) -> TopologyResult<&MobileNode> {
        id.slot()
            .and_then(|s| self.nodes.get(s))
            .ok_or(TopologyError::NodeNotFound(id))
    }

    fn node_mut(&mut self, id: NodeId) -> TopologyResult<&mut MobileNode> {
        id.slot()
            .and_then(|s| self.nodes.get_mut(s))
            .ok_or(TopologyError::NodeNotFound(id))
    }

    /// The current neighbor graph.
    #[inline]
    pub fn graph(&self) -> &NeighborGraph {
        &self.graph
    }

    /// An owned copy of the current graph, for searches that must not
    /// observe a concurrent `reposition`.
    pub fn snapshot(&self) -> NeighborGraph {
        self.graph.clone()
    }

    /// Neighbors of `id`, in node-creation order.
    pub fn neighbors_of(&self, id: NodeId) -> TopologyResult<&[NodeId]> {
        self.graph.neighbors(id).ok_or(TopologyError::NodeNotFound(id))
    }

    /// Every neighbor edge once, as `(u, v)` with `u < v`.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.graph.edges()
    }

    /// The node under `point`, if any node centre lies within `hit_radius`
    /// of it on both axes (a square box, not a circle).
    ///
    /// When several nodes overlap the earliest-created one wins.
    pub fn node_at(&self, point: Point, hit_radius: f64) -> Option<NodeId> {
        let hit_box = AABB::from_corners(
            [point.x - hit_radius, point.y - hit_radius],
            [point.x + hit_radius, point.y + hit_radius],
        );
        self.spatial_idx
            .locate_in_envelope(&hit_box)
            .map(|e| e.id)
            .min()
    }
}
