//! The result of a successful search.

use std::fmt;

use manet_core::NodeId;

/// An ordered sequence of distinct nodes from source to destination in
/// which every consecutive pair is a neighbor edge.
///
/// Never empty: the shortest path is the single-node path from a node to
/// itself (zero hops).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    nodes: Vec<NodeId>,
}

impl Path {
    /// Wrap a node sequence.  Returns `None` for an empty sequence.
    pub fn new(nodes: Vec<NodeId>) -> Option<Self> {
        if nodes.is_empty() { None } else { Some(Self { nodes }) }
    }

    /// The zero-hop path from `node` to itself.
    pub fn trivial(node: NodeId) -> Self {
        Self { nodes: vec![node] }
    }

    #[inline]
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    #[inline]
    pub fn source(&self) -> NodeId {
        self.nodes[0]
    }

    #[inline]
    pub fn destination(&self) -> NodeId {
        self.nodes[self.nodes.len() - 1]
    }

    /// Number of edges traversed.
    #[inline]
    pub fn hop_count(&self) -> u32 {
        (self.nodes.len() - 1) as u32
    }

    /// Consecutive `(from, to)` pairs along the path.
    pub fn hops(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.nodes.windows(2).map(|w| (w[0], w[1]))
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, node) in self.nodes.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{node}")?;
        }
        Ok(())
    }
}
