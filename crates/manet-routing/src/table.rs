//! Per-node routing tables.
//!
//! A table maps destination identity → next-hop identity.  Entries carry a
//! hold-time counter that is set on every write and never decremented:
//! routes do not expire on their own, and nothing invalidates them when the
//! topology changes.  A table is a snapshot as of its last update.

use std::collections::BTreeMap;

use manet_core::NodeId;

/// Hold time stamped on every route write.
pub const DEFAULT_HOLD_TIME: u32 = 10;

/// One routing-table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteEntry {
    pub next_hop:  NodeId,
    pub hold_time: u32,
}

// ── RoutingTable ──────────────────────────────────────────────────────────────

/// Destination → next hop for a single node, iterated in destination order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoutingTable {
    entries: BTreeMap<NodeId, RouteEntry>,
}

impl RoutingTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Route `destination` via `next_hop`, replacing any existing entry.
    /// Returns the replaced entry.
    pub fn update(&mut self, destination: NodeId, next_hop: NodeId) -> Option<RouteEntry> {
        log::trace!("route to {destination} via {next_hop} added");
        self.entries.insert(
            destination,
            RouteEntry { next_hop, hold_time: DEFAULT_HOLD_TIME },
        )
    }

    pub fn entry(&self, destination: NodeId) -> Option<&RouteEntry> {
        self.entries.get(&destination)
    }

    pub fn next_hop(&self, destination: NodeId) -> Option<NodeId> {
        self.entries.get(&destination).map(|e| e.next_hop)
    }

    /// Destinations this table has a route for, ascending.
    pub fn destinations(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.entries.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &RouteEntry)> + '_ {
        self.entries.iter().map(|(&d, e)| (d, e))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ── RoutingTables ─────────────────────────────────────────────────────────────

/// One [`RoutingTable`] per node, indexed by creation slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoutingTables {
    tables: Vec<RoutingTable>,
}

impl RoutingTables {
    /// Empty tables for nodes `1..=node_count`.
    pub fn new(node_count: usize) -> Self {
        Self { tables: vec![RoutingTable::new(); node_count] }
    }

    pub fn get(&self, id: NodeId) -> Option<&RoutingTable> {
        id.slot().and_then(|s| self.tables.get(s))
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut RoutingTable> {
        id.slot().and_then(|s| self.tables.get_mut(s))
    }

    /// Number of nodes with a table.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// `(owner, table)` pairs in node-creation order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &RoutingTable)> + '_ {
        self.tables
            .iter()
            .enumerate()
            .map(|(slot, t)| (NodeId::from_slot(slot), t))
    }

    /// Total entries across all tables.
    pub fn entry_count(&self) -> usize {
        self.tables.iter().map(RoutingTable::len).sum()
    }
}
