//! Plain data row types written by output backends.

/// One node's position and neighbor count at a given tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeSnapshotRow {
    pub tick:    u64,
    pub node_id: u32,
    pub x:       f64,
    pub y:       f64,
    pub degree:  u32,
}

/// The outcome of one send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryRow {
    pub tick:        u64,
    pub source:      u32,
    pub destination: u32,
    pub delivered:   bool,
    /// `None` when no path was found.
    pub hops:        Option<u32>,
    /// Node ids along the path, source first; empty when not delivered.
    pub path:        Vec<u32>,
    /// Number of simulated RREQ forwarding steps (0 for proactive sends).
    pub requests:    u32,
}
