//! Top-level simulation configuration.
//!
//! Typically loaded from a JSON file by the driver binary and passed to
//! `manet_sim::SimBuilder`.  Every field has a default, so a config file
//! only needs to list what it overrides.

use crate::{Bounds, CoreError, CoreResult, ProtocolKind};

/// Range within which two nodes can hear each other, in world units.
pub const DEFAULT_COMMUNICATION_RANGE: f64 = 150.0;

/// Simulated interval between movement ticks.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 500;

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Which routing variant to run.
    pub protocol: ProtocolKind,

    /// Number of nodes created at start.  Identities are `1..=node_count`.
    pub node_count: usize,

    /// Maximum Euclidean distance at which two nodes are neighbors.
    pub communication_range: f64,

    /// Area used for the initial random placement.
    pub placement: Bounds,

    /// Full arena.  Movement ticks place nodes inside `arena` inset by
    /// `margin`.
    pub arena: Bounds,

    /// Distance kept between moving nodes and the arena edge.
    pub margin: f64,

    /// Radius within which a click selects a node.
    pub hit_radius: f64,

    /// Simulated milliseconds per movement tick.
    pub tick_interval_ms: u64,

    /// Master RNG seed.  The same seed always produces identical runs.
    pub seed: u64,
}

impl SimConfig {
    /// Defaults of the proactive simulator: 15 nodes, 20-unit node radius.
    pub fn proactive() -> Self {
        Self {
            protocol:            ProtocolKind::Proactive,
            node_count:          15,
            communication_range: DEFAULT_COMMUNICATION_RANGE,
            placement:           Bounds::new(50.0, 50.0, 700.0, 400.0),
            arena:               Bounds::from_size(650.0, 500.0),
            margin:              50.0,
            hit_radius:          20.0,
            tick_interval_ms:    DEFAULT_TICK_INTERVAL_MS,
            seed:                42,
        }
    }

    /// Defaults of the reactive simulator: 19 nodes, 15-unit node radius.
    pub fn reactive() -> Self {
        Self {
            protocol:   ProtocolKind::Reactive,
            node_count: 19,
            hit_radius: 15.0,
            ..Self::proactive()
        }
    }

    /// Defaults for `kind`.
    pub fn for_protocol(kind: ProtocolKind) -> Self {
        match kind {
            ProtocolKind::Proactive => Self::proactive(),
            ProtocolKind::Reactive  => Self::reactive(),
        }
    }

    /// Area nodes are drawn from on every movement tick.
    #[inline]
    pub fn movement_bounds(&self) -> Bounds {
        self.arena.inset(self.margin)
    }

    /// Reject values the topology cannot work with.
    pub fn validate(&self) -> CoreResult<()> {
        if !self.communication_range.is_finite() || self.communication_range < 0.0 {
            return Err(CoreError::Config(format!(
                "communication_range must be a non-negative number, got {}",
                self.communication_range
            )));
        }
        if !self.placement.is_valid() {
            return Err(CoreError::Config(format!(
                "placement bounds {} are empty or not finite",
                self.placement
            )));
        }
        if !self.arena.is_valid() {
            return Err(CoreError::Config(format!(
                "arena bounds {} are empty or not finite",
                self.arena
            )));
        }
        if !self.margin.is_finite() || self.margin < 0.0 {
            return Err(CoreError::Config(format!(
                "margin must be a non-negative number, got {}",
                self.margin
            )));
        }
        if !self.movement_bounds().is_valid() {
            return Err(CoreError::Config(format!(
                "margin {} leaves no movement area inside arena {}",
                self.margin, self.arena
            )));
        }
        if !self.hit_radius.is_finite() || self.hit_radius < 0.0 {
            return Err(CoreError::Config(format!(
                "hit_radius must be a non-negative number, got {}",
                self.hit_radius
            )));
        }
        if u32::try_from(self.node_count).is_err() {
            return Err(CoreError::Config(format!(
                "node_count {} exceeds the node identity space",
                self.node_count
            )));
        }
        Ok(())
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self::proactive()
    }
}
