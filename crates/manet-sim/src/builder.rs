//! Fluent builder for constructing a [`Simulation`].

use manet_core::{Point, SimClock, SimConfig, SimRng};
use manet_routing::{ProactiveRouting, ReactiveRouting, RoutingProtocol};
use manet_topology::{NeighborGraph, Topology};

use crate::{Selection, SimError, SimResult, Simulation};

/// Fluent builder for [`Simulation<P>`].
///
/// # Optional inputs (have defaults)
///
/// | Method            | Default                                             |
/// |-------------------|-----------------------------------------------------|
/// | `.positions(v)`   | `config.node_count` random points in `placement`    |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(SimConfig::proactive()).build_proactive()?;
/// sim.propagate_tables(&mut LogObserver);
/// ```
pub struct SimBuilder {
    config:    SimConfig,
    positions: Option<Vec<Point>>,
}

impl SimBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self { config, positions: None }
    }

    /// Place nodes at fixed points instead of drawing them at random.
    ///
    /// Must be length `config.node_count`.
    pub fn positions(mut self, positions: Vec<Point>) -> Self {
        self.positions = Some(positions);
        self
    }

    /// Build with pre-seeded proactive routing tables.
    pub fn build_proactive(self) -> SimResult<Simulation<ProactiveRouting>> {
        self.build_with(ProactiveRouting::seeded)
    }

    /// Build with empty, on-demand reactive routing tables.
    pub fn build_reactive(self) -> SimResult<Simulation<ReactiveRouting>> {
        self.build_with(ReactiveRouting::new)
    }

    /// Validate the config, place the nodes and hand the initial neighbor
    /// graph to `make_protocol`.
    pub fn build_with<P, F>(self, make_protocol: F) -> SimResult<Simulation<P>>
    where
        P: RoutingProtocol,
        F: FnOnce(&NeighborGraph) -> P,
    {
        let config = self.config;
        config.validate().map_err(|e| SimError::Config(e.to_string()))?;

        let mut rng = SimRng::new(config.seed);
        let topology = match self.positions {
            Some(p) => {
                if p.len() != config.node_count {
                    return Err(SimError::Config(format!(
                        "{} positions given for {} nodes",
                        p.len(),
                        config.node_count
                    )));
                }
                Topology::from_positions(p, config.communication_range)?
            }
            None => Topology::place(
                config.node_count,
                config.placement,
                config.communication_range,
                &mut rng,
            ),
        };

        let protocol = make_protocol(topology.graph());
        log::info!(
            "{} simulation ready: {} nodes, {} links",
            protocol.kind(),
            topology.len(),
            topology.graph().edge_count()
        );

        Ok(Simulation {
            clock:           SimClock::new(config.tick_interval_ms),
            config,
            topology,
            protocol,
            rng,
            selection:       Selection::new(),
            active_path:     None,
            movement_active: false,
        })
    }
}
