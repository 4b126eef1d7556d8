use manet_routing::RoutingError;
use manet_topology::TopologyError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("select both source and destination nodes to send data ({missing} not selected)")]
    InvalidSelection { missing: &'static str },

    #[error("topology error: {0}")]
    Topology(#[from] TopologyError),

    #[error("routing error: {0}")]
    Routing(#[from] RoutingError),
}

pub type SimResult<T> = Result<T, SimError>;
