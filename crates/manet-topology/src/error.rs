//! Topology error type.

use thiserror::Error;

use manet_core::{NodeId, Point};

/// Errors produced by `manet-topology`.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("{0} not found in topology")]
    NodeNotFound(NodeId),

    /// A coordinate was NaN or infinite.  Rejected before any state changes.
    #[error("{0} cannot be placed at non-finite position {1}")]
    InvalidPosition(NodeId, Point),
}

pub type TopologyResult<T> = Result<T, TopologyError>;
