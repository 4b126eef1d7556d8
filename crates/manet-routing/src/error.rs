//! Routing error type.

use thiserror::Error;

use manet_core::NodeId;

/// Errors produced by `manet-routing`.
///
/// An unreachable destination is *not* an error; searches return
/// `Ok(None)` for it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoutingError {
    #[error("{0} is not part of the neighbor graph")]
    UnknownNode(NodeId),
}

pub type RoutingResult<T> = Result<T, RoutingError>;
