//! Source/destination selection cycle.

use std::fmt;

use manet_core::NodeId;

/// What a single pick did to the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionEvent {
    /// First pick: `0` is the new source.
    Source(NodeId),
    /// Second pick: `0` is the destination.
    Destination(NodeId),
    /// Pick after both were set: the destination is cleared and `0` becomes
    /// the new source.
    Reset(NodeId),
}

impl fmt::Display for SelectionEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionEvent::Source(id)      => write!(f, "Selected {id} as Source."),
            SelectionEvent::Destination(id) => write!(f, "Selected {id} as Destination."),
            SelectionEvent::Reset(id)       => write!(f, "Reset selection. Selected {id} as Source."),
        }
    }
}

/// Current source and destination picks.
///
/// Picks cycle: source, destination, then a reset back to a new source.
/// The same node may be picked as both source and destination.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    source:      Option<NodeId>,
    destination: Option<NodeId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the cycle with `id`.
    pub fn pick(&mut self, id: NodeId) -> SelectionEvent {
        match (self.source, self.destination) {
            (None, _) => {
                self.source = Some(id);
                SelectionEvent::Source(id)
            }
            (Some(_), None) => {
                self.destination = Some(id);
                SelectionEvent::Destination(id)
            }
            (Some(_), Some(_)) => {
                self.source = Some(id);
                self.destination = None;
                SelectionEvent::Reset(id)
            }
        }
    }

    pub fn source(&self) -> Option<NodeId> {
        self.source
    }

    pub fn destination(&self) -> Option<NodeId> {
        self.destination
    }

    /// Both endpoints, or the name of the one(s) still missing.
    pub fn endpoints(&self) -> Result<(NodeId, NodeId), &'static str> {
        match (self.source, self.destination) {
            (Some(s), Some(d)) => Ok((s, d)),
            (None, Some(_))    => Err("source"),
            (Some(_), None)    => Err("destination"),
            (None, None)       => Err("source and destination"),
        }
    }
}
