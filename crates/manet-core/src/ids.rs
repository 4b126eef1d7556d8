//! Strongly typed node identifier.
//!
//! Node identities are the stable integers `1..=count` assigned in creation
//! order.  They are the only key used for neighbor lists and routing tables;
//! nothing in the simulator compares nodes by structure or address.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty) => $label:literal;) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{} {}", $label, self.0)
            }
        }

        impl From<$name> for $inner {
            #[inline(always)]
            fn from(id: $name) -> $inner {
                id.0
            }
        }
    };
}

typed_id! {
    /// Identity of a mobile node.  The first node created is `NodeId(1)`.
    pub struct NodeId(u32) => "Node";
}

impl NodeId {
    /// Identity of the node created at zero-based position `slot`.
    #[inline]
    pub fn from_slot(slot: usize) -> Self {
        NodeId(slot as u32 + 1)
    }

    /// Zero-based creation position, for direct indexing into per-node `Vec`s.
    ///
    /// Returns `None` for `NodeId(0)`, which no node ever carries.
    #[inline]
    pub fn slot(self) -> Option<usize> {
        (self.0 as usize).checked_sub(1)
    }
}
