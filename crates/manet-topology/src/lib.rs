//! `manet-topology` — node positions and the derived neighbor graph.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`graph`]    | `NeighborGraph` — symmetric adjacency lists, snapshots     |
//! | [`topology`] | `Topology` (positions + graph + R-tree), `MobileNode`      |
//! | [`error`]    | `TopologyError`, `TopologyResult<T>`                       |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                    |
//! |------------|-----------------------------------------------------------|
//! | `parallel` | Neighbor recomputation runs on Rayon.                     |
//! | `serde`    | Derives `Serialize`/`Deserialize` on public types.        |

pub mod error;
pub mod graph;
pub mod topology;


pub use error::{TopologyError, TopologyResult};
pub use graph::NeighborGraph;
pub use topology::{MobileNode, Topology};
