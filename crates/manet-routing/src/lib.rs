//! `manet-routing` — route discovery over the neighbor graph.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                    |
//! |----------------|-------------------------------------------------------------|
//! | [`path`]       | `Path` — ordered node sequence with hop count               |
//! | [`finder`]     | `RouteFinder` trait, `BfsRouteFinder`, `find_path`, `RouteRequest` |
//! | [`table`]      | `RoutingTable`, `RouteEntry`, per-node `RoutingTables`      |
//! | [`protocol`]   | `RoutingProtocol` trait, `Delivery`                         |
//! | [`proactive`]  | `ProactiveRouting` — pre-seeded tables, one-round exchange  |
//! | [`reactive`]   | `ReactiveRouting` — on-demand RREQ flood                    |
//! | [`error`]      | `RoutingError`, `RoutingResult<T>`                          |
//!
//! # Search
//!
//! Both protocol variants find paths with the same breadth-first search,
//! so every returned path is minimal in hop count.  Unreachable
//! destinations are an ordinary outcome (`Ok(None)`); only unknown node
//! identities are errors.

pub mod error;
pub mod finder;
pub mod path;
pub mod proactive;
pub mod protocol;
pub mod reactive;
pub mod table;

#[cfg(test)]
mod tests;

pub use error::{RoutingError, RoutingResult};
pub use finder::{BfsRouteFinder, RouteFinder, RouteRequest, find_path, find_path_traced, hop_count};
pub use path::Path;
pub use proactive::{ProactiveRouting, TableRow};
pub use protocol::{Delivery, RoutingProtocol};
pub use reactive::ReactiveRouting;
pub use table::{DEFAULT_HOLD_TIME, RouteEntry, RoutingTable, RoutingTables};
