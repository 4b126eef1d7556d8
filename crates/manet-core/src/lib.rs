//! `manet-core` — foundational types for the MANET routing simulator.
//!
//! This crate is a dependency of every other `manet-*` crate.  It has no
//! `manet-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`ids`]      | `NodeId`                                              |
//! | [`geo`]      | `Point`, `Bounds`, Euclidean distance                 |
//! | [`time`]     | `Tick`, `SimClock`                                    |
//! | [`rng`]      | `SimRng`                                              |
//! | [`protocol`] | `ProtocolKind` enum                                   |
//! | [`config`]   | `SimConfig` and its validation                        |
//! | [`error`]    | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod protocol;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SimConfig;
pub use error::{CoreError, CoreResult};
pub use geo::{Bounds, Point};
pub use ids::NodeId;
pub use protocol::ProtocolKind;
pub use rng::SimRng;
pub use time::{SimClock, Tick};
