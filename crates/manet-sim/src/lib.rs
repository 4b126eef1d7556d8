//! `manet-sim` — the simulation driver.
//!
//! A [`Simulation`] owns the topology, one routing protocol variant, the
//! RNG and the clock.  It has no UI: a front end (or a test) calls the same
//! operations a user would trigger.
//!
//! # Driver operations
//!
//! ```text
//! start_movement / stop_movement   toggle the movement schedule
//! step(observer)                   one movement tick: reposition all nodes,
//!                                  recompute the neighbor graph
//! click(point) / select(id)        source → destination → reset cycle
//! send(observer)                   route from source to destination
//! propagate_tables(observer)       proactive only: one table-exchange round
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use manet_core::SimConfig;
//! use manet_sim::{LogObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(SimConfig::reactive()).build_reactive()?;
//! sim.select(NodeId(1))?;
//! sim.select(NodeId(7))?;
//! let path = sim.send(&mut LogObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod selection;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{LogObserver, NoopObserver, SimObserver};
pub use selection::{Selection, SelectionEvent};
pub use sim::Simulation;
