//! Deterministic simulation RNG.
//!
//! All randomness in a run (initial placement and every movement tick) is
//! drawn from one `SimRng` seeded from `SimConfig::seed`, so the same seed
//! always reproduces the same sequence of topologies.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{Bounds, Point};

/// Simulation-level RNG.
///
/// Used only from the single driver thread.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// A point drawn uniformly from `bounds` (edges inclusive).
    ///
    /// # Panics
    /// Panics if `bounds` is not [valid](Bounds::is_valid).
    pub fn point_in(&mut self, bounds: Bounds) -> Point {
        Point::new(
            self.0.gen_range(bounds.min_x..=bounds.max_x),
            self.0.gen_range(bounds.min_y..=bounds.max_y),
        )
    }
}
