//! Simulation time model.
//!
//! Time advances in movement ticks.  A front end fires a "move nodes"
//! timer (500 ms by default) and calls `Simulation::step` on it; `SimClock`
//! only records how many ticks have elapsed and what interval they stand
//! for.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute movement-tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Counts movement ticks and maps them to simulated milliseconds.
#[derive(Clone, Debug)]
pub struct SimClock {
    /// Simulated milliseconds between two movement ticks.
    pub tick_interval_ms: u64,
    /// The current tick, advanced by `SimClock::advance()` after each step.
    pub current_tick: Tick,
}

impl SimClock {
    pub fn new(tick_interval_ms: u64) -> Self {
        Self { tick_interval_ms, current_tick: Tick::ZERO }
    }

    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// Simulated milliseconds since tick 0.
    #[inline]
    pub fn elapsed_ms(&self) -> u64 {
        self.current_tick.0 * self.tick_interval_ms
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (+{} ms)", self.current_tick, self.elapsed_ms())
    }
}
