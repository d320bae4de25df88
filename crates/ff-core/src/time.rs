//! Simulation time model.
//!
//! Time is a monotonically increasing `Tick` counter.  Tick 0 is the setup
//! state; the first simulated step is tick 1, and a run with a budget of
//! `steps` ticks ends after tick `steps`.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Ticks elapsed from `earlier` to `self`, saturating at zero.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Tracks the current tick against the run's tick budget.
#[derive(Clone, Debug)]
pub struct SimClock {
    /// The current tick, advanced by `SimClock::advance()` at the start of
    /// every step.
    pub current_tick: Tick,
    /// Last tick the run may execute.
    pub end_tick: Tick,
}

impl SimClock {
    pub fn new(total_steps: u64) -> Self {
        Self {
            current_tick: Tick::ZERO,
            end_tick:     Tick(total_steps),
        }
    }

    /// Advance the clock by one tick and return the new tick.
    #[inline]
    pub fn advance(&mut self) -> Tick {
        self.current_tick = Tick(self.current_tick.0 + 1);
        self.current_tick
    }

    /// `true` once the tick budget has been spent.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.current_tick >= self.end_tick
    }
}
