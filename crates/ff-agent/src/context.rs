//! The world an agent steps in.

use ff_contract::ContractRegistry;
use ff_core::{EventLog, FireConfig, Tick};
use ff_grid::Forest;

/// Mutable view of the simulation handed to one agent's `step`.
///
/// Built by the tick loop for each agent in turn.  Borrows last for that one
/// step, so the next agent's context observes everything this one wrote.
pub struct StepContext<'a> {
    /// Current simulation tick.
    pub tick: Tick,

    pub config: &'a FireConfig,

    pub forest: &'a mut Forest,

    /// Shared by every drone (managers) and firefighter (bidders).
    pub contracts: &'a mut ContractRegistry,

    /// Append-only sink for this tick's events.
    pub log: &'a mut EventLog,
}

impl<'a> StepContext<'a> {
    #[inline]
    pub fn new(
        tick:      Tick,
        config:    &'a FireConfig,
        forest:    &'a mut Forest,
        contracts: &'a mut ContractRegistry,
        log:       &'a mut EventLog,
    ) -> Self {
        Self { tick, config, forest, contracts, log }
    }

    /// Grid dimension as a signed coordinate.
    #[inline]
    pub fn grid_size(&self) -> i32 {
        self.forest.size()
    }
}
