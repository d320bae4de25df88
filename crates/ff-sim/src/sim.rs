//! The `Sim` struct and its tick loop.

use ff_agent::{Drone, FieldAgent, Firefighter, StepContext};
use ff_contract::ContractRegistry;
use ff_core::{EventLog, FireConfig, SimClock, SimEvent, SimRng, Tick};
use ff_grid::{Forest, spread_and_burn};

use crate::{RunReport, SimObserver, TickSummary};

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// `Sim` owns the forest, the contract registry, and every agent, and drives
/// the tick loop:
///
/// 1. **Fire**: burning trees spread to Alive Moore neighbours and count
///    down their burn timers.
/// 2. **Firefighters**: each steps in spawn order.
/// 3. **Drones**: each steps in spawn order.
///
/// Steps 2 and 3 hand each agent a [`StepContext`] borrowing the live state,
/// so the registry an agent sees includes every write made earlier in the
/// same tick.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Run configuration, validated by the builder.
    pub config: FireConfig,

    /// Tracks the current tick against `config.steps`.
    pub clock: SimClock,

    pub forest: Forest,

    /// Every contract created during the run, including completed ones.
    pub contracts: ContractRegistry,

    pub firefighters: Vec<Firefighter>,
    pub drones:       Vec<Drone>,

    /// Setup, spawn placement, and fire spread.
    pub(crate) rng: SimRng,

    /// Events of the most recent tick.
    pub(crate) log: EventLog,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run until the tick budget is spent or, with `stop_when_extinguished`,
    /// until no tree is burning at a tick boundary.
    ///
    /// Calls observer hooks at every tick boundary and once at the end.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> RunReport {
        tracing::info!(steps = self.config.steps, seed = self.config.seed, "run started");
        while !self.clock.is_finished() {
            if self.config.stop_when_extinguished && !self.forest.any_burning() {
                tracing::info!(tick = %self.clock.current_tick, "fire out, stopping early");
                break;
            }
            self.observed_step(observer);
        }

        let report = self.report();
        tracing::info!(
            ticks = report.ticks,
            burned = report.burned_trees,
            contracts = report.contracts_created,
            completed = report.contracts_completed,
            "run finished"
        );
        observer.on_sim_end(&report);
        report
    }

    /// Run exactly `n` ticks from the current position (ignores the tick
    /// budget and `stop_when_extinguished`).
    ///
    /// Useful for tests and incremental stepping.  Does not call
    /// `on_sim_end`.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.observed_step(observer);
        }
    }

    /// Advance one tick with no observer.
    pub fn step(&mut self) -> TickSummary {
        let tick = self.clock.advance();
        self.log.clear();

        // ── Phase 1: fire ─────────────────────────────────────────────────
        let fire = spread_and_burn(
            &mut self.forest,
            self.config.prob_spread,
            self.config.tree_burn_time,
            &mut self.rng,
        );

        // ── Phases 2 + 3: agents ──────────────────────────────────────────
        //
        // Explicit field borrows so the borrow checker sees disjoint access.
        let config    = &self.config;
        let forest    = &mut self.forest;
        let contracts = &mut self.contracts;
        let log       = &mut self.log;

        for ff in self.firefighters.iter_mut() {
            ff.step(&mut StepContext::new(tick, config, forest, contracts, log));
        }
        for drone in self.drones.iter_mut() {
            drone.step(&mut StepContext::new(tick, config, forest, contracts, log));
        }

        let summary = TickSummary::collect(tick, &self.forest, &self.contracts, fire, self.log.len());
        tracing::debug!(
            %tick,
            burning = summary.burning,
            open = summary.open,
            assigned = summary.assigned,
            "tick done"
        );
        summary
    }

    fn observed_step<O: SimObserver>(&mut self, observer: &mut O) -> TickSummary {
        observer.on_tick_start(self.clock.current_tick + 1);
        let summary = self.step();
        observer.on_events(summary.tick, self.log.events());
        observer.on_tick_end(&summary);
        summary
    }

    // ── Read access ───────────────────────────────────────────────────────

    /// The last tick executed (`T0` before the first step).
    #[inline]
    pub fn current_tick(&self) -> Tick {
        self.clock.current_tick
    }

    /// Events produced by the most recent tick.
    pub fn events(&self) -> &[SimEvent] {
        self.log.events()
    }

    /// End-of-run aggregates for the current state.  May be called at any
    /// point; `run` calls it once at the end.
    pub fn report(&self) -> RunReport {
        RunReport::collect(
            self.config.seed,
            self.clock.current_tick.0,
            &self.forest,
            &self.contracts,
            self.firefighters.iter().map(|ff| (ff.id, ff.active_timesteps)),
        )
    }
}
