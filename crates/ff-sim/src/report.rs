//! Per-tick summaries and the end-of-run report.
//!
//! Both are pure aggregate reads of the final state; building them never
//! mutates the simulation.

use std::fmt;

use serde::Serialize;

use ff_contract::{ContractRegistry, ContractStatus};
use ff_core::{FirefighterId, Tick};
use ff_grid::{FireStep, Forest, TreeState};

// ── TickSummary ───────────────────────────────────────────────────────────────

/// Forest and contract counts at the end of one tick.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TickSummary {
    pub tick:       Tick,
    pub alive:      usize,
    pub burning:    usize,
    pub burned:     usize,
    /// Trees the fire reached this tick.
    pub ignited:    usize,
    /// Trees whose burn timer ran out this tick.
    pub burned_out: usize,
    pub open:       usize,
    pub assigned:   usize,
    pub complete:   usize,
    /// Events the agents produced this tick.
    pub events:     usize,
}

impl TickSummary {
    pub(crate) fn collect(
        tick:      Tick,
        forest:    &Forest,
        contracts: &ContractRegistry,
        fire:      FireStep,
        events:    usize,
    ) -> Self {
        let stats = contracts.stats();
        Self {
            tick,
            alive:      forest.count(TreeState::Alive),
            burning:    forest.count(TreeState::Burning),
            burned:     forest.count(TreeState::Burned),
            ignited:    fire.ignited,
            burned_out: fire.burned_out,
            open:       stats.open,
            assigned:   stats.assigned,
            complete:   stats.complete,
            events,
        }
    }
}

// ── RunReport ─────────────────────────────────────────────────────────────────

/// Ticks a firefighter spent neither working an assignment nor fighting a
/// fire it could see.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct IdleRecord {
    pub firefighter: FirefighterId,
    pub idle_timesteps: u64,
}

/// End-of-run aggregates.
///
/// Averages are `None` when there is nothing to average (no contract was
/// created, none completed, …).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RunReport {
    pub seed:  u64,
    /// Ticks actually run.
    pub ticks: u64,

    pub trees:        usize,
    pub burned_trees: usize,
    /// Burned trees / planted trees, in `[0, 1]`.
    pub burned_fraction: f64,
    /// Planted trees / grid cells.
    pub tree_density: f64,

    pub contracts_created:   usize,
    pub contracts_completed: usize,
    pub completion_rate:     Option<f64>,

    pub avg_team_size:    Option<f64>,
    pub avg_cluster_size: Option<f64>,
    /// Mean ticks from assignment to completion over completed contracts.
    pub avg_time_to_extinguish: Option<f64>,

    /// One record per firefighter, in spawn order.
    pub idle: Vec<IdleRecord>,
}

impl RunReport {
    pub(crate) fn collect(
        seed:      u64,
        ticks:     u64,
        forest:    &Forest,
        contracts: &ContractRegistry,
        active:    impl Iterator<Item = (FirefighterId, u64)>,
    ) -> Self {
        let team_sizes: Vec<f64> = contracts.iter().map(|c| c.team_size as f64).collect();
        let cluster_sizes: Vec<f64> = contracts.iter().map(|c| c.cluster.len() as f64).collect();
        let extinguish_times: Vec<f64> = contracts
            .by_status(ContractStatus::Complete)
            .filter_map(|c| c.time_to_extinguish())
            .map(|t| t as f64)
            .collect();

        let stats = contracts.stats();
        Self {
            seed,
            ticks,
            trees:                  forest.tree_count(),
            burned_trees:           forest.count(TreeState::Burned),
            burned_fraction:        forest.burned_fraction(),
            tree_density:           forest.density(),
            contracts_created:      stats.total(),
            contracts_completed:    stats.complete,
            completion_rate:        contracts.completion_rate(),
            avg_team_size:          mean(&team_sizes),
            avg_cluster_size:       mean(&cluster_sizes),
            avg_time_to_extinguish: mean(&extinguish_times),
            idle: active
                .map(|(firefighter, active)| IdleRecord {
                    firefighter,
                    idle_timesteps: ticks.saturating_sub(active),
                })
                .collect(),
        }
    }

    /// Total idle ticks over all firefighters.
    pub fn total_idle(&self) -> u64 {
        self.idle.iter().map(|r| r.idle_timesteps).sum()
    }
}

fn mean(values: &[f64]) -> Option<f64> {
    (!values.is_empty()).then(|| values.iter().sum::<f64>() / values.len() as f64)
}

/// Format an optional statistic, `n/a` when absent.
struct Opt(Option<f64>, usize);

impl fmt::Display for Opt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(v) => write!(f, "{v:.*}", self.1),
            None => f.write_str("n/a"),
        }
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ticks run:              {}", self.ticks)?;
        writeln!(
            f,
            "burned trees:           {}/{} ({:.2}%)",
            self.burned_trees,
            self.trees,
            self.burned_fraction * 100.0
        )?;
        writeln!(f, "tree density:           {:.2}", self.tree_density)?;
        writeln!(
            f,
            "contracts completed:    {}/{} ({})",
            self.contracts_completed,
            self.contracts_created,
            Opt(self.completion_rate.map(|r| r * 100.0), 2),
        )?;
        writeln!(f, "avg team size:          {}", Opt(self.avg_team_size, 2))?;
        writeln!(f, "avg cluster size:       {}", Opt(self.avg_cluster_size, 2))?;
        writeln!(f, "avg time to extinguish: {} ticks", Opt(self.avg_time_to_extinguish, 2))?;
        write!(f, "total idle timesteps:   {}", self.total_idle())
    }
}
