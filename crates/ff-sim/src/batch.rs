//! Independent replicate runs.
//!
//! Each replicate is a full run of the same configuration with a different
//! seed.  Replicates share nothing, so with the `parallel` feature they run
//! on Rayon's thread pool; results come back in `seeds` order either way.

use serde::Serialize;

use ff_core::FireConfig;

use crate::{NoopObserver, RunReport, SimBuilder, SimResult};

/// Run `config` once per seed and collect the reports.
///
/// Fails on the first replicate whose configuration does not validate.
/// Since only the seed varies, that is either all of them or none.
pub fn run_replicates(config: &FireConfig, seeds: &[u64]) -> SimResult<Vec<RunReport>> {
    let run_one = |seed: u64| -> SimResult<RunReport> {
        let mut sim = SimBuilder::new(FireConfig { seed, ..config.clone() }).build()?;
        Ok(sim.run(&mut NoopObserver))
    };

    #[cfg(not(feature = "parallel"))]
    {
        seeds.iter().map(|&seed| run_one(seed)).collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        seeds.par_iter().map(|&seed| run_one(seed)).collect()
    }
}

/// Means over a set of replicate reports.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BatchSummary {
    pub runs: usize,
    pub mean_burned_fraction: f64,
    /// Mean over the runs that created at least one contract.
    pub mean_completion_rate: Option<f64>,
    pub mean_ticks: f64,
}

impl BatchSummary {
    /// `None` for an empty batch.
    pub fn from_reports(reports: &[RunReport]) -> Option<Self> {
        if reports.is_empty() {
            return None;
        }
        let n = reports.len() as f64;
        let rates: Vec<f64> = reports.iter().filter_map(|r| r.completion_rate).collect();
        Some(Self {
            runs: reports.len(),
            mean_burned_fraction: reports.iter().map(|r| r.burned_fraction).sum::<f64>() / n,
            mean_completion_rate: (!rates.is_empty())
                .then(|| rates.iter().sum::<f64>() / rates.len() as f64),
            mean_ticks: reports.iter().map(|r| r.ticks as f64).sum::<f64>() / n,
        })
    }
}
