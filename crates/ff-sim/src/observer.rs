//! Simulation observer trait for progress reporting and data collection.

use ff_core::{SimEvent, Tick};

use crate::{RunReport, TickSummary};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, summary: &TickSummary) {
///         if summary.tick.0 % self.interval == 0 {
///             println!("{}: {} burning", summary.tick, summary.burning);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before the fire moves.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called once per tick with every event the agents produced, in the
    /// order they were produced.
    ///
    /// The slice is only valid for this call; the log is cleared at the
    /// start of the next tick.
    fn on_events(&mut self, _tick: Tick, _events: &[SimEvent]) {}

    /// Called at the end of each tick.
    fn on_tick_end(&mut self, _summary: &TickSummary) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _report: &RunReport) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
