//! `SimOutputObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use ff_core::{SimEvent, Tick};
use ff_sim::{RunReport, SimObserver, TickSummary};

use crate::row::EventRows;
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes every tick's events and summary to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                tracing::warn!(error = %e, "output write failed");
                self.last_error = Some(e);
            }
        }
    }

    fn write_rows(&mut self, rows: &EventRows) -> OutputResult<()> {
        if !rows.positions.is_empty() {
            self.writer.write_positions(&rows.positions)?;
        }
        if !rows.contracts.is_empty() {
            self.writer.write_contract_events(&rows.contracts)?;
        }
        if !rows.detections.is_empty() {
            self.writer.write_detections(&rows.detections)?;
        }
        if !rows.splashes.is_empty() {
            self.writer.write_splashes(&rows.splashes)?;
        }
        Ok(())
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_events(&mut self, _tick: Tick, events: &[SimEvent]) {
        let rows = EventRows::split(events);
        if rows.is_empty() {
            return;
        }
        let result = self.write_rows(&rows);
        self.store_err(result);
    }

    fn on_tick_end(&mut self, summary: &TickSummary) {
        let result = self.writer.write_tick_summary(summary);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _report: &RunReport) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
