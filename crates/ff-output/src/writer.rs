//! The `OutputWriter` trait implemented by output backends.

use ff_sim::TickSummary;

use crate::{ContractRow, DetectionRow, OutputResult, PositionRow, SplashRow};

/// Trait implemented by output backends.
///
/// All methods are infallible from the observer's perspective; errors are
/// stored internally and retrieved with
/// [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    fn write_positions(&mut self, rows: &[PositionRow]) -> OutputResult<()>;

    fn write_contract_events(&mut self, rows: &[ContractRow]) -> OutputResult<()>;

    /// Drone and firefighter detections; the backend routes by agent type.
    fn write_detections(&mut self, rows: &[DetectionRow]) -> OutputResult<()>;

    fn write_splashes(&mut self, rows: &[SplashRow]) -> OutputResult<()>;

    /// Write one tick summary row.
    fn write_tick_summary(&mut self, summary: &TickSummary) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
