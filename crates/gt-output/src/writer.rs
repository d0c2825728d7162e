//! The `TraceWriter` trait implemented by backend writers.

use crate::{DecisionRow, OutputResult, TickSummaryRow};

/// Trait implemented by trace backends.
///
/// All methods are infallible from the observer's perspective: errors are
/// stored internally and retrieved with [`TraceObserver::take_error`].
///
/// [`TraceObserver::take_error`]: crate::TraceObserver::take_error
pub trait TraceWriter {
    /// Write one tick's decisions, in ascending ghost order.
    fn write_decisions(&mut self, rows: &[DecisionRow]) -> OutputResult<()>;

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
