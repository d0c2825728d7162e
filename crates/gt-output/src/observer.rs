//! `TraceObserver<W>` — bridges `EngineObserver` to a `TraceWriter`.

use gt_behavior::{Decision, Strategy};
use gt_core::{AgentId, AttributeVector, Tick};
use gt_engine::EngineObserver;

use crate::row::{DecisionRow, TickSummaryRow};
use crate::writer::TraceWriter;
use crate::{OutputError, OutputResult};

/// An [`EngineObserver`] that records every decision to a [`TraceWriter`].
///
/// Rows are buffered per tick and written in one batch at tick end.  Errors
/// from the writer are stored internally because observer methods have no
/// return value; check with [`take_error`][Self::take_error].
pub struct TraceObserver<W: TraceWriter> {
    writer:     W,
    pending:    Vec<DecisionRow>,
    last_error: Option<OutputError>,
}

impl<W: TraceWriter> TraceObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, pending: Vec::new(), last_error: None }
    }

    /// Flush the writer.  Call once after the last tick.
    pub fn finish(&mut self) {
        let result = self.writer.finish();
        self.store_err(result);
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: TraceWriter> EngineObserver for TraceObserver<W> {
    fn on_decision(
        &mut self,
        tick:       Tick,
        _ghost:     AgentId,
        attributes: &AttributeVector,
        strategy:   Strategy,
        decision:   Decision,
    ) {
        self.pending.push(DecisionRow::new(tick, attributes, strategy, decision));
    }

    fn on_tick_end(&mut self, tick: Tick, moves: usize) {
        let result = self.writer.write_decisions(&self.pending);
        self.store_err(result);
        self.pending.clear();

        let result = self.writer.write_tick_summary(&TickSummaryRow { tick: tick.0, moves: moves as u64 });
        self.store_err(result);
    }
}
