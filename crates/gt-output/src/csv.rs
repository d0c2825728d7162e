//! CSV trace backend.
//!
//! Creates two files in the configured output directory:
//! - `decisions.csv`
//! - `tick_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::TraceWriter;
use crate::{DecisionRow, OutputResult, TickSummaryRow};

pub const DECISION_HEADER: [&str; 10] = [
    "tick",
    "ghost",
    "edible",
    "chase",
    "phase_timer",
    "near_actor",
    "pills_low",
    "strategy",
    "direction",
    "target",
];

pub const SUMMARY_HEADER: [&str; 2] = ["tick", "moves"];

/// Writes a decision trace to two CSV files.
pub struct CsvWriter {
    decisions: Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open the two CSV files in it, and write the
    /// header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut decisions = Writer::from_path(dir.join("decisions.csv"))?;
        decisions.write_record(DECISION_HEADER)?;

        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record(SUMMARY_HEADER)?;

        Ok(Self { decisions, summaries, finished: false })
    }
}

impl TraceWriter for CsvWriter {
    fn write_decisions(&mut self, rows: &[DecisionRow]) -> OutputResult<()> {
        for row in rows {
            self.decisions.write_record(&[
                row.tick.to_string(),
                row.ghost.to_string(),
                (row.edible as u8).to_string(),
                (row.chase as u8).to_string(),
                row.phase_timer.to_string(),
                (row.near_actor as u8).to_string(),
                (row.pills_low as u8).to_string(),
                row.strategy.as_str().to_string(),
                row.direction.to_string(),
                row.target.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries
            .write_record(&[row.tick.to_string(), row.moves.to_string()])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.decisions.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
