//! `gt-output` — decision trace writers for the ghost decision engine.
//!
//! | Backend | Files created                              |
//! |---------|--------------------------------------------|
//! | CSV     | `decisions.csv`, `tick_summaries.csv`      |
//!
//! Writers implement [`TraceWriter`] and are driven by [`TraceObserver`],
//! which implements `gt_engine::EngineObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use gt_output::{CsvWriter, TraceObserver};
//!
//! let writer = CsvWriter::new(Path::new("./trace"))?;
//! let mut obs = TraceObserver::new(writer);
//! for view in frames {
//!     engine.tick_observed(&view, &mut obs)?;
//! }
//! obs.finish();
//! if let Some(e) = obs.take_error() { eprintln!("trace error: {e}"); }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::TraceObserver;
pub use row::{DecisionRow, TickSummaryRow};
pub use writer::TraceWriter;
