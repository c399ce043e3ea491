//! `cg-output`: match output writers for the cogs collection agent.
//!
//! | Backend | Files created                                                       |
//! |---------|---------------------------------------------------------------------|
//! | CSV     | `reward_events.csv`, `tick_summaries.csv`, `agent_snapshots.csv`    |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `cg_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use cg_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output")).unwrap();
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs).unwrap();
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{AgentSnapshotRow, RewardEventRow, TickSummaryRow};
pub use writer::OutputWriter;
