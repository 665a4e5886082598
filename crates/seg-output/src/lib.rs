//! `seg-output`: simulation output writers for the schelling_rs simulator.
//!
//! This is the boundary to visualisation: every grid snapshot is written as
//! one row per cell, so an external renderer can rebuild the image for any
//! round.  Two backends are provided:
//!
//! | Feature   | Backend     | Files created                                      |
//! |-----------|-------------|----------------------------------------------------|
//! | *(none)*  | CSV         | `cell_snapshots.csv`, `round_summaries.csv`        |
//! | `sqlite`  | SQLite      | `output.db`                                        |
//!
//! All backends implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `seg_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use seg_output::{CsvWriter, SimOutputObserver};
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

#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{CellSnapshotRow, RoundSummaryRow};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
