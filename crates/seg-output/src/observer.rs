//! `SimOutputObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use seg_core::Round;
use seg_grid::SegregationGrid;
use seg_sim::{RoundReport, SimObserver};

use crate::row::{CellSnapshotRow, RoundSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes grid snapshots and round summaries to any
/// [`OutputWriter`] backend (CSV, SQLite, …).
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

    /// Flush and close the writer.
    ///
    /// `Sim::run` does this through `on_sim_end`.  Callers that advance the
    /// simulation with `Sim::run_rounds` or `Sim::step` must call it
    /// themselves once they are done.  Idempotent.
    pub fn finish(&mut self) -> OutputResult<()> {
        self.writer.finish()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
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

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_round_end(&mut self, report: &RoundReport) {
        let result = self.writer.write_round_summary(&RoundSummaryRow::from(report));
        self.store_err(result);
    }

    fn on_snapshot(&mut self, round: Round, grid: &SegregationGrid) {
        let rows: Vec<CellSnapshotRow> = grid
            .iter()
            .map(|(at, occ)| CellSnapshotRow::new(round, at, occ))
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_cells(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_round: Round) {
        let result = self.finish();
        self.store_err(result);
    }
}
