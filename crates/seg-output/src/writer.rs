//! The `OutputWriter` trait implemented by all backend writers.

use crate::{CellSnapshotRow, OutputResult, RoundSummaryRow};

/// Trait implemented by the CSV and SQLite writers.
///
/// All methods are infallible from the observer's perspective; errors are
/// stored internally and retrieved with
/// [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Write every cell of one grid snapshot.
    fn write_cells(&mut self, rows: &[CellSnapshotRow]) -> OutputResult<()>;

    /// Write one round summary row.
    fn write_round_summary(&mut self, row: &RoundSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent; safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
