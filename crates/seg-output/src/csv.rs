//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `cell_snapshots.csv`
//! - `round_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{CellSnapshotRow, OutputResult, RoundSummaryRow};

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    cells:     Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut cells = Writer::from_path(dir.join("cell_snapshots.csv"))?;
        cells.write_record(["round", "title", "row", "col", "occupant"])?;

        let mut summaries = Writer::from_path(dir.join("round_summaries.csv"))?;
        summaries.write_record([
            "round", "evaluated", "unsatisfied", "relocated", "skipped", "similarity",
        ])?;

        Ok(Self {
            cells,
            summaries,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_cells(&mut self, rows: &[CellSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.cells.write_record(&[
                row.round.to_string(),
                row.title(),
                row.row.to_string(),
                row.col.to_string(),
                row.occupant.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_round_summary(&mut self, row: &RoundSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.round.to_string(),
            row.evaluated.to_string(),
            row.unsatisfied.to_string(),
            row.relocated.to_string(),
            row.skipped.to_string(),
            format!("{:.6}", row.similarity),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.cells.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
