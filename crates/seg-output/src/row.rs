//! Plain data row types written by output backends.

use seg_core::{Coord, Occupant, Round};
use seg_sim::RoundReport;

/// One cell of a grid snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellSnapshotRow {
    /// Completed rounds at snapshot time; 0 is the initial layout.
    pub round:    u64,
    pub row:      u32,
    pub col:      u32,
    /// [`Occupant::code`]: 0 = empty, 1 = type A, 2 = type B.
    pub occupant: u8,
}

impl CellSnapshotRow {
    pub fn new(round: Round, at: Coord, occupant: Occupant) -> Self {
        Self {
            round:    round.0,
            row:      at.row,
            col:      at.col,
            occupant: occupant.code(),
        }
    }

    /// Snapshot label ("initial", "simulate 0", …).
    pub fn title(&self) -> String {
        Round(self.round).title()
    }
}

/// Counters and similarity for one completed round.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundSummaryRow {
    pub round:       u64,
    pub evaluated:   u64,
    pub unsatisfied: u64,
    pub relocated:   u64,
    pub skipped:     u64,
    pub similarity:  f64,
}

impl From<&RoundReport> for RoundSummaryRow {
    fn from(r: &RoundReport) -> Self {
        Self {
            round:       r.round.0,
            evaluated:   r.stats.evaluated as u64,
            unsatisfied: r.stats.unsatisfied as u64,
            relocated:   r.stats.relocated as u64,
            skipped:     r.stats.skipped as u64,
            similarity:  r.similarity,
        }
    }
}
