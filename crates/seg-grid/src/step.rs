//! Relocation rounds.
//!
//! Each round reads from a [`GridSnapshot`] taken before any move and writes
//! to the live grid.  Satisfaction is therefore judged against the layout at
//! the start of the round, whatever moves happen earlier in the same round.
//! Destinations, on the other hand, come from the *live* empty set: a cell
//! vacated earlier in the round may receive an occupant later in it.

use std::ops::AddAssign;

use seg_core::{Coord, Occupant, SimRng};

use crate::SegregationGrid;
use crate::neighbourhood::{self, Tally};

/// Immutable copy of the grid and occupied list at the start of a round.
#[derive(Clone, Debug)]
pub struct GridSnapshot {
    pub width:    u32,
    pub height:   u32,
    pub cells:    Vec<Occupant>,
    pub occupied: Vec<Coord>,
}

impl GridSnapshot {
    #[inline]
    pub fn tally(&self, c: Coord) -> Tally {
        neighbourhood::tally(&self.cells, self.width, self.height, c)
    }

    #[inline]
    pub fn is_unsatisfied(&self, c: Coord, threshold: f64) -> bool {
        self.tally(c).is_unsatisfied(threshold)
    }
}

/// Counters for one or more rounds.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct StepStats {
    /// Occupied cells checked (one per occupant per round).
    pub evaluated:   usize,
    /// Cells whose ratio fell strictly below the threshold.
    pub unsatisfied: usize,
    /// Unsatisfied cells that moved.
    pub relocated:   usize,
    /// Unsatisfied cells that stayed because no empty cell existed.
    pub skipped:     usize,
}

impl AddAssign for StepStats {
    fn add_assign(&mut self, rhs: StepStats) {
        self.evaluated   += rhs.evaluated;
        self.unsatisfied += rhs.unsatisfied;
        self.relocated   += rhs.relocated;
        self.skipped     += rhs.skipped;
    }
}

impl SegregationGrid {
    /// Copy the current occupants and occupied-list order.
    pub fn snapshot(&self) -> GridSnapshot {
        GridSnapshot {
            width:    self.width(),
            height:   self.height(),
            cells:    self.cells().to_vec(),
            occupied: self.occupied_cells().to_vec(),
        }
    }

    /// Run one relocation round.
    ///
    /// Every cell occupied at the start of the round is evaluated, in the
    /// registry order captured by the snapshot.  An unsatisfied occupant
    /// moves to a uniformly chosen cell of the live empty set; if that set is
    /// empty the move is skipped.
    pub fn step(&mut self, rng: &mut SimRng) -> StepStats {
        let snapshot = self.snapshot();
        let threshold = self.threshold();
        let mut stats = StepStats::default();

        for &origin in &snapshot.occupied {
            stats.evaluated += 1;
            if !snapshot.is_unsatisfied(origin, threshold) {
                continue;
            }
            stats.unsatisfied += 1;

            let Some(dest) = self.choose_empty(rng) else {
                stats.skipped += 1;
                continue;
            };
            // Only the cell's own turn vacates it, so `origin` still holds
            // its round-start occupant here.
            self.move_unchecked(origin, dest);
            stats.relocated += 1;
        }

        stats
    }

    /// Run `rounds` sequential rounds, returning the summed counters.
    pub fn simulate(&mut self, rounds: u64, rng: &mut SimRng) -> StepStats {
        let mut total = StepStats::default();
        for _ in 0..rounds {
            total += self.step(rng);
        }
        total
    }
}
