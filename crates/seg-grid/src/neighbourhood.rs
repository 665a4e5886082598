//! Similarity counting over the clipped Moore neighbourhood.
//!
//! A neighbour contributes only when it lies inside the grid and is
//! non-empty.  Both the live grid and a round-start snapshot count through
//! [`tally`], so the rule has a single definition.

use seg_core::{Coord, Occupant};

/// Counts of a cell's non-empty neighbours by type relative to the cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    pub similar:   u32,
    pub different: u32,
}

impl Tally {
    #[inline]
    pub fn total(self) -> u32 {
        self.similar + self.different
    }

    /// `similar / (similar + different)`, or `None` with no non-empty
    /// neighbours.
    #[inline]
    pub fn ratio(self) -> Option<f64> {
        match self.total() {
            0 => None,
            n => Some(self.similar as f64 / n as f64),
        }
    }

    /// Ratio used by the similarity metric: an isolated cell counts as 1.0.
    #[inline]
    pub fn ratio_or_one(self) -> f64 {
        self.ratio().unwrap_or(1.0)
    }

    /// Strictly below `threshold`.  No neighbours means satisfied.
    #[inline]
    pub fn is_unsatisfied(self, threshold: f64) -> bool {
        self.ratio().is_some_and(|r| r < threshold)
    }
}

/// Count similar/different non-empty neighbours of `at` in a row-major
/// occupant slice of a `width × height` grid.
///
/// An empty (or out-of-range) `at` yields an all-zero tally.
pub fn tally(cells: &[Occupant], width: u32, height: u32, at: Coord) -> Tally {
    if !at.in_bounds(width, height) {
        return Tally::default();
    }
    let own = cells[row_major(width, at)];
    if own.is_empty() {
        return Tally::default();
    }

    let mut t = Tally::default();
    for n in at.neighbours(width, height) {
        match cells[row_major(width, n)] {
            Occupant::Empty => {}
            other if other == own => t.similar += 1,
            _ => t.different += 1,
        }
    }
    t
}

#[inline]
pub(crate) fn row_major(width: u32, c: Coord) -> usize {
    c.row as usize * width as usize + c.col as usize
}
