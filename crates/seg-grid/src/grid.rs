//! `SegregationGrid`: occupant grid plus the empty/occupied registries.

use seg_core::{Coord, Occupant, SimConfig, SimRng};

use crate::neighbourhood::{self, Tally, row_major};
use crate::{CellSet, GridError, GridResult};

/// The grid state of one Schelling simulation.
///
/// Holds a row-major occupant vector (a total mapping: one entry per
/// coordinate) and two [`CellSet`]s partitioning the coordinate space into
/// empty and occupied cells.  All three change together in
/// [`relocate`](Self::relocate); nothing else mutates them.
#[derive(Clone, Debug)]
pub struct SegregationGrid {
    width:     u32,
    height:    u32,
    threshold: f64,
    cells:     Vec<Occupant>,
    empty:     CellSet,
    occupied:  CellSet,
}

impl SegregationGrid {
    // ── Construction ──────────────────────────────────────────────────────

    /// Randomly initialise a `width × height` grid.
    ///
    /// All coordinates are shuffled with `rng`; the first
    /// `floor(empty_ratio × width × height)` become empty and the rest are
    /// occupied, in shuffled order.  Occupied cells get their type from the
    /// parity of `row + col` ([`Occupant::from_parity`]), so only the choice
    /// of *which* cells are empty is random.
    ///
    /// An empty ratio that floors to zero cells is valid: nothing can ever
    /// relocate.
    pub fn new(
        width:                u32,
        height:               u32,
        empty_ratio:          f64,
        similarity_threshold: f64,
        rng:                  &mut SimRng,
    ) -> GridResult<Self> {
        validate(width, height, similarity_threshold)?;
        check_unit("empty_ratio", empty_ratio)?;

        let total = width as usize * height as usize;
        let mut coords: Vec<Coord> = (0..height)
            .flat_map(|row| (0..width).map(move |col| Coord::new(row, col)))
            .collect();
        rng.shuffle(&mut coords);

        let empty_count = ((empty_ratio * total as f64).floor() as usize).min(total);
        let (empty_coords, occupied_coords) = coords.split_at(empty_count);

        let mut cells = vec![Occupant::Empty; total];
        for &c in occupied_coords {
            cells[row_major(width, c)] = Occupant::from_parity(c.parity());
        }

        Ok(Self {
            width,
            height,
            threshold: similarity_threshold,
            cells,
            empty:     CellSet::from_coords(width, height, empty_coords.iter().copied()),
            occupied:  CellSet::from_coords(width, height, occupied_coords.iter().copied()),
        })
    }

    /// Initialise from a [`SimConfig`].
    pub fn from_config(config: &SimConfig, rng: &mut SimRng) -> GridResult<Self> {
        Self::new(
            config.width,
            config.height,
            config.empty_ratio,
            config.similarity_threshold,
            rng,
        )
    }

    /// Build a grid from an explicit row-major occupant layout.
    ///
    /// Registries are filled in row-major order.  Used to restore a recorded
    /// state or to set up hand-built scenarios.
    pub fn from_layout(
        width:                u32,
        height:               u32,
        similarity_threshold: f64,
        cells:                Vec<Occupant>,
    ) -> GridResult<Self> {
        validate(width, height, similarity_threshold)?;
        let expected = width as usize * height as usize;
        if cells.len() != expected {
            return Err(GridError::LayoutMismatch { expected, got: cells.len() });
        }

        let mut empty = CellSet::new(width, height);
        let mut occupied = CellSet::new(width, height);
        for (i, occ) in cells.iter().enumerate() {
            let c = coord_at(width, i);
            if occ.is_empty() {
                empty.insert(c);
            } else {
                occupied.insert(c);
            }
        }

        Ok(Self { width, height, threshold: similarity_threshold, cells, empty, occupied })
    }

    // ── Read access ───────────────────────────────────────────────────────

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        c.in_bounds(self.width, self.height)
    }

    /// Occupant at `c`, or `None` outside the grid.
    #[inline]
    pub fn get(&self, c: Coord) -> Option<Occupant> {
        self.contains(c).then(|| self.cells[row_major(self.width, c)])
    }

    /// Row-major occupant slice.
    #[inline]
    pub fn cells(&self) -> &[Occupant] {
        &self.cells
    }

    /// Every `(coordinate, occupant)` pair in row-major order, i.e. the full
    /// state handed to a visualiser.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Occupant)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &occ)| (coord_at(self.width, i), occ))
    }

    /// Empty coordinates in registry order.
    #[inline]
    pub fn empty_cells(&self) -> &[Coord] {
        self.empty.as_slice()
    }

    /// Occupied coordinates in registry order (the round iteration order).
    #[inline]
    pub fn occupied_cells(&self) -> &[Coord] {
        self.occupied.as_slice()
    }

    #[inline]
    pub fn empty_count(&self) -> usize {
        self.empty.len()
    }

    #[inline]
    pub fn occupied_count(&self) -> usize {
        self.occupied.len()
    }

    #[inline]
    pub fn is_empty_cell(&self, c: Coord) -> bool {
        self.empty.contains(c)
    }

    #[inline]
    pub fn is_occupied_cell(&self, c: Coord) -> bool {
        self.occupied.contains(c)
    }

    /// Number of cells holding `occ`.
    pub fn count(&self, occ: Occupant) -> usize {
        self.cells.iter().filter(|&&o| o == occ).count()
    }

    // ── Satisfaction and similarity ───────────────────────────────────────

    /// Similar/different non-empty neighbours of `c` in the current state.
    #[inline]
    pub fn tally(&self, c: Coord) -> Tally {
        neighbourhood::tally(&self.cells, self.width, self.height, c)
    }

    /// `true` if the occupant at `c` has a similar-neighbour ratio strictly
    /// below the threshold.
    ///
    /// Cells with no non-empty neighbours are satisfied.  Empty and
    /// out-of-range cells have nobody to be dissatisfied and return `false`.
    #[inline]
    pub fn is_unsatisfied(&self, c: Coord) -> bool {
        self.tally(c).is_unsatisfied(self.threshold)
    }

    /// Number of occupied cells currently unsatisfied.
    pub fn unsatisfied_count(&self) -> usize {
        self.occupied.iter().filter(|&c| self.is_unsatisfied(c)).count()
    }

    /// Mean similar-neighbour ratio over all occupied cells.
    ///
    /// An occupied cell with no non-empty neighbours contributes 1.0.  With
    /// no occupied cells at all the mean is undefined; this returns 1.0
    /// (an empty population has nobody dissatisfied).
    pub fn similarity(&self) -> f64 {
        if self.occupied.is_empty() {
            return 1.0;
        }
        let sum: f64 = self.occupied.iter().map(|c| self.tally(c).ratio_or_one()).sum();
        sum / self.occupied.len() as f64
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Move the occupant at `from` into the empty cell `to`.
    ///
    /// Updates the grid and both registries together: `to` leaves the empty
    /// set and joins the occupied set, `from` does the reverse.
    pub fn relocate(&mut self, from: Coord, to: Coord) -> GridResult<()> {
        for c in [from, to] {
            if !self.contains(c) {
                return Err(GridError::OutOfBounds(c));
            }
        }
        if !self.occupied.contains(from) {
            return Err(GridError::NotOccupied(from));
        }
        if !self.empty.contains(to) {
            return Err(GridError::NotEmpty(to));
        }
        self.move_unchecked(from, to);
        Ok(())
    }

    /// [`relocate`](Self::relocate) without the checks.  Callers guarantee
    /// `from` is occupied and `to` is empty.
    pub(crate) fn move_unchecked(&mut self, from: Coord, to: Coord) {
        let (fi, ti) = (row_major(self.width, from), row_major(self.width, to));
        debug_assert!(self.cells[fi].is_occupied() && self.cells[ti].is_empty());

        self.cells[ti] = self.cells[fi];
        self.cells[fi] = Occupant::Empty;

        self.empty.remove(to);
        self.occupied.insert(to);
        self.occupied.remove(from);
        self.empty.insert(from);
    }

    pub(crate) fn choose_empty(&self, rng: &mut SimRng) -> Option<Coord> {
        self.empty.choose(rng)
    }

    // ── Invariants ────────────────────────────────────────────────────────

    /// Verify the partition invariant: the two sets are disjoint, cover the
    /// whole rectangle, and agree with the occupant of every cell.
    pub fn check_invariants(&self) -> GridResult<()> {
        let total = self.width as usize * self.height as usize;
        if self.cells.len() != total {
            return Err(GridError::Invariant(format!(
                "grid holds {} entries for {total} cells",
                self.cells.len()
            )));
        }
        if self.empty.len() + self.occupied.len() != total {
            return Err(GridError::Invariant(format!(
                "{} empty + {} occupied != {total} cells",
                self.empty.len(),
                self.occupied.len()
            )));
        }
        if !self.empty.is_consistent() || !self.occupied.is_consistent() {
            return Err(GridError::Invariant("registry slot table out of sync".to_owned()));
        }
        for (c, occ) in self.iter() {
            let (in_empty, in_occupied) = (self.empty.contains(c), self.occupied.contains(c));
            if in_empty == in_occupied {
                return Err(GridError::Invariant(format!(
                    "cell {c} is in {} registries",
                    if in_empty { "both" } else { "neither of the" }
                )));
            }
            if in_empty != occ.is_empty() {
                return Err(GridError::Invariant(format!(
                    "cell {c} holds {occ} but is registered as {}",
                    if in_empty { "empty" } else { "occupied" }
                )));
            }
        }
        Ok(())
    }
}

#[inline]
fn coord_at(width: u32, i: usize) -> Coord {
    Coord::new((i / width as usize) as u32, (i % width as usize) as u32)
}

fn validate(width: u32, height: u32, threshold: f64) -> GridResult<()> {
    if width == 0 || height == 0 || width as u64 * height as u64 > u32::MAX as u64 {
        return Err(GridError::InvalidDimensions { width, height });
    }
    check_unit("similarity_threshold", threshold)
}

fn check_unit(name: &'static str, value: f64) -> GridResult<()> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(GridError::InvalidRatio { name, value })
    }
}
