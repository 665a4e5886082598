//! Grid coordinate type and Moore-neighbourhood helpers.

/// A cell position on the grid, 0-indexed.
///
/// `row ∈ [0, height)`, `col ∈ [0, width)`.  Ordering is row-major, so
/// sorting a list of coordinates gives the same order as walking the grid.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: u32,
    pub col: u32,
}

/// The eight `(d_row, d_col)` offsets of the Moore neighbourhood, centre
/// excluded.
pub const NEIGHBOUR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

impl Coord {
    #[inline]
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// `true` if the coordinate lies inside a `width × height` grid.
    #[inline]
    pub fn in_bounds(self, width: u32, height: u32) -> bool {
        self.row < height && self.col < width
    }

    /// Parity of `row + col`: `0` on the "even" squares of a checkerboard.
    #[inline]
    pub fn parity(self) -> u32 {
        (self.row + self.col) % 2
    }

    /// Apply an offset, returning `None` if the result leaves the grid.
    ///
    /// Boundaries clip: there is no wraparound.
    #[inline]
    pub fn offset(self, d_row: i64, d_col: i64, width: u32, height: u32) -> Option<Coord> {
        let row = self.row as i64 + d_row;
        let col = self.col as i64 + d_col;
        if row < 0 || col < 0 || row >= height as i64 || col >= width as i64 {
            return None;
        }
        Some(Coord::new(row as u32, col as u32))
    }

    /// In-bounds Moore neighbours.  Corners yield 3, edges 5, interior 8.
    pub fn neighbours(self, width: u32, height: u32) -> impl Iterator<Item = Coord> {
        NEIGHBOUR_OFFSETS
            .into_iter()
            .filter_map(move |(dr, dc)| self.offset(dr, dc, width, height))
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(u32, u32)> for Coord {
    #[inline]
    fn from((row, col): (u32, u32)) -> Self {
        Coord::new(row, col)
    }
}
