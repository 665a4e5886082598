//! Occupant state of a grid cell.
//!
//! Exactly two non-empty categories are supported.

/// What currently lives in a cell.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Occupant {
    /// Vacant cell (default state).
    #[default]
    Empty,
    TypeA,
    TypeB,
}

impl Occupant {
    /// Initial type for an occupied cell: `TypeB` on even `row + col`,
    /// `TypeA` on odd.
    #[inline]
    pub fn from_parity(parity: u32) -> Occupant {
        if parity % 2 == 0 { Occupant::TypeB } else { Occupant::TypeA }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        matches!(self, Occupant::Empty)
    }

    #[inline]
    pub fn is_occupied(self) -> bool {
        !self.is_empty()
    }

    /// Numeric code used in output columns: 0 = empty, 1 = A, 2 = B.
    ///
    /// Occupants start on the even `row + col` squares as `TypeB`, so the
    /// initial checkerboard puts code 2 on even squares and code 1 on odd
    /// ones.  A renderer keyed on "even squares are code 1" shows the two
    /// types with swapped colours.
    pub fn code(self) -> u8 {
        match self {
            Occupant::Empty => 0,
            Occupant::TypeA => 1,
            Occupant::TypeB => 2,
        }
    }

    /// Human-readable label, useful for CSV column values.
    pub fn as_str(self) -> &'static str {
        match self {
            Occupant::Empty => "empty",
            Occupant::TypeA => "a",
            Occupant::TypeB => "b",
        }
    }
}

impl std::fmt::Display for Occupant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}
