use seg_core::Coord;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GridError {
    #[error("grid dimensions must be positive and fit a u32 cell index, got {width}x{height}")]
    InvalidDimensions {
        width:  u32,
        height: u32,
    },

    #[error("{name} must be within [0, 1], got {value}")]
    InvalidRatio {
        name:  &'static str,
        value: f64,
    },

    #[error("layout has {got} cells but the grid needs {expected}")]
    LayoutMismatch {
        expected: usize,
        got:      usize,
    },

    #[error("cell {0} is outside the grid")]
    OutOfBounds(Coord),

    #[error("cell {0} has no occupant to move")]
    NotOccupied(Coord),

    #[error("cell {0} is not empty")]
    NotEmpty(Coord),

    #[error("bookkeeping invariant violated: {0}")]
    Invariant(String),
}

pub type GridResult<T> = Result<T, GridError>;
