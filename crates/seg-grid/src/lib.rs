//! `seg-grid`: the Schelling segregation grid.
//!
//! # Crate layout
//!
//! | Module            | Contents                                                    |
//! |-------------------|-------------------------------------------------------------|
//! | [`cell_set`]      | `CellSet`, an O(1) coordinate set with uniform choice      |
//! | [`neighbourhood`] | `Tally`, the clipped Moore-neighbourhood similarity count   |
//! | [`grid`]          | `SegregationGrid`, occupants + empty/occupied registries  |
//! | [`step`]          | Snapshot-then-mutate relocation rounds, `StepStats`         |
//!
//! # Bookkeeping invariant
//!
//! The empty and occupied sets partition the full `height × width`
//! rectangle, and a coordinate is in the empty set iff its grid entry is
//! [`Occupant::Empty`][seg_core::Occupant::Empty].  Neither set is exposed
//! mutably: every mutation goes through [`SegregationGrid::relocate`] (or the
//! round step built on it), which updates grid and both sets together.
//! [`SegregationGrid::check_invariants`] verifies the partition.

pub mod cell_set;
pub mod error;
pub mod grid;
pub mod neighbourhood;
pub mod step;


pub use cell_set::CellSet;
pub use error::{GridError, GridResult};
pub use grid::SegregationGrid;
pub use neighbourhood::Tally;
pub use step::{GridSnapshot, StepStats};
