//! `seg-core`: foundational types for the `schelling_rs` simulator.
//!
//! This crate is a dependency of every other `seg-*` crate.  It has no
//! `seg-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`coord`]       | `Coord`, Moore-neighbourhood offsets                  |
//! | [`occupant`]    | `Occupant` enum (`Empty`, `TypeA`, `TypeB`)           |
//! | [`round`]       | `Round`, `SimConfig`                                  |
//! | [`rng`]         | `SimRng` (seeded, single-threaded)                    |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod coord;
pub mod error;
pub mod occupant;
pub mod rng;
pub mod round;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use coord::{Coord, NEIGHBOUR_OFFSETS};
pub use error::{CoreError, CoreResult};
pub use occupant::Occupant;
pub use rng::SimRng;
pub use round::{Round, SimConfig};
