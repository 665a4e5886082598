//! Round counter and top-level simulation configuration.
//!
//! # Design
//!
//! Time is a monotonically increasing `Round` counter.  `Round(0)` is the
//! freshly initialised grid; `Round(n)` is the state after `n` completed
//! relocation rounds.  Using an integer counter keeps snapshot scheduling
//! exact and comparisons O(1).

use std::fmt;

use crate::{CoreError, CoreResult};

// ── Round ─────────────────────────────────────────────────────────────────────

/// An absolute round counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Round(pub u64);

impl Round {
    pub const ZERO: Round = Round(0);

    /// The round after `self`.
    #[inline]
    pub fn next(self) -> Round {
        Round(self.0 + 1)
    }

    /// Label for a snapshot of the grid at this round.
    ///
    /// `"initial"` for the starting layout, then `"simulate 0"`,
    /// `"simulate 1"`, … for the state after each completed round.
    pub fn title(self) -> String {
        match self.0 {
            0 => "initial".to_owned(),
            n => format!("simulate {}", n - 1),
        }
    }
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}", self.0)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Typically built in code or loaded from a JSON file by the application
/// crate (with the `serde` feature) and passed to the simulation builder.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Grid width (number of columns).  Must be ≥ 1.
    pub width: u32,

    /// Grid height (number of rows).  Must be ≥ 1.
    pub height: u32,

    /// Fraction of cells left empty at initialisation, in `[0, 1]`.
    /// The empty count is `floor(empty_ratio * width * height)`.
    pub empty_ratio: f64,

    /// A cell is unsatisfied when its similar-neighbour fraction is strictly
    /// below this value.  In `[0, 1]`.
    pub similarity_threshold: f64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Rounds executed by `Sim::run`.
    pub total_rounds: u64,

    /// Emit a grid snapshot every N rounds.  0 disables snapshots entirely;
    /// 1 snapshots the initial state and every round.
    pub snapshot_interval_rounds: u64,
}

impl Default for SimConfig {
    /// The reference run: 50 × 50 grid, 10 % empty, threshold 0.7, 20 rounds.
    fn default() -> Self {
        Self {
            width:                    50,
            height:                   50,
            empty_ratio:              0.1,
            similarity_threshold:     0.7,
            seed:                     42,
            total_rounds:             20,
            snapshot_interval_rounds: 1,
        }
    }
}

impl SimConfig {
    /// The round at which `Sim::run` stops (exclusive upper bound).
    #[inline]
    pub fn end_round(&self) -> Round {
        Round(self.total_rounds)
    }

    /// Total number of cells.
    #[inline]
    pub fn cell_count(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Number of cells left empty at initialisation.
    pub fn empty_count(&self) -> u64 {
        (self.empty_ratio * self.cell_count() as f64).floor() as u64
    }

    /// `true` if a snapshot is due after reaching `round`.
    #[inline]
    pub fn snapshot_due(&self, round: Round) -> bool {
        self.snapshot_interval_rounds > 0
            && round.0.is_multiple_of(self.snapshot_interval_rounds)
    }

    /// Reject configurations the simulator cannot run.
    pub fn validate(&self) -> CoreResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(CoreError::Config(format!(
                "grid dimensions must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if self.cell_count() > u32::MAX as u64 {
            return Err(CoreError::Config(format!(
                "grid of {}x{} cells exceeds the u32 cell index range",
                self.width, self.height
            )));
        }
        check_unit("empty_ratio", self.empty_ratio)?;
        check_unit("similarity_threshold", self.similarity_threshold)?;
        Ok(())
    }
}

fn check_unit(name: &str, value: f64) -> CoreResult<()> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(CoreError::Config(format!("{name} must be within [0, 1], got {value}")))
    }
}
