//! Simulation observer trait for progress reporting and data collection.

use seg_core::Round;
use seg_grid::{SegregationGrid, StepStats};

/// Outcome of one completed round.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RoundReport {
    /// The round that just ran (0-based).
    pub round:      Round,
    pub stats:      StepStats,
    /// Similarity metric of the grid after the round.
    pub similarity: f64,
}

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// round loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl SimObserver for ProgressPrinter {
///     fn on_round_end(&mut self, report: &RoundReport) {
///         println!("{}: {} moved", report.round, report.stats.relocated);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each round, before the snapshot is taken.
    fn on_round_start(&mut self, _round: Round) {}

    /// Called at the end of each round with its counters.
    fn on_round_end(&mut self, _report: &RoundReport) {}

    /// Called with the full grid for the initial layout (`Round(0)`) and after
    /// every round whose completed count is a multiple of
    /// `config.snapshot_interval_rounds`.
    ///
    /// This is the hand-off point to visualisers and output writers: the
    /// grid exposes width, height, and the coordinate → occupant mapping, and
    /// [`Round::title`] gives the snapshot's label.
    fn on_snapshot(&mut self, _round: Round, _grid: &SegregationGrid) {}

    /// Called once after the final round completes.
    fn on_sim_end(&mut self, _final_round: Round) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
