//! The `Sim` struct and its round loop.

use seg_core::{Round, SimConfig, SimRng};
use seg_grid::SegregationGrid;
use tracing::{debug, info};

use crate::{RoundReport, SimObserver, SimResult};

/// The main simulation runner.
///
/// Owns the grid, the single seeded RNG, and the round counter.  Each round
/// is a snapshot-then-mutate pass over the grid (see
/// [`SegregationGrid::step`]); the observer sees every round boundary and the
/// grid at snapshot intervals.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Global configuration (dimensions, ratios, seed, round count, …).
    pub config: SimConfig,

    /// Number of rounds completed so far.
    pub current_round: Round,

    /// Grid state.  Read freely; mutate only through the `Sim` methods or
    /// [`SegregationGrid::relocate`], which keep the registries in sync.
    pub grid: SegregationGrid,

    pub(crate) rng:             SimRng,
    pub(crate) initial_emitted: bool,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the current round to `config.end_round()`.
    ///
    /// Calls observer hooks at every round boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let remaining = self.config.end_round().0.saturating_sub(self.current_round.0);
        info!(
            width     = self.grid.width(),
            height    = self.grid.height(),
            occupied  = self.grid.occupied_count(),
            empty     = self.grid.empty_count(),
            threshold = self.grid.threshold(),
            seed      = self.config.seed,
            rounds    = remaining,
            "starting segregation run"
        );

        self.run_rounds(remaining, observer)?;
        observer.on_sim_end(self.current_round);

        info!(
            rounds     = self.current_round.0,
            similarity = self.grid.similarity(),
            "segregation run complete"
        );
        Ok(())
    }

    /// Run exactly `n` rounds from the current position (ignores
    /// `total_rounds`).
    ///
    /// Useful for tests and incremental stepping.  Unlike [`run`](Self::run)
    /// this never calls `on_sim_end`, so observers that flush on that hook
    /// (such as an output writer) must be finished by the caller.
    pub fn run_rounds<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        self.emit_initial(observer);
        for _ in 0..n {
            let round = self.current_round;
            observer.on_round_start(round);
            let report = self.process_round()?;
            observer.on_round_end(&report);
            if self.config.snapshot_due(self.current_round) {
                observer.on_snapshot(self.current_round, &self.grid);
            }
        }
        Ok(())
    }

    /// Run a single round without observer callbacks.
    pub fn step(&mut self) -> SimResult<RoundReport> {
        self.process_round()
    }

    /// Similarity metric of the current grid.
    #[inline]
    pub fn similarity(&self) -> f64 {
        self.grid.similarity()
    }

    // ── Core round processing ─────────────────────────────────────────────

    fn emit_initial<O: SimObserver>(&mut self, observer: &mut O) {
        if self.initial_emitted || self.current_round != Round::ZERO {
            return;
        }
        self.initial_emitted = true;
        if self.config.snapshot_due(Round::ZERO) {
            observer.on_snapshot(Round::ZERO, &self.grid);
        }
    }

    fn process_round(&mut self) -> SimResult<RoundReport> {
        let round = self.current_round;
        let stats = self.grid.step(&mut self.rng);

        #[cfg(debug_assertions)]
        self.grid.check_invariants()?;

        let report = RoundReport {
            round,
            stats,
            similarity: self.grid.similarity(),
        };
        debug!(
            round       = round.0,
            unsatisfied = stats.unsatisfied,
            relocated   = stats.relocated,
            skipped     = stats.skipped,
            similarity  = report.similarity,
            "round complete"
        );

        self.current_round = round.next();
        Ok(report)
    }
}
