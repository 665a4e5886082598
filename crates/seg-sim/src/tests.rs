//! Integration tests for seg-sim.

use seg_core::{Occupant, Round, SimConfig};
use seg_grid::SegregationGrid;

use crate::{NoopObserver, RoundReport, SimBuilder, SimError, SimObserver};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn test_config(total_rounds: u64) -> SimConfig {
    SimConfig {
        width:                    12,
        height:                   10,
        empty_ratio:              0.2,
        similarity_threshold:     0.6,
        seed:                     42,
        total_rounds,
        snapshot_interval_rounds: 1,
    }
}

/// Observer that records every callback.
#[derive(Default)]
struct Recorder {
    starts:    Vec<Round>,
    reports:   Vec<RoundReport>,
    snapshots: Vec<(Round, String, usize)>,
    ended:     Option<Round>,
}

impl SimObserver for Recorder {
    fn on_round_start(&mut self, round: Round) {
        self.starts.push(round);
    }
    fn on_round_end(&mut self, report: &RoundReport) {
        self.reports.push(*report);
    }
    fn on_snapshot(&mut self, round: Round, grid: &SegregationGrid) {
        self.snapshots.push((round, round.title(), grid.iter().count()));
    }
    fn on_sim_end(&mut self, final_round: Round) {
        self.ended = Some(final_round);
    }
}

// ── SimBuilder validation ─────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn builds_successfully_with_defaults() {
        let sim = SimBuilder::new(SimConfig::default()).build().unwrap();
        assert_eq!(sim.grid.cell_count(), 2500);
        assert_eq!(sim.grid.empty_count(), 250);
        assert_eq!(sim.current_round, Round::ZERO);
    }

    #[test]
    fn invalid_config_errors() {
        let cfg = SimConfig { empty_ratio: 1.2, ..test_config(5) };
        let result = SimBuilder::new(cfg).build();
        assert!(matches!(result, Err(SimError::Config(_))));

        let cfg = SimConfig { width: 0, ..test_config(5) };
        assert!(SimBuilder::new(cfg).build().is_err());
    }

    #[test]
    fn explicit_grid_must_match_dimensions() {
        let grid = SegregationGrid::from_layout(2, 2, 0.5, vec![Occupant::Empty; 4]).unwrap();
        let result = SimBuilder::new(test_config(5)).grid(grid).build();
        assert!(matches!(result, Err(SimError::GridMismatch { got_width: 2, .. })));
    }

    #[test]
    fn explicit_grid_is_used_as_is() {
        use Occupant::{Empty as E, TypeA as A, TypeB as B};
        let cfg = SimConfig { width: 2, height: 2, ..test_config(1) };
        let grid = SegregationGrid::from_layout(2, 2, 0.5, vec![A, B, B, E]).unwrap();
        let mut sim = SimBuilder::new(cfg).grid(grid).build().unwrap();
        sim.run(&mut NoopObserver).unwrap();
        assert_eq!(sim.grid.cells(), [E, B, B, A]);
    }

    #[test]
    fn explicit_grid_settings_replace_config_ratios() {
        use Occupant::{Empty as E, TypeA as A, TypeB as B};
        let cfg = SimConfig { width: 2, height: 2, ..test_config(1) };
        assert_eq!(cfg.similarity_threshold, 0.6);
        let grid = SegregationGrid::from_layout(2, 2, 0.5, vec![A, B, B, E]).unwrap();
        let sim = SimBuilder::new(cfg).grid(grid).build().unwrap();
        assert_eq!(sim.config.similarity_threshold, 0.5);
        assert_eq!(sim.config.similarity_threshold, sim.grid.threshold());
        assert_eq!(sim.config.empty_ratio, 0.25);
        assert_eq!(sim.config.empty_count(), sim.grid.empty_count() as u64);
        assert!(sim.config.validate().is_ok());
    }
}

// ── Basic run ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use super::*;

    #[test]
    fn run_reaches_end_round() {
        let mut sim = SimBuilder::new(test_config(6)).build().unwrap();
        sim.run(&mut NoopObserver).unwrap();
        assert_eq!(sim.current_round, Round(6));
        // A second run has nothing left to do.
        sim.run(&mut NoopObserver).unwrap();
        assert_eq!(sim.current_round, Round(6));
    }

    #[test]
    fn run_rounds_advances_counter() {
        let mut sim = SimBuilder::new(test_config(100)).build().unwrap();
        sim.run_rounds(5, &mut NoopObserver).unwrap();
        assert_eq!(sim.current_round, Round(5));
        sim.run_rounds(3, &mut NoopObserver).unwrap();
        assert_eq!(sim.current_round, Round(8));
    }

    #[test]
    fn observer_called_correct_number_of_times() {
        let mut sim = SimBuilder::new(test_config(4)).build().unwrap();
        let mut rec = Recorder::default();
        sim.run(&mut rec).unwrap();

        assert_eq!(rec.starts, [Round(0), Round(1), Round(2), Round(3)]);
        assert_eq!(rec.reports.len(), 4);
        assert_eq!(rec.ended, Some(Round(4)));

        // Initial layout plus one snapshot per round.
        let titles: Vec<&str> = rec.snapshots.iter().map(|(_, t, _)| t.as_str()).collect();
        assert_eq!(titles, ["initial", "simulate 0", "simulate 1", "simulate 2", "simulate 3"]);
        assert!(rec.snapshots.iter().all(|&(_, _, cells)| cells == 120));
    }

    #[test]
    fn snapshot_interval_is_respected() {
        let cfg = SimConfig { snapshot_interval_rounds: 3, ..test_config(7) };
        let mut sim = SimBuilder::new(cfg).build().unwrap();
        let mut rec = Recorder::default();
        sim.run(&mut rec).unwrap();
        let rounds: Vec<Round> = rec.snapshots.iter().map(|(r, _, _)| *r).collect();
        assert_eq!(rounds, [Round(0), Round(3), Round(6)]);
    }

    #[test]
    fn zero_interval_disables_snapshots() {
        let cfg = SimConfig { snapshot_interval_rounds: 0, ..test_config(3) };
        let mut sim = SimBuilder::new(cfg).build().unwrap();
        let mut rec = Recorder::default();
        sim.run(&mut rec).unwrap();
        assert!(rec.snapshots.is_empty());
        assert_eq!(rec.reports.len(), 3);
    }

    #[test]
    fn initial_snapshot_emitted_once_across_calls() {
        let mut sim = SimBuilder::new(test_config(10)).build().unwrap();
        let mut rec = Recorder::default();
        sim.run_rounds(0, &mut rec).unwrap();
        sim.run_rounds(2, &mut rec).unwrap();
        let initial = rec.snapshots.iter().filter(|(r, _, _)| *r == Round::ZERO).count();
        assert_eq!(initial, 1);
    }

    #[test]
    fn reports_carry_round_and_similarity() {
        let mut sim = SimBuilder::new(test_config(3)).build().unwrap();
        let mut rec = Recorder::default();
        sim.run(&mut rec).unwrap();
        for (i, report) in rec.reports.iter().enumerate() {
            assert_eq!(report.round, Round(i as u64));
            assert!((0.0..=1.0).contains(&report.similarity));
            assert_eq!(
                report.stats.unsatisfied,
                report.stats.relocated + report.stats.skipped
            );
        }
        let last = rec.reports.last().unwrap();
        assert_eq!(last.similarity, sim.similarity());
    }
}

// ── Determinism and conservation ──────────────────────────────────────────────

#[cfg(test)]
mod determinism_tests {
    use super::*;

    #[test]
    fn same_seed_same_final_grid() {
        let run = || {
            let mut sim = SimBuilder::new(test_config(8)).build().unwrap();
            sim.run(&mut NoopObserver).unwrap();
            sim.grid.cells().to_vec()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn different_seeds_diverge() {
        let initial = |seed| {
            let cfg = SimConfig { seed, ..test_config(0) };
            SimBuilder::new(cfg).build().unwrap().grid.cells().to_vec()
        };
        assert_ne!(initial(1), initial(2));
    }

    #[test]
    fn step_matches_run_rounds() {
        let mut a = SimBuilder::new(test_config(4)).build().unwrap();
        let mut b = SimBuilder::new(test_config(4)).build().unwrap();
        for _ in 0..4 {
            a.step().unwrap();
        }
        b.run_rounds(4, &mut NoopObserver).unwrap();
        assert_eq!(a.grid.cells(), b.grid.cells());
        assert_eq!(a.current_round, b.current_round);
    }

    #[test]
    fn counts_conserved_over_run() {
        let mut sim = SimBuilder::new(test_config(15)).build().unwrap();
        let before = (
            sim.grid.count(Occupant::Empty),
            sim.grid.count(Occupant::TypeA),
            sim.grid.count(Occupant::TypeB),
        );
        sim.run(&mut NoopObserver).unwrap();
        let after = (
            sim.grid.count(Occupant::Empty),
            sim.grid.count(Occupant::TypeA),
            sim.grid.count(Occupant::TypeB),
        );
        assert_eq!(before, after);
        sim.grid.check_invariants().unwrap();
    }

    #[test]
    fn no_empty_cells_means_no_moves() {
        let cfg = SimConfig { width: 3, height: 3, empty_ratio: 0.0, similarity_threshold: 0.7, ..test_config(3) };
        let mut sim = SimBuilder::new(cfg).build().unwrap();
        let before = sim.grid.cells().to_vec();
        let mut rec = Recorder::default();
        sim.run(&mut rec).unwrap();
        assert_eq!(sim.grid.cells(), before.as_slice());
        assert!(rec.reports.iter().all(|r| r.stats.relocated == 0 && r.stats.skipped == 9));
    }
}
