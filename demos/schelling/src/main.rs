//! schelling: reference run of the schelling_rs segregation simulator.
//!
//! Lays out a 50 × 50 grid with 10 % empty cells and a 0.7 similarity
//! threshold, then runs 20 relocation rounds.  Every grid state ("initial",
//! "simulate 0", …) is written to `cell_snapshots.csv` for an external
//! renderer, and per-round counters to `round_summaries.csv`.
//!
//! Usage: `schelling [CONFIG.json] [OUTPUT_DIR]`
//!
//! `CONFIG.json` holds any subset of `SimConfig` fields; missing fields keep
//! the reference values.  Set `RUST_LOG=debug` for per-round log lines.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use seg_core::{Occupant, Round, SimConfig};
use seg_grid::SegregationGrid;
use seg_output::{CsvWriter, OutputWriter, SimOutputObserver};
use seg_sim::{RoundReport, SimBuilder, SimObserver};

// ── Constants ─────────────────────────────────────────────────────────────────

const DEFAULT_OUTPUT_DIR: &str = "output/schelling";

// ── Observer wrapper: console progress + row counts ───────────────────────────

struct ProgressObserver<W: OutputWriter> {
    inner:         SimOutputObserver<W>,
    snapshot_rows: usize,
    summary_rows:  usize,
}

impl<W: OutputWriter> ProgressObserver<W> {
    fn new(inner: SimOutputObserver<W>) -> Self {
        Self { inner, snapshot_rows: 0, summary_rows: 0 }
    }
}

impl<W: OutputWriter> SimObserver for ProgressObserver<W> {
    fn on_round_end(&mut self, report: &RoundReport) {
        self.summary_rows += 1;
        println!(
            "{:<12} moved {:>5}  skipped {:>3}  similarity {:.4}",
            report.round.next().title(),
            report.stats.relocated,
            report.stats.skipped,
            report.similarity,
        );
        self.inner.on_round_end(report);
    }

    fn on_snapshot(&mut self, round: Round, grid: &SegregationGrid) {
        self.snapshot_rows += grid.cell_count();
        self.inner.on_snapshot(round, grid);
    }

    fn on_sim_end(&mut self, final_round: Round) {
        self.inner.on_sim_end(final_round);
    }
}

// ── Configuration ─────────────────────────────────────────────────────────────

fn load_config(path: Option<&Path>) -> Result<SimConfig> {
    let Some(path) = path else {
        return Ok(SimConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config: SimConfig = serde_json::from_str(&text)
        .with_context(|| format!("parsing config {}", path.display()))?;
    Ok(config)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let mut args = std::env::args_os().skip(1);
    let config_path = args.next().map(PathBuf::from);
    let output_dir = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

    // 1. Config.
    let config = load_config(config_path.as_deref())?;
    println!("=== schelling: segregation simulator ===");
    println!(
        "Grid: {}x{}  |  Empty: {:.0}%  |  Threshold: {}  |  Rounds: {}  |  Seed: {}",
        config.width,
        config.height,
        config.empty_ratio * 100.0,
        config.similarity_threshold,
        config.total_rounds,
        config.seed,
    );
    println!();

    // 2. Build sim.
    let mut sim = SimBuilder::new(config).build()?;
    println!("{:<12} similarity {:.4}", Round::ZERO.title(), sim.similarity());

    // 3. Set up output.
    std::fs::create_dir_all(&output_dir)
        .with_context(|| format!("creating {}", output_dir.display()))?;
    let writer = CsvWriter::new(&output_dir)?;
    let mut obs = ProgressObserver::new(SimOutputObserver::new(writer));

    // 4. Run.
    let t0 = Instant::now();
    sim.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }
    info!(elapsed_ms = elapsed.as_millis() as u64, dir = %output_dir.display(), "output written");

    // 5. Summary.
    println!();
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  cell_snapshots.csv  : {} rows", obs.snapshot_rows);
    println!("  round_summaries.csv : {} rows", obs.summary_rows);
    println!();

    println!("{:<10} {:>8}", "Occupant", "Cells");
    println!("{}", "-".repeat(19));
    for occ in [Occupant::TypeA, Occupant::TypeB, Occupant::Empty] {
        println!("{:<10} {:>8}", occ, sim.grid.count(occ));
    }
    println!();
    println!("Unsatisfied: {}", sim.grid.unsatisfied_count());
    println!("Similarity : {:.4}", sim.similarity());

    Ok(())
}
