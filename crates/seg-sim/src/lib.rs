//! `seg-sim`: round loop orchestrator for the schelling_rs simulator.
//!
//! # Round loop
//!
//! ```text
//! snapshot(R0)  initial layout ("initial")
//! for round in current..config.total_rounds:
//!   on_round_start(round)
//!   ① Snapshot  : copy grid + occupied order
//!   ② Evaluate  : satisfaction of every round-start occupant vs. the copy
//!   ③ Relocate  : unsatisfied occupants move to a random live empty cell
//!   on_round_end(report)
//!   snapshot(round + 1)  if due ("simulate {round}")
//! on_sim_end(final_round)
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use seg_core::SimConfig;
//! use seg_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(SimConfig::default()).build()?;
//! sim.run(&mut NoopObserver)?;
//! println!("similarity: {:.3}", sim.grid.similarity());
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, RoundReport, SimObserver};
pub use sim::Sim;
