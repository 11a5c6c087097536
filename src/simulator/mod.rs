//! Game balance simulator for Monte Carlo analysis.
//!
//! Run many simulated play sessions to analyze:
//! - Time to clear each boss gate
//! - Hero purchase pacing and gold flow
//! - Boss clear rates at the default click cadence
//! - Prestige soul income
//!
//! The simulator drives the real `Engine` (src/core/engine.rs) for all game
//! logic, so results match what a player sees.

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::{GateSummary, SimReport};
pub use runner::{run_simulation, simulate_single_run, RunStats};
