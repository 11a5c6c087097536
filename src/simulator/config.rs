//! Simulation configuration.

use crate::core::config::EngineConfig;

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of simulation runs to perform
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Simulated play time per run, in seconds
    pub seconds_per_run: u64,

    /// Prestige as soon as this stage is reached (None = never)
    pub prestige_at: Option<u32>,

    /// Average player clicks per second; individual ticks are randomised
    pub clicks_per_second: f64,

    /// Tunables handed to every engine
    pub engine: EngineConfig,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per run)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 100,
            seed: None,
            seconds_per_run: 3_600,
            prestige_at: None,
            clicks_per_second: 5.0,
            engine: EngineConfig::default(),
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Quick config for checking the first few boss gates
    pub fn early_game(num_runs: u32) -> Self {
        Self {
            num_runs,
            seconds_per_run: 900,
            ..Default::default()
        }
    }

    /// Tick budget for one run under this engine config.
    pub fn max_ticks(&self) -> u64 {
        (self.seconds_per_run as f64 * self.engine.ticks_per_second()).round() as u64
    }
}
