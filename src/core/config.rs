//! Tunable balance knobs for the engine.
//!
//! Every field defaults to the value in `constants.rs`. A JSON document may
//! override any subset of fields; missing keys keep their defaults.

use super::constants::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("`{field}` must be greater than zero")]
    Zero { field: &'static str },
    #[error("`{field}` must be a finite, non-negative number (got {value})")]
    BadNumber { field: &'static str, value: f64 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub kills_required: u32,
    pub soul_bonus_per_soul: f64,
    pub boss_stage_interval: u32,
    pub boss_challenge_seconds: u32,
    pub boss_damage_fraction: f64,
    pub monster_hp_base: f64,
    pub monster_hp_growth: f64,
    pub gold_divisor: f64,
    pub souls_per_stage_divisor: u32,
    pub respawn_delay_ms: u32,
    pub tick_interval_ms: u32,
    pub offline_min_seconds: i64,
    pub offline_kill_ceiling: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            kills_required: KILLS_REQUIRED,
            soul_bonus_per_soul: SOUL_BONUS_PER_SOUL,
            boss_stage_interval: BOSS_STAGE_INTERVAL,
            boss_challenge_seconds: BOSS_CHALLENGE_SECONDS,
            boss_damage_fraction: BOSS_DAMAGE_FRACTION,
            monster_hp_base: MONSTER_HP_BASE,
            monster_hp_growth: MONSTER_HP_GROWTH,
            gold_divisor: GOLD_DIVISOR,
            souls_per_stage_divisor: SOULS_PER_STAGE_DIVISOR,
            respawn_delay_ms: RESPAWN_DELAY_MS,
            tick_interval_ms: TICK_INTERVAL_MS,
            offline_min_seconds: OFFLINE_MIN_SECONDS,
            offline_kill_ceiling: OFFLINE_KILL_CEILING,
        }
    }
}

impl EngineConfig {
    /// Parses a (possibly partial) JSON override and validates the result.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let nonzero = [
            ("kills_required", self.kills_required),
            ("boss_stage_interval", self.boss_stage_interval),
            ("boss_challenge_seconds", self.boss_challenge_seconds),
            ("souls_per_stage_divisor", self.souls_per_stage_divisor),
            ("tick_interval_ms", self.tick_interval_ms),
        ];
        for (field, value) in nonzero {
            if value == 0 {
                return Err(ConfigError::Zero { field });
            }
        }

        let numbers = [
            ("soul_bonus_per_soul", self.soul_bonus_per_soul),
            ("boss_damage_fraction", self.boss_damage_fraction),
            ("monster_hp_base", self.monster_hp_base),
            ("monster_hp_growth", self.monster_hp_growth),
            ("gold_divisor", self.gold_divisor),
        ];
        for (field, value) in numbers {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::BadNumber { field, value });
            }
        }
        if self.gold_divisor == 0.0 {
            return Err(ConfigError::Zero {
                field: "gold_divisor",
            });
        }

        Ok(())
    }

    /// Damage ticks per second implied by the tick period.
    pub fn ticks_per_second(&self) -> f64 {
        1000.0 / self.tick_interval_ms as f64
    }

    pub fn boss_challenge_ms(&self) -> u64 {
        self.boss_challenge_seconds as u64 * 1000
    }
}
