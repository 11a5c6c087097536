//! Shared balance formulas used by live combat, offline progress and the simulator.
//!
//! All per-kill cost and reward numbers come from here. Change once, test everywhere.

use super::config::EngineConfig;
use super::constants::SKILL_DPS_SHARE;
use crate::catalog::HeroDef;

// =============================================================================
// MONSTERS
// =============================================================================

/// Max HP of a regular monster at `level`: `ceil(base * growth^(level - 1))`.
///
/// Must stay bit-for-bit stable: existing saves depend on it.
pub fn monster_max_hp(level: u32, config: &EngineConfig) -> u64 {
    let exponent = level.saturating_sub(1) as f64;
    (config.monster_hp_base * config.monster_hp_growth.powf(exponent)).ceil() as u64
}

/// Gold dropped by a monster with `max_hp`, scaled by the gold artifact
/// multiplier. Never less than one.
pub fn kill_reward(max_hp: u64, gold_multiplier: f64, config: &EngineConfig) -> u64 {
    let base = ((max_hp as f64 / config.gold_divisor).ceil() as u64).max(1);
    ((base as f64 * gold_multiplier).floor() as u64).max(1)
}

// =============================================================================
// BOSS GATES
// =============================================================================

/// The next locked boss stage after the highest cleared one. Saturates at
/// `u32::MAX`.
pub fn next_boss_stage(highest_cleared_boss_stage: u32, config: &EngineConfig) -> u32 {
    highest_cleared_boss_stage.saturating_add(config.boss_stage_interval)
}

/// Highest stage reachable through normal kills (one below the locked gate).
pub fn max_reachable_stage(highest_cleared_boss_stage: u32, config: &EngineConfig) -> u32 {
    next_boss_stage(highest_cleared_boss_stage, config).saturating_sub(1)
}

/// Highest gate stage that still has a locked gate after it.
pub fn last_clearable_gate(config: &EngineConfig) -> u32 {
    let interval = config.boss_stage_interval.max(1);
    (u32::MAX - interval) / interval * interval
}

/// Damage a boss challenge at `stage` demands: a fraction of a full stage's
/// worth of regular kills, compressed into one timed fight.
pub fn boss_required_damage(stage: u32, config: &EngineConfig) -> u64 {
    let stage_hp = monster_max_hp(stage, config) as f64;
    (stage_hp * config.kills_required as f64 * config.boss_damage_fraction).ceil() as u64
}

// =============================================================================
// PRESTIGE
// =============================================================================

/// Souls granted for prestiging at `level`.
pub fn pending_souls(level: u32, config: &EngineConfig) -> u64 {
    (level / config.souls_per_stage_divisor) as u64
}

/// Multiplier applied to both damage pools: `1 + souls * bonus`.
pub fn soul_multiplier(souls: u64, config: &EngineConfig) -> f64 {
    1.0 + souls as f64 * config.soul_bonus_per_soul
}

// =============================================================================
// SHOP AND SKILLS
// =============================================================================

/// Price of the next copy of `hero` given `owned` copies.
pub fn hero_cost(hero: &HeroDef, owned: u32) -> u64 {
    let exponent = i32::try_from(owned).unwrap_or(i32::MAX);
    (hero.base_cost as f64 * hero.cost_multiplier.powi(exponent)).floor() as u64
}

/// Burst damage of an active skill.
pub fn skill_damage(click_damage: u64, dps: u64, damage_multiplier: f64) -> u64 {
    let raw = (click_damage as f64 + dps as f64 * SKILL_DPS_SHARE) * damage_multiplier;
    (raw.floor() as u64).max(1)
}

/// Artifact multiplier: `1 + level * per_level_bonus`.
pub fn artifact_multiplier(level: u32, per_level_bonus: f64) -> f64 {
    1.0 + level as f64 * per_level_bonus
}
