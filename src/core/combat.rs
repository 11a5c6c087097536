//! Monster spawning and damage resolution.
//!
//! Regular kills pay gold and push the kill counter; a boss reaching zero HP
//! is handed straight to the boss challenge machine instead.

use super::balance::{kill_reward, monster_max_hp, next_boss_stage};
use super::boss::{boss_result_from_timer, BossOutcome};
use super::config::EngineConfig;
use super::game_state::{GameState, Monster};
use super::stats::channel_multiplier;
use crate::catalog::{ArtifactChannel, Catalog};
use tracing::debug;

/// What a single kill did to stage progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KillProgress {
    /// Kill counter went up, stage unchanged.
    Counted,
    /// Counter filled and the stage advanced.
    LevelUp { new_level: u32 },
    /// Counter filled but the next stage is a locked boss gate.
    StalledAtGate { boss_stage: u32 },
    /// A boss fight is running; regular progress is frozen.
    Frozen,
}

/// Result of a killing blow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KillOutcome {
    Regular { gold: u64, progress: KillProgress },
    /// `None` only if the boss record disagreed with the monster's HP.
    Boss(Option<BossOutcome>),
}

/// Replaces the monster for the current stage, or for the running boss.
///
/// A boss spawned mid-fight shows only the damage still owed.
pub fn spawn_monster(state: &mut GameState, config: &EngineConfig) {
    if state.boss_challenge.active {
        let boss = &state.boss_challenge;
        state.monster = Monster {
            max_hp: boss.required_damage,
            hp: boss.remaining_damage(),
            is_dead: false,
            respawn_in_ms: None,
        };
        return;
    }

    state.monster = Monster::new(monster_max_hp(state.level, config));
    debug!(level = state.level, max_hp = state.monster.max_hp, "monster spawned");
}

/// Applies the kill-counter rule to an arbitrary (level, kills) pair.
///
/// Shared by live play and offline progress so both stall at the same gate.
pub fn advance_kill_counter(
    level: u32,
    kills: u32,
    highest_cleared_boss_stage: u32,
    config: &EngineConfig,
) -> (u32, u32, KillProgress) {
    let kills = kills.saturating_add(1);
    if kills < config.kills_required {
        return (level, kills, KillProgress::Counted);
    }

    let next_level = level.saturating_add(1);
    let locked_boss = next_boss_stage(highest_cleared_boss_stage, config);
    if next_level == locked_boss {
        return (
            level,
            config.kills_required,
            KillProgress::StalledAtGate {
                boss_stage: locked_boss,
            },
        );
    }

    (next_level, 0, KillProgress::LevelUp { new_level: next_level })
}

/// True when the counter is full and the next stage is the locked gate.
pub fn is_stalled_at_gate(
    level: u32,
    kills: u32,
    highest_cleared_boss_stage: u32,
    config: &EngineConfig,
) -> bool {
    kills >= config.kills_required
        && level.saturating_add(1) == next_boss_stage(highest_cleared_boss_stage, config)
}

/// Counts a regular kill toward the next stage. Frozen during boss fights.
pub fn on_monster_killed(state: &mut GameState, config: &EngineConfig) -> KillProgress {
    if state.boss_challenge.active {
        return KillProgress::Frozen;
    }

    let (level, kills, progress) = advance_kill_counter(
        state.level,
        state.kills,
        state.highest_cleared_boss_stage,
        config,
    );
    state.level = level;
    state.kills = kills;

    if let KillProgress::LevelUp { new_level } = progress {
        debug!(new_level, "stage advanced");
    }
    progress
}

/// Applies `amount` damage to the current monster.
///
/// Does nothing to a dead monster. During a boss fight the same amount is
/// banked into the challenge, capped at the requirement.
pub fn deal_damage(
    state: &mut GameState,
    catalog: &Catalog,
    config: &EngineConfig,
    amount: f64,
) -> Option<KillOutcome> {
    if state.monster.is_dead || !amount.is_finite() || amount <= 0.0 {
        return None;
    }

    state.monster.hp -= amount;

    if state.boss_challenge.active {
        let boss = &mut state.boss_challenge;
        boss.damage_done = (boss.damage_done + amount).min(boss.required_damage as f64);
    }

    if state.monster.hp <= 0.0 {
        Some(kill_monster(state, catalog, config))
    } else {
        None
    }
}

fn kill_monster(state: &mut GameState, catalog: &Catalog, config: &EngineConfig) -> KillOutcome {
    state.monster.is_dead = true;
    state.monster.hp = 0.0;

    if state.boss_challenge.active {
        let outcome = boss_result_from_timer(state, config, 0);
        spawn_monster(state, config);
        return KillOutcome::Boss(outcome);
    }

    let gold_multiplier = channel_multiplier(state, catalog, ArtifactChannel::Gold);
    let gold = kill_reward(state.monster.max_hp, gold_multiplier, config);
    state.gold = state.gold.saturating_add(gold);

    let progress = on_monster_killed(state, config);

    if config.respawn_delay_ms == 0 {
        spawn_monster(state, config);
    } else {
        state.monster.respawn_in_ms = Some(config.respawn_delay_ms);
    }

    KillOutcome::Regular { gold, progress }
}

/// Advances a pending respawn by `elapsed_ms`. Returns true if a monster spawned.
pub fn advance_respawn(state: &mut GameState, config: &EngineConfig, elapsed_ms: u32) -> bool {
    if !state.monster.is_dead {
        return false;
    }
    match state.monster.respawn_in_ms {
        Some(left) if left > elapsed_ms => {
            state.monster.respawn_in_ms = Some(left - elapsed_ms);
            false
        }
        _ => {
            spawn_monster(state, config);
            true
        }
    }
}
