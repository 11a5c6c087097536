//! Offline progression system.
//!
//! Replays the kills live play would have produced while the player was
//! away, one kill at a time, using the same HP curve, gold formula and
//! kill-counter rule as live combat. Stops at the first locked boss gate.

use super::balance::{kill_reward, monster_max_hp};
use super::combat::{advance_kill_counter, is_stalled_at_gate};
use super::config::EngineConfig;
use super::game_state::GameState;
use super::stats::channel_multiplier;
use crate::catalog::{ArtifactChannel, Catalog};
use tracing::info;

/// Summary shown to the player after a fast-forward.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OfflineReport {
    pub elapsed_seconds: i64,
    pub kills: u64,
    pub gold: u64,
    pub levels_gained: u32,
    pub level_after: u32,
    pub kills_after: u32,
}

/// Why the fast-forward loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    OutOfTime,
    BossGate,
    KillCeiling,
}

/// Raw result of [`simulate_offline_kills`].
#[derive(Debug, Clone, PartialEq)]
pub struct OfflineRun {
    pub kills: u64,
    pub gold: u64,
    pub level: u32,
    pub level_kills: u32,
    pub seconds_left: f64,
    pub stop: StopReason,
}

/// Starting point and rates for a fast-forward.
#[derive(Debug, Clone, Copy)]
pub struct OfflineStart {
    pub level: u32,
    pub kills: u32,
    pub highest_cleared_boss_stage: u32,
    pub dps: u64,
    pub gold_multiplier: f64,
}

/// Walks kill by kill through `seconds` of idle time.
///
/// Each kill costs `max_hp / dps` plus the respawn delay. The loop ends when
/// the next kill no longer fits, when the player would be parked below a
/// locked gate, or after `offline_kill_ceiling` kills.
pub fn simulate_offline_kills(
    start: OfflineStart,
    seconds: f64,
    config: &EngineConfig,
) -> OfflineRun {
    let respawn_seconds = config.respawn_delay_ms as f64 / 1000.0;
    let dps = start.dps as f64;

    let mut remaining = seconds;
    let mut level = start.level;
    let mut level_kills = start.kills;
    let mut kills: u64 = 0;
    let mut gold: u64 = 0;

    let stop = loop {
        if is_stalled_at_gate(level, level_kills, start.highest_cleared_boss_stage, config) {
            break StopReason::BossGate;
        }
        if kills >= config.offline_kill_ceiling {
            break StopReason::KillCeiling;
        }
        if dps <= 0.0 {
            break StopReason::OutOfTime;
        }

        let max_hp = monster_max_hp(level, config);
        let time_to_kill = max_hp as f64 / dps + respawn_seconds;
        if remaining < time_to_kill {
            break StopReason::OutOfTime;
        }

        remaining -= time_to_kill;
        kills += 1;
        gold = gold.saturating_add(kill_reward(max_hp, start.gold_multiplier, config));

        let (next_level, next_kills, _) =
            advance_kill_counter(level, level_kills, start.highest_cleared_boss_stage, config);
        level = next_level;
        level_kills = next_kills;
    };

    OfflineRun {
        kills,
        gold,
        level,
        level_kills,
        seconds_left: remaining,
        stop,
    }
}

/// Applies offline progress since `state.last_save_time`.
///
/// Only runs when more than `offline_min_seconds` passed, dps is positive and
/// no boss fight is open. `last_save_time` moves to `now` in every case.
/// Returns `None` unless at least one full kill fit in the window.
pub fn process_offline_progression(
    state: &mut GameState,
    catalog: &Catalog,
    config: &EngineConfig,
    now: i64,
) -> Option<OfflineReport> {
    let elapsed_seconds = now.saturating_sub(state.last_save_time);
    state.last_save_time = now;

    if elapsed_seconds <= config.offline_min_seconds
        || state.dps == 0
        || state.boss_challenge.active
    {
        return None;
    }

    let start = OfflineStart {
        level: state.level,
        kills: state.kills,
        highest_cleared_boss_stage: state.highest_cleared_boss_stage,
        dps: state.dps,
        gold_multiplier: channel_multiplier(state, catalog, ArtifactChannel::Gold),
    };
    let run = simulate_offline_kills(start, elapsed_seconds as f64, config);
    if run.kills == 0 {
        return None;
    }

    let levels_gained = run.level.saturating_sub(state.level);
    state.gold = state.gold.saturating_add(run.gold);
    state.level = run.level;
    state.kills = run.level_kills;

    info!(
        elapsed_seconds,
        kills = run.kills,
        gold = run.gold,
        levels_gained,
        stop = ?run.stop,
        "offline progress applied"
    );

    Some(OfflineReport {
        elapsed_seconds,
        kills: run.kills,
        gold: run.gold,
        levels_gained,
        level_after: state.level,
        kills_after: state.kills,
    })
}
