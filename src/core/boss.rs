//! Boss challenge state machine: Idle -> Active -> (Cleared | Failed) -> Idle.
//!
//! Damage accrues through `combat::deal_damage`; time drains through
//! `boss_result_from_timer`. Both touch the same `BossChallenge` record and
//! the engine never interleaves them, so neither sees a half-updated fight.

use super::balance::{boss_required_damage, next_boss_stage};
use super::combat::spawn_monster;
use super::config::EngineConfig;
use super::game_state::GameState;
use super::rejection::Rejection;
use tracing::info;

/// Terminal result of a boss fight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BossOutcome {
    Cleared { stage: u32 },
    Failed { stage: u32 },
}

/// True when the player is parked one stage below the next locked gate.
pub fn is_waiting_boss(state: &GameState, config: &EngineConfig) -> bool {
    let gate = next_boss_stage(state.highest_cleared_boss_stage, config);
    !state.boss_challenge.active && state.level.saturating_add(1) == gate
}

/// Opens a challenge for the next locked gate and spawns the boss.
/// Returns the boss stage.
pub fn start_boss_challenge(
    state: &mut GameState,
    config: &EngineConfig,
) -> Result<u32, Rejection> {
    if !is_waiting_boss(state, config) {
        return Err(Rejection::BossNotWaiting);
    }

    let stage = next_boss_stage(state.highest_cleared_boss_stage, config);
    let boss = &mut state.boss_challenge;
    boss.active = true;
    boss.stage = stage;
    boss.required_damage = boss_required_damage(stage, config);
    boss.damage_done = 0.0;
    boss.time_left_ms = config.boss_challenge_ms();

    info!(stage, required_damage = boss.required_damage, "boss challenge started");
    spawn_monster(state, config);
    Ok(stage)
}

/// Drains `elapsed_ms` from the fight clock and settles the fight if it is over.
///
/// Success is checked before failure, so meeting the requirement on the last
/// tick still counts as a clear. Returns `None` while the fight continues or
/// when no fight is running. The caller respawns the monster on an outcome.
pub fn boss_result_from_timer(
    state: &mut GameState,
    config: &EngineConfig,
    elapsed_ms: u64,
) -> Option<BossOutcome> {
    if !state.boss_challenge.active {
        return None;
    }

    let boss = &mut state.boss_challenge;
    boss.time_left_ms = boss.time_left_ms.saturating_sub(elapsed_ms);

    if boss.damage_done >= boss.required_damage as f64 {
        let stage = boss.stage;
        state.highest_cleared_boss_stage = state.highest_cleared_boss_stage.max(stage);
        state.level = stage;
        state.kills = 0;
        state.boss_challenge.clear();
        info!(stage, "boss cleared");
        return Some(BossOutcome::Cleared { stage });
    }

    if boss.time_left_ms == 0 {
        let stage = boss.stage;
        state.level = stage.saturating_sub(1).max(1);
        state.kills = config.kills_required;
        state.boss_challenge.clear();
        info!(stage, "boss challenge failed");
        return Some(BossOutcome::Failed { stage });
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::balance::monster_max_hp;

    fn waiting_state(config: &EngineConfig) -> GameState {
        let mut state = GameState::new(7, 0);
        state.level = 9;
        state.kills = config.kills_required;
        state
    }

    #[test]
    fn test_waiting_only_below_gate() {
        let config = EngineConfig::default();
        let mut state = GameState::new(7, 0);
        assert!(!is_waiting_boss(&state, &config));
        state.level = 9;
        assert!(is_waiting_boss(&state, &config));
        state.highest_cleared_boss_stage = 10;
        assert!(!is_waiting_boss(&state, &config));
        state.level = 19;
        assert!(is_waiting_boss(&state, &config));
    }

    #[test]
    fn test_start_sets_up_fight() {
        let config = EngineConfig::default();
        let mut state = waiting_state(&config);

        assert_eq!(start_boss_challenge(&mut state, &config), Ok(10));

        let boss = &state.boss_challenge;
        assert!(boss.active);
        assert_eq!(boss.stage, 10);
        let expected = (monster_max_hp(10, &config) as f64 * 10.0 * 0.9).ceil() as u64;
        assert_eq!(boss.required_damage, expected);
        assert_eq!(boss.damage_done, 0.0);
        assert_eq!(boss.time_left_ms, 30_000);
        assert_eq!(state.monster.max_hp, expected);
        assert!(!is_waiting_boss(&state, &config));
    }

    #[test]
    fn test_start_rejected_when_not_waiting() {
        let config = EngineConfig::default();
        let mut state = GameState::new(7, 0);
        let before = state.clone();
        assert_eq!(
            start_boss_challenge(&mut state, &config),
            Err(Rejection::BossNotWaiting)
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_start_rejected_while_active() {
        let config = EngineConfig::default();
        let mut state = waiting_state(&config);
        start_boss_challenge(&mut state, &config).unwrap();
        assert_eq!(
            start_boss_challenge(&mut state, &config),
            Err(Rejection::BossNotWaiting)
        );
    }

    #[test]
    fn test_idle_timer_is_noop() {
        let config = EngineConfig::default();
        let mut state = GameState::new(7, 0);
        let before = state.clone();
        assert_eq!(boss_result_from_timer(&mut state, &config, 100), None);
        assert_eq!(state, before);
    }

    #[test]
    fn test_fight_continues() {
        let config = EngineConfig::default();
        let mut state = waiting_state(&config);
        start_boss_challenge(&mut state, &config).unwrap();
        assert_eq!(boss_result_from_timer(&mut state, &config, 100), None);
        assert_eq!(state.boss_challenge.time_left_ms, 29_900);
        assert!(state.boss_challenge.active);
    }

    #[test]
    fn test_exact_requirement_succeeds() {
        let config = EngineConfig::default();
        let mut state = waiting_state(&config);
        start_boss_challenge(&mut state, &config).unwrap();
        state.boss_challenge.damage_done = state.boss_challenge.required_damage as f64;

        assert_eq!(
            boss_result_from_timer(&mut state, &config, 100),
            Some(BossOutcome::Cleared { stage: 10 })
        );
        assert_eq!(state.highest_cleared_boss_stage, 10);
        assert_eq!(state.level, 10);
        assert_eq!(state.kills, 0);
        assert!(!state.boss_challenge.active);
    }

    #[test]
    fn test_success_wins_over_timeout() {
        let config = EngineConfig::default();
        let mut state = waiting_state(&config);
        start_boss_challenge(&mut state, &config).unwrap();
        state.boss_challenge.damage_done = state.boss_challenge.required_damage as f64;
        state.boss_challenge.time_left_ms = 50;

        assert_eq!(
            boss_result_from_timer(&mut state, &config, 100),
            Some(BossOutcome::Cleared { stage: 10 })
        );
    }

    #[test]
    fn test_timeout_fails_and_demotes() {
        let config = EngineConfig::default();
        let mut state = waiting_state(&config);
        start_boss_challenge(&mut state, &config).unwrap();
        state.boss_challenge.damage_done = 1.0;

        let mut outcome = None;
        for _ in 0..300 {
            outcome = boss_result_from_timer(&mut state, &config, 100);
            if outcome.is_some() {
                break;
            }
        }

        assert_eq!(outcome, Some(BossOutcome::Failed { stage: 10 }));
        assert_eq!(state.level, 9);
        assert_eq!(state.kills, config.kills_required);
        assert_eq!(state.highest_cleared_boss_stage, 0);
        assert_eq!(state.boss_challenge, Default::default());
        // Immediately eligible to retry
        assert!(is_waiting_boss(&state, &config));
    }

    #[test]
    fn test_overlong_tick_clamps_timer() {
        let config = EngineConfig::default();
        let mut state = waiting_state(&config);
        start_boss_challenge(&mut state, &config).unwrap();
        assert_eq!(
            boss_result_from_timer(&mut state, &config, 10_000_000),
            Some(BossOutcome::Failed { stage: 10 })
        );
    }

    #[test]
    fn test_failure_level_floor_is_one() {
        let config = EngineConfig {
            boss_stage_interval: 1,
            ..EngineConfig::default()
        };
        let mut state = GameState::new(7, 0);
        state.boss_challenge.active = true;
        state.boss_challenge.stage = 1;
        state.boss_challenge.required_damage = 10;
        state.boss_challenge.time_left_ms = 100;
        assert_eq!(
            boss_result_from_timer(&mut state, &config, 100),
            Some(BossOutcome::Failed { stage: 1 })
        );
        assert_eq!(state.level, 1);
    }
}
