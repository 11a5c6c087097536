//! The fixed-period game tick.
//!
//! One call advances the session by `tick_interval_ms`: pending respawns,
//! passive dps damage, skill cooldowns and the boss clock. It returns a list
//! of [`TickEvent`]s so the presentation layer can react without the engine
//! knowing anything about it.

use super::boss::{boss_result_from_timer, BossOutcome};
use super::combat::{advance_respawn, deal_damage, spawn_monster, KillOutcome, KillProgress};
use super::config::EngineConfig;
use super::game_state::GameState;
use crate::catalog::Catalog;

/// A single event produced by a tick or a player action.
#[derive(Debug, Clone, PartialEq)]
pub enum TickEvent {
    /// Damage landed on the current monster.
    Damage { amount: f64 },
    /// A regular monster died and paid out.
    Killed { gold: u64 },
    /// The kill counter filled and the stage advanced.
    LevelUp { new_level: u32 },
    /// The kill counter filled below a locked gate; a boss is waiting.
    BossGateReached { boss_stage: u32 },
    BossCleared { stage: u32 },
    BossFailed { stage: u32 },
    /// A fresh monster appeared after the respawn delay.
    Respawned { max_hp: u64 },
}

/// Translates a killing blow into events.
pub fn kill_events(outcome: KillOutcome, events: &mut Vec<TickEvent>) {
    match outcome {
        KillOutcome::Regular { gold, progress } => {
            events.push(TickEvent::Killed { gold });
            match progress {
                KillProgress::LevelUp { new_level } => {
                    events.push(TickEvent::LevelUp { new_level })
                }
                KillProgress::StalledAtGate { boss_stage } => {
                    events.push(TickEvent::BossGateReached { boss_stage })
                }
                KillProgress::Counted | KillProgress::Frozen => {}
            }
        }
        KillOutcome::Boss(Some(outcome)) => events.push(boss_event(outcome)),
        KillOutcome::Boss(None) => {}
    }
}

pub fn boss_event(outcome: BossOutcome) -> TickEvent {
    match outcome {
        BossOutcome::Cleared { stage } => TickEvent::BossCleared { stage },
        BossOutcome::Failed { stage } => TickEvent::BossFailed { stage },
    }
}

/// Applies damage and records what happened.
pub fn apply_damage(
    state: &mut GameState,
    catalog: &Catalog,
    config: &EngineConfig,
    amount: f64,
    events: &mut Vec<TickEvent>,
) {
    if state.monster.is_dead {
        return;
    }
    let outcome = deal_damage(state, catalog, config, amount);
    events.push(TickEvent::Damage { amount });
    if let Some(outcome) = outcome {
        kill_events(outcome, events);
    }
}

/// Processes one tick of `config.tick_interval_ms`.
pub fn game_tick(
    state: &mut GameState,
    catalog: &Catalog,
    config: &EngineConfig,
) -> Vec<TickEvent> {
    let period = config.tick_interval_ms;
    let mut events = Vec::new();

    // Respawn first so a monster that comes back this tick takes this tick's damage
    if advance_respawn(state, config, period) {
        events.push(TickEvent::Respawned {
            max_hp: state.monster.max_hp,
        });
    }

    if state.dps > 0 && !state.monster.is_dead {
        let amount = state.dps as f64 / config.ticks_per_second();
        apply_damage(state, catalog, config, amount, &mut events);
    }

    for cooldown in state.skill_cooldowns.values_mut() {
        *cooldown = cooldown.saturating_sub(period);
    }
    state.skill_cooldowns.retain(|_, left| *left > 0);

    if let Some(outcome) = boss_result_from_timer(state, config, period as u64) {
        spawn_monster(state, config);
        events.push(boss_event(outcome));
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::boss::start_boss_challenge;
    use crate::core::stats::recalc;

    fn setup(dps_heroes: u32) -> (GameState, Catalog, EngineConfig) {
        let catalog = Catalog::default();
        let config = EngineConfig::default();
        let mut state = GameState::new(catalog.heroes.len(), 0);
        state.hero_counts[1] = dps_heroes;
        recalc(&mut state, &catalog, &config);
        spawn_monster(&mut state, &config);
        (state, catalog, config)
    }

    #[test]
    fn test_idle_tick_without_dps() {
        let (mut state, catalog, config) = setup(0);
        let events = game_tick(&mut state, &catalog, &config);
        assert!(events.is_empty());
        assert_eq!(state.monster.hp, 10.0);
    }

    #[test]
    fn test_dps_splits_across_ticks() {
        let (mut state, catalog, config) = setup(4); // 20 dps -> 2 per tick
        let events = game_tick(&mut state, &catalog, &config);
        assert_eq!(events, vec![TickEvent::Damage { amount: 2.0 }]);
        assert_eq!(state.monster.hp, 8.0);
    }

    #[test]
    fn test_kill_then_respawn_cycle() {
        let (mut state, catalog, config) = setup(20); // 100 dps -> 10 per tick
        let events = game_tick(&mut state, &catalog, &config);
        assert_eq!(
            events,
            vec![TickEvent::Damage { amount: 10.0 }, TickEvent::Killed { gold: 1 }]
        );
        assert!(state.monster.is_dead);

        // Dead for four ticks, back on the fifth
        for _ in 0..4 {
            assert!(game_tick(&mut state, &catalog, &config).is_empty());
        }
        let events = game_tick(&mut state, &catalog, &config);
        assert_eq!(events[0], TickEvent::Respawned { max_hp: 10 });
        assert_eq!(events[1], TickEvent::Damage { amount: 10.0 });
    }

    #[test]
    fn test_level_up_event() {
        let (mut state, catalog, config) = setup(20);
        state.kills = config.kills_required - 1;
        let events = game_tick(&mut state, &catalog, &config);
        assert!(events.contains(&TickEvent::LevelUp { new_level: 2 }));
    }

    #[test]
    fn test_gate_event() {
        let (mut state, catalog, config) = setup(20_000);
        state.level = 9;
        state.kills = config.kills_required - 1;
        spawn_monster(&mut state, &config);
        let events = game_tick(&mut state, &catalog, &config);
        assert!(events.contains(&TickEvent::BossGateReached { boss_stage: 10 }));
    }

    #[test]
    fn test_cooldowns_decay_and_expire() {
        let (mut state, catalog, config) = setup(0);
        state.skill_cooldowns.insert("skill_strike".to_string(), 250);
        game_tick(&mut state, &catalog, &config);
        assert_eq!(state.skill_cooldown("skill_strike"), 150);
        game_tick(&mut state, &catalog, &config);
        game_tick(&mut state, &catalog, &config);
        assert_eq!(state.skill_cooldown("skill_strike"), 0);
        assert!(state.skill_cooldowns.is_empty());
    }

    #[test]
    fn test_boss_timeout_through_ticks() {
        let (mut state, catalog, config) = setup(0);
        state.level = 9;
        state.kills = config.kills_required;
        start_boss_challenge(&mut state, &config).unwrap();

        let mut failed = false;
        for _ in 0..300 {
            let events = game_tick(&mut state, &catalog, &config);
            if events.contains(&TickEvent::BossFailed { stage: 10 }) {
                failed = true;
                break;
            }
        }
        assert!(failed);
        assert_eq!(state.level, 9);
        assert!(!state.monster.is_dead);
        assert_eq!(state.monster.max_hp, crate::core::balance::monster_max_hp(9, &config));
    }

    #[test]
    fn test_boss_cleared_by_dps() {
        let (mut state, catalog, config) = setup(20_000); // 100k dps
        state.level = 9;
        state.kills = config.kills_required;
        start_boss_challenge(&mut state, &config).unwrap();

        let events = game_tick(&mut state, &catalog, &config);
        assert!(events.contains(&TickEvent::BossCleared { stage: 10 }));
        assert_eq!(state.level, 10);
        assert_eq!(state.highest_cleared_boss_stage, 10);
    }
}
