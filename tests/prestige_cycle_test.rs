//! Integration test: Complete prestige cycle
//!
//! Tests the full flow: fresh session → push stages → prestige → verify reset

use clicker::catalog::Catalog;
use clicker::{Engine, EngineConfig, GameState, Rejection, TickEvent};

fn instant_respawn() -> EngineConfig {
    EngineConfig {
        respawn_delay_ms: 0,
        ..EngineConfig::default()
    }
}

/// Kills whatever is on screen, `times` times.
fn slay(engine: &mut Engine, times: usize) -> Vec<TickEvent> {
    let mut events = Vec::new();
    for _ in 0..times {
        events.extend(engine.deal_damage(1e12));
    }
    events
}

#[test]
fn test_complete_prestige_cycle_first_prestige() {
    let mut engine = Engine::new(Catalog::default(), instant_respawn(), 0).unwrap();
    assert!(!engine.can_prestige());
    assert_eq!(engine.pending_souls(), 0);

    // Four full stages of kills lands on stage 5, the first soul
    let events = slay(&mut engine, 40);
    let level_ups = events
        .iter()
        .filter(|e| matches!(e, TickEvent::LevelUp { .. }))
        .count();
    assert_eq!(level_ups, 4);
    assert_eq!(engine.state().level, 5);
    assert!(engine.can_prestige());
    assert_eq!(engine.pending_souls(), 1);

    let gold_before = engine.state().gold;
    assert!(gold_before > 0);
    assert_eq!(engine.buy_hero(0), Ok(10));
    assert_eq!(engine.state().click_damage, 2);

    let view = engine.view();
    assert!((view.multiplier_after_prestige - 1.1).abs() < 1e-9);

    assert_eq!(engine.prestige(), Ok(1));

    let state = engine.state();
    assert_eq!(state.souls, 1);
    assert_eq!(state.gold, 0);
    assert_eq!(state.level, 1);
    assert_eq!(state.kills, 0);
    assert_eq!(state.highest_cleared_boss_stage, 0);
    assert!(state.hero_counts.iter().all(|&c| c == 0));
    // floor(1 * 1.1)
    assert_eq!(state.click_damage, 1);
    assert_eq!(state.monster.max_hp, 10);
    assert!(!state.monster.is_dead);
}

#[test]
fn test_prestige_keeps_artifacts_and_compounds_souls() {
    let catalog = Catalog::default();
    let config = EngineConfig::default();
    let mut state = GameState::new(catalog.heroes.len(), 0);
    state.level = 12;
    state.highest_cleared_boss_stage = 10;
    state.souls = 8;
    state.gold = 9_999;
    state.hero_counts[1] = 3;
    state.artifacts.insert("artifact_click".to_string(), 2);
    let mut engine = Engine::from_state(state, catalog, config).unwrap();

    assert_eq!(engine.pending_souls(), 2);
    assert_eq!(engine.prestige(), Ok(2));

    let state = engine.state();
    assert_eq!(state.souls, 10);
    assert_eq!(state.artifact_level("artifact_click"), 2);
    // floor(1 * (1 + 10 * 0.1) * (1 + 2 * 0.15)) = floor(2.6)
    assert_eq!(state.click_damage, 2);
    assert_eq!(state.dps, 0);
    assert_eq!(engine.max_reachable_stage(), 9);
}

#[test]
fn test_prestige_rejected_below_minimum_stage() {
    let mut engine = Engine::new(Catalog::default(), instant_respawn(), 0).unwrap();
    slay(&mut engine, 30);
    assert_eq!(engine.state().level, 4);

    let before = engine.state().clone();
    assert_eq!(
        engine.prestige(),
        Err(Rejection::NoPendingSouls { min_stage: 5 })
    );
    assert_eq!(engine.state(), &before);
}

#[test]
fn test_second_run_is_faster() {
    let mut engine = Engine::new(Catalog::default(), instant_respawn(), 0).unwrap();
    slay(&mut engine, 90);
    assert!(engine.is_waiting_boss());
    assert_eq!(engine.pending_souls(), 1);

    engine.prestige().unwrap();
    let first_run_click = engine.state().click_damage;

    // Ten souls worth of play doubles the base pools
    let mut state = engine.state().clone();
    state.souls = 10;
    let engine = Engine::from_state(state, Catalog::default(), instant_respawn()).unwrap();
    assert!(engine.state().click_damage > first_run_click);
    assert_eq!(engine.state().click_damage, 2);
}
