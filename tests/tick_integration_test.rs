//! Integration tests for the fixed-period tick and the live entry points.
//!
//! These drive `Engine::tick()` and friends and check the `TickEvent` stream
//! for clicks, hero purchases, respawns, skills and artifacts.

use clicker::catalog::Catalog;
use clicker::{Engine, EngineConfig, GameState, Rejection, TickEvent};

fn engine_with(setup: impl FnOnce(&mut GameState)) -> Engine {
    let catalog = Catalog::default();
    let mut state = GameState::new(catalog.heroes.len(), 0);
    setup(&mut state);
    Engine::from_state(state, catalog, EngineConfig::default())
        .unwrap()
}

/// Run ticks in a loop, collecting all events
fn run_ticks(engine: &mut Engine, count: usize) -> Vec<TickEvent> {
    let mut all_events = Vec::new();
    for _ in 0..count {
        all_events.extend(engine.tick());
    }
    all_events
}

#[test]
fn test_idle_session_produces_no_events() {
    let mut engine = Engine::new(Catalog::default(), EngineConfig::default(), 0).unwrap();
    assert!(run_ticks(&mut engine, 50).is_empty());
    assert_eq!(engine.state().monster.hp, 10.0);
}

#[test]
fn test_bought_squire_chips_at_monster() {
    let mut engine = engine_with(|s| s.gold = 60);
    assert_eq!(engine.buy_hero(1), Ok(50));
    assert_eq!(engine.state().gold, 10);
    assert_eq!(engine.state().dps, 5);
    assert_eq!(engine.hero_cost(1), Some(57));

    let events = run_ticks(&mut engine, 10);
    assert_eq!(events.len(), 10);
    assert!(events
        .iter()
        .all(|e| *e == TickEvent::Damage { amount: 0.5 }));
    assert_eq!(engine.state().monster.hp, 5.0);
}

#[test]
fn test_unaffordable_and_unknown_heroes_are_rejected() {
    let mut engine = engine_with(|s| s.gold = 5);
    assert_eq!(
        engine.buy_hero(0),
        Err(Rejection::InsufficientGold { cost: 10, gold: 5 })
    );
    assert_eq!(engine.buy_hero(42), Err(Rejection::UnknownHero(42)));
    assert_eq!(engine.state().gold, 5);
    assert_eq!(engine.hero_cost(42), None);
}

#[test]
fn test_kill_waits_for_respawn() {
    let mut engine = Engine::new(Catalog::default(), EngineConfig::default(), 0).unwrap();
    let events = engine.deal_damage(10.0);
    assert_eq!(
        events,
        vec![TickEvent::Damage { amount: 10.0 }, TickEvent::Killed { gold: 1 }]
    );
    assert!(engine.view().monster_dead);

    assert!(run_ticks(&mut engine, 4).is_empty());
    assert_eq!(engine.tick(), vec![TickEvent::Respawned { max_hp: 10 }]);
    assert!(!engine.view().monster_dead);
}

#[test]
fn test_tenth_kill_levels_up() {
    let mut engine = engine_with(|s| s.kills = 9);
    let events = engine.deal_damage(10.0);
    assert!(events.contains(&TickEvent::LevelUp { new_level: 2 }));
    assert_eq!(engine.state().level, 2);
    assert_eq!(engine.state().kills, 0);

    run_ticks(&mut engine, 5);
    assert_eq!(engine.state().monster.max_hp, 16);
}

#[test]
fn test_skill_cooldown_runs_down_with_ticks() {
    let mut engine = engine_with(|s| {
        s.level = 5;
        s.hero_counts[1] = 2;
    });
    assert_eq!(engine.state().dps, 10);

    // floor((1 + 10 * 0.5) * 5)
    let events = engine.cast_skill("skill_strike").unwrap();
    assert_eq!(events[0], TickEvent::Damage { amount: 30.0 });
    assert_eq!(
        engine.cast_skill("skill_strike"),
        Err(Rejection::SkillOnCooldown { remaining_ms: 10_000 })
    );

    run_ticks(&mut engine, 99);
    assert_eq!(engine.state().skill_cooldown("skill_strike"), 100);
    engine.tick();
    assert!(engine.view().skills[0].ready);
    assert!(engine.cast_skill("skill_strike").is_ok());
}

#[test]
fn test_locked_and_unknown_skills() {
    let mut engine = Engine::new(Catalog::default(), EngineConfig::default(), 0).unwrap();
    assert_eq!(
        engine.cast_skill("skill_meteor"),
        Err(Rejection::SkillLocked { unlock_level: 15 })
    );
    assert_eq!(
        engine.cast_skill("skill_nope"),
        Err(Rejection::UnknownSkill("skill_nope".to_string()))
    );
}

#[test]
fn test_artifacts_boost_their_channel() {
    let mut engine = engine_with(|s| {
        s.hero_counts[0] = 9;
        s.hero_counts[2] = 4;
    });
    assert_eq!(engine.state().click_damage, 10);
    assert_eq!(engine.state().dps, 100);

    assert_eq!(engine.level_up_artifact("artifact_click"), Ok(1));
    assert_eq!(engine.state().click_damage, 11);
    assert_eq!(engine.state().dps, 100);

    assert_eq!(engine.level_up_artifact("artifact_dps"), Ok(1));
    assert_eq!(engine.state().dps, 112);

    assert_eq!(
        engine.level_up_artifact("artifact_nope"),
        Err(Rejection::UnknownArtifact("artifact_nope".to_string()))
    );
    assert_eq!(engine.view().artifacts[0].level, 1);
}

#[test]
fn test_configured_tick_period_scales_damage() {
    let config = EngineConfig {
        tick_interval_ms: 250,
        ..EngineConfig::default()
    };
    let catalog = Catalog::default();
    let mut state = GameState::new(catalog.heroes.len(), 0);
    state.hero_counts[1] = 2;
    let mut engine = Engine::from_state(state, catalog, config).unwrap();

    assert_eq!(engine.tick(), vec![TickEvent::Damage { amount: 2.5 }]);
}
