//! Integration tests: save, reload and sanitize sessions.

use clicker::catalog::Catalog;
use clicker::save::{SaveError, SaveManager, Snapshot};
use clicker::{Engine, EngineConfig, GameState};
use serde_json::json;
use std::fs;
use std::path::PathBuf;

fn temp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "clicker-it-{}-{}",
        name,
        std::process::id()
    ));
    let _ = fs::remove_dir_all(&dir);
    dir
}

fn restore(snapshot: &Snapshot, now: i64) -> Engine {
    Engine::from_snapshot(snapshot, Catalog::default(), EngineConfig::default(), now)
        .unwrap()
}

#[test]
fn test_session_survives_save_and_reload() {
    let dir = temp_dir("reload");
    let saves = SaveManager::new_in(&dir).expect("create save dir");

    let catalog = Catalog::default();
    let mut state = GameState::new(catalog.heroes.len(), 0);
    state.gold = 12_345;
    state.level = 14;
    state.kills = 3;
    state.souls = 4;
    state.highest_cleared_boss_stage = 10;
    state.hero_counts[0] = 2;
    state.hero_counts[2] = 5;
    let mut engine = Engine::from_state(state, catalog, EngineConfig::default()).unwrap();
    engine.level_up_artifact("artifact_dps").unwrap();

    saves.save(&engine.snapshot(1_000)).unwrap();
    let loaded = saves.load().unwrap().expect("snapshot present");
    let restored = restore(&loaded, 1_005);

    let (a, b) = (engine.state(), restored.state());
    assert_eq!(b.gold, a.gold);
    assert_eq!(b.level, a.level);
    assert_eq!(b.kills, a.kills);
    assert_eq!(b.souls, a.souls);
    assert_eq!(b.highest_cleared_boss_stage, a.highest_cleared_boss_stage);
    assert_eq!(b.hero_counts, a.hero_counts);
    assert_eq!(b.artifacts, a.artifacts);
    assert_eq!(b.click_damage, a.click_damage);
    assert_eq!(b.dps, a.dps);
    assert_eq!(b.last_save_time, 1_000);
    assert_eq!(b.monster.max_hp, 3_522);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_boss_fight_is_not_persisted() {
    let catalog = Catalog::default();
    let mut state = GameState::new(catalog.heroes.len(), 0);
    state.level = 9;
    state.kills = 10;
    let mut engine = Engine::from_state(state, catalog, EngineConfig::default()).unwrap();
    engine.start_boss().unwrap();

    let restored = restore(&engine.snapshot(50), 60);
    assert!(!restored.state().boss_challenge.active);
    assert!(restored.is_waiting_boss());
    assert_eq!(restored.state().monster.max_hp, 370);
}

#[test]
fn test_hostile_snapshot_is_clamped() {
    let value = json!({
        "gold": -50,
        "level": 500,
        "kills": 99,
        "souls": "lots",
        "highestClearedBossStage": 23,
        "lastSaveTime": 10,
        "heroesLevels": [3, -1, 2.5, 1, 1, 1, 1, 9, 9],
        "artifacts": {"artifact_click": 1, "artifact_fake": 7}
    });
    let snapshot = Snapshot::from_value(&value).expect("object");
    let engine = restore(&snapshot, 20);
    let state = engine.state();

    assert_eq!(state.gold, 0);
    assert_eq!(state.souls, 0);
    // Gate rounds down to 20, so the player is capped below gate 30
    assert_eq!(state.highest_cleared_boss_stage, 20);
    assert_eq!(state.level, 29);
    assert_eq!(state.kills, 10);
    assert_eq!(state.hero_counts, vec![3, 0, 0, 1, 1, 1, 1]);
    assert_eq!(state.artifact_level("artifact_click"), 1);
    assert!(!state.artifacts.contains_key("artifact_fake"));
    assert_eq!(state.last_save_time, 10);
}

#[test]
fn test_extreme_numbers_load_without_panicking() {
    let value = json!({ "highestClearedBossStage": 4_294_967_295u64, "level": 3 });
    let snapshot = Snapshot::from_value(&value).expect("object");
    let engine = restore(&snapshot, 100);
    let view = engine.view();
    assert_eq!(view.level, 3);
    assert_eq!(view.highest_cleared_boss_stage, 4_294_967_280);
    assert_eq!(view.max_reachable_stage, 4_294_967_289);
    assert!(!view.waiting_boss);

    let value = json!({
        "gold": u64::MAX,
        "souls": u64::MAX,
        "lastSaveTime": i64::MIN,
        "heroesLevels": [0, u32::MAX]
    });
    let snapshot = Snapshot::from_value(&value).expect("object");
    let mut engine = restore(&snapshot, 1_700_000_000);
    assert_eq!(engine.state().last_save_time, 1_700_000_000);
    assert!(engine.process_offline(1_700_000_000).is_none());
    engine.tick();
    let _ = engine.buy_hero(1);
    assert_eq!(engine.state().hero_counts[1], u32::MAX);
    let _ = engine.view();
}

#[test]
fn test_missing_save_time_skips_offline_progress() {
    let snapshot = Snapshot {
        heroes_levels: vec![0, 10],
        last_save_time: None,
        ..Snapshot::default()
    };
    let mut engine = restore(&snapshot, 5_000);
    assert_eq!(engine.state().last_save_time, 5_000);
    assert!(engine.process_offline(5_000).is_none());
    assert_eq!(engine.state().level, 1);
}

#[test]
fn test_non_object_payload_starts_fresh() {
    assert_eq!(Snapshot::from_json_slice(b"[1, 2, 3]").unwrap(), None);
    assert!(Snapshot::from_json_slice(b"{not json").is_err());
}

#[test]
fn test_tampered_save_is_rejected() {
    let dir = temp_dir("tamper");
    let saves = SaveManager::new_in(&dir).unwrap();
    saves.save(&Snapshot::default()).unwrap();

    let path = dir.join(clicker::core::constants::SAVE_FILE_NAME);
    let mut bytes = fs::read(&path).unwrap();
    let last = bytes.len() - 40;
    bytes[last] ^= 0x20;
    fs::write(&path, &bytes).unwrap();

    assert!(matches!(saves.load(), Err(SaveError::ChecksumMismatch)));

    saves.clear().unwrap();
    assert!(matches!(saves.load(), Ok(None)));
    let _ = fs::remove_dir_all(&dir);
}
