//! The persisted slice of `GameState`.
//!
//! Only durable progress is stored. Derived stats, the monster, cooldowns and
//! any running boss fight are rebuilt on load. Reading is field by field so a
//! damaged or hand-edited file degrades to defaults instead of failing whole.

use crate::catalog::Catalog;
use crate::core::balance::{last_clearable_gate, max_reachable_stage};
use crate::core::config::EngineConfig;
use crate::core::game_state::GameState;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Written with serde; read back only through [`Snapshot::from_value`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub gold: u64,
    pub level: u32,
    pub kills: u32,
    pub souls: u64,
    pub highest_cleared_boss_stage: u32,
    /// Unix seconds. `None` when the stored value was missing or unusable.
    pub last_save_time: Option<i64>,
    /// Owned copies per hero, aligned by position with the catalog.
    pub heroes_levels: Vec<u32>,
    pub artifacts: BTreeMap<String, u32>,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            gold: 0,
            level: 1,
            kills: 0,
            souls: 0,
            highest_cleared_boss_stage: 0,
            last_save_time: None,
            heroes_levels: Vec::new(),
            artifacts: BTreeMap::new(),
        }
    }
}

fn read_u64(obj: &Map<String, Value>, key: &str) -> Option<u64> {
    obj.get(key).and_then(Value::as_u64)
}

fn read_u32(obj: &Map<String, Value>, key: &str) -> Option<u32> {
    read_u64(obj, key).and_then(|n| u32::try_from(n).ok())
}

fn read_counts(obj: &Map<String, Value>, key: &str) -> Vec<u32> {
    match obj.get(key) {
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| {
                item.as_u64()
                    .and_then(|n| u32::try_from(n).ok())
                    .unwrap_or(0)
            })
            .collect(),
        _ => Vec::new(),
    }
}

fn read_levels(obj: &Map<String, Value>, key: &str) -> BTreeMap<String, u32> {
    match obj.get(key) {
        Some(Value::Object(entries)) => entries
            .iter()
            .filter_map(|(id, level)| {
                let level = level.as_u64().and_then(|n| u32::try_from(n).ok())?;
                Some((id.clone(), level))
            })
            .collect(),
        _ => BTreeMap::new(),
    }
}

impl Snapshot {
    /// Records the durable part of `state`, stamped with `now`.
    pub fn capture(state: &GameState, now: i64) -> Self {
        Self {
            gold: state.gold,
            level: state.level,
            kills: state.kills,
            souls: state.souls,
            highest_cleared_boss_stage: state.highest_cleared_boss_stage,
            last_save_time: Some(now),
            heroes_levels: state.hero_counts.clone(),
            artifacts: state.artifacts.clone(),
        }
    }

    /// Reads a snapshot from arbitrary JSON.
    ///
    /// Returns `None` if the value is not an object. Otherwise each field that
    /// is missing, negative, fractional or of the wrong type takes its default.
    pub fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        let defaults = Self::default();

        Some(Self {
            gold: read_u64(obj, "gold").unwrap_or(defaults.gold),
            level: read_u32(obj, "level").unwrap_or(defaults.level),
            kills: read_u32(obj, "kills").unwrap_or(defaults.kills),
            souls: read_u64(obj, "souls").unwrap_or(defaults.souls),
            highest_cleared_boss_stage: read_u32(obj, "highestClearedBossStage")
                .unwrap_or(defaults.highest_cleared_boss_stage),
            last_save_time: obj
                .get("lastSaveTime")
                .and_then(Value::as_i64)
                .filter(|&t| t >= 0),
            heroes_levels: read_counts(obj, "heroesLevels"),
            artifacts: read_levels(obj, "artifacts"),
        })
    }

    /// Parses JSON text. Malformed text is an error; a non-object is `Ok(None)`.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Option<Self>, serde_json::Error> {
        let value: Value = serde_json::from_slice(bytes)?;
        Ok(Self::from_value(&value))
    }

    pub fn to_json_vec(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }

    /// Builds a game state from this snapshot, clamped into a reachable shape.
    ///
    /// - the cleared gate is rounded down to a real gate stage that still has
    ///   a locked gate after it
    /// - level is at least 1 and at most the last stage before the locked gate
    /// - kills never exceed `kills_required`
    /// - hero counts are padded or truncated to the catalog
    /// - unknown artifacts are dropped
    /// - a missing or negative save time falls back to `now`
    ///
    /// Derived stats and the monster are left for the engine to rebuild.
    pub fn to_state(&self, catalog: &Catalog, config: &EngineConfig, now: i64) -> GameState {
        let mut state = GameState::new(catalog.heroes.len(), self.last_save_time.unwrap_or(now));

        let interval = config.boss_stage_interval.max(1);
        let highest = self.highest_cleared_boss_stage.min(last_clearable_gate(config));
        state.highest_cleared_boss_stage = highest - highest % interval;
        state.level = self
            .level
            .max(1)
            .min(max_reachable_stage(state.highest_cleared_boss_stage, config).max(1));
        state.kills = self.kills.min(config.kills_required);
        state.gold = self.gold;
        state.souls = self.souls;

        for (slot, &count) in state.hero_counts.iter_mut().zip(&self.heroes_levels) {
            *slot = count;
        }
        state.artifacts = self
            .artifacts
            .iter()
            .filter(|(id, _)| catalog.artifact(id).is_some())
            .map(|(id, &level)| (id.clone(), level))
            .collect();

        state
    }
}
