use super::constants::{BASE_CLICK_DAMAGE, BASE_DPS, MONSTER_HP_BASE};
use std::collections::BTreeMap;

/// The enemy currently on screen. Replaced on every spawn.
#[derive(Debug, Clone, PartialEq)]
pub struct Monster {
    pub max_hp: u64,
    pub hp: f64,
    pub is_dead: bool,
    /// Time left before the next spawn after a regular kill.
    pub respawn_in_ms: Option<u32>,
}

impl Monster {
    pub fn new(max_hp: u64) -> Self {
        Self {
            max_hp,
            hp: max_hp as f64,
            is_dead: false,
            respawn_in_ms: None,
        }
    }

    /// Fraction of HP remaining, for health bars.
    pub fn hp_fraction(&self) -> f64 {
        if self.max_hp == 0 {
            0.0
        } else {
            (self.hp / self.max_hp as f64).clamp(0.0, 1.0)
        }
    }
}

/// A timed boss fight. The record always exists; `active` says whether a
/// fight is running.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BossChallenge {
    pub active: bool,
    pub stage: u32,
    pub required_damage: u64,
    pub damage_done: f64,
    pub time_left_ms: u64,
}

impl BossChallenge {
    pub fn remaining_damage(&self) -> f64 {
        (self.required_damage as f64 - self.damage_done).max(0.0)
    }

    /// Back to the idle shape.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// All mutable game progress. Owned by the engine; everyone else reads it.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub gold: u64,
    pub level: u32,
    pub kills: u32,
    pub souls: u64,
    /// Derived by the stat aggregator, never written elsewhere.
    pub click_damage: u64,
    /// Derived by the stat aggregator, never written elsewhere.
    pub dps: u64,
    pub highest_cleared_boss_stage: u32,
    pub boss_challenge: BossChallenge,
    /// Unix seconds of the last save, anchor for offline progress.
    pub last_save_time: i64,
    /// Artifact id -> level.
    pub artifacts: BTreeMap<String, u32>,
    /// Owned copies per hero, aligned by position with the catalog.
    pub hero_counts: Vec<u32>,
    pub monster: Monster,
    /// Skill id -> cooldown left (transient, not saved).
    pub skill_cooldowns: BTreeMap<String, u32>,
}

impl GameState {
    /// Creates a fresh session for a catalog with `hero_count` heroes.
    pub fn new(hero_count: usize, current_time: i64) -> Self {
        Self {
            gold: 0,
            level: 1,
            kills: 0,
            souls: 0,
            click_damage: BASE_CLICK_DAMAGE,
            dps: BASE_DPS,
            highest_cleared_boss_stage: 0,
            boss_challenge: BossChallenge::default(),
            last_save_time: current_time,
            artifacts: BTreeMap::new(),
            hero_counts: vec![0; hero_count],
            monster: Monster::new(MONSTER_HP_BASE as u64),
            skill_cooldowns: BTreeMap::new(),
        }
    }

    pub fn artifact_level(&self, artifact_id: &str) -> u32 {
        self.artifacts.get(artifact_id).copied().unwrap_or(0)
    }

    pub fn hero_count(&self, index: usize) -> u32 {
        self.hero_counts.get(index).copied().unwrap_or(0)
    }

    pub fn skill_cooldown(&self, skill_id: &str) -> u32 {
        self.skill_cooldowns.get(skill_id).copied().unwrap_or(0)
    }
}
