//! The engine facade.
//!
//! `Engine` owns the single `GameState` together with the catalog and the
//! tunables, and is the only way the front-ends mutate progress. Every entry
//! point runs to completion before the next one starts, so the tick, clicks
//! and boss timer never observe each other half-done.

use super::balance::{
    hero_cost, max_reachable_stage, pending_souls, skill_damage, soul_multiplier,
};
use super::boss::{is_waiting_boss, start_boss_challenge};
use super::combat::spawn_monster;
use super::config::{ConfigError, EngineConfig};
use super::game_state::GameState;
use super::offline::{process_offline_progression, OfflineReport};
use super::prestige::{can_prestige, multiplier_after_prestige, perform_prestige};
use super::rejection::Rejection;
use super::stats::{channel_multiplier, recalc};
use super::tick::{apply_damage, game_tick, TickEvent};
use crate::catalog::{ArtifactChannel, Catalog, HeroType};
use crate::save::Snapshot;
use tracing::debug;

/// Read-only projection handed to the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub struct GameView {
    pub gold: u64,
    pub level: u32,
    pub kills: u32,
    pub kills_required: u32,
    pub souls: u64,
    pub pending_souls: u64,
    pub soul_multiplier: f64,
    pub multiplier_after_prestige: f64,
    pub can_prestige: bool,
    pub min_prestige_stage: u32,
    pub click_damage: u64,
    pub dps: u64,
    pub highest_cleared_boss_stage: u32,
    pub max_reachable_stage: u32,
    pub monster_hp: f64,
    pub monster_max_hp: u64,
    pub monster_dead: bool,
    pub waiting_boss: bool,
    pub boss: Option<BossView>,
    pub heroes: Vec<HeroView>,
    pub skills: Vec<SkillView>,
    pub artifacts: Vec<ArtifactView>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BossView {
    pub stage: u32,
    pub time_left_ms: u64,
    pub duration_ms: u64,
    pub damage_done: f64,
    pub required_damage: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeroView {
    pub name: String,
    pub hero_type: HeroType,
    pub value: u64,
    pub owned: u32,
    pub cost: u64,
    pub affordable: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkillView {
    pub id: String,
    pub icon: String,
    pub name: String,
    pub unlock_level: u32,
    pub unlocked: bool,
    pub cooldown_left_ms: u32,
    pub ready: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArtifactView {
    pub id: String,
    pub icon: String,
    pub name: String,
    pub channel: ArtifactChannel,
    pub level: u32,
}

pub struct Engine {
    state: GameState,
    catalog: Catalog,
    config: EngineConfig,
}

impl Engine {
    /// Starts a fresh session at stage 1.
    pub fn new(catalog: Catalog, config: EngineConfig, now: i64) -> Result<Self, ConfigError> {
        let state = GameState::new(catalog.heroes.len(), now);
        Self::from_state(state, catalog, config)
    }

    /// Wraps an existing state, recomputing derived stats and the monster.
    ///
    /// Fails when `config` does not pass [`EngineConfig::validate`].
    pub fn from_state(
        mut state: GameState,
        catalog: Catalog,
        config: EngineConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        state.hero_counts.resize(catalog.heroes.len(), 0);
        recalc(&mut state, &catalog, &config);
        spawn_monster(&mut state, &config);
        Ok(Self {
            state,
            catalog,
            config,
        })
    }

    /// Restores a session from a sanitized snapshot. `now` stands in for a
    /// missing save time.
    pub fn from_snapshot(
        snapshot: &Snapshot,
        catalog: Catalog,
        config: EngineConfig,
        now: i64,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let state = snapshot.to_state(&catalog, &config, now);
        Self::from_state(state, catalog, config)
    }

    /// Captures the persistent part of the state, stamped with `now`.
    pub fn snapshot(&self, now: i64) -> Snapshot {
        Snapshot::capture(&self.state, now)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Advances the session by one tick period.
    pub fn tick(&mut self) -> Vec<TickEvent> {
        game_tick(&mut self.state, &self.catalog, &self.config)
    }

    /// Hits the monster for `click_damage`.
    pub fn click(&mut self) -> Vec<TickEvent> {
        let amount = self.state.click_damage as f64;
        self.deal_damage(amount)
    }

    /// Applies arbitrary damage through the combat resolver.
    pub fn deal_damage(&mut self, amount: f64) -> Vec<TickEvent> {
        let mut events = Vec::new();
        apply_damage(
            &mut self.state,
            &self.catalog,
            &self.config,
            amount,
            &mut events,
        );
        events
    }

    /// Price of the next copy of hero `index`.
    pub fn hero_cost(&self, index: usize) -> Option<u64> {
        self.catalog
            .hero(index)
            .map(|hero| hero_cost(hero, self.state.hero_count(index)))
    }

    /// Buys one copy of hero `index`. Returns the gold spent.
    pub fn buy_hero(&mut self, index: usize) -> Result<u64, Rejection> {
        let cost = self.hero_cost(index).ok_or(Rejection::UnknownHero(index))?;
        if self.state.gold < cost {
            return Err(Rejection::InsufficientGold {
                cost,
                gold: self.state.gold,
            });
        }

        self.state.gold -= cost;
        self.state.hero_counts[index] = self.state.hero_counts[index].saturating_add(1);
        recalc(&mut self.state, &self.catalog, &self.config);

        debug!(
            index,
            cost,
            owned = self.state.hero_counts[index],
            "hero bought"
        );
        Ok(cost)
    }

    pub fn is_waiting_boss(&self) -> bool {
        is_waiting_boss(&self.state, &self.config)
    }

    /// Opens the boss fight for the next gate. Returns the boss stage.
    pub fn start_boss(&mut self) -> Result<u32, Rejection> {
        start_boss_challenge(&mut self.state, &self.config)
    }

    pub fn pending_souls(&self) -> u64 {
        pending_souls(self.state.level, &self.config)
    }

    pub fn can_prestige(&self) -> bool {
        can_prestige(&self.state, &self.config)
    }

    /// Resets the run for souls. Returns the souls gained.
    pub fn prestige(&mut self) -> Result<u64, Rejection> {
        perform_prestige(&mut self.state, &self.catalog, &self.config)
    }

    /// Fires an active skill at the current monster.
    ///
    /// The skill must be unlocked by stage and off cooldown. Damage is
    /// `max(1, floor((click + dps * 0.5) * multiplier))`.
    pub fn cast_skill(&mut self, skill_id: &str) -> Result<Vec<TickEvent>, Rejection> {
        let skill = self
            .catalog
            .skill(skill_id)
            .ok_or_else(|| Rejection::UnknownSkill(skill_id.to_string()))?;

        if self.state.level < skill.unlock_level {
            return Err(Rejection::SkillLocked {
                unlock_level: skill.unlock_level,
            });
        }
        let remaining_ms = self.state.skill_cooldown(skill_id);
        if remaining_ms > 0 {
            return Err(Rejection::SkillOnCooldown { remaining_ms });
        }

        let amount = skill_damage(
            self.state.click_damage,
            self.state.dps,
            skill.damage_multiplier,
        );
        if skill.cooldown_ms > 0 {
            self.state
                .skill_cooldowns
                .insert(skill.id.clone(), skill.cooldown_ms);
        }
        debug!(skill = skill_id, amount, "skill cast");

        Ok(self.deal_damage(amount as f64))
    }

    /// Raises an artifact by one level. Returns the new level.
    pub fn level_up_artifact(&mut self, artifact_id: &str) -> Result<u32, Rejection> {
        let artifact = self
            .catalog
            .artifact(artifact_id)
            .ok_or_else(|| Rejection::UnknownArtifact(artifact_id.to_string()))?;

        let level = self.state.artifacts.entry(artifact.id.clone()).or_insert(0);
        *level = level.saturating_add(1);
        let level = *level;

        recalc(&mut self.state, &self.catalog, &self.config);
        debug!(artifact = artifact_id, level, "artifact levelled");
        Ok(level)
    }

    /// Fast-forwards the time since the last save. See `process_offline_progression`.
    pub fn process_offline(&mut self, now: i64) -> Option<OfflineReport> {
        let report =
            process_offline_progression(&mut self.state, &self.catalog, &self.config, now)?;
        if !self.state.monster.is_dead {
            // Stage may have moved; show the right monster
            spawn_monster(&mut self.state, &self.config);
        }
        Some(report)
    }

    pub fn max_reachable_stage(&self) -> u32 {
        max_reachable_stage(self.state.highest_cleared_boss_stage, &self.config)
    }

    /// Gold multiplier from artifacts, for display.
    pub fn gold_multiplier(&self) -> f64 {
        channel_multiplier(&self.state, &self.catalog, ArtifactChannel::Gold)
    }

    pub fn view(&self) -> GameView {
        let state = &self.state;
        let boss = state.boss_challenge.active.then(|| BossView {
            stage: state.boss_challenge.stage,
            time_left_ms: state.boss_challenge.time_left_ms,
            duration_ms: self.config.boss_challenge_ms(),
            damage_done: state.boss_challenge.damage_done,
            required_damage: state.boss_challenge.required_damage,
        });

        let heroes = self
            .catalog
            .heroes
            .iter()
            .enumerate()
            .map(|(index, hero)| {
                let owned = state.hero_count(index);
                let cost = hero_cost(hero, owned);
                HeroView {
                    name: hero.name.clone(),
                    hero_type: hero.hero_type,
                    value: hero.base_value,
                    owned,
                    cost,
                    affordable: state.gold >= cost,
                }
            })
            .collect();

        let skills = self
            .catalog
            .skills
            .iter()
            .map(|skill| {
                let unlocked = state.level >= skill.unlock_level;
                let cooldown_left_ms = state.skill_cooldown(&skill.id);
                SkillView {
                    id: skill.id.clone(),
                    icon: skill.icon.clone(),
                    name: skill.name.clone(),
                    unlock_level: skill.unlock_level,
                    unlocked,
                    cooldown_left_ms,
                    ready: unlocked && cooldown_left_ms == 0,
                }
            })
            .collect();

        let artifacts = self
            .catalog
            .artifacts
            .iter()
            .map(|artifact| ArtifactView {
                id: artifact.id.clone(),
                icon: artifact.icon.clone(),
                name: artifact.name.clone(),
                channel: artifact.channel,
                level: state.artifact_level(&artifact.id),
            })
            .collect();

        GameView {
            gold: state.gold,
            level: state.level,
            kills: state.kills,
            kills_required: self.config.kills_required,
            souls: state.souls,
            pending_souls: self.pending_souls(),
            soul_multiplier: soul_multiplier(state.souls, &self.config),
            multiplier_after_prestige: multiplier_after_prestige(state, &self.config),
            can_prestige: self.can_prestige(),
            min_prestige_stage: self.config.souls_per_stage_divisor,
            click_damage: state.click_damage,
            dps: state.dps,
            highest_cleared_boss_stage: state.highest_cleared_boss_stage,
            max_reachable_stage: self.max_reachable_stage(),
            monster_hp: state.monster.hp,
            monster_max_hp: state.monster.max_hp,
            monster_dead: state.monster.is_dead,
            waiting_boss: self.is_waiting_boss(),
            boss,
            heroes,
            skills,
            artifacts,
        }
    }
}
