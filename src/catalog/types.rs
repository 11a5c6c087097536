//! Catalog definition types.

use serde::{Deserialize, Serialize};

/// Which damage pool a hero feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeroType {
    Click,
    Dps,
}

/// A purchasable hero. Owned counts live in `GameState`, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroDef {
    pub id: String,
    pub name: String,
    pub description: String,
    pub hero_type: HeroType,
    pub base_value: u64,
    pub base_cost: u64,
    pub cost_multiplier: f64,
}

impl HeroDef {
    /// Icon shown in compact lists (first whitespace-separated token of the name).
    pub fn icon(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or("*")
    }
}

/// An active skill the player can trigger on a cooldown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillDef {
    pub id: String,
    pub icon: String,
    pub name: String,
    pub unlock_level: u32,
    pub cooldown_ms: u32,
    pub damage_multiplier: f64,
}

/// Stat channel an artifact multiplies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactChannel {
    Click,
    Dps,
    Gold,
}

/// A permanent upgrade whose level multiplies one channel by
/// `1 + level * per_level_bonus`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtifactDef {
    pub id: String,
    pub icon: String,
    pub name: String,
    pub channel: ArtifactChannel,
    pub per_level_bonus: f64,
}
