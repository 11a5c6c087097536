//! Built-in hero, skill and artifact definitions.

use super::types::*;

/// Returns the built-in heroes in purchase-list order.
pub fn default_heroes() -> Vec<HeroDef> {
    // (id, name, description, type, value, base cost, cost multiplier)
    let rows: [(&str, &str, &str, HeroType, u64, u64, f64); 7] = [
        ("h_click", "💪 Arm Training", "+1 base click", HeroType::Click, 1, 10, 1.5),
        ("h_1", "🗡️ Squire", "+5 base DPS", HeroType::Dps, 5, 50, 1.15),
        ("h_2", "🏹 Elf Archer", "+25 base DPS", HeroType::Dps, 25, 250, 1.15),
        ("h_3", "🔥 Fire Mage", "+100 base DPS", HeroType::Dps, 100, 1_000, 1.15),
        ("h_4", "🛡️ Paladin", "+500 base DPS", HeroType::Dps, 500, 4_000, 1.15),
        ("h_5", "⚔️ Shadow Assassin", "+2500 base DPS", HeroType::Dps, 2_500, 20_000, 1.15),
        ("h_6", "🐉 Dragon Knight", "+10000 base DPS", HeroType::Dps, 10_000, 100_000, 1.15),
    ];

    rows.iter()
        .map(|&(id, name, description, hero_type, base_value, base_cost, cost_multiplier)| HeroDef {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            hero_type,
            base_value,
            base_cost,
            cost_multiplier,
        })
        .collect()
}

/// Returns the built-in active skills, ordered by unlock level.
pub fn default_skills() -> Vec<SkillDef> {
    vec![
        SkillDef {
            id: "skill_strike".to_string(),
            icon: "⚡".to_string(),
            name: "Power Strike".to_string(),
            unlock_level: 5,
            cooldown_ms: 10_000,
            damage_multiplier: 5.0,
        },
        SkillDef {
            id: "skill_meteor".to_string(),
            icon: "☄️".to_string(),
            name: "Meteor".to_string(),
            unlock_level: 15,
            cooldown_ms: 30_000,
            damage_multiplier: 20.0,
        },
        SkillDef {
            id: "skill_storm".to_string(),
            icon: "🌪️".to_string(),
            name: "Blade Storm".to_string(),
            unlock_level: 30,
            cooldown_ms: 60_000,
            damage_multiplier: 50.0,
        },
    ]
}

/// Returns the built-in artifacts, one per stat channel.
pub fn default_artifacts() -> Vec<ArtifactDef> {
    vec![
        ArtifactDef {
            id: "artifact_click".to_string(),
            icon: "🧤".to_string(),
            name: "Gauntlet of Fury".to_string(),
            channel: ArtifactChannel::Click,
            per_level_bonus: 0.15,
        },
        ArtifactDef {
            id: "artifact_dps".to_string(),
            icon: "📯".to_string(),
            name: "War Horn".to_string(),
            channel: ArtifactChannel::Dps,
            per_level_bonus: 0.12,
        },
        ArtifactDef {
            id: "artifact_gold".to_string(),
            icon: "🪙".to_string(),
            name: "Midas Coin".to_string(),
            channel: ArtifactChannel::Gold,
            per_level_bonus: 0.1,
        },
    ]
}
