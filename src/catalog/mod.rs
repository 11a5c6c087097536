//! Static game data injected into the engine.
//!
//! The catalog is immutable once the engine is built. Hero order matters:
//! saved hero counts are aligned to it by position.

mod data;
mod types;

pub use data::{default_artifacts, default_heroes, default_skills};
pub use types::*;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub heroes: Vec<HeroDef>,
    #[serde(default)]
    pub skills: Vec<SkillDef>,
    #[serde(default)]
    pub artifacts: Vec<ArtifactDef>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            heroes: default_heroes(),
            skills: default_skills(),
            artifacts: default_artifacts(),
        }
    }
}

impl Catalog {
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn hero(&self, index: usize) -> Option<&HeroDef> {
        self.heroes.get(index)
    }

    pub fn skill(&self, id: &str) -> Option<&SkillDef> {
        self.skills.iter().find(|s| s.id == id)
    }

    pub fn artifact(&self, id: &str) -> Option<&ArtifactDef> {
        self.artifacts.iter().find(|a| a.id == id)
    }

    /// All artifacts feeding the given channel.
    pub fn artifacts_for(&self, channel: ArtifactChannel) -> impl Iterator<Item = &ArtifactDef> {
        self.artifacts.iter().filter(move |a| a.channel == channel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_shape() {
        let catalog = Catalog::default();
        assert_eq!(catalog.heroes.len(), 7);
        assert_eq!(catalog.heroes[0].hero_type, HeroType::Click);
        assert!(catalog.heroes[1..]
            .iter()
            .all(|h| h.hero_type == HeroType::Dps));
        assert_eq!(catalog.artifacts.len(), 3);
    }

    #[test]
    fn test_skills_sorted_by_unlock_level() {
        let skills = default_skills();
        assert!(skills
            .windows(2)
            .all(|w| w[0].unlock_level <= w[1].unlock_level));
    }

    #[test]
    fn test_lookups() {
        let catalog = Catalog::default();
        assert_eq!(catalog.hero(1).map(|h| h.base_cost), Some(50));
        assert!(catalog.hero(99).is_none());
        assert!(catalog.skill("skill_strike").is_some());
        assert!(catalog.skill("nope").is_none());
        assert_eq!(
            catalog.artifact("artifact_gold").map(|a| a.channel),
            Some(ArtifactChannel::Gold)
        );
        assert_eq!(catalog.artifacts_for(ArtifactChannel::Dps).count(), 1);
    }

    #[test]
    fn test_hero_icon_is_first_token() {
        let catalog = Catalog::default();
        assert_eq!(catalog.heroes[2].icon(), "🏹");
    }

    #[test]
    fn test_catalog_from_json_defaults_optional_lists() {
        let json = r#"{"heroes": [{
            "id": "h", "name": "X Hero", "description": "d", "hero_type": "dps",
            "base_value": 3, "base_cost": 7, "cost_multiplier": 1.1
        }]}"#;
        let catalog = Catalog::from_json_str(json).unwrap();
        assert_eq!(catalog.heroes.len(), 1);
        assert!(catalog.skills.is_empty());
        assert!(catalog.artifacts.is_empty());
    }
}
