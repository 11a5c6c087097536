//! Stat aggregation: the single writer of `click_damage` and `dps`.

use super::balance::{artifact_multiplier, soul_multiplier};
use super::config::EngineConfig;
use super::constants::{BASE_CLICK_DAMAGE, BASE_DPS};
use super::game_state::GameState;
use crate::catalog::{ArtifactChannel, Catalog, HeroType};

/// Product of every artifact multiplier on `channel`.
pub fn channel_multiplier(state: &GameState, catalog: &Catalog, channel: ArtifactChannel) -> f64 {
    catalog
        .artifacts_for(channel)
        .map(|a| artifact_multiplier(state.artifact_level(&a.id), a.per_level_bonus))
        .product()
}

/// Recomputes click damage and dps from hero counts, souls and artifacts.
///
/// Call after any change to hero counts, souls or artifact levels.
pub fn recalc(state: &mut GameState, catalog: &Catalog, config: &EngineConfig) {
    let mut base_click = BASE_CLICK_DAMAGE;
    let mut base_dps = BASE_DPS;

    for (index, hero) in catalog.heroes.iter().enumerate() {
        let contribution = hero.base_value.saturating_mul(state.hero_count(index) as u64);
        match hero.hero_type {
            HeroType::Click => base_click = base_click.saturating_add(contribution),
            HeroType::Dps => base_dps = base_dps.saturating_add(contribution),
        }
    }

    let souls = soul_multiplier(state.souls, config);
    let click_mult = channel_multiplier(state, catalog, ArtifactChannel::Click);
    let dps_mult = channel_multiplier(state, catalog, ArtifactChannel::Dps);

    state.click_damage = (base_click as f64 * souls * click_mult).floor() as u64;
    state.dps = (base_dps as f64 * souls * dps_mult).floor() as u64;
}
