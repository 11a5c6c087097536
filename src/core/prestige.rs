use super::balance::{pending_souls, soul_multiplier};
use super::combat::spawn_monster;
use super::config::EngineConfig;
use super::game_state::GameState;
use super::rejection::Rejection;
use super::stats::recalc;
use crate::catalog::Catalog;
use tracing::info;

/// Checks if the player can prestige
///
/// # Returns
/// true if the current stage yields at least one soul
pub fn can_prestige(state: &GameState, config: &EngineConfig) -> bool {
    pending_souls(state.level, config) > 0
}

/// Soul multiplier the player would have after prestiging now.
pub fn multiplier_after_prestige(state: &GameState, config: &EngineConfig) -> f64 {
    soul_multiplier(
        state.souls.saturating_add(pending_souls(state.level, config)),
        config,
    )
}

/// Trades stage progress for souls, wiping gold, stages, bosses and heroes.
///
/// Artifacts and souls survive. Stats are recomputed and a fresh stage-1
/// monster is spawned. Returns the souls gained.
pub fn perform_prestige(
    state: &mut GameState,
    catalog: &Catalog,
    config: &EngineConfig,
) -> Result<u64, Rejection> {
    let gained = pending_souls(state.level, config);
    if gained == 0 {
        return Err(Rejection::NoPendingSouls {
            min_stage: config.souls_per_stage_divisor,
        });
    }

    let from_level = state.level;
    state.souls = state.souls.saturating_add(gained);
    state.gold = 0;
    state.level = 1;
    state.kills = 0;
    state.highest_cleared_boss_stage = 0;
    state.boss_challenge.clear();
    state.hero_counts.iter_mut().for_each(|count| *count = 0);

    recalc(state, catalog, config);
    spawn_monster(state, config);

    info!(from_level, gained, total_souls = state.souls, "prestige");
    Ok(gained)
}
