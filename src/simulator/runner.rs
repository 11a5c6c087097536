//! Main simulation runner.
//!
//! Each run drives a real `Engine` tick by tick with a simple scripted
//! player: random clicks at the configured rate, skills fired when ready,
//! the cheapest affordable hero bought whenever possible, every waiting boss
//! challenged, and an optional prestige at a target stage. Statistics are
//! gathered from the engine's `TickEvent` stream.

use super::config::SimConfig;
use super::report::SimReport;
use crate::catalog::Catalog;
use crate::core::config::ConfigError;
use crate::core::engine::Engine;
use crate::core::tick::TickEvent;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Everything recorded about one simulated playthrough.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunStats {
    pub total_ticks: u64,
    pub final_level: u32,
    pub highest_cleared_boss_stage: u32,
    pub total_kills: u64,
    pub total_gold: u64,
    pub total_clicks: u64,
    pub skills_cast: u64,
    pub heroes_bought: u64,
    pub boss_attempts: u32,
    pub boss_clears: u32,
    pub boss_failures: u32,
    pub prestiges: u32,
    pub souls: u64,
    pub final_click_damage: u64,
    pub final_dps: u64,
    /// Boss stage -> simulated seconds at its first clear (within the current prestige cycle).
    pub gate_seconds: BTreeMap<u32, f64>,
}

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> Result<SimReport, ConfigError> {
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        // Create RNG for this run
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(run_idx as u64)),
            None => ChaCha8Rng::from_entropy(),
        };

        let run = simulate_single_run(config, &Catalog::default(), &mut rng)?;
        if config.verbosity >= 2 {
            info!(
                run = run_idx + 1,
                of = config.num_runs,
                level = run.final_level,
                boss = run.highest_cleared_boss_stage,
                kills = run.total_kills,
                prestiges = run.prestiges,
                "run finished"
            );
        }
        all_runs.push(run);
    }

    Ok(SimReport::from_runs(all_runs, config.seconds_per_run))
}

/// Clicks to land this tick: the whole part of the per-tick rate, plus one
/// more with probability equal to the fractional part.
fn clicks_this_tick(clicks_per_tick: f64, rng: &mut ChaCha8Rng) -> u32 {
    let whole = clicks_per_tick.floor();
    let extra = if rng.gen::<f64>() < clicks_per_tick - whole {
        1
    } else {
        0
    };
    whole as u32 + extra
}

/// Index of the cheapest hero the player can afford right now.
fn cheapest_affordable_hero(engine: &Engine) -> Option<usize> {
    let gold = engine.state().gold;
    (0..engine.catalog().heroes.len())
        .filter_map(|index| engine.hero_cost(index).map(|cost| (index, cost)))
        .filter(|&(_, cost)| cost <= gold)
        .min_by_key(|&(_, cost)| cost)
        .map(|(index, _)| index)
}

/// Simulate a single run with a fresh engine.
pub fn simulate_single_run(
    config: &SimConfig,
    catalog: &Catalog,
    rng: &mut ChaCha8Rng,
) -> Result<RunStats, ConfigError> {
    let mut engine = Engine::new(catalog.clone(), config.engine.clone(), 0)?;
    let max_ticks = config.max_ticks();
    let tick_seconds = engine.config().tick_interval_ms as f64 / 1000.0;
    let clicks_per_tick = config.clicks_per_second.max(0.0) / engine.config().ticks_per_second();
    let skill_ids: Vec<String> = catalog.skills.iter().map(|s| s.id.clone()).collect();

    let mut stats = RunStats {
        total_ticks: 0,
        final_level: 1,
        highest_cleared_boss_stage: 0,
        total_kills: 0,
        total_gold: 0,
        total_clicks: 0,
        skills_cast: 0,
        heroes_bought: 0,
        boss_attempts: 0,
        boss_clears: 0,
        boss_failures: 0,
        prestiges: 0,
        souls: 0,
        final_click_damage: 0,
        final_dps: 0,
        gate_seconds: BTreeMap::new(),
    };
    let mut cycle_start_tick: u64 = 0;
    let mut events = Vec::new();

    for tick in 0..max_ticks {
        // Spend gold before anything else so new heroes hit this tick
        while let Some(index) = cheapest_affordable_hero(&engine) {
            if engine.buy_hero(index).is_err() {
                break;
            }
            stats.heroes_bought += 1;
        }

        if let Some(target) = config.prestige_at {
            if engine.state().level >= target && !engine.state().boss_challenge.active {
                if let Ok(souls) = engine.prestige() {
                    debug!(tick, souls, "simulated prestige");
                    stats.prestiges += 1;
                    cycle_start_tick = tick;
                }
            }
        }

        if engine.is_waiting_boss() && engine.start_boss().is_ok() {
            stats.boss_attempts += 1;
        }

        for skill_id in &skill_ids {
            if let Ok(skill_events) = engine.cast_skill(skill_id) {
                stats.skills_cast += 1;
                events.extend(skill_events);
            }
        }

        for _ in 0..clicks_this_tick(clicks_per_tick, rng) {
            stats.total_clicks += 1;
            events.extend(engine.click());
        }

        events.extend(engine.tick());

        for event in events.drain(..) {
            match event {
                TickEvent::Killed { gold } => {
                    stats.total_kills += 1;
                    stats.total_gold = stats.total_gold.saturating_add(gold);
                }
                TickEvent::BossCleared { stage } => {
                    stats.boss_clears += 1;
                    let seconds = (tick + 1 - cycle_start_tick) as f64 * tick_seconds;
                    stats.gate_seconds.entry(stage).or_insert(seconds);
                }
                TickEvent::BossFailed { .. } => stats.boss_failures += 1,
                _ => {}
            }
        }
        stats.total_ticks = tick + 1;
    }

    let state = engine.state();
    stats.final_level = state.level;
    stats.highest_cleared_boss_stage = state.highest_cleared_boss_stage;
    stats.souls = state.souls;
    stats.final_click_damage = state.click_damage;
    stats.final_dps = state.dps;
    Ok(stats)
}
