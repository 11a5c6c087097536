//! Simulation report generation.

use super::runner::RunStats;
use crate::utils::format::{format_number, time_text};
use serde::Serialize;
use std::collections::BTreeMap;

/// Per-gate aggregate across runs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GateSummary {
    pub stage: u32,
    /// Runs that cleared this gate at least once
    pub runs_reached: u32,
    pub avg_seconds_to_clear: f64,
}

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub seconds_per_run: u64,

    // Aggregated stats
    pub avg_final_level: f64,
    pub avg_highest_boss: f64,
    pub avg_total_kills: f64,
    pub avg_total_gold: f64,
    pub avg_heroes_bought: f64,
    pub avg_boss_attempts: f64,
    pub boss_clear_rate: f64,
    pub avg_prestiges: f64,
    pub avg_souls: f64,
    pub avg_final_click_damage: f64,
    pub avg_final_dps: f64,

    // Distribution data
    pub level_distribution: BTreeMap<u32, u32>,
    pub gates: Vec<GateSummary>,

    // Individual run stats for detailed analysis
    #[serde(skip)]
    pub run_stats: Vec<RunStats>,
}

fn average<F: Fn(&RunStats) -> f64>(runs: &[RunStats], f: F) -> f64 {
    if runs.is_empty() {
        return 0.0;
    }
    runs.iter().map(f).sum::<f64>() / runs.len() as f64
}

impl SimReport {
    /// Create a new report from completed run stats.
    pub fn from_runs(runs: Vec<RunStats>, seconds_per_run: u64) -> Self {
        let num_runs = runs.len() as u32;

        let total_attempts: u64 = runs.iter().map(|r| r.boss_attempts as u64).sum();
        let total_clears: u64 = runs.iter().map(|r| r.boss_clears as u64).sum();
        let boss_clear_rate = if total_attempts > 0 {
            total_clears as f64 / total_attempts as f64
        } else {
            0.0
        };

        let mut level_distribution = BTreeMap::new();
        for run in &runs {
            *level_distribution.entry(run.final_level).or_insert(0) += 1;
        }

        let mut gate_times: BTreeMap<u32, Vec<f64>> = BTreeMap::new();
        for run in &runs {
            for (&stage, &seconds) in &run.gate_seconds {
                gate_times.entry(stage).or_default().push(seconds);
            }
        }
        let gates = gate_times
            .into_iter()
            .map(|(stage, times)| GateSummary {
                stage,
                runs_reached: times.len() as u32,
                avg_seconds_to_clear: times.iter().sum::<f64>() / times.len() as f64,
            })
            .collect();

        Self {
            num_runs,
            seconds_per_run,
            avg_final_level: average(&runs, |r| r.final_level as f64),
            avg_highest_boss: average(&runs, |r| r.highest_cleared_boss_stage as f64),
            avg_total_kills: average(&runs, |r| r.total_kills as f64),
            avg_total_gold: average(&runs, |r| r.total_gold as f64),
            avg_heroes_bought: average(&runs, |r| r.heroes_bought as f64),
            avg_boss_attempts: average(&runs, |r| r.boss_attempts as f64),
            boss_clear_rate,
            avg_prestiges: average(&runs, |r| r.prestiges as f64),
            avg_souls: average(&runs, |r| r.souls as f64),
            avg_final_click_damage: average(&runs, |r| r.final_click_damage as f64),
            avg_final_dps: average(&runs, |r| r.final_dps as f64),
            level_distribution,
            gates,
            run_stats: runs,
        }
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs: {} x {} of play\n\n",
            self.num_runs,
            time_text(self.seconds_per_run)
        ));

        report.push_str("── PROGRESSION ──────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Final Stage:     {:.1}\n", self.avg_final_level));
        report.push_str(&format!("  Avg Highest Boss:    {:.1}\n", self.avg_highest_boss));
        report.push_str(&format!(
            "  Avg Total Kills:     {}\n",
            format_number(self.avg_total_kills)
        ));
        report.push_str(&format!(
            "  Avg Gold Earned:     {}\n",
            format_number(self.avg_total_gold)
        ));
        report.push_str(&format!("  Avg Heroes Bought:   {:.1}\n", self.avg_heroes_bought));
        report.push_str(&format!(
            "  Avg Final Click:     {}\n",
            format_number(self.avg_final_click_damage)
        ));
        report.push_str(&format!(
            "  Avg Final DPS:       {}\n\n",
            format_number(self.avg_final_dps)
        ));

        report.push_str("── BOSSES ───────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Attempts:        {:.1}\n", self.avg_boss_attempts));
        report.push_str(&format!(
            "  Clear Rate:          {:.1}%\n",
            self.boss_clear_rate * 100.0
        ));
        report.push_str("  Stage   Reached   Avg Time to Clear\n");
        report.push_str("  ─────   ───────   ─────────────────\n");
        for gate in &self.gates {
            let pct = gate.runs_reached as f64 / self.num_runs.max(1) as f64 * 100.0;
            report.push_str(&format!(
                "  {:5}   {:6.1}%   {}\n",
                gate.stage,
                pct,
                time_text(gate.avg_seconds_to_clear.round() as u64)
            ));
        }
        report.push('\n');

        report.push_str("── PRESTIGE ─────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Prestiges:       {:.1}\n", self.avg_prestiges));
        report.push_str(&format!("  Avg Souls:           {:.1}\n\n", self.avg_souls));

        report.push_str("── FINAL STAGE DISTRIBUTION ─────────────────────────────────────\n");
        for (&level, &count) in &self.level_distribution {
            let pct = count as f64 / self.num_runs.max(1) as f64 * 100.0;
            let bar: String = "█".repeat((pct / 5.0) as usize);
            report.push_str(&format!("  Stage {:3}: {:>5.1}% {}\n", level, pct, bar));
        }

        report.push_str("\n── BALANCE ASSESSMENT ───────────────────────────────────────────\n");
        if self.gates.is_empty() {
            report.push_str("  ⚠️  No run cleared the first boss - early game too slow?\n");
        }
        if self.avg_boss_attempts > 0.0 && self.boss_clear_rate < 0.25 {
            report.push_str("  ⚠️  Most boss attempts fail - boss HP too high?\n");
        }
        if self.avg_heroes_bought < 1.0 {
            report.push_str("  ⚠️  Players barely afford heroes - gold too scarce?\n");
        }

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");

        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(final_level: u32, gates: &[(u32, f64)], attempts: u32, clears: u32) -> RunStats {
        RunStats {
            total_ticks: 1_000,
            final_level,
            highest_cleared_boss_stage: gates.iter().map(|g| g.0).max().unwrap_or(0),
            total_kills: 100,
            total_gold: 500,
            total_clicks: 400,
            skills_cast: 0,
            heroes_bought: 4,
            boss_attempts: attempts,
            boss_clears: clears,
            boss_failures: attempts - clears,
            prestiges: 0,
            souls: 0,
            final_click_damage: 3,
            final_dps: 20,
            gate_seconds: gates.iter().copied().collect(),
        }
    }

    #[test]
    fn test_report_generation() {
        let runs = vec![
            run(12, &[(10, 300.0)], 2, 1),
            run(9, &[], 2, 0),
        ];

        let report = SimReport::from_runs(runs, 600);
        assert_eq!(report.num_runs, 2);
        assert!((report.avg_final_level - 10.5).abs() < 1e-9);
        assert!((report.boss_clear_rate - 0.25).abs() < 1e-9);
        assert_eq!(report.gates.len(), 1);
        assert_eq!(report.gates[0].runs_reached, 1);
        assert!((report.gates[0].avg_seconds_to_clear - 300.0).abs() < 1e-9);
        assert_eq!(report.level_distribution.get(&9), Some(&1));
    }

    #[test]
    fn test_text_and_json_render() {
        let report = SimReport::from_runs(vec![run(15, &[(10, 120.0)], 1, 1)], 600);
        let text = report.to_text();
        assert!(text.contains("SIMULATION REPORT"));
        assert!(text.contains("2m"));

        let json: serde_json::Value = serde_json::from_str(&report.to_json()).unwrap();
        assert_eq!(json["num_runs"], 1);
        assert!(json.get("run_stats").is_none());
    }

    #[test]
    fn test_empty_report() {
        let report = SimReport::from_runs(Vec::new(), 60);
        assert_eq!(report.num_runs, 0);
        assert_eq!(report.avg_final_level, 0.0);
        assert!(report.to_text().contains("No run cleared"));
    }
}
