//! Game balance simulator CLI.
//!
//! Run Monte Carlo simulations to analyze game balance.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                       # Default: 100 runs of one hour
//!   cargo run --bin simulate -- -n 20 -t 1800     # 20 runs of 30 minutes
//!   cargo run --bin simulate -- --seed 42         # Reproducible run

use clicker::core::config::EngineConfig;
use clicker::simulator::{run_simulation, SimConfig};
use clicker::utils::logging::init_stderr_logging;
use std::env;
use std::path::Path;
use std::process::ExitCode;
use tracing::{error, info};

fn main() -> ExitCode {
    init_stderr_logging();

    let args: Vec<String> = env::args().collect();
    let config = match parse_args(&args) {
        Ok(config) => config,
        Err(message) => {
            error!("{}", message);
            return ExitCode::FAILURE;
        }
    };

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              CLICKER BALANCE SIMULATOR                        ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Runs:           {}", config.num_runs);
    println!("  Seconds/run:    {}", config.seconds_per_run);
    println!("  Clicks/second:  {}", config.clicks_per_second);
    if let Some(stage) = config.prestige_at {
        println!("  Prestige at:    stage {}", stage);
    }
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = match run_simulation(&config) {
        Ok(report) => report,
        Err(e) => {
            error!(error = %e, "invalid engine config");
            return ExitCode::FAILURE;
        }
    };

    println!("{}", report.to_text());

    // Optionally save JSON report
    if args.iter().any(|a| a == "--json") {
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        match std::fs::write(&filename, report.to_json()) {
            Ok(()) => info!(file = %filename, "JSON report saved"),
            Err(e) => {
                error!(file = %filename, error = %e, "failed to write JSON report");
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}

fn parse_args(args: &[String]) -> Result<SimConfig, String> {
    let mut config = SimConfig::default();

    let mut i = 1;
    while i < args.len() {
        let value = args.get(i + 1);
        match args[i].as_str() {
            "-n" | "--runs" => {
                if let Some(v) = value {
                    config.num_runs = v.parse().unwrap_or(100);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if let Some(v) = value {
                    config.seed = v.parse().ok();
                    i += 1;
                }
            }
            "-t" | "--seconds" => {
                if let Some(v) = value {
                    config.seconds_per_run = v.parse().unwrap_or(3_600);
                    i += 1;
                }
            }
            "--prestige-at" => {
                if let Some(v) = value {
                    config.prestige_at = v.parse().ok();
                    i += 1;
                }
            }
            "--clicks-per-second" => {
                if let Some(v) = value {
                    config.clicks_per_second = v.parse().unwrap_or(5.0);
                    i += 1;
                }
            }
            "--config" => {
                if let Some(v) = value {
                    config.engine = EngineConfig::load(Path::new(v))
                        .map_err(|e| format!("bad config {}: {}", v, e))?;
                    i += 1;
                }
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "--quick" => {
                config = SimConfig::early_game(20);
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    Ok(config)
}

fn print_help() {
    println!("Clicker Balance Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --runs <N>              Number of simulation runs (default: 100)");
    println!("    -s, --seed <S>              Random seed for reproducibility");
    println!("    -t, --seconds <T>           Simulated seconds per run (default: 3600)");
    println!("    --prestige-at <STAGE>       Prestige whenever STAGE is reached");
    println!("    --clicks-per-second <C>     Average click rate (default: 5)");
    println!("    --config <PATH>             JSON file overriding engine tunables");
    println!("    -v, --verbose               Log every run");
    println!("    --json                      Save JSON report");
    println!("    --quick                     Quick test (20 runs of 15 minutes)");
    println!("    -h, --help                  Show this help");
    println!();
    println!("EXAMPLES:");
    println!("    cargo run --bin simulate                        # Default run");
    println!("    cargo run --bin simulate -- -n 20 -t 1800       # 20 half-hour runs");
    println!("    cargo run --bin simulate -- --seed 42           # Reproducible");
    println!("    cargo run --bin simulate -- --prestige-at 25    # Prestige loop");
}
