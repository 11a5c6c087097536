mod ui;

use chrono::Utc;
use clicker::catalog::Catalog;
use clicker::core::constants::{AUTOSAVE_INTERVAL_SECONDS, LOG_FILE_NAME};
use clicker::core::{ConfigError, Engine, EngineConfig, Rejection, TickEvent};
use clicker::save::SaveManager;
use clicker::utils::format_number;
use clicker::utils::logging::init_file_logging;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::collections::VecDeque;
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{info, warn};
use ui::shop_panel::{ARTIFACT_KEYS, SKILL_KEYS};
use ui::{draw_ui, Overlay, MAX_LOG_LINES};

fn print_help() {
    println!("Clicker - Terminal-Based Idle Clicker\n");
    println!("Usage: clicker [options]\n");
    println!("Options:");
    println!("  --config <path>  Load balance overrides from a JSON file");
    println!("  --version        Show version information");
    println!("  --help           Show this help message");
}

/// Parses CLI arguments. `Ok(None)` means the process should exit cleanly.
fn parse_args(args: &[String]) -> Result<Option<Option<PathBuf>>, String> {
    let mut config_path = None;
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                let path = args
                    .get(i + 1)
                    .ok_or_else(|| "--config requires a path".to_string())?;
                config_path = Some(PathBuf::from(path));
                i += 1;
            }
            "--version" | "-V" => {
                println!("clicker {}", env!("CARGO_PKG_VERSION"));
                return Ok(None);
            }
            "--help" | "-h" => {
                print_help();
                return Ok(None);
            }
            other => {
                return Err(format!(
                    "Unknown argument: {}\nRun 'clicker --help' for usage.",
                    other
                ))
            }
        }
        i += 1;
    }
    Ok(Some(config_path))
}

/// Message log shown under the panels.
struct MessageLog {
    lines: VecDeque<String>,
}

impl MessageLog {
    fn new() -> Self {
        Self {
            lines: VecDeque::with_capacity(MAX_LOG_LINES),
        }
    }

    fn push(&mut self, message: impl Into<String>) {
        if self.lines.len() >= MAX_LOG_LINES {
            self.lines.pop_front();
        }
        self.lines.push_back(message.into());
    }

    fn push_events(&mut self, events: &[TickEvent]) {
        for event in events {
            if let Some(message) = event_message(event) {
                self.push(message);
            }
        }
    }

    fn push_rejection(&mut self, rejection: &Rejection) {
        self.push(format!("✗ {}", rejection));
    }
}

fn event_message(event: &TickEvent) -> Option<String> {
    match event {
        TickEvent::Damage { .. } | TickEvent::Respawned { .. } => None,
        TickEvent::Killed { gold } => Some(format!(
            "Monster slain! +{} gold",
            format_number(*gold as f64)
        )),
        TickEvent::LevelUp { new_level } => Some(format!("📈 Advanced to stage {}", new_level)),
        TickEvent::BossGateReached { boss_stage } => Some(format!(
            "👹 The boss of stage {} blocks the way - press [B]",
            boss_stage
        )),
        TickEvent::BossCleared { stage } => Some(format!(
            "🏆 Boss defeated! Stage {} unlocked",
            stage
        )),
        TickEvent::BossFailed { stage } => Some(format!(
            "💀 The boss of stage {} outlasted you",
            stage
        )),
    }
}

fn save_game(saves: Option<&SaveManager>, engine: &Engine) {
    if let Some(saves) = saves {
        if let Err(e) = saves.save(&engine.snapshot(Utc::now().timestamp())) {
            warn!(error = %e, "autosave failed");
        }
    }
}

/// Restores the saved session, falling back to a fresh one on any failure.
fn load_engine(
    saves: Option<&SaveManager>,
    catalog: Catalog,
    config: EngineConfig,
) -> Result<Engine, ConfigError> {
    let now = Utc::now().timestamp();
    let snapshot = match saves.map(SaveManager::load) {
        Some(Ok(snapshot)) => snapshot,
        Some(Err(e)) => {
            warn!(error = %e, "could not load save, starting fresh");
            None
        }
        None => None,
    };
    match snapshot {
        Some(snapshot) => Engine::from_snapshot(&snapshot, catalog, config, now),
        None => Engine::new(catalog, config, now),
    }
}

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let config_path = match parse_args(&args) {
        Ok(Some(path)) => path,
        Ok(None) => return Ok(()),
        Err(message) => {
            eprintln!("{}", message);
            std::process::exit(1);
        }
    };

    let config = match &config_path {
        Some(path) => match EngineConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Invalid config {}: {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => EngineConfig::default(),
    };

    let saves = match SaveManager::new() {
        Ok(saves) => {
            if let Err(e) = init_file_logging(saves.save_dir(), LOG_FILE_NAME) {
                eprintln!("Could not open log file: {}", e);
            }
            Some(saves)
        }
        Err(e) => {
            eprintln!("Save directory unavailable ({}); progress will not be kept.", e);
            None
        }
    };

    let mut engine = match load_engine(saves.as_ref(), Catalog::default(), config) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("Invalid config: {}", e);
            std::process::exit(1);
        }
    };
    let mut log = MessageLog::new();
    let mut overlay = match engine.process_offline(Utc::now().timestamp()) {
        Some(report) => {
            log.push(format!(
                "Offline: +{} kills, +{} gold",
                format_number(report.kills as f64),
                format_number(report.gold as f64)
            ));
            Overlay::OfflineWelcome(report)
        }
        None => Overlay::None,
    };
    info!(level = engine.state().level, "session started");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut engine, saves.as_ref(), &mut log, &mut overlay);

    // Restore terminal even if the loop failed
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;

    save_game(saves.as_ref(), &engine);
    info!("session ended");
    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    engine: &mut Engine,
    saves: Option<&SaveManager>,
    log: &mut MessageLog,
    overlay: &mut Overlay,
) -> io::Result<()> {
    let tick_interval = Duration::from_millis(u64::from(engine.config().tick_interval_ms));
    let mut last_tick = Instant::now();
    let mut last_autosave = Instant::now();

    loop {
        let view = engine.view();
        terminal.draw(|frame| draw_ui(frame, &view, &log.lines, &*overlay))?;

        // Poll for input (50ms non-blocking)
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key_event) = event::read()? {
                if key_event.kind == KeyEventKind::Press
                    && !handle_key(key_event.code, engine, saves, log, overlay)
                {
                    return Ok(());
                }
            }
        }

        while last_tick.elapsed() >= tick_interval {
            let events = engine.tick();
            log.push_events(&events);
            last_tick += tick_interval;
        }

        if last_autosave.elapsed() >= Duration::from_secs(AUTOSAVE_INTERVAL_SECONDS) {
            save_game(saves, engine);
            last_autosave = Instant::now();
        }
    }
}

/// Applies one key press. Returns `false` when the player quits.
fn handle_key(
    code: KeyCode,
    engine: &mut Engine,
    saves: Option<&SaveManager>,
    log: &mut MessageLog,
    overlay: &mut Overlay,
) -> bool {
    match *overlay {
        Overlay::OfflineWelcome(_) => {
            *overlay = Overlay::None;
            return true;
        }
        Overlay::PrestigeConfirm => {
            if matches!(code, KeyCode::Char('y') | KeyCode::Char('Y')) {
                match engine.prestige() {
                    Ok(souls) => {
                        log.push(format!("✨ Prestiged for {} souls", souls));
                        save_game(saves, engine);
                    }
                    Err(rejection) => log.push_rejection(&rejection),
                }
            }
            *overlay = Overlay::None;
            return true;
        }
        Overlay::ResetConfirm => {
            if matches!(code, KeyCode::Char('y') | KeyCode::Char('Y')) {
                if let Some(saves) = saves {
                    if let Err(e) = saves.clear() {
                        warn!(error = %e, "could not delete save");
                    }
                }
                let catalog = engine.catalog().clone();
                let config = engine.config().clone();
                match Engine::new(catalog, config, Utc::now().timestamp()) {
                    Ok(fresh) => {
                        *engine = fresh;
                        log.lines.clear();
                        log.push("Game reset.");
                    }
                    Err(e) => warn!(error = %e, "could not start a fresh session"),
                }
            }
            *overlay = Overlay::None;
            return true;
        }
        Overlay::None => {}
    }

    match code {
        KeyCode::Esc => return false,
        KeyCode::Char(' ') => {
            let events = engine.click();
            log.push_events(&events);
        }
        KeyCode::Char(c @ '1'..='9') => {
            let index = (c as usize) - ('1' as usize);
            match engine.buy_hero(index) {
                Ok(_) => {
                    if let Some(hero) = engine.catalog().hero(index) {
                        log.push(format!("Hired {}", hero.name));
                    }
                }
                Err(rejection) => log.push_rejection(&rejection),
            }
        }
        KeyCode::Char('b') | KeyCode::Char('B') => match engine.start_boss() {
            Ok(stage) => log.push(format!("⚔️  Boss fight for stage {} begins!", stage)),
            Err(rejection) => log.push_rejection(&rejection),
        },
        KeyCode::Char('p') | KeyCode::Char('P') => {
            if engine.can_prestige() {
                *overlay = Overlay::PrestigeConfirm;
            } else {
                log.push_rejection(&Rejection::NoPendingSouls {
                    min_stage: engine.view().min_prestige_stage,
                });
            }
        }
        KeyCode::Char('r') | KeyCode::Char('R') => *overlay = Overlay::ResetConfirm,
        KeyCode::Char(c) => {
            let c = c.to_ascii_lowercase();
            if let Some(slot) = SKILL_KEYS.iter().position(|&k| k == c) {
                cast_skill_slot(engine, log, slot);
            } else if let Some(slot) = ARTIFACT_KEYS.iter().position(|&k| k == c) {
                level_artifact_slot(engine, log, slot);
            }
        }
        _ => {}
    }
    true
}

fn cast_skill_slot(engine: &mut Engine, log: &mut MessageLog, slot: usize) {
    let Some(skill) = engine.catalog().skills.get(slot).cloned() else {
        return;
    };
    match engine.cast_skill(&skill.id) {
        Ok(events) => {
            log.push(format!("{} {}!", skill.icon, skill.name));
            log.push_events(&events);
        }
        Err(rejection) => log.push_rejection(&rejection),
    }
}

fn level_artifact_slot(engine: &mut Engine, log: &mut MessageLog, slot: usize) {
    let Some(artifact) = engine.catalog().artifacts.get(slot).cloned() else {
        return;
    };
    match engine.level_up_artifact(&artifact.id) {
        Ok(level) => log.push(format!(
            "{} {} is now level {}",
            artifact.icon, artifact.name, level
        )),
        Err(rejection) => log.push_rejection(&rejection),
    }
}
