//! Core game state and logic.
//!
//! Everything here is deterministic and free of I/O. The front-ends talk to
//! it only through [`engine::Engine`].

pub mod balance;
pub mod boss;
pub mod combat;
pub mod config;
pub mod constants;
pub mod engine;
pub mod game_state;
pub mod offline;
pub mod prestige;
pub mod rejection;
pub mod stats;
pub mod tick;

pub use config::{ConfigError, EngineConfig};
pub use engine::{ArtifactView, BossView, Engine, GameView, HeroView, SkillView};
pub use game_state::{BossChallenge, GameState, Monster};
pub use offline::OfflineReport;
pub use rejection::Rejection;
pub use tick::TickEvent;
