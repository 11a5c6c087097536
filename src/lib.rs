//! Clicker - Terminal-Based Idle Clicker Library
//!
//! This module exposes the game engine for testing and external use.

pub mod catalog;
pub mod core;
pub mod save;
pub mod simulator;
pub mod utils;

pub use crate::core::{Engine, EngineConfig, GameState, GameView, Rejection, TickEvent};
