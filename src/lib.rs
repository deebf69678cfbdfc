//! Skyhop - portfolio arcade for the terminal.
//!
//! This module exposes the game engine and page logic for testing and
//! external use.

pub mod app;
pub mod config;
pub mod constants;
pub mod game;
pub mod input;
pub mod page;
pub mod store;
pub mod ui;
pub mod utils;

pub use constants::*;
pub use game::{ArcadeEngine, GameConfig, Phase, TickOutcome};
pub use store::{BestScoreStore, JsonFileStore, MemoryStore};
