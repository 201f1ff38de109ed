//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering
//! dependencies: the board grid, the snake, the input-admission queue and
//! the per-tick transition function. The driver in [`crate::modes`] calls
//! [`GameState::change_direction`] any number of times between ticks and
//! [`GameEngine::advance`] once per tick; nothing in here blocks, spawns or
//! performs I/O.

pub mod config;
pub mod direction;
pub mod engine;
pub mod grid;
pub mod state;

// Re-export commonly used types
pub use config::{GameConfig, INITIAL_SNAKE_LENGTH};
pub use direction::Direction;
pub use engine::{CollisionType, GameEngine, TickOutcome};
pub use grid::{CellState, Grid, Position};
pub use state::{GameState, Snake, MAX_QUEUED_TURNS};
