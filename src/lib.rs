//! # three-trios
//!
//! Rules engine and deterministic AI strategies for a two-player grid card
//! game.
//!
//! Players alternately place cards from their hands onto a grid of card cells
//! and holes. A placed card battles its neighbors: a side value strictly
//! greater than the facing side of an opposing card flips that card, and a
//! flipped card goes on to battle its own neighbors. When the grid is full,
//! the player owning more cards (hand plus grid) wins.
//!
//! ## Design Principles
//!
//! 1. **One mutator**: `GameEngine::place_card` is the only way to change a
//!    started game. It either fails with nothing changed or runs the whole
//!    placement, battle, and turn switch.
//!
//! 2. **Read-only observers**: strategies and views see a game through the
//!    `GameView` trait only.
//!
//! 3. **Deterministic AI**: strategies break ties by row, then column, then
//!    hand index, so the same state always yields the same move.
//!
//! ## Modules
//!
//! - `cards`: card values, directions, and cards
//! - `core`: players, moves, errors, RNG
//! - `grid`: cells and the grid
//! - `rules`: the engine, battle phase, and read-only view
//! - `strategy`: AI move selection
//! - `config`: grid, card, and game config files
//! - `view`: text rendering
//! - `interop`: provider API conversions

pub mod cards;
pub mod config;
pub mod core;
pub mod grid;
pub mod interop;
pub mod rules;
pub mod strategy;
pub mod view;

// Re-export commonly used types
pub use crate::cards::{Card, Direction, Value};

pub use crate::core::{
    GameRng, GridError, Move, MoveError, MoveRecord, Player, PlayerColor, PlayerKind, SetupError,
};

pub use crate::grid::{Cell, Grid, Position};

pub use crate::rules::{GameBuilder, GameEngine, GameListener, GamePhase, GameResult, GameView};

pub use crate::strategy::{CornerStrategy, FlipMaxStrategy, MoveStrategy, Strategy};

pub use crate::config::{ConfigError, GameConfig};

pub use crate::view::TextView;
