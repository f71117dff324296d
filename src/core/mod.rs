//! Core engine types: players, moves, RNG, errors.
//!
//! These are the building blocks shared by the grid, the rules engine, and
//! the strategies.

pub mod action;
pub mod error;
pub mod player;
pub mod rng;

pub use action::{Move, MoveRecord};
pub use error::{GridError, MoveError, PlacementFault, SetupError};
pub use player::{Player, PlayerColor, PlayerKind, PlayerMap, TurnDecision};
pub use rng::GameRng;
