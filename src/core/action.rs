//! Move representation.
//!
//! A `Move` is a candidate placement: which card, which cell. Strategies
//! produce moves; the engine validates and applies them. Applied moves are
//! logged as `MoveRecord`s together with the flips they caused.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::PlayerColor;
use crate::cards::Card;
use crate::grid::Position;

/// A card placement that has not been applied yet.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The card to place.
    pub card: Card,
    /// Target row (0-based).
    pub row: usize,
    /// Target column (0-based).
    pub col: usize,
}

impl Move {
    /// Create a new move.
    #[must_use]
    pub fn new(card: Card, row: usize, col: usize) -> Self {
        Self { card, row, col }
    }

    /// Target cell as a `(row, col)` pair.
    #[must_use]
    pub fn position(&self) -> Position {
        (self.row, self.col)
    }
}

/// An applied move with its battle outcome.
///
/// Used for:
/// - Debugging cascades (flips are in cascade order)
/// - Replaying a game against a fresh engine
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Turn number, starting at 1.
    pub turn: u32,

    /// The player who placed the card.
    pub player: PlayerColor,

    /// The placement.
    pub mv: Move,

    /// Cells flipped by the battle phase, in the order they flipped.
    /// SmallVec covers the common case (four or fewer) without heap allocation.
    pub flips: SmallVec<[Position; 4]>,
}

impl MoveRecord {
    /// Create a new move record.
    #[must_use]
    pub fn new(turn: u32, player: PlayerColor, mv: Move, flips: SmallVec<[Position; 4]>) -> Self {
        Self {
            turn,
            player,
            mv,
            flips,
        }
    }
}
