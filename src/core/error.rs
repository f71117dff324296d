//! Error types for setup, moves, and grid access.
//!
//! - `SetupError`: the game cannot start with the given configuration.
//! - `MoveError`: a placement was rejected. The game state is unchanged.
//! - `GridError`: direct grid access outside its contract.

use thiserror::Error;

/// Invalid configuration at initialization.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("both players must be assigned before the game starts")]
    PlayersNotAssigned,

    #[error("insufficient number of cards. Required: {required}, but found: {found}")]
    InsufficientCards { required: usize, found: usize },

    #[error("game has already been initialized")]
    AlreadyStarted,
}

/// Rejected placement.
///
/// Variants after `GameOver` are listed in validation order: turn, then cell,
/// then hand membership.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("the game has not started")]
    GameNotStarted,

    #[error("the game is over")]
    GameOver,

    #[error("it's not your turn")]
    NotYourTurn,

    #[error("cell ({row}, {col}) is not playable")]
    IllegalCell { row: usize, col: usize },

    #[error("player does not have the card {0}")]
    CardNotInHand(String),
}

/// Why a placement onto the grid was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlacementFault {
    OutOfBounds,
    Hole,
    Occupied,
}

impl std::fmt::Display for PlacementFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlacementFault::OutOfBounds => write!(f, "position out of bounds"),
            PlacementFault::Hole => write!(f, "cannot place a card in a hole"),
            PlacementFault::Occupied => write!(f, "cell is already occupied"),
        }
    }
}

/// Contract violation on direct grid access.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("cell ({row}, {col}) is out of bounds")]
    OutOfBounds { row: usize, col: usize },

    #[error("invalid placement at ({row}, {col}): {reason}")]
    InvalidPlacement {
        row: usize,
        col: usize,
        reason: PlacementFault,
    },

    #[error("grid shape {rows}x{cols} does not match {cells} cells")]
    InvalidShape { rows: usize, cols: usize, cells: usize },
}
