//! Move selection for AI players.
//!
//! Strategies are pure functions of a `GameView`. They never mutate the game
//! and return `None` rather than an error when no move exists.
//!
//! ## Tie-break
//!
//! Every strategy reduces its candidates with the same rule: smallest row,
//! then smallest column, then smallest hand index. The result does not
//! depend on the order candidates were discovered in.

mod corner;
mod flip_max;

pub use corner::CornerStrategy;
pub use flip_max::FlipMaxStrategy;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::{Move, PlayerColor};
use crate::rules::GameView;

/// Chooses a move from the read-only view of a game.
pub trait MoveStrategy {
    /// Pick a move for `player`, or `None` if there is nothing to play.
    fn choose_move(&self, view: &dyn GameView, player: PlayerColor) -> Option<Move>;
}

/// Built-in strategies, selectable from configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Maximize immediate flips.
    FlipMax,
    /// Take the first free corner.
    Corner,
}

impl MoveStrategy for Strategy {
    fn choose_move(&self, view: &dyn GameView, player: PlayerColor) -> Option<Move> {
        match self {
            Strategy::FlipMax => FlipMaxStrategy.choose_move(view, player),
            Strategy::Corner => CornerStrategy.choose_move(view, player),
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::FlipMax => write!(f, "flip-max"),
            Strategy::Corner => write!(f, "corner"),
        }
    }
}

/// A possible move with the hand index it was drawn from.
#[derive(Clone, Debug)]
struct Candidate {
    hand_index: usize,
    card: Card,
    row: usize,
    col: usize,
}

impl Candidate {
    fn rank(&self) -> (usize, usize, usize) {
        (self.row, self.col, self.hand_index)
    }

    fn into_move(self) -> Move {
        Move::new(self.card, self.row, self.col)
    }
}

/// Apply the shared tie-break to a candidate set.
fn select_best(candidates: Vec<Candidate>) -> Option<Move> {
    candidates
        .into_iter()
        .min_by_key(Candidate::rank)
        .map(Candidate::into_move)
}
