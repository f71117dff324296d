//! Read-only observation surface.
//!
//! Strategies, views, and controllers depend on `GameView` only, never on the
//! engine's mutators. Every method is a pure read: calling it any number of
//! times leaves the game unchanged.

use im::Vector;

use crate::cards::Card;
use crate::core::PlayerColor;
use crate::grid::Cell;

/// Outcome query result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// The grid still has empty card cells.
    NotOver,
    /// One player has a strictly greater score.
    Winner(PlayerColor),
    /// Equal scores.
    Tie,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerColor) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }

    /// True for `Winner` and `Tie`.
    #[must_use]
    pub fn is_final(&self) -> bool {
        !matches!(self, GameResult::NotOver)
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::NotOver => write!(f, "Game is not over yet."),
            GameResult::Winner(color) => write!(f, "{color} wins!"),
            GameResult::Tie => write!(f, "It's a tie!"),
        }
    }
}

/// Read-only view of a game.
///
/// ## Implementation Notes
///
/// - `hand` returns an owned snapshot; mutating it never affects the game.
/// - `is_legal_move` is never an error: out of bounds is simply `false`.
/// - `potential_flips` counts immediate flips only, without combos.
pub trait GameView {
    /// Whose turn it is.
    fn current_player(&self) -> PlayerColor;

    /// Number of grid rows (0 before the game starts).
    fn grid_rows(&self) -> usize;

    /// Number of grid columns (0 before the game starts).
    fn grid_cols(&self) -> usize;

    /// Cell contents, or `None` if out of bounds or not started.
    fn cell(&self, row: usize, col: usize) -> Option<&Cell>;

    /// Snapshot of a player's hand in hand order.
    fn hand(&self, player: PlayerColor) -> Vector<Card>;

    /// Could `player` place a card at `(row, col)` right now?
    ///
    /// True iff the game is in progress, it is `player`'s turn, and the cell
    /// is in bounds, not a hole, and empty.
    fn is_legal_move(&self, player: PlayerColor, row: usize, col: usize) -> bool;

    /// Number of opposing neighbors `card` would flip immediately if `player`
    /// placed it at `(row, col)`. Zero for unplayable cells.
    fn potential_flips(&self, player: PlayerColor, card: &Card, row: usize, col: usize) -> usize;

    /// Cards in hand plus cells owned on the grid.
    fn player_score(&self, player: PlayerColor) -> usize;

    /// True once every card cell is occupied.
    fn is_game_over(&self) -> bool;

    /// Winner, tie, or `NotOver`.
    fn winner(&self) -> GameResult;
}
