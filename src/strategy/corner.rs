//! Corner strategy.

use tracing::debug;

use super::{select_best, Candidate, MoveStrategy};
use crate::core::{Move, PlayerColor};
use crate::rules::GameView;

/// Play into a free corner, ignoring flips.
///
/// Corners are probed in the order top-left, top-right, bottom-left,
/// bottom-right. On a single row or column the same cell may be probed more
/// than once.
#[derive(Clone, Copy, Debug, Default)]
pub struct CornerStrategy;

impl CornerStrategy {
    fn corners(view: &dyn GameView) -> Option<[(usize, usize); 4]> {
        let max_row = view.grid_rows().checked_sub(1)?;
        let max_col = view.grid_cols().checked_sub(1)?;
        Some([(0, 0), (0, max_col), (max_row, 0), (max_row, max_col)])
    }
}

impl MoveStrategy for CornerStrategy {
    fn choose_move(&self, view: &dyn GameView, player: PlayerColor) -> Option<Move> {
        let corners = Self::corners(view)?;
        let hand = view.hand(player);
        let mut candidates = Vec::new();

        for (row, col) in corners {
            if view.is_legal_move(player, row, col) {
                candidates.extend(hand.iter().enumerate().map(|(hand_index, card)| Candidate {
                    hand_index,
                    card: card.clone(),
                    row,
                    col,
                }));
            }
        }

        debug!(%player, candidates = candidates.len(), "corner evaluated");
        select_best(candidates)
    }
}
