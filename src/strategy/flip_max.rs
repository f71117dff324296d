//! Greedy strategy: most immediate flips wins.

use tracing::debug;

use super::{select_best, Candidate, MoveStrategy};
use crate::core::{Move, PlayerColor};
use crate::rules::GameView;

/// Play the card and cell that flip the most opposing cards right now.
///
/// Only immediate flips are counted; combos are ignored. Every cell is
/// probed for every card in hand, legal or not.
#[derive(Clone, Copy, Debug, Default)]
pub struct FlipMaxStrategy;

impl MoveStrategy for FlipMaxStrategy {
    fn choose_move(&self, view: &dyn GameView, player: PlayerColor) -> Option<Move> {
        let mut best_flips = 0;
        let mut best = Vec::new();

        for (hand_index, card) in view.hand(player).into_iter().enumerate() {
            for row in 0..view.grid_rows() {
                for col in 0..view.grid_cols() {
                    if !view.is_legal_move(player, row, col) {
                        continue;
                    }
                    let flips = view.potential_flips(player, &card, row, col);
                    if best.is_empty() || flips > best_flips {
                        best_flips = flips;
                        best.clear();
                    } else if flips < best_flips {
                        continue;
                    }
                    best.push(Candidate {
                        hand_index,
                        card: card.clone(),
                        row,
                        col,
                    });
                }
            }
        }

        debug!(%player, candidates = best.len(), best_flips, "flip-max evaluated");
        select_best(best)
    }
}
