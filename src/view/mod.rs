//! Plain-text rendering of a game.
//!
//! ```text
//! Player: RED
//! _ R
//! B__
//! Hand:
//! Dragon 9 A 3 1
//! ```
//!
//! Grid characters: `' '` hole, `'_'` empty, `'R'`/`'B'` owner.

use std::fmt;

use crate::core::PlayerColor;
use crate::grid::Cell;
use crate::rules::GameView;

/// Text view over any `GameView`.
#[derive(Clone, Copy)]
pub struct TextView<'a> {
    game: &'a dyn GameView,
}

impl<'a> TextView<'a> {
    #[must_use]
    pub fn new(game: &'a dyn GameView) -> Self {
        Self { game }
    }

    /// Render the current player, the grid, and the current player's hand.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

fn cell_char(cell: Option<&Cell>) -> char {
    match cell {
        None | Some(Cell::Hole) => ' ',
        Some(cell) => cell.owner().map_or('_', PlayerColor::initial),
    }
}

impl fmt::Display for TextView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let current = self.game.current_player();
        writeln!(f, "Player: {}", current.to_string().to_uppercase())?;

        for row in 0..self.game.grid_rows() {
            let line: String = (0..self.game.grid_cols())
                .map(|col| cell_char(self.game.cell(row, col)))
                .collect();
            writeln!(f, "{line}")?;
        }

        writeln!(f, "Hand:")?;
        for card in self.game.hand(current) {
            writeln!(f, "{card}")?;
        }
        Ok(())
    }
}
