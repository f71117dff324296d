//! Battle phase: the cascading flip computation run after each placement.
//!
//! Starting from the placed cell, a FIFO worklist visits cells whose card may
//! conquer neighbors. For each popped cell the neighbors are checked in
//! `Direction::ALL` order (N, S, E, W). An occupied neighbor with a different
//! owner flips when the attacker's value in that direction strictly beats
//! the neighbor's value in the opposite direction. A flipped neighbor takes
//! the attacker's owner immediately and joins the worklist, so it can conquer
//! its own neighbors with the card it already holds (a combo).
//!
//! Every flip moves a cell to the placing player's color and nothing ever
//! flips back, so each cell flips at most once and the cascade is bounded by
//! the grid area.

use smallvec::SmallVec;
use std::collections::VecDeque;
use tracing::trace;

use crate::cards::{Card, Direction};
use crate::core::PlayerColor;
use crate::grid::{Grid, Position};

/// Cells flipped by one battle phase, in cascade order.
pub type Flips = SmallVec<[Position; 4]>;

/// Run the battle phase from `origin` and return the flipped cells.
///
/// Only ownership changes. Cards never move, and the number of cards on the
/// grid is unchanged. An empty or out-of-bounds origin flips nothing.
pub fn resolve_battle(grid: &mut Grid, origin: Position) -> Flips {
    let mut flipped = Flips::new();
    let mut worklist = VecDeque::from([origin]);

    while let Some((row, col)) = worklist.pop_front() {
        let Some(owner) = grid.cell(row, col).ok().and_then(|c| c.owner()) else {
            continue;
        };

        // Flips from one cell never touch that cell, so the targets can be
        // decided before any of them is committed.
        for (r, c) in conquests(grid, row, col) {
            if grid.set_owner(r, c, owner) {
                trace!(from = ?(row, col), to = ?(r, c), %owner, "flip");
                flipped.push((r, c));
                worklist.push_back((r, c));
            }
        }
    }

    flipped
}

/// Neighbors the card at `(row, col)` would conquer right now, in N, S, E, W order.
fn conquests(grid: &Grid, row: usize, col: usize) -> SmallVec<[Position; 4]> {
    let Some(attacker) = grid.cell(row, col).ok().and_then(|c| c.placement()) else {
        return SmallVec::new();
    };

    Direction::ALL
        .iter()
        .filter_map(|&dir| {
            let (r, c) = grid.neighbor(row, col, dir)?;
            let defender = grid.cell(r, c).ok()?.placement()?;
            let beats = defender.owner != attacker.owner
                && attacker.card.compare_against(&defender.card, dir);
            beats.then_some((r, c))
        })
        .collect()
}

/// How many neighbors `card` would flip immediately if `owner` placed it at
/// `(row, col)`.
///
/// One level only; combos are not counted.
#[must_use]
pub fn potential_flips(
    grid: &Grid,
    card: &Card,
    owner: PlayerColor,
    row: usize,
    col: usize,
) -> usize {
    Direction::ALL
        .iter()
        .filter(|&&dir| {
            grid.neighbor(row, col, dir)
                .and_then(|(r, c)| grid.cell(r, c).ok())
                .and_then(|cell| cell.placement())
                .is_some_and(|defender| {
                    defender.owner != owner && card.compare_against(&defender.card, dir)
                })
        })
        .count()
}
