//! Grid cells.
//!
//! A cell is either a permanent `Hole` or a `CardCell` that may hold one
//! placement. Once occupied, a card cell keeps its card for the rest of the
//! game; only the owner changes.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::{PlacementFault, PlayerColor};

/// A card on the grid together with its current owner.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    pub card: Card,
    pub owner: PlayerColor,
}

/// One slot of the grid.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Never playable.
    Hole,
    /// Playable slot, empty or holding one placement.
    CardCell(Option<Placement>),
}

impl Cell {
    /// An empty card cell.
    #[must_use]
    pub const fn empty() -> Self {
        Cell::CardCell(None)
    }

    #[must_use]
    pub const fn is_hole(&self) -> bool {
        matches!(self, Cell::Hole)
    }

    /// True iff a card is present.
    #[must_use]
    pub const fn is_occupied(&self) -> bool {
        matches!(self, Cell::CardCell(Some(_)))
    }

    /// The placement, if occupied.
    #[must_use]
    pub fn placement(&self) -> Option<&Placement> {
        match self {
            Cell::CardCell(Some(placement)) => Some(placement),
            _ => None,
        }
    }

    #[must_use]
    pub fn card(&self) -> Option<&Card> {
        self.placement().map(|p| &p.card)
    }

    #[must_use]
    pub fn owner(&self) -> Option<PlayerColor> {
        self.placement().map(|p| p.owner)
    }

    /// Put a card in this cell.
    pub(crate) fn place(&mut self, card: Card, owner: PlayerColor) -> Result<(), PlacementFault> {
        match self {
            Cell::Hole => Err(PlacementFault::Hole),
            Cell::CardCell(Some(_)) => Err(PlacementFault::Occupied),
            Cell::CardCell(slot) => {
                *slot = Some(Placement { card, owner });
                Ok(())
            }
        }
    }

    /// Change the owner of an occupied cell.
    ///
    /// Returns false (and changes nothing) if the cell holds no card.
    pub(crate) fn set_owner(&mut self, owner: PlayerColor) -> bool {
        match self {
            Cell::CardCell(Some(placement)) => {
                placement.owner = owner;
                true
            }
            _ => false,
        }
    }
}
