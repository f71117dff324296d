//! Conversions to and from a provider's game API.
//!
//! The provider API speaks integer card values (1 to 10, with 10 for `A`),
//! its own color enum, cards that carry their owner, and a winner query that
//! fails on a tie. Nothing in the engine depends on this module.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cards::{Card, Value};
use crate::core::PlayerColor;
use crate::rules::{GameResult, GameView};

/// Errors crossing the provider boundary.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InteropError {
    #[error("card value {0} is outside 1..=10")]
    InvalidValue(i32),
    #[error("the game ended in a tie")]
    Tie,
    #[error("the game is not over")]
    NotOver,
}

/// Provider-side player color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProviderColor {
    Red,
    Blue,
}

impl From<PlayerColor> for ProviderColor {
    fn from(color: PlayerColor) -> Self {
        match color {
            PlayerColor::Red => ProviderColor::Red,
            PlayerColor::Blue => ProviderColor::Blue,
        }
    }
}

impl From<ProviderColor> for PlayerColor {
    fn from(color: ProviderColor) -> Self {
        match color {
            ProviderColor::Red => PlayerColor::Red,
            ProviderColor::Blue => PlayerColor::Blue,
        }
    }
}

/// Provider-side card: integer values and an owner.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderCard {
    pub name: String,
    pub north: i32,
    pub south: i32,
    pub east: i32,
    pub west: i32,
    pub owner: ProviderColor,
}

impl ProviderCard {
    /// Wrap an engine card for the provider, tagged with `owner`.
    #[must_use]
    pub fn from_card(card: &Card, owner: PlayerColor) -> Self {
        let int = |v: Value| i32::from(v.get());
        Self {
            name: card.name.clone(),
            north: int(card.north()),
            south: int(card.south()),
            east: int(card.east()),
            west: int(card.west()),
            owner: owner.into(),
        }
    }

    /// Convert back to an engine card, dropping the owner.
    pub fn to_card(&self) -> Result<Card, InteropError> {
        let value = |v: i32| Value::from_int(v).ok_or(InteropError::InvalidValue(v));
        Ok(Card::new(
            self.name.clone(),
            value(self.north)?,
            value(self.south)?,
            value(self.east)?,
            value(self.west)?,
        ))
    }
}

/// A player's hand as provider cards.
#[must_use]
pub fn provider_hand(view: &dyn GameView, color: ProviderColor) -> Vec<ProviderCard> {
    let color = PlayerColor::from(color);
    view.hand(color)
        .iter()
        .map(|card| ProviderCard::from_card(card, color))
        .collect()
}

/// The winner in provider terms. Ties and unfinished games are errors.
pub fn provider_winner(view: &dyn GameView) -> Result<ProviderColor, InteropError> {
    match view.winner() {
        GameResult::Winner(color) => Ok(color.into()),
        GameResult::Tie => Err(InteropError::Tie),
        GameResult::NotOver => Err(InteropError::NotOver),
    }
}

/// Provider flip probe. Negative coordinates are never playable.
pub fn provider_potential_flips(
    view: &dyn GameView,
    card: &ProviderCard,
    row: i32,
    col: i32,
    color: ProviderColor,
) -> Result<usize, InteropError> {
    let card = card.to_card()?;
    match (usize::try_from(row), usize::try_from(col)) {
        (Ok(row), Ok(col)) => Ok(view.potential_flips(color.into(), &card, row, col)),
        _ => Ok(0),
    }
}
