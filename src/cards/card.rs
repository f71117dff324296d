//! Card data and the comparison rule.
//!
//! A `Card` is immutable: a name plus four printed attack values. Once a card
//! is on the grid it never changes; battles only move ownership.

use serde::{Deserialize, Serialize};

use super::value::{Direction, Value};

/// A playing card with one attack value per side.
///
/// ## Example
///
/// ```
/// use three_trios::cards::{Card, Direction, Value};
///
/// let dragon = Card::new("Dragon", Value::Five, Value::Three, Value::Seven, Value::Six);
/// let slime = Card::new("Slime", Value::Three, Value::Three, Value::Three, Value::Three);
///
/// // Dragon attacks west: its West (6) against the slime's East (3).
/// assert!(dragon.compare_against(&slime, Direction::West));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Card name (for display/debugging).
    pub name: String,
    north: Value,
    south: Value,
    east: Value,
    west: Value,
}

impl Card {
    /// Create a new card.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        north: Value,
        south: Value,
        east: Value,
        west: Value,
    ) -> Self {
        Self {
            name: name.into(),
            north,
            south,
            east,
            west,
        }
    }

    /// Get the card name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the value printed on the given side.
    #[must_use]
    pub const fn value(&self, direction: Direction) -> Value {
        match direction {
            Direction::North => self.north,
            Direction::South => self.south,
            Direction::East => self.east,
            Direction::West => self.west,
        }
    }

    #[must_use]
    pub const fn north(&self) -> Value {
        self.north
    }

    #[must_use]
    pub const fn south(&self) -> Value {
        self.south
    }

    #[must_use]
    pub const fn east(&self) -> Value {
        self.east
    }

    #[must_use]
    pub const fn west(&self) -> Value {
        self.west
    }

    /// Does this card beat `opponent` when attacking in `direction`?
    ///
    /// Compares this card's value in `direction` against the opponent's value
    /// in the opposite direction. Strictly greater wins; ties never flip.
    #[must_use]
    pub fn compare_against(&self, opponent: &Card, direction: Direction) -> bool {
        self.value(direction) > opponent.value(direction.opposite())
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.name, self.north, self.south, self.east, self.west
        )
    }
}
