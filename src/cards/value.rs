//! Attack values and compass directions.
//!
//! ## Value
//!
//! Closed set of attack values `1`-`9` plus `A` (10). Declaration order
//! matches numeric order, so the derived `Ord` is the game's ordering.
//!
//! ## Direction
//!
//! The four compass directions. `Direction::ALL` is the fixed enumeration
//! order (North, South, East, West) used by the battle phase.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Attack value printed on one side of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Value {
    One = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    A = 10,
}

impl Value {
    /// All values in ascending order.
    pub const ALL: [Value; 10] = [
        Value::One,
        Value::Two,
        Value::Three,
        Value::Four,
        Value::Five,
        Value::Six,
        Value::Seven,
        Value::Eight,
        Value::Nine,
        Value::A,
    ];

    /// Get the integer value (1-10).
    #[must_use]
    pub const fn get(self) -> u8 {
        self as u8
    }

    /// Convert an integer in `1..=10` into a value.
    #[must_use]
    pub fn from_int(value: i32) -> Option<Self> {
        if (1..=10).contains(&value) {
            Some(Self::ALL[(value - 1) as usize])
        } else {
            None
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::A => write!(f, "A"),
            other => write!(f, "{}", other.get()),
        }
    }
}

/// Error returned when a token is not a valid attack value.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid card value: {0:?}")]
pub struct ParseValueError(pub String);

impl FromStr for Value {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(Value::A),
            // Only single digits 1-9; "10" is spelled "A".
            digit if digit.len() == 1 => digit
                .parse::<i32>()
                .ok()
                .filter(|v| (1..=9).contains(v))
                .and_then(Value::from_int)
                .ok_or_else(|| ParseValueError(s.to_string())),
            _ => Err(ParseValueError(s.to_string())),
        }
    }
}

/// Compass direction on the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Fixed enumeration order. The battle phase visits neighbors in this order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// The direction facing this one.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    /// Row/column offset of the neighbor in this direction.
    #[must_use]
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::East => (0, 1),
            Direction::West => (0, -1),
        }
    }
}
