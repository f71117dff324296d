//! Player identification, per-player storage, and players themselves.
//!
//! ## PlayerColor
//!
//! The two seats, Red and Blue. Color is a player's identity: two `Player`
//! values are equal iff their colors are equal.
//!
//! ## PlayerMap
//!
//! One value per color, indexable by `PlayerColor`.
//!
//! ## Player
//!
//! A color, an ordered hand, and a `PlayerKind` telling whether moves come
//! from outside (human) or from a strategy (AI).

use im::Vector;
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::action::Move;
use crate::cards::Card;
use crate::rules::GameView;
use crate::strategy::{MoveStrategy, Strategy};

/// Player seat. Red always moves first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerColor {
    Red,
    Blue,
}

impl PlayerColor {
    /// Both colors in turn order.
    pub const ALL: [PlayerColor; 2] = [PlayerColor::Red, PlayerColor::Blue];

    /// The opposing color.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            PlayerColor::Red => PlayerColor::Blue,
            PlayerColor::Blue => PlayerColor::Red,
        }
    }

    /// Single-letter tag used by the text view.
    #[must_use]
    pub const fn initial(self) -> char {
        match self {
            PlayerColor::Red => 'R',
            PlayerColor::Blue => 'B',
        }
    }
}

impl std::fmt::Display for PlayerColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerColor::Red => write!(f, "Red"),
            PlayerColor::Blue => write!(f, "Blue"),
        }
    }
}

/// Per-color data storage.
///
/// ## Example
///
/// ```
/// use three_trios::core::{PlayerColor, PlayerMap};
///
/// let mut score: PlayerMap<u32> = PlayerMap::with_value(0);
/// score[PlayerColor::Blue] += 3;
///
/// assert_eq!(score[PlayerColor::Red], 0);
/// assert_eq!(score[PlayerColor::Blue], 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    red: T,
    blue: T,
}

impl<T> PlayerMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(PlayerColor) -> T) -> Self {
        Self {
            red: factory(PlayerColor::Red),
            blue: factory(PlayerColor::Blue),
        }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            red: value.clone(),
            blue: value,
        }
    }

    /// Get a reference to a color's data.
    #[must_use]
    pub fn get(&self, color: PlayerColor) -> &T {
        match color {
            PlayerColor::Red => &self.red,
            PlayerColor::Blue => &self.blue,
        }
    }

    /// Get a mutable reference to a color's data.
    pub fn get_mut(&mut self, color: PlayerColor) -> &mut T {
        match color {
            PlayerColor::Red => &mut self.red,
            PlayerColor::Blue => &mut self.blue,
        }
    }
}

impl<T> Index<PlayerColor> for PlayerMap<T> {
    type Output = T;

    fn index(&self, color: PlayerColor) -> &Self::Output {
        self.get(color)
    }
}

impl<T> IndexMut<PlayerColor> for PlayerMap<T> {
    fn index_mut(&mut self, color: PlayerColor) -> &mut Self::Output {
        self.get_mut(color)
    }
}

/// Where a player's moves come from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerKind {
    /// Moves are supplied from outside (UI, stdin, tests).
    #[default]
    Human,
    /// Moves are chosen by a strategy.
    Ai(Strategy),
}

/// What a player wants to do on its turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnDecision {
    /// Apply this move.
    Play(Move),
    /// Wait for an external input event.
    AwaitInput,
    /// The strategy found no legal move.
    NoMove,
}

/// A player: color, hand, and kind.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Player {
    color: PlayerColor,
    hand: Vector<Card>,
    kind: PlayerKind,
}

impl Player {
    /// Create a player with an empty hand.
    #[must_use]
    pub fn new(color: PlayerColor, kind: PlayerKind) -> Self {
        Self {
            color,
            hand: Vector::new(),
            kind,
        }
    }

    /// Create a human player.
    #[must_use]
    pub fn human(color: PlayerColor) -> Self {
        Self::new(color, PlayerKind::Human)
    }

    /// Create an AI player driven by `strategy`.
    #[must_use]
    pub fn ai(color: PlayerColor, strategy: Strategy) -> Self {
        Self::new(color, PlayerKind::Ai(strategy))
    }

    #[must_use]
    pub fn color(&self) -> PlayerColor {
        self.color
    }

    #[must_use]
    pub fn kind(&self) -> PlayerKind {
        self.kind
    }

    /// Snapshot of the hand.
    ///
    /// The returned vector is owned; mutating it does not affect the player.
    /// Cloning is O(1) thanks to structural sharing.
    #[must_use]
    pub fn hand(&self) -> Vector<Card> {
        self.hand.clone()
    }

    /// Number of cards in hand.
    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.hand.len()
    }

    /// Check whether the hand holds a card equal to `card`.
    #[must_use]
    pub fn has_card(&self, card: &Card) -> bool {
        self.hand.contains(card)
    }

    /// Add a card to the end of the hand.
    pub fn add_to_hand(&mut self, card: Card) {
        self.hand.push_back(card);
    }

    /// Remove the first card equal to `card`.
    ///
    /// Returns true if a card was found and removed.
    pub fn remove_from_hand(&mut self, card: &Card) -> bool {
        if let Some(pos) = self.hand.iter().position(|c| c == card) {
            self.hand.remove(pos);
            true
        } else {
            false
        }
    }

    /// Decide what to do on this player's turn.
    ///
    /// Humans defer to an external input event; AI players ask their
    /// strategy.
    pub fn take_turn(&self, view: &dyn GameView) -> TurnDecision {
        match self.kind {
            PlayerKind::Human => TurnDecision::AwaitInput,
            PlayerKind::Ai(strategy) => match strategy.choose_move(view, self.color) {
                Some(mv) => TurnDecision::Play(mv),
                None => TurnDecision::NoMove,
            },
        }
    }
}

impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.color == other.color
    }
}

impl Eq for Player {}
