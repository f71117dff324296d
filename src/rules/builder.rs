//! Builder for a ready-to-play engine.

use tracing::debug;

use super::engine::GameEngine;
use super::listener::GameListener;
use crate::cards::Card;
use crate::core::{GameRng, Player, PlayerColor, PlayerKind, PlayerMap, SetupError};
use crate::grid::Grid;

/// Builder for creating a started `GameEngine`.
///
/// Both seats default to human. Without `shuffle`, the card pool is dealt in
/// the order given.
///
/// ## Example
///
/// ```
/// use three_trios::cards::{Card, Value};
/// use three_trios::core::{PlayerColor, PlayerKind};
/// use three_trios::grid::Grid;
/// use three_trios::rules::{GameBuilder, GameView};
/// use three_trios::strategy::Strategy;
///
/// let grid = Grid::with_holes(3, 3, &[(1, 1)]).unwrap();
/// let cards: Vec<Card> = (0..10)
///     .map(|i| Card::new(format!("c{i}"), Value::One, Value::Two, Value::Three, Value::Four))
///     .collect();
///
/// let engine = GameBuilder::new()
///     .blue(PlayerKind::Ai(Strategy::Corner))
///     .shuffle(42)
///     .build(grid, cards)
///     .unwrap();
///
/// assert_eq!(engine.hand(PlayerColor::Red).len(), 4);
/// assert_eq!(engine.current_player(), PlayerColor::Red);
/// ```
pub struct GameBuilder {
    kinds: PlayerMap<PlayerKind>,
    seed: Option<u64>,
    listeners: Vec<Box<dyn GameListener>>,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self {
            kinds: PlayerMap::with_value(PlayerKind::Human),
            seed: None,
            listeners: Vec::new(),
        }
    }
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn red(mut self, kind: PlayerKind) -> Self {
        self.kinds[PlayerColor::Red] = kind;
        self
    }

    pub fn blue(mut self, kind: PlayerKind) -> Self {
        self.kinds[PlayerColor::Blue] = kind;
        self
    }

    /// Shuffle the card pool with a seeded RNG before dealing.
    pub fn shuffle(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn listener(mut self, listener: Box<dyn GameListener>) -> Self {
        self.listeners.push(listener);
        self
    }

    /// Seat both players, deal, and start the game.
    pub fn build(self, grid: Grid, mut cards: Vec<Card>) -> Result<GameEngine, SetupError> {
        if let Some(seed) = self.seed {
            GameRng::new(seed).for_context("deal").shuffle(&mut cards);
            debug!(seed, "card pool shuffled");
        }

        let mut engine = GameEngine::new();
        for color in PlayerColor::ALL {
            engine.assign_player(Player::new(color, self.kinds[color]))?;
        }
        for listener in self.listeners {
            engine.add_listener(listener);
        }
        engine.initialize_game(grid, cards)?;
        Ok(engine)
    }
}
