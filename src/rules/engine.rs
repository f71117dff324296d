//! The game engine: setup, turns, placement, and scoring.
//!
//! ## Lifecycle
//!
//! `NotStarted → InProgress → Over`
//!
//! - `assign_player` seats Red and Blue while not started.
//! - `initialize_game` deals `(card_cells + 1) / 2` cards to each player in
//!   pool order (Red first) and hands the turn to Red.
//! - `place_card` is the only mutator once started. It validates, places,
//!   runs the battle phase, records the move, passes the turn, and notifies
//!   listeners, all before returning.
//! - The game is over when the grid is full; no flag is stored.
//!
//! ## Invariant
//!
//! From initialization on, cards in both hands plus cards on the grid equal
//! the number of cards dealt. Battles only move ownership.

use im::Vector;
use tracing::{debug, info};

use super::battle::{self, Flips};
use super::listener::GameListener;
use super::read_only::{GameResult, GameView};
use crate::cards::Card;
use crate::core::{
    Move, MoveError, MoveRecord, Player, PlayerColor, PlayerMap, SetupError, TurnDecision,
};
use crate::grid::{Cell, Grid};

/// Coarse game phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GamePhase {
    NotStarted,
    InProgress,
    Over,
}

/// What a successful placement did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlacementReport {
    /// Cells flipped by the battle phase, in cascade order.
    pub flips: Flips,
    /// True if this placement filled the grid.
    pub game_over: bool,
}

/// State of a started game.
#[derive(Clone, Debug)]
struct Table {
    grid: Grid,
    players: PlayerMap<Player>,
    current: PlayerColor,
    turn: u32,
    dealt: usize,
    history: Vec<MoveRecord>,
}

impl Table {
    fn score(&self, color: PlayerColor) -> usize {
        self.players[color].hand_size() + self.grid.owned_by(color)
    }

    fn result(&self) -> GameResult {
        if !self.grid.is_full() {
            return GameResult::NotOver;
        }
        let red = self.score(PlayerColor::Red);
        let blue = self.score(PlayerColor::Blue);
        match red.cmp(&blue) {
            std::cmp::Ordering::Greater => GameResult::Winner(PlayerColor::Red),
            std::cmp::Ordering::Less => GameResult::Winner(PlayerColor::Blue),
            std::cmp::Ordering::Equal => GameResult::Tie,
        }
    }
}

#[derive(Clone, Debug)]
enum Stage {
    Setup(PlayerMap<Option<Player>>),
    Playing(Table),
}

/// Rules engine for one game.
///
/// ## Example
///
/// ```
/// use three_trios::cards::{Card, Value};
/// use three_trios::core::{Player, PlayerColor};
/// use three_trios::grid::Grid;
/// use three_trios::rules::{GameEngine, GameView};
///
/// let grid = Grid::with_holes(1, 3, &[]).unwrap();
/// let cards: Vec<Card> = (0..4)
///     .map(|i| Card::new(format!("c{i}"), Value::Five, Value::Five, Value::Five, Value::Five))
///     .collect();
///
/// let mut engine = GameEngine::new();
/// engine.assign_player(Player::human(PlayerColor::Red)).unwrap();
/// engine.assign_player(Player::human(PlayerColor::Blue)).unwrap();
/// engine.initialize_game(grid, cards).unwrap();
///
/// let card = engine.hand(PlayerColor::Red)[0].clone();
/// engine.place_card(PlayerColor::Red, &card, 0, 0).unwrap();
/// assert_eq!(engine.current_player(), PlayerColor::Blue);
/// ```
pub struct GameEngine {
    stage: Stage,
    listeners: Vec<Box<dyn GameListener>>,
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for GameEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameEngine")
            .field("stage", &self.stage)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl GameEngine {
    /// Create an engine with no players and no grid.
    #[must_use]
    pub fn new() -> Self {
        Self {
            stage: Stage::Setup(PlayerMap::new(|_| None)),
            listeners: Vec::new(),
        }
    }

    /// Seat a player under its color, replacing any earlier assignment.
    pub fn assign_player(&mut self, player: Player) -> Result<(), SetupError> {
        match &mut self.stage {
            Stage::Setup(seats) => {
                let color = player.color();
                seats[color] = Some(player);
                Ok(())
            }
            Stage::Playing(_) => Err(SetupError::AlreadyStarted),
        }
    }

    /// Register a listener for turn and game-over notifications.
    pub fn add_listener(&mut self, listener: Box<dyn GameListener>) {
        self.listeners.push(listener);
    }

    /// Start the game: deal hands from `cards` in pool order.
    ///
    /// The pool is used verbatim; shuffle it beforehand if wanted. Hands are
    /// dealt fresh, so cards already in an assigned player's hand are dropped.
    ///
    /// ## Errors
    ///
    /// - `AlreadyStarted` if called twice
    /// - `PlayersNotAssigned` if Red or Blue is missing
    /// - `InsufficientCards` if the pool has fewer than `card_cells + 1` cards
    pub fn initialize_game(&mut self, grid: Grid, cards: Vec<Card>) -> Result<(), SetupError> {
        let Stage::Setup(seats) = &self.stage else {
            return Err(SetupError::AlreadyStarted);
        };
        let (Some(red), Some(blue)) = (&seats[PlayerColor::Red], &seats[PlayerColor::Blue]) else {
            return Err(SetupError::PlayersNotAssigned);
        };

        let card_cells = grid.number_of_card_cells();
        let required = card_cells + 1;
        if cards.len() < required {
            return Err(SetupError::InsufficientCards {
                required,
                found: cards.len(),
            });
        }

        let per_player = (card_cells + 1) / 2;
        let mut players = PlayerMap::new(|color| {
            let seat = if color == PlayerColor::Red { red } else { blue };
            Player::new(color, seat.kind())
        });
        let mut pool = cards.into_iter();
        for color in PlayerColor::ALL {
            for card in pool.by_ref().take(per_player) {
                players[color].add_to_hand(card);
            }
        }

        debug!(card_cells, per_player, "game initialized");

        self.stage = Stage::Playing(Table {
            grid,
            players,
            current: PlayerColor::Red,
            turn: 1,
            dealt: per_player * 2,
            history: Vec::new(),
        });
        Ok(())
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> GamePhase {
        match &self.stage {
            Stage::Setup(_) => GamePhase::NotStarted,
            Stage::Playing(table) if table.grid.is_full() => GamePhase::Over,
            Stage::Playing(_) => GamePhase::InProgress,
        }
    }

    fn table(&self) -> Option<&Table> {
        match &self.stage {
            Stage::Playing(table) => Some(table),
            Stage::Setup(_) => None,
        }
    }

    /// The grid, once started.
    #[must_use]
    pub fn grid(&self) -> Option<&Grid> {
        self.table().map(|t| &t.grid)
    }

    /// A player, once assigned.
    #[must_use]
    pub fn player(&self, color: PlayerColor) -> Option<&Player> {
        match &self.stage {
            Stage::Setup(seats) => seats[color].as_ref(),
            Stage::Playing(table) => Some(&table.players[color]),
        }
    }

    /// The player waiting for the current one.
    #[must_use]
    pub fn opponent_player(&self) -> PlayerColor {
        self.current_player().other()
    }

    /// Number of cards dealt at initialization (0 before).
    #[must_use]
    pub fn cards_dealt(&self) -> usize {
        self.table().map_or(0, |t| t.dealt)
    }

    /// Applied moves in order.
    #[must_use]
    pub fn history(&self) -> &[MoveRecord] {
        self.table().map_or(&[], |t| t.history.as_slice())
    }

    /// Place `card` from `player`'s hand at `(row, col)`.
    ///
    /// Checks run in a fixed order so callers get the earliest applicable
    /// error: phase, then turn, then cell, then hand membership. On any error
    /// nothing changes.
    pub fn place_card(
        &mut self,
        player: PlayerColor,
        card: &Card,
        row: usize,
        col: usize,
    ) -> Result<PlacementReport, MoveError> {
        let Stage::Playing(table) = &mut self.stage else {
            return Err(MoveError::GameNotStarted);
        };
        if table.grid.is_full() {
            return Err(MoveError::GameOver);
        }
        if player != table.current {
            return Err(MoveError::NotYourTurn);
        }
        if !table.grid.is_playable(row, col).unwrap_or(false) {
            return Err(MoveError::IllegalCell { row, col });
        }
        if !table.players[player].has_card(card) {
            return Err(MoveError::CardNotInHand(card.name.clone()));
        }

        table
            .grid
            .place_card(card.clone(), row, col, player)
            .map_err(|_| MoveError::IllegalCell { row, col })?;
        table.players[player].remove_from_hand(card);

        let flips = battle::resolve_battle(&mut table.grid, (row, col));
        debug!(%player, card = %card.name, row, col, flips = flips.len(), "card placed");

        table.history.push(MoveRecord::new(
            table.turn,
            player,
            Move::new(card.clone(), row, col),
            flips.clone(),
        ));
        table.turn += 1;
        table.current = player.other();

        let game_over = table.grid.is_full();
        let current = table.current;
        let result = table.result();
        if game_over {
            info!(
                red = table.score(PlayerColor::Red),
                blue = table.score(PlayerColor::Blue),
                %result,
                "game over"
            );
        }

        for listener in &mut self.listeners {
            listener.turn_changed(current);
            if game_over {
                listener.game_over(&result);
            }
        }

        Ok(PlacementReport { flips, game_over })
    }

    /// Apply a move produced by a strategy or a controller.
    pub fn play_move(
        &mut self,
        player: PlayerColor,
        mv: &Move,
    ) -> Result<PlacementReport, MoveError> {
        self.place_card(player, &mv.card, mv.row, mv.col)
    }

    /// Let the current player act if it is an AI.
    ///
    /// Returns `Ok(None)` for human players (they act through `place_card`)
    /// and for AI players whose strategy finds no move.
    pub fn take_ai_turn(&mut self) -> Result<Option<PlacementReport>, MoveError> {
        let view: &dyn GameView = &*self;
        let table = self.table().ok_or(MoveError::GameNotStarted)?;
        if table.grid.is_full() {
            return Err(MoveError::GameOver);
        }
        let current = table.current;
        let decision = table.players[current].take_turn(view);

        match decision {
            TurnDecision::Play(mv) => {
                debug!(
                    player = %current,
                    card = %mv.card.name,
                    row = mv.row,
                    col = mv.col,
                    "ai move"
                );
                self.play_move(current, &mv).map(Some)
            }
            TurnDecision::AwaitInput | TurnDecision::NoMove => Ok(None),
        }
    }
}

impl GameView for GameEngine {
    fn current_player(&self) -> PlayerColor {
        self.table().map_or(PlayerColor::Red, |t| t.current)
    }

    fn grid_rows(&self) -> usize {
        self.grid().map_or(0, Grid::rows)
    }

    fn grid_cols(&self) -> usize {
        self.grid().map_or(0, Grid::cols)
    }

    fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.grid().and_then(|g| g.cell(row, col).ok())
    }

    fn hand(&self, player: PlayerColor) -> Vector<Card> {
        self.player(player).map(Player::hand).unwrap_or_default()
    }

    fn is_legal_move(&self, player: PlayerColor, row: usize, col: usize) -> bool {
        self.table().is_some_and(|t| {
            !t.grid.is_full()
                && t.current == player
                && t.grid.is_playable(row, col).unwrap_or(false)
        })
    }

    fn potential_flips(&self, player: PlayerColor, card: &Card, row: usize, col: usize) -> usize {
        match self.grid() {
            Some(grid) if grid.is_playable(row, col).unwrap_or(false) => {
                battle::potential_flips(grid, card, player, row, col)
            }
            _ => 0,
        }
    }

    fn player_score(&self, player: PlayerColor) -> usize {
        self.table().map_or(0, |t| t.score(player))
    }

    fn is_game_over(&self) -> bool {
        self.phase() == GamePhase::Over
    }

    fn winner(&self) -> GameResult {
        self.table().map_or(GameResult::NotOver, Table::result)
    }
}
