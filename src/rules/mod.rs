//! Game rules: the engine, the battle phase, and the read-only view.
//!
//! `GameEngine` owns all mutable state. Everything outside this module
//! observes a game through `GameView` and changes it only through
//! `GameEngine::place_card`.

pub mod battle;
pub mod builder;
pub mod engine;
pub mod listener;
pub mod read_only;

pub use battle::{potential_flips, resolve_battle, Flips};
pub use builder::GameBuilder;
pub use engine::{GameEngine, GamePhase, PlacementReport};
pub use listener::{ChannelListener, GameListener, StatusEvent};
pub use read_only::{GameResult, GameView};
