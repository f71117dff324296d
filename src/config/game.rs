//! JSON game configuration.
//!
//! ```json
//! {
//!   "grid": "grids/3x3.txt",
//!   "cards": "cards/basic.txt",
//!   "shuffle": true,
//!   "seed": 42,
//!   "red": "human",
//!   "blue": { "ai": "corner" }
//! }
//! ```
//!
//! Relative paths are resolved against the directory of the config file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::card_spec::load_cards;
use super::grid_spec::GridSpec;
use super::{read_file, ConfigError};
use crate::core::PlayerKind;
use crate::rules::{GameBuilder, GameEngine};

/// Everything needed to start a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Grid layout file.
    pub grid: PathBuf,
    /// Card pool file.
    pub cards: PathBuf,
    /// Seed for shuffling. A present seed turns shuffling on; a random seed
    /// is drawn when shuffling without one.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Shuffle the pool before dealing.
    #[serde(default)]
    pub shuffle: bool,
    #[serde(default)]
    pub red: PlayerKind,
    #[serde(default)]
    pub blue: PlayerKind,
    #[serde(skip)]
    base_dir: Option<PathBuf>,
}

impl GameConfig {
    /// Two humans, no shuffling, paths taken as given.
    pub fn new(grid: impl Into<PathBuf>, cards: impl Into<PathBuf>) -> Self {
        Self {
            grid: grid.into(),
            cards: cards.into(),
            seed: None,
            shuffle: false,
            red: PlayerKind::Human,
            blue: PlayerKind::Human,
            base_dir: None,
        }
    }

    /// Parse a config document. Paths stay relative to the working directory.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let mut config = Self::from_json_str(&read_file(path)?)?;
        config.base_dir = path.parent().map(Path::to_path_buf);
        Ok(config)
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        match &self.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }

    /// Resolved grid file path.
    #[must_use]
    pub fn grid_path(&self) -> PathBuf {
        self.resolve(&self.grid)
    }

    /// Resolved card file path.
    #[must_use]
    pub fn cards_path(&self) -> PathBuf {
        self.resolve(&self.cards)
    }

    /// Whether `build` shuffles the pool: asked for, or implied by a seed.
    #[must_use]
    pub fn shuffles(&self) -> bool {
        self.shuffle || self.seed.is_some()
    }

    /// Load both files and start a game.
    pub fn build(&self) -> Result<GameEngine, ConfigError> {
        let grid = GridSpec::load(self.grid_path())?.into_grid()?;
        let cards = load_cards(self.cards_path())?;
        debug!(cards = cards.len(), card_cells = grid.number_of_card_cells(), "config loaded");

        let mut builder = GameBuilder::new().red(self.red).blue(self.blue);
        if self.shuffles() {
            let seed = self.seed.unwrap_or_else(rand::random);
            debug!(seed, "shuffling card pool");
            builder = builder.shuffle(seed);
        }
        Ok(builder.build(grid, cards)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::Strategy;

    #[test]
    fn test_defaults() {
        let config = GameConfig::from_json_str(r#"{"grid": "g.txt", "cards": "c.txt"}"#).unwrap();

        assert_eq!(config, GameConfig::new("g.txt", "c.txt"));
        assert_eq!(config.grid_path(), PathBuf::from("g.txt"));
    }

    #[test]
    fn test_player_kinds() {
        let config = GameConfig::from_json_str(
            r#"{"grid": "g", "cards": "c", "seed": 3, "shuffle": true,
                "red": {"ai": "flip_max"}, "blue": {"ai": "corner"}}"#,
        )
        .unwrap();

        assert_eq!(config.red, PlayerKind::Ai(Strategy::FlipMax));
        assert_eq!(config.blue, PlayerKind::Ai(Strategy::Corner));
        assert_eq!(config.seed, Some(3));
        assert!(config.shuffle);
    }

    #[test]
    fn test_seed_implies_shuffle() {
        let config =
            GameConfig::from_json_str(r#"{"grid": "g", "cards": "c", "seed": 7}"#).unwrap();
        assert!(!config.shuffle);
        assert!(config.shuffles());

        assert!(!GameConfig::new("g", "c").shuffles());
    }

    #[test]
    fn test_unknown_strategy_rejected() {
        let err =
            GameConfig::from_json_str(r#"{"grid": "g", "cards": "c", "red": {"ai": "greedy"}}"#);
        assert!(matches!(err, Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_relative_paths_resolved() {
        let mut config = GameConfig::new("grid.txt", "/abs/cards.txt");
        config.base_dir = Some(PathBuf::from("configs"));

        assert_eq!(config.grid_path(), PathBuf::from("configs/grid.txt"));
        assert_eq!(config.cards_path(), PathBuf::from("/abs/cards.txt"));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = GameConfig::new("no/such/grid.txt", "c.txt").build().unwrap_err();
        match err {
            ConfigError::Io { path, .. } => assert_eq!(path, PathBuf::from("no/such/grid.txt")),
            other => panic!("unexpected error: {other}"),
        }
    }
}
