//! Loading games from files.
//!
//! - `grid_spec`: grid layout text files
//! - `card_spec`: card pool text files
//! - `game`: the JSON document tying them together with player kinds

pub mod card_spec;
pub mod game;
pub mod grid_spec;

pub use card_spec::{load_cards, parse_cards, CardFormatError};
pub use game::GameConfig;
pub use grid_spec::{GridFormatError, GridSpec};

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::{GridError, SetupError};

/// Errors from loading configuration and starting a game from it.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid grid file: {0}")]
    Grid(#[from] GridFormatError),
    #[error("invalid card file: {0}")]
    Cards(#[from] CardFormatError),
    #[error(transparent)]
    Shape(#[from] GridError),
    #[error(transparent)]
    Setup(#[from] SetupError),
}

fn read_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}
