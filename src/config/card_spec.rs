//! Card pool files: one `NAME N S E W` card per line.

use std::path::Path;

use rustc_hash::FxHashSet;
use thiserror::Error;
use tracing::warn;

use super::{read_file, ConfigError};
use crate::cards::{Card, Value};

/// Why a card file was rejected. Lines are 1-based.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CardFormatError {
    #[error("line {line}: expected `NAME N S E W`, got {text:?}")]
    Malformed { line: usize, text: String },
    #[error("line {line}: invalid card value {value:?}")]
    InvalidValue { line: usize, value: String },
}

/// Parse a card pool. Blank lines are skipped.
///
/// Duplicate names are allowed but logged.
pub fn parse_cards(text: &str) -> Result<Vec<Card>, CardFormatError> {
    let mut cards = Vec::new();
    let mut seen = FxHashSet::default();

    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        let text = raw.trim();
        if text.is_empty() {
            continue;
        }

        let parts: Vec<&str> = text.split_whitespace().collect();
        let [name, north, south, east, west] = parts.as_slice() else {
            return Err(CardFormatError::Malformed {
                line,
                text: text.to_string(),
            });
        };
        let value = |s: &str| {
            s.parse::<Value>().map_err(|_| CardFormatError::InvalidValue {
                line,
                value: s.to_string(),
            })
        };
        let card = Card::new(*name, value(*north)?, value(*south)?, value(*east)?, value(*west)?);

        if !seen.insert(card.name.clone()) {
            warn!(line, name = %card.name, "duplicate card name");
        }
        cards.push(card);
    }

    Ok(cards)
}

/// Read and parse a card file.
pub fn load_cards(path: impl AsRef<Path>) -> Result<Vec<Card>, ConfigError> {
    let text = read_file(path.as_ref())?;
    Ok(parse_cards(&text)?)
}
