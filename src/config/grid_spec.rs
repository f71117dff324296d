//! Grid layout files.
//!
//! ```text
//! 3 3
//! CCC
//! CXC
//! CCC
//! ```
//!
//! The first line holds the row and column counts. Each following line is
//! one row, `C` for a card cell and `X` for a hole. Lines after the last row
//! are ignored.

use std::path::Path;

use thiserror::Error;

use super::{read_file, ConfigError};
use crate::core::GridError;
use crate::grid::{Grid, Position};

/// Why a grid file was rejected. Rows and columns are 1-based.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GridFormatError {
    #[error("grid file is empty")]
    Empty,
    #[error("invalid grid dimensions: {0:?}")]
    BadDimensions(String),
    #[error("grid dimensions must be positive, got {rows}x{cols}")]
    NonPositiveDimensions { rows: i64, cols: i64 },
    #[error("row {row} has {found} cells, expected {expected}")]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("invalid cell {ch:?} at row {row}, column {col}")]
    InvalidCell { row: usize, col: usize, ch: char },
    #[error("grid has {found} rows, expected {expected}")]
    TooFewRows { expected: usize, found: usize },
    #[error("number of card cells must be odd and at least 3, found {0}")]
    CardCellCount(usize),
}

/// A parsed grid layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridSpec {
    pub rows: usize,
    pub cols: usize,
    /// Hole positions in row-major order.
    pub holes: Vec<Position>,
}

impl GridSpec {
    /// Parse a grid layout from text.
    pub fn parse(text: &str) -> Result<Self, GridFormatError> {
        let mut lines = text.lines();
        let header = lines
            .next()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .ok_or(GridFormatError::Empty)?;
        let (rows, cols) = parse_dimensions(header)?;

        let mut holes = Vec::new();
        let mut found = 0;
        for (row, line) in lines.take(rows).enumerate() {
            let line = line.trim();
            let width = line.chars().count();
            if width != cols {
                return Err(GridFormatError::RowLength {
                    row: row + 1,
                    expected: cols,
                    found: width,
                });
            }
            for (col, ch) in line.chars().enumerate() {
                match ch {
                    'C' => {}
                    'X' => holes.push((row, col)),
                    _ => {
                        return Err(GridFormatError::InvalidCell {
                            row: row + 1,
                            col: col + 1,
                            ch,
                        })
                    }
                }
            }
            found += 1;
        }
        if found < rows {
            return Err(GridFormatError::TooFewRows {
                expected: rows,
                found,
            });
        }

        let card_cells = rows * cols - holes.len();
        if card_cells < 3 || card_cells % 2 == 0 {
            return Err(GridFormatError::CardCellCount(card_cells));
        }

        Ok(Self { rows, cols, holes })
    }

    /// Read and parse a grid file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = read_file(path.as_ref())?;
        Ok(Self::parse(&text)?)
    }

    /// Number of card cells in the layout.
    #[must_use]
    pub fn card_cells(&self) -> usize {
        self.rows * self.cols - self.holes.len()
    }

    /// Build an empty grid with this layout.
    pub fn into_grid(self) -> Result<Grid, GridError> {
        Grid::with_holes(self.rows, self.cols, &self.holes)
    }
}

fn parse_dimensions(line: &str) -> Result<(usize, usize), GridFormatError> {
    let bad = || GridFormatError::BadDimensions(line.to_string());
    let parts: Vec<&str> = line.split_whitespace().collect();
    let [rows, cols] = parts.as_slice() else {
        return Err(bad());
    };
    let rows: i64 = rows.parse().map_err(|_| bad())?;
    let cols: i64 = cols.parse().map_err(|_| bad())?;
    match (usize::try_from(rows), usize::try_from(cols)) {
        (Ok(r), Ok(c)) if r > 0 && c > 0 => Ok((r, c)),
        _ => Err(GridFormatError::NonPositiveDimensions { rows, cols }),
    }
}
