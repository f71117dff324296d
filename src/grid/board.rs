//! The game grid: a fixed `rows × cols` array of cells.
//!
//! Cells are stored row-major. The shape never changes after construction.
//! Adjacency is computed on demand; nothing about the topology is cached.

use serde::{Deserialize, Serialize};

use super::cell::Cell;
use crate::cards::{Card, Direction};
use crate::core::{GridError, PlacementFault, PlayerColor};

/// A `(row, col)` coordinate, 0-based.
pub type Position = (usize, usize);

/// Fixed-size grid of holes and card cells.
///
/// ## Example
///
/// ```
/// use three_trios::grid::{Cell, Grid};
///
/// // C X C
/// let grid = Grid::new(1, 3, vec![Cell::empty(), Cell::Hole, Cell::empty()]).unwrap();
///
/// assert_eq!(grid.number_of_card_cells(), 2);
/// assert_eq!(grid.is_playable(0, 0), Ok(true));
/// assert_eq!(grid.is_playable(0, 1), Ok(false));
/// assert!(grid.is_playable(0, 3).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GridParts")]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

/// Unchecked serialized form; goes through `Grid::new` on the way in.
#[derive(Deserialize)]
struct GridParts {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl TryFrom<GridParts> for Grid {
    type Error = GridError;

    fn try_from(parts: GridParts) -> Result<Self, Self::Error> {
        Self::new(parts.rows, parts.cols, parts.cells)
    }
}

impl Grid {
    /// Create a grid from row-major cells.
    ///
    /// Fails if either dimension is zero or the cell count does not match.
    pub fn new(rows: usize, cols: usize, cells: Vec<Cell>) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 || rows.checked_mul(cols) != Some(cells.len()) {
            return Err(GridError::InvalidShape {
                rows,
                cols,
                cells: cells.len(),
            });
        }
        Ok(Self { rows, cols, cells })
    }

    /// Create a grid from nested rows. All rows must have the same length.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|row| row.len() != width) {
            let cells = rows.iter().map(Vec::len).sum();
            return Err(GridError::InvalidShape {
                rows: height,
                cols: width,
                cells,
            });
        }
        Self::new(height, width, rows.into_iter().flatten().collect())
    }

    /// Create a grid of empty card cells with holes at the given positions.
    ///
    /// Positions outside the grid are ignored.
    pub fn with_holes(rows: usize, cols: usize, holes: &[Position]) -> Result<Self, GridError> {
        let mut grid = Self::new(rows, cols, vec![Cell::empty(); rows.saturating_mul(cols)])?;
        for &(row, col) in holes {
            if grid.is_within_bounds(row, col) {
                let idx = grid.index(row, col);
                grid.cells[idx] = Cell::Hole;
            }
        }
        Ok(grid)
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[must_use]
    pub fn is_within_bounds(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<usize, GridError> {
        if self.is_within_bounds(row, col) {
            Ok(self.index(row, col))
        } else {
            Err(GridError::OutOfBounds { row, col })
        }
    }

    /// Get a cell. Out of bounds is an error.
    pub fn cell(&self, row: usize, col: usize) -> Result<&Cell, GridError> {
        let idx = self.check_bounds(row, col)?;
        Ok(&self.cells[idx])
    }

    /// Can a card be placed here? In bounds, not a hole, not occupied.
    ///
    /// Out of bounds is an error, never a silent `false`.
    pub fn is_playable(&self, row: usize, col: usize) -> Result<bool, GridError> {
        let cell = self.cell(row, col)?;
        Ok(!cell.is_hole() && !cell.is_occupied())
    }

    /// Place a card owned by `owner`.
    ///
    /// Touches no other cell; the battle phase is a separate step.
    pub fn place_card(
        &mut self,
        card: Card,
        row: usize,
        col: usize,
        owner: PlayerColor,
    ) -> Result<(), GridError> {
        let idx = self
            .check_bounds(row, col)
            .map_err(|_| GridError::InvalidPlacement {
                row,
                col,
                reason: PlacementFault::OutOfBounds,
            })?;
        self.cells[idx]
            .place(card, owner)
            .map_err(|reason| GridError::InvalidPlacement { row, col, reason })
    }

    /// Change the owner of an occupied cell. Returns false if nothing changed.
    pub(crate) fn set_owner(&mut self, row: usize, col: usize, owner: PlayerColor) -> bool {
        match self.check_bounds(row, col) {
            Ok(idx) => self.cells[idx].set_owner(owner),
            Err(_) => false,
        }
    }

    /// The neighbor coordinate in `direction`, if it is inside the grid.
    #[must_use]
    pub fn neighbor(&self, row: usize, col: usize, direction: Direction) -> Option<Position> {
        let (dr, dc) = direction.offset();
        let r = row.checked_add_signed(dr)?;
        let c = col.checked_add_signed(dc)?;
        self.is_within_bounds(r, c).then_some((r, c))
    }

    /// Number of non-hole cells.
    #[must_use]
    pub fn number_of_card_cells(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_hole()).count()
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn cards_on_grid(&self) -> usize {
        self.cells.iter().filter(|c| c.is_occupied()).count()
    }

    /// Number of cells owned by `color`.
    #[must_use]
    pub fn owned_by(&self, color: PlayerColor) -> usize {
        self.cells
            .iter()
            .filter(|c| c.owner() == Some(color))
            .count()
    }

    /// True iff every card cell is occupied.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| c.is_hole() || c.is_occupied())
    }
}
