//! Grid system: cells and the board they live on.
//!
//! ## Key Types
//!
//! - `Cell`: A hole, or a card cell that is empty or holds a `Placement`
//! - `Placement`: A card plus its current owner
//! - `Grid`: Fixed-shape row-major array of cells
//!
//! The grid answers bounds and playability queries and performs placements.
//! It never runs battles; that belongs to the rules engine.

pub mod board;
pub mod cell;

pub use board::{Grid, Position};
pub use cell::{Cell, Placement};
