//! Card system: attack values, directions, and cards.
//!
//! ## Key Types
//!
//! - `Value`: Attack value `1`-`9` or `A` (10)
//! - `Direction`: Compass direction with a fixed opposite
//! - `Card`: Immutable card with four attack values and the comparison rule
//!
//! The comparison rule lives here and nowhere else. It knows nothing about
//! grids, owners, or turns.

pub mod card;
pub mod value;

pub use card::Card;
pub use value::{Direction, ParseValueError, Value};
