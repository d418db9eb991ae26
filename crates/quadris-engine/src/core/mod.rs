pub use self::{cell::*, grid::*, piece::*};

pub(crate) mod cell;
pub(crate) mod grid;
pub(crate) mod piece;

/// Number of columns on the playfield.
pub const GRID_WIDTH: usize = 10;
/// Number of rows on the playfield. Row 0 is the bottom.
pub const GRID_HEIGHT: usize = 22;
