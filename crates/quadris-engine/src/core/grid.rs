use std::fmt;

use super::{GRID_HEIGHT, GRID_WIDTH, cell::Cell, piece::Piece};

type Row = [Cell; GRID_WIDTH];

const EMPTY_ROW: Row = [Cell::Empty; GRID_WIDTH];

/// The playfield: a fixed `GRID_WIDTH` × `GRID_HEIGHT` matrix of locked cells.
///
/// Row 0 is the bottom of the playfield and row `GRID_HEIGHT - 1` the top.
/// Cell accessors take the caller's word that coordinates are in range and
/// panic otherwise; the engine checks bounds before it reads or writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: [Row; GRID_HEIGHT],
}

impl Default for Grid {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Grid {
    pub const EMPTY: Self = Self {
        rows: [EMPTY_ROW; GRID_HEIGHT],
    };

    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Cell {
        assert!(x < GRID_WIDTH, "x out of range: {x}");
        assert!(y < GRID_HEIGHT, "y out of range: {y}");
        self.rows[y][x]
    }

    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        assert!(x < GRID_WIDTH, "x out of range: {x}");
        assert!(y < GRID_HEIGHT, "y out of range: {y}");
        self.rows[y][x] = cell;
    }

    pub fn clear(&mut self) {
        self.rows.fill(EMPTY_ROW);
    }

    /// Returns true if `(x, y)` is on the board and holds no locked cell.
    ///
    /// Unlike [`Grid::get`], this accepts any coordinate.
    #[must_use]
    pub fn is_vacant(&self, x: i32, y: i32) -> bool {
        let (Ok(x), Ok(y)) = (usize::try_from(x), usize::try_from(y)) else {
            return false;
        };
        x < GRID_WIDTH && y < GRID_HEIGHT && self.rows[y][x].is_empty()
    }

    /// Returns true if every cell of `piece` anchored at `(x, y)` is vacant.
    #[must_use]
    pub fn can_place(&self, piece: &Piece, x: i32, y: i32) -> bool {
        piece.cells_at(x, y).all(|(cx, cy)| self.is_vacant(cx, cy))
    }

    #[must_use]
    pub fn is_row_full(&self, y: usize) -> bool {
        assert!(y < GRID_HEIGHT, "y out of range: {y}");
        self.rows[y].iter().all(|c| !c.is_empty())
    }

    /// Removes row `y`, moving every row above it down by one and leaving
    /// an empty top row.
    pub fn collapse_row(&mut self, y: usize) {
        assert!(y < GRID_HEIGHT, "y out of range: {y}");
        for k in y..GRID_HEIGHT - 1 {
            self.rows[k] = self.rows[k + 1];
        }
        self.rows[GRID_HEIGHT - 1] = EMPTY_ROW;
    }

    /// Collapses every full row and returns how many were removed.
    ///
    /// Rows are collapsed from the highest index down so that shifting never
    /// moves a full row that is still waiting to be removed.
    pub fn clear_full_rows(&mut self) -> usize {
        let full_rows: Vec<usize> = (0..GRID_HEIGHT).filter(|&y| self.is_row_full(y)).collect();
        for &y in full_rows.iter().rev() {
            self.collapse_row(y);
        }
        full_rows.len()
    }

    /// Iterates rows from bottom to top.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell; GRID_WIDTH]> {
        self.rows.iter()
    }
}

/// Dumps the grid top row first, one character per cell.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows.iter().rev() {
            for cell in row {
                write!(f, "{}", cell.as_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
