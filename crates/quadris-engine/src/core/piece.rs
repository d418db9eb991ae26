use super::cell::Cell;

/// Offset of one piece cell from the piece anchor.
///
/// `dx` grows to the right and `dy` grows *downward*, so the absolute cell of
/// an offset at anchor `(x, y)` is `(x + dx, y - dy)` on a board whose row 0 is
/// the bottom.
pub type PieceOffset = (i32, i32);

/// A tetromino: its kind and the four offsets of its cells.
///
/// Pieces are plain values. Rotation returns a new piece and never touches the
/// original.
///
/// # Example
///
/// ```
/// use quadris_engine::{Cell, Piece};
///
/// let piece = Piece::new(Cell::T);
/// let rotated = piece.rotated_right();
/// assert_eq!(rotated.rotated_left(), piece);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    kind: Cell,
    offsets: [PieceOffset; 4],
}

/// Extent of a piece's offsets, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
}

const OFFSET_TABLE: [[PieceOffset; 4]; Cell::LEN] = [
    // Empty
    [(0, 0), (0, 0), (0, 0), (0, 0)],
    // Z
    [(0, -1), (0, 0), (-1, 0), (-1, 1)],
    // S
    [(0, -1), (0, 0), (1, 0), (1, 1)],
    // Line
    [(0, -1), (0, 0), (0, 1), (0, 2)],
    // T
    [(-1, 0), (0, 0), (1, 0), (0, 1)],
    // Square
    [(0, 0), (1, 0), (0, 1), (1, 1)],
    // L
    [(-1, -1), (0, -1), (0, 0), (0, 1)],
    // MirroredL
    [(1, -1), (0, -1), (0, 0), (0, 1)],
];

impl Piece {
    /// Piece with no cells to draw; all offsets are `(0, 0)`.
    pub const EMPTY: Self = Self::new(Cell::Empty);

    #[must_use]
    pub const fn new(kind: Cell) -> Self {
        Self {
            kind,
            offsets: Self::offsets_of(kind),
        }
    }

    /// Returns the spawn-orientation offsets of `kind`.
    #[must_use]
    pub const fn offsets_of(kind: Cell) -> [PieceOffset; 4] {
        OFFSET_TABLE[kind.index()]
    }

    #[must_use]
    pub const fn kind(&self) -> Cell {
        self.kind
    }

    #[must_use]
    pub const fn offsets(&self) -> &[PieceOffset; 4] {
        &self.offsets
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.kind.is_empty()
    }

    /// Rotates a quarter turn counterclockwise: `(dx, dy)` becomes `(dy, -dx)`.
    ///
    /// The square is symmetric and comes back unchanged.
    #[must_use]
    pub fn rotated_left(&self) -> Self {
        if self.kind == Cell::Square {
            return *self;
        }
        self.map_offsets(|(dx, dy)| (dy, -dx))
    }

    /// Rotates a quarter turn clockwise: `(dx, dy)` becomes `(-dy, dx)`.
    ///
    /// The square is symmetric and comes back unchanged.
    #[must_use]
    pub fn rotated_right(&self) -> Self {
        if self.kind == Cell::Square {
            return *self;
        }
        self.map_offsets(|(dx, dy)| (-dy, dx))
    }

    fn map_offsets(&self, f: impl Fn(PieceOffset) -> PieceOffset) -> Self {
        Self {
            kind: self.kind,
            offsets: self.offsets.map(f),
        }
    }

    #[must_use]
    pub fn bounding_box(&self) -> BoundingBox {
        let (dx0, dy0) = self.offsets[0];
        self.offsets.iter().fold(
            BoundingBox {
                min_x: dx0,
                max_x: dx0,
                min_y: dy0,
                max_y: dy0,
            },
            |bb, &(dx, dy)| BoundingBox {
                min_x: bb.min_x.min(dx),
                max_x: bb.max_x.max(dx),
                min_y: bb.min_y.min(dy),
                max_y: bb.max_y.max(dy),
            },
        )
    }

    /// Returns the absolute board coordinates of the four cells when the piece
    /// is anchored at `(x, y)`. Coordinates may lie outside the board.
    pub fn cells_at(&self, x: i32, y: i32) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.offsets.iter().map(move |&(dx, dy)| (x + dx, y - dy))
    }
}
