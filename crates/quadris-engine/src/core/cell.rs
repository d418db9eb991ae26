use rand::{Rng, distr::StandardUniform, prelude::Distribution};
use serde::{Deserialize, Serialize};

/// Content of a single grid cell, also used as the kind of a piece.
///
/// Index order matters: it is the order of the piece tables and of
/// [`Cell::from_index`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[repr(u8)]
pub enum Cell {
    #[default]
    Empty = 0,
    Z = 1,
    S = 2,
    Line = 3,
    T = 4,
    Square = 5,
    L = 6,
    MirroredL = 7,
}

/// Samples one of the seven piece kinds uniformly; never [`Cell::Empty`].
impl Distribution<Cell> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Cell {
        Cell::from_index(rng.random_range(1..=7))
    }
}

impl Cell {
    /// Number of cell values including [`Cell::Empty`].
    pub const LEN: usize = 8;

    /// The seven piece kinds in index order.
    pub const PIECE_KINDS: [Cell; 7] = [
        Cell::Z,
        Cell::S,
        Cell::Line,
        Cell::T,
        Cell::Square,
        Cell::L,
        Cell::MirroredL,
    ];

    /// Converts a table index back into a cell value.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below [`Cell::LEN`].
    #[must_use]
    pub const fn from_index(index: u8) -> Self {
        match index {
            0 => Cell::Empty,
            1 => Cell::Z,
            2 => Cell::S,
            3 => Cell::Line,
            4 => Cell::T,
            5 => Cell::Square,
            6 => Cell::L,
            7 => Cell::MirroredL,
            _ => panic!("cell index out of range"),
        }
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Returns the single character used in board dumps.
    ///
    /// # Examples
    ///
    /// ```
    /// use quadris_engine::Cell;
    ///
    /// assert_eq!(Cell::Empty.as_char(), '.');
    /// assert_eq!(Cell::Line.as_char(), 'I');
    /// assert_eq!(Cell::MirroredL.as_char(), 'J');
    /// ```
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Z => 'Z',
            Cell::S => 'S',
            Cell::Line => 'I',
            Cell::T => 'T',
            Cell::Square => 'O',
            Cell::L => 'L',
            Cell::MirroredL => 'J',
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg32;

    use super::*;

    #[test]
    fn test_index_roundtrip() {
        for index in 0..8 {
            assert_eq!(Cell::from_index(index).index(), usize::from(index));
        }
    }

    #[test]
    #[should_panic(expected = "cell index out of range")]
    fn test_from_index_rejects_unknown_kind() {
        let _ = Cell::from_index(8);
    }

    #[test]
    fn test_chars_are_distinct() {
        let chars: Vec<_> = (0..8).map(|i| Cell::from_index(i).as_char()).collect();
        for (i, c) in chars.iter().enumerate() {
            assert!(!chars[i + 1..].contains(c), "duplicate char {c}");
        }
    }

    #[test]
    fn test_sampling_never_yields_empty_and_covers_all_kinds() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut seen = [false; Cell::LEN];
        for _ in 0..1000 {
            let cell: Cell = rng.random();
            assert!(!cell.is_empty());
            seen[cell.index()] = true;
        }
        assert!(!seen[0]);
        assert!(seen[1..].iter().all(|s| *s));
    }
}
