//! Board square representation.

use std::fmt;

/// A square on the 9x9 shogi board, indexed 0-80.
///
/// Squares are stored row-major: row 0 is Gote's back rank, row 8 is
/// Sente's back rank, and column 0 is file 9 in USI notation. So (0, 0) is
/// `9a` and (8, 8) is `1i`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// Number of rows (and columns) on the board.
    pub const SIZE: u8 = 9;

    /// Number of squares on the board.
    pub const COUNT: usize = 81;

    /// Creates a square from row and column (each 0-8).
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < Self::SIZE && col < Self::SIZE {
            Some(Square(row * Self::SIZE + col))
        } else {
            None
        }
    }

    /// Creates a square from index (0-80).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if (index as usize) < Self::COUNT {
            Some(Square(index))
        } else {
            None
        }
    }

    /// Iterates over all 81 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..Self::COUNT as u8).map(Square)
    }

    /// Returns the index (0-80).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the row (0 = Gote's back rank).
    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / Self::SIZE
    }

    /// Returns the column (0 = file 9).
    #[inline]
    pub const fn col(self) -> u8 {
        self.0 % Self::SIZE
    }

    /// Returns the square `(dr, dc)` away, or `None` if it falls off the board.
    #[inline]
    pub const fn offset(self, dr: i8, dc: i8) -> Option<Self> {
        let row = self.row() as i8 + dr;
        let col = self.col() as i8 + dc;
        if row < 0 || col < 0 {
            return None;
        }
        Self::new(row as u8, col as u8)
    }

    /// Parses a square from USI coordinates (e.g., "7g").
    pub const fn from_usi(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let file = bytes[0];
        let rank = bytes[1];
        if file < b'1' || file > b'9' || rank < b'a' || rank > b'i' {
            return None;
        }
        Self::new(rank - b'a', b'9' - file)
    }

    /// Returns the USI coordinates for this square.
    pub fn to_usi(self) -> String {
        let file = (b'9' - self.col()) as char;
        let rank = (b'a' + self.row()) as char;
        format!("{}{}", file, rank)
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({}, {})", self.row(), self.col())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_usi())
    }
}
