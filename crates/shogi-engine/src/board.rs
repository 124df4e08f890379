//! The 9x9 piece grid.

use shogi_core::{Piece, PieceType, Side, Square};

/// A 9x9 grid of optional pieces, indexed by [`Square`].
///
/// `Board` is `Copy`; every move produces a fresh board, so older positions
/// stay valid for as long as callers hold them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Option<Piece>; Square::COUNT],
}

impl Board {
    /// A board with no pieces.
    pub const EMPTY: Board = Board {
        cells: [None; Square::COUNT],
    };

    /// Returns the piece on the given square, if any.
    #[inline]
    pub fn get(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.index()]
    }

    /// Puts a piece on (or clears) the given square.
    #[inline]
    pub fn set(&mut self, sq: Square, piece: Option<Piece>) {
        self.cells[sq.index()] = piece;
    }

    /// Removes and returns the piece on the given square.
    #[inline]
    pub fn take(&mut self, sq: Square) -> Option<Piece> {
        self.cells[sq.index()].take()
    }

    /// Returns true if the square is empty.
    #[inline]
    pub fn is_empty_at(&self, sq: Square) -> bool {
        self.cells[sq.index()].is_none()
    }

    /// Iterates over every occupied square.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.get(sq).map(|p| (sq, p)))
    }

    /// Iterates over the squares holding pieces owned by `side`.
    pub fn pieces_of(&self, side: Side) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, p)| p.owner == side)
    }

    /// Returns the square of `side`'s King, if it is on the board.
    pub fn king_square(&self, side: Side) -> Option<Square> {
        self.pieces_of(side)
            .find(|(_, p)| p.kind == PieceType::King)
            .map(|(sq, _)| sq)
    }

    /// Returns true if `side` has an unpromoted Pawn on column `col`.
    pub fn has_unpromoted_pawn_on_col(&self, side: Side, col: u8) -> bool {
        (0..Square::SIZE)
            .filter_map(|row| Square::new(row, col))
            .filter_map(|sq| self.get(sq))
            .any(|p| p.owner == side && p.kind == PieceType::Pawn && !p.promoted)
    }

    /// Returns the number of pieces on the board.
    pub fn count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::EMPTY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn set_get_take() {
        let mut board = Board::EMPTY;
        let silver = Piece::new(PieceType::Silver, Side::Gote);
        board.set(sq(2, 3), Some(silver));
        assert_eq!(board.get(sq(2, 3)), Some(silver));
        assert!(!board.is_empty_at(sq(2, 3)));
        assert_eq!(board.count(), 1);

        assert_eq!(board.take(sq(2, 3)), Some(silver));
        assert!(board.is_empty_at(sq(2, 3)));
        assert_eq!(board.count(), 0);
    }

    #[test]
    fn pieces_of_filters_by_owner() {
        let mut board = Board::EMPTY;
        board.set(sq(8, 4), Some(Piece::new(PieceType::King, Side::Sente)));
        board.set(sq(0, 4), Some(Piece::new(PieceType::King, Side::Gote)));
        board.set(sq(6, 0), Some(Piece::new(PieceType::Pawn, Side::Sente)));

        assert_eq!(board.pieces().count(), 3);
        assert_eq!(board.pieces_of(Side::Sente).count(), 2);
        assert_eq!(board.king_square(Side::Gote), Some(sq(0, 4)));
        assert_eq!(board.king_square(Side::Sente), Some(sq(8, 4)));
    }

    #[test]
    fn missing_king() {
        assert_eq!(Board::EMPTY.king_square(Side::Sente), None);
    }

    #[test]
    fn pawn_file_ignores_promoted_and_enemy_pawns() {
        let mut board = Board::EMPTY;
        board.set(sq(3, 5), Some(Piece::new(PieceType::Pawn, Side::Sente).promote()));
        board.set(sq(4, 5), Some(Piece::new(PieceType::Pawn, Side::Gote)));
        assert!(!board.has_unpromoted_pawn_on_col(Side::Sente, 5));
        assert!(board.has_unpromoted_pawn_on_col(Side::Gote, 5));

        board.set(sq(6, 5), Some(Piece::new(PieceType::Pawn, Side::Sente)));
        assert!(board.has_unpromoted_pawn_on_col(Side::Sente, 5));
        assert!(!board.has_unpromoted_pawn_on_col(Side::Sente, 4));
    }
}
