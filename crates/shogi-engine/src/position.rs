//! Shogi position representation.

use shogi_core::{Hand, Piece, PieceType, Side, Square};

use crate::Board;

/// Back rank layout from column 0 to column 8.
const BACK_RANK: [PieceType; 9] = [
    PieceType::Lance,
    PieceType::Knight,
    PieceType::Silver,
    PieceType::Gold,
    PieceType::King,
    PieceType::Gold,
    PieceType::Silver,
    PieceType::Knight,
    PieceType::Lance,
];

/// Complete game state: the board, both hands, and the side to move.
///
/// Positions are values. Applying a move returns a new `Position` and
/// leaves the original untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Position {
    /// The piece grid.
    pub board: Board,

    /// Pieces in hand, indexed by [`Side::index`].
    pub hands: [Hand; 2],

    /// The side to move.
    pub turn: Side,
}

impl Position {
    /// Creates an empty position: no pieces, empty hands, Sente to move.
    pub fn empty() -> Self {
        Position {
            board: Board::EMPTY,
            hands: [Hand::EMPTY; 2],
            turn: Side::Sente,
        }
    }

    /// Creates the standard starting position.
    pub fn startpos() -> Self {
        let mut position = Position::empty();

        for side in Side::ALL {
            let back = side.back_row();
            let pawns = (back as i8 + 2 * side.forward()) as u8;
            let second = (back as i8 + side.forward()) as u8;

            for (col, &kind) in BACK_RANK.iter().enumerate() {
                position.put(back, col as u8, Piece::new(kind, side));
                position.put(pawns, col as u8, Piece::new(PieceType::Pawn, side));
            }

            // Rook on the mover's right, Bishop on the left, from each
            // side's own point of view.
            let (rook_col, bishop_col) = match side {
                Side::Sente => (7, 1),
                Side::Gote => (1, 7),
            };
            position.put(second, rook_col, Piece::new(PieceType::Rook, side));
            position.put(second, bishop_col, Piece::new(PieceType::Bishop, side));
        }

        position
    }

    fn put(&mut self, row: u8, col: u8, piece: Piece) {
        if let Some(sq) = Square::new(row, col) {
            self.board.set(sq, Some(piece));
        }
    }

    /// Returns the piece at the given square, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.board.get(sq)
    }

    /// Returns the hand of the given side.
    #[inline]
    pub fn hand(&self, side: Side) -> &Hand {
        &self.hands[side.index()]
    }

    /// Returns a mutable reference to the hand of the given side.
    #[inline]
    pub fn hand_mut(&mut self, side: Side) -> &mut Hand {
        &mut self.hands[side.index()]
    }

    /// Returns the square of `side`'s King, if it is on the board.
    #[inline]
    pub fn king_square(&self, side: Side) -> Option<Square> {
        self.board.king_square(side)
    }

    /// Returns the number of pieces in play: on the board plus both hands.
    pub fn piece_count(&self) -> usize {
        self.board.count() + self.hands.iter().map(|h| h.total() as usize).sum::<usize>()
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn startpos_layout() {
        let pos = Position::startpos();
        assert_eq!(pos.turn, Side::Sente);
        assert_eq!(pos.piece_count(), 40);
        assert_eq!(pos.board.count(), 40);

        assert_eq!(
            pos.piece_at(sq(8, 4)),
            Some(Piece::new(PieceType::King, Side::Sente))
        );
        assert_eq!(
            pos.piece_at(sq(0, 4)),
            Some(Piece::new(PieceType::King, Side::Gote))
        );
        assert_eq!(
            pos.piece_at(sq(7, 7)),
            Some(Piece::new(PieceType::Rook, Side::Sente))
        );
        assert_eq!(
            pos.piece_at(sq(7, 1)),
            Some(Piece::new(PieceType::Bishop, Side::Sente))
        );
        assert_eq!(
            pos.piece_at(sq(1, 1)),
            Some(Piece::new(PieceType::Rook, Side::Gote))
        );
        assert_eq!(
            pos.piece_at(sq(1, 7)),
            Some(Piece::new(PieceType::Bishop, Side::Gote))
        );
        assert_eq!(
            pos.piece_at(sq(0, 0)),
            Some(Piece::new(PieceType::Lance, Side::Gote))
        );
        assert_eq!(
            pos.piece_at(sq(8, 7)),
            Some(Piece::new(PieceType::Knight, Side::Sente))
        );
    }

    #[test]
    fn startpos_pawn_rows() {
        let pos = Position::startpos();
        for col in 0..9 {
            assert_eq!(
                pos.piece_at(sq(6, col)),
                Some(Piece::new(PieceType::Pawn, Side::Sente))
            );
            assert_eq!(
                pos.piece_at(sq(2, col)),
                Some(Piece::new(PieceType::Pawn, Side::Gote))
            );
            for row in 3..6 {
                assert_eq!(pos.piece_at(sq(row, col)), None);
            }
        }
    }

    #[test]
    fn startpos_hands_empty() {
        let pos = Position::startpos();
        for side in Side::ALL {
            assert!(pos.hand(side).is_empty());
        }
    }

    #[test]
    fn position_empty() {
        let pos = Position::empty();
        assert_eq!(pos.turn, Side::Sente);
        assert_eq!(pos.piece_count(), 0);
        assert_eq!(pos.king_square(Side::Sente), None);
    }

    #[test]
    fn piece_count_includes_hands() {
        let mut pos = Position::empty();
        pos.board.set(sq(4, 4), Some(Piece::new(PieceType::Gold, Side::Sente)));
        pos.hand_mut(Side::Gote).add(PieceType::Pawn);
        pos.hand_mut(Side::Gote).add(PieceType::Pawn);
        assert_eq!(pos.piece_count(), 3);
    }

    #[test]
    fn position_default() {
        assert_eq!(Position::default(), Position::startpos());
    }
}
