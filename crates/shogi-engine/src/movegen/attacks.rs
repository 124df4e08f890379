//! Target squares and attack detection.
//!
//! Move generation and check detection share one walker so that "attacked"
//! always means exactly "some pseudo-legal board move lands here".

use crate::Board;
use shogi_core::{Movement, Piece, Side, Square};
use std::ops::ControlFlow;

/// Calls `visit` with every square the piece on `from` could move to,
/// ignoring promotion and self-check.
///
/// Rays stop at the first occupied square, which is visited only if it
/// holds an enemy piece. Steps are visited when empty or enemy-occupied.
/// Returning `ControlFlow::Break` from `visit` ends the walk early.
pub fn for_each_target<F>(board: &Board, from: Square, piece: Piece, mut visit: F) -> ControlFlow<()>
where
    F: FnMut(Square) -> ControlFlow<()>,
{
    let movement = piece.movement();

    for &delta in movement.slides {
        let (dr, dc) = Movement::orient(delta, piece.owner);
        let mut cursor = from.offset(dr, dc);
        while let Some(to) = cursor {
            match board.get(to) {
                None => visit(to)?,
                Some(other) => {
                    if other.owner != piece.owner {
                        visit(to)?;
                    }
                    break;
                }
            }
            cursor = to.offset(dr, dc);
        }
    }

    for &delta in movement.steps {
        let (dr, dc) = Movement::orient(delta, piece.owner);
        if let Some(to) = from.offset(dr, dc) {
            if board.get(to).map_or(true, |other| other.owner != piece.owner) {
                visit(to)?;
            }
        }
    }

    ControlFlow::Continue(())
}

/// Returns true if `by_side` has a board move landing on `sq`.
///
/// Pieces in hand are irrelevant: a drop can never capture.
pub fn is_square_attacked(board: &Board, by_side: Side, sq: Square) -> bool {
    board.pieces_of(by_side).any(|(from, piece)| {
        for_each_target(board, from, piece, |to| {
            if to == sq {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        })
        .is_break()
    })
}

/// Returns true if `side`'s King is attacked.
///
/// # Panics
///
/// Panics if `side` has no King on the board. That only happens when a
/// position was built inconsistently or a move not produced by the legal
/// move generator was applied.
pub fn is_in_check(board: &Board, side: Side) -> bool {
    let king = board
        .king_square(side)
        .unwrap_or_else(|| panic!("{} has no King on the board", side));
    is_square_attacked(board, side.opponent(), king)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;
    use shogi_core::PieceType;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    fn targets(board: &Board, from: Square) -> Vec<Square> {
        let piece = board.get(from).unwrap();
        let mut out = Vec::new();
        let _ = for_each_target(board, from, piece, |to| {
            out.push(to);
            ControlFlow::Continue(())
        });
        out.sort();
        out
    }

    #[test]
    fn rook_ray_stops_at_blockers() {
        let mut board = Board::EMPTY;
        board.set(sq(4, 4), Some(Piece::new(PieceType::Rook, Side::Sente)));
        board.set(sq(2, 4), Some(Piece::new(PieceType::Pawn, Side::Gote)));
        board.set(sq(4, 6), Some(Piece::new(PieceType::Pawn, Side::Sente)));

        let t = targets(&board, sq(4, 4));
        // Up: (3,4), capture (2,4). Down: (5..=8, 4). Left: (4, 0..=3). Right: (4,5).
        assert_eq!(t.len(), 2 + 4 + 4 + 1);
        assert!(t.contains(&sq(2, 4)));
        assert!(!t.contains(&sq(1, 4)));
        assert!(t.contains(&sq(4, 5)));
        assert!(!t.contains(&sq(4, 6)));
    }

    #[test]
    fn knight_jumps_forward_only() {
        let mut board = Board::EMPTY;
        board.set(sq(4, 4), Some(Piece::new(PieceType::Knight, Side::Sente)));
        board.set(sq(3, 4), Some(Piece::new(PieceType::Gold, Side::Gote)));
        assert_eq!(targets(&board, sq(4, 4)), vec![sq(2, 3), sq(2, 5)]);

        board.set(sq(4, 4), Some(Piece::new(PieceType::Knight, Side::Gote)));
        assert_eq!(targets(&board, sq(4, 4)), vec![sq(6, 3), sq(6, 5)]);
    }

    #[test]
    fn gote_gold_is_mirrored() {
        let mut board = Board::EMPTY;
        board.set(sq(4, 4), Some(Piece::new(PieceType::Gold, Side::Gote)));
        let t = targets(&board, sq(4, 4));
        assert_eq!(t.len(), 6);
        assert!(t.contains(&sq(5, 3)));
        assert!(t.contains(&sq(5, 5)));
        assert!(t.contains(&sq(3, 4)));
        assert!(!t.contains(&sq(3, 3)));
    }

    #[test]
    fn dragon_steps_diagonally() {
        let mut board = Board::EMPTY;
        board.set(sq(0, 0), Some(Piece::new(PieceType::Rook, Side::Sente).promote()));
        let t = targets(&board, sq(0, 0));
        assert_eq!(t.len(), 8 + 8 + 1);
        assert!(t.contains(&sq(1, 1)));
        assert!(!t.contains(&sq(2, 2)));
    }

    #[test]
    fn lance_slides_forward() {
        let mut board = Board::EMPTY;
        board.set(sq(8, 0), Some(Piece::new(PieceType::Lance, Side::Sente)));
        board.set(sq(3, 0), Some(Piece::new(PieceType::Pawn, Side::Gote)));
        let t = targets(&board, sq(8, 0));
        assert_eq!(t, vec![sq(3, 0), sq(4, 0), sq(5, 0), sq(6, 0), sq(7, 0)]);
    }

    #[test]
    fn startpos_attacks() {
        let pos = Position::startpos();
        // Sente pawns cover row 5; nothing reaches row 4.
        assert!(is_square_attacked(&pos.board, Side::Sente, sq(5, 4)));
        assert!(!is_square_attacked(&pos.board, Side::Sente, sq(4, 4)));
        // Own pieces are never "attacked" by their own side.
        assert!(!is_square_attacked(&pos.board, Side::Sente, sq(6, 4)));
        assert!(!is_in_check(&pos.board, Side::Sente));
        assert!(!is_in_check(&pos.board, Side::Gote));
    }

    #[test]
    fn bishop_gives_check_along_diagonal() {
        let mut board = Board::EMPTY;
        board.set(sq(8, 4), Some(Piece::new(PieceType::King, Side::Sente)));
        board.set(sq(4, 0), Some(Piece::new(PieceType::Bishop, Side::Gote)));
        assert!(is_in_check(&board, Side::Sente));

        board.set(sq(6, 2), Some(Piece::new(PieceType::Pawn, Side::Sente)));
        assert!(!is_in_check(&board, Side::Sente));
    }

    #[test]
    #[should_panic(expected = "Gote has no King on the board")]
    fn missing_king_panics() {
        let mut board = Board::EMPTY;
        board.set(sq(8, 4), Some(Piece::new(PieceType::King, Side::Sente)));
        is_in_check(&board, Side::Gote);
    }
}
