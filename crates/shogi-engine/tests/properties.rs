//! Property tests over random legal playouts from the starting position.

use proptest::prelude::*;
use shogi_core::{Move, PieceType};
use shogi_engine::{apply_move, is_in_check, legal_moves, Position};

/// Plays the moves picked by `choices` (each reduced modulo the number of
/// legal moves) and returns every position reached, starting position
/// included. Stops early if the side to move has no legal moves.
fn playout(choices: &[usize]) -> Vec<Position> {
    let mut positions = vec![Position::startpos()];
    for &choice in choices {
        let current = positions.last().expect("playout starts non-empty");
        let moves = legal_moves(current);
        if moves.is_empty() {
            break;
        }
        let next = apply_move(current, moves[choice % moves.len()]);
        positions.push(next);
    }
    positions
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn legal_moves_never_leave_own_king_attacked(
        choices in prop::collection::vec(any::<usize>(), 0..40)
    ) {
        for pos in playout(&choices) {
            let us = pos.turn;
            for m in &legal_moves(&pos) {
                let next = apply_move(&pos, *m);
                prop_assert!(!is_in_check(&next.board, us), "{} leaves {} in check", m, us);
                prop_assert_eq!(next.turn, us.opponent());
            }
        }
    }

    #[test]
    fn pawn_drops_respect_nifu(
        choices in prop::collection::vec(any::<usize>(), 0..60)
    ) {
        for pos in playout(&choices) {
            let us = pos.turn;
            for m in &legal_moves(&pos) {
                if let Move::Drop { piece: PieceType::Pawn, to } = *m {
                    prop_assert!(!pos.board.has_unpromoted_pawn_on_col(us, to.col()));
                    prop_assert_ne!(to.row(), us.last_row());
                }
            }
        }
    }

    #[test]
    fn stuck_pieces_always_promote(
        choices in prop::collection::vec(any::<usize>(), 0..60)
    ) {
        for pos in playout(&choices) {
            let us = pos.turn;
            for m in &legal_moves(&pos) {
                match *m {
                    Move::Board { from, to, promote } => {
                        let piece = pos.piece_at(from).expect("board move starts on a piece");
                        if !piece.promoted && piece.kind.must_promote(us, to.row()) {
                            prop_assert!(promote, "{} must promote", m);
                        }
                        if promote {
                            prop_assert!(!piece.promoted && piece.kind.can_promote());
                            prop_assert!(
                                us.in_promotion_zone(from.row()) || us.in_promotion_zone(to.row())
                            );
                        }
                    }
                    Move::Drop { piece, to } => {
                        prop_assert!(!piece.must_promote(us, to.row()), "{} strands the piece", m);
                    }
                }
            }
        }
    }

    #[test]
    fn pieces_are_conserved(
        choices in prop::collection::vec(any::<usize>(), 0..80)
    ) {
        for pos in playout(&choices) {
            prop_assert_eq!(pos.piece_count(), 40);
            for side in shogi_core::Side::ALL {
                prop_assert!(pos.king_square(side).is_some());
            }
        }
    }

    #[test]
    fn apply_move_leaves_input_untouched(
        choices in prop::collection::vec(any::<usize>(), 1..30)
    ) {
        let positions = playout(&choices);
        let last = positions.last().expect("playout starts non-empty");
        let snapshot = last.clone();
        for m in &legal_moves(last) {
            let _ = apply_move(last, *m);
        }
        prop_assert_eq!(last, &snapshot);
    }
}
