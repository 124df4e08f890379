//! Standard shogi rules implementation.

use super::{GameResult, RuleSet, WinReason};
use crate::movegen::{apply_move, is_king_attacked, legal_moves};
use crate::{MoveList, Position};
use shogi_core::Move;

/// Standard 9x9 shogi rules:
/// - Sliding, stepping, and jumping piece movement
/// - Optional promotion in the far three rows, forced where a piece would
///   otherwise be stuck
/// - Captures go to the captor's hand and can be dropped back in
/// - Drop restrictions for Pawns (one per file, not on the last row),
///   Lances, and Knights
/// - Moves that leave one's own King attacked are illegal
///
/// Repetition and pawn-drop mate are not adjudicated.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardShogi;

impl RuleSet for StandardShogi {
    fn initial_position(&self) -> Position {
        Position::startpos()
    }

    fn generate_moves(&self, position: &Position) -> MoveList {
        legal_moves(position)
    }

    fn make_move(&self, position: &Position, m: Move) -> Position {
        apply_move(position, m)
    }

    fn is_check(&self, position: &Position) -> bool {
        is_king_attacked(position, position.turn)
    }

    fn game_result(&self, position: &Position) -> Option<GameResult> {
        if !legal_moves(position).is_empty() {
            return None;
        }

        let reason = if self.is_check(position) {
            WinReason::Checkmate
        } else {
            WinReason::NoLegalMoves
        };
        Some(GameResult::win(position.turn.opponent(), reason))
    }
}
