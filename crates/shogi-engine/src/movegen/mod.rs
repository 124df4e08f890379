//! Move generation.
//!
//! Pseudo-legal moves are produced per piece by walking its movement
//! profile; drops are produced from the hand. Legal moves are the
//! pseudo-legal ones that do not leave the mover's own King attacked,
//! found by applying each candidate and testing the result.

mod attacks;
pub mod perft;

use crate::Position;
use shogi_core::{Move, Piece, PieceType, Side, Square};
use std::ops::ControlFlow;

pub use attacks::{for_each_target, is_in_check, is_square_attacked};

/// A list of moves.
///
/// Shogi positions can have close to 600 legal moves once drops are in
/// play, so the list is heap-backed with a generous initial capacity.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    /// Initial capacity; enough for typical middlegame positions.
    pub const INITIAL_CAPACITY: usize = 128;

    /// Creates an empty move list.
    #[inline]
    pub fn new() -> Self {
        MoveList {
            moves: Vec::with_capacity(Self::INITIAL_CAPACITY),
        }
    }

    /// Adds a move to the list.
    #[inline]
    pub fn push(&mut self, m: Move) {
        self.moves.push(m);
    }

    /// Returns the number of moves.
    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Returns true if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Returns a slice of the moves.
    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    /// Returns true if the list contains the given move.
    #[inline]
    pub fn contains(&self, m: &Move) -> bool {
        self.moves.contains(m)
    }

    /// Clears the move list.
    #[inline]
    pub fn clear(&mut self) {
        self.moves.clear();
    }

    /// Retains only moves for which the predicate returns true.
    pub fn retain<F>(&mut self, f: F)
    where
        F: FnMut(&Move) -> bool,
    {
        self.moves.retain(f);
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.moves[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl std::fmt::Debug for MoveList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

/// Generates all legal moves for the side to move.
pub fn legal_moves(position: &Position) -> MoveList {
    let mut moves = generate_pseudo_moves(position);

    // Judge each result by the side that moved, not the new side to move.
    let us = position.turn;
    moves.retain(|m| {
        let new_pos = apply_move(position, *m);
        !is_in_check(&new_pos.board, us)
    });

    moves
}

/// Returns true if the side to move has no legal moves.
///
/// Shogi has no stalemate draw, so this is a loss for the side to move
/// whether or not it is in check.
pub fn is_checkmate_or_stalemate(position: &Position) -> bool {
    legal_moves(position).is_empty()
}

/// Generates board moves and drops for the side to move, without checking
/// whether they leave the mover's King attacked.
pub fn generate_pseudo_moves(position: &Position) -> MoveList {
    let mut moves = MoveList::new();
    generate_board_moves(position, &mut moves);
    generate_drops(position, &mut moves);
    moves
}

/// Generates pseudo-legal board moves, expanded by promotion choice.
fn generate_board_moves(position: &Position, moves: &mut MoveList) {
    let us = position.turn;
    for (from, piece) in position.board.pieces_of(us) {
        let _ = for_each_target(&position.board, from, piece, |to| {
            push_with_promotions(moves, piece, from, to);
            ControlFlow::Continue(())
        });
    }
}

/// Pushes one move, or both promotion variants when promotion is optional.
fn push_with_promotions(moves: &mut MoveList, piece: Piece, from: Square, to: Square) {
    let side = piece.owner;
    if piece.promoted || !piece.kind.can_promote() {
        moves.push(Move::normal(from, to));
    } else if piece.kind.must_promote(side, to.row()) {
        moves.push(Move::promoting(from, to));
    } else if side.in_promotion_zone(from.row()) || side.in_promotion_zone(to.row()) {
        moves.push(Move::normal(from, to));
        moves.push(Move::promoting(from, to));
    } else {
        moves.push(Move::normal(from, to));
    }
}

/// Generates drops from the hand of the side to move.
fn generate_drops(position: &Position, moves: &mut MoveList) {
    let us = position.turn;
    let hand = position.hand(us);
    if hand.is_empty() {
        return;
    }

    // Columns where a Pawn drop would make two unpromoted Pawns.
    let mut pawn_blocked = [false; Square::SIZE as usize];
    for (col, blocked) in pawn_blocked.iter_mut().enumerate() {
        *blocked = position.board.has_unpromoted_pawn_on_col(us, col as u8);
    }

    for (piece, _) in hand.iter() {
        for to in Square::all() {
            if !position.board.is_empty_at(to) {
                continue;
            }
            if piece.must_promote(us, to.row()) {
                continue;
            }
            if piece == PieceType::Pawn && pawn_blocked[to.col() as usize] {
                continue;
            }
            moves.push(Move::drop(piece, to));
        }
    }
}

/// Applies a move and returns the resulting position.
///
/// A captured piece is demoted and added to the mover's hand under its base
/// type. An already promoted piece stays promoted.
///
/// # Panics
///
/// Panics if the move is not pseudo-legal in `position`: a board move from
/// an empty square, or a drop of a piece not held in hand. Only apply moves
/// drawn from [`legal_moves`] for the same position.
pub fn apply_move(position: &Position, m: Move) -> Position {
    let mut new_pos = position.clone();
    let us = position.turn;

    match m {
        Move::Board { from, to, promote } => {
            let piece = new_pos
                .board
                .take(from)
                .unwrap_or_else(|| panic!("no piece on {} to move", from));

            if let Some(captured) = new_pos.board.take(to) {
                new_pos.hand_mut(us).add(captured.kind);
            }

            let placed = if promote && !piece.promoted {
                piece.promote()
            } else {
                piece
            };
            new_pos.board.set(to, Some(placed));
        }
        Move::Drop { piece, to } => {
            new_pos.hand_mut(us).remove(piece);
            new_pos.board.set(to, Some(Piece::new(piece, us)));
        }
    }

    new_pos.turn = us.opponent();
    new_pos
}

/// Returns true if `side`'s King is attacked in `position`.
#[inline]
pub fn is_king_attacked(position: &Position, side: Side) -> bool {
    is_in_check(&position.board, side)
}
