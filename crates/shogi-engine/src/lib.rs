//! Shogi rules engine.
//!
//! This crate provides:
//! - [`Board`] - the 9x9 piece grid
//! - [`Position`] - board, both hands, and the side to move
//! - Pseudo-legal and legal move generation, including drops and promotion
//! - Check detection and move application
//! - [`RuleSet`] - the game's entry points behind one trait
//! - [`Game`] - a move log with legality checking and result detection
//!
//! # Architecture
//!
//! Positions are values: [`apply_move`] returns a new [`Position`] and never
//! mutates its input. Legality is decided by applying each pseudo-legal
//! move and rejecting those that leave the mover's King attacked.
//!
//! # Example
//!
//! ```
//! use shogi_engine::{apply_move, is_in_check, legal_moves, Game, Position};
//!
//! // Using Position directly (stateless)
//! let position = Position::startpos();
//! let moves = legal_moves(&position);
//! assert_eq!(moves.len(), 30);
//! let next = apply_move(&position, moves[0]);
//! assert!(!is_in_check(&next.board, next.turn));
//!
//! // Using Game for move validation and result tracking
//! let mut game = Game::new();
//! game.make_move_usi("7g7f").unwrap();
//! game.make_move_usi("3c3d").unwrap();
//! assert_eq!(game.ply_count(), 2);
//! ```

mod board;
mod game;
pub mod movegen;
mod position;
pub mod rules;

pub use board::Board;
pub use game::{Game, GameError};
pub use movegen::{
    apply_move, generate_pseudo_moves, is_checkmate_or_stalemate, is_in_check, is_king_attacked,
    is_square_attacked, legal_moves, MoveList,
};
pub use position::Position;
pub use rules::{GameResult, RuleSet, StandardShogi, WinReason};

/// Returns the standard starting position: full 9x9 array, empty hands,
/// Sente to move.
pub fn initial_position() -> Position {
    Position::startpos()
}
