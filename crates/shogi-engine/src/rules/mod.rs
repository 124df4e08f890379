//! Rule set abstraction.
//!
//! This module provides the [`RuleSet`] trait, which bundles the game's
//! entry points (initial position, legal moves, move application, check and
//! result detection) behind one interface. [`StandardShogi`] implements it
//! with the regular 9x9 rules.

mod standard;

pub use standard::StandardShogi;

use crate::{MoveList, Position};
use shogi_core::{Move, Side};

/// Why a game was won.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WinReason {
    /// The loser had no legal moves while in check.
    Checkmate,
    /// The loser had no legal moves without being in check. Shogi scores
    /// this as a loss rather than a draw.
    NoLegalMoves,
    /// The loser resigned.
    Resignation,
}

/// Result of a finished game. Shogi as played here has no draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    SenteWins(WinReason),
    GoteWins(WinReason),
}

impl GameResult {
    /// Builds the result for a win by `winner`.
    pub const fn win(winner: Side, reason: WinReason) -> Self {
        match winner {
            Side::Sente => GameResult::SenteWins(reason),
            Side::Gote => GameResult::GoteWins(reason),
        }
    }

    /// Returns the winning side.
    pub const fn winner(self) -> Side {
        match self {
            GameResult::SenteWins(_) => Side::Sente,
            GameResult::GoteWins(_) => Side::Gote,
        }
    }

    /// Returns why the game was won.
    pub const fn reason(self) -> WinReason {
        match self {
            GameResult::SenteWins(reason) | GameResult::GoteWins(reason) => reason,
        }
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let reason = match self.reason() {
            WinReason::Checkmate => "checkmate",
            WinReason::NoLegalMoves => "no legal moves",
            WinReason::Resignation => "resignation",
        };
        write!(f, "{} wins by {}", self.winner(), reason)
    }
}

/// Trait for a shogi rule set.
///
/// # Example
///
/// ```
/// use shogi_engine::StandardShogi;
/// use shogi_engine::rules::RuleSet;
///
/// let position = StandardShogi.initial_position();
/// let moves = StandardShogi.generate_moves(&position);
/// assert_eq!(moves.len(), 30);
/// ```
pub trait RuleSet {
    /// Returns the initial position for this rule set.
    fn initial_position(&self) -> Position;

    /// Generates all legal moves for the given position.
    fn generate_moves(&self, position: &Position) -> MoveList;

    /// Returns true if the given move is legal in the position.
    fn is_legal(&self, position: &Position, m: Move) -> bool {
        self.generate_moves(position).contains(&m)
    }

    /// Makes a move on the position, returning the new position.
    ///
    /// # Panics
    ///
    /// May panic if the move is not legal. Use [`is_legal`](RuleSet::is_legal)
    /// to check first, or use [`try_make_move`](RuleSet::try_make_move).
    fn make_move(&self, position: &Position, m: Move) -> Position;

    /// Attempts to make a move, returning `None` if illegal.
    fn try_make_move(&self, position: &Position, m: Move) -> Option<Position> {
        if self.is_legal(position, m) {
            Some(self.make_move(position, m))
        } else {
            None
        }
    }

    /// Returns true if the side to move is in check.
    fn is_check(&self, position: &Position) -> bool;

    /// Returns the game result if the side to move has lost, otherwise `None`.
    fn game_result(&self, position: &Position) -> Option<GameResult>;

    /// Returns true if the game is over.
    fn is_game_over(&self, position: &Position) -> bool {
        self.game_result(position).is_some()
    }
}
