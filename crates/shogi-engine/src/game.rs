//! Game management: the current position, the move log, and the result.
//!
//! [`Game`] is a thin orchestration layer over the pure move functions. It
//! validates incoming moves against the legal move list, records them, and
//! detects the end of the game. It keeps a forward log only; taking moves
//! back is up to the caller, who can hold on to earlier [`Position`]s.

use crate::movegen::{apply_move, is_king_attacked, legal_moves};
use crate::rules::{GameResult, RuleSet, StandardShogi, WinReason};
use crate::{MoveList, Position};
use shogi_core::{Move, MoveParseError};
use thiserror::Error;

/// Error type for game operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// The move is not legal in the current position.
    #[error("illegal move: {0}")]
    IllegalMove(Move),

    /// The USI string could not be parsed.
    #[error("invalid move notation: {0}")]
    InvalidNotation(#[from] MoveParseError),

    /// The game has already ended.
    #[error("game has already ended")]
    GameAlreadyOver,
}

/// A shogi game with a move log.
#[derive(Debug, Clone)]
pub struct Game {
    /// Current position.
    position: Position,
    /// Moves played from the starting position.
    moves: Vec<Move>,
    /// Starting position.
    start_pos: Position,
    /// Game result if the game has ended.
    result: Option<GameResult>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a new game with the standard starting position.
    pub fn new() -> Self {
        Self::from_position(StandardShogi.initial_position())
    }

    /// Creates a game from a custom starting position.
    pub fn from_position(position: Position) -> Self {
        let mut game = Game {
            position: position.clone(),
            moves: Vec::new(),
            start_pos: position,
            result: None,
        };
        // The position may already be lost for the side to move.
        game.check_game_end();
        game
    }

    /// Returns a reference to the current position.
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Returns the starting position.
    pub fn start_position(&self) -> &Position {
        &self.start_pos
    }

    /// Returns all legal moves in the current position.
    pub fn legal_moves(&self) -> MoveList {
        legal_moves(&self.position)
    }

    /// Returns true if the side to move is in check.
    pub fn is_check(&self) -> bool {
        is_king_attacked(&self.position, self.position.turn)
    }

    /// Returns the game result if the game is over.
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    /// Returns true if the game has ended.
    pub fn is_game_over(&self) -> bool {
        self.result.is_some()
    }

    /// Returns the moves played so far.
    pub fn move_history(&self) -> &[Move] {
        &self.moves
    }

    /// Returns the number of half-moves (plies) played.
    pub fn ply_count(&self) -> usize {
        self.moves.len()
    }

    /// Makes a move, which must be one of [`legal_moves`](Game::legal_moves).
    pub fn make_move(&mut self, m: Move) -> Result<(), GameError> {
        if self.result.is_some() {
            return Err(GameError::GameAlreadyOver);
        }

        if !self.legal_moves().contains(&m) {
            return Err(GameError::IllegalMove(m));
        }

        self.apply_move(m);
        Ok(())
    }

    /// Makes a move given in USI notation (e.g., "7g7f", "P*5e").
    pub fn make_move_usi(&mut self, usi: &str) -> Result<(), GameError> {
        if self.result.is_some() {
            return Err(GameError::GameAlreadyOver);
        }

        let m = Move::from_usi(usi)?;
        self.make_move(m)
    }

    /// Resigns the game for the side to move.
    pub fn resign(&mut self) -> Result<(), GameError> {
        if self.result.is_some() {
            return Err(GameError::GameAlreadyOver);
        }

        let result = GameResult::win(self.position.turn.opponent(), WinReason::Resignation);
        tracing::info!(ply = self.ply_count(), %result, "game over");
        self.result = Some(result);
        Ok(())
    }

    /// Internal method to apply a legal move.
    fn apply_move(&mut self, m: Move) {
        tracing::debug!(ply = self.moves.len() + 1, side = %self.position.turn, mv = %m, "move");
        self.moves.push(m);
        self.position = apply_move(&self.position, m);
        self.check_game_end();
    }

    /// Checks if the side to move has lost and records the result.
    fn check_game_end(&mut self) {
        if let Some(result) = StandardShogi.game_result(&self.position) {
            tracing::info!(ply = self.ply_count(), %result, "game over");
            self.result = Some(result);
        }
    }
}
