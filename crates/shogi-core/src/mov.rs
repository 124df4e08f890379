//! Move representation.

use crate::{PieceType, Square};
use std::fmt;
use thiserror::Error;

/// Errors that can occur when parsing USI move strings.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MoveParseError {
    #[error("invalid move length: expected 4 or 5 characters, got {0}")]
    InvalidLength(usize),

    #[error("invalid square: {0}")]
    InvalidSquare(String),

    #[error("invalid drop piece: '{0}'")]
    InvalidDropPiece(char),

    #[error("invalid promotion suffix: '{0}'")]
    InvalidSuffix(char),
}

/// A shogi move.
///
/// Moves are plain data and only mean something relative to the position
/// they were generated from. Two moves are equal when every field matches,
/// including `promote`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    /// Moves the piece on `from` to `to`, capturing whatever enemy piece
    /// stands there.
    Board {
        from: Square,
        to: Square,
        promote: bool,
    },
    /// Places an unpromoted piece from the mover's hand on an empty square.
    Drop { piece: PieceType, to: Square },
}

impl Move {
    /// Creates a board move without promotion.
    #[inline]
    pub const fn normal(from: Square, to: Square) -> Self {
        Move::Board {
            from,
            to,
            promote: false,
        }
    }

    /// Creates a board move that promotes on arrival.
    #[inline]
    pub const fn promoting(from: Square, to: Square) -> Self {
        Move::Board {
            from,
            to,
            promote: true,
        }
    }

    /// Creates a drop move.
    #[inline]
    pub const fn drop(piece: PieceType, to: Square) -> Self {
        Move::Drop { piece, to }
    }

    /// Returns the destination square.
    #[inline]
    pub const fn to(self) -> Square {
        match self {
            Move::Board { to, .. } | Move::Drop { to, .. } => to,
        }
    }

    /// Returns the source square, or `None` for drops.
    #[inline]
    pub const fn from(self) -> Option<Square> {
        match self {
            Move::Board { from, .. } => Some(from),
            Move::Drop { .. } => None,
        }
    }

    /// Returns true if this is a drop.
    #[inline]
    pub const fn is_drop(self) -> bool {
        matches!(self, Move::Drop { .. })
    }

    /// Returns true if this board move promotes the moving piece.
    #[inline]
    pub const fn is_promotion(self) -> bool {
        matches!(self, Move::Board { promote: true, .. })
    }

    /// Returns the USI notation for this move (e.g., "7g7f", "8h2b+", "P*5e").
    pub fn to_usi(self) -> String {
        match self {
            Move::Board { from, to, promote } => {
                format!("{}{}{}", from, to, if promote { "+" } else { "" })
            }
            Move::Drop { piece, to } => format!("{}*{}", piece.usi_char(), to),
        }
    }

    /// Parses a move from USI notation.
    ///
    /// This is purely syntactic; whether the move is legal depends on the
    /// position it is played in.
    pub fn from_usi(s: &str) -> Result<Self, MoveParseError> {
        if !s.is_ascii() || !(4..=5).contains(&s.len()) {
            return Err(MoveParseError::InvalidLength(s.chars().count()));
        }
        let square = |part: &str| {
            Square::from_usi(part).ok_or_else(|| MoveParseError::InvalidSquare(part.to_string()))
        };

        if &s[1..2] == "*" {
            if s.len() != 4 {
                return Err(MoveParseError::InvalidLength(s.len()));
            }
            let c = s.as_bytes()[0] as char;
            let piece = match PieceType::from_usi_char(c) {
                Some(PieceType::King) | None => return Err(MoveParseError::InvalidDropPiece(c)),
                Some(pt) => pt,
            };
            return Ok(Move::drop(piece, square(&s[2..4])?));
        }

        let from = square(&s[0..2])?;
        let to = square(&s[2..4])?;
        let promote = match s.as_bytes().get(4) {
            None => false,
            Some(b'+') => true,
            Some(&c) => return Err(MoveParseError::InvalidSuffix(c as char)),
        };
        Ok(Move::Board { from, to, promote })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_usi())
    }
}
