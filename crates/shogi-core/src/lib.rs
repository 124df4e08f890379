//! Core types for shogi.
//!
//! This crate provides the fundamental types used across the engine:
//! - [`Side`] for the two players
//! - [`PieceType`], [`Piece`], and [`Movement`] for the piece catalog and
//!   promotion rules
//! - [`Square`] for board coordinates
//! - [`Hand`] for captured pieces held in reserve
//! - [`Move`] for board moves and drops, with USI parsing

mod hand;
mod mov;
mod piece;
mod side;
mod square;

pub use hand::Hand;
pub use mov::{Move, MoveParseError};
pub use piece::{Movement, Piece, PieceType};
pub use side::Side;
pub use square::Square;
