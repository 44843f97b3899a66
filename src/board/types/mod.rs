//! Core chess types.
//!
//! This module contains the fundamental types used by the position core:
//! - `Piece` and `Color` - chess piece kinds and colors
//! - `Square` - flat 0-63 board index (a1 = 0, h8 = 63)
//! - `Bitboard` - 64-bit square set
//! - `Move`, `MoveType` and `MoveList` - move representation

mod bitboard;
mod moves;
mod piece;
mod square;

pub use bitboard::{Bitboard, BitboardIter};
pub use moves::{Move, MoveList, MoveListIntoIter, MoveType, MAX_MOVES};
pub use piece::{Color, Piece};
pub use square::Square;

pub(crate) use piece::PROMOTION_PIECES;
