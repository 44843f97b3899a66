//! Prelude module for convenient imports.
//!
//! # Example
//! ```
//! use cheesy::board::prelude::*;
//!
//! let board = Board::new();
//! assert_eq!(board.side_to_move(), Color::White);
//! ```

pub use super::{
    Bitboard, Board, BoardBuilder, Color, Move, MoveError, MoveList, MoveType, Piece, Square,
    SquareError,
};
