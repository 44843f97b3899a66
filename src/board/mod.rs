//! Chess position representation and pseudo-legal move generation.
//!
//! A position is twelve bitboards, one per (color, piece kind), plus derived
//! occupancy caches. Moves are generated per piece with flat-index offsets
//! guarded against wrapping across rank boundaries.
//!
//! # Example
//! ```
//! use cheesy::board::{Board, Move, Square};
//!
//! let mut board = Board::new();
//! let moves = board.generate_moves();
//! assert_eq!(moves.len(), 20);
//!
//! let e2: Square = "e2".parse().unwrap();
//! let e4: Square = "e4".parse().unwrap();
//! board.play_move(Move::normal(e2, e4)).unwrap();
//! assert_eq!(
//!     board.to_fen(),
//!     "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1"
//! );
//! ```

mod attack_tables;
mod builder;
mod debug;
mod error;
mod fen;
mod make_move;
mod movegen;
pub mod prelude;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{MoveError, SquareError};
pub use state::Board;
pub use types::{
    Bitboard, BitboardIter, Color, Move, MoveList, MoveListIntoIter, MoveType, Piece, Square,
    MAX_MOVES,
};

pub(crate) use types::PROMOTION_PIECES;
