pub mod board;

pub use board::{Bitboard, Board, Color, Move, MoveError, MoveList, MoveType, Piece, Square};
