//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Per-piece pseudo-legal generation and wrap guards
//! - `make_move.rs` - Move application and error cases
//! - `proptest.rs` - Property-based tests

mod proptest;

use crate::board::{Board, BoardBuilder, Color, Move, MoveList, Piece, Square};

pub(super) fn sq(name: &str) -> Square {
    name.parse().expect("valid square")
}

/// Build a board from `(square, color, piece)` triples, White to move
pub(super) fn board_with(pieces: &[(&str, Color, Piece)]) -> Board {
    pieces
        .iter()
        .fold(BoardBuilder::new(), |b, &(name, color, piece)| {
            b.piece(sq(name), color, piece)
        })
        .build()
}

/// Generate moves for the occupant of `from`
pub(super) fn moves_from(board: &Board, from: &str) -> MoveList {
    let from = sq(from);
    let (color, piece) = board.piece_at(from).expect("piece on origin");
    let mut moves = MoveList::new();
    board.generate_piece_moves(from, piece, color, &mut moves);
    moves
}

/// Sorted destination names, for order-independent comparison
pub(super) fn destinations(moves: &MoveList) -> Vec<String> {
    let mut names: Vec<String> = moves.iter().map(|m| m.to().to_string()).collect();
    names.sort();
    names
}

pub(super) fn sorted(mut moves: Vec<Move>) -> Vec<Move> {
    moves.sort_by_key(|m| m.as_u32());
    moves
}
