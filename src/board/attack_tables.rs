//! Fixed offset tables and precomputed leaper destinations.
//!
//! Squares are flat indices, so every offset is checked twice: the target
//! must stay in 0..64 and its file must sit within the move's file delta of
//! the square it was stepped from. A larger file jump means the offset
//! wrapped across a rank boundary.

use once_cell::sync::Lazy;

use super::{Bitboard, Square};

/// L-shaped jumps: 8 * rank delta + file delta
pub(crate) const KNIGHT_OFFSETS: [i8; 8] = [-17, -15, -10, -6, 6, 10, 15, 17];
/// One step in any direction
pub(crate) const KING_OFFSETS: [i8; 8] = [-9, -8, -7, -1, 1, 7, 8, 9];

pub(crate) const BISHOP_DIRECTIONS: [i8; 4] = [-9, -7, 7, 9];
pub(crate) const ROOK_DIRECTIONS: [i8; 4] = [-8, -1, 1, 8];
pub(crate) const QUEEN_DIRECTIONS: [i8; 8] = [-9, -8, -7, -1, 1, 7, 8, 9];

pub(crate) const KNIGHT_FILE_DELTA: u8 = 2;
pub(crate) const KING_FILE_DELTA: u8 = 1;
/// Per-step bound on a sliding ray; also the pawn capture bound
pub(crate) const STEP_FILE_DELTA: u8 = 1;

/// Apply `delta` to `from`, rejecting both off-board results and rank wraps.
#[inline]
pub(crate) fn step(from: Square, delta: i8, max_file_delta: u8) -> Option<Square> {
    let to = from.offset(delta)?;
    if from.file_distance(to) > max_file_delta {
        return None;
    }
    Some(to)
}

fn leaper_table(offsets: &[i8], max_file_delta: u8) -> [Bitboard; 64] {
    let mut table = [Bitboard::EMPTY; 64];
    for from in Square::all() {
        table[from.as_usize()] = offsets
            .iter()
            .filter_map(|&delta| step(from, delta, max_file_delta))
            .fold(Bitboard::EMPTY, Bitboard::set);
    }
    table
}

pub(crate) static KNIGHT_TARGETS: Lazy<[Bitboard; 64]> =
    Lazy::new(|| leaper_table(&KNIGHT_OFFSETS, KNIGHT_FILE_DELTA));

pub(crate) static KING_TARGETS: Lazy<[Bitboard; 64]> =
    Lazy::new(|| leaper_table(&KING_OFFSETS, KING_FILE_DELTA));
