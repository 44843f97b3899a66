//! Pseudo-legal move generation.
//!
//! Every generator appends into a caller-supplied `MoveList` and reads the
//! occupancy caches, which must be current. Moves that leave the mover's
//! king attacked are not filtered out; castling and en passant are never
//! generated.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::attack_tables::{BISHOP_DIRECTIONS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS};
use super::{Board, Color, Move, MoveList, Piece, Square};

impl Board {
    /// Append every pseudo-legal move of a `color` `piece` standing on `from`.
    ///
    /// The occupant is taken from the arguments, not looked up, so callers
    /// can ask about hypothetical placements.
    pub fn generate_piece_moves(
        &self,
        from: Square,
        piece: Piece,
        color: Color,
        moves: &mut MoveList,
    ) {
        match piece {
            Piece::Pawn => self.generate_pawn_moves(from, color, moves),
            Piece::Knight => self.generate_knight_moves(from, color, moves),
            Piece::Bishop => self.generate_sliding_moves(from, color, &BISHOP_DIRECTIONS, moves),
            Piece::Rook => self.generate_sliding_moves(from, color, &ROOK_DIRECTIONS, moves),
            Piece::Queen => self.generate_sliding_moves(from, color, &QUEEN_DIRECTIONS, moves),
            Piece::King => self.generate_king_moves(from, color, moves),
        }
    }

    /// All pseudo-legal moves for the side to move
    #[must_use]
    pub fn generate_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        self.generate_moves_into(&mut moves);
        moves
    }

    /// Append all pseudo-legal moves for the side to move into `moves`
    pub fn generate_moves_into(&self, moves: &mut MoveList) {
        let color = self.side_to_move;
        for piece in Piece::ALL {
            for from in self.pieces_of(color, piece).iter() {
                self.generate_piece_moves(from, piece, color, moves);
            }
        }
    }

    /// Normal onto an empty square, Capture onto an enemy, nothing onto a friend
    #[inline]
    pub(crate) fn push_step(&self, from: Square, to: Square, color: Color, moves: &mut MoveList) {
        if self.occupied_by(color).is_set(to) {
            return;
        }
        if self.occupied_by(color.opponent()).is_set(to) {
            moves.push(Move::capture(from, to));
        } else {
            moves.push(Move::normal(from, to));
        }
    }
}
