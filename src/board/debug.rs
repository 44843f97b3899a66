use std::fmt::Write;

use super::{Board, Color, Piece};

impl Board {
    /// Multi-line dump of side to move, move number, occupancy and all planes
    #[must_use]
    pub fn debug_planes(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail, so results are discarded
        let _ = writeln!(out, "Side to move: {}", self.side_to_move);
        let _ = writeln!(out, "Full move: {}", self.fullmove_number);
        let _ = writeln!(out, "All occupied: {:#018x}", self.all_occupied.0);

        for color in Color::BOTH {
            for piece in Piece::ALL {
                let bb = self.pieces_of(color, piece).0;
                let name = piece.to_fen_char(color);
                let _ = writeln!(out, "{color} {name}: {bb:#018x}");
            }
        }
        out
    }
}
