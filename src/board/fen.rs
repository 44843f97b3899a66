use super::{Board, Square};

/// Castling availability is not tracked; the field is always this placeholder.
const CASTLING_PLACEHOLDER: &str = "KQkq";
/// En passant targets are not tracked; the field is always this placeholder.
const EN_PASSANT_PLACEHOLDER: &str = "-";
/// Half-move clock is not tracked.
const HALFMOVE_CLOCK: u32 = 0;

impl Board {
    /// Convert the board position to FEN notation.
    ///
    /// Only piece placement, side to move and the move number reflect the
    /// position; castling, en passant and the half-move clock are fixed.
    #[must_use]
    pub fn to_fen(&self) -> String {
        format!(
            "{} {} {} {} {} {}",
            self.placement_field(),
            self.side_to_move.to_fen_char(),
            CASTLING_PLACEHOLDER,
            EN_PASSANT_PLACEHOLDER,
            HALFMOVE_CLOCK,
            self.fullmove_number
        )
    }

    /// Piece placement field: rank 8 to 1, file a to h, empty runs as digits.
    fn placement_field(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                let sq = Square::from_index(rank * 8 + file);
                if let Some((color, piece)) = self.piece_at(sq) {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.to_fen_char(color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }
        rows.join("/")
    }
}
