use super::{Bitboard, Color, Piece, Square};

/// White's home-rank layout, file a first
const BACK_RANK: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

/// Position state: twelve piece planes plus derived occupancy caches.
///
/// Planes never overlap. `occupied` and `all_occupied` are derived from the
/// planes and are refreshed after every plane mutation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) pieces: [[Bitboard; 6]; 2],
    pub(crate) occupied: [Bitboard; 2],
    pub(crate) all_occupied: Bitboard,
    pub(crate) side_to_move: Color,
    pub(crate) fullmove_number: u32,
}

impl Board {
    /// The standard starting position, White to move, move number 1.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        board.initialize_standard();
        board
    }

    /// A board with no pieces, White to move, move number 1.
    #[must_use]
    pub fn empty() -> Self {
        Board {
            pieces: [[Bitboard::EMPTY; 6]; 2],
            occupied: [Bitboard::EMPTY; 2],
            all_occupied: Bitboard::EMPTY,
            side_to_move: Color::White,
            fullmove_number: 1,
        }
    }

    /// Reset every plane to the standard starting position.
    ///
    /// Black's pieces are White's home-rank masks shifted up by 56 bits.
    /// The move counter is left as the caller set it.
    pub fn initialize_standard(&mut self) {
        let white = Color::White.index();
        let black = Color::Black.index();

        self.pieces = [[Bitboard::EMPTY; 6]; 2];
        for (file, piece) in BACK_RANK.iter().enumerate() {
            let plane = &mut self.pieces[white][piece.index()];
            *plane = plane.or(Bitboard::from_square(Square::from_index(file as u8)));
        }
        self.pieces[white][Piece::Pawn.index()] = Bitboard::RANK_2;

        for piece in Piece::ALL {
            let home = self.pieces[white][piece.index()];
            self.pieces[black][piece.index()] = match piece {
                Piece::Pawn => Bitboard::RANK_7,
                _ => Bitboard(home.0 << 56),
            };
        }

        self.side_to_move = Color::White;
        self.refresh_occupancy();
    }

    /// Recompute the occupancy caches by OR-reducing the twelve planes.
    pub fn refresh_occupancy(&mut self) {
        for color in Color::BOTH {
            let c_idx = color.index();
            self.occupied[c_idx] = self.pieces[c_idx]
                .iter()
                .fold(Bitboard::EMPTY, |acc, plane| acc.or(*plane));
        }
        self.all_occupied = self.occupied[0].or(self.occupied[1]);
    }

    /// Scan the planes for the occupant of `sq`. `None` means the square is empty.
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        for color in Color::BOTH {
            for piece in Piece::ALL {
                if self.pieces[color.index()][piece.index()].is_set(sq) {
                    return Some((color, piece));
                }
            }
        }
        None
    }

    /// Place a piece on a plane. Occupancy is not refreshed.
    pub(crate) fn put_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        let plane = &mut self.pieces[color.index()][piece.index()];
        *plane = plane.set(sq);
    }

    /// Remove a piece from a plane. Occupancy is not refreshed.
    pub(crate) fn take_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        let plane = &mut self.pieces[color.index()][piece.index()];
        *plane = plane.clear(sq);
    }

    #[must_use]
    pub fn pieces_of(&self, color: Color, piece: Piece) -> Bitboard {
        self.pieces[color.index()][piece.index()]
    }

    #[must_use]
    pub fn occupied_by(&self, color: Color) -> Bitboard {
        self.occupied[color.index()]
    }

    #[must_use]
    pub fn all_occupied(&self) -> Bitboard {
        self.all_occupied
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    pub fn set_fullmove_number(&mut self, number: u32) {
        self.fullmove_number = number;
    }

    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        !self.all_occupied.is_set(sq)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    #[test]
    fn lookup_on_empty_board_is_none() {
        let board = Board::empty();
        assert_eq!(board.piece_at(sq("a1")), None);
    }

    #[test]
    fn lookup_returns_matching_color_and_kind() {
        let mut board = Board::empty();
        board.pieces[0][Piece::Rook.index()] = Bitboard::RANK_1.and(Bitboard::FILE_A);
        board.pieces[1][Piece::Rook.index()] = Bitboard::RANK_1.and(Bitboard::FILE_H);
        assert_eq!(board.piece_at(sq("a1")), Some((Color::White, Piece::Rook)));
        assert_eq!(board.piece_at(sq("h1")), Some((Color::Black, Piece::Rook)));
    }

    #[test]
    fn standard_position_planes() {
        let board = Board::new();
        assert_eq!(board.pieces_of(Color::White, Piece::Pawn), Bitboard::RANK_2);
        assert_eq!(board.pieces_of(Color::Black, Piece::Pawn), Bitboard::RANK_7);
        assert_eq!(board.pieces_of(Color::White, Piece::King), Bitboard::from_square(sq("e1")));
        assert_eq!(
            board.pieces_of(Color::Black, Piece::Rook),
            Bitboard::from_square(sq("a8")).or(Bitboard::from_square(sq("h8")))
        );
        assert_eq!(board.piece_at(sq("e1")), Some((Color::White, Piece::King)));
        assert_eq!(board.piece_at(sq("d8")), Some((Color::Black, Piece::Queen)));
        assert_eq!(board.piece_at(sq("g8")), Some((Color::Black, Piece::Knight)));
        assert_eq!(board.piece_at(sq("e4")), None);
        assert_eq!(board.all_occupied().popcount(), 32);
        assert_eq!(board.side_to_move(), Color::White);
        assert_eq!(board.fullmove_number(), 1);
    }

    #[test]
    fn refresh_occupancy_matches_plane_union() {
        let mut board = Board::new();
        let mut expected = [Bitboard::EMPTY; 2];
        for color in Color::BOTH {
            for piece in Piece::ALL {
                expected[color.index()] =
                    expected[color.index()].or(board.pieces_of(color, piece));
            }
        }
        board.refresh_occupancy();
        assert_eq!(board.occupied_by(Color::White), expected[0]);
        assert_eq!(board.occupied_by(Color::Black), expected[1]);
        assert_eq!(board.all_occupied(), expected[0].or(expected[1]));
    }

    #[test]
    fn put_piece_needs_refresh_before_occupancy_is_current() {
        let mut board = Board::empty();
        board.put_piece(sq("d4"), Color::Black, Piece::Bishop);
        assert!(board.is_empty(sq("d4")));
        board.refresh_occupancy();
        assert!(!board.is_empty(sq("d4")));
        assert!(board.occupied_by(Color::Black).is_set(sq("d4")));
    }
}
