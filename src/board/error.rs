//! Error types for board operations.

use std::fmt;

use super::{Color, MoveType, Piece, Square};

/// Error returned when a move cannot be applied to a position
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// No piece on the source square
    EmptySource { square: Square },
    /// The piece on the source square belongs to the side not on move
    WrongSide { square: Square, color: Color },
    /// A capture targets a square without an opposing piece
    NoCaptureTarget { square: Square },
    /// A non-capturing move lands on an occupied square
    DestinationOccupied { square: Square },
    /// A promotion was requested for a piece that is not a pawn
    NotAPawn { square: Square },
    /// Promotion kind missing or not one of knight, bishop, rook, queen
    InvalidPromotion { piece: Option<Piece> },
    /// Move type the applier does not handle (en passant, castling)
    Unsupported { kind: MoveType },
}

impl MoveError {
    /// Returns true for the illegal-move family, false for unsupported types
    #[must_use]
    pub const fn is_illegal(&self) -> bool {
        !matches!(self, MoveError::Unsupported { .. })
    }
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::EmptySource { square } => {
                write!(f, "Illegal move: no piece at source square {square}")
            }
            MoveError::WrongSide { square, color } => {
                write!(f, "Illegal move: piece on {square} belongs to {color}, not the side to move")
            }
            MoveError::NoCaptureTarget { square } => {
                write!(f, "Illegal move: no opposing piece to capture on {square}")
            }
            MoveError::DestinationOccupied { square } => {
                write!(f, "Illegal move: destination {square} is occupied")
            }
            MoveError::NotAPawn { square } => {
                write!(f, "Illegal move: only a pawn can promote, {square} holds another piece")
            }
            MoveError::InvalidPromotion { piece: Some(piece) } => {
                write!(f, "Illegal move: cannot promote to '{}'", piece.to_char())
            }
            MoveError::InvalidPromotion { piece: None } => {
                write!(f, "Illegal move: promotion without a promotion piece")
            }
            MoveError::Unsupported { kind } => {
                write!(f, "Unsupported move type {kind:?}")
            }
        }
    }
}

impl std::error::Error for MoveError {}

/// Error type for square construction and parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Flat index out of bounds (must be 0-63)
    OutOfBounds { index: u8 },
    /// Rank out of bounds (must be 0-7)
    RankOutOfBounds { rank: u8 },
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: u8 },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::OutOfBounds { index } => {
                write!(f, "Square index {index} out of bounds (must be 0-63)")
            }
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn e4() -> Square {
        Square::from_index(28)
    }

    #[test]
    fn test_move_error_empty_source() {
        let err = MoveError::EmptySource { square: e4() };
        assert!(err.to_string().contains("e4"));
        assert!(err.is_illegal());
    }

    #[test]
    fn test_move_error_wrong_side() {
        let err = MoveError::WrongSide {
            square: e4(),
            color: Color::Black,
        };
        assert!(err.to_string().contains("Black"));
        assert!(err.is_illegal());
    }

    #[test]
    fn test_move_error_invalid_promotion() {
        let err = MoveError::InvalidPromotion {
            piece: Some(Piece::King),
        };
        assert!(err.to_string().contains("'k'"));
        let err = MoveError::InvalidPromotion { piece: None };
        assert!(err.to_string().contains("without"));
    }

    #[test]
    fn test_move_error_unsupported_is_not_illegal() {
        let err = MoveError::Unsupported {
            kind: MoveType::CASTLE,
        };
        assert!(!err.is_illegal());
        assert!(err.to_string().contains("Castle"));
    }

    #[test]
    fn test_square_error_bounds() {
        let err = SquareError::OutOfBounds { index: 64 };
        assert!(err.to_string().contains("64"));
        let err = SquareError::FileOutOfBounds { file: 10 };
        assert!(err.to_string().contains("10"));
    }

    #[test]
    fn test_square_error_invalid_notation() {
        let err = SquareError::InvalidNotation {
            notation: "xyz".to_string(),
        };
        assert!(err.to_string().contains("xyz"));
    }

    #[test]
    fn test_error_clone() {
        let err = MoveError::NoCaptureTarget { square: e4() };
        let cloned = err.clone();
        assert_eq!(err, cloned);
    }
}
