use super::{Board, Color, Move, MoveError, MoveType, Piece};

impl Board {
    /// Apply a pseudo-legal move for the side to move.
    ///
    /// Handles normal moves, captures and promotions (capturing or not).
    /// On success the occupancy caches are refreshed, the move number
    /// advances after Black's move and the side to move flips. On error the
    /// position is unchanged.
    pub fn play_move(&mut self, mv: Move) -> Result<(), MoveError> {
        let result = self.apply(mv);
        match &result {
            Ok(()) => {
                #[cfg(feature = "logging")]
                log::trace!("played {mv:?}, {} to move", self.side_to_move);
            }
            Err(_err) => {
                #[cfg(feature = "logging")]
                log::debug!("rejected {mv:?}: {_err}");
            }
        }
        result
    }

    /// Apply `moves` in order, stopping at the first error.
    ///
    /// Moves applied before the failing one stay applied.
    pub fn play_moves<I>(&mut self, moves: I) -> Result<(), MoveError>
    where
        I: IntoIterator<Item = Move>,
    {
        for (_ply, mv) in moves.into_iter().enumerate() {
            if let Err(err) = self.play_move(mv) {
                #[cfg(feature = "logging")]
                log::debug!("sequence stopped at ply {_ply}");
                return Err(err);
            }
        }
        Ok(())
    }

    fn apply(&mut self, mv: Move) -> Result<(), MoveError> {
        let from = mv.from();
        let to = mv.to();
        let kind = mv.kind();

        let (color, piece) = self
            .piece_at(from)
            .ok_or(MoveError::EmptySource { square: from })?;
        if color != self.side_to_move {
            return Err(MoveError::WrongSide {
                square: from,
                color,
            });
        }

        if kind.contains(MoveType::EN_PASSANT) || kind.contains(MoveType::CASTLE) {
            return Err(MoveError::Unsupported { kind });
        }

        let captured = if kind.contains(MoveType::CAPTURE) {
            match self.piece_at(to) {
                Some((target_color, target)) if target_color != color => Some((target_color, target)),
                _ => return Err(MoveError::NoCaptureTarget { square: to }),
            }
        } else {
            if !self.is_empty(to) {
                return Err(MoveError::DestinationOccupied { square: to });
            }
            None
        };

        let placed = if kind.contains(MoveType::PROMOTION) {
            if piece != Piece::Pawn {
                return Err(MoveError::NotAPawn { square: from });
            }
            match mv.promotion_piece() {
                Some(promo) if promo.is_promotable() => promo,
                other => return Err(MoveError::InvalidPromotion { piece: other }),
            }
        } else {
            piece
        };

        if let Some((target_color, target)) = captured {
            self.take_piece(to, target_color, target);
        }
        self.take_piece(from, color, piece);
        self.put_piece(to, color, placed);

        self.refresh_occupancy();
        if color == Color::Black {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }
        self.side_to_move = color.opponent();
        Ok(())
    }
}
