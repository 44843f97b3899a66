use super::super::attack_tables::{step, STEP_FILE_DELTA};
use super::super::{Board, Color, Move, MoveList, Square, PROMOTION_PIECES};

impl Board {
    /// Single and double pushes plus diagonal captures.
    ///
    /// The double push only checks that the destination is empty; a piece on
    /// the intermediate square does not block it.
    pub(crate) fn generate_pawn_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        let push = color.pawn_push();
        let promotes = from.rank() == color.pawn_pre_promotion_rank();

        if let Some(to) = from.offset(push) {
            if self.is_empty(to) {
                self.push_pawn_move(from, to, false, promotes, moves);
            }
        }

        if from.rank() == color.pawn_start_rank() {
            if let Some(to) = from.offset(2 * push) {
                if self.is_empty(to) {
                    moves.push(Move::normal(from, to));
                }
            }
        }

        let enemy = self.occupied_by(color.opponent());
        for side in [-1, 1] {
            if let Some(to) = step(from, push + side, STEP_FILE_DELTA) {
                if enemy.is_set(to) {
                    self.push_pawn_move(from, to, true, promotes, moves);
                }
            }
        }
    }

    fn push_pawn_move(
        &self,
        from: Square,
        to: Square,
        capture: bool,
        promotes: bool,
        moves: &mut MoveList,
    ) {
        match (promotes, capture) {
            (true, true) => {
                for piece in PROMOTION_PIECES {
                    moves.push(Move::promotion_capture(from, to, piece));
                }
            }
            (true, false) => {
                for piece in PROMOTION_PIECES {
                    moves.push(Move::promotion(from, to, piece));
                }
            }
            (false, true) => moves.push(Move::capture(from, to)),
            (false, false) => moves.push(Move::normal(from, to)),
        }
    }
}
