use super::super::attack_tables::{step, STEP_FILE_DELTA};
use super::super::{Board, Color, Move, MoveList, Square};

impl Board {
    /// Walk each direction one square at a time until blocked or off-board.
    ///
    /// The wrap guard compares each step with the previous square on the ray,
    /// not with the origin.
    pub(crate) fn generate_sliding_moves(
        &self,
        from: Square,
        color: Color,
        directions: &[i8],
        moves: &mut MoveList,
    ) {
        let own = self.occupied_by(color);
        let enemy = self.occupied_by(color.opponent());

        for &dir in directions {
            let mut current = from;
            while let Some(to) = step(current, dir, STEP_FILE_DELTA) {
                if own.is_set(to) {
                    break;
                }
                if enemy.is_set(to) {
                    moves.push(Move::capture(from, to));
                    break;
                }
                moves.push(Move::normal(from, to));
                current = to;
            }
        }
    }
}
