use super::super::attack_tables::KING_TARGETS;
use super::super::{Board, Color, MoveList, Square};

impl Board {
    pub(crate) fn generate_king_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        let targets = KING_TARGETS[from.as_usize()].and(self.occupied_by(color).not());
        for to in targets.iter() {
            self.push_step(from, to, color, moves);
        }
    }
}
