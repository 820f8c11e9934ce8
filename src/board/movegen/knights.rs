use super::super::attack_tables::KNIGHT_TARGETS;
use super::super::{MoveList, Position, Square};

impl Position {
    pub(crate) fn generate_knight_moves(&self, from: Square, moves: &mut MoveList) {
        for &to in &KNIGHT_TARGETS[from.index()] {
            self.push_unless_friendly(from, to, moves);
        }
    }
}
