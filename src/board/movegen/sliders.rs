use super::super::attack_tables::{ALL_DIRS, DIAGONAL_DIRS, ORTHOGONAL_DIRS, RAYS};
use super::super::{MoveList, Position, Square};

/// Type of sliding piece for move generation
#[derive(Clone, Copy)]
pub(crate) enum SliderType {
    Bishop,
    Rook,
    Queen,
}

impl SliderType {
    fn directions(self) -> &'static [usize] {
        match self {
            SliderType::Bishop => &DIAGONAL_DIRS,
            SliderType::Rook => &ORTHOGONAL_DIRS,
            SliderType::Queen => &ALL_DIRS,
        }
    }
}

impl Position {
    pub(crate) fn generate_slider_moves(
        &self,
        from: Square,
        slider: SliderType,
        moves: &mut MoveList,
    ) {
        for &dir in slider.directions() {
            for &to in &RAYS[from.index()][dir] {
                if !self.push_unless_friendly(from, to, moves) {
                    break;
                }
            }
        }
    }
}
