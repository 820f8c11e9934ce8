use super::super::attack_tables::KING_TARGETS;
use super::super::{Move, MoveList, PieceKind, Position, Square};

impl Position {
    pub(crate) fn generate_king_moves(&self, from: Square, moves: &mut MoveList) {
        for &to in &KING_TARGETS[from.index()] {
            self.push_unless_friendly(from, to, moves);
        }

        let color = self.side_to_move;
        let back_rank = color.back_rank();
        if from != Square::at(back_rank, 4) || !self.castling_rights.has_any(color) {
            return;
        }

        let empty = |file: u8| self.piece_at(Square::at(back_rank, file)).is_empty();
        let own_rook = |file: u8| {
            self.piece_at(Square::at(back_rank, file))
                .is(PieceKind::Rook, color)
        };

        if self.castling_rights.has(color, true) && own_rook(7) && empty(5) && empty(6) {
            moves.push(Move::new(from, Square::at(back_rank, 6)));
        }
        if self.castling_rights.has(color, false)
            && own_rook(0)
            && empty(1)
            && empty(2)
            && empty(3)
        {
            moves.push(Move::new(from, Square::at(back_rank, 2)));
        }
    }
}
