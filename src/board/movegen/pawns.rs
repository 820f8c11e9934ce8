use super::super::types::PROMOTION_KINDS;
use super::super::{Move, MoveList, PieceKind, Position, Square};

impl Position {
    pub(crate) fn generate_pawn_moves(&self, from: Square, moves: &mut MoveList) {
        let color = self.side_to_move;
        let dir = color.pawn_direction();

        if let Some(forward) = from.offset(dir, 0) {
            if self.piece_at(forward).is_empty() {
                push_pawn_move(from, forward, color.pawn_promotion_rank(), moves);
                if from.rank() == color.pawn_start_rank() {
                    if let Some(double) = forward.offset(dir, 0) {
                        if self.piece_at(double).is_empty() {
                            moves.push(Move::new(from, double));
                        }
                    }
                }
            }
        }

        for df in [-1, 1] {
            let Some(target) = from.offset(dir, df) else {
                continue;
            };
            let occupant = self.piece_at(target);
            if occupant.is_color(color.opponent()) {
                push_pawn_move(from, target, color.pawn_promotion_rank(), moves);
            } else if occupant.is_empty() && Some(target) == self.en_passant_target {
                // The pawn being taken sits beside us on the target's file
                let victim = Square::at(from.rank(), target.file());
                if self.piece_at(victim).is(PieceKind::Pawn, color.opponent()) {
                    moves.push(Move::new(from, target));
                }
            }
        }
    }
}

fn push_pawn_move(from: Square, to: Square, promotion_rank: u8, moves: &mut MoveList) {
    if to.rank() == promotion_rank {
        for promo in PROMOTION_KINDS {
            moves.push(Move::with_promotion(from, to, promo));
        }
    } else {
        moves.push(Move::new(from, to));
    }
}
