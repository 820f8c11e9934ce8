mod kings;
mod knights;
mod pawns;
mod sliders;

use super::attacks::square_bit;
use super::{Move, MoveList, PieceKind, Position, Square};

use sliders::SliderType;

impl Position {
    /// Every move obeying piece movement rules for the side to move,
    /// without regard to the mover's own king.
    #[must_use]
    pub fn pseudo_legal_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        for from in self.squares_of(self.side_to_move) {
            let slider = match self.piece_at(from).kind() {
                PieceKind::Pawn => {
                    self.generate_pawn_moves(from, &mut moves);
                    continue;
                }
                PieceKind::Knight => {
                    self.generate_knight_moves(from, &mut moves);
                    continue;
                }
                PieceKind::King => {
                    self.generate_king_moves(from, &mut moves);
                    continue;
                }
                PieceKind::Bishop => SliderType::Bishop,
                PieceKind::Rook => SliderType::Rook,
                PieceKind::Queen => SliderType::Queen,
                PieceKind::None => continue,
            };
            self.generate_slider_moves(from, slider, &mut moves);
        }
        moves
    }

    /// Moves for the side to move that do not leave its own king attacked.
    ///
    /// Castling is also dropped when the king is in check, or when the
    /// square it crosses or lands on is attacked.
    #[must_use]
    pub fn legal_moves(&self) -> MoveList {
        let us = self.side_to_move;
        let pseudo_moves = self.pseudo_legal_moves();
        let mut legal_moves = MoveList::new();
        let mut scratch = *self;
        let mut enemy_attacks = None;

        for &mv in &pseudo_moves {
            if self.is_castling_move(mv) {
                let attacked =
                    *enemy_attacks.get_or_insert_with(|| self.attacked_squares(us.opponent()));
                let crossed = Square::at(mv.from().rank(), (mv.from().file() + mv.to().file()) / 2);
                let path = square_bit(mv.from()) | square_bit(crossed) | square_bit(mv.to());
                if attacked & path != 0 {
                    continue;
                }
            }

            let info = scratch.apply(mv);
            if !scratch.is_king_attacked(us) {
                legal_moves.push(mv);
            }
            scratch.undo(mv, info);
        }
        legal_moves
    }

    /// A king moving two files along its rank.
    #[must_use]
    pub fn is_castling_move(&self, mv: Move) -> bool {
        self.piece_at(mv.from()).kind() == PieceKind::King
            && mv.from().rank() == mv.to().rank()
            && mv.from().file().abs_diff(mv.to().file()) == 2
    }

    #[must_use]
    pub fn is_checkmate(&self) -> bool {
        self.in_check() && self.legal_moves().is_empty()
    }

    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        !self.in_check() && self.legal_moves().is_empty()
    }

    /// Push `from -> to` unless `to` holds a friendly piece. Returns true
    /// when `to` was empty, so a ray may keep sliding.
    fn push_unless_friendly(&self, from: Square, to: Square, moves: &mut MoveList) -> bool {
        let target = self.piece_at(to);
        if target.is_empty() {
            moves.push(Move::new(from, to));
            return true;
        }
        if !target.is_color(self.side_to_move) {
            moves.push(Move::new(from, to));
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Color, Piece};

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    fn uci_set(moves: &MoveList) -> Vec<String> {
        let mut out: Vec<String> = moves.iter().map(ToString::to_string).collect();
        out.sort();
        out
    }

    #[test]
    fn test_startpos_has_twenty_moves() {
        let position = Position::startpos();
        assert_eq!(position.pseudo_legal_moves().len(), 20);
        assert_eq!(position.legal_moves().len(), 20);
    }

    #[test]
    fn test_pinned_piece_cannot_move() {
        // Knight on e2 pinned by the rook on e8
        let position = Position::from_fen("4r1k1/8/8/8/8/8/4N3/4K3 w - - 0 1").unwrap();
        let legal = position.legal_moves();
        assert!(legal.iter().all(|mv| mv.from() != sq("e2")));
        assert!(position.pseudo_legal_moves().iter().any(|mv| mv.from() == sq("e2")));
    }

    #[test]
    fn test_no_move_targets_friendly_piece() {
        let position = Position::from_fen(
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        )
        .unwrap();
        for mv in &position.legal_moves() {
            assert!(!position.piece_at(mv.to()).is_color(Color::White), "{mv}");
        }
    }

    #[test]
    fn test_castling_blocked_by_attacked_path() {
        // Black rook on f8 covers f1
        let position = Position::from_fen("5rk1/8/8/8/8/8/8/R3K2R w KQ - 0 1").unwrap();
        let moves = uci_set(&position.legal_moves());
        assert!(!moves.contains(&"e1g1".to_string()));
        assert!(moves.contains(&"e1c1".to_string()));
    }

    #[test]
    fn test_castling_out_of_check_rejected() {
        let position = Position::from_fen("4r1k1/8/8/8/8/8/8/R3K2R w KQ - 0 1").unwrap();
        assert!(position.in_check());
        let moves = uci_set(&position.legal_moves());
        assert!(!moves.contains(&"e1g1".to_string()));
        assert!(!moves.contains(&"e1c1".to_string()));
    }

    #[test]
    fn test_queenside_b_file_may_be_attacked() {
        // Only b1 is attacked; the king never crosses it
        let position = Position::from_fen("1r4k1/8/8/8/8/8/8/R3K3 w Q - 0 1").unwrap();
        let moves = uci_set(&position.legal_moves());
        assert!(moves.contains(&"e1c1".to_string()));
    }

    #[test]
    fn test_checkmate_and_stalemate() {
        let mate = Position::from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1").unwrap();
        assert!(mate.is_checkmate());
        assert!(!mate.is_stalemate());

        let stale = Position::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
        assert!(stale.is_stalemate());
        assert!(!stale.is_checkmate());

        assert!(!Position::startpos().is_checkmate());
    }

    #[test]
    fn test_no_king_positions_generate_moves() {
        let mut position = Position::empty();
        position.set_piece(sq("d4"), Piece::new(PieceKind::Rook, Color::White));
        assert_eq!(position.legal_moves().len(), 14);
    }
}
