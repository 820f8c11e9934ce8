use super::{CastlingRights, Color, Move, Piece, PieceKind, Position, Square};

/// Side effects of a move beyond "origin to target".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Special {
    Normal,
    /// The captured pawn stood on `victim`, not on the target square.
    EnPassant { victim: Square },
    Castle {
        rook_from: Square,
        rook_to: Square,
        rook: Piece,
    },
}

/// Everything needed to take a move back, recorded by [`Position::apply`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnmakeInfo {
    pub(crate) moved_piece: Piece,
    pub(crate) captured_piece: Piece,
    pub(crate) special: Special,
    pub(crate) previous_castling_rights: CastlingRights,
    pub(crate) previous_en_passant_target: Option<Square>,
    pub(crate) previous_halfmove_clock: u32,
    pub(crate) previous_fullmove_number: u32,
}

impl UnmakeInfo {
    /// The piece removed from the board by the move, if any.
    #[must_use]
    pub fn captured(&self) -> Option<Piece> {
        (!self.captured_piece.is_empty()).then_some(self.captured_piece.without_flags())
    }
}

impl Position {
    /// Play `mv` without any legality check.
    ///
    /// Capture, en passant and castling are read off the board: a pawn
    /// moving diagonally onto an empty square takes en passant, a king
    /// moving two files castles.
    pub(crate) fn apply(&mut self, mv: Move) -> UnmakeInfo {
        let us = self.side_to_move;
        let them = us.opponent();
        let (from, to) = (mv.from(), mv.to());

        let previous_castling_rights = self.castling_rights;
        let previous_en_passant_target = self.en_passant_target;
        let previous_halfmove_clock = self.halfmove_clock;
        let previous_fullmove_number = self.fullmove_number;

        let moved_piece = self.take_piece(from);
        let mut captured_piece = self.take_piece(to);
        let mut special = Special::Normal;

        match moved_piece.kind() {
            PieceKind::Pawn if from.file() != to.file() && captured_piece.is_empty() => {
                let victim = Square::at(from.rank(), to.file());
                captured_piece = self.take_piece(victim);
                special = Special::EnPassant { victim };
            }
            PieceKind::King if from.file().abs_diff(to.file()) == 2 => {
                let (rook_from_file, rook_to_file) = if to.file() > from.file() {
                    (7, 5)
                } else {
                    (0, 3)
                };
                let rook_from = Square::at(from.rank(), rook_from_file);
                let rook_to = Square::at(from.rank(), rook_to_file);
                let rook = self.take_piece(rook_from);
                let mut placed_rook = rook;
                placed_rook.set_has_moved(true);
                self.set_piece(rook_to, placed_rook);
                special = Special::Castle {
                    rook_from,
                    rook_to,
                    rook,
                };
            }
            _ => {}
        }

        let mut placed = match mv.promotion() {
            Some(kind) if moved_piece.kind() == PieceKind::Pawn => Piece::new(kind, us),
            _ => moved_piece,
        };
        placed.set_has_moved(true);
        self.set_piece(to, placed);

        let is_pawn = moved_piece.kind() == PieceKind::Pawn;
        if is_pawn || !captured_piece.is_empty() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }

        self.en_passant_target = if is_pawn && from.rank().abs_diff(to.rank()) == 2 {
            Some(Square::at((from.rank() + to.rank()) / 2, from.file()))
        } else {
            None
        };

        match moved_piece.kind() {
            PieceKind::King => self.castling_rights.remove_color(us),
            PieceKind::Rook => self.castling_rights.remove_for_rook_square(us, from),
            _ => {}
        }
        if captured_piece.kind() == PieceKind::Rook {
            self.castling_rights.remove_for_rook_square(them, to);
        }

        self.side_to_move = them;
        if them == Color::White {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }
        self.refresh_check_flags();

        UnmakeInfo {
            moved_piece,
            captured_piece,
            special,
            previous_castling_rights,
            previous_en_passant_target,
            previous_halfmove_clock,
            previous_fullmove_number,
        }
    }

    /// Take back `mv` using the record `apply` returned for it.
    pub(crate) fn undo(&mut self, mv: Move, info: UnmakeInfo) {
        self.side_to_move = self.side_to_move.opponent();
        self.castling_rights = info.previous_castling_rights;
        self.en_passant_target = info.previous_en_passant_target;
        self.halfmove_clock = info.previous_halfmove_clock;
        self.fullmove_number = info.previous_fullmove_number;

        self.take_piece(mv.to());
        self.set_piece(mv.from(), info.moved_piece);

        match info.special {
            Special::Normal => self.set_piece(mv.to(), info.captured_piece),
            Special::EnPassant { victim } => self.set_piece(victim, info.captured_piece),
            Special::Castle {
                rook_from,
                rook_to,
                rook,
            } => {
                self.take_piece(rook_to);
                self.set_piece(rook_from, rook);
            }
        }

        self.refresh_check_flags();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    fn mv(s: &str) -> Move {
        crate::uci::parse_move(s).unwrap()
    }

    #[test]
    fn test_double_push_sets_en_passant_target() {
        let mut position = Position::startpos();
        let info = position.apply(mv("e2e4"));
        assert_eq!(position.en_passant_target(), Some(sq("e3")));
        assert_eq!(position.side_to_move(), Color::Black);
        assert_eq!(position.halfmove_clock(), 0);
        assert_eq!(position.fullmove_number(), 1);
        assert!(position.piece_at(sq("e4")).has_moved());
        assert_eq!(info.captured(), None);
    }

    #[test]
    fn test_fullmove_advances_after_black() {
        let mut position = Position::startpos();
        position.apply(mv("g1f3"));
        assert_eq!(position.halfmove_clock(), 1);
        position.apply(mv("g8f6"));
        assert_eq!(position.fullmove_number(), 2);
        assert_eq!(position.halfmove_clock(), 2);
    }

    #[test]
    fn test_castling_moves_rook_and_clears_rights() {
        let mut position = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 3 10").unwrap();
        let before = position;
        let info = position.apply(mv("e1g1"));
        assert!(position.piece_at(sq("f1")).is(PieceKind::Rook, Color::White));
        assert!(position.piece_at(sq("f1")).has_moved());
        assert!(position.piece_at(sq("h1")).is_empty());
        assert!(!position.castling_rights().has_any(Color::White));
        assert!(position.castling_rights().has_any(Color::Black));
        assert_eq!(position.halfmove_clock(), 4);

        position.undo(mv("e1g1"), info);
        assert_eq!(position, before);
    }

    #[test]
    fn test_queenside_castle_black() {
        let mut position = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1").unwrap();
        position.apply(mv("e8c8"));
        assert!(position.piece_at(sq("d8")).is(PieceKind::Rook, Color::Black));
        assert!(position.piece_at(sq("c8")).is(PieceKind::King, Color::Black));
        assert_eq!(position.castling_rights().to_string(), "KQ");
    }

    #[test]
    fn test_en_passant_capture_and_undo() {
        let mut position = Position::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 5").unwrap();
        let before = position;
        let info = position.apply(mv("e5d6"));
        assert!(position.piece_at(sq("d5")).is_empty());
        assert!(position.piece_at(sq("d6")).is(PieceKind::Pawn, Color::White));
        assert_eq!(info.captured(), Some(Piece::new(PieceKind::Pawn, Color::Black)));

        position.undo(mv("e5d6"), info);
        assert_eq!(position, before);
    }

    #[test]
    fn test_promotion_and_undo() {
        let mut position = Position::from_fen("1r2k3/P7/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        let before = position;
        let promo = Move::with_promotion(sq("a7"), sq("b8"), PieceKind::Knight);
        let info = position.apply(promo);
        assert!(position.piece_at(sq("b8")).is(PieceKind::Knight, Color::White));
        assert_eq!(info.captured(), Some(Piece::new(PieceKind::Rook, Color::Black)));
        position.undo(promo, info);
        assert_eq!(position, before);
    }

    #[test]
    fn test_rook_capture_on_corner_clears_right() {
        let mut position = Position::from_fen("r3k2r/8/8/8/8/8/6B1/R3K2R w KQkq - 0 1").unwrap();
        // Bishop g2 takes the rook on a8
        position.apply(mv("g2a8"));
        assert_eq!(position.castling_rights().to_string(), "KQk");
    }

    #[test]
    fn test_rook_move_clears_one_right() {
        let mut position = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        position.apply(mv("a1a2"));
        assert_eq!(position.castling_rights().to_string(), "Kkq");
    }

    #[test]
    fn test_check_flag_follows_the_board() {
        let mut position = Position::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 0 1").unwrap();
        let info = position.apply(mv("a1a8"));
        assert!(position.in_check());
        assert!(position.piece_at(sq("e8")).in_check());
        position.undo(mv("a1a8"), info);
        assert!(!position.piece_at(sq("e8")).in_check());
    }
}
