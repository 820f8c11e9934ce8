//! Attack detection.
//!
//! Everything here is a pure query over the board; nothing is marked on
//! the pieces. The king `in_check` flags are derived from these queries by
//! `Position::refresh_check_flags`.

use super::attack_tables::{is_diagonal, ALL_DIRS, KING_TARGETS, KNIGHT_TARGETS, RAYS};
use super::{Color, PieceKind, Position, Square};

/// Set of squares, bit `i` standing for the square with index `i`.
pub type SquareSet = u64;

#[inline]
#[must_use]
pub const fn square_bit(sq: Square) -> SquareSet {
    1u64 << sq.index()
}

#[inline]
fn slides_along(kind: PieceKind, dir: usize) -> bool {
    match kind {
        PieceKind::Queen => true,
        PieceKind::Bishop => is_diagonal(dir),
        PieceKind::Rook => !is_diagonal(dir),
        _ => false,
    }
}

impl Position {
    /// True if any piece of `attacker` attacks `sq`.
    #[must_use]
    pub fn is_square_attacked(&self, sq: Square, attacker: Color) -> bool {
        // An attacking pawn stands one rank behind `sq` from its own side.
        let back = -attacker.pawn_direction();
        for df in [-1, 1] {
            if let Some(from) = sq.offset(back, df) {
                if self.piece_at(from).is(PieceKind::Pawn, attacker) {
                    return true;
                }
            }
        }

        if KNIGHT_TARGETS[sq.index()]
            .iter()
            .any(|&from| self.piece_at(from).is(PieceKind::Knight, attacker))
        {
            return true;
        }

        if KING_TARGETS[sq.index()]
            .iter()
            .any(|&from| self.piece_at(from).is(PieceKind::King, attacker))
        {
            return true;
        }

        for dir in ALL_DIRS {
            for &from in &RAYS[sq.index()][dir] {
                let piece = self.piece_at(from);
                if piece.is_empty() {
                    continue;
                }
                if piece.is_color(attacker) && slides_along(piece.kind(), dir) {
                    return true;
                }
                break;
            }
        }

        false
    }

    /// Every square attacked by `attacker`, including squares holding its
    /// own pieces (those are defended, which matters to the enemy king).
    #[must_use]
    pub fn attacked_squares(&self, attacker: Color) -> SquareSet {
        let mut set: SquareSet = 0;
        for from in self.squares_of(attacker) {
            let kind = self.piece_at(from).kind();
            match kind {
                PieceKind::Pawn => {
                    for df in [-1, 1] {
                        if let Some(to) = from.offset(attacker.pawn_direction(), df) {
                            set |= square_bit(to);
                        }
                    }
                }
                PieceKind::Knight => {
                    for &to in &KNIGHT_TARGETS[from.index()] {
                        set |= square_bit(to);
                    }
                }
                PieceKind::King => {
                    for &to in &KING_TARGETS[from.index()] {
                        set |= square_bit(to);
                    }
                }
                PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
                    for dir in ALL_DIRS {
                        if !slides_along(kind, dir) {
                            continue;
                        }
                        for &to in &RAYS[from.index()][dir] {
                            set |= square_bit(to);
                            if !self.piece_at(to).is_empty() {
                                break;
                            }
                        }
                    }
                }
                PieceKind::None => {}
            }
        }
        set
    }
}
