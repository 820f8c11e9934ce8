//! Castling rights type.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;
use super::square::Square;

pub(crate) const CASTLE_WHITE_K: u8 = 1 << 0;
pub(crate) const CASTLE_WHITE_Q: u8 = 1 << 1;
pub(crate) const CASTLE_BLACK_K: u8 = 1 << 2;
pub(crate) const CASTLE_BLACK_Q: u8 = 1 << 3;

/// All castling rights combined
pub(crate) const ALL_CASTLING_RIGHTS: u8 =
    CASTLE_WHITE_K | CASTLE_WHITE_Q | CASTLE_BLACK_K | CASTLE_BLACK_Q;

/// FEN letters in bit order: K, Q, k, q
const RIGHT_CHARS: [(u8, char); 4] = [
    (CASTLE_WHITE_K, 'K'),
    (CASTLE_WHITE_Q, 'Q'),
    (CASTLE_BLACK_K, 'k'),
    (CASTLE_BLACK_Q, 'q'),
];

/// Castling rights represented as a bitmask, ordered white king-side,
/// white queen-side, black king-side, black queen-side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingRights(u8);

impl CastlingRights {
    /// No castling rights
    #[must_use]
    pub const fn none() -> Self {
        CastlingRights(0)
    }

    /// All castling rights (both sides can castle kingside and queenside)
    #[must_use]
    pub const fn all() -> Self {
        CastlingRights(ALL_CASTLING_RIGHTS)
    }

    /// Check if a specific castling right is set
    #[inline]
    #[must_use]
    pub const fn has(self, color: Color, kingside: bool) -> bool {
        let bit = Self::bit_for(color, kingside);
        self.0 & bit != 0
    }

    /// True if `color` may still castle to either side
    #[inline]
    #[must_use]
    pub const fn has_any(self, color: Color) -> bool {
        self.has(color, true) || self.has(color, false)
    }

    /// Set a specific castling right
    #[inline]
    pub fn set(&mut self, color: Color, kingside: bool) {
        self.0 |= Self::bit_for(color, kingside);
    }

    /// Remove a specific castling right
    #[inline]
    pub fn remove(&mut self, color: Color, kingside: bool) {
        self.0 &= !Self::bit_for(color, kingside);
    }

    /// Remove both rights of one color
    #[inline]
    pub fn remove_color(&mut self, color: Color) {
        self.remove(color, true);
        self.remove(color, false);
    }

    /// Drop `color`'s right tied to the rook corner `sq`, if `sq` is one.
    /// Called when a rook leaves its corner or is captured there.
    pub(crate) fn remove_for_rook_square(&mut self, color: Color, sq: Square) {
        if sq.rank() != color.back_rank() {
            return;
        }
        match sq.file() {
            0 => self.remove(color, false),
            7 => self.remove(color, true),
            _ => {}
        }
    }

    /// The four flags in K, Q, k, q order
    #[must_use]
    pub const fn as_flags(self) -> [bool; 4] {
        [
            self.0 & CASTLE_WHITE_K != 0,
            self.0 & CASTLE_WHITE_Q != 0,
            self.0 & CASTLE_BLACK_K != 0,
            self.0 & CASTLE_BLACK_Q != 0,
        ]
    }

    /// Read the FEN castling field. Every `K`, `Q`, `k`, `q` sets its right;
    /// any other character (including `-`) is ignored.
    #[must_use]
    pub fn from_fen_field(field: &str) -> Self {
        let mut rights = CastlingRights::none();
        for c in field.chars() {
            if let Some(&(bit, _)) = RIGHT_CHARS.iter().find(|(_, ch)| *ch == c) {
                rights.0 |= bit;
            }
        }
        rights
    }

    /// Get the bit for a specific castling right
    #[inline]
    const fn bit_for(color: Color, kingside: bool) -> u8 {
        match (color, kingside) {
            (Color::White, true) => CASTLE_WHITE_K,
            (Color::White, false) => CASTLE_WHITE_Q,
            (Color::Black, true) => CASTLE_BLACK_K,
            (Color::Black, false) => CASTLE_BLACK_Q,
        }
    }
}

/// FEN form: present rights in `KQkq` order, or `-`.
impl fmt::Display for CastlingRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0 {
            return write!(f, "-");
        }
        for (bit, c) in RIGHT_CHARS {
            if self.0 & bit != 0 {
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}
