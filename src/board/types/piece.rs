//! Piece, piece kind and color types.
//!
//! A [`Piece`] packs everything a board square needs into one byte:
//!
//! ```text
//! bit  5      4          3       2..0
//!      check  has_moved  color   kind
//! ```
//!
//! `kind` is 0 for an empty square, 1-6 for pawn..king. `color` is 0 for
//! White and 1 for Black. The two flag bits never disturb kind or color.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const KIND_MASK: u8 = 0b0000_0111;
const COLOR_BIT: u8 = 0b0000_1000;
const MOVED_BIT: u8 = 0b0001_0000;
const CHECK_BIT: u8 = 0b0010_0000;
const FLAG_MASK: u8 = MOVED_BIT | CHECK_BIT;

/// Chess piece types, including the empty marker.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum PieceKind {
    None = 0,
    Pawn = 1,
    Knight = 2,
    Bishop = 3,
    Rook = 4,
    Queen = 5,
    King = 6,
}

impl PieceKind {
    /// All real piece kinds in code order
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    #[inline]
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Decode a 3-bit kind code. Codes 7 and above map to `None`.
    #[inline]
    #[must_use]
    pub const fn from_code(code: u8) -> PieceKind {
        match code {
            1 => PieceKind::Pawn,
            2 => PieceKind::Knight,
            3 => PieceKind::Bishop,
            4 => PieceKind::Rook,
            5 => PieceKind::Queen,
            6 => PieceKind::King,
            _ => PieceKind::None,
        }
    }

    /// Parse a kind from a letter (p, n, b, r, q, k), case-insensitively.
    #[must_use]
    pub fn from_char(c: char) -> Option<PieceKind> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Lowercase letter for this kind, `-` for `None`
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            PieceKind::None => '-',
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    /// Returns true for the kinds a pawn may promote to
    #[inline]
    #[must_use]
    pub const fn is_promotion_target(self) -> bool {
        matches!(
            self,
            PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen
        )
    }
}

/// Promotion choices in the order they are generated (queen first)
pub(crate) const PROMOTION_KINDS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

/// Chess colors.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Both colors in index order (White=0, Black=1)
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    /// Returns the opposite color
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Back rank for this color (0 for White, 7 for Black)
    #[inline]
    #[must_use]
    pub const fn back_rank(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// Pawn forward direction (+1 for White, -1 for Black)
    #[inline]
    #[must_use]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Pawn starting rank (1 for White, 6 for Black)
    #[inline]
    #[must_use]
    pub const fn pawn_start_rank(self) -> u8 {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }

    /// Pawn promotion rank (7 for White, 0 for Black)
    #[inline]
    #[must_use]
    pub const fn pawn_promotion_rank(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// A piece (or the empty marker) packed into one byte.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece(u8);

impl Piece {
    /// The canonical empty square: kind `None`, color White, no flags.
    pub const EMPTY: Piece = Piece(0);

    /// Encode a kind and color. A `None` kind always yields [`Piece::EMPTY`].
    #[inline]
    #[must_use]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        if matches!(kind, PieceKind::None) {
            return Piece::EMPTY;
        }
        let color_bits = match color {
            Color::White => 0,
            Color::Black => COLOR_BIT,
        };
        Piece(kind.code() | color_bits)
    }

    #[inline]
    #[must_use]
    pub const fn kind(self) -> PieceKind {
        PieceKind::from_code(self.0 & KIND_MASK)
    }

    #[inline]
    #[must_use]
    pub const fn color(self) -> Color {
        if self.0 & COLOR_BIT == 0 {
            Color::White
        } else {
            Color::Black
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 & KIND_MASK == 0
    }

    /// True if this square holds a piece of `kind` belonging to `color`
    #[inline]
    #[must_use]
    pub const fn is(self, kind: PieceKind, color: Color) -> bool {
        !self.is_empty()
            && self.0 & KIND_MASK == kind.code()
            && self.color().index() == color.index()
    }

    /// True if this square holds a piece of `color`
    #[inline]
    #[must_use]
    pub const fn is_color(self, color: Color) -> bool {
        !self.is_empty() && self.color().index() == color.index()
    }

    #[inline]
    #[must_use]
    pub const fn has_moved(self) -> bool {
        self.0 & MOVED_BIT != 0
    }

    #[inline]
    pub fn set_has_moved(&mut self, moved: bool) {
        if moved {
            self.0 |= MOVED_BIT;
        } else {
            self.0 &= !MOVED_BIT;
        }
    }

    /// Only ever set on kings, by the position after every placement.
    #[inline]
    #[must_use]
    pub const fn in_check(self) -> bool {
        self.0 & CHECK_BIT != 0
    }

    #[inline]
    pub fn set_in_check(&mut self, in_check: bool) {
        if in_check {
            self.0 |= CHECK_BIT;
        } else {
            self.0 &= !CHECK_BIT;
        }
    }

    /// Same kind and color with both flags cleared
    #[inline]
    #[must_use]
    pub const fn without_flags(self) -> Piece {
        Piece(self.0 & !FLAG_MASK)
    }

    /// Raw packed byte
    #[inline]
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self.0
    }

    /// FEN/display letter: uppercase for White, lowercase for Black,
    /// `-` for an empty square.
    #[must_use]
    pub const fn to_char(self) -> char {
        let c = self.kind().to_char();
        if !self.is_empty() && matches!(self.color(), Color::White) {
            c.to_ascii_uppercase()
        } else {
            c
        }
    }

    /// Decode a display letter. Anything that is not one of
    /// `pnbrqkPNBRQK` decodes to the empty piece.
    #[must_use]
    pub fn from_char(c: char) -> Piece {
        match PieceKind::from_char(c) {
            Some(kind) => {
                let color = if c.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                Piece::new(kind, color)
            }
            None => Piece::EMPTY,
        }
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Piece({}", self.to_char())?;
        if self.has_moved() {
            write!(f, " moved")?;
        }
        if self.in_check() {
            write!(f, " check")?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
