//! Square types and utilities.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A square on the chess board, stored as its index (a1=0, b1=1, ..., h8=63).
///
/// "No square" is spelled `Option<Square>::None` throughout the crate; its
/// printable form is `-` (see [`square_to_string`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(u8);

impl Square {
    /// Create a square from rank and file, with bounds checking
    #[inline]
    #[must_use]
    pub const fn new(rank: u8, file: u8) -> Option<Self> {
        if rank < 8 && file < 8 {
            Some(Square(rank * 8 + file))
        } else {
            None
        }
    }

    /// Create a square from an index (0-63)
    #[inline]
    #[must_use]
    pub const fn from_index(idx: usize) -> Option<Self> {
        if idx < 64 {
            Some(Square(idx as u8))
        } else {
            None
        }
    }

    /// Used only where the index is already known to be on the board.
    #[inline]
    pub(crate) const fn from_index_unchecked(idx: usize) -> Self {
        debug_assert!(idx < 64);
        Square(idx as u8)
    }

    /// Rank/file constructor for coordinates already known to be in range.
    #[inline]
    pub(crate) const fn at(rank: u8, file: u8) -> Self {
        debug_assert!(rank < 8 && file < 8);
        Square(rank * 8 + file)
    }

    /// Get the rank (0-7, where 0 = rank 1)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.0 / 8
    }

    /// Get the file (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn file(self) -> u8 {
        self.0 % 8
    }

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Step by a rank/file delta, returning `None` when the step leaves the
    /// board. Working in coordinates keeps edge squares from wrapping onto
    /// the opposite side of the board.
    #[inline]
    #[must_use]
    pub const fn offset(self, d_rank: i8, d_file: i8) -> Option<Square> {
        let rank = self.rank() as i8 + d_rank;
        let file = self.file() as i8 + d_file;
        if rank < 0 || rank > 7 || file < 0 || file > 7 {
            None
        } else {
            Some(Square((rank * 8 + file) as u8))
        }
    }

    /// Coordinate characters (`'a'..='h'`, `'1'..='8'`)
    #[inline]
    #[must_use]
    pub const fn coordinate(self) -> (char, char) {
        ((b'a' + self.file()) as char, (b'1' + self.rank()) as char)
    }

    /// Decode coordinate characters; anything outside `a`-`h` / `1`-`8`
    /// yields `None`.
    #[must_use]
    pub const fn from_coordinate(file: char, rank: char) -> Option<Square> {
        match (file, rank) {
            ('a'..='h', '1'..='8') => {
                Square::new(rank as u8 - b'1', file as u8 - b'a')
            }
            _ => None,
        }
    }

    /// Parse a two-character coordinate without reporting why it failed.
    /// `"-"` and every malformed input give `None`.
    #[must_use]
    pub fn parse_lenient(s: &str) -> Option<Square> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(file), Some(rank), None) => Square::from_coordinate(file, rank),
            _ => None,
        }
    }

    /// Iterate over all 64 squares in index order
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64u8).map(Square)
    }
}

/// Printable form of an optional square: the coordinate, or `-`.
#[must_use]
pub fn square_to_string(sq: Option<Square>) -> String {
    sq.map_or_else(|| "-".to_string(), |sq| sq.to_string())
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (file, rank) = self.coordinate();
        write!(f, "{file}{rank}")
    }
}

impl TryFrom<(u8, u8)> for Square {
    type Error = SquareError;

    fn try_from((rank, file): (u8, u8)) -> Result<Self, Self::Error> {
        if rank >= 8 {
            return Err(SquareError::RankOutOfBounds { rank });
        }
        if file >= 8 {
            return Err(SquareError::FileOutOfBounds { file });
        }
        Ok(Square(rank * 8 + file))
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Square::parse_lenient(s).ok_or_else(|| SquareError::InvalidNotation {
            notation: s.to_string(),
        })
    }
}
