//! Error types for chess board operations.

use std::fmt;

use super::types::Move;

/// Error type for FEN parsing failures (an invalid position description)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// FEN string does not have exactly six fields
    WrongFieldCount { found: usize },
    /// Invalid piece character in the board field
    InvalidPiece { char: char },
    /// More than eight squares described in one rank
    TooManyFiles { rank: usize, files: usize },
    /// More than eight ranks in the board field
    TooManyRanks { found: usize },
    /// Fewer than eight squares described in one rank
    TooFewFiles { rank: usize, files: usize },
    /// Fewer than eight ranks in the board field
    TooFewRanks { found: usize },
    /// Halfmove clock or fullmove number is not an unsigned integer
    InvalidClock { field: &'static str, found: String },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::WrongFieldCount { found } => {
                write!(f, "FEN must have 6 fields, found {found}")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::TooManyFiles { rank, files } => {
                write!(f, "Too many files ({files}) in rank {rank}")
            }
            FenError::TooManyRanks { found } => {
                write!(f, "Too many ranks ({found}) in FEN board")
            }
            FenError::TooFewFiles { rank, files } => {
                write!(f, "Too few files ({files}) in rank {rank}")
            }
            FenError::TooFewRanks { found } => {
                write!(f, "Too few ranks ({found}) in FEN board")
            }
            FenError::InvalidClock { field, found } => {
                write!(f, "Invalid {field} '{found}' in FEN")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Error type for applying a move to a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// Move is not in the legal move set of the current position
    IllegalMove { mv: Move },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::IllegalMove { mv } => write!(f, "Illegal move '{mv}'"),
        }
    }
}

impl std::error::Error for MoveError {}

/// Error type for move text parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Move string has invalid length (must be 4-5 characters)
    InvalidLength { len: usize },
    /// Invalid square notation in move
    InvalidSquare { notation: String },
    /// Text parsed, but the move is not legal in the current position
    Illegal(MoveError),
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "Move must be 4-5 characters, found {len}")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "Invalid square notation in '{notation}'")
            }
            MoveParseError::Illegal(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for MoveParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MoveParseError::Illegal(e) => Some(e),
            _ => None,
        }
    }
}

impl From<MoveError> for MoveParseError {
    fn from(e: MoveError) -> Self {
        MoveParseError::Illegal(e)
    }
}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Rank out of bounds (must be 0-7)
    RankOutOfBounds { rank: u8 },
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: u8 },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Square;

    #[test]
    fn test_fen_error_wrong_field_count() {
        let err = FenError::WrongFieldCount { found: 2 };
        assert!(err.to_string().contains('2'));
        assert!(err.to_string().contains('6'));
    }

    #[test]
    fn test_fen_error_invalid_piece() {
        let err = FenError::InvalidPiece { char: 'z' };
        assert!(err.to_string().contains("'z'"));
    }

    #[test]
    fn test_fen_error_invalid_clock() {
        let err = FenError::InvalidClock {
            field: "halfmove clock",
            found: "x1".to_string(),
        };
        assert!(err.to_string().contains("halfmove clock"));
        assert!(err.to_string().contains("x1"));
    }

    #[test]
    fn test_fen_error_short_board() {
        let err = FenError::TooFewRanks { found: 7 };
        assert!(err.to_string().contains("(7)"));
        let err = FenError::TooFewFiles { rank: 7, files: 5 };
        assert_eq!(err.to_string(), "Too few files (5) in rank 7");
    }

    #[test]
    fn test_move_error_display() {
        let mv = Move::new("e2".parse::<Square>().unwrap(), "e5".parse().unwrap());
        let err = MoveError::IllegalMove { mv };
        assert!(err.to_string().contains("e2e5"));
    }

    #[test]
    fn test_move_parse_error_source() {
        use std::error::Error;

        let mv = Move::new("e2".parse::<Square>().unwrap(), "e5".parse().unwrap());
        let err: MoveParseError = MoveError::IllegalMove { mv }.into();
        assert!(err.source().is_some());
        assert!(MoveParseError::InvalidLength { len: 3 }.source().is_none());
    }

    #[test]
    fn test_square_error_rank_bounds() {
        let err = SquareError::RankOutOfBounds { rank: 9 };
        assert!(err.to_string().contains('9'));
    }

    #[test]
    fn test_error_clone() {
        let err = FenError::InvalidPiece { char: 'x' };
        let cloned = err.clone();
        assert_eq!(err, cloned);
    }
}
