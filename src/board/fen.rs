use std::str::FromStr;

use log::debug;

use super::error::FenError;
use super::{CastlingRights, Color, Piece, Position, Square};

impl Position {
    /// Parse a position from FEN notation.
    ///
    /// Empty (or all-whitespace) input gives [`Position::empty`]. Otherwise
    /// all six fields must be present. The side-to-move, castling and
    /// en-passant fields are read permissively: `w` means White and anything
    /// else Black, unknown castling letters are skipped, and an unreadable
    /// en-passant square counts as none.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.is_empty() {
            return Ok(Position::empty());
        }
        if parts.len() != 6 {
            return Err(FenError::WrongFieldCount { found: parts.len() });
        }

        let mut position = Position::empty();

        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() > 8 {
            return Err(FenError::TooManyRanks { found: ranks.len() });
        }
        if ranks.len() < 8 {
            return Err(FenError::TooFewRanks { found: ranks.len() });
        }
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - rank_idx as u8;
            let mut file = 0usize;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10).filter(|d| (1..=8).contains(d)) {
                    file += skip as usize;
                    if file > 8 {
                        return Err(FenError::TooManyFiles {
                            rank: rank_idx,
                            files: file,
                        });
                    }
                    continue;
                }
                let piece = Piece::from_char(c);
                if piece.is_empty() {
                    return Err(FenError::InvalidPiece { char: c });
                }
                if file >= 8 {
                    return Err(FenError::TooManyFiles {
                        rank: rank_idx,
                        files: file + 1,
                    });
                }
                position.set_piece(Square::at(rank, file as u8), piece);
                file += 1;
            }
            if file < 8 {
                return Err(FenError::TooFewFiles {
                    rank: rank_idx,
                    files: file,
                });
            }
        }

        position.side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                debug!("side to move {other:?} read as black");
                Color::Black
            }
        };

        position.castling_rights = CastlingRights::from_fen_field(parts[2]);

        position.en_passant_target = Square::parse_lenient(parts[3]);
        if position.en_passant_target.is_none() && parts[3] != "-" {
            debug!("en passant field {:?} read as none", parts[3]);
        }

        position.halfmove_clock = parse_clock("halfmove clock", parts[4])?;
        position.fullmove_number = parse_clock("fullmove number", parts[5])?;

        position.refresh_check_flags();
        Ok(position)
    }

    /// Convert the position to FEN notation.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                let piece = self.piece_at(Square::at(rank, file));
                if piece.is_empty() {
                    empty += 1;
                    continue;
                }
                if empty > 0 {
                    row.push_str(&empty.to_string());
                    empty = 0;
                }
                row.push(piece.to_char());
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let active = match self.side_to_move {
            Color::White => "w",
            Color::Black => "b",
        };

        format!(
            "{} {} {} {} {} {}",
            rows.join("/"),
            active,
            self.castling_rights,
            super::square_to_string(self.en_passant_target),
            self.halfmove_clock,
            self.fullmove_number
        )
    }
}

fn parse_clock(field: &'static str, text: &str) -> Result<u32, FenError> {
    text.parse().map_err(|_| FenError::InvalidClock {
        field,
        found: text.to_string(),
    })
}

impl FromStr for Position {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::from_fen(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{PieceKind, STARTING_FEN};

    #[test]
    fn test_startpos_round_trip() {
        let position = Position::from_fen(STARTING_FEN).unwrap();
        assert_eq!(position, Position::startpos());
        assert_eq!(position.to_fen(), STARTING_FEN);
    }

    #[test]
    fn test_canonical_round_trips() {
        for fen in [
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
            "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
            "rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq e6 0 2",
            "4k3/8/8/8/8/8/8/4K3 b Kq - 37 120",
        ] {
            assert_eq!(Position::from_fen(fen).unwrap().to_fen(), fen);
        }
    }

    #[test]
    fn test_empty_input_gives_empty_position() {
        assert_eq!(Position::from_fen("").unwrap(), Position::empty());
        assert_eq!(Position::from_fen("   ").unwrap(), Position::empty());
        assert_eq!(Position::empty().to_fen(), "8/8/8/8/8/8/8/8 w - - 0 1");
    }

    #[test]
    fn test_field_count() {
        assert_eq!(
            Position::from_fen("8/8/8/8/8/8/8/8 w - -"),
            Err(FenError::WrongFieldCount { found: 4 })
        );
        assert!(matches!(
            Position::from_fen("8/8/8/8/8/8/8/8 w - - 0 1 extra"),
            Err(FenError::WrongFieldCount { found: 7 })
        ));
    }

    #[test]
    fn test_board_errors() {
        assert_eq!(
            Position::from_fen("8/8/8/8/8/8/8/7X w - - 0 1"),
            Err(FenError::InvalidPiece { char: 'X' })
        );
        assert!(matches!(
            Position::from_fen("8/8/8/8/8/8/8/8p w - - 0 1"),
            Err(FenError::TooManyFiles { rank: 7, .. })
        ));
        assert!(matches!(
            Position::from_fen("8/8/8/8/8/8/8/8/8 w - - 0 1"),
            Err(FenError::TooManyRanks { found: 9 })
        ));
        assert!(matches!(
            Position::from_fen("8/8/8/8/8/8/8/0 w - - 0 1"),
            Err(FenError::InvalidPiece { char: '0' })
        ));
    }

    #[test]
    fn test_short_board_rejected() {
        assert_eq!(
            Position::from_fen("8/8/8/8/8/8/8 w - - 0 1"),
            Err(FenError::TooFewRanks { found: 7 })
        );
        assert_eq!(
            Position::from_fen("4k3/8/8/8/8/8/8/4K w - - 0 1"),
            Err(FenError::TooFewFiles { rank: 7, files: 5 })
        );
        assert_eq!(
            Position::from_fen("8/8/8//8/8/8/8 w - - 0 1"),
            Err(FenError::TooFewFiles { rank: 3, files: 0 })
        );
    }

    #[test]
    fn test_clock_errors() {
        assert!(matches!(
            Position::from_fen("8/8/8/8/8/8/8/8 w - - x 1"),
            Err(FenError::InvalidClock { field: "halfmove clock", .. })
        ));
        assert!(matches!(
            Position::from_fen("8/8/8/8/8/8/8/8 w - - 0 -3"),
            Err(FenError::InvalidClock { field: "fullmove number", .. })
        ));
    }

    #[test]
    fn test_permissive_fields() {
        let position = Position::from_fen("4k3/8/8/8/8/8/8/4K3 x KZq e9 0 1").unwrap();
        assert_eq!(position.side_to_move(), Color::Black);
        assert_eq!(position.castling_rights().to_string(), "Kq");
        assert_eq!(position.en_passant_target(), None);
    }

    #[test]
    fn test_check_flags_computed_on_parse() {
        let position: Position = "4k3/8/8/8/8/8/8/4RK2 b - - 0 1".parse().unwrap();
        assert!(position.in_check());
        let king = position.find_king(Color::Black).unwrap();
        assert!(position.piece_at(king).is(PieceKind::King, Color::Black));
        assert!(position.piece_at(king).in_check());
    }
}
