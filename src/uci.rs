//! UCI long algebraic move text (`e2e4`, `e7e8q`).
//!
//! Parsing here is purely textual; whether the move is legal is decided by
//! [`Game::make_move`](crate::board::Game::make_move).

use log::debug;

use crate::board::{Move, MoveParseError, PieceKind, Square};

/// Parse a move in UCI format.
///
/// Both squares are always checked. A fifth character that does not name
/// a knight, bishop, rook or queen is dropped, leaving a plain move.
///
/// Text of the wrong length or with an off-board square is an error rather
/// than a partial move, so nothing malformed ever reaches the board.
///
/// # Example
/// ```
/// use chess_core::uci::parse_move;
///
/// let mv = parse_move("e7e8q").unwrap();
/// assert_eq!(mv.to_string(), "e7e8q");
/// ```
pub fn parse_move(text: &str) -> Result<Move, MoveParseError> {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() < 4 || chars.len() > 5 {
        return Err(MoveParseError::InvalidLength { len: chars.len() });
    }

    let invalid_square = || MoveParseError::InvalidSquare {
        notation: text.to_string(),
    };
    let from = Square::from_coordinate(chars[0], chars[1]).ok_or_else(invalid_square)?;
    let to = Square::from_coordinate(chars[2], chars[3]).ok_or_else(invalid_square)?;

    let promotion = match chars.get(4) {
        None => PieceKind::None,
        Some(&c) => match PieceKind::from_char(c).filter(|kind| kind.is_promotion_target()) {
            Some(kind) => kind,
            None => {
                debug!("ignoring promotion character {c:?} in {text:?}");
                PieceKind::None
            }
        },
    };

    Ok(Move::with_promotion(from, to, promotion))
}

/// Format a move in UCI format (same as its `Display` form).
#[must_use]
pub fn format_move(mv: Move) -> String {
    mv.to_string()
}
