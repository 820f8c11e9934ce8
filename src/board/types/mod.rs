//! Core chess types.
//!
//! This module contains the fundamental value types used throughout the crate:
//! - `Piece`, `PieceKind` and `Color` - the one-byte piece codec
//! - `Square` - board index codec
//! - `Move` and `MoveList` - packed move representation
//! - `CastlingRights` - castling state

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::CastlingRights;
pub use moves::{Move, MoveList, MoveListIntoIter};
pub use piece::{Color, Piece, PieceKind};
pub use square::{square_to_string, Square};

pub(crate) use piece::PROMOTION_KINDS;
