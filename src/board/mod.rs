//! Chess position representation and rules.
//!
//! A [`Position`] is a 64-square mailbox of packed [`Piece`] bytes plus the
//! FEN state fields. [`Game`] wraps a position with its legal moves and an
//! undo stack.
//!
//! # Example
//! ```
//! use chess_core::board::Game;
//!
//! let mut game = Game::new();
//! assert_eq!(game.legal_moves().len(), 20);
//! game.make_move_uci("e2e4").unwrap();
//! game.unmake_move();
//! ```

mod attack_tables;
mod attacks;
mod error;
mod fen;
mod game;
mod make_unmake;
mod movegen;
mod render;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use attacks::{square_bit, SquareSet};
pub use error::{FenError, MoveError, MoveParseError, SquareError};
pub use game::Game;
pub use make_unmake::UnmakeInfo;
pub use state::{Position, STARTING_FEN};
pub use types::{
    square_to_string, CastlingRights, Color, Move, MoveList, MoveListIntoIter, Piece, PieceKind,
    Square,
};
