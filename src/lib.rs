pub mod board;
pub mod perft;
pub mod uci;

pub use board::{Color, Game, Move, Piece, PieceKind, Position, Square};
pub use perft::{perft, perft_divide, perft_parallel};
