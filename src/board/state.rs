use super::{CastlingRights, Color, Piece, PieceKind, Square};

/// FEN of the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// One ply of game state: the 64 squares plus everything FEN records.
///
/// Each king's `in_check` flag always mirrors whether that king is attacked;
/// parsing and move application both refresh it after changing the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub(crate) board: [Piece; 64],
    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
}

impl Position {
    /// The standard starting position.
    #[must_use]
    pub fn startpos() -> Self {
        let mut position = Position::empty();
        for (file, &kind) in BACK_RANK.iter().enumerate() {
            let file = file as u8;
            position.set_piece(Square::at(0, file), Piece::new(kind, Color::White));
            position.set_piece(Square::at(7, file), Piece::new(kind, Color::Black));
            position.set_piece(Square::at(1, file), Piece::new(PieceKind::Pawn, Color::White));
            position.set_piece(Square::at(6, file), Piece::new(PieceKind::Pawn, Color::Black));
        }
        position.castling_rights = CastlingRights::all();
        position
    }

    /// No pieces, White to move, no rights, no en-passant target,
    /// halfmove clock 0, fullmove number 1.
    #[must_use]
    pub fn empty() -> Self {
        Position {
            board: [Piece::EMPTY; 64],
            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Piece {
        self.board[sq.index()]
    }

    #[must_use]
    pub fn board(&self) -> &[Piece; 64] {
        &self.board
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    pub(crate) fn set_piece(&mut self, sq: Square, piece: Piece) {
        self.board[sq.index()] = piece;
    }

    pub(crate) fn take_piece(&mut self, sq: Square) -> Piece {
        std::mem::take(&mut self.board[sq.index()])
    }

    /// Squares holding a piece of `color`, in index order
    pub fn squares_of(&self, color: Color) -> impl Iterator<Item = Square> + '_ {
        Square::all().filter(move |&sq| self.piece_at(sq).is_color(color))
    }

    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<Square> {
        Square::all().find(|&sq| self.piece_at(sq).is(PieceKind::King, color))
    }

    /// True if `color`'s king is currently attacked (false with no king).
    #[must_use]
    pub fn is_king_attacked(&self, color: Color) -> bool {
        self.find_king(color)
            .is_some_and(|sq| self.piece_at(sq).in_check())
    }

    /// True if the side to move is in check
    #[must_use]
    pub fn in_check(&self) -> bool {
        self.is_king_attacked(self.side_to_move)
    }

    /// Recompute every king's `in_check` flag from the board.
    pub(crate) fn refresh_check_flags(&mut self) {
        for idx in 0..64 {
            let piece = self.board[idx];
            if piece.kind() != PieceKind::King {
                continue;
            }
            let sq = Square::from_index_unchecked(idx);
            let attacked = self.is_square_attacked(sq, piece.color().opponent());
            self.board[idx].set_in_check(attacked);
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::startpos()
    }
}
