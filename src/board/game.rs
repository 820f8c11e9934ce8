use log::debug;

use super::error::{FenError, MoveError, MoveParseError};
use super::{Move, MoveList, PieceKind, Position, UnmakeInfo};

#[derive(Clone, Debug)]
struct HistoryEntry {
    mv: Move,
    info: UnmakeInfo,
    legal_moves: MoveList,
}

/// A position plus its cached legal moves and an undo stack.
///
/// The cached move list always belongs to the current position; it is
/// regenerated after every move and restored from the stack on unmake.
#[derive(Clone, Debug)]
pub struct Game {
    position: Position,
    legal_moves: MoveList,
    history: Vec<HistoryEntry>,
}

impl Game {
    /// Game from the standard starting position.
    #[must_use]
    pub fn new() -> Self {
        Game::from_position(Position::startpos())
    }

    #[must_use]
    pub fn from_position(position: Position) -> Self {
        let legal_moves = position.legal_moves();
        Game {
            position,
            legal_moves,
            history: Vec::new(),
        }
    }

    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        Position::from_fen(fen).map(Game::from_position)
    }

    #[must_use]
    pub fn position(&self) -> &Position {
        &self.position
    }

    #[must_use]
    pub fn legal_moves(&self) -> &MoveList {
        &self.legal_moves
    }

    /// Number of moves played since construction
    #[must_use]
    pub fn ply(&self) -> usize {
        self.history.len()
    }

    /// Moves played so far, oldest first
    pub fn moves_played(&self) -> impl Iterator<Item = Move> + '_ {
        self.history.iter().map(|entry| entry.mv)
    }

    /// Find the legal move `mv` refers to.
    ///
    /// Membership is by origin and target. For a promotion the requested
    /// piece is used, or a queen when none was given; a request for a piece
    /// a pawn cannot become matches nothing.
    #[must_use]
    pub fn resolve_move(&self, mv: Move) -> Option<Move> {
        let mut candidates = self
            .legal_moves
            .iter()
            .copied()
            .filter(|legal| legal.same_squares(mv))
            .peekable();
        let first = *candidates.peek()?;
        if first.promotion().is_none() {
            if mv.promotion().is_some() {
                debug!("dropping promotion piece from non-promotion move {mv}");
            }
            return Some(first);
        }
        let wanted = mv.promotion().unwrap_or(PieceKind::Queen);
        candidates.find(|legal| legal.promotion() == Some(wanted))
    }

    /// Play `mv` if it is legal, returning the move actually applied.
    ///
    /// An illegal move leaves the game untouched.
    pub fn make_move(&mut self, mv: Move) -> Result<Move, MoveError> {
        let Some(resolved) = self.resolve_move(mv) else {
            debug!("rejected illegal move {mv} in {}", self.position.to_fen());
            return Err(MoveError::IllegalMove { mv });
        };
        self.play_unchecked(resolved);
        Ok(resolved)
    }

    /// Parse UCI text and play it.
    pub fn make_move_uci(&mut self, text: &str) -> Result<Move, MoveParseError> {
        let mv = crate::uci::parse_move(text)?;
        Ok(self.make_move(mv)?)
    }

    /// Play a move already known to be in the legal set.
    pub(crate) fn play_unchecked(&mut self, mv: Move) {
        let info = self.position.apply(mv);
        let legal_moves = std::mem::replace(&mut self.legal_moves, self.position.legal_moves());
        self.history.push(HistoryEntry {
            mv,
            info,
            legal_moves,
        });
    }

    /// Take back the last move and return it.
    ///
    /// # Panics
    /// Panics if no move has been played.
    pub fn unmake_move(&mut self) -> Move {
        let Some(entry) = self.history.pop() else {
            panic!("unmake_move called with no moves played");
        };
        self.position.undo(entry.mv, entry.info);
        self.legal_moves = entry.legal_moves;
        entry.mv
    }

    #[must_use]
    pub fn is_checkmate(&self) -> bool {
        self.position.in_check() && self.legal_moves.is_empty()
    }

    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        !self.position.in_check() && self.legal_moves.is_empty()
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

impl From<Position> for Game {
    fn from(position: Position) -> Self {
        Game::from_position(position)
    }
}
