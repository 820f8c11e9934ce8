use std::fmt::Write;

use super::{Position, Square};

impl Position {
    /// ASCII diagram, rank 8 at the top, followed by the FEN.
    ///
    /// ```text
    /// 8 | r n b q k b n r
    /// ...
    /// 1 | R N B Q K B N R
    ///     a b c d e f g h
    /// FEN: rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1
    /// ```
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        for rank in (0..8u8).rev() {
            let _ = write!(out, "{} |", rank + 1);
            for file in 0..8 {
                let piece = self.piece_at(Square::at(rank, file));
                let ch = if piece.is_empty() { '.' } else { piece.to_char() };
                out.push(' ');
                out.push(ch);
            }
            out.push('\n');
        }
        out.push_str("    a b c d e f g h\n");
        let _ = writeln!(out, "FEN: {}", self.to_fen());
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_startpos() {
        let text = Position::startpos().render();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "8 | r n b q k b n r");
        assert_eq!(lines[4], "4 | . . . . . . . .");
        assert_eq!(lines[7], "1 | R N B Q K B N R");
        assert_eq!(lines[8], "    a b c d e f g h");
        assert_eq!(
            lines[9],
            "FEN: rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"
        );
    }
}
