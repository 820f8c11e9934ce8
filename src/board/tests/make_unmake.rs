//! Make/unmake move tests.

use rand::prelude::*;

use crate::board::{Color, Game, Move, PieceKind, Position, Square};

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

fn find_move(position: &Position, from: &str, to: &str, promotion: Option<PieceKind>) -> Move {
    for mv in position.legal_moves().iter() {
        if mv.from() == sq(from) && mv.to() == sq(to) && mv.promotion() == promotion {
            return *mv;
        }
    }
    panic!("Expected move {from}{to} not found");
}

/// Apply then undo every legal move and compare the whole position.
fn assert_every_move_reverts(position: &Position) {
    for &mv in position.legal_moves().iter() {
        let mut scratch = *position;
        let info = scratch.apply(mv);
        assert_ne!(scratch, *position, "{mv} changed nothing");
        scratch.undo(mv, info);
        assert_eq!(scratch, *position, "undo of {mv} did not restore the position");
    }
}

#[test]
fn test_every_move_reverts_in_reference_positions() {
    for fen in [
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
        "rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3",
        "n1n5/PPPk4/8/8/8/8/4Kppp/5N1N b - - 0 1",
    ] {
        assert_every_move_reverts(&Position::from_fen(fen).unwrap());
    }
}

#[test]
fn test_en_passant_make_unmake() {
    let position =
        Position::from_fen("rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3")
            .unwrap();
    let mv = find_move(&position, "e5", "f6", None);
    let mut scratch = position;
    let info = scratch.apply(mv);
    assert!(scratch.piece_at(sq("f5")).is_empty());
    assert_eq!(scratch.en_passant_target(), None);
    scratch.undo(mv, info);
    assert_eq!(scratch, position);
    assert_eq!(scratch.en_passant_target(), Some(sq("f6")));
}

#[test]
fn test_promotion_make_unmake() {
    let position = Position::from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1").unwrap();
    let mv = find_move(&position, "a7", "a8", Some(PieceKind::Queen));
    let mut scratch = position;
    let info = scratch.apply(mv);
    assert!(scratch.piece_at(sq("a8")).is(PieceKind::Queen, Color::White));
    scratch.undo(mv, info);
    assert!(scratch.piece_at(sq("a7")).is(PieceKind::Pawn, Color::White));
    assert_eq!(scratch, position);
}

#[test]
fn test_has_moved_flag_restored() {
    let mut game = Game::new();
    game.make_move_uci("g1f3").unwrap();
    assert!(game.position().piece_at(sq("f3")).has_moved());
    game.unmake_move();
    assert!(!game.position().piece_at(sq("g1")).has_moved());
}

#[test]
fn test_random_game_unwinds_to_start() {
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for _ in 0..8 {
        let mut game = Game::new();
        let mut snapshots = vec![(*game.position(), game.legal_moves().clone())];

        for _ in 0..80 {
            let moves = game.legal_moves();
            if moves.is_empty() {
                break;
            }
            let mv = moves.as_slice()[rng.gen_range(0..moves.len())];
            game.make_move(mv).unwrap();
            snapshots.push((*game.position(), game.legal_moves().clone()));
        }

        snapshots.pop();
        while let Some((position, moves)) = snapshots.pop() {
            game.unmake_move();
            assert_eq!(*game.position(), position);
            assert_eq!(*game.legal_moves(), moves);
        }
        assert_eq!(game.ply(), 0);
    }
}

#[test]
fn test_castling_e1g1_through_game() {
    let mut game = Game::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    game.make_move_uci("e1g1").unwrap();
    let position = game.position();
    assert!(position.piece_at(sq("g1")).is(PieceKind::King, Color::White));
    assert!(position.piece_at(sq("f1")).is(PieceKind::Rook, Color::White));
    assert!(position.piece_at(sq("h1")).is_empty());
    assert_eq!(position.castling_rights().to_string(), "kq");
    assert_eq!(position.to_fen(), "r3k2r/8/8/8/8/8/8/R4RK1 b kq - 1 1");
}
