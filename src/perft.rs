//! Perft: count leaf nodes of the legal move tree.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use log::trace;
use parking_lot::Mutex;

use crate::board::{Game, Move, Position};

/// Leaf count at `depth`. Depth 0 counts the current position once.
///
/// The game is left exactly as it was passed in.
pub fn perft(game: &mut Game, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }
    if depth == 1 {
        return game.legal_moves().len() as u64;
    }

    let moves = game.legal_moves().clone();
    let mut nodes = 0;
    for mv in moves {
        game.play_unchecked(mv);
        nodes += perft(game, depth - 1);
        game.unmake_move();
    }
    nodes
}

/// Leaf counts below each root move, in generation order.
pub fn perft_divide(game: &mut Game, depth: usize) -> Vec<(Move, u64)> {
    if depth == 0 {
        return Vec::new();
    }

    let moves = game.legal_moves().clone();
    let mut results = Vec::with_capacity(moves.len());
    for mv in moves {
        game.play_unchecked(mv);
        let nodes = perft(game, depth - 1);
        game.unmake_move();
        trace!("{mv}: {nodes}");
        results.push((mv, nodes));
    }
    results
}

/// [`perft`] with root moves shared out over `threads` workers.
///
/// Each worker plays its branches on its own [`Game`].
#[must_use]
pub fn perft_parallel(position: &Position, depth: usize, threads: usize) -> u64 {
    let mut root = Game::from_position(*position);
    if depth <= 1 || threads <= 1 {
        return perft(&mut root, depth);
    }

    let moves = root.legal_moves().clone();
    let next = AtomicUsize::new(0);
    let results: Mutex<Vec<(Move, u64)>> = Mutex::new(Vec::with_capacity(moves.len()));

    thread::scope(|scope| {
        for _ in 0..threads.min(moves.len()) {
            scope.spawn(|| loop {
                let idx = next.fetch_add(1, Ordering::Relaxed);
                let Some(mv) = moves.get(idx) else {
                    break;
                };
                let mut game = Game::from_position(*position);
                game.play_unchecked(mv);
                let nodes = perft(&mut game, depth - 1);
                trace!("{mv}: {nodes}");
                results.lock().push((mv, nodes));
            });
        }
    });

    results.into_inner().iter().map(|&(_, nodes)| nodes).sum()
}
