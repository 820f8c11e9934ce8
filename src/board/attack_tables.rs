//! Precomputed per-square target tables.
//!
//! Rays are stored as ordered square lists, nearest square first, so a
//! walk can stop at the first occupied square.

use once_cell::sync::Lazy;

use super::Square;

pub(crate) const DIR_N: usize = 0;
pub(crate) const DIR_S: usize = 1;
pub(crate) const DIR_E: usize = 2;
pub(crate) const DIR_W: usize = 3;
pub(crate) const DIR_NE: usize = 4;
pub(crate) const DIR_NW: usize = 5;
pub(crate) const DIR_SE: usize = 6;
pub(crate) const DIR_SW: usize = 7;

/// Rank/file step for each direction index
const DIRECTIONS: [(i8, i8); 8] = [
    (1, 0),   // N
    (-1, 0),  // S
    (0, 1),   // E
    (0, -1),  // W
    (1, 1),   // NE
    (1, -1),  // NW
    (-1, 1),  // SE
    (-1, -1), // SW
];

pub(crate) const ORTHOGONAL_DIRS: [usize; 4] = [DIR_N, DIR_S, DIR_E, DIR_W];
pub(crate) const DIAGONAL_DIRS: [usize; 4] = [DIR_NE, DIR_NW, DIR_SE, DIR_SW];
pub(crate) const ALL_DIRS: [usize; 8] = [
    DIR_N, DIR_S, DIR_E, DIR_W, DIR_NE, DIR_NW, DIR_SE, DIR_SW,
];

const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

#[inline]
pub(crate) const fn is_diagonal(dir: usize) -> bool {
    dir >= DIR_NE
}

fn step_targets(deltas: &[(i8, i8)]) -> Vec<Vec<Square>> {
    Square::all()
        .map(|sq| {
            deltas
                .iter()
                .filter_map(|&(dr, df)| sq.offset(dr, df))
                .collect()
        })
        .collect()
}

pub(crate) static KNIGHT_TARGETS: Lazy<Vec<Vec<Square>>> =
    Lazy::new(|| step_targets(&KNIGHT_DELTAS));

pub(crate) static KING_TARGETS: Lazy<Vec<Vec<Square>>> = Lazy::new(|| step_targets(&DIRECTIONS));

pub(crate) static RAYS: Lazy<Vec<[Vec<Square>; 8]>> = Lazy::new(|| {
    Square::all()
        .map(|sq| {
            std::array::from_fn(|dir| {
                let (dr, df) = DIRECTIONS[dir];
                let mut ray = Vec::with_capacity(7);
                let mut cur = sq;
                while let Some(next) = cur.offset(dr, df) {
                    ray.push(next);
                    cur = next;
                }
                ray
            })
        })
        .collect()
});
