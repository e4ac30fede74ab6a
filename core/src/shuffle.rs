use rand::{Rng, RngExt};

use crate::*;

/// Single-pass reshuffle: each index swaps with a partner drawn from the
/// *full* range, not a shrinking suffix, so the permutation distribution is
/// slightly skewed. Replay compatibility depends on this exact sampling
/// rule; do not swap in Fisher-Yates.
pub(crate) fn fast_shuffle<T, R: Rng>(items: &mut [T], rng: &mut R) {
    let n = items.len();
    if n == 0 {
        return;
    }
    for i in 0..n {
        let j = rng.random_range(0..n);
        items.swap(i, j);
    }
}

/// Reshuffles board order and redraws positions for on-board tiles using the
/// same span/jitter rule as generation. Queued and resolved tiles keep their
/// recorded positions; only their list order changes. The caller is expected
/// to recompute coverage afterwards.
pub fn wash<R: Rng>(level: Level, board: &mut [Tile], rng: &mut R) {
    fast_shuffle(board, rng);
    for tile in board.iter_mut() {
        if tile.status != TileStatus::OnBoard {
            continue;
        }
        let (x, y) = crate::generator::random_spot(level, rng);
        tile.x = x;
        tile.y = y;
        tile.covered = false;
    }
    log::debug!("washed board at level {}", level);
}
