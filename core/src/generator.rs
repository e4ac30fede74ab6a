use alloc::string::String;
use alloc::vec::Vec;
use rand::distr::Alphanumeric;
use rand::{Rng, RngExt};

use crate::*;

/// Occupiable row/column range per level band, half-open `[lo, hi)`.
/// The playable region widens from a centered 4x4 up to the full 8x8 grid.
const SPANS: [(Px, Px); 5] = [(2, 6), (1, 6), (1, 7), (0, 7), (0, 8)];

/// Position jitter steps; higher levels unlock more of the pool.
const JITTER_STEPS: [Px; 5] = [0, 25, -25, 50, -50];

const ID_LEN: usize = 6;

/// Builds a fresh board for `level`. The symbol pool is the first
/// `2 * level` catalog entries; above level 5 the pool front is re-appended
/// once per full 5-level step (up to 10 symbols per step), so higher levels
/// get denser same-symbol boards without a wider distinct-symbol pool.
/// Every pool entry yields exactly [`TILES_PER_SYMBOL`] tiles, so the total
/// is always a multiple of 6 and the board partitions into triples with no
/// remainder.
pub fn generate_board<R: Rng>(level: Level, catalog: &SymbolCatalog, rng: &mut R) -> Vec<Tile> {
    let level = clamp_level(level);
    let want = 2 * usize::from(level);
    let take = want.min(catalog.len());
    if take < want {
        log::warn!(
            "catalog has {} symbols, level {} wants {}; pool truncated",
            catalog.len(),
            level,
            want
        );
    }
    let mut pool: Vec<SymbolId> = (0..take).map(|i| SymbolId(i as u16)).collect();

    let mut step = i32::from(level);
    while step > 0 {
        let extra = (2 * (step - 5)).clamp(0, 10) as usize;
        let dup: Vec<SymbolId> = pool.iter().copied().take(extra).collect();
        pool.extend(dup);
        step -= 5;
    }

    let mut board = Vec::with_capacity(pool.len() * TILES_PER_SYMBOL);
    for symbol in pool {
        for _ in 0..TILES_PER_SYMBOL {
            let (x, y) = random_spot(level, rng);
            board.push(Tile {
                id: random_id(rng),
                status: TileStatus::OnBoard,
                x,
                y,
                covered: false,
                symbol,
            });
        }
    }
    log::debug!("generated level {} board with {} tiles", level, board.len());
    board
}

/// Draws a cell position plus jitter for `level`. One jitter draw is applied
/// to both axes. Draw order (jitter, row, column) is fixed; replays depend
/// on it.
pub(crate) fn random_spot<R: Rng>(level: Level, rng: &mut R) -> (Px, Px) {
    let level = clamp_level(level);
    let steps = &JITTER_STEPS[..JITTER_STEPS.len().min(1 + usize::from(level))];
    let (lo, hi) = SPANS[usize::min(4, usize::from(level) - 1)];

    let jitter = steps[rng.random_range(0..steps.len())];
    let row = rng.random_range(lo..hi);
    let col = rng.random_range(lo..hi);
    (col * TILE_SIZE + jitter, row * TILE_SIZE + jitter)
}

pub(crate) fn random_id<R: Rng>(rng: &mut R) -> TileId {
    let id: String = (&mut *rng)
        .sample_iter(Alphanumeric)
        .take(ID_LEN)
        .map(char::from)
        .collect();
    TileId::new(id)
}
