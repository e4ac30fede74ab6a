/// Difficulty level, clamped to `[1, MAX_LEVEL]` everywhere it is consumed.
pub type Level = u8;

/// Layout coordinate unit; one grid cell is `TILE_SIZE` units wide.
pub type Px = i32;

pub const MAX_LEVEL: Level = 20;

/// Side length of a tile hitbox and of one grid cell.
pub const TILE_SIZE: Px = 100;

/// The board grid is at most 8x8 cells; the occupiable sub-region widens
/// with the level (see [`crate::generate_board`]).
pub const GRID_CELLS: Px = 8;

/// Row tiles are parked in when popped out of the queue.
pub const DISCARD_ROW: Px = 7;

/// Queue capacity; reaching it without a completing triple loses the game.
pub const QUEUE_CAP: usize = 7;

/// Tiles created per symbol pool entry, so boards always partition into
/// triples with no remainder.
pub const TILES_PER_SYMBOL: usize = 6;

/// Duration of the post-click settling window. Purely presentational pacing;
/// the engine rejects any action arriving between `click` and `settle`.
pub const SETTLE_MILLIS: u64 = 150;

/// X coordinate of the first queue display slot.
pub const QUEUE_ORIGIN_X: Px = 50;

pub(crate) fn clamp_level(level: Level) -> Level {
    level.clamp(1, MAX_LEVEL)
}
