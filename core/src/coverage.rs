use crate::*;

/// Recomputes the derived `covered` flag for every tile.
///
/// A tile is covered when its `TILE_SIZE` square hitbox intersects the
/// hitbox of any *later* on-board tile in board order; the scan for a tile
/// stops at its first overlap. Tiles not on the board are never covered.
/// The directional, order-dependent definition is part of the game rules:
/// board order is stable, so the coverage set is deterministic per call.
pub fn recompute_coverage(board: &mut [Tile]) {
    for i in 0..board.len() {
        board[i].covered = false;
        if board[i].status != TileStatus::OnBoard {
            continue;
        }
        let (x1, y1) = (board[i].x, board[i].y);
        let (x2, y2) = (x1 + TILE_SIZE, y1 + TILE_SIZE);

        for j in (i + 1)..board.len() {
            let other = &board[j];
            if other.status != TileStatus::OnBoard {
                continue;
            }
            // Negated disjoint-box test: any intersection counts.
            let (x, y) = (other.x, other.y);
            if !(y + TILE_SIZE <= y1 || y >= y2 || x + TILE_SIZE <= x1 || x >= x2) {
                board[i].covered = true;
                break;
            }
        }
    }
}
