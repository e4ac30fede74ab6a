use alloc::string::String;
use core::fmt;
use serde::{Deserialize, Serialize};

use crate::{Px, SymbolId};

/// Generated per tile at board creation; collision-improbable within a level.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TileId(String);

impl TileId {
    pub fn new(id: String) -> Self {
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lifecycle of a board piece. `Resolved` is terminal within a level.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileStatus {
    OnBoard,
    Queued,
    Resolved,
}

impl TileStatus {
    pub const fn is_on_board(self) -> bool {
        matches!(self, Self::OnBoard)
    }

    pub const fn is_resolved(self) -> bool {
        matches!(self, Self::Resolved)
    }
}

impl Default for TileStatus {
    fn default() -> Self {
        Self::OnBoard
    }
}

/// Single placed instance of a symbol. `covered` is derived state: it is
/// only ever written by [`crate::recompute_coverage`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    pub id: TileId,
    pub status: TileStatus,
    pub x: Px,
    pub y: Px,
    pub covered: bool,
    pub symbol: SymbolId,
}
