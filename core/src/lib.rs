#![no_std]

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

pub use coverage::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use shuffle::*;
pub use tile::*;
pub use types::*;

mod coverage;
mod engine;
mod error;
mod generator;
mod shuffle;
mod tile;
mod types;

/// Matchable kind definition, owned by the active theme and referenced by
/// tiles through [`SymbolId`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Symbol {
    pub name: String,
    /// Display payload, opaque to the engine (emoji, image url, ...).
    pub glyph: String,
    pub click_sound: String,
    pub triple_sound: String,
}

/// Index into the catalog the board was generated from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolId(pub u16);

/// Ordered set of symbols available for board generation. Catalog order is
/// load-bearing: the generator takes its symbol pool from the front.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SymbolCatalog(Vec<Symbol>);

impl SymbolCatalog {
    pub fn new(symbols: Vec<Symbol>) -> Self {
        Self(symbols)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, id: SymbolId) -> Option<&Symbol> {
        self.0.get(usize::from(id.0))
    }

    pub fn iter(&self) -> impl Iterator<Item = (SymbolId, &Symbol)> {
        self.0
            .iter()
            .enumerate()
            .map(|(i, symbol)| (SymbolId(i as u16), symbol))
    }
}

impl From<Vec<Symbol>> for SymbolCatalog {
    fn from(symbols: Vec<Symbol>) -> Self {
        Self::new(symbols)
    }
}
