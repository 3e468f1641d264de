use crate::spatial::tiles::TileId;
use bitvec::prelude::*;
use std::fmt;

/// Fixed-size bitset holding the admissible tiles of one cell
///
/// Uses the 0-based tile ids of the active catalog. Iteration always yields
/// ids in catalog order, so random selection over `to_vec()` is reproducible
/// for a given seed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CandidateSet {
    bits: BitVec,
    max_tiles: usize,
}

impl CandidateSet {
    /// Create a set with no tiles present
    pub fn new(max_tiles: usize) -> Self {
        Self {
            bits: bitvec![0; max_tiles],
            max_tiles,
        }
    }

    /// Insert a tile id, ignoring ids outside the catalog
    pub fn insert(&mut self, tile: TileId) {
        if tile < self.max_tiles {
            self.bits.set(tile, true);
        }
    }

    /// Test tile membership
    pub fn contains(&self, tile: TileId) -> bool {
        self.bits.get(tile).as_deref() == Some(&true)
    }

    /// Remove every tile from the set
    pub fn clear(&mut self) {
        self.bits.fill(false);
    }

    /// Test if no tiles are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count tiles in the set (the cell's entropy)
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Single remaining tile, if the set is a singleton
    pub fn singleton(&self) -> Option<TileId> {
        let mut ones = self.iter();
        match (ones.next(), ones.next()) {
            (Some(tile), None) => Some(tile),
            _ => None,
        }
    }

    /// Iterate tile ids in catalog order
    pub fn iter(&self) -> impl Iterator<Item = TileId> + '_ {
        self.bits.iter_ones()
    }

    /// Extract all tile ids as a vector in catalog order
    pub fn to_vec(&self) -> Vec<TileId> {
        self.iter().collect()
    }
}

impl fmt::Display for CandidateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CandidateSet({} tiles: {:?})", self.count(), self.to_vec())
    }
}
