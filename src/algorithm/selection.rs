use crate::{
    algorithm::bitset::CandidateSet,
    io::configuration::TILE_STREAM_SEED_OFFSET,
    spatial::{grid::Grid, tiles::TileId},
};
use rand::{Rng, SeedableRng, rngs::StdRng, seq::IndexedRandom};

/// Outcome of the minimum-entropy scan over empty cells
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EntropyScan {
    /// An empty cell has no admissible tile
    Contradiction {
        /// Grid position without candidates
        position: [usize; 2],
    },
    /// Cells sharing the lowest candidate count, in row-major order
    Ties {
        /// Candidate count shared by every tied cell
        entropy: usize,
        /// Positions of the tied cells
        cells: Vec<[usize; 2]>,
    },
    /// No empty cell is left
    NoEmptyCells,
}

/// Collect the empty cells with the fewest candidates
///
/// Entropy is the plain candidate count. The scan stops at the first empty
/// cell without candidates. Candidates must be fresh.
pub fn lowest_entropy_cells(grid: &Grid) -> EntropyScan {
    let mut lowest = usize::MAX;
    let mut cells = Vec::new();

    for ([row, col], state) in grid.cells() {
        if !state.is_empty() {
            continue;
        }
        let entropy = grid.candidates(row, col).map_or(0, CandidateSet::count);
        if entropy == 0 {
            return EntropyScan::Contradiction {
                position: [row, col],
            };
        }
        if entropy < lowest {
            lowest = entropy;
            cells.clear();
            cells.push([row, col]);
        } else if entropy == lowest {
            cells.push([row, col]);
        }
    }

    if cells.is_empty() {
        EntropyScan::NoEmptyCells
    } else {
        EntropyScan::Ties {
            entropy: lowest,
            cells,
        }
    }
}

/// Seeded random selector for reproducible stochastic choices
///
/// Cell and tile choices draw from two independent streams so either can be
/// pinned on its own when testing.
#[derive(Clone, Debug)]
pub struct RandomSelector {
    cell_rng: StdRng,
    tile_rng: StdRng,
}

impl RandomSelector {
    /// Create a selector from one run seed
    ///
    /// The tile stream is seeded with a fixed offset from the cell stream.
    pub fn new(seed: u64) -> Self {
        Self::with_seeds(seed, seed.wrapping_add(TILE_STREAM_SEED_OFFSET))
    }

    /// Create a selector with explicit seeds for each stream
    pub fn with_seeds(cell_seed: u64, tile_seed: u64) -> Self {
        Self {
            cell_rng: StdRng::seed_from_u64(cell_seed),
            tile_rng: StdRng::seed_from_u64(tile_seed),
        }
    }

    /// Uniformly pick one cell from a tie set
    pub fn choose_cell(&mut self, cells: &[[usize; 2]]) -> Option<[usize; 2]> {
        cells.choose(&mut self.cell_rng).copied()
    }

    /// Uniformly pick one tile from a candidate list
    pub fn choose_tile(&mut self, tiles: &[TileId]) -> Option<TileId> {
        tiles.choose(&mut self.tile_rng).copied()
    }

    /// Uniformly remove one tile from a list, keeping the others in order
    pub fn take_tile(&mut self, tiles: &mut Vec<TileId>) -> Option<TileId> {
        if tiles.is_empty() {
            return None;
        }
        let index = self.tile_rng.random_range(0..tiles.len());
        Some(tiles.remove(index))
    }
}
