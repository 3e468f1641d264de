use crate::{
    algorithm::{bitset::CandidateSet, compatibility},
    spatial::{
        catalog::Catalog,
        grid::{CellState, Grid},
        tiles::TileId,
    },
};

/// Result of scanning the grid for forced cells
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SingletonScan {
    /// The first single-candidate cell was filled with its only tile
    Collapsed {
        /// Grid position that was filled
        position: [usize; 2],
        /// Tile placed there
        tile: TileId,
    },
    /// An empty cell with no candidates was reached first
    Contradiction {
        /// Grid position without candidates
        position: [usize; 2],
    },
    /// Every empty cell has two or more candidates
    NoSingleton,
}

/// Recompute the candidate set of every empty cell from scratch
///
/// Each tile of the catalog is tested in order against the resolved cells.
/// Resolved cells get an empty set. Nothing is cached between steps.
pub fn refresh_candidates(grid: &mut Grid, catalog: &Catalog) {
    let tile_count = catalog.len();
    for [row, col] in grid.positions() {
        let mut set = CandidateSet::new(tile_count);
        if grid.cell(row, col).is_some_and(CellState::is_empty) {
            for tile in 0..tile_count {
                if catalog.admissible(grid, row, col, tile) {
                    set.insert(tile);
                }
            }
        }
        grid.set_candidates(row, col, set);
    }
}

/// Find a resolved cell that conflicts with the rest of the grid
///
/// Only possible when cells were injected directly; solver placements are
/// admissible by construction and both strategies are symmetric.
pub fn find_resolved_conflict(grid: &Grid, catalog: &Catalog) -> Option<[usize; 2]> {
    compatibility::first_conflict(grid, |state, row, col, tile| {
        catalog.admissible(state, row, col, tile)
    })
}

/// Collapse at most one single-candidate cell
///
/// Scans empty cells in row-major order. The scan stops at the first cell
/// with zero candidates (a contradiction) or the first cell with exactly one
/// candidate, which is filled. Candidates must be fresh.
pub fn collapse_first_singleton(grid: &mut Grid) -> SingletonScan {
    let mut found = None;
    for ([row, col], state) in grid.cells() {
        if !state.is_empty() {
            continue;
        }
        let Some(set) = grid.candidates(row, col) else {
            continue;
        };
        if set.is_empty() {
            return SingletonScan::Contradiction {
                position: [row, col],
            };
        }
        if let Some(tile) = set.singleton() {
            found = Some(([row, col], tile));
            break;
        }
    }

    match found {
        Some(([row, col], tile)) if grid.fill(row, col, tile).is_ok() => SingletonScan::Collapsed {
            position: [row, col],
            tile,
        },
        _ => SingletonScan::NoSingleton,
    }
}
