//! Admissibility checks for the built-in constraint strategies
//!
//! Each check looks only at resolved cells and ignores the cell under test,
//! so the same predicate both builds candidate sets for empty cells and
//! re-validates tiles that are already placed.

use crate::spatial::grid::Grid;
use crate::spatial::tiles::{Direction, TileDefinition, TileId};

/// Test a candidate against the socket codes of its resolved neighbours
///
/// Sides facing an empty cell or the grid border impose no constraint.
/// A candidate without sockets, or outside the tile list, is never admissible.
pub fn edge_sockets_admissible(
    tiles: &[TileDefinition],
    grid: &Grid,
    row: usize,
    col: usize,
    candidate: TileId,
) -> bool {
    let Some(candidate_sockets) = tiles.get(candidate).and_then(|tile| tile.sockets.as_ref())
    else {
        return false;
    };

    let dimensions = grid.dimensions();
    Direction::ALL.iter().all(|&direction| {
        let Some([n_row, n_col]) = direction.step(row, col, dimensions) else {
            return true;
        };
        let Some(neighbour) = grid.tile_at(n_row, n_col) else {
            return true;
        };
        tiles
            .get(neighbour)
            .and_then(|tile| tile.sockets.as_ref())
            .is_some_and(|neighbour_sockets| {
                candidate_sockets
                    .side(direction)
                    .matches(neighbour_sockets.side(direction.opposite()))
            })
    })
}

/// Test a value against its row, column and square block
///
/// The block containing `(row, col)` is `(row / block_size, col / block_size)`.
pub fn uniqueness_admissible(
    grid: &Grid,
    row: usize,
    col: usize,
    value: TileId,
    block_size: usize,
) -> bool {
    let holds_value = |r: usize, c: usize| (r, c) != (row, col) && grid.tile_at(r, c) == Some(value);

    if (0..grid.cols()).any(|c| holds_value(row, c)) {
        return false;
    }
    if (0..grid.rows()).any(|r| holds_value(r, col)) {
        return false;
    }
    if block_size == 0 {
        return true;
    }

    let block_row = (row / block_size) * block_size;
    let block_col = (col / block_size) * block_size;
    !(block_row..block_row + block_size)
        .any(|r| (block_col..block_col + block_size).any(|c| holds_value(r, c)))
}

/// Conflicting resolved cells, if any
///
/// Returns the first placed tile (row-major) that is no longer admissible
/// against the other resolved cells. Tiles placed by the solver always pass;
/// only directly injected cells can conflict.
pub fn first_conflict<F>(grid: &Grid, admissible: F) -> Option<[usize; 2]>
where
    F: Fn(&Grid, usize, usize, TileId) -> bool,
{
    grid.cells().find_map(|([row, col], state)| {
        state
            .tile()
            .filter(|&tile| !admissible(grid, row, col, tile))
            .map(|_| [row, col])
    })
}
