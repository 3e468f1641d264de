//! Grid state: resolved cells plus the per-cell candidate plane
//!
//! Cell states and candidate sets live in two parallel `rows × cols` arrays.
//! Only the cell array is part of a snapshot; candidates are derived data and
//! are rebuilt by propagation before every use.

use ndarray::Array2;

use crate::algorithm::bitset::CandidateSet;
use crate::io::error::{Result, SolverError};
use crate::spatial::tiles::TileId;

/// Resolution state of a single cell
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellState {
    /// No tile assigned yet
    #[default]
    Empty,
    /// Cell collapsed to a tile
    Filled(TileId),
}

impl CellState {
    /// Tile held by the cell, if resolved
    pub const fn tile(self) -> Option<TileId> {
        match self {
            Self::Empty => None,
            Self::Filled(tile) => Some(tile),
        }
    }

    /// Test if the cell is still unresolved
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// Deep copy of every cell state at one point of the search
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridSnapshot {
    cells: Array2<CellState>,
}

impl GridSnapshot {
    /// Dimensions of the grid the snapshot was taken from
    pub fn dimensions(&self) -> (usize, usize) {
        self.cells.dim()
    }
}

/// Fixed-size board of cell states and candidate sets
///
/// Dimensions are set once per run. Cells are addressed as `(row, col)`
/// with `(0, 0)` in the north-west corner.
#[derive(Clone, Debug)]
pub struct Grid {
    /// Resolution state of every cell
    cells: Array2<CellState>,

    /// Admissible tiles per cell, valid only for empty cells after propagation
    candidates: Array2<CandidateSet>,

    /// Number of tiles in the active catalog
    tile_count: usize,
}

impl Grid {
    /// Create an empty grid for a catalog of `tile_count` tiles
    pub fn new(rows: usize, cols: usize, tile_count: usize) -> Self {
        Self {
            cells: Array2::from_elem((rows, cols), CellState::Empty),
            candidates: Array2::from_elem((rows, cols), CandidateSet::new(tile_count)),
            tile_count,
        }
    }

    /// Reinitialise all cells to empty and clear every candidate set
    pub fn reset(&mut self, rows: usize, cols: usize) {
        *self = Self::new(rows, cols, self.tile_count);
    }

    /// Get the number of rows in the grid
    pub fn rows(&self) -> usize {
        self.cells.dim().0
    }

    /// Get the number of columns in the grid
    pub fn cols(&self) -> usize {
        self.cells.dim().1
    }

    /// Current grid dimensions (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        self.cells.dim()
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Test if the grid has no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cell state at a position, `None` outside the grid
    pub fn cell(&self, row: usize, col: usize) -> Option<CellState> {
        self.cells.get([row, col]).copied()
    }

    /// Tile at a position, `None` when empty or outside the grid
    pub fn tile_at(&self, row: usize, col: usize) -> Option<TileId> {
        self.cell(row, col).and_then(CellState::tile)
    }

    /// Candidate set of a position, `None` outside the grid
    pub fn candidates(&self, row: usize, col: usize) -> Option<&CandidateSet> {
        self.candidates.get([row, col])
    }

    /// Replace the candidate set of a position
    pub fn set_candidates(&mut self, row: usize, col: usize, set: CandidateSet) {
        if let Some(slot) = self.candidates.get_mut([row, col]) {
            *slot = set;
        }
    }

    /// Collapse a cell to a tile
    ///
    /// # Errors
    ///
    /// Returns an error if the position is outside the grid or the tile id
    /// is not part of the catalog
    pub fn fill(&mut self, row: usize, col: usize, tile: TileId) -> Result<()> {
        if tile >= self.tile_count {
            return Err(SolverError::InvalidTileIndex {
                index: tile,
                max_tiles: self.tile_count,
            });
        }
        let dimensions = self.dimensions();
        let cell = self
            .cells
            .get_mut([row, col])
            .ok_or(SolverError::PositionOutOfBounds {
                position: [row, col],
                grid_dimensions: dimensions,
            })?;
        *cell = CellState::Filled(tile);
        if let Some(set) = self.candidates.get_mut([row, col]) {
            set.clear();
        }
        Ok(())
    }

    /// Test if every cell holds a tile
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Number of resolved cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Positions of every cell in row-major order
    pub fn positions(&self) -> impl Iterator<Item = [usize; 2]> + use<> {
        let (rows, cols) = self.dimensions();
        (0..rows).flat_map(move |row| (0..cols).map(move |col| [row, col]))
    }

    /// Iterate `(position, state)` pairs in row-major order
    pub fn cells(&self) -> impl Iterator<Item = ([usize; 2], CellState)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((row, col), &state)| ([row, col], state))
    }

    /// Copy the cell states, leaving candidates behind
    pub fn snapshot(&self) -> GridSnapshot {
        GridSnapshot {
            cells: self.cells.clone(),
        }
    }

    /// Replace all cell states from a prior snapshot
    ///
    /// Candidate sets are stale afterwards and must be recomputed before use.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot was taken from a grid of different size
    pub fn restore(&mut self, snapshot: &GridSnapshot) -> Result<()> {
        if snapshot.dimensions() != self.dimensions() {
            let (rows, cols) = snapshot.dimensions();
            return Err(SolverError::InvalidDimensions {
                rows,
                cols,
                reason: "snapshot does not match grid dimensions",
            });
        }
        self.cells.assign(&snapshot.cells);
        Ok(())
    }
}
