//! Prefill parsing for cells placed before the solver starts
//!
//! A prefill is a text grid, one line per row. When every label of the
//! catalog is a single character each non-whitespace character is a cell
//! (`53..7....` for sudoku); otherwise cells are whitespace-separated labels
//! such as `blank up@90 .`. The empty-cell marker leaves a cell unresolved.
//! Blank lines and lines starting with `#` are ignored.

use crate::algorithm::executor::Solver;
use crate::io::configuration::EMPTY_CELL_MARKER;
use crate::io::error::{Result, SolverError, invalid_prefill};
use crate::spatial::catalog::Catalog;
use crate::spatial::tiles::TileId;
use std::path::Path;

/// Single tile placement instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefillPlacement {
    /// Grid coordinates (row, col)
    pub position: [usize; 2],
    /// Tile id in the catalog the prefill was parsed against
    pub tile: TileId,
}

/// Parsed prefill grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefillData {
    /// Placements in row-major order
    pub placements: Vec<PrefillPlacement>,
    /// Extent of the text grid (rows, cols)
    pub dimensions: (usize, usize),
}

impl PrefillData {
    /// Parse prefill text against a catalog's labels
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The text contains no rows
    /// - Rows have different lengths
    /// - A token is neither the empty marker nor a catalog label
    pub fn parse(text: &str, catalog: &Catalog) -> Result<Self> {
        let single_char = catalog.has_single_char_labels();

        let rows: Vec<Vec<String>> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(|line| tokenize(line, single_char))
            .collect();

        let Some(first) = rows.first() else {
            return Err(invalid_prefill(&"prefill contains no rows"));
        };
        let cols = first.len();

        let mut placements = Vec::new();
        for (row, tokens) in rows.iter().enumerate() {
            if tokens.len() != cols {
                return Err(invalid_prefill(&format!(
                    "row {row} has {} cells, expected {cols}",
                    tokens.len()
                )));
            }
            for (col, token) in tokens.iter().enumerate() {
                if token == EMPTY_CELL_MARKER {
                    continue;
                }
                let tile = catalog.find_label(token).ok_or_else(|| {
                    invalid_prefill(&format!(
                        "'{token}' at ({row}, {col}) is not a label of catalog '{}'",
                        catalog.name()
                    ))
                })?;
                placements.push(PrefillPlacement {
                    position: [row, col],
                    tile,
                });
            }
        }

        Ok(Self {
            placements,
            dimensions: (rows.len(), cols),
        })
    }

    /// Read and parse a prefill file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or its content is invalid
    pub fn from_path(path: &Path, catalog: &Catalog) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| SolverError::FileSystem {
            path: path.to_path_buf(),
            operation: "read prefill",
            source: e,
        })?;
        Self::parse(&text, catalog)
    }

    /// Number of cells the prefill resolves
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    /// Test if the prefill resolves no cells
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Place every prefilled tile on the solver's grid
    ///
    /// # Errors
    ///
    /// Returns an error if a placement lies outside the solver's grid
    pub fn apply(&self, solver: &mut Solver) -> Result<()> {
        self.placements.iter().try_for_each(|placement| {
            let [row, col] = placement.position;
            solver.preset(row, col, placement.tile)
        })
    }
}

fn tokenize(line: &str, single_char: bool) -> Vec<String> {
    if single_char {
        line.chars()
            .filter(|c| !c.is_whitespace())
            .map(String::from)
            .collect()
    } else {
        line.split_whitespace().map(str::to_string).collect()
    }
}
