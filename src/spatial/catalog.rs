//! Constraint catalogs: the tile universe and its admissibility rule
//!
//! A catalog is built once before a run and never changes afterwards. The
//! constraint strategy is fixed at construction, so the solver never needs
//! to know which kind of catalog it is working with.

use crate::algorithm::compatibility;
use crate::io::error::{Result, SolverError, invalid_catalog};
use crate::spatial::grid::Grid;
use crate::spatial::tiles::{EdgeSockets, TileDefinition, TileId, expand_rotations};

/// Admissibility rule attached to a catalog
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Constraint {
    /// Facing edges must carry mirrored socket codes
    EdgeSockets,
    /// No repeated value within a row, column or square block
    Uniqueness {
        /// Side length of the square blocks
        block_size: usize,
    },
}

/// Immutable tile universe plus the rule deciding which tiles may be placed
#[derive(Clone, Debug)]
pub struct Catalog {
    name: String,
    tiles: Vec<TileDefinition>,
    constraint: Constraint,
}

impl Catalog {
    /// Build an edge-matching catalog
    ///
    /// # Errors
    ///
    /// Returns an error if the tile list is empty or any tile lacks sockets
    pub fn edge_matching(name: &str, tiles: Vec<TileDefinition>) -> Result<Self> {
        if tiles.is_empty() {
            return Err(SolverError::EmptyCatalog {
                name: name.to_string(),
            });
        }
        if let Some(tile) = tiles.iter().find(|tile| tile.sockets.is_none()) {
            return Err(invalid_catalog(
                name,
                &format!("tile '{}' has no edge sockets", tile.label),
            ));
        }

        Ok(Self {
            name: name.to_string(),
            tiles,
            constraint: Constraint::EdgeSockets,
        })
    }

    /// Build an edge-matching catalog, adding rotated variants of asymmetric tiles
    ///
    /// # Errors
    ///
    /// Returns an error if the tile list is empty or any tile lacks sockets
    pub fn edge_matching_with_rotations(name: &str, tiles: Vec<TileDefinition>) -> Result<Self> {
        Self::edge_matching(name, expand_rotations(tiles))
    }

    /// Build a uniqueness catalog whose values are labelled in order
    ///
    /// The block size is the square root of the number of labels.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no labels or their count is not a
    /// perfect square
    pub fn uniqueness(name: &str, labels: &[&str]) -> Result<Self> {
        if labels.is_empty() {
            return Err(SolverError::EmptyCatalog {
                name: name.to_string(),
            });
        }
        let block_size = labels.len().isqrt();
        if block_size * block_size != labels.len() {
            return Err(invalid_catalog(
                name,
                &format!(
                    "uniqueness catalogs need a square number of values, got {}",
                    labels.len()
                ),
            ));
        }

        Ok(Self {
            name: name.to_string(),
            tiles: labels.iter().map(|label| TileDefinition::value(label)).collect(),
            constraint: Constraint::Uniqueness { block_size },
        })
    }

    /// Catalog name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ordered tile definitions
    pub fn tiles(&self) -> &[TileDefinition] {
        &self.tiles
    }

    /// Tile definition for an id
    pub fn tile(&self, id: TileId) -> Option<&TileDefinition> {
        self.tiles.get(id)
    }

    /// Number of tiles
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Test if the catalog has no tiles
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Active constraint strategy
    pub const fn constraint(&self) -> Constraint {
        self.constraint
    }

    /// Find the tile with the given display name
    ///
    /// Accepts both the base label and rotated names such as `up@90`.
    pub fn find_label(&self, label: &str) -> Option<TileId> {
        self.tiles
            .iter()
            .position(|tile| tile.display_name() == label)
    }

    /// Test if every display name is a single character
    pub fn has_single_char_labels(&self) -> bool {
        self.tiles
            .iter()
            .all(|tile| tile.display_name().chars().count() == 1)
    }

    /// Decide whether `candidate` may be placed at `(row, col)`
    ///
    /// Only resolved cells other than `(row, col)` itself are considered.
    pub fn admissible(&self, grid: &Grid, row: usize, col: usize, candidate: TileId) -> bool {
        match self.constraint {
            Constraint::EdgeSockets => {
                compatibility::edge_sockets_admissible(&self.tiles, grid, row, col, candidate)
            }
            Constraint::Uniqueness { block_size } => {
                compatibility::uniqueness_admissible(grid, row, col, candidate, block_size)
            }
        }
    }
}

/// Built-in catalogs selectable by name
pub mod builtin {
    use super::{Catalog, EdgeSockets, TileDefinition};
    use crate::io::error::{Result, SolverError};

    const EDGE_BLANK: &str = "0";
    const EDGE_WIRE: &str = "1";

    // Asymmetric codes only pair with their reverse, so "200" meets "002"
    const CIRCUIT_SUBSTRATE: &str = "000";
    const CIRCUIT_COMPONENT: &str = "111";
    const CIRCUIT_CORNER_LEFT: &str = "200";
    const CIRCUIT_CORNER_DOWN: &str = "002";
    const CIRCUIT_CONNECTION_RIGHT: &str = "002";
    const CIRCUIT_CONNECTION_LEFT: &str = "200";
    const CIRCUIT_GREEN_TRACK: &str = "444";
    const CIRCUIT_GREY_WIRE: &str = "555";

    /// Names accepted by [`by_name`]
    pub const NAMES: [&str; 4] = ["basic", "circuit", "sudoku", "hexdoku"];

    /// Blank, T-junction and cross wire tiles with rotations
    ///
    /// # Errors
    ///
    /// Never fails for the built-in definitions; the signature mirrors the
    /// catalog constructors
    pub fn basic() -> Result<Catalog> {
        let tile = |label: &str, n, e, s, w| {
            TileDefinition::with_sockets(label, EdgeSockets::new(n, e, s, w))
        };
        Catalog::edge_matching_with_rotations(
            "basic",
            vec![
                tile("blank", EDGE_BLANK, EDGE_BLANK, EDGE_BLANK, EDGE_BLANK),
                tile("up", EDGE_WIRE, EDGE_WIRE, EDGE_BLANK, EDGE_WIRE),
                tile("plus", EDGE_WIRE, EDGE_WIRE, EDGE_WIRE, EDGE_WIRE),
            ],
        )
    }

    /// Circuit board tiles with three-symbol socket codes and rotations
    ///
    /// # Errors
    ///
    /// Never fails for the built-in definitions; the signature mirrors the
    /// catalog constructors
    pub fn circuit() -> Result<Catalog> {
        let tile = |label: &str, n, e, s, w| {
            TileDefinition::with_sockets(label, EdgeSockets::new(n, e, s, w))
        };
        Catalog::edge_matching_with_rotations(
            "circuit",
            vec![
                tile(
                    "bridge",
                    CIRCUIT_GREEN_TRACK,
                    CIRCUIT_GREY_WIRE,
                    CIRCUIT_GREEN_TRACK,
                    CIRCUIT_GREY_WIRE,
                ),
                tile(
                    "component",
                    CIRCUIT_COMPONENT,
                    CIRCUIT_COMPONENT,
                    CIRCUIT_COMPONENT,
                    CIRCUIT_COMPONENT,
                ),
                tile(
                    "connection",
                    CIRCUIT_GREEN_TRACK,
                    CIRCUIT_CONNECTION_RIGHT,
                    CIRCUIT_COMPONENT,
                    CIRCUIT_CONNECTION_LEFT,
                ),
                tile(
                    "corner",
                    CIRCUIT_SUBSTRATE,
                    CIRCUIT_SUBSTRATE,
                    CIRCUIT_CORNER_DOWN,
                    CIRCUIT_CORNER_LEFT,
                ),
                tile(
                    "dskew",
                    CIRCUIT_GREEN_TRACK,
                    CIRCUIT_GREEN_TRACK,
                    CIRCUIT_GREEN_TRACK,
                    CIRCUIT_GREEN_TRACK,
                ),
                tile(
                    "skew",
                    CIRCUIT_GREEN_TRACK,
                    CIRCUIT_GREEN_TRACK,
                    CIRCUIT_SUBSTRATE,
                    CIRCUIT_SUBSTRATE,
                ),
                tile(
                    "substrate",
                    CIRCUIT_SUBSTRATE,
                    CIRCUIT_SUBSTRATE,
                    CIRCUIT_SUBSTRATE,
                    CIRCUIT_SUBSTRATE,
                ),
                tile(
                    "t",
                    CIRCUIT_SUBSTRATE,
                    CIRCUIT_GREEN_TRACK,
                    CIRCUIT_GREEN_TRACK,
                    CIRCUIT_GREEN_TRACK,
                ),
                tile(
                    "track",
                    CIRCUIT_GREEN_TRACK,
                    CIRCUIT_SUBSTRATE,
                    CIRCUIT_GREEN_TRACK,
                    CIRCUIT_SUBSTRATE,
                ),
                tile(
                    "transition",
                    CIRCUIT_GREY_WIRE,
                    CIRCUIT_SUBSTRATE,
                    CIRCUIT_GREEN_TRACK,
                    CIRCUIT_SUBSTRATE,
                ),
                tile(
                    "turn",
                    CIRCUIT_GREEN_TRACK,
                    CIRCUIT_GREEN_TRACK,
                    CIRCUIT_SUBSTRATE,
                    CIRCUIT_SUBSTRATE,
                ),
                tile(
                    "viad",
                    CIRCUIT_SUBSTRATE,
                    CIRCUIT_GREEN_TRACK,
                    CIRCUIT_SUBSTRATE,
                    CIRCUIT_GREEN_TRACK,
                ),
                tile(
                    "vias",
                    CIRCUIT_GREEN_TRACK,
                    CIRCUIT_SUBSTRATE,
                    CIRCUIT_SUBSTRATE,
                    CIRCUIT_SUBSTRATE,
                ),
                tile(
                    "wire",
                    CIRCUIT_SUBSTRATE,
                    CIRCUIT_GREY_WIRE,
                    CIRCUIT_SUBSTRATE,
                    CIRCUIT_GREY_WIRE,
                ),
            ],
        )
    }

    /// Digits 1-9 under row, column and 3x3 box uniqueness
    ///
    /// # Errors
    ///
    /// Never fails for the built-in definitions; the signature mirrors the
    /// catalog constructors
    pub fn sudoku() -> Result<Catalog> {
        Catalog::uniqueness("sudoku", &["1", "2", "3", "4", "5", "6", "7", "8", "9"])
    }

    /// Hex digits 0-F under row, column and 4x4 box uniqueness
    ///
    /// # Errors
    ///
    /// Never fails for the built-in definitions; the signature mirrors the
    /// catalog constructors
    pub fn hexdoku() -> Result<Catalog> {
        Catalog::uniqueness(
            "hexdoku",
            &[
                "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", "A", "B", "C", "D", "E", "F",
            ],
        )
    }

    /// Look up a built-in catalog
    ///
    /// # Errors
    ///
    /// Returns an error if no catalog is registered under `name`
    pub fn by_name(name: &str) -> Result<Catalog> {
        match name {
            "basic" => basic(),
            "circuit" => circuit(),
            "sudoku" => sudoku(),
            "hexdoku" => hexdoku(),
            _ => Err(SolverError::UnknownCatalog {
                name: name.to_string(),
            }),
        }
    }
}
