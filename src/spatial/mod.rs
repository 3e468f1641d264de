//! Spatial data structures and the tile universe
//!
//! This module contains spatial-related functionality including:
//! - Grid cell states, candidate planes and snapshots
//! - Tile definitions, socket codes and rotations
//! - Constraint catalogs and the built-in tilesets

/// Constraint catalogs and built-in tilesets
pub mod catalog;
/// Grid state management and snapshots
pub mod grid;
/// Tile definitions, socket codes and rotation variants
pub mod tiles;

pub use catalog::Catalog;
pub use grid::{CellState, Grid};
