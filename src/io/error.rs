//! Error types for solver configuration and catalog construction

use std::fmt;
use std::path::PathBuf;

/// Main error type for all solver operations
///
/// Contradictions found while stepping are never reported through this type;
/// they are recovered by backtracking or surface as an unsolvable outcome.
#[derive(Debug)]
pub enum SolverError {
    /// Grid dimensions rejected at configuration time
    InvalidDimensions {
        /// Requested number of rows
        rows: usize,
        /// Requested number of columns
        cols: usize,
        /// Explanation of why the dimensions are invalid
        reason: &'static str,
    },

    /// Catalog contains no tile definitions
    EmptyCatalog {
        /// Name of the offending catalog
        name: String,
    },

    /// Catalog definitions are inconsistent with its constraint strategy
    InvalidCatalog {
        /// Name of the offending catalog
        name: String,
        /// Description of what's wrong with the catalog
        reason: String,
    },

    /// No built-in catalog is registered under the requested name
    UnknownCatalog {
        /// Requested catalog name
        name: String,
    },

    /// Tile index exceeds the active catalog
    InvalidTileIndex {
        /// The invalid tile index
        index: usize,
        /// Number of tiles in the catalog
        max_tiles: usize,
    },

    /// Cell coordinates fall outside the grid
    PositionOutOfBounds {
        /// Requested (row, col)
        position: [usize; 2],
        /// Current grid dimensions (rows, cols)
        grid_dimensions: (usize, usize),
    },

    /// Prefill text could not be mapped onto the grid
    InvalidPrefill {
        /// Description of the problem, including the offending token
        reason: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Every attempt of a run ended without a complete grid
    NoSolution {
        /// Catalog that was being solved
        catalog: String,
        /// Number of attempts made
        attempts: usize,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { rows, cols, reason } => {
                write!(f, "Invalid grid dimensions {rows}x{cols}: {reason}")
            }
            Self::EmptyCatalog { name } => {
                write!(f, "Catalog '{name}' contains no tiles")
            }
            Self::InvalidCatalog { name, reason } => {
                write!(f, "Invalid catalog '{name}': {reason}")
            }
            Self::UnknownCatalog { name } => {
                write!(f, "Unknown catalog '{name}'")
            }
            Self::InvalidTileIndex { index, max_tiles } => {
                write!(f, "Tile index {index} is out of bounds (max: {max_tiles})")
            }
            Self::PositionOutOfBounds {
                position,
                grid_dimensions,
            } => {
                write!(
                    f,
                    "Position ({}, {}) is outside the grid (grid size {}x{})",
                    position[0], position[1], grid_dimensions.0, grid_dimensions.1
                )
            }
            Self::InvalidPrefill { reason } => {
                write!(f, "Invalid prefill: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::NoSolution { catalog, attempts } => {
                write!(
                    f,
                    "No complete grid found for catalog '{catalog}' after {attempts} attempt(s)"
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for SolverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for solver results
pub type Result<T> = std::result::Result<T, SolverError>;

impl From<std::io::Error> for SolverError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> SolverError {
    SolverError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid catalog error
pub fn invalid_catalog(name: &str, reason: &impl ToString) -> SolverError {
    SolverError::InvalidCatalog {
        name: name.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid prefill error
pub fn invalid_prefill(reason: &impl ToString) -> SolverError {
    SolverError::InvalidPrefill {
        reason: reason.to_string(),
    }
}
