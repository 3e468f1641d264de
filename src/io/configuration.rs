//! Solver constants and runtime configuration defaults

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 1_000;

/// Default grid side length for edge-socket catalogs
pub const DEFAULT_GRID_SIZE: usize = 16;

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Added to the run seed to derive the tile selection stream
pub const TILE_STREAM_SEED_OFFSET: u64 = 0x9E37_79B9_7F4A_7C15;

/// Default maximum steps per attempt before giving up
pub const DEFAULT_MAX_STEPS: usize = 1_000_000;

/// Default number of attempts (each with a fresh seed)
pub const DEFAULT_ATTEMPTS: usize = 1;

// Prefill and report text format
/// Marker for an unresolved cell in prefill input and printed grids
pub const EMPTY_CELL_MARKER: &str = ".";

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
/// Number of steps between progress bar refreshes
pub const PROGRESS_REFRESH_STEPS: usize = 16;
