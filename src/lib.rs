//! Wave function collapse solver with chronological backtracking
//!
//! Fills a two-dimensional grid with tiles so that every pair of neighbouring
//! cells satisfies the catalog's compatibility rule. Each step refreshes the
//! candidates of every empty cell, collapses a single-candidate cell or a
//! random lowest-entropy cell, and backtracks through earlier random choices
//! when a cell runs out of candidates.

#![forbid(unsafe_code)]

/// Solver state machine, propagation, selection and backtracking
pub mod algorithm;
/// Command-line driver, configuration and error handling
pub mod io;
/// Grid, tile and catalog data structures
pub mod spatial;

pub use algorithm::executor::{Solver, SolverStats, StepOutcome};
pub use io::error::{Result, SolverError};
