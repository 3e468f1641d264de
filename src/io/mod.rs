//! Input/output surface around the solver core

/// Command-line driver
pub mod cli;
/// Default values and limits
pub mod configuration;
/// Error types
pub mod error;
/// Logger initialisation
pub mod logging;
/// Parsing of preset cells
pub mod prefill;
/// Terminal progress display
pub mod progress;
/// Text output of grids and run summaries
pub mod report;
