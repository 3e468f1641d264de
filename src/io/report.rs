//! Text output of solved grids and run summaries

use crate::algorithm::executor::{Solver, StepOutcome};
use crate::io::configuration::EMPTY_CELL_MARKER;
use crate::spatial::catalog::Catalog;
use crate::spatial::grid::Grid;
use crate::spatial::tiles::TileDefinition;

/// Render a grid as text, one row per line
///
/// Cells hold the tile's display name, or the empty marker, left-aligned to
/// the widest name and separated by single spaces. The output is valid
/// prefill input for the same catalog.
pub fn format_grid(grid: &Grid, catalog: &Catalog) -> String {
    let name_of = |row: usize, col: usize| {
        grid.tile_at(row, col)
            .and_then(|tile| catalog.tile(tile))
            .map_or_else(|| EMPTY_CELL_MARKER.to_string(), TileDefinition::display_name)
    };

    let names: Vec<Vec<String>> = (0..grid.rows())
        .map(|row| (0..grid.cols()).map(|col| name_of(row, col)).collect())
        .collect();
    let width = names
        .iter()
        .flatten()
        .map(|name| name.chars().count())
        .max()
        .unwrap_or(1);

    let mut output = String::new();
    for row in &names {
        let line = row
            .iter()
            .map(|name| format!("{name:<width$}"))
            .collect::<Vec<_>>()
            .join(" ");
        output.push_str(line.trim_end());
        output.push('\n');
    }
    output
}

/// One-line description of how an attempt ended
pub fn summarize(solver: &Solver, outcome: StepOutcome, seed: u64) -> String {
    let stats = solver.stats();
    let (rows, cols) = solver.grid().dimensions();
    let status = match outcome {
        StepOutcome::Solved => "solved",
        StepOutcome::Unsolvable => "unsolvable",
        StepOutcome::Progressed => "stopped at step limit",
    };
    format!(
        "{status}: {rows}x{cols} '{}' seed {seed}, {} steps, {} singleton, {} forced, {} backtracks, {} frames discarded",
        solver.catalog().name(),
        stats.steps,
        stats.singleton_collapses,
        stats.forced_collapses,
        stats.recoveries,
        stats.discarded_frames
    )
}
