//! Command-line interface driving solver runs step by step

use crate::algorithm::executor::{Solver, StepOutcome};
use crate::algorithm::propagation::find_resolved_conflict;
use crate::io::configuration::{
    DEFAULT_ATTEMPTS, DEFAULT_GRID_SIZE, DEFAULT_MAX_STEPS, DEFAULT_SEED, PROGRESS_REFRESH_STEPS,
};
use crate::io::error::{Result, SolverError, invalid_parameter};
use crate::io::prefill::PrefillData;
use crate::io::progress::ProgressManager;
use crate::io::report::{format_grid, summarize};
use crate::spatial::catalog::{Catalog, Constraint, builtin};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "collapsetile")]
#[command(
    author,
    version,
    about = "Fill a tile grid with wave function collapse and backtracking"
)]
/// Command-line arguments for the solver
// Quiet and verbose are independent switches
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Built-in catalog to solve with
    #[arg(short, long, default_value = "basic", value_parser = builtin::NAMES)]
    pub catalog: String,

    /// Number of grid rows (defaults to the prefill or catalog size)
    #[arg(short, long)]
    pub rows: Option<usize>,

    /// Number of grid columns (defaults to the row count)
    #[arg(short = 'C', long)]
    pub cols: Option<usize>,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Maximum steps per attempt before stopping
    #[arg(short, long, default_value_t = DEFAULT_MAX_STEPS)]
    pub max_steps: usize,

    /// Attempts to make, each with the next seed, until one solves
    #[arg(short, long, default_value_t = DEFAULT_ATTEMPTS)]
    pub attempts: usize,

    /// Text file of cells to place before solving
    #[arg(short, long, value_name = "FILE")]
    pub prefill: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Log each backtracking decision
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Grid size from explicit flags, then the prefill, then the catalog
    ///
    /// A single explicit dimension is used for both sides.
    pub fn resolve_dimensions(
        &self,
        catalog: &Catalog,
        prefill: Option<&PrefillData>,
    ) -> (usize, usize) {
        match (self.rows, self.cols) {
            (Some(rows), Some(cols)) => (rows, cols),
            (Some(side), None) | (None, Some(side)) => (side, side),
            (None, None) => prefill.map_or_else(
                || default_dimensions(catalog),
                |prefill| prefill.dimensions,
            ),
        }
    }
}

/// Natural grid size for a catalog
///
/// Uniqueness catalogs fill one full board (9x9 for nine values); edge
/// catalogs use the default square grid.
pub const fn default_dimensions(catalog: &Catalog) -> (usize, usize) {
    match catalog.constraint() {
        Constraint::Uniqueness { block_size } => {
            let side = block_size * block_size;
            (side, side)
        }
        Constraint::EdgeSockets => (DEFAULT_GRID_SIZE, DEFAULT_GRID_SIZE),
    }
}

/// Result of one attempt
pub struct AttemptReport {
    /// Seed the attempt ran with
    pub seed: u64,
    /// Final step outcome
    pub outcome: StepOutcome,
    /// Solver in its final state
    pub solver: Solver,
}

/// Runs attempts with successive seeds until one solves
pub struct RunDriver {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl RunDriver {
    /// Create a driver for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let attempts = cli.attempts;
        let progress_manager = cli
            .should_show_progress()
            .then(|| ProgressManager::new(attempts));

        Self {
            cli,
            progress_manager,
        }
    }

    /// Solve according to the CLI arguments and print the grid and a summary
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The catalog, dimensions, attempt count or prefill are invalid
    /// - Every attempt ends unsolved
    // Grid and summary on stdout are the program's output
    #[allow(clippy::print_stdout)]
    pub fn process(&self) -> Result<()> {
        let report = self.solve()?;
        print!("{}", format_grid(report.solver.grid(), report.solver.catalog()));
        println!("{}", summarize(&report.solver, report.outcome, report.seed));

        match report.outcome {
            StepOutcome::Solved => Ok(()),
            StepOutcome::Progressed | StepOutcome::Unsolvable => Err(SolverError::NoSolution {
                catalog: report.solver.catalog().name().to_string(),
                attempts: self.cli.attempts,
            }),
        }
    }

    /// Run attempts and return the first solved one, or the last one made
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog, dimensions, attempt count or prefill
    /// are invalid
    pub fn solve(&self) -> Result<AttemptReport> {
        if self.cli.attempts == 0 {
            return Err(invalid_parameter(
                "attempts",
                &self.cli.attempts,
                &"at least one attempt is required",
            ));
        }

        let catalog = builtin::by_name(&self.cli.catalog)?;
        let prefill = self
            .cli
            .prefill
            .as_deref()
            .map(|path| PrefillData::from_path(path, &catalog))
            .transpose()?;
        let (rows, cols) = self.cli.resolve_dimensions(&catalog, prefill.as_ref());

        let mut last = None;
        for attempt in 0..self.cli.attempts {
            let seed = self.cli.seed.wrapping_add(attempt as u64);
            let mut solver = Solver::with_seed(rows, cols, catalog.clone(), seed)?;
            if let Some(prefill) = &prefill {
                prefill.apply(&mut solver)?;
            }

            let outcome = self.run_attempt(&mut solver, attempt);
            log::debug!("Attempt {}: {}", attempt + 1, summarize(&solver, outcome, seed));

            last = Some(AttemptReport {
                seed,
                outcome,
                solver,
            });
            if outcome == StepOutcome::Solved {
                break;
            }
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        last.ok_or_else(|| {
            invalid_parameter(
                "attempts",
                &self.cli.attempts,
                &"at least one attempt is required",
            )
        })
    }

    fn run_attempt(&self, solver: &mut Solver, attempt: usize) -> StepOutcome {
        if let Some(ref pm) = self.progress_manager {
            pm.start_attempt(attempt, solver.grid().len());
        }

        let mut outcome = initial_outcome(solver);
        for step in 0..self.cli.max_steps {
            if outcome != StepOutcome::Progressed {
                break;
            }
            outcome = solver.step();
            if step % PROGRESS_REFRESH_STEPS == 0
                && let Some(ref pm) = self.progress_manager
            {
                pm.update(solver.grid().filled_count(), &solver.stats());
            }
        }

        if let Some(ref pm) = self.progress_manager {
            pm.update(solver.grid().filled_count(), &solver.stats());
            pm.finish_attempt(outcome);
        }
        outcome
    }
}

/// Outcome of a freshly prefilled solver before its first step
///
/// A full grid is only solved when no resolved cell conflicts with another,
/// since stepping a complete grid skips the consistency check.
pub fn initial_outcome(solver: &Solver) -> StepOutcome {
    match find_resolved_conflict(solver.grid(), solver.catalog()) {
        Some([row, col]) => {
            log::warn!("Prefilled cell ({row}, {col}) conflicts with its neighbours");
            StepOutcome::Unsolvable
        }
        None if solver.is_solved() => StepOutcome::Solved,
        None => StepOutcome::Progressed,
    }
}
