use crate::{
    algorithm::{
        backtrack::{BacktrackOutcome, BacktrackRecord, BacktrackStack},
        bitset::CandidateSet,
        propagation::{
            SingletonScan, collapse_first_singleton, find_resolved_conflict, refresh_candidates,
        },
        selection::{EntropyScan, RandomSelector, lowest_entropy_cells},
    },
    io::{
        configuration::MAX_GRID_DIMENSION,
        error::{Result, SolverError},
    },
    spatial::{
        catalog::Catalog,
        grid::{CellState, Grid},
        tiles::TileId,
    },
};

/// Result of one solver step
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// A cell was collapsed, or a contradiction was recovered by backtracking
    Progressed,
    /// Every cell holds a tile
    Solved,
    /// Backtracking ran out of frames; no completion exists from here
    Unsolvable,
}

/// Counters accumulated over one run
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SolverStats {
    /// Calls to `step` that did work (excludes no-ops on a solved grid)
    pub steps: usize,
    /// Cells filled because they had exactly one candidate
    pub singleton_collapses: usize,
    /// Cells filled by a random choice (one backtrack record each)
    pub forced_collapses: usize,
    /// Contradictions met, whether recovered or not
    pub contradictions: usize,
    /// Backtracking attempts that placed an alternative tile
    pub recoveries: usize,
    /// Frames discarded after all their alternatives failed
    pub discarded_frames: usize,
}

/// Backtracking wave function collapse solver
///
/// Owns the grid, its candidate sets and the backtrack stack for one run.
/// Each call to [`Solver::step`] runs to completion: refresh candidates,
/// collapse one singleton, or else collapse a random lowest-entropy cell.
#[derive(Clone, Debug)]
pub struct Solver {
    /// Tile universe and admissibility rule
    catalog: Catalog,
    /// Current cell states and candidates
    grid: Grid,
    /// Forced choices available for backtracking
    stack: BacktrackStack,
    /// Random number generator for stochastic selection
    random_selector: RandomSelector,
    /// Counters for the current run
    stats: SolverStats,
}

impl Solver {
    /// Create a solver for a `rows × cols` grid over a catalog
    ///
    /// # Errors
    ///
    /// Returns an error if a dimension is zero or above the maximum, or the
    /// catalog is empty
    pub fn new(
        rows: usize,
        cols: usize,
        catalog: Catalog,
        random_selector: RandomSelector,
    ) -> Result<Self> {
        validate_configuration(rows, cols, &catalog)?;
        let grid = Grid::new(rows, cols, catalog.len());

        Ok(Self {
            catalog,
            grid,
            stack: BacktrackStack::new(),
            random_selector,
            stats: SolverStats::default(),
        })
    }

    /// Create a solver with a selector seeded from `seed`
    ///
    /// # Errors
    ///
    /// Returns an error if a dimension is zero or above the maximum, or the
    /// catalog is empty
    pub fn with_seed(rows: usize, cols: usize, catalog: Catalog, seed: u64) -> Result<Self> {
        Self::new(rows, cols, catalog, RandomSelector::new(seed))
    }

    /// Install new dimensions and catalog, starting a fresh run
    ///
    /// On error the previous configuration and run are left untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if a dimension is zero or above the maximum, or the
    /// catalog is empty
    pub fn configure(&mut self, rows: usize, cols: usize, catalog: Catalog) -> Result<()> {
        validate_configuration(rows, cols, &catalog)?;
        self.grid = Grid::new(rows, cols, catalog.len());
        self.catalog = catalog;
        self.stack.clear();
        self.stats = SolverStats::default();
        Ok(())
    }

    /// Start a new run with the current dimensions and catalog
    pub fn restart(&mut self) {
        let (rows, cols) = self.grid.dimensions();
        self.grid.reset(rows, cols);
        self.stack.clear();
        self.stats = SolverStats::default();
    }

    /// Replace the random selector, keeping the grid
    pub fn reseed(&mut self, random_selector: RandomSelector) {
        self.random_selector = random_selector;
    }

    /// Place a tile directly, bypassing the admissibility check
    ///
    /// Intended for seeding a puzzle before stepping. A conflicting preset is
    /// detected on the next step and, with nothing to backtrack to, makes the
    /// run unsolvable.
    ///
    /// # Errors
    ///
    /// Returns an error if the position is outside the grid or the tile is not
    /// in the catalog
    pub fn preset(&mut self, row: usize, col: usize, tile: TileId) -> Result<()> {
        self.grid.fill(row, col, tile)
    }

    /// Advance the state machine by one step
    pub fn step(&mut self) -> StepOutcome {
        if self.grid.is_complete() {
            return StepOutcome::Solved;
        }
        self.stats.steps += 1;

        refresh_candidates(&mut self.grid, &self.catalog);

        if let Some([row, col]) = find_resolved_conflict(&self.grid, &self.catalog) {
            log::debug!("Resolved cell ({row}, {col}) conflicts with its surroundings");
            return self.recover();
        }

        match collapse_first_singleton(&mut self.grid) {
            SingletonScan::Collapsed { .. } => {
                self.stats.singleton_collapses += 1;
                return StepOutcome::Progressed;
            }
            SingletonScan::Contradiction { position } => {
                log::debug!("Cell {position:?} has no candidates");
                return self.recover();
            }
            SingletonScan::NoSingleton => {}
        }

        self.force_collapse()
    }

    /// Step until the run is solved, unsolvable or `max_steps` is reached
    ///
    /// Returns the last outcome; `Progressed` means the limit was hit.
    pub fn run(&mut self, max_steps: usize) -> StepOutcome {
        let mut outcome = if self.grid.is_complete() {
            StepOutcome::Solved
        } else {
            StepOutcome::Progressed
        };
        for _ in 0..max_steps {
            outcome = self.step();
            if outcome != StepOutcome::Progressed {
                break;
            }
        }
        outcome
    }

    /// Collapse a random cell of lowest entropy to a random candidate
    fn force_collapse(&mut self) -> StepOutcome {
        let cells = match lowest_entropy_cells(&self.grid) {
            EntropyScan::Contradiction { position } => {
                log::debug!("Cell {position:?} has no candidates");
                return self.recover();
            }
            EntropyScan::NoEmptyCells => return StepOutcome::Solved,
            EntropyScan::Ties { cells, .. } => cells,
        };

        let Some([row, col]) = self.random_selector.choose_cell(&cells) else {
            return StepOutcome::Solved;
        };
        let candidates = self
            .grid
            .candidates(row, col)
            .map(CandidateSet::to_vec)
            .unwrap_or_default();
        let Some(tile) = self.random_selector.choose_tile(&candidates) else {
            return self.recover();
        };

        let snapshot = self.grid.snapshot();
        if self.grid.fill(row, col, tile).is_err() {
            return self.recover();
        }
        self.stack.push(BacktrackRecord {
            snapshot,
            position: [row, col],
            remaining_alternatives: candidates
                .into_iter()
                .filter(|&candidate| candidate != tile)
                .collect(),
        });
        self.stats.forced_collapses += 1;

        StepOutcome::Progressed
    }

    /// Backtrack until an alternative is placed or the stack is exhausted
    fn recover(&mut self) -> StepOutcome {
        self.stats.contradictions += 1;
        loop {
            match self
                .stack
                .backtrack(&mut self.grid, &mut self.random_selector)
            {
                BacktrackOutcome::Recovered { .. } => {
                    self.stats.recoveries += 1;
                    return StepOutcome::Progressed;
                }
                BacktrackOutcome::ExhaustedAtFrame => {
                    self.stats.discarded_frames += 1;
                }
                BacktrackOutcome::ExhaustedTotally => {
                    log::info!(
                        "Every alternative has been tried; catalog '{}' cannot complete this grid",
                        self.catalog.name()
                    );
                    return StepOutcome::Unsolvable;
                }
            }
        }
    }

    /// Cell state at a position, `None` outside the grid
    pub fn cell_at(&self, row: usize, col: usize) -> Option<CellState> {
        self.grid.cell(row, col)
    }

    /// Candidates computed for a cell by the last propagation
    ///
    /// Only meaningful while the cell is empty; stale right after a
    /// backtracking restore until the next step.
    pub fn candidates_at(&self, row: usize, col: usize) -> Option<&CandidateSet> {
        self.grid.candidates(row, col)
    }

    /// Test if every cell holds a tile
    pub fn is_solved(&self) -> bool {
        self.grid.is_complete()
    }

    /// Read-only view of the grid
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Active catalog
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Counters for the current run
    pub const fn stats(&self) -> SolverStats {
        self.stats
    }

    /// Number of decision points on the backtrack stack
    pub const fn backtrack_depth(&self) -> usize {
        self.stack.len()
    }
}

fn validate_configuration(rows: usize, cols: usize, catalog: &Catalog) -> Result<()> {
    if rows == 0 || cols == 0 {
        return Err(SolverError::InvalidDimensions {
            rows,
            cols,
            reason: "grid needs at least one row and one column",
        });
    }
    if rows > MAX_GRID_DIMENSION || cols > MAX_GRID_DIMENSION {
        return Err(SolverError::InvalidDimensions {
            rows,
            cols,
            reason: "grid dimension exceeds the supported maximum",
        });
    }
    if catalog.is_empty() {
        return Err(SolverError::EmptyCatalog {
            name: catalog.name().to_string(),
        });
    }
    Ok(())
}
