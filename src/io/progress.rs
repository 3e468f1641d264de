//! Progress display for solver attempts

use crate::algorithm::executor::{SolverStats, StepOutcome};
use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::LazyLock;

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{prefix}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} cells {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks filled cells of the current attempt on a single bar
///
/// The bar moves backwards when backtracking restores an earlier grid.
pub struct ProgressManager {
    bar: ProgressBar,
    attempts: usize,
}

impl ProgressManager {
    /// Create a progress manager drawing to stderr
    pub fn new(attempts: usize) -> Self {
        let bar = ProgressBar::new(0);
        bar.set_style(PROGRESS_STYLE.clone());
        Self { bar, attempts }
    }

    /// Create a progress manager that never draws
    pub fn hidden(attempts: usize) -> Self {
        let manager = Self::new(attempts);
        manager.bar.set_draw_target(ProgressDrawTarget::hidden());
        manager
    }

    /// Reset the bar for a new attempt
    pub fn start_attempt(&self, attempt: usize, total_cells: usize) {
        self.bar.set_length(total_cells as u64);
        self.bar.set_position(0);
        self.bar
            .set_prefix(format!("attempt {}/{}", attempt + 1, self.attempts));
        self.bar.set_message(String::new());
    }

    /// Report filled cells and backtracking activity
    pub fn update(&self, filled: usize, stats: &SolverStats) {
        self.bar.set_position(filled as u64);
        self.bar.set_message(format!(
            "({} forced, {} backtracks)",
            stats.forced_collapses, stats.recoveries
        ));
    }

    /// Record how the attempt ended
    pub fn finish_attempt(&self, outcome: StepOutcome) {
        let label = match outcome {
            StepOutcome::Solved => "solved",
            StepOutcome::Unsolvable => "unsolvable",
            StepOutcome::Progressed => "step limit reached",
        };
        self.bar.set_message(label);
    }

    /// Current bar position (filled cells)
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Clean up the progress display
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
