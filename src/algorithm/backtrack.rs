use crate::{
    algorithm::selection::RandomSelector,
    spatial::{
        grid::{Grid, GridSnapshot},
        tiles::TileId,
    },
};

/// Saved decision point of one forced collapse
#[derive(Clone, Debug)]
pub struct BacktrackRecord {
    /// Cell states taken before the random tile was placed
    pub snapshot: GridSnapshot,
    /// Cell that received the random tile
    pub position: [usize; 2],
    /// Candidates not yet tried at this position, in catalog order
    pub remaining_alternatives: Vec<TileId>,
}

/// Result of a single backtracking attempt
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BacktrackOutcome {
    /// Grid restored with a fresh alternative placed at the frame's position
    Recovered {
        /// Position that received the alternative
        position: [usize; 2],
        /// Alternative tile now placed there
        tile: TileId,
    },
    /// Top frame had no alternatives left and was discarded
    ExhaustedAtFrame,
    /// No frame remains; the search space from here is exhausted
    ExhaustedTotally,
}

/// Depth-first trail of forced random choices
#[derive(Clone, Debug, Default)]
pub struct BacktrackStack {
    frames: Vec<BacktrackRecord>,
}

impl BacktrackStack {
    /// Create an empty stack
    pub const fn new() -> Self {
        Self { frames: Vec::new() }
    }

    /// Append a record on top of the stack
    pub fn push(&mut self, record: BacktrackRecord) {
        self.frames.push(record);
    }

    /// Number of frames
    pub const fn len(&self) -> usize {
        self.frames.len()
    }

    /// Test if no frames are stored
    pub const fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Most recent frame
    pub fn top(&self) -> Option<&BacktrackRecord> {
        self.frames.last()
    }

    /// Drop every frame
    pub fn clear(&mut self) {
        self.frames.clear();
    }

    /// Make one backtracking attempt against the top frame
    ///
    /// A frame without alternatives is popped and reported so the caller can
    /// retry against its parent. Otherwise the frame's snapshot is restored,
    /// one alternative is removed at random and placed, and the shortened
    /// frame stays on the stack for later retries.
    pub fn backtrack(&mut self, grid: &mut Grid, selector: &mut RandomSelector) -> BacktrackOutcome {
        let Some(frame) = self.frames.last_mut() else {
            return BacktrackOutcome::ExhaustedTotally;
        };

        let [row, col] = frame.position;
        let alternative = if frame.remaining_alternatives.is_empty()
            || grid.restore(&frame.snapshot).is_err()
        {
            None
        } else {
            selector.take_tile(&mut frame.remaining_alternatives)
        };

        match alternative {
            Some(tile) if grid.fill(row, col, tile).is_ok() => {
                log::debug!(
                    "Backtracked to ({row}, {col}) with tile {tile}, {} alternatives left",
                    frame.remaining_alternatives.len()
                );
                BacktrackOutcome::Recovered {
                    position: [row, col],
                    tile,
                }
            }
            _ => {
                log::debug!("No alternatives left at ({row}, {col}), discarding frame");
                self.frames.pop();
                BacktrackOutcome::ExhaustedAtFrame
            }
        }
    }
}
