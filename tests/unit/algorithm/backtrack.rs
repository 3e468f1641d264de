//! Tests for the backtrack stack and its recovery outcomes

#[cfg(test)]
mod tests {
    use collapsetile::algorithm::backtrack::{BacktrackOutcome, BacktrackRecord, BacktrackStack};
    use collapsetile::algorithm::selection::RandomSelector;
    use collapsetile::spatial::grid::Grid;

    // Forced choice of tile 0 at (0, 0) with tiles 1 and 2 left untried
    fn forced_choice(grid: &mut Grid) -> BacktrackRecord {
        let snapshot = grid.snapshot();
        grid.fill(0, 0, 0).expect("fill should succeed");
        BacktrackRecord {
            snapshot,
            position: [0, 0],
            remaining_alternatives: vec![1, 2],
        }
    }

    // An empty stack means the search space is exhausted
    // Verified by returning a frame-level outcome on an empty stack
    #[test]
    fn test_empty_stack_exhausted_totally() {
        let mut stack = BacktrackStack::new();
        let mut grid = Grid::new(1, 2, 3);
        let mut selector = RandomSelector::new(0);

        assert!(stack.is_empty());
        assert_eq!(
            stack.backtrack(&mut grid, &mut selector),
            BacktrackOutcome::ExhaustedTotally
        );
    }

    // Recovery restores the snapshot, then places one untried alternative
    // Verified by placing the alternative without restoring
    #[test]
    fn test_recovery_restores_and_places_alternative() {
        let mut stack = BacktrackStack::new();
        let mut grid = Grid::new(1, 2, 3);
        let mut selector = RandomSelector::new(0);
        let record = forced_choice(&mut grid);
        stack.push(record);
        grid.fill(0, 1, 2).expect("fill should succeed");

        let outcome = stack.backtrack(&mut grid, &mut selector);

        let BacktrackOutcome::Recovered { position, tile } = outcome else {
            panic!("expected recovery, got {outcome:?}");
        };
        assert_eq!(position, [0, 0]);
        assert!(tile == 1 || tile == 2);
        assert_eq!(grid.tile_at(0, 0), Some(tile));
        assert_eq!(grid.tile_at(0, 1), None);

        assert_eq!(stack.len(), 1);
        let remaining = stack
            .top()
            .map(|frame| frame.remaining_alternatives.clone())
            .unwrap_or_default();
        assert_eq!(remaining.len(), 1);
        assert!(!remaining.contains(&tile));
    }

    // A frame is retried until its alternatives run out, then discarded
    // Verified by keeping exhausted frames on the stack
    #[test]
    fn test_alternatives_run_out_then_frame_discarded() {
        let mut stack = BacktrackStack::new();
        let mut grid = Grid::new(1, 2, 3);
        let mut selector = RandomSelector::new(11);
        let record = forced_choice(&mut grid);
        stack.push(record);

        let mut placed = Vec::new();
        for _ in 0..2 {
            match stack.backtrack(&mut grid, &mut selector) {
                BacktrackOutcome::Recovered { tile, .. } => placed.push(tile),
                other => panic!("expected recovery, got {other:?}"),
            }
        }
        placed.sort_unstable();
        assert_eq!(placed, vec![1, 2]);

        let filled = grid.tile_at(0, 0);
        assert_eq!(
            stack.backtrack(&mut grid, &mut selector),
            BacktrackOutcome::ExhaustedAtFrame
        );
        assert!(stack.is_empty());
        // Exhausted frames are dropped without touching the grid
        assert_eq!(grid.tile_at(0, 0), filled);

        assert_eq!(
            stack.backtrack(&mut grid, &mut selector),
            BacktrackOutcome::ExhaustedTotally
        );
    }

    // Only the top frame is consulted; deeper frames wait their turn
    #[test]
    fn test_top_frame_first() {
        let mut stack = BacktrackStack::new();
        let mut grid = Grid::new(1, 2, 3);
        let mut selector = RandomSelector::new(5);
        let record = forced_choice(&mut grid);
        stack.push(record);

        let snapshot = grid.snapshot();
        grid.fill(0, 1, 1).expect("fill should succeed");
        stack.push(BacktrackRecord {
            snapshot,
            position: [0, 1],
            remaining_alternatives: Vec::new(),
        });

        assert_eq!(
            stack.backtrack(&mut grid, &mut selector),
            BacktrackOutcome::ExhaustedAtFrame
        );
        assert_eq!(stack.len(), 1);
        assert_eq!(stack.top().map(|frame| frame.position), Some([0, 0]));

        assert!(matches!(
            stack.backtrack(&mut grid, &mut selector),
            BacktrackOutcome::Recovered {
                position: [0, 0],
                ..
            }
        ));
        assert_eq!(grid.tile_at(0, 1), None);

        stack.clear();
        assert!(stack.is_empty());
    }
}
