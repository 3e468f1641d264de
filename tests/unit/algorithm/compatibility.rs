//! Tests for the edge-socket and uniqueness admissibility checks

#[cfg(test)]
mod tests {
    use collapsetile::algorithm::compatibility::{
        edge_sockets_admissible, first_conflict, uniqueness_admissible,
    };
    use collapsetile::spatial::grid::Grid;
    use collapsetile::spatial::tiles::{EdgeSockets, TileDefinition};

    fn socket_tiles() -> Vec<TileDefinition> {
        vec![
            TileDefinition::with_sockets("zero", EdgeSockets::new("0", "0", "0", "0")),
            TileDefinition::with_sockets("one", EdgeSockets::new("1", "1", "1", "1")),
            TileDefinition::with_sockets("east-ab", EdgeSockets::new("zz", "ab", "zz", "zz")),
            TileDefinition::with_sockets("west-ab", EdgeSockets::new("zz", "zz", "zz", "ab")),
            TileDefinition::with_sockets("west-ba", EdgeSockets::new("zz", "zz", "zz", "ba")),
            TileDefinition::value("plain"),
        ]
    }

    // Facing sockets must match and empty neighbours impose nothing
    // Verified by comparing the candidate's side to the same side of the neighbour
    #[test]
    fn test_edge_sockets_against_filled_neighbour() {
        let tiles = socket_tiles();
        let mut grid = Grid::new(1, 3, tiles.len());
        grid.fill(0, 0, 0).expect("fill should succeed");

        assert!(edge_sockets_admissible(&tiles, &grid, 0, 1, 0));
        assert!(!edge_sockets_admissible(&tiles, &grid, 0, 1, 1));
        // (0, 1) is empty, so (0, 2) is unconstrained
        assert!(edge_sockets_admissible(&tiles, &grid, 0, 2, 1));
    }

    // Asymmetric codes need the mirrored code on the facing side
    // Verified by matching codes without reversal
    #[test]
    fn test_edge_sockets_asymmetric_codes() {
        let tiles = socket_tiles();
        let mut grid = Grid::new(1, 2, tiles.len());
        grid.fill(0, 0, 2).expect("fill should succeed");

        assert!(edge_sockets_admissible(&tiles, &grid, 0, 1, 4));
        assert!(!edge_sockets_admissible(&tiles, &grid, 0, 1, 3));
    }

    // Every filled neighbour is consulted, not just the first
    #[test]
    fn test_edge_sockets_all_neighbours() {
        let tiles = socket_tiles();
        let mut grid = Grid::new(3, 3, tiles.len());
        grid.fill(0, 1, 0).expect("fill should succeed");
        grid.fill(2, 1, 1).expect("fill should succeed");

        assert!(!edge_sockets_admissible(&tiles, &grid, 1, 1, 0));
        assert!(!edge_sockets_admissible(&tiles, &grid, 1, 1, 1));
        assert!(edge_sockets_admissible(&tiles, &grid, 1, 0, 1));
    }

    // Tiles without sockets or outside the list are never admissible
    #[test]
    fn test_edge_sockets_invalid_candidates() {
        let tiles = socket_tiles();
        let grid = Grid::new(2, 2, tiles.len());

        assert!(!edge_sockets_admissible(&tiles, &grid, 0, 0, 5));
        assert!(!edge_sockets_admissible(&tiles, &grid, 0, 0, 99));
    }

    // A value is excluded by its row, column and block
    // Verified by skipping the block check
    #[test]
    fn test_uniqueness_row_column_block() {
        let mut grid = Grid::new(9, 9, 9);
        grid.fill(0, 0, 5).expect("fill should succeed");

        assert!(!uniqueness_admissible(&grid, 0, 8, 5, 3));
        assert!(!uniqueness_admissible(&grid, 8, 0, 5, 3));
        assert!(!uniqueness_admissible(&grid, 2, 2, 5, 3));
        assert!(uniqueness_admissible(&grid, 3, 3, 5, 3));
        assert!(uniqueness_admissible(&grid, 2, 2, 4, 3));
    }

    // The cell under test never conflicts with itself
    // Verified by including the cell in its own row scan
    #[test]
    fn test_uniqueness_ignores_own_cell() {
        let mut grid = Grid::new(9, 9, 9);
        grid.fill(4, 4, 7).expect("fill should succeed");

        assert!(uniqueness_admissible(&grid, 4, 4, 7, 3));
    }

    // First conflicting placed cell is reported in row-major order
    // Verified by scanning empty cells
    #[test]
    fn test_first_conflict() {
        let mut grid = Grid::new(9, 9, 9);
        let check = |state: &Grid, row, col, tile| uniqueness_admissible(state, row, col, tile, 3);
        grid.fill(0, 0, 5).expect("fill should succeed");
        grid.fill(4, 4, 1).expect("fill should succeed");
        assert_eq!(first_conflict(&grid, check), None);

        grid.fill(0, 7, 5).expect("fill should succeed");
        assert_eq!(first_conflict(&grid, check), Some([0, 0]));
    }
}
