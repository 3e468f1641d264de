//! Tests for error messages and source chaining

#[cfg(test)]
mod tests {
    use collapsetile::io::error::{
        SolverError, invalid_catalog, invalid_parameter, invalid_prefill,
    };
    use std::error::Error;
    use std::io;
    use std::path::PathBuf;

    // Messages carry the values needed to diagnose the failure
    // Verified by dropping fields from the Display output
    #[test]
    fn test_display_messages() {
        let error = SolverError::InvalidDimensions {
            rows: 0,
            cols: 4,
            reason: "grid needs at least one row and one column",
        };
        assert_eq!(
            error.to_string(),
            "Invalid grid dimensions 0x4: grid needs at least one row and one column"
        );

        let error = SolverError::PositionOutOfBounds {
            position: [3, 7],
            grid_dimensions: (2, 2),
        };
        assert_eq!(
            error.to_string(),
            "Position (3, 7) is outside the grid (grid size 2x2)"
        );

        let error = SolverError::NoSolution {
            catalog: "sudoku".to_string(),
            attempts: 3,
        };
        assert!(error.to_string().contains("'sudoku' after 3 attempt(s)"));

        assert_eq!(
            SolverError::UnknownCatalog {
                name: "chess".to_string()
            }
            .to_string(),
            "Unknown catalog 'chess'"
        );
    }

    // Helper constructors fill the matching variants
    #[test]
    fn test_helper_constructors() {
        let error = invalid_parameter("attempts", &0, &"at least one attempt is required");
        assert!(matches!(
            &error,
            SolverError::InvalidParameter { parameter: "attempts", value, .. } if value == "0"
        ));

        let error = invalid_catalog("eight", &"not square");
        assert_eq!(error.to_string(), "Invalid catalog 'eight': not square");

        let error = invalid_prefill(&"row 1 has 3 cells, expected 4");
        assert_eq!(
            error.to_string(),
            "Invalid prefill: row 1 has 3 cells, expected 4"
        );
    }

    // Only file system errors expose an underlying source
    // Verified by returning None for every variant
    #[test]
    fn test_source_chain() {
        let error = SolverError::FileSystem {
            path: PathBuf::from("puzzle.txt"),
            operation: "read prefill",
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        };
        assert!(error.source().is_some());
        assert!(error.to_string().contains("read prefill"));
        assert!(error.to_string().contains("puzzle.txt"));

        let error = SolverError::EmptyCatalog {
            name: "none".to_string(),
        };
        assert!(error.source().is_none());
    }

    // I/O errors convert into file system errors
    #[test]
    fn test_from_io_error() {
        let error: SolverError = io::Error::other("disk").into();
        assert!(matches!(error, SolverError::FileSystem { .. }));
    }
}
