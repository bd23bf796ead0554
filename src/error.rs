use thiserror::Error;

use crate::maze::Tile;

/// Broad classes of generation failure. Every one of them means "no level" to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The requested level or its template cannot be used.
    InvalidTemplate,
    /// The template is usable but produced no playable grid.
    DegenerateGrid,
    /// The generator was configured with out-of-range parameters.
    InvalidConfig,
}

/// Errors that can occur while generating a level.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenerationError {
    /// The level number is not part of the catalog.
    #[error("Level {level} is outside the catalog range 1..={count}")]
    LevelOutOfRange { level: u32, count: u32 },
    /// The template layout has no rows, or its first row is empty.
    #[error("Template for level {level} has an empty layout")]
    EmptyTemplate { level: u32 },
    /// The template is wider or taller than a tile coordinate can address.
    #[error("Template dimensions {width}x{height} exceed the addressable grid size")]
    TemplateTooLarge { width: usize, height: usize },
    /// The normalized grid holds fewer than two lattice cells.
    #[error("A {width}x{height} tile grid holds fewer than two maze cells")]
    LatticeTooSmall { width: u16, height: u16 },
    /// Carving left no path tiles to place the start and exit on.
    #[error("Generated grid contains no path tiles")]
    NoPathTiles,
    /// The grid handed to the planner already carries start, exit or item markers.
    #[error("Grid already holds a {0:?} tile at {1:?}")]
    MarkersAlreadyPlaced(Tile, (u16, u16)),
    /// The chosen exit is not connected to the chosen start.
    #[error("Exit {exit:?} is unreachable from start {start:?}")]
    UnreachableExit { start: (u16, u16), exit: (u16, u16) },
    /// The loop probability is not a number in [0, 1].
    #[error("Loop probability must lie in [0, 1], got {0}")]
    InvalidLoopProbability(f64),
}

impl GenerationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GenerationError::LevelOutOfRange { .. }
            | GenerationError::EmptyTemplate { .. }
            | GenerationError::TemplateTooLarge { .. } => ErrorKind::InvalidTemplate,
            GenerationError::LatticeTooSmall { .. }
            | GenerationError::NoPathTiles
            | GenerationError::MarkersAlreadyPlaced(..)
            | GenerationError::UnreachableExit { .. } => ErrorKind::DegenerateGrid,
            GenerationError::InvalidLoopProbability(_) => ErrorKind::InvalidConfig,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(
            GenerationError::LevelOutOfRange { level: 0, count: 10 }.kind(),
            ErrorKind::InvalidTemplate
        );
        assert_eq!(GenerationError::NoPathTiles.kind(), ErrorKind::DegenerateGrid);
        assert_eq!(
            GenerationError::UnreachableExit {
                start: (1, 1),
                exit: (3, 1)
            }
            .kind(),
            ErrorKind::DegenerateGrid
        );
        assert_eq!(
            GenerationError::MarkersAlreadyPlaced(Tile::START, (1, 1)).kind(),
            ErrorKind::DegenerateGrid
        );
        assert_eq!(
            GenerationError::InvalidLoopProbability(1.5).kind(),
            ErrorKind::InvalidConfig
        );
    }

    #[test]
    fn test_error_messages() {
        let err = GenerationError::LevelOutOfRange { level: 11, count: 10 };
        assert_eq!(err.to_string(), "Level 11 is outside the catalog range 1..=10");
    }
}
