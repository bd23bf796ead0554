pub mod cell;
pub mod grid;

pub use cell::{PathType, Tile};
pub use grid::Grid;

use crate::error::GenerationError;

/// A coordinate in the cell lattice, as `(row, col)`.
pub type Cell = (u16, u16);

/// A tile grid viewed as a lattice of logical cells.
///
/// Cell `(row, col)` lives at tile `(2 * col + 1, 2 * row + 1)`; every tile with an
/// even `x` or `y` starts out as a wall separating cells, and the outer ring is never carved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    grid: Grid,
    cell_width: u16,
    cell_height: u16,
}

/// Rounds an even tile dimension up to the next odd one.
///
/// Never overflows since `u16::MAX` is itself odd.
pub fn normalize_dimension(dim: u16) -> u16 {
    dim | 1
}

impl Maze {
    /// Creates a maze filled entirely with walls.
    ///
    /// Even tile dimensions are bumped to the next odd value so the lattice maps cleanly
    /// onto `2 * cell + 1` tiles. Fails when the lattice would hold fewer than two cells.
    pub fn new(tile_width: u16, tile_height: u16) -> Result<Self, GenerationError> {
        let width = normalize_dimension(tile_width);
        let height = normalize_dimension(tile_height);
        let cell_width = (width - 1) / 2;
        let cell_height = (height - 1) / 2;
        if (cell_width as usize) * (cell_height as usize) < 2 {
            return Err(GenerationError::LatticeTooSmall { width, height });
        }

        Ok(Maze {
            grid: Grid::new(width, height, Tile::WALL),
            cell_width,
            cell_height,
        })
    }

    /// Width of the tile grid (always odd).
    pub fn width(&self) -> u16 {
        self.grid.width()
    }

    /// Height of the tile grid (always odd).
    pub fn height(&self) -> u16 {
        self.grid.height()
    }

    /// Number of lattice columns.
    pub fn cell_width(&self) -> u16 {
        self.cell_width
    }

    /// Number of lattice rows.
    pub fn cell_height(&self) -> u16 {
        self.cell_height
    }

    pub fn cell_count(&self) -> usize {
        self.cell_width as usize * self.cell_height as usize
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn tile(&self, coord: (u16, u16)) -> Option<Tile> {
        self.grid.get(coord)
    }

    /// Overwrites the tile at `coord`. Returns `false` if `coord` lies outside the grid.
    pub fn set_tile(&mut self, coord: (u16, u16), tile: Tile) -> bool {
        self.grid.set(coord, tile)
    }

    /// Checks if the given cell is within the lattice.
    pub fn is_cell_in_bounds(&self, cell: Cell) -> bool {
        cell.0 < self.cell_height && cell.1 < self.cell_width
    }

    /// Maps a lattice cell to its tile coordinate `(x, y)`.
    pub fn tile_of(cell: Cell) -> (u16, u16) {
        (cell.1 * 2 + 1, cell.0 * 2 + 1)
    }

    /// The tile separating two lattice-adjacent cells.
    pub fn wall_between(a: Cell, b: Cell) -> (u16, u16) {
        (a.1 + b.1 + 1, a.0 + b.0 + 1)
    }

    /// Carves the tile of a lattice cell to a path.
    /// Returns `false` and leaves the grid untouched if the cell is outside the lattice.
    pub fn carve_cell(&mut self, cell: Cell) -> bool {
        self.is_cell_in_bounds(cell) && self.grid.set(Maze::tile_of(cell), Tile::EMPTY)
    }

    /// Carves the wall tile between two adjacent cells.
    ///
    /// # Returns
    /// `true` if a wall was removed. `false` if the tile was already open, either cell is
    /// outside the lattice, or the cells are not lattice neighbors.
    pub fn carve_wall_between(&mut self, a: Cell, b: Cell) -> bool {
        if !self.is_cell_in_bounds(a) || !self.is_cell_in_bounds(b) {
            return false;
        }
        if a.0.abs_diff(b.0) + a.1.abs_diff(b.1) != 1 {
            return false;
        }
        let wall = Maze::wall_between(a, b);
        self.grid.get(wall) == Some(Tile::WALL) && self.grid.set(wall, Tile::EMPTY)
    }

    /// Renders the maze as layout rows, one symbol per tile.
    pub fn text_rows(&self) -> Vec<String> {
        (0..self.height())
            .map(|y| {
                (0..self.width())
                    .map(|x| self.grid[(x, y)].symbol())
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_even_dimensions_become_odd() {
        let maze = Maze::new(10, 10).unwrap();
        assert_eq!((maze.width(), maze.height()), (11, 11));
        assert_eq!((maze.cell_width(), maze.cell_height()), (5, 5));

        let maze = Maze::new(17, 14).unwrap();
        assert_eq!((maze.width(), maze.height()), (17, 15));
        assert_eq!((maze.cell_width(), maze.cell_height()), (8, 7));
    }

    #[test]
    fn test_tiny_lattice_is_rejected() {
        assert_eq!(
            Maze::new(3, 3),
            Err(GenerationError::LatticeTooSmall {
                width: 3,
                height: 3
            })
        );
        assert!(Maze::new(0, 9).is_err());
        assert!(Maze::new(5, 3).is_ok());
    }

    #[test]
    fn test_normalize_dimension() {
        assert_eq!(normalize_dimension(0), 1);
        assert_eq!(normalize_dimension(10), 11);
        assert_eq!(normalize_dimension(11), 11);
        assert_eq!(normalize_dimension(u16::MAX - 1), u16::MAX);
    }

    #[test]
    fn test_carve_wall_between() {
        let mut maze = Maze::new(7, 7).unwrap();
        maze.carve_cell((1, 1));
        maze.carve_cell((1, 2));
        assert!(maze.carve_wall_between((1, 1), (1, 2)));
        // Carving the same wall again should report nothing removed
        assert!(!maze.carve_wall_between((1, 2), (1, 1)));
        assert_eq!(maze.tile((4, 3)), Some(Tile::EMPTY));
        assert_eq!(maze.tile((3, 3)), Some(Tile::EMPTY));
        assert_eq!(maze.tile((5, 3)), Some(Tile::EMPTY));
    }

    #[test]
    fn test_invalid_carves_leave_grid_untouched() {
        let mut maze = Maze::new(7, 7).unwrap();
        let before = maze.clone();
        // Diagonal, identical and far-apart cells are not lattice neighbors
        assert!(!maze.carve_wall_between((0, 0), (1, 1)));
        assert!(!maze.carve_wall_between((1, 1), (1, 1)));
        assert!(!maze.carve_wall_between((0, 0), (0, 2)));
        // Cells outside the 3x3 lattice
        assert!(!maze.carve_wall_between((2, 2), (2, 3)));
        assert!(!maze.carve_wall_between((u16::MAX, 0), (u16::MAX - 1, 0)));
        assert!(!maze.carve_cell((3, 0)));
        assert!(!maze.carve_cell((u16::MAX, u16::MAX)));
        assert!(!maze.set_tile((7, 0), Tile::EMPTY));
        assert!(!maze.set_tile((0, u16::MAX), Tile::EMPTY));
        assert_eq!(maze, before);

        assert!(maze.carve_cell((2, 2)));
        assert!(maze.set_tile((0, 0), Tile::EMPTY));
        assert_eq!(maze.tile((0, 0)), Some(Tile::EMPTY));
    }

    #[test]
    fn test_fresh_maze_is_all_walls() {
        let maze = Maze::new(5, 5).unwrap();
        assert!(maze.text_rows().iter().all(|row| row == "WWWWW"));
    }
}
