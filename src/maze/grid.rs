use super::cell::Tile;

/// Flat, row-major tile storage addressed by `(x, y)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    data: Box<[Tile]>,
    width: u16,
    height: u16,
}

impl Grid {
    pub fn new(width: u16, height: u16, tile: Tile) -> Self {
        let data = vec![tile; width as usize * height as usize].into_boxed_slice();
        Grid {
            data,
            width,
            height,
        }
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn is_in_bounds(&self, coord: (u16, u16)) -> bool {
        coord.0 < self.width && coord.1 < self.height
    }

    /// Returns the tile at `coord`, or `None` when it lies outside the grid.
    pub fn get(&self, coord: (u16, u16)) -> Option<Tile> {
        self.is_in_bounds(coord)
            .then(|| self.data[self.ravel_index(coord.0, coord.1)])
    }

    fn ravel_index(&self, x: u16, y: u16) -> usize {
        // At most u16::MAX * u16::MAX, which fits any 32-bit or wider usize
        y as usize * self.width as usize + x as usize
    }

    /// Overwrites the tile at `coord`. Returns `false` if `coord` lies outside the grid.
    pub fn set(&mut self, coord: (u16, u16), tile: Tile) -> bool {
        if !self.is_in_bounds(coord) {
            return false;
        }
        let idx = self.ravel_index(coord.0, coord.1);
        self.data[idx] = tile;
        true
    }

    /// Iterates all coordinates holding `tile`, in row-major order.
    pub fn positions_of(&self, tile: Tile) -> impl Iterator<Item = (u16, u16)> + '_ {
        (0..self.height)
            .flat_map(move |y| (0..self.width).map(move |x| (x, y)))
            .filter(move |&coord| self[coord] == tile)
    }

    /// Get the in-bounds 4-directional neighbors of a tile.
    pub fn neighbors(&self, coord: (u16, u16)) -> impl Iterator<Item = (u16, u16)> + '_ {
        let (x, y) = coord;
        [
            // NOTE: wrapping_sub turns an underflow into u16::MAX and saturating_add
            // clamps to u16::MAX. Neither is a valid index since the largest
            // dimension is u16::MAX, so both get filtered by the bounds check.
            (x.wrapping_sub(1), y),
            (x.saturating_add(1), y),
            (x, y.wrapping_sub(1)),
            (x, y.saturating_add(1)),
        ]
        .into_iter()
        .filter(move |&c| self.is_in_bounds(c))
    }
}

impl std::ops::Index<(u16, u16)> for Grid {
    type Output = Tile;

    fn index(&self, index: (u16, u16)) -> &Self::Output {
        &self.data[self.ravel_index(index.0, index.1)]
    }
}

impl std::ops::IndexMut<(u16, u16)> for Grid {
    fn index_mut(&mut self, index: (u16, u16)) -> &mut Self::Output {
        let idx = self.ravel_index(index.0, index.1);
        &mut self.data[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_indexing() {
        let mut grid = Grid::new(5, 3, Tile::WALL);
        grid[(4, 2)] = Tile::EMPTY;
        assert_eq!(grid[(4, 2)], Tile::EMPTY);
        assert_eq!(grid.get((4, 2)), Some(Tile::EMPTY));
        assert_eq!(grid.get((5, 2)), None);
        assert_eq!(grid.get((0, 3)), None);
    }

    #[test]
    fn test_set_out_of_bounds_is_ignored() {
        let mut grid = Grid::new(3, 3, Tile::WALL);
        assert!(!grid.set((3, 0), Tile::EMPTY));
        assert!(!grid.set((u16::MAX, u16::MAX), Tile::EMPTY));
        assert!(grid.positions_of(Tile::EMPTY).next().is_none());
        assert!(grid.set((2, 2), Tile::EMPTY));
        assert_eq!(grid[(2, 2)], Tile::EMPTY);
    }

    #[test]
    fn test_neighbors_at_corner() {
        let grid = Grid::new(3, 3, Tile::WALL);
        let neighbors = grid.neighbors((0, 0)).collect::<Vec<_>>();
        assert_eq!(neighbors, vec![(1, 0), (0, 1)]);
        let neighbors = grid.neighbors((1, 1)).collect::<Vec<_>>();
        assert_eq!(neighbors, vec![(0, 1), (2, 1), (1, 0), (1, 2)]);
    }

    #[test]
    fn test_positions_of_is_row_major() {
        let mut grid = Grid::new(3, 3, Tile::WALL);
        grid[(2, 0)] = Tile::EMPTY;
        grid[(0, 1)] = Tile::EMPTY;
        grid[(1, 2)] = Tile::EMPTY;
        let found = grid.positions_of(Tile::EMPTY).collect::<Vec<_>>();
        assert_eq!(found, vec![(2, 0), (0, 1), (1, 2)]);
    }
}
