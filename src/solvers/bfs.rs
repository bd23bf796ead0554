use std::collections::{HashMap, HashSet, VecDeque};

use crate::maze::Grid;

/// Flood-fills the grid from `start` with 4-directional moves.
///
/// Walls and every coordinate in `blocked` are impassable. The start tile is always part
/// of the result, even when it is itself blocked or a wall.
pub fn reachable_tiles(
    grid: &Grid,
    start: (u16, u16),
    blocked: &HashSet<(u16, u16)>,
) -> HashSet<(u16, u16)> {
    let mut visited = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);

    while let Some(current) = queue.pop_front() {
        for neighbor in grid.neighbors(current) {
            if grid[neighbor].is_open()
                && !blocked.contains(&neighbor)
                && visited.insert(neighbor)
            {
                queue.push_back(neighbor);
            }
        }
    }

    visited
}

/// Finds a shortest route from `start` to `goal`, both ends included.
///
/// Uses the same passability rules as [`reachable_tiles`]. Returns `None` if `goal` cannot
/// be reached.
pub fn shortest_route(
    grid: &Grid,
    start: (u16, u16),
    goal: (u16, u16),
    blocked: &HashSet<(u16, u16)>,
) -> Option<Vec<(u16, u16)>> {
    // Maps each discovered tile to the tile it was reached from
    let mut parents: HashMap<(u16, u16), Option<(u16, u16)>> = HashMap::from([(start, None)]);
    let mut queue = VecDeque::from([start]);

    while let Some(current) = queue.pop_front() {
        if current == goal {
            // Backtrack to recover the route
            let mut route = vec![current];
            let mut child = current;
            while let Some(&Some(parent)) = parents.get(&child) {
                route.push(parent);
                child = parent;
            }
            route.reverse();
            return Some(route);
        }

        for neighbor in grid.neighbors(current) {
            if grid[neighbor].is_open()
                && !blocked.contains(&neighbor)
                && !parents.contains_key(&neighbor)
            {
                parents.insert(neighbor, Some(current));
                queue.push_back(neighbor);
            }
        }
    }

    None // No route found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::Tile;

    /// Builds a grid from layout rows.
    fn grid_from(rows: &[&str]) -> Grid {
        let mut grid = Grid::new(rows[0].len() as u16, rows.len() as u16, Tile::WALL);
        for (y, row) in rows.iter().enumerate() {
            for (x, symbol) in row.chars().enumerate() {
                grid[(x as u16, y as u16)] = Tile::from_symbol(symbol).unwrap();
            }
        }
        grid
    }

    #[test]
    fn test_reachable_respects_walls() {
        let grid = grid_from(&[
            "WWWWWWW", //
            "W  W  W", //
            "WWWWWWW", //
        ]);
        let reachable = reachable_tiles(&grid, (1, 1), &HashSet::new());
        assert_eq!(reachable, HashSet::from([(1, 1), (2, 1)]));
    }

    #[test]
    fn test_reachable_respects_blocked_tiles() {
        let grid = grid_from(&[
            "WWWWWWW", //
            "W     W", //
            "WWWWWWW", //
        ]);
        let blocked = HashSet::from([(3, 1)]);
        let reachable = reachable_tiles(&grid, (1, 1), &blocked);
        assert_eq!(reachable, HashSet::from([(1, 1), (2, 1)]));
        assert_eq!(reachable_tiles(&grid, (1, 1), &HashSet::new()).len(), 5);
    }

    #[test]
    fn test_reachable_at_grid_edge() {
        // Open tiles on the boundary must not step outside the grid
        let grid = grid_from(&[
            "  ", //
            " W", //
        ]);
        let reachable = reachable_tiles(&grid, (0, 0), &HashSet::new());
        assert_eq!(reachable, HashSet::from([(0, 0), (1, 0), (0, 1)]));
    }

    #[test]
    fn test_start_is_always_included() {
        let grid = grid_from(&["WWW", "WWW", "WWW"]);
        let reachable = reachable_tiles(&grid, (1, 1), &HashSet::new());
        assert_eq!(reachable, HashSet::from([(1, 1)]));
    }

    #[test]
    fn test_shortest_route_takes_the_loop_shortcut() {
        let grid = grid_from(&[
            "WWWWWWW", //
            "W     W", //
            "W WWW W", //
            "W     W", //
            "WWWWWWW", //
        ]);
        let route = shortest_route(&grid, (1, 1), (5, 1), &HashSet::new()).unwrap();
        assert_eq!(route.len(), 5);
        assert_eq!(route.first(), Some(&(1, 1)));
        assert_eq!(route.last(), Some(&(5, 1)));

        // Block the top corridor and the route goes around the bottom
        let blocked = HashSet::from([(3, 1)]);
        let route = shortest_route(&grid, (1, 1), (5, 1), &blocked).unwrap();
        assert_eq!(route.len(), 9);
        assert!(!route.contains(&(3, 1)));
    }

    #[test]
    fn test_shortest_route_unreachable() {
        let grid = grid_from(&[
            "WWWWW", //
            "W W W", //
            "WWWWW", //
        ]);
        assert_eq!(shortest_route(&grid, (1, 1), (3, 1), &HashSet::new()), None);
        assert_eq!(
            shortest_route(&grid, (1, 1), (1, 1), &HashSet::new()),
            Some(vec![(1, 1)])
        );
    }
}
