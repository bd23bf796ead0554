use rand::Rng;

pub mod kruskal;
pub mod loops;

pub use kruskal::{lattice_edges, randomized_kruskal};
pub use loops::inject_loops;

use crate::{
    config::check_loop_probability,
    error::GenerationError,
    maze::{Cell, Maze},
};

/// Wall edge between two lattice-adjacent cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub cell1: Cell,
    pub cell2: Cell,
}

/// Builds a fresh maze: a random spanning tree over the lattice, then extra loops.
///
/// Tile dimensions are normalized to odd values. Fails when the lattice is too small to
/// hold two cells or `loop_probability` is outside [0, 1].
pub fn generate_maze<R: Rng + ?Sized>(
    tile_width: u16,
    tile_height: u16,
    loop_probability: f64,
    rng: &mut R,
) -> Result<Maze, GenerationError> {
    check_loop_probability(loop_probability)?;
    let maze = Maze::new(tile_width, tile_height)?;
    let (maze, rejected) = randomized_kruskal(maze, rng);
    let (maze, _) = inject_loops(maze, rejected, loop_probability, rng);
    Ok(maze)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{maze::Tile, solvers::reachable_tiles};
    use rand::{SeedableRng, rngs::StdRng};
    use std::collections::HashSet;

    #[test]
    fn test_generated_maze_is_connected() {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let maze = generate_maze(19, 13, 0.25, &mut rng).unwrap();
            let open = maze.grid().positions_of(Tile::EMPTY).collect::<HashSet<_>>();
            let start = *open.iter().next().unwrap();
            let reachable = reachable_tiles(maze.grid(), start, &HashSet::new());
            assert_eq!(reachable, open, "seed {seed} left an unreachable pocket");
        }
    }

    #[test]
    fn test_same_seed_same_maze() {
        let a = generate_maze(25, 25, 0.25, &mut StdRng::seed_from_u64(99)).unwrap();
        let b = generate_maze(25, 25, 0.25, &mut StdRng::seed_from_u64(99)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_rejects_bad_input() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            generate_maze(11, 11, 1.5, &mut rng),
            Err(GenerationError::InvalidLoopProbability(1.5))
        );
        assert!(matches!(
            generate_maze(11, 11, f64::NAN, &mut rng),
            Err(GenerationError::InvalidLoopProbability(_))
        ));
        assert!(matches!(
            generate_maze(2, 2, 0.25, &mut rng),
            Err(GenerationError::LatticeTooSmall { .. })
        ));
    }
}
