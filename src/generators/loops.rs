use rand::Rng;

use crate::{generators::Edge, maze::Maze};

/// Reopens a random share of the walls the spanning tree kept, turning the perfect maze
/// into one with alternate routes.
///
/// `floor(rejected.len() * loop_probability)` edges are drawn uniformly without replacement
/// and their wall tile is carved. Returns the maze along with the number of loops opened.
pub fn inject_loops<R: Rng + ?Sized>(
    mut maze: Maze,
    mut rejected: Vec<Edge>,
    loop_probability: f64,
    rng: &mut R,
) -> (Maze, usize) {
    let num_loops = (rejected.len() as f64 * loop_probability).floor() as usize;

    let mut opened = 0;
    for _ in 0..num_loops {
        if rejected.is_empty() {
            break;
        }
        let idx = rng.random_range(0..rejected.len());
        let edge = rejected.swap_remove(idx);
        maze.carve_wall_between(edge.cell1, edge.cell2);
        opened += 1;
    }

    tracing::debug!(
        "[loops] opened {} of {} candidate walls (p = {})",
        opened,
        opened + rejected.len(),
        loop_probability
    );
    (maze, opened)
}
