use rand::{Rng, seq::SliceRandom};

use crate::{
    generators::Edge,
    maze::{Cell, Maze},
};

/// Disjoint-set forest over lattice cells, indexed `row * cell_width + col`.
pub(crate) struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl UnionFind {
    /// Registers `size` singleton sets, each cell its own parent with rank zero.
    pub(crate) fn new(size: usize) -> Self {
        UnionFind {
            parent: (0..size).collect(),
            rank: vec![0; size],
        }
    }

    /// Returns the root of `x`, pointing every node on the way directly at it.
    pub(crate) fn find(&mut self, mut x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[x] != root {
            let next = self.parent[x];
            self.parent[x] = root;
            x = next;
        }

        root
    }

    /// Merges the sets of `x` and `y`. Returns `false` if they were already joined.
    pub(crate) fn unite(&mut self, x: usize, y: usize) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);

        if root_x == root_y {
            return false; // Already in same set
        }

        match self.rank[root_x].cmp(&self.rank[root_y]) {
            std::cmp::Ordering::Greater => {
                self.parent[root_y] = root_x;
            }
            std::cmp::Ordering::Less => {
                self.parent[root_x] = root_y;
            }
            std::cmp::Ordering::Equal => {
                self.parent[root_y] = root_x;
                self.rank[root_x] = self.rank[root_x].saturating_add(1);
            }
        }
        true
    }
}

/// Lists every lattice edge exactly once: each cell paired with its right and lower neighbor.
pub fn lattice_edges(cell_width: u16, cell_height: u16) -> Vec<Edge> {
    (0..cell_height)
        .flat_map(|row| (0..cell_width).map(move |col| (row, col)))
        .flat_map(|(row, col)| {
            [
                (col + 1 < cell_width).then(|| Edge {
                    cell1: (row, col),
                    cell2: (row, col + 1),
                }),
                (row + 1 < cell_height).then(|| Edge {
                    cell1: (row, col),
                    cell2: (row + 1, col),
                }),
            ]
        })
        .flatten()
        .collect()
}

/// Carves a random spanning tree over the maze's cell lattice.
///
/// Edges are shuffled, then each one that joins two disconnected components opens both
/// cells and the wall tile between them. Edges that would close a cycle are handed back,
/// in processing order, for loop injection.
pub fn randomized_kruskal<R: Rng + ?Sized>(mut maze: Maze, rng: &mut R) -> (Maze, Vec<Edge>) {
    let cell_width = maze.cell_width();
    let index = |cell: Cell| cell.0 as usize * cell_width as usize + cell.1 as usize;

    let mut uf = UnionFind::new(maze.cell_count());

    let mut edges = lattice_edges(cell_width, maze.cell_height());
    edges.shuffle(rng);
    let edge_count = edges.len();

    let mut rejected = Vec::new();
    for edge in edges {
        if uf.unite(index(edge.cell1), index(edge.cell2)) {
            maze.carve_cell(edge.cell1);
            maze.carve_cell(edge.cell2);
            maze.carve_wall_between(edge.cell1, edge.cell2);
        } else {
            rejected.push(edge);
        }
    }

    tracing::debug!(
        "[carve] {} cells, {} edges, {} opened, {} rejected",
        maze.cell_count(),
        edge_count,
        edge_count - rejected.len(),
        rejected.len()
    );
    (maze, rejected)
}
