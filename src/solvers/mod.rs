mod bfs;

pub use bfs::{reachable_tiles, shortest_route};
