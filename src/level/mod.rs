pub mod catalog;
mod planner;

use std::{collections::HashSet, fmt, io::Write};

use crossterm::{
    queue,
    style::{self, Color, Stylize},
};

use crate::maze::{Maze, Tile};

pub use planner::{create_randomized_level, generate_from_template, generate_level, plan_level};

/// A hand-authored level as supplied by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelTemplate {
    pub number: u32,
    /// Layout rows using the tile symbols `W`, ` `, `P` and `E`.
    pub layout: &'static [&'static str],
    /// Time limit in seconds, if the level is timed.
    pub time_limit: Option<u32>,
}

impl LevelTemplate {
    /// Number of layout rows.
    pub fn height(&self) -> usize {
        self.layout.len()
    }

    /// Number of tiles in the first layout row.
    pub fn width(&self) -> usize {
        self.layout.first().map_or(0, |row| row.chars().count())
    }
}

/// A generated level: the carved grid plus start, exit, obstacles and collectibles.
///
/// Start and exit are written into the grid. Obstacles and collectibles are kept as
/// coordinate lists, in placement order, layered over path tiles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelDescriptor {
    number: u32,
    maze: Maze,
    start: (u16, u16),
    exit: (u16, u16),
    obstacles: Vec<(u16, u16)>,
    collectibles: Vec<(u16, u16)>,
    time_limit: Option<u32>,
}

impl LevelDescriptor {
    pub(crate) fn new(
        number: u32,
        maze: Maze,
        start: (u16, u16),
        exit: (u16, u16),
        obstacles: Vec<(u16, u16)>,
        collectibles: Vec<(u16, u16)>,
        time_limit: Option<u32>,
    ) -> Self {
        LevelDescriptor {
            number,
            maze,
            start,
            exit,
            obstacles,
            collectibles,
            time_limit,
        }
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn width(&self) -> u16 {
        self.maze.width()
    }

    pub fn height(&self) -> u16 {
        self.maze.height()
    }

    pub fn start(&self) -> (u16, u16) {
        self.start
    }

    pub fn exit(&self) -> (u16, u16) {
        self.exit
    }

    pub fn obstacles(&self) -> &[(u16, u16)] {
        &self.obstacles
    }

    pub fn collectibles(&self) -> &[(u16, u16)] {
        &self.collectibles
    }

    pub fn time_limit(&self) -> Option<u32> {
        self.time_limit
    }

    /// The obstacle coordinates as a set, ready to pass as the blocked set of a solver.
    pub fn obstacle_set(&self) -> HashSet<(u16, u16)> {
        self.obstacles.iter().copied().collect()
    }

    /// The tile at `coord` with obstacle and collectible markers applied.
    /// Anything outside the grid reads as a wall.
    pub fn tile_at(&self, coord: (u16, u16)) -> Tile {
        match self.maze.tile(coord) {
            None => Tile::WALL,
            Some(_) if self.obstacles.contains(&coord) => Tile::OBSTACLE,
            Some(_) if self.collectibles.contains(&coord) => Tile::COLLECTIBLE,
            Some(tile) => tile,
        }
    }

    /// Whether a player could stand on `coord`, ignoring obstacles.
    pub fn is_walkable(&self, coord: (u16, u16)) -> bool {
        self.maze.tile(coord).is_some_and(|tile| tile.is_open())
    }

    pub fn is_exit(&self, coord: (u16, u16)) -> bool {
        coord == self.exit
    }

    /// The level as layout rows, one symbol per tile.
    pub fn to_text_rows(&self) -> Vec<String> {
        (0..self.height())
            .map(|y| {
                (0..self.width())
                    .map(|x| self.tile_at((x, y)).symbol())
                    .collect()
            })
            .collect()
    }

    /// Queues the styled level onto `out`, one line per tile row.
    pub fn render(&self, out: &mut impl Write) -> std::io::Result<()> {
        self.render_with_route(out, &[])
    }

    /// Like [`render`](Self::render), additionally marking the plain path tiles of `route`.
    pub fn render_with_route(
        &self,
        out: &mut impl Write,
        route: &[(u16, u16)],
    ) -> std::io::Result<()> {
        for y in 0..self.height() {
            for x in 0..self.width() {
                let tile = self.tile_at((x, y));
                if tile == Tile::EMPTY && route.contains(&(x, y)) {
                    queue!(out, style::PrintStyledContent("··".with(Color::Yellow)))?;
                } else {
                    queue!(out, style::Print(tile))?;
                }
            }
            queue!(out, style::Print("\r\n"))?;
        }
        out.flush()
    }
}

impl fmt::Display for LevelDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.to_text_rows() {
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}
