use std::collections::{HashSet, VecDeque};

use rand::{Rng, seq::SliceRandom};

use crate::{
    config::GeneratorConfig,
    error::GenerationError,
    generators::generate_maze,
    level::{LevelDescriptor, LevelTemplate, catalog},
    maze::{Grid, Maze, Tile},
    solvers::reachable_tiles,
};

/// Generates a fresh randomized level for a catalog level number, seeding from `config`.
pub fn generate_level(
    level_number: u32,
    config: &GeneratorConfig,
) -> Result<LevelDescriptor, GenerationError> {
    let mut rng = config.rng();
    create_randomized_level(level_number, config, &mut rng)
}

/// Generates a fresh randomized level for a catalog level number.
///
/// Returns [`GenerationError::LevelOutOfRange`] for numbers outside the catalog.
pub fn create_randomized_level<R: Rng + ?Sized>(
    level_number: u32,
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<LevelDescriptor, GenerationError> {
    let template =
        catalog::get_level(level_number).ok_or_else(|| GenerationError::LevelOutOfRange {
            level: level_number,
            count: catalog::level_count(),
        })?;
    generate_from_template(template, config, rng)
}

/// Generates a brand-new layout sized like `template`.
///
/// Only the template's dimensions, number and time limit are used.
pub fn generate_from_template<R: Rng + ?Sized>(
    template: &LevelTemplate,
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<LevelDescriptor, GenerationError> {
    config.validate()?;

    let (width, height) = (template.width(), template.height());
    if width == 0 || height == 0 {
        return Err(GenerationError::EmptyTemplate {
            level: template.number,
        });
    }
    let (Ok(tile_width), Ok(tile_height)) = (u16::try_from(width), u16::try_from(height)) else {
        return Err(GenerationError::TemplateTooLarge { width, height });
    };

    let maze = generate_maze(tile_width, tile_height, config.loop_probability, rng)?;
    plan_level(maze, template.number, template.time_limit, rng)
}

/// Places start, exit, obstacles and collectibles on a carved maze.
///
/// Start and exit are the first and last path tiles in row-major order. The remaining
/// path tiles are shuffled into a candidate pool. `level_number / 3` obstacles are then
/// committed one at a time, each only if the exit stays reachable, and finally up to
/// `1 + level_number / 2` collectibles are drawn from the tiles still reachable.
/// Falling short of either count is not an error.
///
/// Fails if the grid already carries markers, or if the exit is not connected to the start.
pub fn plan_level<R: Rng + ?Sized>(
    mut maze: Maze,
    level_number: u32,
    time_limit: Option<u32>,
    rng: &mut R,
) -> Result<LevelDescriptor, GenerationError> {
    let grid = maze.grid();
    if let Some(coord) = (0..grid.height())
        .flat_map(|y| (0..grid.width()).map(move |x| (x, y)))
        .find(|&coord| grid[coord] != Tile::WALL && grid[coord] != Tile::EMPTY)
    {
        return Err(GenerationError::MarkersAlreadyPlaced(grid[coord], coord));
    }

    let mut path_tiles = maze.grid().positions_of(Tile::EMPTY).collect::<Vec<_>>();
    if path_tiles.len() < 2 {
        return Err(GenerationError::NoPathTiles);
    }

    let start = path_tiles.remove(0);
    let Some(exit) = path_tiles.pop() else {
        return Err(GenerationError::NoPathTiles);
    };
    maze.set_tile(start, Tile::START);
    maze.set_tile(exit, Tile::EXIT);

    if !reachable_tiles(maze.grid(), start, &HashSet::new()).contains(&exit) {
        return Err(GenerationError::UnreachableExit { start, exit });
    }

    path_tiles.shuffle(rng);
    let mut pool = VecDeque::from(path_tiles);

    let num_obstacles = (level_number / 3) as usize;
    let num_collectibles = 1 + (level_number / 2) as usize;

    let obstacles = place_obstacles(maze.grid(), start, exit, &mut pool, num_obstacles);
    let collectibles = place_collectibles(
        maze.grid(),
        start,
        exit,
        &pool,
        &obstacles,
        num_collectibles,
        rng,
    );

    tracing::info!(
        "[planner] level {}: {}x{} grid, {}/{} obstacles, {}/{} collectibles",
        level_number,
        maze.width(),
        maze.height(),
        obstacles.len(),
        num_obstacles,
        collectibles.len(),
        num_collectibles
    );

    Ok(LevelDescriptor::new(
        level_number,
        maze,
        start,
        exit,
        obstacles,
        collectibles,
        time_limit,
    ))
}

/// Commits up to `target` obstacles taken from the front of `pool`.
///
/// A candidate that would cut the exit off is rotated to the back of the pool. Once a full
/// pass over the pool finds nothing committable, the remaining slots are abandoned.
fn place_obstacles(
    grid: &Grid,
    start: (u16, u16),
    exit: (u16, u16),
    pool: &mut VecDeque<(u16, u16)>,
    target: usize,
) -> Vec<(u16, u16)> {
    let mut obstacles = Vec::with_capacity(target);
    let mut blocked = HashSet::with_capacity(target);

    'slots: for _ in 0..target {
        for _ in 0..pool.len() {
            let Some(candidate) = pool.pop_front() else {
                break;
            };
            blocked.insert(candidate);
            if reachable_tiles(grid, start, &blocked).contains(&exit) {
                obstacles.push(candidate);
                continue 'slots;
            }
            blocked.remove(&candidate);
            pool.push_back(candidate);
        }

        tracing::debug!(
            "[planner] no candidate keeps the exit reachable, stopping at {} of {} obstacles",
            obstacles.len(),
            target
        );
        break;
    }

    obstacles
}

/// Draws up to `target` collectibles from the pool tiles reachable past the obstacles.
fn place_collectibles<R: Rng + ?Sized>(
    grid: &Grid,
    start: (u16, u16),
    exit: (u16, u16),
    pool: &VecDeque<(u16, u16)>,
    obstacles: &[(u16, u16)],
    target: usize,
    rng: &mut R,
) -> Vec<(u16, u16)> {
    let blocked = obstacles.iter().copied().collect::<HashSet<_>>();
    let reachable = reachable_tiles(grid, start, &blocked);

    let mut candidates = pool
        .iter()
        .copied()
        .filter(|&c| c != start && c != exit && !blocked.contains(&c) && reachable.contains(&c))
        .collect::<Vec<_>>();
    candidates.shuffle(rng);

    if candidates.len() < target {
        tracing::debug!(
            "[planner] only {} reachable tiles for {} collectibles",
            candidates.len(),
            target
        );
    }
    candidates.truncate(target);
    candidates
}
