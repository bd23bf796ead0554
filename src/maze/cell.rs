use crossterm::style::{Color, Stylize};

use std::fmt;

/// A single tile of the maze grid, which can be either walkable or a wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    Path(PathType),
    Wall,
}

impl Tile {
    pub const EMPTY: Tile = Tile::Path(PathType::Empty);
    pub const WALL: Tile = Tile::Wall;
    pub const START: Tile = Tile::Path(PathType::Start);
    pub const EXIT: Tile = Tile::Path(PathType::Exit);
    pub const OBSTACLE: Tile = Tile::Path(PathType::Obstacle);
    pub const COLLECTIBLE: Tile = Tile::Path(PathType::Collectible);
    /// The width of each tile when rendered, in character widths.
    pub const TILE_WIDTH: u16 = 2;

    /// Whether the tile is anything but a wall.
    pub fn is_open(&self) -> bool {
        matches!(self, Tile::Path(_))
    }

    /// The single-character symbol used by level layouts.
    pub fn symbol(&self) -> char {
        match self {
            Tile::Wall => 'W',
            Tile::Path(path) => match path {
                PathType::Empty => ' ',
                PathType::Start => 'P',
                PathType::Exit => 'E',
                PathType::Obstacle => 'O',
                PathType::Collectible => 'C',
            },
        }
    }

    /// Parses a layout symbol. Unknown symbols yield `None`.
    pub fn from_symbol(symbol: char) -> Option<Tile> {
        match symbol {
            'W' => Some(Tile::WALL),
            ' ' => Some(Tile::EMPTY),
            'P' => Some(Tile::START),
            'E' => Some(Tile::EXIT),
            'O' => Some(Tile::OBSTACLE),
            'C' => Some(Tile::COLLECTIBLE),
            _ => None,
        }
    }
}

/// Represents the different kinds of walkable tiles.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathType {
    /// A plain carved passage.
    #[default]
    Empty,
    /// Where the player spawns.
    Start,
    /// The level exit.
    Exit,
    /// Blocking obstacle marker, layered over a path tile.
    Obstacle,
    /// Collectible item marker, layered over a path tile.
    Collectible,
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let styled_symbol = match self {
            Tile::Path(path) => match path {
                PathType::Empty => "  ".with(Color::Reset),
                PathType::Start => "🟦".with(Color::Blue),
                PathType::Exit => "🟩".with(Color::Green),
                PathType::Obstacle => "🟥".with(Color::Red),
                PathType::Collectible => "🟡".with(Color::Yellow),
            },
            Tile::Wall => "⬜".with(Color::DarkGrey),
        };

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthStr;
            assert_eq!(
                styled_symbol.content().width(),
                Tile::TILE_WIDTH as usize,
                "Each tile must occupy exactly two character widths."
            );
        }

        write!(f, "{}", styled_symbol)
    }
}
