//! The built-in level templates.
//!
//! Each template keeps its hand-drawn layout. Randomized generation only reads the
//! layout's dimensions, while the number and time limit carry through to the result.

use super::LevelTemplate;

static LEVELS: [LevelTemplate; 10] = [
    LevelTemplate {
        number: 1,
        layout: &[
            "WWWWWWWWWW",
            "WP  W    W",
            "W W W WW W",
            "W W   W  W",
            "W WWW W WW",
            "W     W  W",
            "WWWWW WW W",
            "W        W",
            "W WWWWWWEW",
            "WWWWWWWWWW",
        ],
        time_limit: Some(60),
    },
    LevelTemplate {
        number: 2,
        layout: &[
            "WWWWWWWWWWWW",
            "WP W   W   W",
            "W  W W W W W",
            "WW W W   W W",
            "W    WWWWW W",
            "W WW       W",
            "W W  WWWWW W",
            "W   WW   W W",
            "WWW    W   W",
            "W   WW WWWEW",
            "WWWWWWWWWWWW",
        ],
        time_limit: Some(90),
    },
    LevelTemplate {
        number: 3,
        layout: &[
            "WWWWWWWWWWWWW",
            "WP   W   W  W",
            "WWWW W W W WW",
            "W    W W    W",
            "W WWWW WWWW W",
            "W         W W",
            "WWWWWW WW W W",
            "W      W  W W",
            "W WWWWWW WW W",
            "W          EW",
            "WWWWWWWWWWWWW",
        ],
        time_limit: Some(100),
    },
    LevelTemplate {
        number: 4,
        layout: &[
            "WWWWWWWWWWWWWW",
            "WP  W   W    W",
            "W W W W W WW W",
            "W W   W   W  W",
            "W WWWWW W W WW",
            "W       W    W",
            "WWW WWWWWWWW W",
            "W          W W",
            "W WWWWWW W W W",
            "W        W  EW",
            "WWWWWWWWWWWWWW",
        ],
        time_limit: Some(110),
    },
    LevelTemplate {
        number: 5,
        layout: &[
            "WWWWWWWWWWWWWWW",
            "WP            W",
            "W WWWWWWWWWWW W",
            "W W         W W",
            "W W WWWWWWW W W",
            "W W       W W W",
            "W W W WWW W W W",
            "W W W WE  W W W",
            "W W W WWW W W W",
            "W W W     W W W",
            "W W WWWWWWW W W",
            "W W           W",
            "W WWWWWWWWWWW W",
            "W             W",
            "WWWWWWWWWWWWWWW",
        ],
        time_limit: Some(120),
    },
    LevelTemplate {
        number: 6,
        layout: &[
            "WWWWWWWWWWWWWWW",
            "WP W   W   W  W",
            "WW W W W W W WW",
            "W  W W   W   WW",
            "W WW WWWWWWW  W",
            "W          W WW",
            "WWW WWW WW W  W",
            "W   W   W  WW W",
            "W WWW W W W   W",
            "W     W   W WWW",
            "WWWWW WWW W  EW",
            "WWWWWWWWWWWWWWW",
        ],
        time_limit: Some(130),
    },
    LevelTemplate {
        number: 7,
        layout: &[
            "WWWWWWWWWWWWWWWW",
            "WP             W",
            "WWWWWWWWWWWWWW W",
            "W              W",
            "W WWWWWWWWWWWWWW",
            "W              W",
            "WWWWWWWWWWWWWW W",
            "W              W",
            "W WWWWWWWWWWWWWW",
            "W             EW",
            "WWWWWWWWWWWWWWWW",
        ],
        time_limit: Some(140),
    },
    LevelTemplate {
        number: 8,
        layout: &[
            "WWWWWWWWWWWWWWWW",
            "WP   W     W   W",
            "WWWW W WWW W WWW",
            "W    W W   W   W",
            "W WWWW W WWWWW W",
            "W      W     W W",
            "WWWWWW WWWWW W W",
            "W    W     W W W",
            "W WW WWWWW W W W",
            "W W          W W",
            "W W WWWWWWWWWW W",
            "W             EW",
            "WWWWWWWWWWWWWWWW",
        ],
        time_limit: Some(150),
    },
    LevelTemplate {
        number: 9,
        layout: &[
            "WWWWWWWWWWWWWWWWW",
            "WP W   W   W    W",
            "W  W W W W W WW W",
            "WW W W   W   W  W",
            "W  W WWWWWWW W WW",
            "W WW       W    W",
            "W    WWWWW WWWW W",
            "WWWW W   W    W W",
            "W    W W WWWW W W",
            "W WWWW W    W W W",
            "W      WWWW W   W",
            "WWWWWW    W WWW W",
            "W      WW W    EW",
            "WWWWWWWWWWWWWWWWW",
        ],
        time_limit: Some(160),
    },
    LevelTemplate {
        number: 10,
        layout: &[
            "WWWWWWWWWWWWWWWWWW",
            "WP   W     W   W W",
            "WWWW W WWW W W W W",
            "W    W W     W   W",
            "W WWWW W WWWWWWW W",
            "W      W       W W",
            "WWW WWWWWWWWWW W W",
            "W   W        W W W",
            "W WWW WWWWWW W W W",
            "W     W    W   W W",
            "WWWWW W WW WWWWW W",
            "W   W   W        W",
            "W W WWWWW WWWWWWWW",
            "W W             EW",
            "WWWWWWWWWWWWWWWWWW",
        ],
        time_limit: Some(180),
    },
];

/// Number of levels in the catalog.
pub fn level_count() -> u32 {
    LEVELS.len() as u32
}

/// Get the template for a level number (1-based).
pub fn get_level(level_number: u32) -> Option<&'static LevelTemplate> {
    level_number
        .checked_sub(1)
        .and_then(|idx| LEVELS.get(idx as usize))
}

/// All templates, in level order.
pub fn all_levels() -> &'static [LevelTemplate] {
    &LEVELS
}
