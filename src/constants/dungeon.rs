//! Dungeon generation and placement constants.

/// Side length of one square tile in world units
pub const TILE_SIZE: f32 = 32.0;
/// Default dungeon width in tiles
pub const DUNGEON_DEFAULT_WIDTH: usize = 50;
/// Default dungeon height in tiles
pub const DUNGEON_DEFAULT_HEIGHT: usize = 50;
/// Default number of floor tiles the drunkard's walk carves (~32% of 50x50)
pub const DUNGEON_DEFAULT_FLOOR_TILES: usize = 800;
/// Smallest map side that still leaves a carvable interior
pub const DUNGEON_MIN_SIDE: usize = 3;

/// Enemies must be more than this many tiles from the start on some axis
pub const ENEMY_MIN_START_DISTANCE: i32 = 5;
/// The exit must be more than this many tiles from the start on some axis
pub const EXIT_MIN_START_DISTANCE: i32 = 10;
/// Rejection-sampling tries per entity before enumerating candidates
pub const PLACEMENT_DEFAULT_ATTEMPTS: u32 = 10_000;
