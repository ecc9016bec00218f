//! Enemy stats and spawning constants.

/// Enemies spawned on every level before level scaling
pub const ENEMY_BASE_COUNT: usize = 5;
/// Extra enemies per dungeon level
pub const ENEMY_COUNT_PER_LEVEL: usize = 2;

/// Enemy health before level scaling
pub const ENEMY_BASE_HEALTH: i32 = 3;
/// Extra enemy health per dungeon level
pub const ENEMY_HEALTH_PER_LEVEL: i32 = 2;

/// Contact damage before level scaling
pub const ENEMY_BASE_DAMAGE: i32 = 10;
/// Extra contact damage per dungeon level
pub const ENEMY_DAMAGE_PER_LEVEL: i32 = 2;

/// Slowest enemy speed (world units per tick)
pub const ENEMY_SPEED_MIN: f32 = 1.5;
/// Fastest enemy speed (world units per tick), exclusive
pub const ENEMY_SPEED_MAX: f32 = 2.5;

/// Enemies only chase a player closer than this (world units)
pub const ENEMY_CHASE_RADIUS: f32 = 400.0;

/// Probability that a dying enemy leaves a healing potion
pub const ENEMY_DROP_CHANCE: f64 = 0.3;
