//! Core gameplay constants (player stats).

/// Player's starting and maximum health
pub const PLAYER_MAX_HEALTH: i32 = 100;
/// Player movement speed in world units per tick
pub const PLAYER_SPEED: f32 = 5.0;
/// Dungeon level a fresh player starts on
pub const PLAYER_START_LEVEL: u32 = 1;
/// Health below which the HUD shows a warning
pub const LOW_HEALTH_THRESHOLD: i32 = 30;
