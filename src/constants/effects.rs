//! Cosmetic particle parameters.

/// Particles spawned on an enemy hit by a melee swing
pub const MELEE_HIT_PARTICLES: usize = 5;
/// Particles spawned on an enemy hit by a fireball
pub const PROJECTILE_HIT_PARTICLES: usize = 3;
/// Maximum particle speed on each axis (world units per tick)
pub const PARTICLE_MAX_SPEED: f32 = 3.0;
/// Shortest particle life in ticks
pub const PARTICLE_MIN_LIFE: u32 = 10;
/// Longest particle life in ticks
pub const PARTICLE_MAX_LIFE: u32 = 20;
/// Smallest particle size in world units
pub const PARTICLE_MIN_SIZE: f32 = 2.0;
/// Largest particle size in world units
pub const PARTICLE_MAX_SIZE: f32 = 5.0;
/// Size lost per tick
pub const PARTICLE_SHRINK: f32 = 0.1;
