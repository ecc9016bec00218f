//! Combat system constants.

/// Damage dealt to every enemy inside the melee attack box
pub const MELEE_DAMAGE: i32 = 3;
/// Cooldown (ticks) after a melee swing
pub const MELEE_COOLDOWN: u32 = 20;
/// Cooldown (ticks) after casting a fireball
pub const RANGED_COOLDOWN: u32 = 30;
/// The attacking flag clears once the cooldown drops below this
pub const ATTACK_DISPLAY_THRESHOLD: u32 = 10;

/// Damage a fireball deals to the first enemy it touches
pub const PROJECTILE_DAMAGE: i32 = 2;
/// Fireball speed as a multiple of the facing unit vector
pub const PROJECTILE_SPEED: f32 = 8.0;
/// Fireball lifetime in ticks
pub const PROJECTILE_LIFETIME: u32 = 60;
/// Fireball hitbox side in world units
pub const PROJECTILE_SIZE: f32 = 16.0;

/// Ticks of invincibility after the player takes damage
pub const INVINCIBILITY_TICKS: u32 = 60;
/// Shake magnitude when the player is hurt
pub const SHAKE_ON_PLAYER_HIT: u32 = 10;
/// Shake magnitude when a melee swing connects
pub const SHAKE_ON_MELEE_HIT: u32 = 2;
