//! Game systems organized by domain.
//!
//! Each submodule owns one step of the tick:
//! - `movement`: player movement and per-tick timers
//! - `combat`: melee, fireballs, damage and healing
//! - `projectile`: fireball flight and hits
//! - `ai`: enemy chase, contact damage and death
//! - `items`: pickup bob and collection
//! - `effects`: particle lifecycle

pub mod ai;
pub mod combat;
pub mod effects;
pub mod items;
pub mod movement;
pub mod projectile;

// Re-export commonly used items
pub use ai::{update_enemies, EnemyContext};
pub use combat::{damage_player, heal_player, melee_attack, ranged_attack};
pub use effects::update_particles;
pub use items::update_items;
pub use movement::move_player;
pub use projectile::update_projectiles;
