//! Player movement and per-tick timers.

use glam::Vec2;
use hecs::{Entity, World};

use crate::collision::move_with_resolution;
use crate::components::{AttackCooldown, Facing, Hitbox, Invincibility, Speed};
use crate::constants::ATTACK_DISPLAY_THRESHOLD;
use crate::grid::Grid;
use crate::input::MoveIntent;

/// Move the player along `intent`, then count down its cooldown and invincibility.
///
/// Facing only changes for a non-idle intent, so the last direction sticks
/// while standing still.
pub fn move_player(world: &mut World, grid: &Grid, player: Entity, intent: MoveIntent) {
    let Ok((hitbox, speed, facing, cooldown, invincibility)) = world.query_one_mut::<(
        &mut Hitbox,
        &Speed,
        &mut Facing,
        &mut AttackCooldown,
        &mut Invincibility,
    )>(player) else {
        return;
    };

    let axis = intent.axis();
    if axis != Vec2::ZERO {
        facing.0 = axis;
    }
    *hitbox = move_with_resolution(*hitbox, axis * speed.0, grid);

    if cooldown.ticks > 0 {
        cooldown.ticks -= 1;
        if cooldown.ticks < ATTACK_DISPLAY_THRESHOLD {
            cooldown.attacking = false;
        }
    }
    invincibility.ticks = invincibility.ticks.saturating_sub(1);
}
