//! Combat system functions.

use hecs::{Entity, World};
use rand::Rng;
use tracing::debug;

use crate::components::{AttackCooldown, Enemy, Facing, Health, Hitbox, Invincibility};
use crate::constants::*;
use crate::events::{EventQueue, GameEvent};
use crate::queries;
use crate::spawning::{self, SpawnCounter};
use crate::vfx::ScreenShake;

/// Swing at the tile in front of the player.
///
/// Every enemy overlapping the attack box is hit. Returns false when the
/// cooldown has not run out.
pub fn melee_attack(
    world: &mut World,
    player: Entity,
    shake: &mut ScreenShake,
    events: &mut EventQueue,
    rng: &mut impl Rng,
) -> bool {
    let Ok((hitbox, facing, cooldown)) =
        world.query_one_mut::<(&Hitbox, &Facing, &mut AttackCooldown)>(player)
    else {
        return false;
    };
    if !cooldown.is_ready() {
        return false;
    }
    cooldown.ticks = MELEE_COOLDOWN;
    cooldown.attacking = true;
    let attack_box = Hitbox::square(hitbox.pos + facing.0 * TILE_SIZE, TILE_SIZE);

    let targets: Vec<(Entity, Hitbox)> = queries::ordered::<Enemy>(world)
        .into_iter()
        .filter_map(|enemy| queries::get_hitbox(world, enemy).map(|h| (enemy, h)))
        .filter(|(_, h)| h.intersects(&attack_box))
        .collect();

    for (target, target_box) in targets {
        if let Ok(mut health) = world.get::<&mut Health>(target) {
            health.apply_damage(MELEE_DAMAGE);
        }
        shake.trigger(SHAKE_ON_MELEE_HIT);
        spawning::spawn_particles(world, target_box.center(), MELEE_HIT_PARTICLES, rng);
        events.push(GameEvent::MeleeHit {
            target,
            damage: MELEE_DAMAGE,
        });
        debug!(?target, damage = MELEE_DAMAGE, "melee_hit");
    }
    true
}

/// Launch a fireball from the player's center in the facing direction.
///
/// Returns false when the cooldown has not run out.
pub fn ranged_attack(world: &mut World, player: Entity, counter: &mut SpawnCounter) -> bool {
    let Ok((hitbox, facing, cooldown)) =
        world.query_one_mut::<(&Hitbox, &Facing, &mut AttackCooldown)>(player)
    else {
        return false;
    };
    if !cooldown.is_ready() {
        return false;
    }
    cooldown.ticks = RANGED_COOLDOWN;
    let (origin, direction) = (hitbox.center(), facing.0);

    spawning::spawn_projectile(world, origin, direction, counter.next());
    true
}

/// Hurt the player unless its invincibility window is open.
///
/// A hit that lands opens a fresh window and shakes the screen.
/// Returns whether damage was applied.
pub fn damage_player(
    world: &mut World,
    player: Entity,
    amount: i32,
    shake: &mut ScreenShake,
    events: &mut EventQueue,
) -> bool {
    let Ok((health, invincibility)) =
        world.query_one_mut::<(&mut Health, &mut Invincibility)>(player)
    else {
        return false;
    };
    if invincibility.is_active() {
        return false;
    }

    health.apply_damage(amount);
    invincibility.ticks = INVINCIBILITY_TICKS;
    shake.trigger(SHAKE_ON_PLAYER_HIT);
    events.push(GameEvent::PlayerDamaged {
        amount,
        remaining: health.current,
    });
    true
}

/// Heal the player, capped at max health. Returns the amount actually restored.
pub fn heal_player(world: &mut World, player: Entity, amount: i32) -> i32 {
    let Ok(mut health) = world.get::<&mut Health>(player) else {
        return 0;
    };
    let before = health.current;
    health.heal(amount);
    health.current - before
}
