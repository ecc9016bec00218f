//! Projectile system for fireballs.
//!
//! Each tick a projectile moves by its velocity and ages by one tick. It burns
//! out when its lifetime runs down or it ends up inside a wall. A live
//! projectile that touches an enemy damages that one enemy (the earliest
//! spawned, if several overlap) and is consumed.

use hecs::{Entity, World};
use rand::Rng;
use tracing::debug;

use crate::collision::overlaps_wall;
use crate::components::{Enemy, Health, Hitbox, Lifetime, Projectile, Velocity};
use crate::constants::PROJECTILE_HIT_PARTICLES;
use crate::events::{EventQueue, GameEvent};
use crate::grid::Grid;
use crate::queries;
use crate::spawning;

pub fn update_projectiles(
    world: &mut World,
    grid: &Grid,
    events: &mut EventQueue,
    rng: &mut impl Rng,
) {
    let projectiles = queries::ordered::<Projectile>(world);
    let enemies = queries::ordered::<Enemy>(world);

    for projectile in projectiles {
        let Ok((hitbox, velocity, lifetime, stats)) = world
            .query_one_mut::<(&mut Hitbox, &Velocity, &mut Lifetime, &Projectile)>(projectile)
        else {
            continue;
        };

        *hitbox = hitbox.translated(velocity.0);
        let mut burned_out = lifetime.tick();
        if overlaps_wall(hitbox, grid) {
            lifetime.expire();
            burned_out = true;
        }
        let (shot_box, damage) = (*hitbox, stats.damage);

        if burned_out {
            let _ = world.despawn(projectile);
            continue;
        }

        let Some((target, target_box)) = first_enemy_hit(world, &enemies, &shot_box) else {
            continue;
        };
        if let Ok(mut health) = world.get::<&mut Health>(target) {
            health.apply_damage(damage);
        }
        spawning::spawn_particles(world, target_box.center(), PROJECTILE_HIT_PARTICLES, rng);
        let _ = world.despawn(projectile);

        events.push(GameEvent::ProjectileHit {
            projectile,
            target,
            damage,
        });
        debug!(?target, damage, "projectile_hit");
    }
}

fn first_enemy_hit(world: &World, enemies: &[Entity], shot: &Hitbox) -> Option<(Entity, Hitbox)> {
    enemies.iter().find_map(|&enemy| {
        queries::get_hitbox(world, enemy)
            .filter(|h| h.intersects(shot))
            .map(|h| (enemy, h))
    })
}
