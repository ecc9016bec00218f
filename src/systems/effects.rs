//! Cosmetic particle lifecycle.
//!
//! Particles never interact with anything; they drift, shrink and disappear.

use hecs::{Entity, World};

use crate::components::{Lifetime, Particle};
use crate::constants::PARTICLE_SHRINK;

pub fn update_particles(world: &mut World) {
    let mut finished: Vec<Entity> = Vec::new();
    for (entity, (particle, lifetime)) in world.query_mut::<(&mut Particle, &mut Lifetime)>() {
        particle.pos += particle.velocity;
        particle.size = (particle.size - PARTICLE_SHRINK).max(0.0);
        if lifetime.tick() || particle.size <= 0.0 {
            finished.push(entity);
        }
    }
    for entity in finished {
        let _ = world.despawn(entity);
    }
}
