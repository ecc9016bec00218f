//! Enemy behavior: chase, contact damage, death and loot drops.

use hecs::{Entity, World};
use rand::Rng;
use tracing::debug;

use crate::collision::move_with_resolution;
use crate::components::{Enemy, Health, Hitbox, ItemKind, Speed};
use crate::constants::{ENEMY_CHASE_RADIUS, ENEMY_DROP_CHANCE};
use crate::events::{EventQueue, GameEvent};
use crate::grid::Grid;
use crate::queries;
use crate::spawning::{self, SpawnCounter};
use crate::systems::combat::damage_player;
use crate::vfx::ScreenShake;

/// Shared state the enemy pass writes besides the world
pub struct EnemyContext<'a, R: Rng> {
    pub shake: &'a mut ScreenShake,
    pub events: &'a mut EventQueue,
    pub counter: &'a mut SpawnCounter,
    pub rng: &'a mut R,
}

/// Run one tick of every enemy, in spawn order.
pub fn update_enemies<R: Rng>(
    world: &mut World,
    grid: &Grid,
    player: Entity,
    ctx: &mut EnemyContext<'_, R>,
) {
    for enemy in queries::ordered::<Enemy>(world) {
        chase(world, grid, player, enemy);

        let touching = match (queries::get_hitbox(world, enemy), queries::get_hitbox(world, player)) {
            (Some(e), Some(p)) => e.intersects(&p),
            _ => false,
        };
        if touching {
            let damage = world.get::<&Enemy>(enemy).map(|e| e.contact_damage).unwrap_or(0);
            damage_player(world, player, damage, ctx.shake, ctx.events);
        }

        let dead = world.get::<&Health>(enemy).map(|h| h.is_dead()).unwrap_or(false);
        if dead {
            kill(world, enemy, ctx);
        }
    }
}

fn chase(world: &mut World, grid: &Grid, player: Entity, enemy: Entity) {
    let Some(target) = queries::get_hitbox(world, player) else {
        return;
    };
    let Ok((hitbox, speed)) = world.query_one_mut::<(&mut Hitbox, &Speed)>(enemy) else {
        return;
    };

    let to_player = target.pos - hitbox.pos;
    let dist = to_player.length();
    if dist > 0.0 && dist < ENEMY_CHASE_RADIUS {
        *hitbox = move_with_resolution(*hitbox, to_player / dist * speed.0, grid);
    }
}

fn kill<R: Rng>(world: &mut World, enemy: Entity, ctx: &mut EnemyContext<'_, R>) {
    let Some(hitbox) = queries::get_hitbox(world, enemy) else {
        return;
    };
    let _ = world.despawn(enemy);
    ctx.events.push(GameEvent::EnemyKilled {
        position: hitbox.pos,
    });
    debug!(x = hitbox.pos.x, y = hitbox.pos.y, "enemy_killed");

    if ctx.rng.gen_bool(ENEMY_DROP_CHANCE) {
        let kind = ItemKind::HealthPotion;
        spawning::spawn_item(world, kind, hitbox.pos, ctx.counter.next());
        ctx.events.push(GameEvent::ItemDropped {
            kind,
            position: hitbox.pos,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collision::tile_to_world;
    use crate::components::{Invincibility, Item, SpawnOrder};
    use crate::constants::*;
    use crate::spawning::{spawn_enemy, spawn_player, EnemySpawn};
    use glam::Vec2;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn arena() -> Grid {
        let wall = "#".repeat(20);
        let row = format!("#{}#", ".".repeat(18));
        let mut rows = vec![wall.clone()];
        rows.extend(std::iter::repeat(row).take(18));
        rows.push(wall);
        let refs: Vec<&str> = rows.iter().map(String::as_str).collect();
        Grid::from_ascii(&refs)
    }

    fn enemy(world: &mut World, tile: (i32, i32), health: i32) -> Entity {
        let spawn = EnemySpawn {
            tile,
            health,
            contact_damage: 12,
            speed: 2.0,
        };
        spawn_enemy(world, &spawn, SpawnOrder(0))
    }

    struct Harness {
        shake: ScreenShake,
        events: EventQueue,
        counter: SpawnCounter,
        rng: StdRng,
    }

    impl Harness {
        fn new(seed: u64) -> Self {
            Self {
                shake: ScreenShake::default(),
                events: EventQueue::new(),
                counter: SpawnCounter::default(),
                rng: StdRng::seed_from_u64(seed),
            }
        }

        fn run(&mut self, world: &mut World, grid: &Grid, player: Entity) {
            let mut ctx = EnemyContext {
                shake: &mut self.shake,
                events: &mut self.events,
                counter: &mut self.counter,
                rng: &mut self.rng,
            };
            update_enemies(world, grid, player, &mut ctx);
        }
    }

    #[test]
    fn test_enemy_chases_within_radius() {
        let grid = arena();
        let mut world = World::new();
        let player = spawn_player(&mut world, (2, 2));
        let chaser = enemy(&mut world, (8, 2), 5);
        let mut harness = Harness::new(0);

        harness.run(&mut world, &grid, player);

        let pos = world.get::<&Hitbox>(chaser).unwrap().pos;
        assert_eq!(pos, tile_to_world(8, 2) - Vec2::new(2.0, 0.0));
    }

    #[test]
    fn test_enemy_idles_outside_radius() {
        let grid = arena();
        let mut world = World::new();
        let player = spawn_player(&mut world, (1, 1));
        // 16 tiles away diagonally, well past the chase radius
        let idle = enemy(&mut world, (17, 17), 5);
        let mut harness = Harness::new(0);

        harness.run(&mut world, &grid, player);

        assert_eq!(world.get::<&Hitbox>(idle).unwrap().pos, tile_to_world(17, 17));
    }

    #[test]
    fn test_contact_damage_respects_invincibility() {
        let grid = arena();
        let mut world = World::new();
        let player = spawn_player(&mut world, (5, 5));
        enemy(&mut world, (5, 5), 5);
        let mut harness = Harness::new(0);

        harness.run(&mut world, &grid, player);
        harness.run(&mut world, &grid, player);

        assert_eq!(world.get::<&Health>(player).unwrap().current, PLAYER_MAX_HEALTH - 12);
        assert!(world.get::<&Invincibility>(player).unwrap().is_active());
        assert_eq!(harness.shake.magnitude(), SHAKE_ON_PLAYER_HIT);
    }

    #[test]
    fn test_dead_enemy_is_removed_with_event() {
        let grid = arena();
        let mut world = World::new();
        let player = spawn_player(&mut world, (2, 2));
        let doomed = enemy(&mut world, (12, 12), 0);
        let mut harness = Harness::new(3);

        harness.run(&mut world, &grid, player);

        assert!(!world.contains(doomed));
        assert!(harness
            .events
            .iter()
            .any(|e| matches!(e, GameEvent::EnemyKilled { .. })));
    }

    #[test]
    fn test_drop_rate_is_roughly_thirty_percent() {
        let grid = arena();
        let mut drops = 0;
        let mut harness = Harness::new(99);
        for _ in 0..1_000 {
            let mut world = World::new();
            let player = spawn_player(&mut world, (2, 2));
            enemy(&mut world, (12, 12), 0);
            harness.run(&mut world, &grid, player);
            drops += queries::count::<Item>(&world);
        }
        assert!((230..370).contains(&drops), "drops = {drops}");
    }

    #[test]
    fn test_drop_lands_at_enemy_position() {
        let grid = arena();
        let mut harness = Harness::new(5);
        loop {
            let mut world = World::new();
            let player = spawn_player(&mut world, (2, 2));
            enemy(&mut world, (12, 12), 0);
            harness.run(&mut world, &grid, player);
            let items: Vec<Vec2> = world
                .query::<(&Item, &Hitbox)>()
                .iter()
                .map(|(_, (_, h))| h.pos)
                .collect();
            // Out of chase range, so the enemy dies where it spawned
            if let Some(pos) = items.first() {
                assert_eq!(*pos, tile_to_world(12, 12));
                break;
            }
        }
    }
}
