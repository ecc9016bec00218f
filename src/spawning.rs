//! Spawn placement and entity spawning.
//!
//! `place_entities` decides where the player, enemies and exit go on a fresh
//! map without touching the ECS world, so a level can be fully planned (and
//! fail) before the previous level is torn down. The `spawn_*` helpers then
//! turn a plan into entities.

use glam::Vec2;
use hecs::{Entity, World};
use rand::Rng;
use tracing::warn;

use crate::collision::tile_to_world;
use crate::components::{
    AttackCooldown, Enemy, Exit, Facing, Health, Hitbox, Invincibility, Item, ItemKind, Lifetime,
    Particle, Player, Projectile, Speed, SpawnOrder, SpriteKind, Velocity,
};
use crate::constants::*;
use crate::error::{GenerationError, PlacementRole};
use crate::grid::Grid;

/// Stats for one enemy on a given level
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemySpawn {
    pub tile: (i32, i32),
    pub health: i32,
    pub contact_damage: i32,
    pub speed: f32,
}

impl EnemySpawn {
    /// Roll an enemy for `level` standing on `tile`.
    pub fn for_level(tile: (i32, i32), level: u32, rng: &mut impl Rng) -> Self {
        let level = level as i32;
        Self {
            tile,
            health: ENEMY_BASE_HEALTH + ENEMY_HEALTH_PER_LEVEL * level,
            contact_damage: ENEMY_BASE_DAMAGE + ENEMY_DAMAGE_PER_LEVEL * level,
            speed: rng.gen_range(ENEMY_SPEED_MIN..ENEMY_SPEED_MAX),
        }
    }
}

/// Where everything goes on one level
#[derive(Debug, Clone, PartialEq)]
pub struct LevelPlan {
    pub player_start: (i32, i32),
    pub enemies: Vec<EnemySpawn>,
    pub exit: (i32, i32),
}

/// Number of enemies spawned on `level`.
pub fn enemy_count(level: u32) -> usize {
    ENEMY_BASE_COUNT + ENEMY_COUNT_PER_LEVEL * level as usize
}

/// True if `tile` is more than `threshold` tiles from `start` on either axis.
pub fn far_enough(tile: (i32, i32), start: (i32, i32), threshold: i32) -> bool {
    (tile.0 - start.0).abs() > threshold || (tile.1 - start.1).abs() > threshold
}

/// Plan the player start, enemies and exit for `level` on `grid`.
///
/// Each entity is placed by rejection sampling interior floor tiles, bounded by
/// `max_attempts`; past the cap every eligible tile is enumerated and one is
/// picked uniformly. Enemies get distinct tiles and the exit avoids them.
pub fn place_entities(
    grid: &Grid,
    level: u32,
    max_attempts: u32,
    rng: &mut impl Rng,
) -> Result<LevelPlan, GenerationError> {
    let start = grid.center();
    let mut taken: Vec<(i32, i32)> = Vec::new();

    let count = enemy_count(level);
    let mut enemies = Vec::with_capacity(count);
    for _ in 0..count {
        let tile = pick_tile(
            grid,
            start,
            ENEMY_MIN_START_DISTANCE,
            PlacementRole::Enemy,
            &taken,
            max_attempts,
            rng,
        )?;
        taken.push(tile);
        enemies.push(EnemySpawn::for_level(tile, level, rng));
    }

    let exit = pick_tile(
        grid,
        start,
        EXIT_MIN_START_DISTANCE,
        PlacementRole::Exit,
        &taken,
        max_attempts,
        rng,
    )?;

    Ok(LevelPlan {
        player_start: start,
        enemies,
        exit,
    })
}

fn pick_tile(
    grid: &Grid,
    start: (i32, i32),
    threshold: i32,
    role: PlacementRole,
    taken: &[(i32, i32)],
    max_attempts: u32,
    rng: &mut impl Rng,
) -> Result<(i32, i32), GenerationError> {
    let eligible = |tile: (i32, i32)| {
        grid.is_floor(tile.0, tile.1) && far_enough(tile, start, threshold) && !taken.contains(&tile)
    };

    let (max_x, max_y) = (grid.width as i32 - 2, grid.height as i32 - 2);
    if max_x >= 1 && max_y >= 1 {
        for _ in 0..max_attempts {
            let tile = (rng.gen_range(1..=max_x), rng.gen_range(1..=max_y));
            if eligible(tile) {
                return Ok(tile);
            }
        }
    }

    let candidates: Vec<_> = grid.floor_tiles().filter(|&tile| eligible(tile)).collect();
    if candidates.is_empty() {
        return Err(GenerationError::PlacementExhausted { role, threshold });
    }
    warn!(
        %role,
        attempts = max_attempts,
        candidates = candidates.len(),
        "placement_fell_back_to_enumeration"
    );
    Ok(candidates[rng.gen_range(0..candidates.len())])
}

/// Hands out `SpawnOrder` values so collections keep their insertion order
#[derive(Debug, Default)]
pub struct SpawnCounter {
    next: u64,
}

impl SpawnCounter {
    pub fn next(&mut self) -> SpawnOrder {
        let order = SpawnOrder(self.next);
        self.next += 1;
        order
    }
}

/// Spawn a fresh level-1 player on `tile`.
pub fn spawn_player(world: &mut World, tile: (i32, i32)) -> Entity {
    world.spawn((
        Player {
            level: PLAYER_START_LEVEL,
        },
        Hitbox::square(tile_to_world(tile.0, tile.1), TILE_SIZE),
        Speed(PLAYER_SPEED),
        Facing::default(),
        Health::new(PLAYER_MAX_HEALTH),
        AttackCooldown::default(),
        Invincibility::default(),
        SpriteKind::Player,
    ))
}

pub fn spawn_enemy(world: &mut World, spawn: &EnemySpawn, order: SpawnOrder) -> Entity {
    world.spawn((
        Enemy {
            contact_damage: spawn.contact_damage,
        },
        Hitbox::square(tile_to_world(spawn.tile.0, spawn.tile.1), TILE_SIZE),
        Speed(spawn.speed),
        Health::new(spawn.health),
        order,
        SpriteKind::Enemy,
    ))
}

pub fn spawn_exit(world: &mut World, tile: (i32, i32)) -> Entity {
    world.spawn((
        Exit,
        Hitbox::square(tile_to_world(tile.0, tile.1), TILE_SIZE),
        SpriteKind::Exit,
    ))
}

/// Spawn a fireball whose top-left corner sits at `origin`.
pub fn spawn_projectile(
    world: &mut World,
    origin: Vec2,
    direction: Vec2,
    order: SpawnOrder,
) -> Entity {
    world.spawn((
        Projectile {
            damage: PROJECTILE_DAMAGE,
        },
        Hitbox::square(origin, PROJECTILE_SIZE),
        Velocity(direction * PROJECTILE_SPEED),
        Lifetime::new(PROJECTILE_LIFETIME),
        order,
        SpriteKind::Fireball,
    ))
}

pub fn spawn_item(world: &mut World, kind: ItemKind, pos: Vec2, order: SpawnOrder) -> Entity {
    world.spawn((
        Item::new(kind),
        Hitbox::square(pos, TILE_SIZE),
        order,
        SpriteKind::Potion,
    ))
}

/// Spawn `count` particles bursting out of `center`.
pub fn spawn_particles(world: &mut World, center: Vec2, count: usize, rng: &mut impl Rng) {
    for _ in 0..count {
        let velocity = Vec2::new(
            rng.gen_range(-PARTICLE_MAX_SPEED..=PARTICLE_MAX_SPEED),
            rng.gen_range(-PARTICLE_MAX_SPEED..=PARTICLE_MAX_SPEED),
        );
        world.spawn((
            Particle {
                pos: center,
                velocity,
                size: rng.gen_range(PARTICLE_MIN_SIZE..=PARTICLE_MAX_SIZE),
            },
            Lifetime::new(rng.gen_range(PARTICLE_MIN_LIFE..=PARTICLE_MAX_LIFE)),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon_gen::DungeonGenerator;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn default_map(seed: u64) -> (Grid, StdRng) {
        let mut rng = StdRng::seed_from_u64(seed);
        let grid = DungeonGenerator::generate(
            DUNGEON_DEFAULT_WIDTH,
            DUNGEON_DEFAULT_HEIGHT,
            DUNGEON_DEFAULT_FLOOR_TILES,
            &mut rng,
        )
        .unwrap();
        (grid, rng)
    }

    #[test]
    fn test_enemy_count_scales_with_level() {
        assert_eq!(enemy_count(1), 7);
        assert_eq!(enemy_count(4), 13);
    }

    #[test]
    fn test_enemy_stats_scale_with_level() {
        let mut rng = StdRng::seed_from_u64(0);
        let spawn = EnemySpawn::for_level((3, 3), 2, &mut rng);
        assert_eq!(spawn.health, 7);
        assert_eq!(spawn.contact_damage, 14);
        assert!(spawn.speed >= ENEMY_SPEED_MIN && spawn.speed < ENEMY_SPEED_MAX);
    }

    #[test]
    fn test_level_one_placement_respects_distances() {
        for seed in 0..20 {
            let (grid, mut rng) = default_map(seed);
            let plan = place_entities(&grid, 1, PLACEMENT_DEFAULT_ATTEMPTS, &mut rng).unwrap();
            let start = grid.center();
            assert_eq!(plan.player_start, start);
            assert_eq!(plan.enemies.len(), 7);
            for enemy in &plan.enemies {
                assert!(grid.is_floor(enemy.tile.0, enemy.tile.1));
                assert!(far_enough(enemy.tile, start, ENEMY_MIN_START_DISTANCE));
            }
            assert!(grid.is_floor(plan.exit.0, plan.exit.1));
            assert!(far_enough(plan.exit, start, EXIT_MIN_START_DISTANCE));
        }
    }

    #[test]
    fn test_placements_do_not_stack() {
        let (grid, mut rng) = default_map(5);
        let plan = place_entities(&grid, 6, PLACEMENT_DEFAULT_ATTEMPTS, &mut rng).unwrap();
        let mut tiles: Vec<_> = plan.enemies.iter().map(|e| e.tile).collect();
        tiles.push(plan.exit);
        let total = tiles.len();
        tiles.sort();
        tiles.dedup();
        assert_eq!(tiles.len(), total);
    }

    #[test]
    fn test_zero_attempts_still_places_by_enumeration() {
        let (grid, mut rng) = default_map(11);
        let plan = place_entities(&grid, 1, 0, &mut rng).unwrap();
        assert!(far_enough(plan.exit, grid.center(), EXIT_MIN_START_DISTANCE));
    }

    #[test]
    fn test_small_map_reports_exhaustion() {
        let mut rng = StdRng::seed_from_u64(2);
        let grid = DungeonGenerator::generate(9, 9, 1_000, &mut rng).unwrap();
        let err = place_entities(&grid, 1, 50, &mut rng).unwrap_err();
        assert_eq!(
            err,
            GenerationError::PlacementExhausted {
                role: PlacementRole::Enemy,
                threshold: ENEMY_MIN_START_DISTANCE,
            }
        );
    }

    #[test]
    fn test_exit_exhaustion_is_reported_for_exit() {
        // 17x17 interior floor: enemies fit beyond 5 tiles, nothing lies beyond 10
        let mut rng = StdRng::seed_from_u64(4);
        let grid = DungeonGenerator::generate(17, 17, 1_000, &mut rng).unwrap();
        let err = place_entities(&grid, 1, 50, &mut rng).unwrap_err();
        assert_eq!(
            err,
            GenerationError::PlacementExhausted {
                role: PlacementRole::Exit,
                threshold: EXIT_MIN_START_DISTANCE,
            }
        );
    }
}
