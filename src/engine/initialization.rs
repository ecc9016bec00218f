//! Level construction - generates a map, plans placements and spawns entities.
//!
//! Building and populating are separate steps: `build_level` can fail and
//! touches nothing, `populate_level` cannot fail and only writes the world.

use hecs::{Entity, World};
use rand::Rng;
use tracing::info;

use crate::config::GameConfig;
use crate::dungeon_gen::DungeonGenerator;
use crate::error::GenerationError;
use crate::grid::Grid;
use crate::spawning::{self, LevelPlan, SpawnCounter};

/// A generated map together with where everything goes on it
#[derive(Debug, Clone)]
pub struct LevelBuild {
    pub grid: Grid,
    pub plan: LevelPlan,
}

/// Generate the map for `level` and plan its entities.
pub fn build_level(
    config: &GameConfig,
    level: u32,
    rng: &mut impl Rng,
) -> Result<LevelBuild, GenerationError> {
    puffin::profile_function!();

    let grid = DungeonGenerator::generate(
        config.map_width,
        config.map_height,
        config.target_floor_tiles,
        rng,
    )?;
    let plan = spawning::place_entities(&grid, level, config.placement_attempts, rng)?;

    info!(
        level,
        floor_tiles = grid.floor_count(),
        enemies = plan.enemies.len(),
        exit_x = plan.exit.0,
        exit_y = plan.exit.1,
        "level_generated"
    );
    Ok(LevelBuild { grid, plan })
}

/// Spawn the enemies and exit of `plan`. The player is handled by the caller.
pub fn populate_level(world: &mut World, plan: &LevelPlan, counter: &mut SpawnCounter) {
    for enemy in &plan.enemies {
        spawning::spawn_enemy(world, enemy, counter.next());
    }
    spawning::spawn_exit(world, plan.exit);
}

/// Create a fresh world with a new player and the level's entities.
pub fn init_world(build: &LevelBuild, counter: &mut SpawnCounter) -> (World, Entity) {
    let mut world = World::new();
    let player = spawning::spawn_player(&mut world, build.plan.player_start);
    populate_level(&mut world, &build.plan, counter);
    (world, player)
}
