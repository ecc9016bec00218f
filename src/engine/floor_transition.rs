//! Level-to-level transition when the player reaches the exit.

use hecs::{Entity, World};
use tracing::info;

use crate::collision::tile_to_world;
use crate::components::{Hitbox, Player};
use crate::error::GenerationError;

use super::game_state::GameState;
use super::initialization::{build_level, populate_level};

/// Despawn everything except the player.
pub fn clear_level_entities(world: &mut World, player_entity: Entity) {
    let to_remove: Vec<Entity> = world
        .iter()
        .map(|e| e.entity())
        .filter(|&id| id != player_entity)
        .collect();

    for entity in to_remove {
        let _ = world.despawn(entity);
    }
}

/// Move the player to a freshly generated next level.
///
/// The new map and placements are computed first; if that fails nothing has
/// been touched and the error is returned. The player keeps its health and
/// timers, gets its level bumped and is placed on the new start tile.
pub fn advance_level(state: &mut GameState) -> Result<u32, GenerationError> {
    let next_level = state.player_level() + 1;
    let build = build_level(&state.config, next_level, &mut state.rng)?;

    clear_level_entities(&mut state.world, state.player_entity);
    if let Ok((player, hitbox)) = state
        .world
        .query_one_mut::<(&mut Player, &mut Hitbox)>(state.player_entity)
    {
        player.level = next_level;
        let (x, y) = build.plan.player_start;
        hitbox.pos = tile_to_world(x, y);
    }
    populate_level(&mut state.world, &build.plan, &mut state.spawn_counter);
    state.grid = build.grid;

    info!(level = next_level, "level_completed");
    Ok(next_level)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Enemy, Exit, Health, Item, ItemKind, Particle, Projectile};
    use crate::config::GameConfig;
    use crate::queries;
    use crate::spawning::{enemy_count, spawn_item, spawn_particles, spawn_projectile};
    use glam::Vec2;

    fn state(seed: u64) -> GameState {
        GameState::new(GameConfig {
            seed: Some(seed),
            ..GameConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_advance_discards_old_level() {
        let mut state = state(12);
        let order = state.spawn_counter.next();
        spawn_item(&mut state.world, ItemKind::HealthPotion, Vec2::new(64.0, 64.0), order);
        let order = state.spawn_counter.next();
        spawn_projectile(&mut state.world, Vec2::new(64.0, 64.0), Vec2::X, order);
        spawn_particles(&mut state.world, Vec2::ZERO, 4, &mut state.rng);
        let old_enemies = queries::ordered::<Enemy>(&state.world);
        state.world.get::<&mut Health>(state.player_entity).unwrap().current = 55;

        let level = advance_level(&mut state).unwrap();

        assert_eq!(level, 2);
        assert_eq!(state.player_level(), 2);
        assert_eq!(queries::count::<Item>(&state.world), 0);
        assert_eq!(queries::count::<Projectile>(&state.world), 0);
        assert_eq!(queries::count::<Particle>(&state.world), 0);
        assert_eq!(queries::count::<Exit>(&state.world), 1);
        assert_eq!(queries::count::<Enemy>(&state.world), enemy_count(2));
        assert!(old_enemies.iter().all(|&e| !state.world.contains(e)));
        // Stats carry over
        assert_eq!(state.player_health().unwrap().current, 55);
    }

    #[test]
    fn test_player_lands_on_new_start() {
        let mut state = state(3);
        advance_level(&mut state).unwrap();
        let (x, y) = state.grid.center();
        let pos = state.world.get::<&Hitbox>(state.player_entity).unwrap().pos;
        assert_eq!(pos, tile_to_world(x, y));
        assert!(state.grid.is_floor(x, y));
    }

    #[test]
    fn test_failed_generation_keeps_current_level() {
        let mut state = state(8);
        let grid_before = state.grid.clone();
        let enemies_before = queries::count::<Enemy>(&state.world);
        // Too small for the exit distance rule
        state.config.map_width = 12;
        state.config.map_height = 12;

        assert!(advance_level(&mut state).is_err());

        assert_eq!(state.grid, grid_before);
        assert_eq!(state.player_level(), 1);
        assert_eq!(queries::count::<Enemy>(&state.world), enemies_before);
    }
}
