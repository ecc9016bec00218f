//! One simulation tick.
//!
//! Systems run in a fixed order each tick: attacks, player movement,
//! projectiles, enemies, items, particles, then the exit and defeat checks.

use hecs::{Entity, World};

use crate::error::GenerationError;
use crate::events::{EventQueue, GameEvent};
use crate::input::TickInput;
use crate::queries;
use crate::systems::{self, EnemyContext};

use super::floor_transition;
use super::game_state::GameState;

/// What happened during a tick that the session cares about
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// Level the player moved to, if the exit was reached
    pub level_completed: Option<u32>,
    pub defeated: bool,
}

/// Advance the playing simulation by one tick.
///
/// Only fails if reaching the exit triggers a level generation that fails;
/// the previous level is then still in place.
pub fn run_tick(
    state: &mut GameState,
    input: TickInput,
    events: &mut EventQueue,
) -> Result<TickOutcome, GenerationError> {
    puffin::profile_function!();
    let player = state.player_entity;

    if input.actions.melee {
        systems::melee_attack(&mut state.world, player, &mut state.shake, events, &mut state.rng);
    }
    if input.actions.ranged {
        systems::ranged_attack(&mut state.world, player, &mut state.spawn_counter);
    }

    systems::move_player(&mut state.world, &state.grid, player, input.intent);
    systems::update_projectiles(&mut state.world, &state.grid, events, &mut state.rng);

    let mut ctx = EnemyContext {
        shake: &mut state.shake,
        events: &mut *events,
        counter: &mut state.spawn_counter,
        rng: &mut state.rng,
    };
    systems::update_enemies(&mut state.world, &state.grid, player, &mut ctx);

    systems::update_items(&mut state.world, player, events);
    systems::update_particles(&mut state.world);

    let mut outcome = TickOutcome::default();
    if reached_exit(&state.world, player) {
        let new_level = floor_transition::advance_level(state)?;
        events.push(GameEvent::LevelCompleted { new_level });
        outcome.level_completed = Some(new_level);
    }
    outcome.defeated = state.player_is_dead();
    Ok(outcome)
}

fn reached_exit(world: &World, player: Entity) -> bool {
    match (queries::get_hitbox(world, player), queries::exit_hitbox(world)) {
        (Some(p), Some(exit)) => p.intersects(&exit),
        _ => false,
    }
}
