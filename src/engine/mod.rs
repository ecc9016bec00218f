//! Game engine - owns all game state and provides a clean API to the application shell.
//!
//! The engine handles:
//! - Game state (world, grid, rng, shake)
//! - The playing/defeated state machine and restarts
//! - Simulation advancement
//! - Collecting the events of the last tick
//!
//! The application shell (main.rs) only handles:
//! - Timing the fixed-rate loop
//! - Turning device input into a `TickInput`
//! - Presenting what the engine exposes

pub mod floor_transition;
mod game_state;
pub mod initialization;
mod simulation;

pub use floor_transition::{advance_level, clear_level_entities};
pub use game_state::GameState;
pub use initialization::{build_level, LevelBuild};
pub use simulation::{run_tick, TickOutcome};

use tracing::info;

use crate::config::GameConfig;
use crate::error::GenerationError;
use crate::events::{EventQueue, GameEvent};
use crate::input::TickInput;
use crate::queries::{self, HudView};

/// Whether the simulation is running or waiting for a restart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    Playing,
    /// Player health hit zero; only a restart request changes anything
    Defeated,
}

/// The game engine - owns all game state and simulation logic.
pub struct GameEngine {
    pub mode: GameMode,

    /// Core game state (world, grid, rng, shake)
    pub state: GameState,

    /// Events raised during the most recent tick
    events: EventQueue,

    /// Ticks run since the engine was created
    pub ticks: u64,
}

impl GameEngine {
    /// Start a session on level 1.
    pub fn new(config: GameConfig) -> Result<Self, GenerationError> {
        Ok(Self {
            mode: GameMode::Playing,
            state: GameState::new(config)?,
            events: EventQueue::new(),
            ticks: 0,
        })
    }

    /// Advance one fixed step.
    ///
    /// Shake fades every tick, defeated or not. While defeated the world is
    /// frozen and only `input.actions.restart` is honoured; while playing a
    /// restart request is ignored.
    pub fn tick(&mut self, input: TickInput) -> Result<(), GenerationError> {
        puffin::profile_scope!("engine_tick");
        self.events = EventQueue::new();
        self.ticks += 1;
        self.state.shake.decay();

        match self.mode {
            GameMode::Defeated => {
                if input.actions.restart {
                    self.state.restart()?;
                    self.mode = GameMode::Playing;
                    self.events.push(GameEvent::SessionRestarted);
                    info!(tick = self.ticks, "session_restarted");
                }
            }
            GameMode::Playing => {
                let outcome = simulation::run_tick(&mut self.state, input, &mut self.events)?;
                if outcome.defeated {
                    let level = self.state.player_level();
                    self.mode = GameMode::Defeated;
                    self.events.push(GameEvent::PlayerDefeated { level });
                    info!(level, tick = self.ticks, "player_defeated");
                }
            }
        }
        Ok(())
    }

    pub fn events(&self) -> &EventQueue {
        &self.events
    }

    /// Take the last tick's events.
    pub fn drain_events(&mut self) -> impl Iterator<Item = GameEvent> + '_ {
        self.events.drain()
    }

    pub fn level(&self) -> u32 {
        self.state.player_level()
    }

    pub fn hud(&self) -> Option<HudView> {
        queries::hud(&self.state, self.mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Enemy, Health, Hitbox};
    use crate::input::MoveIntent;

    fn engine(seed: u64) -> GameEngine {
        GameEngine::new(GameConfig {
            seed: Some(seed),
            ..GameConfig::default()
        })
        .unwrap()
    }

    fn kill_player(engine: &mut GameEngine) {
        let player = engine.state.player_entity;
        engine.state.world.get::<&mut Health>(player).unwrap().current = 0;
    }

    #[test]
    fn test_defeat_freezes_world_until_restart() {
        let mut engine = engine(31);
        kill_player(&mut engine);
        engine.tick(TickInput::idle()).unwrap();
        assert_eq!(engine.mode, GameMode::Defeated);
        assert!(engine.events().iter().any(|e| *e == GameEvent::PlayerDefeated { level: 1 }));

        let snapshot = queries::renderables(&engine.state.world);
        let right = MoveIntent {
            right: true,
            ..MoveIntent::default()
        };
        for _ in 0..30 {
            engine.tick(TickInput::moving(right)).unwrap();
        }
        assert_eq!(queries::renderables(&engine.state.world), snapshot);
        assert_eq!(engine.mode, GameMode::Defeated);

        engine.tick(TickInput::restart()).unwrap();
        assert_eq!(engine.mode, GameMode::Playing);
        assert_eq!(engine.level(), 1);
        assert_eq!(engine.state.player_health().unwrap().current, 100);
        assert!(engine.events().iter().any(|e| *e == GameEvent::SessionRestarted));
    }

    #[test]
    fn test_restart_ignored_while_playing() {
        let mut engine = engine(32);
        let player = engine.state.player_entity;
        engine.tick(TickInput::restart()).unwrap();
        assert_eq!(engine.state.player_entity, player);
        assert!(engine.events().iter().all(|e| *e != GameEvent::SessionRestarted));
    }

    #[test]
    fn test_defeat_keeps_level_reached() {
        let mut engine = engine(33);
        let exit = queries::exit_hitbox(&engine.state.world).unwrap();
        let player = engine.state.player_entity;
        engine.state.world.get::<&mut Hitbox>(player).unwrap().pos = exit.pos;
        engine.tick(TickInput::idle()).unwrap();
        assert_eq!(engine.level(), 2);

        kill_player(&mut engine);
        engine.tick(TickInput::idle()).unwrap();
        assert_eq!(engine.mode, GameMode::Defeated);
        assert_eq!(engine.hud().unwrap().level, 2);
    }

    #[test]
    fn test_same_seed_same_session() {
        let script = [
            TickInput::moving(MoveIntent {
                left: true,
                ..MoveIntent::default()
            }),
            TickInput::ranged(),
            TickInput::melee(),
            TickInput::moving(MoveIntent {
                down: true,
                right: true,
                ..MoveIntent::default()
            }),
        ];
        let mut a = engine(40);
        let mut b = engine(40);
        for i in 0..400 {
            let input = script[(i / 25) % script.len()];
            a.tick(input).unwrap();
            b.tick(input).unwrap();
        }
        assert_eq!(queries::renderables(&a.state.world), queries::renderables(&b.state.world));
        assert_eq!(a.hud(), b.hud());
        assert_eq!(
            queries::count::<Enemy>(&a.state.world),
            queries::count::<Enemy>(&b.state.world)
        );
    }

    #[test]
    fn test_events_cover_only_last_tick() {
        let mut engine = engine(34);
        kill_player(&mut engine);
        engine.tick(TickInput::idle()).unwrap();
        assert!(!engine.events().is_empty());
        engine.tick(TickInput::idle()).unwrap();
        assert!(engine.events().is_empty());
    }
}
