//! Core game state - owns the simulation data.

use hecs::{Entity, World};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use crate::components::{Health, Player};
use crate::config::GameConfig;
use crate::constants::PLAYER_START_LEVEL;
use crate::error::GenerationError;
use crate::grid::Grid;
use crate::spawning::SpawnCounter;
use crate::vfx::ScreenShake;

use super::initialization;

/// Core game state - owns all simulation data.
pub struct GameState {
    /// The ECS world
    pub world: World,

    /// Current level map; read-only between level changes
    pub grid: Grid,

    /// Player entity handle
    pub player_entity: Entity,

    /// Camera shake, written by combat and read by the renderer
    pub shake: ScreenShake,

    /// Every random draw in the session comes from here
    pub rng: StdRng,

    pub spawn_counter: SpawnCounter,

    pub config: GameConfig,

    /// Seed the session was started with
    pub seed: u64,
}

impl GameState {
    /// Validate `config` and generate level 1 with a fresh player.
    pub fn new(config: GameConfig) -> Result<Self, GenerationError> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = StdRng::seed_from_u64(seed);

        let build = initialization::build_level(&config, PLAYER_START_LEVEL, &mut rng)?;
        let mut spawn_counter = SpawnCounter::default();
        let (world, player_entity) = initialization::init_world(&build, &mut spawn_counter);
        info!(seed, width = config.map_width, height = config.map_height, "session_started");

        Ok(Self {
            world,
            grid: build.grid,
            player_entity,
            shake: ScreenShake::default(),
            rng,
            spawn_counter,
            config,
            seed,
        })
    }

    /// Throw everything away and start over on level 1 with a fresh player.
    ///
    /// The RNG keeps running, so a restarted session plays a new map. On error
    /// the current state is left as it was.
    pub fn restart(&mut self) -> Result<(), GenerationError> {
        let build = initialization::build_level(&self.config, PLAYER_START_LEVEL, &mut self.rng)?;
        let mut spawn_counter = SpawnCounter::default();
        let (world, player_entity) = initialization::init_world(&build, &mut spawn_counter);

        self.world = world;
        self.player_entity = player_entity;
        self.grid = build.grid;
        self.spawn_counter = spawn_counter;
        Ok(())
    }

    /// Dungeon level the player is on.
    pub fn player_level(&self) -> u32 {
        self.world
            .get::<&Player>(self.player_entity)
            .map(|p| p.level)
            .unwrap_or(PLAYER_START_LEVEL)
    }

    pub fn player_health(&self) -> Option<Health> {
        self.world.get::<&Health>(self.player_entity).ok().map(|h| *h)
    }

    pub fn player_is_dead(&self) -> bool {
        self.player_health().map(|h| h.is_dead()).unwrap_or(true)
    }
}
