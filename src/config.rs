//! Session configuration loaded from JSON.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::{ConfigError, GenerationError};

/// Map size, seed and pacing for a session.
///
/// Every field is optional in the JSON file; missing ones take the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub map_width: usize,
    pub map_height: usize,
    pub target_floor_tiles: usize,
    /// Fixed seed for a reproducible session; `None` draws one from entropy
    pub seed: Option<u64>,
    pub tick_rate: u32,
    /// Rejection-sampling tries per placed entity
    pub placement_attempts: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            map_width: DUNGEON_DEFAULT_WIDTH,
            map_height: DUNGEON_DEFAULT_HEIGHT,
            target_floor_tiles: DUNGEON_DEFAULT_FLOOR_TILES,
            seed: None,
            tick_rate: DEFAULT_TICK_RATE,
            placement_attempts: PLACEMENT_DEFAULT_ATTEMPTS,
        }
    }
}

impl GameConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject maps the generator cannot carve.
    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.map_width < DUNGEON_MIN_SIDE || self.map_height < DUNGEON_MIN_SIDE {
            return Err(GenerationError::MapTooSmall {
                width: self.map_width,
                height: self.map_height,
            });
        }
        if self.target_floor_tiles == 0 {
            return Err(GenerationError::ZeroFloorTarget);
        }
        Ok(())
    }
}
