//! Error types for level generation and configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Which placement constraint could not be satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementRole {
    Enemy,
    Exit,
}

impl std::fmt::Display for PlacementRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlacementRole::Enemy => f.write_str("enemy"),
            PlacementRole::Exit => f.write_str("exit"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("map of {width}x{height} tiles has no interior to carve (each side must be at least 3)")]
    MapTooSmall { width: usize, height: usize },
    #[error("target floor tile count must be at least 1")]
    ZeroFloorTarget,
    #[error("no free floor tile lies more than {threshold} tiles from the start for the {role}")]
    PlacementExhausted { role: PlacementRole, threshold: i32 },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid config: {0}")]
    Invalid(#[from] GenerationError),
}
