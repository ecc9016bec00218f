//! Drunkard's-walk dungeon carving.
//!
//! The map starts as solid rock. A cursor starts in the center cell and takes
//! uniformly random axis-aligned steps, turning every wall it enters into floor
//! until the floor quota is met. Every new floor cell is adjacent to the cell
//! the cursor just left, so the carved region is always one connected blob
//! containing the center.

use rand::Rng;
use tracing::debug;

use crate::constants::DUNGEON_MIN_SIDE;
use crate::error::GenerationError;
use crate::grid::Grid;
use crate::tile::TileType;

/// The four cardinal steps the cursor may take
const STEPS: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

pub struct DungeonGenerator;

impl DungeonGenerator {
    /// Carve a `width` x `height` map until it holds `target_floor` floor tiles.
    ///
    /// The cursor never leaves the interior (one cell of margin on every side),
    /// so the border stays solid. When the quota exceeds the interior the walk
    /// stops once every interior cell is floor.
    pub fn generate(
        width: usize,
        height: usize,
        target_floor: usize,
        rng: &mut impl Rng,
    ) -> Result<Grid, GenerationError> {
        puffin::profile_function!();

        if width < DUNGEON_MIN_SIDE || height < DUNGEON_MIN_SIDE {
            return Err(GenerationError::MapTooSmall { width, height });
        }
        if target_floor == 0 {
            return Err(GenerationError::ZeroFloorTarget);
        }

        let mut grid = Grid::filled(width, height, TileType::Wall);
        let goal = target_floor.min(grid.interior_cells());

        let (mut x, mut y) = grid.center();
        grid.set(x, y, TileType::Floor);
        let mut floor_count = 1;
        let mut steps: u64 = 0;

        while floor_count < goal {
            let (dx, dy) = STEPS[rng.gen_range(0..STEPS.len())];
            steps += 1;

            // Stepping into the border is a wasted move; the cursor stays put
            if !grid.is_interior(x + dx, y + dy) {
                continue;
            }
            x += dx;
            y += dy;

            if grid.get(x, y) == Some(TileType::Wall) {
                grid.set(x, y, TileType::Floor);
                floor_count += 1;
            }
        }

        debug!(width, height, floor_count, steps, "dungeon_carved");
        Ok(grid)
    }
}
