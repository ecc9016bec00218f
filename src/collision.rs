//! Box-versus-tile collision.
//!
//! Entities are axis-aligned boxes in world units; walls are whole tiles.
//! Movement is resolved one axis at a time (X, then Y) so a diagonal push
//! into a wall slides along it instead of stopping.

use glam::Vec2;

use crate::components::Hitbox;
use crate::constants::TILE_SIZE;
use crate::grid::Grid;
use crate::tile::TileType;

/// World-space box covering tile `(x, y)`.
pub fn tile_box(x: i32, y: i32) -> Hitbox {
    Hitbox::square(Vec2::new(x as f32, y as f32) * TILE_SIZE, TILE_SIZE)
}

/// Top-left world position of tile `(x, y)`.
pub fn tile_to_world(x: i32, y: i32) -> Vec2 {
    Vec2::new(x as f32, y as f32) * TILE_SIZE
}

/// Inclusive tile range spanned by `[min, max]` on one axis, clamped to `[0, len)`.
fn tile_span(min: f32, max: f32, len: usize) -> Option<(i32, i32)> {
    if len == 0 {
        return None;
    }
    let first = ((min / TILE_SIZE).floor() as i32).max(0);
    let last = ((max / TILE_SIZE).floor() as i32).min(len as i32 - 1);
    (first <= last).then_some((first, last))
}

/// Whether `hitbox` overlaps any wall tile.
///
/// Only tiles inside the map are considered; the coarse tile range is narrowed
/// with an exact box test so a box merely touching a wall edge does not count.
pub fn overlaps_wall(hitbox: &Hitbox, grid: &Grid) -> bool {
    let min = hitbox.min();
    let max = hitbox.max();
    let Some((left, right)) = tile_span(min.x, max.x, grid.width) else {
        return false;
    };
    let Some((top, bottom)) = tile_span(min.y, max.y, grid.height) else {
        return false;
    };

    for y in top..=bottom {
        for x in left..=right {
            if grid.get(x, y) == Some(TileType::Wall) && hitbox.intersects(&tile_box(x, y)) {
                return true;
            }
        }
    }
    false
}

/// Move `hitbox` by `delta`, undoing each axis whose move ends inside a wall.
///
/// X is applied and checked before Y; at inside corners this decides which
/// axis keeps its motion.
pub fn move_with_resolution(hitbox: Hitbox, delta: Vec2, grid: &Grid) -> Hitbox {
    let mut moved = hitbox;

    if delta.x != 0.0 {
        moved.pos.x += delta.x;
        if overlaps_wall(&moved, grid) {
            moved.pos.x = hitbox.pos.x;
        }
    }

    if delta.y != 0.0 {
        moved.pos.y += delta.y;
        if overlaps_wall(&moved, grid) {
            moved.pos.y = hitbox.pos.y;
        }
    }

    moved
}
