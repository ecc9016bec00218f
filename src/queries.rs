//! Common entity query helpers.
//!
//! Pure read-only queries shared by the systems and by whatever draws the
//! game. Nothing here mutates the world.

use std::ops::Range;

use glam::Vec2;
use hecs::{Component, Entity, World};

use crate::components::{
    AttackCooldown, Enemy, Exit, Facing, Health, Hitbox, Invincibility, Item, Lifetime, Particle,
    Player, Projectile, SpawnOrder, SpriteKind,
};
use crate::constants::{LOW_HEALTH_THRESHOLD, TILE_SIZE};
use crate::engine::{GameMode, GameState};
use crate::grid::Grid;

/// Entities carrying `T`, sorted by spawn order.
///
/// hecs moves entities around inside an archetype on despawn, so iteration
/// order alone does not preserve insertion order.
pub fn ordered<T: Component>(world: &World) -> Vec<Entity> {
    let mut entities: Vec<(SpawnOrder, Entity)> = world
        .query::<(&T, &SpawnOrder)>()
        .iter()
        .map(|(id, (_, order))| (*order, id))
        .collect();
    entities.sort_unstable_by_key(|(order, _)| *order);
    entities.into_iter().map(|(_, id)| id).collect()
}

pub fn count<T: Component>(world: &World) -> usize {
    world.query::<&T>().iter().count()
}

pub fn get_hitbox(world: &World, entity: Entity) -> Option<Hitbox> {
    world.get::<&Hitbox>(entity).ok().map(|h| *h)
}

pub fn exit_hitbox(world: &World) -> Option<Hitbox> {
    world
        .query::<(&Hitbox, &Exit)>()
        .iter()
        .next()
        .map(|(_, (hitbox, _))| *hitbox)
}

/// A box to draw and what to draw in it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderEntity {
    pub hitbox: Hitbox,
    pub sprite: SpriteKind,
}

/// Everything with a sprite, in draw order: exit, items, enemies, projectiles, player.
pub fn renderables(world: &World) -> Vec<RenderEntity> {
    let mut out = Vec::new();
    collect_layer::<Exit>(world, &mut out);
    collect_layer::<Item>(world, &mut out);
    collect_layer::<Enemy>(world, &mut out);
    collect_layer::<Projectile>(world, &mut out);
    collect_layer::<Player>(world, &mut out);
    out
}

fn collect_layer<T: Component>(world: &World, out: &mut Vec<RenderEntity>) {
    out.extend(
        world
            .query::<(&T, &Hitbox, &SpriteKind)>()
            .iter()
            .map(|(_, (_, hitbox, sprite))| RenderEntity {
                hitbox: *hitbox,
                sprite: *sprite,
            }),
    );
}

/// Particle squares to draw: (top-left, size).
pub fn particles(world: &World) -> Vec<(Vec2, f32)> {
    world
        .query::<(&Particle, &Lifetime)>()
        .iter()
        .map(|(_, (particle, _))| (particle.pos, particle.size))
        .collect()
}

/// Tile columns and rows touched by a view rectangle, clamped to the map.
pub fn visible_tile_window(grid: &Grid, view_min: Vec2, view_size: Vec2) -> (Range<i32>, Range<i32>) {
    let clamp = |min: f32, extent: f32, len: usize| {
        let start = ((min / TILE_SIZE).floor() as i32).clamp(0, len as i32);
        let end = (((min + extent) / TILE_SIZE).floor() as i32 + 1).clamp(start, len as i32);
        start..end
    };
    (
        clamp(view_min.x, view_size.x, grid.width),
        clamp(view_min.y, view_size.y, grid.height),
    )
}

/// Player status for the HUD and the defeat screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HudView {
    pub health: i32,
    pub max_health: i32,
    pub level: u32,
    pub mode: GameMode,
    pub shake: u32,
    /// Draw the slash one tile along `facing`
    pub attacking: bool,
    pub facing: Vec2,
    /// False on the off-frames of the invincibility blink
    pub player_visible: bool,
    pub low_health: bool,
}

pub fn hud(state: &GameState, mode: GameMode) -> Option<HudView> {
    let mut query = state
        .world
        .query_one::<(&Player, &Health, &AttackCooldown, &Facing, &Invincibility)>(
            state.player_entity,
        )
        .ok()?;
    let (player, health, cooldown, facing, invincibility) = query.get()?;

    Some(HudView {
        health: health.current,
        max_health: health.max,
        level: player.level,
        mode,
        shake: state.shake.magnitude(),
        attacking: cooldown.attacking,
        facing: facing.0,
        player_visible: !(invincibility.is_active() && (invincibility.ticks / 5) % 2 == 0),
        low_health: health.current < LOW_HEALTH_THRESHOLD,
    })
}
