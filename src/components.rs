//! ECS components.
//!
//! Capabilities are split the same way for every entity kind: `Hitbox` makes
//! something collidable, `Velocity`/`Speed` make it move, `Health` makes it
//! damageable. Role markers (`Player`, `Enemy`, ...) select which systems run.

use glam::Vec2;

/// Axis-aligned box in world units; `pos` is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hitbox {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Hitbox {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    pub fn square(pos: Vec2, side: f32) -> Self {
        Self::new(pos, Vec2::splat(side))
    }

    pub fn min(&self) -> Vec2 {
        self.pos
    }

    pub fn max(&self) -> Vec2 {
        self.pos + self.size
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Strict overlap test: boxes that only share an edge do not intersect.
    pub fn intersects(&self, other: &Hitbox) -> bool {
        let (a_min, a_max) = (self.min(), self.max());
        let (b_min, b_max) = (other.min(), other.max());
        a_min.x < b_max.x && b_min.x < a_max.x && a_min.y < b_max.y && b_min.y < a_max.y
    }

    pub fn translated(&self, delta: Vec2) -> Self {
        Self::new(self.pos + delta, self.size)
    }
}

/// Per-tick displacement in world units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Velocity(pub Vec2);

/// Movement speed in world units per tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Speed(pub f32);

/// Health component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Health {
    pub current: i32,
    pub max: i32,
}

impl Health {
    pub fn new(max: i32) -> Self {
        Self { current: max, max }
    }

    pub fn percentage(&self) -> f32 {
        if self.max <= 0 {
            return 0.0;
        }
        (self.current as f32 / self.max as f32).clamp(0.0, 1.0)
    }

    /// Subtract `amount`, never dropping below zero.
    pub fn apply_damage(&mut self, amount: i32) {
        self.current = (self.current - amount.max(0)).max(0);
    }

    /// Add `amount`, never rising above max.
    pub fn heal(&mut self, amount: i32) {
        self.current = (self.current + amount.max(0)).min(self.max);
    }

    pub fn is_dead(&self) -> bool {
        self.current <= 0
    }
}

/// Player marker; `level` is the dungeon level being played
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    pub level: u32,
}

/// Last non-zero movement direction, each component in {-1, 0, 1}
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Facing(pub Vec2);

impl Default for Facing {
    fn default() -> Self {
        Self(Vec2::X)
    }
}

/// Shared cooldown for melee and ranged attacks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttackCooldown {
    pub ticks: u32,
    /// True while the swing should be drawn
    pub attacking: bool,
}

impl AttackCooldown {
    pub fn is_ready(&self) -> bool {
        self.ticks == 0
    }
}

/// Ticks during which incoming damage is ignored
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Invincibility {
    pub ticks: u32,
}

impl Invincibility {
    pub fn is_active(&self) -> bool {
        self.ticks > 0
    }
}

/// Enemy marker; damages the player on touch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Enemy {
    pub contact_damage: i32,
}

/// Player-fired projectile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Projectile {
    pub damage: i32,
}

/// Remaining lifetime in ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lifetime {
    pub ticks: u32,
}

impl Lifetime {
    pub fn new(ticks: u32) -> Self {
        Self { ticks }
    }

    /// Count down one tick; returns true once the lifetime is used up.
    pub fn tick(&mut self) -> bool {
        self.ticks = self.ticks.saturating_sub(1);
        self.ticks == 0
    }

    pub fn expire(&mut self) {
        self.ticks = 0;
    }
}

/// Item type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    HealthPotion,
}

impl ItemKind {
    pub fn name(&self) -> &str {
        match self {
            ItemKind::HealthPotion => "Health Potion",
        }
    }

    pub fn heal_amount(&self) -> i32 {
        match self {
            ItemKind::HealthPotion => crate::constants::HEALTH_POTION_HEAL,
        }
    }
}

/// Pickup lying on the floor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Item {
    pub kind: ItemKind,
    pub bob_phase: f32,
}

impl Item {
    pub fn new(kind: ItemKind) -> Self {
        Self { kind, bob_phase: 0.0 }
    }
}

/// Level exit marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exit;

/// Cosmetic particle; paired with a `Lifetime`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub velocity: Vec2,
    pub size: f32,
}

/// Insertion order within a collection, used for deterministic tie-breaks
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SpawnOrder(pub u64);

/// What the renderer should draw for an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteKind {
    Player,
    Enemy,
    Fireball,
    Potion,
    Exit,
}
