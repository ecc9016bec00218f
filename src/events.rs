//! Game event system for decoupled communication between systems.
//!
//! Systems push events while a tick runs; the session drains them afterwards
//! for logging, and the renderer or an audio layer can react without tight
//! coupling to the simulation.

use glam::Vec2;
use hecs::Entity;

use crate::components::ItemKind;

/// Game events that systems can emit and subscribe to
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// A melee swing connected with an enemy
    MeleeHit {
        target: Entity,
        damage: i32,
    },
    /// A fireball struck an enemy and was consumed
    ProjectileHit {
        projectile: Entity,
        target: Entity,
        damage: i32,
    },
    /// The player took damage (after invincibility gating)
    PlayerDamaged {
        amount: i32,
        remaining: i32,
    },
    /// An enemy's health reached zero and it was removed
    EnemyKilled {
        position: Vec2,
    },
    /// A dying enemy left a pickup behind
    ItemDropped {
        kind: ItemKind,
        position: Vec2,
    },
    /// The player walked over a pickup
    ItemPickedUp {
        kind: ItemKind,
        healed: i32,
    },
    /// The player reached the exit and a new level was generated
    LevelCompleted {
        new_level: u32,
    },
    /// The player's health reached zero
    PlayerDefeated {
        level: u32,
    },
    /// A defeated session was restarted on level 1
    SessionRestarted,
}

/// Simple event queue - events are pushed during a tick, processed after it
#[derive(Debug, Default)]
pub struct EventQueue {
    events: Vec<GameEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Push an event to be processed later
    pub fn push(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Drain all events for processing
    pub fn drain(&mut self) -> impl Iterator<Item = GameEvent> + '_ {
        self.events.drain(..)
    }

    pub fn iter(&self) -> impl Iterator<Item = &GameEvent> {
        self.events.iter()
    }

    /// Check if there are pending events
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}
