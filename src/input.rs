//! Device-independent player input.
//!
//! Whatever polls the keyboard or gamepad fills a `TickInput` once per tick:
//! held directions become the movement intent, presses become one-shot actions.

use glam::Vec2;

/// Directions held during this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveIntent {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl MoveIntent {
    /// Axis vector with components in {-1, 0, 1}; opposite keys cancel.
    pub fn axis(&self) -> Vec2 {
        let axis = |neg: bool, pos: bool| (pos as i8 - neg as i8) as f32;
        Vec2::new(axis(self.left, self.right), axis(self.up, self.down))
    }

    pub fn is_idle(&self) -> bool {
        self.axis() == Vec2::ZERO
    }
}

/// Discrete actions pressed this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActionPresses {
    pub melee: bool,
    pub ranged: bool,
    pub restart: bool,
}

/// Everything the simulation reads from the player in one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub intent: MoveIntent,
    pub actions: ActionPresses,
}

impl TickInput {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn moving(intent: MoveIntent) -> Self {
        Self {
            intent,
            ..Self::default()
        }
    }

    pub fn melee() -> Self {
        Self {
            actions: ActionPresses {
                melee: true,
                ..ActionPresses::default()
            },
            ..Self::default()
        }
    }

    pub fn ranged() -> Self {
        Self {
            actions: ActionPresses {
                ranged: true,
                ..ActionPresses::default()
            },
            ..Self::default()
        }
    }

    pub fn restart() -> Self {
        Self {
            actions: ActionPresses {
                restart: true,
                ..ActionPresses::default()
            },
            ..Self::default()
        }
    }
}
