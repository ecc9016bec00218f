//! Item-related constants.

/// Health restored by a healing potion
pub const HEALTH_POTION_HEAL: i32 = 25;
/// Bob phase advance per tick
pub const ITEM_BOB_STEP: f32 = 0.1;
/// Vertical bob amplitude in world units per tick
pub const ITEM_BOB_AMPLITUDE: f32 = 0.5;
