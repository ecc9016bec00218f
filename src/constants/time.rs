//! Fixed-step loop constants.

/// Target simulation rate
pub const DEFAULT_TICK_RATE: u32 = 60;
/// Frame deltas longer than this are clamped (milliseconds)
pub const MAX_FRAME_DELTA_MS: u64 = 250;
/// Upper bound on ticks run for a single frame
pub const MAX_TICKS_PER_FRAME: u32 = 5;
