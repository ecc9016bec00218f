//! Fixed-step timing.
//!
//! The caller measures real elapsed time per frame and asks how many
//! simulation ticks to run. Long frames are clamped and the per-frame tick
//! count is capped, so a stall drops backlog instead of spiralling.

use std::time::Duration;

use tracing::warn;

use crate::constants::{DEFAULT_TICK_RATE, MAX_FRAME_DELTA_MS, MAX_TICKS_PER_FRAME};

/// How many ticks a frame should run, and what was thrown away
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepPlan {
    pub ticks_to_run: u32,
    pub dropped_backlog: Duration,
}

#[derive(Debug, Clone)]
pub struct FixedStepLoop {
    fixed_dt: Duration,
    max_frame_delta: Duration,
    max_ticks_per_frame: u32,
    accumulator: Duration,
}

impl Default for FixedStepLoop {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_RATE)
    }
}

impl FixedStepLoop {
    /// Loop running at `tick_rate` ticks per second (0 is treated as 1).
    pub fn new(tick_rate: u32) -> Self {
        Self {
            fixed_dt: Duration::from_secs_f64(1.0 / tick_rate.max(1) as f64),
            max_frame_delta: Duration::from_millis(MAX_FRAME_DELTA_MS),
            max_ticks_per_frame: MAX_TICKS_PER_FRAME,
            accumulator: Duration::ZERO,
        }
    }

    pub fn fixed_dt(&self) -> Duration {
        self.fixed_dt
    }

    /// Feed one frame's elapsed time and get back the ticks to run now.
    pub fn advance(&mut self, frame_dt: Duration) -> StepPlan {
        let clamped = frame_dt.min(self.max_frame_delta);
        self.accumulator = self.accumulator.saturating_add(clamped);

        let mut ticks_to_run = 0u32;
        while self.accumulator >= self.fixed_dt && ticks_to_run < self.max_ticks_per_frame {
            self.accumulator = self.accumulator.saturating_sub(self.fixed_dt);
            ticks_to_run += 1;
        }

        let mut dropped_backlog = Duration::ZERO;
        if self.accumulator >= self.fixed_dt {
            dropped_backlog = self.accumulator;
            self.accumulator = Duration::ZERO;
            warn!(
                ticks_to_run,
                dropped_ms = dropped_backlog.as_millis() as u64,
                "sim_clamp_triggered"
            );
        }

        StepPlan {
            ticks_to_run,
            dropped_backlog,
        }
    }
}
