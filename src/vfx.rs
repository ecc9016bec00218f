//! Screen shake.
//!
//! Kept separate from entity state: combat writes it, the renderer reads it,
//! and nothing in the simulation depends on its value.

use glam::Vec2;
use rand::Rng;

/// Transient camera shake magnitude in pixels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScreenShake {
    magnitude: u32,
}

impl ScreenShake {
    pub fn magnitude(&self) -> u32 {
        self.magnitude
    }

    /// Start a shake of `amount`, replacing any shake in progress.
    pub fn trigger(&mut self, amount: u32) {
        self.magnitude = amount;
    }

    /// Fade by one step; called once per tick.
    pub fn decay(&mut self) {
        self.magnitude = self.magnitude.saturating_sub(1);
    }

    /// Random camera offset for this frame, within +/- magnitude on each axis.
    pub fn offset(&self, rng: &mut impl Rng) -> Vec2 {
        if self.magnitude == 0 {
            return Vec2::ZERO;
        }
        let m = self.magnitude as i32;
        Vec2::new(rng.gen_range(-m..=m) as f32, rng.gen_range(-m..=m) as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_shake_decays_to_zero() {
        let mut shake = ScreenShake::default();
        shake.trigger(2);
        shake.decay();
        assert_eq!(shake.magnitude(), 1);
        shake.decay();
        shake.decay();
        assert_eq!(shake.magnitude(), 0);
    }

    #[test]
    fn test_offset_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut shake = ScreenShake::default();
        assert_eq!(shake.offset(&mut rng), Vec2::ZERO);
        shake.trigger(3);
        for _ in 0..100 {
            let offset = shake.offset(&mut rng);
            assert!(offset.x.abs() <= 3.0 && offset.y.abs() <= 3.0);
        }
    }
}
