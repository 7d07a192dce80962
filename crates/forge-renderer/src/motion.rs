//! Idle motion: a slow vertical bob plus a continuous spin of the root.
//!
//! The logic is split into a pure phase update ([`advance_phase`]) and a pure
//! sample function ([`sample`]); [`IdleMotion`] only holds the accumulator.

use std::f64::consts::TAU;

use crate::scene::RootTransform;

/// Phase advance per second of elapsed time.
pub const PHASE_RATE: f32 = 0.3;
/// Peak vertical displacement of the bob.
pub const BOB_AMPLITUDE: f32 = 0.04;
/// Yaw added per second of elapsed time, in radians.
pub const SPIN_RATE: f32 = 0.2;

/// What one frame of idle motion does to the root.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionSample {
    /// Absolute vertical position of the root for this frame.
    pub y_offset: f32,
    /// Yaw to add on top of the current rotation.
    pub yaw_delta: f32,
}

/// Negative and non-finite deltas count as no time elapsed.
fn sanitize(delta: f32) -> f64 {
    if delta.is_finite() && delta > 0.0 {
        delta as f64
    } else {
        0.0
    }
}

/// Advance `phase` by `delta` seconds, wrapped into `[0, 2π)`.
pub fn advance_phase(phase: f64, delta: f32) -> f64 {
    let next = (phase + sanitize(delta) * PHASE_RATE as f64).rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU
    if next >= TAU {
        0.0
    } else {
        next
    }
}

/// Motion for a frame that ended at `phase` after `delta` seconds.
pub fn sample(phase: f64, delta: f32) -> MotionSample {
    MotionSample {
        y_offset: phase.sin() as f32 * BOB_AMPLITUDE,
        yaw_delta: (sanitize(delta) * SPIN_RATE as f64) as f32,
    }
}

/// Phase accumulator driven once per frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct IdleMotion {
    phase: f64,
}

impl IdleMotion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase in `[0, 2π)`.
    pub fn phase(&self) -> f64 {
        self.phase
    }

    /// Advance by `delta` seconds and return the resulting sample.
    pub fn step(&mut self, delta: f32) -> MotionSample {
        self.phase = advance_phase(self.phase, delta);
        sample(self.phase, delta)
    }

    /// Advance and write the result into `root`: the bob replaces the
    /// vertical position, the spin accumulates onto yaw.
    pub fn apply(&mut self, delta: f32, root: &mut RootTransform) -> MotionSample {
        let s = self.step(delta);
        root.position.y = s.y_offset;
        root.yaw += s.yaw_delta;
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forge_common::Vec3;

    fn expected_phase(total: f64) -> f64 {
        (PHASE_RATE as f64 * total).rem_euclid(TAU)
    }

    #[test]
    fn phase_is_additive_across_splits() {
        let deltas: [&[f32]; 4] = [
            &[100.0],
            &[50.0, 50.0],
            &[0.016; 6250],
            &[33.0, 0.5, 16.5, 25.0, 25.0],
        ];
        for split in deltas {
            let mut motion = IdleMotion::new();
            let total: f64 = split.iter().map(|&d| d as f64).sum();
            for &d in split {
                motion.step(d);
            }
            let want = expected_phase(total);
            let diff = (motion.phase() - want).abs();
            assert!(
                diff < 1e-4 || (TAU - diff) < 1e-4,
                "split of {} frames: {} vs {}",
                split.len(),
                motion.phase(),
                want
            );
        }
    }

    #[test]
    fn phase_stays_wrapped() {
        let mut motion = IdleMotion::new();
        for _ in 0..10_000 {
            motion.step(0.5);
            assert!((0.0..TAU).contains(&motion.phase()));
        }
    }

    #[test]
    fn bob_and_spin_values() {
        let mut motion = IdleMotion::new();
        let delta = (std::f64::consts::FRAC_PI_2 / PHASE_RATE as f64) as f32;
        let s = motion.step(delta);
        assert!((s.y_offset - BOB_AMPLITUDE).abs() < 1e-5);
        assert!((s.yaw_delta - delta * SPIN_RATE).abs() < 1e-6);
    }

    #[test]
    fn apply_overwrites_y_and_accumulates_yaw() {
        let mut root = RootTransform {
            position: Vec3::new(0.5, -0.385, 0.25),
            yaw: 1.0,
        };
        let mut motion = IdleMotion::new();
        motion.apply(0.1, &mut root);
        motion.apply(0.1, &mut root);
        assert!((root.yaw - 1.04).abs() < 1e-6);
        assert!((root.position.y - (0.06f64.sin() as f32 * BOB_AMPLITUDE)).abs() < 1e-6);
        assert_eq!(root.position.x, 0.5);
        assert_eq!(root.position.z, 0.25);
    }

    #[test]
    fn yaw_is_not_wrapped() {
        let mut root = RootTransform::default();
        let mut motion = IdleMotion::new();
        for _ in 0..100 {
            motion.apply(1.0, &mut root);
        }
        assert!((root.yaw - 20.0).abs() < 1e-3);
    }

    #[test]
    fn bad_deltas_do_not_move_anything() {
        let mut motion = IdleMotion::new();
        for d in [-1.0, f32::NAN, f32::INFINITY, 0.0] {
            let s = motion.step(d);
            assert_eq!(s.yaw_delta, 0.0);
            assert_eq!(motion.phase(), 0.0);
        }
    }
}
