//! Derived body measurements.

use forge_config::AvatarConfig;

/// Clamp that also absorbs NaN (mapped to `min`), so no input can leak a
/// non-finite value into the geometry.
pub(crate) fn clamp_finite(value: f32, min: f32, max: f32) -> f32 {
    if value.is_nan() {
        min
    } else {
        value.clamp(min, max)
    }
}

/// Measurements derived from a configuration. Every field is finite and
/// strictly positive for any input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Proportions {
    pub leg_height: f32,
    pub body_height: f32,
    pub head_radius: f32,
    pub shoulder_width: f32,
    pub arm_span: f32,
    pub roughness: f32,
    pub torso_width: f32,
    /// Top of the legs.
    pub hip: f32,
    /// Torso center.
    pub chest: f32,
    /// Head center.
    pub head: f32,
}

impl Proportions {
    pub fn derive(config: &AvatarConfig) -> Self {
        let leg_height = 1.1 * clamp_finite(config.leg_length, 0.6, 1.4);
        let body_height = 1.25 * clamp_finite(config.height, 0.7, 1.4);
        let head_radius = 0.38 * clamp_finite(config.head_scale, 0.7, 1.4);
        let shoulder_width = 0.6 * clamp_finite(config.body_width, 0.6, 1.6);
        let arm_span = 0.9 * clamp_finite(config.arm_length, 0.6, 1.5);
        // only the result is clamped, glossiness itself is taken as given
        let roughness = clamp_finite(1.0 - config.glossiness, 0.1, 0.85);

        let hip = leg_height;
        Self {
            leg_height,
            body_height,
            head_radius,
            shoulder_width,
            arm_span,
            roughness,
            torso_width: shoulder_width * 0.7,
            hip,
            chest: hip + body_height / 2.0,
            head: hip + body_height + head_radius * 1.15,
        }
    }
}
