//! Studio settings validation.
//!
//! Every range check pushes into one error list so a single
//! `ConfigError::ValidationError` reports all problems at once.

mod helpers;

#[cfg(test)]
mod tests;

use crate::colors::validate_color;
use crate::schema::StudioConfig;
use forge_common::ConfigError;

use helpers::{validate_range, validate_range_f32};

/// Largest texture side the renderer will allocate.
pub const MAX_TEXTURE_SIDE: u32 = 8192;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &StudioConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_range(&mut errors, "viewport.width", config.viewport.width, 1, MAX_TEXTURE_SIDE);
    validate_range(&mut errors, "viewport.height", config.viewport.height, 1, MAX_TEXTURE_SIDE);
    validate_range_f32(
        &mut errors,
        "viewport.pixel_ratio",
        config.viewport.pixel_ratio,
        0.5,
        4.0,
    );
    let ratio = config.viewport.pixel_ratio;
    validate_buffer_side(&mut errors, "viewport.width", config.viewport.width, ratio);
    validate_buffer_side(&mut errors, "viewport.height", config.viewport.height, ratio);

    validate_range(&mut errors, "capture.width", config.capture.width, 1, MAX_TEXTURE_SIDE);
    validate_range(&mut errors, "capture.height", config.capture.height, 1, MAX_TEXTURE_SIDE);
    if config.capture.file_prefix.trim().is_empty() {
        errors.push("capture.file_prefix must not be empty".into());
    }

    if !validate_color(&config.scene.background) {
        errors.push(format!(
            "scene.background = {:?} is not a valid color",
            config.scene.background
        ));
    }
    validate_range_f32(&mut errors, "scene.fov_degrees", config.scene.fov_degrees, 10.0, 120.0);
    if config.scene.camera_position == config.scene.camera_target {
        errors.push("scene.camera_position must differ from scene.camera_target".into());
    }

    validate_range(&mut errors, "preview.frame_rate", config.preview.frame_rate, 1, 240);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

/// The drawing buffer is `side × pixel_ratio`, rounded; it must fit a texture.
/// Out-of-range sides and ratios are already reported on their own.
fn validate_buffer_side(errors: &mut Vec<String>, name: &str, side: u32, pixel_ratio: f32) {
    if side == 0 || side > MAX_TEXTURE_SIDE || !(0.5..=4.0).contains(&pixel_ratio) {
        return;
    }
    let physical = (side as f32 * pixel_ratio).round();
    if physical > MAX_TEXTURE_SIDE as f32 {
        errors.push(format!(
            "{name} × viewport.pixel_ratio = {physical} exceeds the texture limit {MAX_TEXTURE_SIDE}"
        ));
    }
}
