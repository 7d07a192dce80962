use super::*;

#[test]
fn default_config_is_valid() {
    assert!(validate(&StudioConfig::default()).is_ok());
}

#[test]
fn zero_capture_size_is_rejected() {
    let mut config = StudioConfig::default();
    config.capture.width = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("capture.width = 0 is out of range [1, 8192]"));
}

#[test]
fn oversized_viewport_is_rejected() {
    let mut config = StudioConfig::default();
    config.viewport.height = 10_000;
    assert!(validate(&config).is_err());
}

#[test]
fn nan_pixel_ratio_is_rejected() {
    let mut config = StudioConfig::default();
    config.viewport.pixel_ratio = f32::NAN;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("viewport.pixel_ratio"));
}

#[test]
fn bad_background_color_is_rejected() {
    let mut config = StudioConfig::default();
    config.scene.background = "midnight".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("scene.background"));
}

#[test]
fn camera_on_target_is_rejected() {
    let mut config = StudioConfig::default();
    config.scene.camera_position = config.scene.camera_target;
    assert!(validate(&config).is_err());
}

#[test]
fn errors_are_collected() {
    let mut config = StudioConfig::default();
    config.capture.width = 0;
    config.capture.height = 0;
    config.capture.file_prefix = " ".into();
    config.preview.frame_rate = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert_eq!(err.matches("; ").count(), 3);
}

#[test]
fn viewport_buffer_beyond_texture_limit_is_rejected() {
    let mut config = StudioConfig::default();
    config.viewport.width = 8192;
    config.viewport.pixel_ratio = 4.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("viewport.width × viewport.pixel_ratio = 32768"));
    assert!(!err.contains("viewport.height"));
}

#[test]
fn viewport_buffer_at_texture_limit_is_accepted() {
    let mut config = StudioConfig::default();
    config.viewport.width = 4096;
    config.viewport.height = 2048;
    config.viewport.pixel_ratio = 2.0;
    assert!(validate(&config).is_ok());
}

#[test]
fn bad_pixel_ratio_is_reported_once() {
    let mut config = StudioConfig::default();
    config.viewport.pixel_ratio = 9.0;
    let err = validate(&config).unwrap_err().to_string();
    assert_eq!(err.matches("pixel_ratio").count(), 1);
}

