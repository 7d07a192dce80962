//! Tests for locating, seeding and parsing studio settings.

use super::*;
use forge_common::ConfigError;
use std::path::Path;

#[test]
fn missing_explicit_file_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.toml");
    let err = ConfigSource::Explicit(path.clone()).load().unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound(p) if p == path));
}

#[test]
fn missing_platform_file_is_seeded_with_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("avatar-forge").join("studio.toml");

    let config = ConfigSource::Platform(path.clone()).load().unwrap();
    assert_eq!(config.capture.width, 3840);
    assert!(path.exists());

    // The seeded template parses back to the defaults.
    let reread = ConfigSource::Platform(path).load().unwrap();
    assert_eq!(reread.viewport.width, 1280);
    assert_eq!(reread.scene.background, "#02030a");
}

#[test]
fn seeding_never_overwrites() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("studio.toml");
    std::fs::write(&path, "[capture]\nfile_prefix = \"mine\"\n").unwrap();

    assert!(!seed_default_config(&path).unwrap());
    let config = ConfigSource::Platform(path).load().unwrap();
    assert_eq!(config.capture.file_prefix, "mine");
}

#[test]
fn partial_file_keeps_defaults() {
    let text = r##"
[viewport]
width = 1920
pixel_ratio = 1.0

[scene]
background = "#ffffff"
"##;
    let config = parse_studio_toml(text, Path::new("studio.toml")).unwrap();
    assert_eq!(config.viewport.width, 1920);
    assert!((config.viewport.pixel_ratio - 1.0).abs() < f32::EPSILON);
    assert_eq!(config.scene.background, "#ffffff");
    assert_eq!(config.viewport.height, 720);
    assert_eq!(config.capture.width, 3840);
}

#[test]
fn parse_error_names_the_file() {
    let err = parse_studio_toml("this is not valid toml {{{", Path::new("/etc/forge/studio.toml"))
        .unwrap_err();
    assert!(matches!(&err, ConfigError::ParseError(msg) if msg.starts_with("/etc/forge/studio.toml")));
}

#[test]
fn loading_does_not_validate() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("studio.toml");
    std::fs::write(&path, "[capture]\nwidth = 0\n").unwrap();

    let config = ConfigSource::Explicit(path).load().unwrap();
    assert_eq!(config.capture.width, 0);
}

#[test]
fn resolve_prefers_explicit_path() {
    let source = ConfigSource::resolve(Some(Path::new("custom.toml"))).unwrap();
    assert_eq!(source, ConfigSource::Explicit("custom.toml".into()));
    assert_eq!(source.path(), Path::new("custom.toml"));
}

#[test]
fn platform_path_is_reasonable() {
    if let Ok(ConfigSource::Platform(path)) = ConfigSource::resolve(None) {
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("avatar-forge"));
        assert!(path_str.ends_with("studio.toml"));
    }
}
