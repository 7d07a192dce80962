//! Avatar Forge configuration.
//!
//! Two kinds of configuration live here:
//!
//! - [`AvatarConfig`], the in-memory parameter record describing one avatar.
//!   It is never persisted; every edit produces a fresh value.
//! - [`StudioConfig`], optional TOML studio settings (viewport, capture
//!   resolution, camera, logging). All sections use defaults so partial
//!   files work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use forge_config::{load_config, AvatarConfig, AvatarEdit, ScaleParam};
//!
//! let studio = load_config(None).expect("failed to load studio settings");
//! let avatar = AvatarConfig::default().apply(AvatarEdit::Scale(ScaleParam::Height, 1.2));
//! println!("{} {}", studio.capture.width, avatar.height);
//! ```

pub mod avatar;
pub mod colors;
pub mod randomize;
pub mod schema;
pub mod sliders;
pub mod toml_loader;
pub mod validation;

pub use avatar::{AvatarConfig, AvatarEdit, ColorParam, ScaleParam};
pub use randomize::randomize;
pub use schema::{StudioConfig, CONFIG_SCHEMA_VERSION};
pub use sliders::{from_percent, to_percent, Slider, SLIDERS};

use forge_common::ConfigError;
use std::path::Path;
use tracing::info;

/// Load studio settings from `path`, or from the platform default location.
///
/// The default location is seeded with a commented template if missing.
/// Out-of-range values are an error so callers can decide to fall back.
pub fn load_config(path: Option<&Path>) -> Result<StudioConfig, ConfigError> {
    let source = toml_loader::ConfigSource::resolve(path)?;
    let config = source.load()?;
    validation::validate(&config)?;
    info!(path = %source.path().display(), "loaded studio config");
    Ok(config)
}

/// Serialize studio settings to a pretty-printed JSON string.
pub fn config_to_json(config: &StudioConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
