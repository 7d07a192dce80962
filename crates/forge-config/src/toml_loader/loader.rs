//! Reading studio settings from wherever they were found.

use crate::schema::StudioConfig;
use forge_common::ConfigError;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::paths::{default_config_path, seed_default_config};

/// Where studio settings are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Given on the command line. Must exist.
    Explicit(PathBuf),
    /// Platform config dir. Seeded from the template when missing.
    Platform(PathBuf),
}

impl ConfigSource {
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Ok(Self::Explicit(path.to_path_buf())),
            None => default_config_path().map(Self::Platform),
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            Self::Explicit(path) | Self::Platform(path) => path,
        }
    }

    /// Read and parse the settings. No validation happens here.
    pub fn load(&self) -> Result<StudioConfig, ConfigError> {
        let path = self.path();
        match std::fs::read_to_string(path) {
            Ok(text) => parse_studio_toml(&text, path),
            Err(e) if e.kind() == ErrorKind::NotFound => match self {
                Self::Explicit(_) => Err(ConfigError::FileNotFound(path.to_path_buf())),
                Self::Platform(_) => {
                    seed_default_config(path)?;
                    Ok(StudioConfig::default())
                }
            },
            Err(e) => Err(ConfigError::ParseError(format!(
                "failed to read {}: {e}",
                path.display()
            ))),
        }
    }
}

/// Parse settings text; `origin` only labels errors.
pub fn parse_studio_toml(text: &str, origin: &Path) -> Result<StudioConfig, ConfigError> {
    let config = toml::from_str(text)
        .map_err(|e| ConfigError::ParseError(format!("{}: {e}", origin.display())))?;
    debug!(path = %origin.display(), "parsed studio settings");
    Ok(config)
}
