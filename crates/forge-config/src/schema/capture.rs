//! High-resolution export configuration.

use serde::{Deserialize, Serialize};

/// Output resolution and file naming for image exports.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureConfig {
    pub width: u32,
    pub height: u32,
    /// Exported files are named `<file_prefix>-<unix millis>.png`.
    pub file_prefix: String,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            width: 3840,
            height: 2160,
            file_prefix: "avatar".into(),
        }
    }
}
