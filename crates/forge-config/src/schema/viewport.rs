//! On-screen viewport configuration.

use serde::{Deserialize, Serialize};

/// Logical size and device pixel ratio of the live view.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    pub width: u32,
    pub height: u32,
    pub pixel_ratio: f32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            pixel_ratio: 2.0,
        }
    }
}
