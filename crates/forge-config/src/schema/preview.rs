//! Headless preview loop configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    /// Simulated display refresh rate; each frame advances by `1 / frame_rate`.
    pub frame_rate: u32,
    /// Frames rendered before the export is taken.
    pub frames: u32,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            frame_rate: 60,
            frames: 120,
        }
    }
}

impl PreviewConfig {
    /// Seconds per frame.
    pub fn frame_delta(&self) -> f32 {
        1.0 / self.frame_rate.max(1) as f32
    }
}
