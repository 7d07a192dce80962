//! Scene backdrop and camera configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Clear color behind the avatar.
    pub background: String,
    pub camera_position: [f32; 3],
    pub camera_target: [f32; 3],
    /// Vertical field of view.
    pub fov_degrees: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            background: "#02030a".into(),
            camera_position: [2.6, 2.2, 3.2],
            camera_target: [0.0, 0.0, 0.0],
            fov_degrees: 42.0,
        }
    }
}
