//! Studio settings schema.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the values the studio ships with.

mod capture;
mod logging;
mod preview;
mod scene;
mod viewport;

pub use capture::*;
pub use logging::*;
pub use preview::*;
pub use scene::*;
pub use viewport::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root studio settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StudioConfig {
    pub viewport: ViewportConfig,
    pub capture: CaptureConfig,
    pub scene: SceneConfig,
    pub preview: PreviewConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================
