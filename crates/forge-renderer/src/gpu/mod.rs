mod context;
mod offscreen;
mod pipeline;
mod types;
mod uniforms;

pub use context::*;
pub use offscreen::OffscreenRenderer;
pub use pipeline::{AvatarPipeline, GpuNode, RenderTarget, COLOR_FORMAT, DEPTH_FORMAT};
pub use types::*;
pub use uniforms::*;
