//! Avatar geometry, animation and capture.
//!
//! - [`compose`] turns an [`AvatarConfig`](forge_config::AvatarConfig) into
//!   an [`AvatarTree`] of primitive shape descriptors.
//! - [`IdleMotion`] bobs and spins the tree's root every frame.
//! - [`CaptureBridge`] renders a one-off high-resolution PNG through any
//!   [`RenderSurface`] and puts the surface back the way it found it.
//! - [`OffscreenRenderer`] is the wgpu-backed surface used by the studio.

pub mod capture;
pub mod compose;
pub mod gpu;
pub mod matrix;
pub mod mesh;
pub mod motion;
pub mod perf;
pub mod scene;
pub mod surface;

pub use capture::{CaptureBridge, CaptureError, EncodedImage};
pub use compose::{compose, AvatarTree, BodyPart, Material, Primitive, Proportions, ShapeNode};
pub use gpu::{GpuContext, OffscreenRenderer, RendererError};
pub use motion::{IdleMotion, MotionSample};
pub use perf::{FrameStats, FrameTimer};
pub use scene::{Camera, RootTransform, Scene};
pub use surface::{PhysicalSize, RenderSurface};
