//! One-shot high-resolution PNG capture.
//!
//! [`CaptureBridge::capture`] temporarily switches the surface to a 1:1
//! pixel ratio at the capture resolution, renders and encodes one frame,
//! then puts the ratio and size back and repaints. The switch is held by a
//! scoped guard, so the surface is restored even when the high-resolution
//! pass fails.

mod guard;


use std::io::Cursor;

use tracing::{debug, info};

use crate::gpu::RendererError;
use crate::scene::{Camera, Scene};
use crate::surface::{PhysicalSize, RenderSurface};
use guard::SurfaceStateGuard;

/// Default capture resolution (4K UHD).
pub const CAPTURE_RESOLUTION: PhysicalSize = PhysicalSize::new(3840, 2160);

#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    #[error("renderer has not produced a frame yet")]
    NotReady,

    #[error(transparent)]
    Render(#[from] RendererError),
}

/// A lossless RGBA PNG and its pixel dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    pub width: u32,
    pub height: u32,
    pub bytes: Vec<u8>,
}

impl EncodedImage {
    pub fn encode_png(pixels: &image::RgbaImage) -> Result<Self, RendererError> {
        let mut buf = Cursor::new(Vec::new());
        pixels.write_to(&mut buf, image::ImageFormat::Png)?;
        Ok(Self {
            width: pixels.width(),
            height: pixels.height(),
            bytes: buf.into_inner(),
        })
    }

    /// `<prefix>-<millis>.png`.
    pub fn file_name(prefix: &str, timestamp_millis: i64) -> String {
        format!("{prefix}-{timestamp_millis}.png")
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Captures frames from a surface once it has rendered at least once.
#[derive(Debug, Clone)]
pub struct CaptureBridge {
    resolution: PhysicalSize,
    ready: bool,
}

impl Default for CaptureBridge {
    fn default() -> Self {
        Self::new()
    }
}

impl CaptureBridge {
    pub fn new() -> Self {
        Self::with_resolution(CAPTURE_RESOLUTION)
    }

    /// Zero sides are raised to 1.
    pub fn with_resolution(resolution: PhysicalSize) -> Self {
        Self {
            resolution: PhysicalSize::new(resolution.width.max(1), resolution.height.max(1)),
            ready: false,
        }
    }

    pub fn resolution(&self) -> PhysicalSize {
        self.resolution
    }

    /// Called once the surface has produced its first frame.
    pub fn mark_ready(&mut self) {
        if !self.ready {
            debug!("Capture bridge ready");
        }
        self.ready = true;
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Render `scene` at the capture resolution and return it as PNG.
    ///
    /// Returns [`CaptureError::NotReady`] before [`mark_ready`](Self::mark_ready).
    /// On every other path the surface's pixel ratio and size are restored
    /// and the view is repainted at its original resolution.
    pub fn capture<S: RenderSurface>(
        &self,
        surface: &mut S,
        scene: &Scene,
        camera: &Camera,
    ) -> Result<EncodedImage, CaptureError> {
        if !self.ready {
            return Err(CaptureError::NotReady);
        }

        let mut held = SurfaceStateGuard::acquire(surface, scene, camera);
        held.set_pixel_ratio(1.0);
        held.set_size(self.resolution);
        held.render(scene, camera)?;
        let pixels = held.read_pixels()?;
        let image = EncodedImage::encode_png(&pixels)?;
        held.release()?;

        info!(
            width = image.width,
            height = image.height,
            bytes = image.len(),
            "Captured frame"
        );
        Ok(image)
    }
}
