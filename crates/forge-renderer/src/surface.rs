//! The renderer handle the capture bridge and the frame loop drive.

use crate::gpu::RendererError;
use crate::scene::{Camera, Scene};

/// Pixel dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhysicalSize {
    pub width: u32,
    pub height: u32,
}

impl PhysicalSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Drawing-buffer extent for an output `size` at `pixel_ratio`.
///
/// Each side is rounded and never drops below 1.
pub fn buffer_extent(size: PhysicalSize, pixel_ratio: f32) -> PhysicalSize {
    let ratio = if pixel_ratio.is_finite() && pixel_ratio > 0.0 {
        pixel_ratio
    } else {
        1.0
    };
    let scale = |side: u32| ((side as f32 * ratio).round() as u32).max(1);
    PhysicalSize::new(scale(size.width), scale(size.height))
}

/// A render target with a pixel-scaling factor and an output size.
///
/// The drawing buffer is `size × pixel_ratio`. Changing either only takes
/// effect on the next [`render`](RenderSurface::render); nothing repaints
/// on its own.
pub trait RenderSurface {
    fn pixel_ratio(&self) -> f32;
    fn set_pixel_ratio(&mut self, ratio: f32);

    fn size(&self) -> PhysicalSize;
    fn set_size(&mut self, size: PhysicalSize);

    fn buffer_size(&self) -> PhysicalSize {
        buffer_extent(self.size(), self.pixel_ratio())
    }

    /// Synchronously draw one frame of `scene` through `camera`.
    fn render(&mut self, scene: &Scene, camera: &Camera) -> Result<(), RendererError>;

    /// Contents of the last rendered frame as straight RGBA.
    fn read_pixels(&mut self) -> Result<image::RgbaImage, RendererError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extent_scales_by_ratio() {
        let e = buffer_extent(PhysicalSize::new(1280, 720), 2.0);
        assert_eq!(e, PhysicalSize::new(2560, 1440));
    }

    #[test]
    fn extent_rounds_and_floors_at_one() {
        assert_eq!(
            buffer_extent(PhysicalSize::new(101, 3), 1.5),
            PhysicalSize::new(152, 5)
        );
        assert_eq!(
            buffer_extent(PhysicalSize::new(0, 0), 1.0),
            PhysicalSize::new(1, 1)
        );
    }

    #[test]
    fn bad_ratio_treated_as_one() {
        for ratio in [0.0, -2.0, f32::NAN, f32::INFINITY] {
            assert_eq!(
                buffer_extent(PhysicalSize::new(640, 480), ratio),
                PhysicalSize::new(640, 480)
            );
        }
    }

    #[test]
    fn physical_size_copy_and_eq() {
        let a = PhysicalSize::new(800, 600);
        let b = a;
        assert_eq!(a, b);
    }
}
