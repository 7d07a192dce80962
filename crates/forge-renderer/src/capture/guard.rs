use std::ops::{Deref, DerefMut};

use tracing::warn;

use crate::gpu::RendererError;
use crate::scene::{Camera, Scene};
use crate::surface::{PhysicalSize, RenderSurface};

/// Exclusive hold on a surface's ratio and size.
///
/// Records both on acquire. [`release`](Self::release) writes them back and
/// repaints; if the guard is dropped without a release the same happens in
/// `Drop`, with a repaint failure logged instead of returned.
pub(super) struct SurfaceStateGuard<'a, S: RenderSurface> {
    surface: &'a mut S,
    scene: &'a Scene,
    camera: &'a Camera,
    saved_ratio: f32,
    saved_size: PhysicalSize,
    restored: bool,
}

impl<'a, S: RenderSurface> SurfaceStateGuard<'a, S> {
    pub(super) fn acquire(surface: &'a mut S, scene: &'a Scene, camera: &'a Camera) -> Self {
        let saved_ratio = surface.pixel_ratio();
        let saved_size = surface.size();
        Self {
            surface,
            scene,
            camera,
            saved_ratio,
            saved_size,
            restored: false,
        }
    }

    fn restore(&mut self) -> Result<(), RendererError> {
        self.restored = true;
        self.surface.set_pixel_ratio(self.saved_ratio);
        self.surface.set_size(self.saved_size);
        // resizing alone leaves the old buffer contents on screen
        self.surface.render(self.scene, self.camera)
    }

    pub(super) fn release(mut self) -> Result<(), RendererError> {
        self.restore()
    }
}

impl<S: RenderSurface> Deref for SurfaceStateGuard<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.surface
    }
}

impl<S: RenderSurface> DerefMut for SurfaceStateGuard<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.surface
    }
}

impl<S: RenderSurface> Drop for SurfaceStateGuard<'_, S> {
    fn drop(&mut self) {
        if self.restored {
            return;
        }
        if let Err(e) = self.restore() {
            warn!(error = %e, "Repaint after interrupted capture failed");
        }
    }
}
