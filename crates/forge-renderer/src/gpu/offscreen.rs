//! Headless [`RenderSurface`] backed by wgpu.

use std::sync::mpsc;

use tracing::debug;

use crate::mesh;
use crate::scene::{Camera, Scene};
use crate::surface::{PhysicalSize, RenderSurface};

use super::context::GpuContext;
use super::pipeline::{AvatarPipeline, GpuNode, RenderTarget, COLOR_FORMAT};
use super::types::RendererError;
use super::uniforms::{CameraUniforms, NodeUniforms};

/// Renders the scene into an offscreen texture that can be read back.
///
/// The render target is recreated lazily on the first render after the
/// drawing-buffer extent changes. Node meshes are rebuilt when the scene's
/// revision changes; transforms are uploaded every frame.
pub struct OffscreenRenderer {
    gpu: GpuContext,
    pipeline: AvatarPipeline,
    pixel_ratio: f32,
    size: PhysicalSize,
    target: Option<RenderTarget>,
    nodes: Vec<GpuNode>,
    uploaded_revision: Option<u64>,
}

impl OffscreenRenderer {
    pub fn new(gpu: GpuContext, size: PhysicalSize, pixel_ratio: f32) -> Self {
        let pipeline = AvatarPipeline::new(&gpu.device);
        Self {
            gpu,
            pipeline,
            pixel_ratio,
            size,
            target: None,
            nodes: Vec::new(),
            uploaded_revision: None,
        }
    }

    fn ensure_target(&mut self) -> Result<&RenderTarget, RendererError> {
        let extent = self.buffer_size();
        let max = self.gpu.max_texture_side();
        if extent.width > max || extent.height > max {
            return Err(RendererError::InvalidSize {
                width: extent.width,
                height: extent.height,
                max,
            });
        }

        let stale = self
            .target
            .as_ref()
            .map_or(true, |t| t.width != extent.width || t.height != extent.height);
        if stale {
            debug!(
                width = extent.width,
                height = extent.height,
                "Recreating render target"
            );
        }
        let target = match self.target.take() {
            Some(t) if !stale => t,
            _ => RenderTarget::new(&self.gpu.device, extent.width, extent.height),
        };
        Ok(self.target.insert(target))
    }

    fn sync_nodes(&mut self, scene: &Scene) {
        if self.uploaded_revision == Some(scene.revision()) && !self.nodes.is_empty() {
            return;
        }
        self.nodes = scene
            .tree()
            .iter()
            .map(|node| {
                self.pipeline
                    .create_node(&self.gpu.device, &mesh::build(&node.primitive))
            })
            .collect();
        self.uploaded_revision = Some(scene.revision());
        debug!(nodes = self.nodes.len(), revision = scene.revision(), "Uploaded avatar meshes");
    }
}

impl RenderSurface for OffscreenRenderer {
    fn pixel_ratio(&self) -> f32 {
        self.pixel_ratio
    }

    fn set_pixel_ratio(&mut self, ratio: f32) {
        self.pixel_ratio = ratio;
    }

    fn size(&self) -> PhysicalSize {
        self.size
    }

    fn set_size(&mut self, size: PhysicalSize) {
        self.size = size;
    }

    fn render(&mut self, scene: &Scene, camera: &Camera) -> Result<(), RendererError> {
        self.ensure_target()?;
        self.sync_nodes(scene);

        let Some(target) = self.target.as_ref() else {
            return Err(RendererError::DeviceError("render target missing".into()));
        };

        let camera_uniforms = CameraUniforms::new(
            camera.view_projection(target.width, target.height),
            camera.position,
        );
        self.gpu.queue.write_buffer(
            &self.pipeline.camera_buffer,
            0,
            bytemuck::bytes_of(&camera_uniforms),
        );
        for (gpu_node, node) in self.nodes.iter().zip(scene.tree().iter()) {
            let uniforms = NodeUniforms::new(
                scene.world_matrix(node),
                scene.normal_matrix(node),
                &node.material,
            );
            self.gpu
                .queue
                .write_buffer(&gpu_node.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));
        }

        let [r, g, b, a] = scene.background().to_linear_rgba();
        let background = wgpu::Color {
            r: r as f64,
            g: g as f64,
            b: b as f64,
            a: a as f64,
        };

        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("avatar frame"),
            });
        self.pipeline
            .render(&mut encoder, target, &self.nodes, background);
        self.gpu.queue.submit(std::iter::once(encoder.finish()));
        self.gpu.device.poll(wgpu::Maintain::Wait);

        log_first_frame(target.width, target.height, COLOR_FORMAT);
        Ok(())
    }

    fn read_pixels(&mut self) -> Result<image::RgbaImage, RendererError> {
        let target = self
            .target
            .as_ref()
            .ok_or_else(|| RendererError::ReadbackError("no frame rendered".into()))?;
        let (width, height) = (target.width, target.height);

        let unpadded = width * 4;
        let padded = padded_bytes_per_row(width);
        let buffer = self.gpu.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("avatar readback"),
            size: padded as u64 * height as u64,
            usage: wgpu::BufferUsages::COPY_DST | wgpu::BufferUsages::MAP_READ,
            mapped_at_creation: false,
        });

        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("avatar readback"),
            });
        encoder.copy_texture_to_buffer(
            wgpu::TexelCopyTextureInfo {
                texture: &target.color,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            wgpu::TexelCopyBufferInfo {
                buffer: &buffer,
                layout: wgpu::TexelCopyBufferLayout {
                    offset: 0,
                    bytes_per_row: Some(padded),
                    rows_per_image: Some(height),
                },
            },
            wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
        );
        self.gpu.queue.submit(std::iter::once(encoder.finish()));

        let slice = buffer.slice(..);
        let (tx, rx) = mpsc::channel();
        slice.map_async(wgpu::MapMode::Read, move |result| {
            let _ = tx.send(result);
        });
        self.gpu.device.poll(wgpu::Maintain::Wait);
        rx.recv()
            .map_err(|e| RendererError::ReadbackError(e.to_string()))??;

        let pixels = {
            let mapped = slice.get_mapped_range();
            strip_row_padding(&mapped, unpadded, padded, height)
        };
        buffer.unmap();

        image::RgbaImage::from_raw(width, height, pixels)
            .ok_or_else(|| RendererError::ReadbackError("pixel buffer size mismatch".into()))
    }
}

/// Row pitch for a `width`-pixel RGBA8 copy, rounded up to wgpu's 256-byte
/// alignment.
pub(crate) fn padded_bytes_per_row(width: u32) -> u32 {
    let unpadded = width * 4;
    let align = wgpu::COPY_BYTES_PER_ROW_ALIGNMENT;
    unpadded.div_ceil(align) * align
}

pub(crate) fn strip_row_padding(data: &[u8], unpadded: u32, padded: u32, rows: u32) -> Vec<u8> {
    let mut out = Vec::with_capacity((unpadded * rows) as usize);
    for row in data.chunks(padded as usize).take(rows as usize) {
        out.extend_from_slice(&row[..unpadded as usize]);
    }
    out
}

/// Log the first rendered frame's details once.
fn log_first_frame(width: u32, height: u32, format: wgpu::TextureFormat) {
    static RENDERED: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(false);
    if !RENDERED.swap(true, std::sync::atomic::Ordering::Relaxed) {
        tracing::info!(
            "First frame rendered ({}x{}, format={:?})",
            width,
            height,
            format,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_rounds_to_alignment() {
        assert_eq!(padded_bytes_per_row(64), 256);
        assert_eq!(padded_bytes_per_row(65), 512);
        assert_eq!(padded_bytes_per_row(3840), 15360);
        assert_eq!(padded_bytes_per_row(1), 256);
    }

    #[test]
    fn strip_padding_keeps_pixel_bytes() {
        let padded = padded_bytes_per_row(2);
        let mut data = vec![0u8; (padded * 2) as usize];
        data[..8].copy_from_slice(&[1, 2, 3, 4, 5, 6, 7, 8]);
        data[padded as usize..padded as usize + 8].copy_from_slice(&[9; 8]);
        let out = strip_row_padding(&data, 8, padded, 2);
        assert_eq!(out.len(), 16);
        assert_eq!(&out[..8], &[1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(&out[8..], &[9; 8]);
    }
}
