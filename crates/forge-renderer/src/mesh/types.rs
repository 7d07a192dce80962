//! Mesh vertex types and buffer layout.

/// A single mesh vertex.
///
/// Layout: position(vec3) + normal(vec3) = 24 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl MeshVertex {
    /// wgpu vertex buffer layout for `MeshVertex`.
    pub const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<MeshVertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[
            // position: vec3<f32> at offset 0
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 0,
                shader_location: 0,
            },
            // normal: vec3<f32> at offset 12
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 12,
                shader_location: 1,
            },
        ],
    };

    pub(crate) fn new(position: [f32; 3], normal: [f32; 3]) -> Self {
        Self { position, normal }
    }
}

/// Indexed triangle list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshData {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Axis-aligned bounds as `(min, max)`. Zero box for an empty mesh.
    pub fn bounds(&self) -> ([f32; 3], [f32; 3]) {
        if self.vertices.is_empty() {
            return ([0.0; 3], [0.0; 3]);
        }
        let mut min = [f32::MAX; 3];
        let mut max = [f32::MIN; 3];
        for v in &self.vertices {
            for axis in 0..3 {
                min[axis] = min[axis].min(v.position[axis]);
                max[axis] = max[axis].max(v.position[axis]);
            }
        }
        (min, max)
    }

    /// Connect `rows` consecutive rings of `cols + 1` vertices each, starting
    /// at vertex `base`, into quads.
    pub(crate) fn stitch_grid(&mut self, base: u32, rows: u32, cols: u32) {
        let stride = cols + 1;
        for row in 0..rows.saturating_sub(1) {
            for col in 0..cols {
                let a = base + row * stride + col;
                let b = a + stride;
                let c = a + 1;
                let d = b + 1;
                self.indices.extend_from_slice(&[a, b, c, b, d, c]);
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mesh_vertex_size_is_24_bytes() {
        assert_eq!(std::mem::size_of::<MeshVertex>(), 24);
    }

    #[test]
    fn mesh_vertex_alignment_is_4_bytes() {
        assert_eq!(std::mem::align_of::<MeshVertex>(), 4);
    }

    #[test]
    fn bytemuck_cast_works() {
        let v = MeshVertex::new([1.0, 2.0, 3.0], [0.0, 1.0, 0.0]);
        let bytes: &[u8] = bytemuck::bytes_of(&v);
        assert_eq!(bytes.len(), 24);
    }

    #[test]
    fn stitch_grid_emits_two_triangles_per_cell() {
        let mut mesh = MeshData::default();
        mesh.stitch_grid(0, 3, 4);
        assert_eq!(mesh.triangle_count(), 2 * 4 * 2);
        assert!(mesh.indices.iter().all(|&i| i < 3 * 5));
    }

    #[test]
    fn empty_bounds() {
        assert_eq!(MeshData::default().bounds(), ([0.0; 3], [0.0; 3]));
    }
}
