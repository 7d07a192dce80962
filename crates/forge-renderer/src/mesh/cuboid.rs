//! Axis-aligned box generation.

use super::types::{MeshData, MeshVertex};

/// Face normals paired with the two in-plane axes spanning each face.
const FACES: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
    ([1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]),
    ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
    ([0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, -1.0]),
    ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
    ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
    ([0.0, 0.0, -1.0], [-1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
];

/// Generate a box of the given extents centered at the origin, with flat
/// per-face normals (4 vertices per face).
pub fn generate_cuboid(width: f32, height: f32, depth: f32) -> MeshData {
    let half = [width / 2.0, height / 2.0, depth / 2.0];
    let mut mesh = MeshData {
        vertices: Vec::with_capacity(24),
        indices: Vec::with_capacity(36),
    };

    for (normal, u, v) in FACES {
        let base = mesh.vertices.len() as u32;
        for (su, sv) in [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
            let mut p = [0.0f32; 3];
            for axis in 0..3 {
                p[axis] = (normal[axis] + u[axis] * su + v[axis] * sv) * half[axis];
            }
            mesh.vertices.push(MeshVertex::new(p, normal));
        }
        mesh.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cuboid_has_six_quads() {
        let mesh = generate_cuboid(1.0, 1.0, 1.0);
        assert_eq!(mesh.vertices.len(), 24);
        assert_eq!(mesh.triangle_count(), 12);
    }

    #[test]
    fn cuboid_bounds_match_extents() {
        let (min, max) = generate_cuboid(2.0, 1.0, 0.5).bounds();
        assert_eq!(min, [-1.0, -0.5, -0.25]);
        assert_eq!(max, [1.0, 0.5, 0.25]);
    }

    #[test]
    fn face_vertices_lie_on_their_plane() {
        let mesh = generate_cuboid(1.0, 1.0, 1.0);
        for v in &mesh.vertices {
            let along: f32 = (0..3).map(|a| v.position[a] * v.normal[a]).sum();
            assert!((along - 0.5).abs() < 1e-6);
        }
    }
}
