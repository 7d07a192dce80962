//! Torus generation. The ring lies in the XY plane around the Z axis.

use std::f32::consts::PI;

use super::types::{MeshData, MeshVertex};

/// Generate a torus with ring radius `radius` and tube radius `tube`.
///
/// `radial_segments` subdivides the tube cross-section, `tubular_segments`
/// the sweep around the ring.
pub fn generate_torus(
    radius: f32,
    tube: f32,
    radial_segments: u32,
    tubular_segments: u32,
) -> MeshData {
    let radial = radial_segments.max(3);
    let tubular = tubular_segments.max(3);

    let mut mesh = MeshData {
        vertices: Vec::with_capacity(((radial + 1) * (tubular + 1)) as usize),
        indices: Vec::with_capacity((radial * tubular * 6) as usize),
    };

    for j in 0..=radial {
        let v = 2.0 * PI * (j as f32) / (radial as f32);
        for i in 0..=tubular {
            let u = 2.0 * PI * (i as f32) / (tubular as f32);
            let (su, cu) = u.sin_cos();
            let ring = radius + tube * v.cos();
            let position = [ring * cu, ring * su, tube * v.sin()];
            let normal = [v.cos() * cu, v.cos() * su, v.sin()];
            mesh.vertices.push(MeshVertex::new(position, normal));
        }
    }
    mesh.stitch_grid(0, radial + 1, tubular);
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn torus_counts() {
        let mesh = generate_torus(1.0, 0.12, 24, 48);
        assert_eq!(mesh.vertices.len(), 25 * 49);
        assert_eq!(mesh.triangle_count(), 24 * 48 * 2);
    }

    #[test]
    fn torus_is_flat_in_z() {
        let (min, max) = generate_torus(1.0, 0.12, 24, 48).bounds();
        assert!((max[2] - 0.12).abs() < 1e-4);
        assert!((min[2] + 0.12).abs() < 1e-4);
        assert!((max[0] - 1.12).abs() < 1e-4);
        assert!((max[1] - 1.12).abs() < 1e-2);
    }

    #[test]
    fn every_vertex_is_tube_distance_from_ring() {
        let mesh = generate_torus(1.0, 0.25, 8, 16);
        for v in &mesh.vertices {
            let p = v.position;
            let planar = (p[0] * p[0] + p[1] * p[1]).sqrt();
            let d = ((planar - 1.0).powi(2) + p[2] * p[2]).sqrt();
            assert!((d - 0.25).abs() < 1e-5);
        }
    }
}
