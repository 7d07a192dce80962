//! Capsule generation: a Y-axis cylinder between two hemispherical caps.

use std::f32::consts::{FRAC_PI_2, PI};

use super::sphere::unit_direction;
use super::types::{MeshData, MeshVertex};

/// Generate a capsule whose cylindrical section is `length` tall and whose
/// caps have `radius`. Total height is `length + 2 * radius`.
///
/// Rings are laid out top to bottom: `cap_segments + 1` rings over the upper
/// cap, then the same over the lower cap. The band between the two equator
/// rings forms the cylinder wall.
pub fn generate_capsule(
    radius: f32,
    length: f32,
    cap_segments: u32,
    radial_segments: u32,
) -> MeshData {
    let caps = cap_segments.max(1);
    let radial = radial_segments.max(3);
    let half = length.max(0.0) / 2.0;
    let rings = 2 * (caps + 1);

    let mut mesh = MeshData {
        vertices: Vec::with_capacity((rings * (radial + 1)) as usize),
        indices: Vec::with_capacity(((rings - 1) * radial * 6) as usize),
    };

    for (offset, start) in [(half, 0.0), (-half, FRAC_PI_2)] {
        for ring in 0..=caps {
            let theta = start + FRAC_PI_2 * (ring as f32) / (caps as f32);
            for seg in 0..=radial {
                let phi = 2.0 * PI * (seg as f32) / (radial as f32);
                let n = unit_direction(theta, phi);
                mesh.vertices.push(MeshVertex::new(
                    [n[0] * radius, n[1] * radius + offset, n[2] * radius],
                    n,
                ));
            }
        }
    }
    mesh.stitch_grid(0, rings, radial);
    mesh
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capsule_counts() {
        let mesh = generate_capsule(0.5, 1.0, 4, 8);
        assert_eq!(mesh.vertices.len(), 10 * 9);
        assert_eq!(mesh.triangle_count(), 9 * 8 * 2);
    }

    #[test]
    fn capsule_height_is_length_plus_caps() {
        let mesh = generate_capsule(0.32, 1.0, 16, 32);
        let (min, max) = mesh.bounds();
        assert!((max[1] - 0.82).abs() < 1e-5);
        assert!((min[1] + 0.82).abs() < 1e-5);
        assert!((max[0] - 0.32).abs() < 1e-3);
    }

    #[test]
    fn capsule_normals_are_unit() {
        let mesh = generate_capsule(1.0, 0.4, 16, 24);
        for v in &mesh.vertices {
            let n = v.normal;
            let len = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
            assert!((len - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn indices_in_range() {
        let mesh = generate_capsule(1.0, 0.8, 24, 32);
        let count = mesh.vertices.len() as u32;
        assert!(mesh.indices.iter().all(|&i| i < count));
    }
}
