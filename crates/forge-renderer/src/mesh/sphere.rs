//! UV sphere generation.

use std::f32::consts::PI;

use super::types::{MeshData, MeshVertex};

/// Generate a UV sphere of `radius` centered at the origin. North pole is
/// (0, r, 0).
///
/// `width_segments` runs around Y, `height_segments` pole to pole. Counts
/// below 3 and 2 respectively are raised to those minimums.
pub fn generate_sphere(radius: f32, width_segments: u32, height_segments: u32) -> MeshData {
    let n_lon = width_segments.max(3);
    let n_lat = height_segments.max(2);

    let mut mesh = MeshData {
        vertices: Vec::with_capacity(((n_lat + 1) * (n_lon + 1)) as usize),
        indices: Vec::with_capacity((n_lat * n_lon * 6) as usize),
    };

    for lat in 0..=n_lat {
        for lon in 0..=n_lon {
            let n = sphere_point(lat, lon, n_lat, n_lon);
            mesh.vertices
                .push(MeshVertex::new([n[0] * radius, n[1] * radius, n[2] * radius], n));
        }
    }
    mesh.stitch_grid(0, n_lat + 1, n_lon);
    mesh
}

/// Compute a point on the unit sphere from latitude/longitude indices.
pub(crate) fn sphere_point(lat: u32, lon: u32, n_lat: u32, n_lon: u32) -> [f32; 3] {
    let theta = PI * (lat as f32) / (n_lat as f32);
    let phi = 2.0 * PI * (lon as f32) / (n_lon as f32);
    unit_direction(theta, phi)
}

/// Unit vector for polar angle `theta` (from +Y) and azimuth `phi`.
pub(crate) fn unit_direction(theta: f32, phi: f32) -> [f32; 3] {
    let sin_theta = theta.sin();
    [sin_theta * phi.cos(), theta.cos(), sin_theta * phi.sin()]
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sphere_vertex_and_index_counts() {
        let mesh = generate_sphere(1.0, 8, 4);
        assert_eq!(mesh.vertices.len(), 5 * 9);
        assert_eq!(mesh.indices.len(), 4 * 8 * 6);
    }

    #[test]
    fn first_vertex_is_north_pole() {
        let mesh = generate_sphere(2.0, 8, 4);
        let v = &mesh.vertices[0];
        assert!(v.position[0].abs() < 1e-6);
        assert!((v.position[1] - 2.0).abs() < 1e-6);
        assert!(v.position[2].abs() < 1e-6);
    }

    #[test]
    fn positions_lie_on_radius() {
        let mesh = generate_sphere(0.5, 16, 12);
        for v in &mesh.vertices {
            let p = v.position;
            let len = (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt();
            assert!((len - 0.5).abs() < 1e-5);
            // normal points along position
            assert!((p[1] / 0.5 - v.normal[1]).abs() < 1e-5);
        }
    }

    #[test]
    fn minimum_clamp() {
        let mesh = generate_sphere(1.0, 1, 1);
        assert_eq!(mesh.indices.len(), (2 * 3 * 6) as usize);
    }

    #[test]
    fn south_pole() {
        let p = sphere_point(4, 0, 4, 8);
        assert!(p[0].abs() < 1e-5);
        assert!((p[1] + 1.0).abs() < 1e-5);
        assert!(p[2].abs() < 1e-5);
    }
}
