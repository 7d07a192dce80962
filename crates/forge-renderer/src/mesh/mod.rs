//! Triangle meshes for the shape primitives.

mod capsule;
mod cuboid;
mod sphere;
mod torus;
mod types;

pub use capsule::generate_capsule;
pub use cuboid::generate_cuboid;
pub use sphere::generate_sphere;
pub use torus::generate_torus;
pub use types::{MeshData, MeshVertex};

use crate::compose::Primitive;

/// Tessellate a primitive with the parameters it carries.
pub fn build(primitive: &Primitive) -> MeshData {
    match *primitive {
        Primitive::Capsule {
            radius,
            length,
            cap_segments,
            radial_segments,
        } => generate_capsule(radius, length, cap_segments, radial_segments),
        Primitive::Sphere {
            radius,
            width_segments,
            height_segments,
        } => generate_sphere(radius, width_segments, height_segments),
        Primitive::Cuboid {
            width,
            height,
            depth,
        } => generate_cuboid(width, height, depth),
        Primitive::Torus {
            radius,
            tube,
            radial_segments,
            tubular_segments,
        } => generate_torus(radius, tube, radial_segments, tubular_segments),
    }
}
