//! Shape descriptor types produced by the composer.

use forge_common::{Color, Vec3};
use serde::Serialize;

/// A primitive shape with the tessellation parameters it is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Primitive {
    /// Cylinder of `length` capped by two hemispheres of `radius`, along Y.
    Capsule {
        radius: f32,
        length: f32,
        cap_segments: u32,
        radial_segments: u32,
    },
    Sphere {
        radius: f32,
        width_segments: u32,
        height_segments: u32,
    },
    Cuboid {
        width: f32,
        height: f32,
        depth: f32,
    },
    /// Ring in the XY plane.
    Torus {
        radius: f32,
        tube: f32,
        radial_segments: u32,
        tubular_segments: u32,
    },
}

/// Surface description: base color plus metal/rough response.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Material {
    pub color: Color,
    pub roughness: f32,
    pub metalness: f32,
}

impl Material {
    pub const fn new(color: Color, roughness: f32, metalness: f32) -> Self {
        Self {
            color,
            roughness,
            metalness,
        }
    }
}

/// Which piece of the figure a node draws. `Left*` parts sit on the −X side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyPart {
    Torso,
    LeftLeg,
    RightLeg,
    Head,
    Hair,
    LeftEye,
    RightEye,
    Nose,
    LeftEyebrow,
    RightEyebrow,
    Beard,
    LeftArm,
    RightArm,
    LeftHand,
    RightHand,
    Belt,
}

/// One positioned, scaled, colored primitive.
///
/// `position` is relative to the tree root.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShapeNode {
    pub part: BodyPart,
    pub primitive: Primitive,
    pub position: Vec3,
    pub scale: Vec3,
    pub material: Material,
}

/// The composed figure: a root placement and its child shapes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AvatarTree {
    pub root_position: Vec3,
    pub nodes: Vec<ShapeNode>,
}

impl AvatarTree {
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, part: BodyPart) -> Option<&ShapeNode> {
        self.nodes.iter().find(|n| n.part == part)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ShapeNode> {
        self.nodes.iter()
    }
}
