use forge_common::Vec3;

use super::types::{AvatarTree, BodyPart, Material, Primitive, ShapeNode};

/// Accumulates shape nodes in emission order.
pub(super) struct TreeBuilder {
    nodes: Vec<ShapeNode>,
}

impl TreeBuilder {
    pub(super) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    pub(super) fn part(
        &mut self,
        part: BodyPart,
        primitive: Primitive,
        position: Vec3,
        scale: Vec3,
        material: Material,
    ) -> &mut Self {
        self.nodes.push(ShapeNode {
            part,
            primitive,
            position,
            scale,
            material,
        });
        self
    }

    /// Two identical nodes mirrored across X: `parts[0]` at `center.x - lateral`,
    /// `parts[1]` at `center.x + lateral`.
    pub(super) fn pair(
        &mut self,
        parts: [BodyPart; 2],
        primitive: Primitive,
        lateral: f32,
        center: Vec3,
        scale: Vec3,
        material: Material,
    ) -> &mut Self {
        let [left, right] = parts;
        self.part(
            left,
            primitive,
            center + Vec3::new(-lateral, 0.0, 0.0),
            scale,
            material,
        );
        self.part(
            right,
            primitive,
            center + Vec3::new(lateral, 0.0, 0.0),
            scale,
            material,
        )
    }

    pub(super) fn build(self, root_position: Vec3) -> AvatarTree {
        AvatarTree {
            root_position,
            nodes: self.nodes,
        }
    }
}
