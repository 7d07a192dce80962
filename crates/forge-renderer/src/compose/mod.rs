//! Mesh composition: configuration in, shape descriptors out.
//!
//! [`compose`] is pure and total. Every numeric input is clamped (see
//! [`Proportions`]), so any configuration yields a well-formed tree with
//! strictly positive scales. The beard flag is the only input that changes
//! how many nodes the tree holds.

mod builder;
mod proportions;
mod types;


pub use proportions::Proportions;
pub use types::*;

use builder::TreeBuilder;
use forge_common::Vec3;
use forge_config::AvatarConfig;

/// Legs never get thinner than this, however narrow the torso.
pub const MIN_LEG_THICKNESS: f32 = 0.18;

/// Root sits this fraction of the hip height below the origin.
pub const ROOT_DROP: f32 = -0.35;

const TORSO_SHAPE: Primitive = Primitive::Capsule {
    radius: 0.32,
    length: 1.0,
    cap_segments: 16,
    radial_segments: 32,
};
const LEG_SHAPE: Primitive = Primitive::Capsule {
    radius: 0.22,
    length: 1.0,
    cap_segments: 16,
    radial_segments: 32,
};
const HEAD_SHAPE: Primitive = Primitive::Sphere {
    radius: 1.0,
    width_segments: 48,
    height_segments: 48,
};
const SMALL_SPHERE: Primitive = Primitive::Sphere {
    radius: 1.0,
    width_segments: 32,
    height_segments: 32,
};
const NOSE_SHAPE: Primitive = Primitive::Capsule {
    radius: 1.0,
    length: 0.4,
    cap_segments: 16,
    radial_segments: 24,
};
const BROW_SHAPE: Primitive = Primitive::Cuboid {
    width: 1.0,
    height: 1.0,
    depth: 1.0,
};
const BEARD_SHAPE: Primitive = Primitive::Capsule {
    radius: 1.0,
    length: 0.8,
    cap_segments: 24,
    radial_segments: 32,
};
const ARM_SHAPE: Primitive = Primitive::Capsule {
    radius: 0.5,
    length: 1.0,
    cap_segments: 16,
    radial_segments: 32,
};
const BELT_SHAPE: Primitive = Primitive::Torus {
    radius: 1.0,
    tube: 0.12,
    radial_segments: 24,
    tubular_segments: 48,
};

/// Build the shape tree for `config`.
///
/// Parts are emitted in a fixed order: torso, legs, head, hair, eyes, nose,
/// eyebrows, beard (when enabled), arms, hands, belt.
pub fn compose(config: &AvatarConfig) -> AvatarTree {
    let p = Proportions::derive(config);
    let r = p.roughness;
    let h = p.head_radius;
    let tw = p.torso_width;

    let mut tree = TreeBuilder::with_capacity(16);

    tree.part(
        BodyPart::Torso,
        TORSO_SHAPE,
        Vec3::new(0.0, p.chest, 0.0),
        Vec3::new(tw, p.body_height, tw * 0.8),
        Material::new(config.top_color, r, 0.1),
    );

    let leg_thickness = (tw * 0.35).max(MIN_LEG_THICKNESS);
    tree.pair(
        [BodyPart::LeftLeg, BodyPart::RightLeg],
        LEG_SHAPE,
        tw * 0.3,
        Vec3::new(0.0, p.hip + p.leg_height / 2.0, 0.0),
        Vec3::new(leg_thickness, p.leg_height, leg_thickness),
        Material::new(config.bottom_color, r, 0.08),
    );

    tree.part(
        BodyPart::Head,
        HEAD_SHAPE,
        Vec3::new(0.0, p.head, 0.0),
        Vec3::splat(h),
        Material::new(config.skin_color, r, 0.05),
    );
    tree.part(
        BodyPart::Hair,
        HEAD_SHAPE,
        Vec3::new(0.0, p.head + h * 0.35, 0.0),
        Vec3::new(h * 1.05, h * 1.1, h * 1.05),
        Material::new(config.hair_color, (r * 0.7).max(0.2), 0.2),
    );

    let eye_line = Vec3::new(0.0, p.head + h * 0.2, h * 0.65);
    tree.pair(
        [BodyPart::LeftEye, BodyPart::RightEye],
        SMALL_SPHERE,
        h * 0.35,
        eye_line,
        Vec3::splat(h * 0.2),
        Material::new(config.eye_color, 0.2, 0.05),
    );
    tree.part(
        BodyPart::Nose,
        NOSE_SHAPE,
        eye_line + Vec3::new(0.0, -h * 0.22, 0.0),
        Vec3::new(h * 0.5, h * 0.12, h * 0.1),
        Material::new(config.accessory_color, 0.15, 0.35),
    );

    tree.pair(
        [BodyPart::LeftEyebrow, BodyPart::RightEyebrow],
        BROW_SHAPE,
        h * 0.38,
        Vec3::new(0.0, p.head + h * 0.45, h * 0.62),
        Vec3::new(h * 0.35, h * 0.08, h * 0.08),
        Material::new(config.eyebrow_color, 0.25, 0.05),
    );

    if config.beard {
        tree.part(
            BodyPart::Beard,
            BEARD_SHAPE,
            Vec3::new(0.0, p.head - h * 0.15, h * 0.58),
            Vec3::new(h * 0.8, h * 0.5, h * 0.3),
            Material::new(config.hair_color, 0.35, 0.0),
        );
    }

    let shoulder = Vec3::new(0.0, p.hip + p.body_height * 0.55, 0.0);
    tree.pair(
        [BodyPart::LeftArm, BodyPart::RightArm],
        ARM_SHAPE,
        p.shoulder_width,
        shoulder,
        Vec3::new(0.22, p.arm_span, 0.22),
        Material::new(config.top_color, r, 0.1),
    );
    tree.pair(
        [BodyPart::LeftHand, BodyPart::RightHand],
        SMALL_SPHERE,
        p.shoulder_width,
        shoulder + Vec3::new(0.0, -p.arm_span * 0.6, 0.0),
        Vec3::new(0.18, 0.25, 0.18),
        Material::new(config.skin_color, r, 0.05),
    );

    tree.part(
        BodyPart::Belt,
        BELT_SHAPE,
        Vec3::new(0.0, p.hip + 0.2, 0.0),
        Vec3::new(tw * 1.1, 0.12, tw * 1.1),
        Material::new(config.accessory_color, (r * 0.4).max(0.05), 0.65),
    );

    tree.build(Vec3::new(0.0, p.hip * ROOT_DROP, 0.0))
}
