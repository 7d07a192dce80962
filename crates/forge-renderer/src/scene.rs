//! The mounted scene: the composed tree, its animated root and the camera.

use forge_common::{Color, Vec3};
use forge_config::colors::parse_color;
use forge_config::schema::SceneConfig;
use tracing::warn;

use crate::compose::{AvatarTree, ShapeNode};
use crate::matrix::{self, Mat4};

/// Placement of the tree root: translation plus rotation about Y.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RootTransform {
    pub position: Vec3,
    pub yaw: f32,
}

impl RootTransform {
    pub fn matrix(&self) -> Mat4 {
        let p = self.position;
        matrix::mul(
            &matrix::translate(p.x, p.y, p.z),
            &matrix::rotate_y(self.yaw),
        )
    }
}

/// A composed tree mounted under an animated root.
///
/// `revision` bumps every time the tree is replaced so renderers know when
/// to rebuild their per-node data.
#[derive(Debug, Clone)]
pub struct Scene {
    tree: AvatarTree,
    root: RootTransform,
    background: Color,
    revision: u64,
}

impl Scene {
    pub fn new(tree: AvatarTree, background: Color) -> Self {
        let root = RootTransform {
            position: tree.root_position,
            yaw: 0.0,
        };
        Self {
            tree,
            root,
            background,
            revision: 0,
        }
    }

    pub fn tree(&self) -> &AvatarTree {
        &self.tree
    }

    pub fn root(&self) -> &RootTransform {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut RootTransform {
        &mut self.root
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Swap in a freshly composed tree. The root moves to the new tree's
    /// placement; accumulated yaw carries over so the spin doesn't jump.
    pub fn set_tree(&mut self, tree: AvatarTree) {
        self.root.position = tree.root_position;
        self.tree = tree;
        self.revision += 1;
    }

    /// `T(root) · R_y(yaw) · T(position) · S(scale)`.
    pub fn world_matrix(&self, node: &ShapeNode) -> Mat4 {
        let p = node.position;
        let s = node.scale;
        let local = matrix::mul(
            &matrix::translate(p.x, p.y, p.z),
            &matrix::scale3(s.x, s.y, s.z),
        );
        matrix::mul(&self.root.matrix(), &local)
    }

    /// Inverse-transpose of the world matrix's linear part, for normals.
    pub fn normal_matrix(&self, node: &ShapeNode) -> Mat4 {
        let s = node.scale;
        matrix::mul(
            &matrix::rotate_y(self.root.yaw),
            &matrix::scale3(1.0 / s.x, 1.0 / s.y, 1.0 / s.z),
        )
    }
}

/// Perspective camera looking at a fixed target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: [f32; 3],
    pub target: [f32; 3],
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: [2.6, 2.2, 3.2],
            target: [0.0, 0.0, 0.0],
            fov_degrees: 42.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

impl Camera {
    pub fn from_settings(scene: &SceneConfig) -> Self {
        Self {
            position: scene.camera_position,
            target: scene.camera_target,
            fov_degrees: scene.fov_degrees,
            ..Self::default()
        }
    }

    pub fn view(&self) -> Mat4 {
        matrix::look_at(self.position, self.target, [0.0, 1.0, 0.0])
    }

    /// Projection × view for a buffer of `width × height` pixels.
    pub fn view_projection(&self, width: u32, height: u32) -> Mat4 {
        let aspect = width.max(1) as f32 / height.max(1) as f32;
        let proj = matrix::perspective(self.fov_degrees.to_radians(), aspect, self.near, self.far);
        matrix::mul(&proj, &self.view())
    }
}

/// Background color from settings, falling back to the default on a bad value.
pub fn background_from_settings(scene: &SceneConfig) -> Color {
    match parse_color(&scene.background) {
        Ok(color) => color,
        Err(e) => {
            warn!(error = %e, "Invalid scene background, using default");
            Color::from_u24(0x02030a)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::{compose, BodyPart};
    use crate::matrix::transform;
    use forge_config::{AvatarConfig, AvatarEdit};

    fn scene() -> Scene {
        Scene::new(compose(&AvatarConfig::default()), Color::from_u24(0x02030a))
    }

    #[test]
    fn new_scene_takes_root_from_tree() {
        let s = scene();
        assert_eq!(s.root().position, s.tree().root_position);
        assert_eq!(s.root().yaw, 0.0);
        assert_eq!(s.revision(), 0);
    }

    #[test]
    fn set_tree_keeps_yaw_and_bumps_revision() {
        let mut s = scene();
        s.root_mut().yaw = 2.5;
        s.root_mut().position.y = 0.03;
        s.set_tree(compose(&AvatarConfig::default().apply(AvatarEdit::Beard(true))));
        assert_eq!(s.root().yaw, 2.5);
        assert_eq!(s.root().position, s.tree().root_position);
        assert_eq!(s.revision(), 1);
        assert_eq!(s.tree().len(), 16);
    }

    #[test]
    fn world_matrix_places_head_center() {
        let s = scene();
        let head = s.tree().node(BodyPart::Head).unwrap();
        let m = s.world_matrix(head);
        let c = transform(&m, [0.0, 0.0, 0.0, 1.0]);
        assert!(c[0].abs() < 1e-6);
        assert!((c[1] - (2.787 - 0.385)).abs() < 1e-5);
        // unit sphere radius becomes head radius
        let top = transform(&m, [0.0, 1.0, 0.0, 1.0]);
        assert!((top[1] - c[1] - 0.38).abs() < 1e-5);
    }

    #[test]
    fn yaw_swings_parts_around_root() {
        let mut s = scene();
        s.root_mut().yaw = std::f32::consts::PI;
        let arm = *s.tree().node(BodyPart::LeftArm).unwrap();
        let c = transform(&s.world_matrix(&arm), [0.0, 0.0, 0.0, 1.0]);
        assert!((c[0] - 0.6).abs() < 1e-5);
    }

    #[test]
    fn normal_matrix_undoes_scale() {
        let s = scene();
        let torso = s.tree().node(BodyPart::Torso).unwrap();
        let n = s.normal_matrix(torso);
        assert!((n[0] - 1.0 / torso.scale.x).abs() < 1e-5);
        assert!((n[5] - 1.0 / torso.scale.y).abs() < 1e-5);
    }

    #[test]
    fn camera_from_default_settings() {
        let cam = Camera::from_settings(&SceneConfig::default());
        assert_eq!(cam, Camera::default());
        let vp = cam.view_projection(3840, 2160);
        let clip = transform(&vp, [0.0, 0.0, 0.0, 1.0]);
        // target lands in the center of the frame
        assert!((clip[0] / clip[3]).abs() < 1e-5);
        assert!((clip[1] / clip[3]).abs() < 1e-5);
        assert!((0.0..1.0).contains(&(clip[2] / clip[3])));
    }

    #[test]
    fn bad_background_falls_back() {
        let settings = SceneConfig {
            background: "nope".into(),
            ..SceneConfig::default()
        };
        assert_eq!(background_from_settings(&settings), Color::from_u24(0x02030a));
    }
}
