use ilattice::glam::{Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

const FULL_TURN: f32 = 360.0;

/// Accumulated model rotation in degrees.
///
/// Both angles are kept in `(-360, 360)` with the sign of the accumulated
/// turn, so two steps "up" read as `-4` rather than `356`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CameraState {
    rotation_x: f32,
    rotation_y: f32,
}

impl CameraState {
    pub const IDENTITY: Self = Self {
        rotation_x: 0.0,
        rotation_y: 0.0,
    };

    pub fn new(rotation_x: f32, rotation_y: f32) -> Self {
        Self {
            rotation_x: rotation_x % FULL_TURN,
            rotation_y: rotation_y % FULL_TURN,
        }
    }

    /// Pitch, about the horizontal axis.
    #[inline]
    pub fn rotation_x(&self) -> f32 {
        self.rotation_x
    }

    /// Yaw, about the vertical axis.
    #[inline]
    pub fn rotation_y(&self) -> f32 {
        self.rotation_y
    }

    pub(crate) fn rotate(&mut self, delta_x: f32, delta_y: f32) {
        self.rotation_x = (self.rotation_x + delta_x) % FULL_TURN;
        self.rotation_y = (self.rotation_y + delta_y) % FULL_TURN;
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::IDENTITY;
    }

    /// Rotation about X first, then about the resulting Y axis.
    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_x(self.rotation_x.to_radians())
            * Quat::from_rotation_y(self.rotation_y.to_radians())
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_quat(self.rotation())
    }
}

/// Perspective projection parameters. The aspect ratio comes from the window.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Projection {
    pub fov_y_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            fov_y_degrees: 45.0,
            near: 0.1,
            far: 50.0,
        }
    }
}

impl Projection {
    /// OpenGL-style clip space, depth in `[-1, 1]`.
    pub fn matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov_y_degrees.to_radians(), aspect, self.near, self.far)
    }
}

/// The fixed view transform: the world moved `distance` units away along -Z.
pub fn camera_translation(distance: f32) -> Vec3 {
    Vec3::new(0.0, 0.0, -distance)
}
