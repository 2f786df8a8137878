use crate::math::{radians, Mat4, Vec3};

/// Position, Euler-angle orientation (degrees) and scale, with a composed
/// model matrix.
///
/// The matrix is not rebuilt from the three fields on each change: every
/// setter right-multiplies its incremental transform onto whatever has been
/// accumulated so far, so the matrix reflects the full assignment history.
/// Callers that want a clean model matrix start from a fresh `Transform`.
#[derive(Debug, Clone, Copy)]
pub struct Transform {
    position: Vec3,
    euler_angles: Vec3,
    scale: Vec3,
    matrix: Mat4,
}

impl Transform {
    pub fn new() -> Self {
        Self {
            position: Vec3::ZERO,
            euler_angles: Vec3::ZERO,
            scale: Vec3::splat(1.0),
            matrix: Mat4::IDENTITY,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn euler_angles(&self) -> Vec3 {
        self.euler_angles
    }

    pub fn scale(&self) -> Vec3 {
        self.scale
    }

    /// The accumulated model matrix.
    pub fn matrix(&self) -> Mat4 {
        self.matrix
    }

    /// Stores the position and multiplies a translation for it onto the matrix.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        self.matrix = self.matrix * Mat4::from_translation(position);
    }

    /// Stores the angles (degrees) and multiplies rotations about X, then Y,
    /// then Z onto the matrix.
    pub fn set_euler_angles(&mut self, euler_angles: Vec3) {
        self.euler_angles = euler_angles;
        self.matrix = self.matrix * Mat4::from_axis_angle(Vec3::X, radians(euler_angles.x));
        self.matrix = self.matrix * Mat4::from_axis_angle(Vec3::Y, radians(euler_angles.y));
        self.matrix = self.matrix * Mat4::from_axis_angle(Vec3::Z, radians(euler_angles.z));
    }

    /// Stores the scale and multiplies a scale matrix onto the matrix.
    pub fn set_scale(&mut self, scale: Vec3) {
        self.scale = scale;
        self.matrix = self.matrix * Mat4::from_scale(scale);
    }

    /// View direction from the current angles, recomputed on every call.
    /// `euler_angles.x` acts as yaw and `euler_angles.y` as pitch.
    pub fn front(&self) -> Vec3 {
        let yaw = radians(self.euler_angles.x);
        let pitch = radians(self.euler_angles.y);
        Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        )
        .normalize()
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}
