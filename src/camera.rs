use crate::config::CameraConfig;
use crate::math::{radians, Mat4, Vec3};
use crate::transform::Transform;
use crate::types::CameraUniform;

pub const DEFAULT_YAW: f32 = -90.0;
pub const DEFAULT_PITCH: f32 = 0.0;
pub const DEFAULT_SPEED: f32 = 2.5;
pub const DEFAULT_SENSITIVITY: f32 = 0.1;
pub const DEFAULT_FOV: f32 = 45.0;

pub const MIN_FOV: f32 = 1.0;
pub const MAX_FOV: f32 = 45.0;
pub const PITCH_LIMIT: f32 = 89.0;

/// Movement direction, abstracted away from any windowing system's key codes.
/// The input backend maps raw keys to these before calling in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraMovement {
    Forward,
    Backward,
    Left,
    Right,
}

/// Fly camera: a [`Transform`] plus movement tunables and the derived
/// front/right/up basis used for the view matrix and movement directions.
#[derive(Debug, Clone)]
pub struct Camera {
    pub transform: Transform,

    pub movement_speed: f32,
    pub mouse_sensitivity: f32,
    pub field_of_view: f32,

    front: Vec3,
    up: Vec3,
    right: Vec3,
    world_up: Vec3,
}

impl Camera {
    /// Camera at `position` with the default yaw/pitch and tunables.
    pub fn new(position: Vec3) -> Self {
        let mut transform = Transform::new();
        transform.set_position(position);
        let roll = transform.euler_angles().z;
        transform.set_euler_angles(Vec3::new(DEFAULT_YAW, DEFAULT_PITCH, roll));

        let mut camera = Self {
            transform,
            movement_speed: DEFAULT_SPEED,
            mouse_sensitivity: DEFAULT_SENSITIVITY,
            field_of_view: DEFAULT_FOV,
            front: Vec3::new(0.0, 0.0, -1.0),
            up: Vec3::Y,
            right: Vec3::X,
            world_up: Vec3::Y,
        };
        camera.update_camera_vectors();
        camera
    }

    /// Camera from deserialized tuning. Out-of-range fov is clamped rather
    /// than rejected.
    pub fn from_config(config: &CameraConfig) -> Self {
        let mut transform = Transform::new();
        transform.set_position(Vec3::from_array(config.position));
        let roll = transform.euler_angles().z;
        transform.set_euler_angles(Vec3::new(config.yaw, config.pitch, roll));

        let mut camera = Self {
            transform,
            movement_speed: config.speed,
            mouse_sensitivity: config.sensitivity,
            field_of_view: config.fov.clamp(MIN_FOV, MAX_FOV),
            front: Vec3::new(0.0, 0.0, -1.0),
            up: Vec3::Y,
            right: Vec3::X,
            world_up: Vec3::Y,
        };
        camera.update_camera_vectors();
        camera
    }

    pub fn position(&self) -> Vec3 {
        self.transform.position()
    }

    pub fn front(&self) -> Vec3 {
        self.front
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    /// View matrix from the current position and basis. Pure; no side effects.
    pub fn view_matrix(&self) -> Mat4 {
        let position = self.transform.position();
        Mat4::look_at_rh(position, position + self.front, self.up)
    }

    /// Projection matrix for the current field of view at the given aspect.
    pub fn projection_matrix(&self, aspect: f32, near: f32, far: f32) -> Mat4 {
        Mat4::perspective_rh_gl(radians(self.field_of_view), aspect, near, far)
    }

    /// Moves along the front/right axes. `delta_time` is seconds since the
    /// last frame, supplied by the frame driver.
    pub fn process_keyboard(&mut self, direction: CameraMovement, delta_time: f32) {
        let velocity = self.movement_speed * delta_time;
        let position = self.transform.position();
        let position = match direction {
            CameraMovement::Forward => position + self.front * velocity,
            CameraMovement::Backward => position - self.front * velocity,
            CameraMovement::Left => position - self.right * velocity,
            CameraMovement::Right => position + self.right * velocity,
        };
        self.transform.set_position(position);
    }

    /// Applies a mouse delta to yaw and pitch. With `constrain_pitch` the
    /// pitch stays inside [-89, 89] degrees so the view never flips at the
    /// poles.
    pub fn process_mouse_movement(&mut self, dx: f32, dy: f32, constrain_pitch: bool) {
        let dx = dx * self.mouse_sensitivity;
        let dy = dy * self.mouse_sensitivity;

        let angles = self.transform.euler_angles() + Vec3::new(dx, dy, 0.0);
        self.transform.set_euler_angles(angles);

        if constrain_pitch {
            let angles = self.transform.euler_angles();
            if angles.y > PITCH_LIMIT {
                self.transform
                    .set_euler_angles(Vec3::new(angles.x, PITCH_LIMIT, angles.z));
            }
            let angles = self.transform.euler_angles();
            if angles.y < -PITCH_LIMIT {
                self.transform
                    .set_euler_angles(Vec3::new(angles.x, -PITCH_LIMIT, angles.z));
            }
        }

        self.update_camera_vectors();
    }

    /// Zooms by narrowing the field of view, clamped to [1, 45] degrees.
    pub fn process_mouse_scroll(&mut self, dy: f32) {
        self.field_of_view -= dy;
        if self.field_of_view < MIN_FOV {
            self.field_of_view = MIN_FOV;
        }
        if self.field_of_view > MAX_FOV {
            self.field_of_view = MAX_FOV;
        }
    }

    /// Packs the view matrix and camera parameters for uniform upload.
    pub fn to_uniform(&self) -> CameraUniform {
        CameraUniform {
            view: self.view_matrix().to_cols_array(),
            position: self.transform.position().to_array(),
            fov: self.field_of_view,
        }
    }

    /// Recomputes front from the transform's angles, then right and up from
    /// it. The order keeps the basis orthonormal as front swings around.
    /// Front parallel to world-up degenerates the cross products; the pitch
    /// clamp keeps a constrained camera away from that case.
    fn update_camera_vectors(&mut self) {
        self.front = self.transform.front();
        self.right = self.front.cross(self.world_up).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_vec3_close(a: Vec3, b: Vec3) {
        assert!((a.x - b.x).abs() < 1e-4, "{a} vs {b}");
        assert!((a.y - b.y).abs() < 1e-4, "{a} vs {b}");
        assert!((a.z - b.z).abs() < 1e-4, "{a} vs {b}");
    }

    #[test]
    fn test_default_camera_faces_negative_z() {
        let camera = Camera::new(Vec3::new(0.0, 0.0, 3.0));
        assert_vec3_close(camera.front(), Vec3::new(0.0, 0.0, -1.0));
        assert_vec3_close(camera.right(), Vec3::X);
        assert_vec3_close(camera.up(), Vec3::Y);
    }

    #[test]
    fn test_forward_movement_with_default_speed() {
        let mut camera = Camera::new(Vec3::new(0.0, 0.0, 3.0));
        camera.process_keyboard(CameraMovement::Forward, 1.0);
        assert_vec3_close(camera.position(), Vec3::new(0.0, 0.0, 0.5));
    }

    #[test]
    fn test_strafe_left_right_cancel() {
        let mut camera = Camera::new(Vec3::ZERO);
        camera.process_keyboard(CameraMovement::Left, 0.25);
        camera.process_keyboard(CameraMovement::Right, 0.25);
        assert_vec3_close(camera.position(), Vec3::ZERO);
    }

    #[test]
    fn test_backward_movement() {
        let mut camera = Camera::new(Vec3::ZERO);
        camera.process_keyboard(CameraMovement::Backward, 2.0);
        assert_vec3_close(camera.position(), Vec3::new(0.0, 0.0, 5.0));
    }

    #[test]
    fn test_mouse_movement_updates_basis() {
        let mut camera = Camera::new(Vec3::ZERO);
        // 900 raw units * 0.1 sensitivity = +90 degrees of yaw: -90 -> 0.
        camera.process_mouse_movement(900.0, 0.0, true);
        assert_vec3_close(camera.front(), Vec3::X);
        assert_vec3_close(camera.right(), Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_pitch_clamped_at_upper_limit() {
        let mut camera = Camera::new(Vec3::ZERO);
        for _ in 0..50 {
            camera.process_mouse_movement(0.0, 300.0, true);
            assert!(camera.transform.euler_angles().y <= PITCH_LIMIT);
        }
        assert_eq!(camera.transform.euler_angles().y, PITCH_LIMIT);
    }

    #[test]
    fn test_pitch_clamped_at_lower_limit() {
        let mut camera = Camera::new(Vec3::ZERO);
        for _ in 0..50 {
            camera.process_mouse_movement(0.0, -300.0, true);
            assert!(camera.transform.euler_angles().y >= -PITCH_LIMIT);
        }
        assert_eq!(camera.transform.euler_angles().y, -PITCH_LIMIT);
    }

    #[test]
    fn test_unconstrained_pitch_can_pass_limit() {
        let mut camera = Camera::new(Vec3::ZERO);
        camera.process_mouse_movement(0.0, 1200.0, false);
        assert!(camera.transform.euler_angles().y > PITCH_LIMIT);
    }

    #[test]
    fn test_scroll_clamps_fov() {
        let mut camera = Camera::new(Vec3::ZERO);
        for _ in 0..100 {
            camera.process_mouse_scroll(1.0);
            assert!(camera.field_of_view >= MIN_FOV);
        }
        assert_eq!(camera.field_of_view, MIN_FOV);
        for _ in 0..100 {
            camera.process_mouse_scroll(-1.0);
            assert!(camera.field_of_view <= MAX_FOV);
        }
        assert_eq!(camera.field_of_view, MAX_FOV);
    }

    #[test]
    fn test_view_matrix_matches_look_at() {
        let camera = Camera::new(Vec3::new(0.0, 0.0, 3.0));
        let expected = Mat4::look_at_rh(
            Vec3::new(0.0, 0.0, 3.0),
            Vec3::new(0.0, 0.0, 3.0) + camera.front(),
            camera.up(),
        );
        assert_eq!(camera.view_matrix(), expected);
    }

    #[test]
    fn test_uniform_packs_view_and_position() {
        let camera = Camera::new(Vec3::new(1.0, 2.0, 3.0));
        let uniform = camera.to_uniform();
        assert_eq!(uniform.view, camera.view_matrix().to_cols_array());
        assert_eq!(uniform.position, [1.0, 2.0, 3.0]);
        assert_eq!(uniform.fov, DEFAULT_FOV);
    }
}
