use render_core::camera::{CameraMovement, DEFAULT_FOV, MAX_FOV, MIN_FOV, PITCH_LIMIT};
use render_core::math::{Mat4, Vec3};
use render_core::Camera;

#[cfg(test)]
mod camera_tests {
    use super::*;

    fn assert_close(a: Vec3, b: Vec3) {
        assert!((a.x - b.x).abs() < 1e-4, "{a} vs {b}");
        assert!((a.y - b.y).abs() < 1e-4, "{a} vs {b}");
        assert!((a.z - b.z).abs() < 1e-4, "{a} vs {b}");
    }

    #[test]
    fn test_default_camera_looks_down_negative_z() {
        let camera = Camera::new(Vec3::new(0.0, 0.0, 3.0));
        assert_close(camera.front(), Vec3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_one_second_forward_step() {
        // Default speed 2.5 for a full second from z=3 lands at z=0.5.
        let mut camera = Camera::new(Vec3::new(0.0, 0.0, 3.0));
        camera.process_keyboard(CameraMovement::Forward, 1.0);
        assert_close(camera.position(), Vec3::new(0.0, 0.0, 0.5));
    }

    #[test]
    fn test_movement_scales_with_delta_time() {
        let mut camera = Camera::new(Vec3::ZERO);
        for _ in 0..60 {
            camera.process_keyboard(CameraMovement::Forward, 1.0 / 60.0);
        }
        // 60 frames at 1/60s each should equal one full second of movement.
        assert!((camera.position().z + 2.5).abs() < 1e-3);
    }

    #[test]
    fn test_pitch_never_exceeds_limits_under_constrained_input() {
        let mut camera = Camera::new(Vec3::ZERO);
        for i in 0..500 {
            let dy = if i % 2 == 0 { 500.0 } else { -900.0 };
            camera.process_mouse_movement(7.0, dy, true);
            let pitch = camera.transform.euler_angles().y;
            assert!(pitch <= PITCH_LIMIT, "pitch {pitch} above limit");
            assert!(pitch >= -PITCH_LIMIT, "pitch {pitch} below limit");
        }
    }

    #[test]
    fn test_fov_stays_in_range_under_scroll_spam() {
        let mut camera = Camera::new(Vec3::ZERO);
        for i in 0..300 {
            camera.process_mouse_scroll(if i % 3 == 0 { -2.0 } else { 1.5 });
            assert!(camera.field_of_view >= MIN_FOV);
            assert!(camera.field_of_view <= MAX_FOV);
        }
    }

    #[test]
    fn test_scroll_zooms_in() {
        let mut camera = Camera::new(Vec3::ZERO);
        camera.process_mouse_scroll(5.0);
        assert_eq!(camera.field_of_view, DEFAULT_FOV - 5.0);
    }

    #[test]
    fn test_yaw_turn_then_move_changes_heading() {
        let mut camera = Camera::new(Vec3::ZERO);
        // +90 degrees of yaw swings front from -Z to +X.
        camera.process_mouse_movement(900.0, 0.0, true);
        camera.process_keyboard(CameraMovement::Forward, 1.0);
        assert_close(camera.position(), Vec3::new(2.5, 0.0, 0.0));
    }

    #[test]
    fn test_basis_stays_orthonormal_under_input() {
        let mut camera = Camera::new(Vec3::ZERO);
        camera.process_mouse_movement(123.0, 45.0, true);
        camera.process_mouse_movement(-310.0, -80.0, true);

        let (f, r, u) = (camera.front(), camera.right(), camera.up());
        assert!((f.length() - 1.0).abs() < 1e-5);
        assert!((r.length() - 1.0).abs() < 1e-5);
        assert!((u.length() - 1.0).abs() < 1e-5);
        assert!(f.dot(r).abs() < 1e-5);
        assert!(f.dot(u).abs() < 1e-5);
        assert!(r.dot(u).abs() < 1e-5);
    }

    #[test]
    fn test_view_matrix_for_default_camera() {
        // Camera at (0,0,3) looking down -Z: the view is a -3 z translation.
        let camera = Camera::new(Vec3::new(0.0, 0.0, 3.0));
        let view = camera.view_matrix();
        let expected = Mat4::from_translation(Vec3::new(0.0, 0.0, -3.0));

        let (got, want) = (view.to_cols_array(), expected.to_cols_array());
        for i in 0..16 {
            assert!((got[i] - want[i]).abs() < 1e-5, "element {i}");
        }
    }

    #[test]
    fn test_uniform_view_matches_view_matrix() {
        let mut camera = Camera::new(Vec3::new(1.0, 0.0, -2.0));
        camera.process_mouse_movement(200.0, -100.0, true);

        let uniform = camera.to_uniform();
        assert_eq!(uniform.view, camera.view_matrix().to_cols_array());
        assert_eq!(uniform.fov, camera.field_of_view);
    }
}
