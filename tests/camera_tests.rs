use freelook::camera::{Camera, CameraMovement, MAX_ZOOM, MIN_ZOOM, PITCH_LIMIT};
use glam::Vec3;

#[cfg(test)]
mod camera_tests {
    use super::*;

    fn scenario_camera() -> Camera {
        Camera::new(Vec3::new(0.0, 0.0, 3.0), Vec3::Y, -90.0, 0.0)
    }

    #[test]
    fn test_initial_front_points_down_negative_z() {
        let camera = scenario_camera();
        assert!(
            (camera.front() - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-5,
            "front should be ~(0,0,-1), got {:?}",
            camera.front()
        );
    }

    #[test]
    fn test_forward_move_scenario() {
        let mut camera = scenario_camera().with_movement_speed(2.5);
        camera.process_movement(CameraMovement::Forward, 2.0);

        let expected = Vec3::new(0.0, 0.0, -2.0);
        assert!(
            (camera.position() - expected).length() < 1e-5,
            "position should be ~{:?}, got {:?}",
            expected,
            camera.position()
        );
    }

    #[test]
    fn test_look_scenario() {
        let mut camera = scenario_camera().with_look_sensitivity(0.1);
        camera.process_look(90.0, 0.0, true);

        assert!((camera.yaw() - -81.0).abs() < 1e-4, "yaw was {}", camera.yaw());
        assert!(
            (camera.front().x - 0.156).abs() < 1e-3,
            "front.x was {}",
            camera.front().x
        );
    }

    #[test]
    fn test_frame_rate_independence() {
        let mut one_step = scenario_camera();
        one_step.process_movement(CameraMovement::Forward, 1.0);

        let mut ten_steps = scenario_camera();
        for _ in 0..10 {
            ten_steps.process_movement(CameraMovement::Forward, 0.1);
        }

        assert!(
            (one_step.position() - ten_steps.position()).length() < 1e-4,
            "{:?} vs {:?}",
            one_step.position(),
            ten_steps.position()
        );
    }

    #[test]
    fn test_backward_undoes_forward() {
        let mut camera = Camera::new(Vec3::ZERO, Vec3::Y, 37.0, 12.0);
        camera.process_movement(CameraMovement::Forward, 0.7);
        camera.process_movement(CameraMovement::Backward, 0.7);
        assert!(camera.position().length() < 1e-5);
    }

    #[test]
    fn test_pitch_clamp_boundary() {
        let mut camera = scenario_camera();
        camera.process_look(0.0, 1000.0, true);
        camera.process_look(0.0, 1000.0, true);
        assert_eq!(camera.pitch(), PITCH_LIMIT);

        camera.process_look(0.0, -1000.0, true);
        assert!(camera.pitch() < 0.0);
        camera.process_look(0.0, -1000.0, true);
        assert_eq!(camera.pitch(), -PITCH_LIMIT);
    }

    #[test]
    fn test_zoom_clamp_boundary() {
        let mut camera = scenario_camera();
        assert_eq!(camera.zoom(), MAX_ZOOM);

        camera.process_zoom(100.0);
        assert_eq!(camera.zoom(), MIN_ZOOM);

        camera.process_zoom(-100.0);
        assert_eq!(camera.zoom(), MAX_ZOOM);
    }

    #[test]
    fn test_view_matrix_is_idempotent() {
        let mut camera = scenario_camera();
        camera.process_look(33.0, -12.0, true);
        assert_eq!(camera.view_matrix(), camera.view_matrix());
    }

    #[test]
    fn test_view_matrix_follows_look() {
        let mut camera = scenario_camera();
        let before = camera.view_matrix();
        camera.process_look(10.0, 0.0, true);
        assert_ne!(before, camera.view_matrix());
    }

    #[test]
    fn test_basis_stays_orthonormal_after_many_looks() {
        let mut camera = scenario_camera();
        for step in 0..500 {
            let x = ((step * 37) % 23) as f32 - 11.0;
            let y = ((step * 17) % 19) as f32 - 9.0;
            camera.process_look(x * 10.0, y * 10.0, true);
        }

        let (f, r, u) = (camera.front(), camera.right(), camera.up());
        assert!((f.length() - 1.0).abs() < 1e-5);
        assert!((r.length() - 1.0).abs() < 1e-5);
        assert!((u.length() - 1.0).abs() < 1e-5);
        assert!(f.dot(r).abs() < 1e-5);
        assert!(r.dot(u).abs() < 1e-5);
        assert!(camera.pitch() >= -PITCH_LIMIT && camera.pitch() <= PITCH_LIMIT);
    }

    #[test]
    fn test_projection_uses_zoom() {
        let mut camera = scenario_camera();
        let wide = camera.projection_matrix(1.0);
        camera.process_zoom(20.0);
        let narrow = camera.projection_matrix(1.0);

        // y scale is cot(fov / 2): a narrower fov scales more
        assert!(narrow.y_axis.y > wide.y_axis.y);
        let expected = 1.0 / (camera.zoom().to_radians() / 2.0).tan();
        assert!((narrow.y_axis.y - expected).abs() < 1e-4);
    }
}
