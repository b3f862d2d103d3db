//! Shape generation for 2D primitives
//!
//! Turns snapshot views into screen-space outlines a drawing backend can
//! fill directly.

use glam::Vec2;

use super::snapshot::{BodyView, ObstacleView};

/// Spike outline: bottom-left, apex, bottom-right
pub fn spike_triangle(spike: &ObstacleView) -> [Vec2; 3] {
    let base_y = spike.pos.y + spike.height;
    [
        Vec2::new(spike.pos.x, base_y),
        Vec2::new(spike.pos.x + spike.width / 2.0, spike.pos.y),
        Vec2::new(spike.pos.x + spike.width, base_y),
    ]
}

/// Cube corners rotated about its centre, clockwise from top-left
pub fn cube_corners(body: &BodyView) -> [Vec2; 4] {
    let half = body.size / 2.0;
    let center = body.pos + Vec2::splat(half);
    let rot = Vec2::from_angle(body.rotation.to_radians());
    [
        Vec2::new(-half, -half),
        Vec2::new(half, -half),
        Vec2::new(half, half),
        Vec2::new(-half, half),
    ]
    .map(|corner| center + rot.rotate(corner))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1.0e-3
    }

    #[test]
    fn test_spike_triangle() {
        let spike = ObstacleView {
            pos: Vec2::new(50.0, 290.0),
            width: 30.0,
            height: 30.0,
        };
        let [left, apex, right] = spike_triangle(&spike);
        assert_eq!(left, Vec2::new(50.0, 320.0));
        assert_eq!(apex, Vec2::new(65.0, 290.0));
        assert_eq!(right, Vec2::new(80.0, 320.0));
    }

    #[test]
    fn test_cube_corners_unrotated() {
        let body = BodyView {
            pos: Vec2::new(100.0, 290.0),
            size: 30.0,
            rotation: 0.0,
            visible: true,
        };
        let corners = cube_corners(&body);
        assert!(close(corners[0], Vec2::new(100.0, 290.0)));
        assert!(close(corners[2], Vec2::new(130.0, 320.0)));
    }

    #[test]
    fn test_quarter_turn_keeps_footprint() {
        let body = BodyView {
            pos: Vec2::new(100.0, 290.0),
            size: 30.0,
            rotation: 90.0,
            visible: true,
        };
        let corners = cube_corners(&body);
        let min = corners.iter().fold(Vec2::splat(f32::MAX), |m, c| m.min(*c));
        let max = corners.iter().fold(Vec2::splat(f32::MIN), |m, c| m.max(*c));
        assert!(close(min, Vec2::new(100.0, 290.0)));
        assert!(close(max, Vec2::new(130.0, 320.0)));
    }
}
