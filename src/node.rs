/*
 * Node Module
 *
 * This module defines the NodePoint struct, one simulated particle of the
 * network. A node drifts slowly around its base position while sweeping an
 * orbit around it; the position that gets drawn is derived from both and is
 * never stored.
 */

use nannou::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct NodePoint {
    base_position: Point2,
    // Kept in f64: the phase grows without bound and f32 would stall its
    // increments after a few hours of animation.
    phase: f64,
    visual_radius: f32,
    orbit_radius: f32,
    angular_speed: f64,
}

impl NodePoint {
    pub fn new(
        base_position: Point2,
        phase: f64,
        visual_radius: f32,
        orbit_radius: f32,
        angular_speed: f64,
    ) -> Self {
        Self {
            base_position,
            phase,
            visual_radius,
            orbit_radius,
            angular_speed,
        }
    }

    pub fn base_position(&self) -> Point2 {
        self.base_position
    }

    pub fn phase(&self) -> f64 {
        self.phase
    }

    pub fn visual_radius(&self) -> f32 {
        self.visual_radius
    }

    pub fn orbit_radius(&self) -> f32 {
        self.orbit_radius
    }

    pub fn angular_speed(&self) -> f64 {
        self.angular_speed
    }

    // Unit vector pointing along the current phase.
    pub fn heading(&self) -> Vec2 {
        vec2(self.phase.cos() as f32, self.phase.sin() as f32)
    }

    // Advance one tick: the phase accumulates, then the base drifts along
    // the new heading.
    pub(crate) fn advance(&mut self, drift_speed: f32) {
        self.phase += self.angular_speed;
        self.base_position += self.heading() * drift_speed;
    }

    // Position the node is drawn at for the given parallax offset.
    #[inline]
    pub fn rendered_position(&self, parallax: Vec2) -> Point2 {
        self.base_position + self.heading() * self.orbit_radius + parallax
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_rendered_position_at_zero_phase() {
        let node = NodePoint::new(pt2(100.0, 50.0), 0.0, 1.0, 30.0, 0.002);
        let pos = node.rendered_position(Vec2::ZERO);
        assert!((pos.x - 130.0).abs() < 1e-4);
        assert!((pos.y - 50.0).abs() < 1e-4);
    }

    #[test]
    fn test_rendered_position_includes_orbit_and_parallax() {
        let node = NodePoint::new(pt2(10.0, 10.0), FRAC_PI_2, 1.0, 20.0, 0.002);
        let pos = node.rendered_position(vec2(8.0, -2.0));
        assert!((pos.x - 18.0).abs() < 1e-4);
        assert!((pos.y - 28.0).abs() < 1e-4);
    }

    #[test]
    fn test_advance_only_touches_phase_and_base() {
        let mut node = NodePoint::new(pt2(0.0, 0.0), 0.0, 2.0, 40.0, 0.003);
        node.advance(0.35);

        assert_eq!(node.phase(), 0.003);
        assert_eq!(node.visual_radius(), 2.0);
        assert_eq!(node.orbit_radius(), 40.0);
        assert_eq!(node.angular_speed(), 0.003);

        let expected = vec2(0.003f64.cos() as f32, 0.003f64.sin() as f32) * 0.35;
        assert_eq!(node.base_position(), expected);
    }
}
