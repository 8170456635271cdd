/*
 * Physics Module
 *
 * Advances the node field by one tick and computes the pointer parallax.
 *
 * A tick is one displayed frame, not a fixed slice of wall-clock time: the
 * animation runs faster on high refresh-rate displays and slower when frames
 * are dropped. Nodes do not interact, so the update order does not matter.
 */

use nannou::prelude::*;

use crate::field::NodeField;
use crate::pointer::PointerState;
use crate::viewport::Viewport;

// Advance every node's phase and drift its base position along the new heading
pub fn step(field: &mut NodeField, drift_speed: f32) {
    for node in field.iter_mut() {
        node.advance(drift_speed);
    }
}

// Uniform offset applied to every rendered position, proportional to the
// pointer's displacement from the viewport center.
pub fn parallax(pointer: &PointerState, viewport: Viewport, factor: f32) -> Vec2 {
    (pointer.position() - viewport.center()) * factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DRIFT_SPEED, NODE_COUNT, PARALLAX_FACTOR};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn seeded_field() -> NodeField {
        let mut rng = StdRng::seed_from_u64(11);
        NodeField::generate(Viewport::new(800.0, 600.0), NODE_COUNT, &mut rng)
    }

    #[test]
    fn test_phase_accumulates_without_wrapping() {
        let mut field = seeded_field();
        let initial = field.clone();
        let ticks = 5000;

        for _ in 0..ticks {
            step(&mut field, DRIFT_SPEED);
        }

        for (before, after) in initial.iter().zip(field.iter()) {
            let mut expected = before.phase();
            for _ in 0..ticks {
                expected += before.angular_speed();
            }
            assert_eq!(after.phase(), expected);

            let closed_form = before.phase() + ticks as f64 * before.angular_speed();
            assert!((after.phase() - closed_form).abs() < 1e-9);
        }
    }

    #[test]
    fn test_phase_is_not_wrapped_past_tau() {
        let node = crate::node::NodePoint::new(pt2(0.0, 0.0), 6.28, 1.0, 20.0, 0.0042);
        let mut field = NodeField::from_nodes(vec![node]);

        for _ in 0..10 {
            step(&mut field, DRIFT_SPEED);
        }

        assert!(field.nodes()[0].phase() > std::f64::consts::TAU);
    }

    #[test]
    fn test_step_drifts_along_phase() {
        let mut field = seeded_field();
        let before = field.clone();

        step(&mut field, DRIFT_SPEED);

        for (b, a) in before.iter().zip(field.iter()) {
            let moved = a.base_position() - b.base_position();
            assert!((moved.length() - DRIFT_SPEED).abs() < 1e-4);
            assert!((moved - a.heading() * DRIFT_SPEED).length() < 1e-5);
            assert_eq!(a.visual_radius(), b.visual_radius());
            assert_eq!(a.orbit_radius(), b.orbit_radius());
            assert_eq!(a.angular_speed(), b.angular_speed());
        }
    }

    #[test]
    fn test_parallax_zero_at_center() {
        let viewport = Viewport::new(800.0, 600.0);
        let pointer = PointerState::centered(viewport);
        assert_eq!(parallax(&pointer, viewport, PARALLAX_FACTOR), vec2(0.0, 0.0));
    }

    #[test]
    fn test_parallax_follows_pointer() {
        let viewport = Viewport::new(800.0, 600.0);
        let mut pointer = PointerState::centered(viewport);
        pointer.move_to(pt2(800.0, 300.0));

        let offset = parallax(&pointer, viewport, PARALLAX_FACTOR);
        assert!((offset.x - 8.0).abs() < 1e-5);
        assert_eq!(offset.y, 0.0);
    }
}
