/*
 * Node Field Module
 *
 * This module defines the NodeField, the ordered set of nodes making up the
 * network. A field is always generated as a whole for a given viewport and
 * is replaced, never merged, when the viewport changes.
 */

use nannou::prelude::*;
use rand::Rng;
use std::f64::consts::TAU;

use crate::node::NodePoint;
use crate::viewport::Viewport;
use crate::{
    ANGULAR_SPEED_MAX, ANGULAR_SPEED_MIN, ORBIT_RADIUS_MAX, ORBIT_RADIUS_MIN, VISUAL_RADIUS_MAX,
    VISUAL_RADIUS_MIN,
};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NodeField {
    nodes: Vec<NodePoint>,
}

impl NodeField {
    // Draw a fresh population of `count` nodes spread over the viewport.
    //
    // Base positions fall in `[0, width) x [0, height)`; on a degenerate
    // axis they collapse to 0 instead of failing.
    pub fn generate<R: Rng + ?Sized>(viewport: Viewport, count: usize, rng: &mut R) -> Self {
        let mut nodes = Vec::with_capacity(count);

        for _ in 0..count {
            let x = sample_axis(rng, viewport.width());
            let y = sample_axis(rng, viewport.height());
            nodes.push(NodePoint::new(
                pt2(x, y),
                rng.gen_range(0.0..TAU),
                rng.gen_range(VISUAL_RADIUS_MIN..=VISUAL_RADIUS_MAX),
                rng.gen_range(ORBIT_RADIUS_MIN..=ORBIT_RADIUS_MAX),
                rng.gen_range(ANGULAR_SPEED_MIN..=ANGULAR_SPEED_MAX),
            ));
        }

        Self { nodes }
    }

    pub fn from_nodes(nodes: Vec<NodePoint>) -> Self {
        Self { nodes }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[NodePoint] {
        &self.nodes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NodePoint> {
        self.nodes.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> std::slice::IterMut<'_, NodePoint> {
        self.nodes.iter_mut()
    }

    // Rendered positions of every node, in field order.
    pub fn rendered_positions(&self, parallax: Vec2) -> Vec<Point2> {
        self.nodes
            .iter()
            .map(|node| node.rendered_position(parallax))
            .collect()
    }
}

fn sample_axis<R: Rng + ?Sized>(rng: &mut R, extent: f32) -> f32 {
    if extent > 0.0 {
        rng.gen_range(0.0..extent)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NODE_COUNT;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate_node_count() {
        let mut rng = StdRng::seed_from_u64(7);
        let field = NodeField::generate(Viewport::new(1280.0, 720.0), NODE_COUNT, &mut rng);
        assert_eq!(field.len(), 85);
    }

    #[test]
    fn test_generated_values_within_ranges() {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let field = NodeField::generate(Viewport::new(800.0, 600.0), NODE_COUNT, &mut rng);

            for node in field.iter() {
                let base = node.base_position();
                assert!(base.x >= 0.0 && base.x < 800.0);
                assert!(base.y >= 0.0 && base.y < 600.0);
                assert!(node.phase() >= 0.0 && node.phase() < TAU);
                assert!((0.8..=2.6).contains(&node.visual_radius()));
                assert!((20.0..=60.0).contains(&node.orbit_radius()));
                assert!((0.0012..=0.0042).contains(&node.angular_speed()));
            }
        }
    }

    #[test]
    fn test_same_seed_same_field() {
        let viewport = Viewport::new(640.0, 480.0);
        let a = NodeField::generate(viewport, NODE_COUNT, &mut StdRng::seed_from_u64(42));
        let b = NodeField::generate(viewport, NODE_COUNT, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_sized_viewport_collapses_positions() {
        let mut rng = StdRng::seed_from_u64(3);
        let field = NodeField::generate(Viewport::new(0.0, 0.0), NODE_COUNT, &mut rng);

        assert_eq!(field.len(), NODE_COUNT);
        for node in field.iter() {
            assert_eq!(node.base_position(), pt2(0.0, 0.0));
        }
    }
}
