/*
 * Viewport Module
 *
 * This module defines the Viewport struct holding the size of the drawing
 * surface, and the coordinate transformations between surface space
 * (origin top-left, y down) and nannou window space (origin center, y up).
 */

use nannou::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    width: f32,
    height: f32,
}

impl Viewport {
    // Negative or non-finite dimensions are clamped to zero so the rest of
    // the pipeline always sees valid (possibly degenerate) geometry.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: clamp_dimension(width),
            height: clamp_dimension(height),
        }
    }

    pub fn from_rect(rect: Rect) -> Self {
        Self::new(rect.w(), rect.h())
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn size(&self) -> Vec2 {
        vec2(self.width, self.height)
    }

    pub fn center(&self) -> Point2 {
        pt2(self.width / 2.0, self.height / 2.0)
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0.0 || self.height == 0.0
    }

    // Convert a point from window space to surface space
    pub fn window_to_surface(&self, point: Point2) -> Point2 {
        pt2(point.x + self.width / 2.0, self.height / 2.0 - point.y)
    }

    // Convert a point from surface space to window space
    pub fn surface_to_window(&self, point: Point2) -> Point2 {
        pt2(point.x - self.width / 2.0, self.height / 2.0 - point.y)
    }
}

fn clamp_dimension(value: f32) -> f32 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degenerate_sizes_are_clamped() {
        let viewport = Viewport::new(-10.0, f32::NAN);
        assert_eq!(viewport.width(), 0.0);
        assert_eq!(viewport.height(), 0.0);
        assert!(viewport.is_empty());
        assert_eq!(viewport.center(), pt2(0.0, 0.0));
    }

    #[test]
    fn test_window_surface_round_trip() {
        let viewport = Viewport::new(800.0, 600.0);

        assert_eq!(viewport.window_to_surface(pt2(0.0, 0.0)), pt2(400.0, 300.0));
        assert_eq!(viewport.window_to_surface(pt2(-400.0, 300.0)), pt2(0.0, 0.0));
        assert_eq!(viewport.surface_to_window(pt2(800.0, 600.0)), pt2(400.0, -300.0));

        let p = pt2(123.0, 456.0);
        assert_eq!(viewport.window_to_surface(viewport.surface_to_window(p)), p);
    }
}
