/*
 * Surface Module
 *
 * This module defines the drawing surface the renderer talks to, the paint
 * types it fills with, and DisplayList, a surface that records draw commands
 * so a frame can be produced during `update` and replayed during `view`.
 *
 * Coordinates are surface space: origin at the top-left corner, y pointing
 * down, units in logical pixels.
 */

use nannou::prelude::*;

use crate::viewport::Viewport;

// Straight (non-premultiplied) RGBA color with components in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    pub fn fade(self, factor: f32) -> Self {
        Self {
            a: self.a * factor,
            ..self
        }
    }

    pub fn lerp(self, other: Color, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Color,
}

impl GradientStop {
    pub const fn new(offset: f32, color: Color) -> Self {
        Self { offset, color }
    }
}

// Sample a gradient at `t`. Stops must be sorted by offset; values outside
// the first/last offsets take the nearest end color.
pub fn sample_stops(stops: &[GradientStop], t: f32) -> Color {
    let (first, last) = match (stops.first(), stops.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Color::TRANSPARENT,
    };

    if t <= first.offset {
        return first.color;
    }
    if t >= last.offset {
        return last.color;
    }

    for pair in stops.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if t >= a.offset && t <= b.offset {
            let span = b.offset - a.offset;
            if span <= f32::EPSILON {
                return b.color;
            }
            return a.color.lerp(b.color, (t - a.offset) / span);
        }
    }

    last.color
}

#[derive(Clone, Debug, PartialEq)]
pub enum Paint {
    Solid(Color),
    Linear {
        start: Point2,
        end: Point2,
        stops: Vec<GradientStop>,
    },
    Radial {
        center: Point2,
        inner_radius: f32,
        outer_radius: f32,
        stops: Vec<GradientStop>,
    },
}

impl Paint {
    // Color of this paint at a surface point.
    pub fn color_at(&self, point: Point2) -> Color {
        match self {
            Paint::Solid(color) => *color,
            Paint::Linear { start, end, stops } => {
                let axis = *end - *start;
                let len_sq = axis.length_squared();
                let t = if len_sq > 0.0 {
                    (point - *start).dot(axis) / len_sq
                } else {
                    0.0
                };
                sample_stops(stops, t)
            }
            Paint::Radial {
                center,
                inner_radius,
                outer_radius,
                stops,
            } => {
                let span = outer_radius - inner_radius;
                let d = point.distance(*center);
                let t = if span > 0.0 { (d - inner_radius) / span } else { 1.0 };
                sample_stops(stops, t)
            }
        }
    }
}

// The primitives the renderer needs from whatever it draws on.
pub trait Surface {
    // Match the backing store to the viewport.
    fn resize(&mut self, viewport: Viewport);
    fn clear(&mut self);
    fn fill_rect(&mut self, origin: Point2, size: Vec2, paint: Paint);
    fn fill_circle(&mut self, center: Point2, radius: f32, color: Color);
    fn stroke_line(&mut self, from: Point2, to: Point2, width: f32, color: Color);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear,
    FillRect { origin: Point2, size: Vec2, paint: Paint },
    FillCircle { center: Point2, radius: f32, color: Color },
    StrokeLine { from: Point2, to: Point2, width: f32, color: Color },
}

// A surface that records one frame of commands.
//
// `clear` drops everything recorded so far, so the list always holds the
// most recent frame only.
#[derive(Clone, Debug)]
pub struct DisplayList {
    viewport: Viewport,
    commands: Vec<DrawCommand>,
}

impl DisplayList {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            commands: Vec::new(),
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn line_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|cmd| matches!(cmd, DrawCommand::StrokeLine { .. }))
            .count()
    }

    pub fn circle_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|cmd| matches!(cmd, DrawCommand::FillCircle { .. }))
            .count()
    }
}

impl Surface for DisplayList {
    fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
    }

    fn fill_rect(&mut self, origin: Point2, size: Vec2, paint: Paint) {
        self.commands.push(DrawCommand::FillRect { origin, size, paint });
    }

    fn fill_circle(&mut self, center: Point2, radius: f32, color: Color) {
        self.commands.push(DrawCommand::FillCircle { center, radius, color });
    }

    fn stroke_line(&mut self, from: Point2, to: Point2, width: f32, color: Color) {
        self.commands.push(DrawCommand::StrokeLine { from, to, width, color });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLACK_OPAQUE: Color = Color::new(0.0, 0.0, 0.0, 1.0);
    const WHITE_OPAQUE: Color = Color::new(1.0, 1.0, 1.0, 1.0);

    fn two_stops() -> Vec<GradientStop> {
        vec![
            GradientStop::new(0.0, BLACK_OPAQUE),
            GradientStop::new(1.0, WHITE_OPAQUE),
        ]
    }

    #[test]
    fn test_sample_stops_clamps_and_interpolates() {
        let stops = two_stops();
        assert_eq!(sample_stops(&stops, -1.0), BLACK_OPAQUE);
        assert_eq!(sample_stops(&stops, 2.0), WHITE_OPAQUE);

        let mid = sample_stops(&stops, 0.5);
        assert!((mid.r - 0.5).abs() < 1e-6);
        assert_eq!(mid.a, 1.0);
    }

    #[test]
    fn test_sample_stops_empty_is_transparent() {
        assert_eq!(sample_stops(&[], 0.5), Color::TRANSPARENT);
    }

    #[test]
    fn test_linear_paint_projects_onto_axis() {
        let paint = Paint::Linear {
            start: pt2(0.0, 0.0),
            end: pt2(100.0, 100.0),
            stops: two_stops(),
        };

        assert_eq!(paint.color_at(pt2(0.0, 0.0)), BLACK_OPAQUE);
        assert_eq!(paint.color_at(pt2(100.0, 100.0)), WHITE_OPAQUE);
        // The off-diagonal corners sit halfway along the axis
        let corner = paint.color_at(pt2(100.0, 0.0));
        assert!((corner.r - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_radial_paint_by_distance() {
        let paint = Paint::Radial {
            center: pt2(50.0, 50.0),
            inner_radius: 0.0,
            outer_radius: 10.0,
            stops: two_stops(),
        };

        assert_eq!(paint.color_at(pt2(50.0, 50.0)), BLACK_OPAQUE);
        assert_eq!(paint.color_at(pt2(50.0, 80.0)), WHITE_OPAQUE);
        let half = paint.color_at(pt2(55.0, 50.0));
        assert!((half.g - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_display_list_clear_starts_new_frame() {
        let mut list = DisplayList::new(Viewport::new(10.0, 10.0));
        list.clear();
        list.fill_circle(pt2(1.0, 1.0), 2.0, WHITE_OPAQUE);
        list.stroke_line(pt2(0.0, 0.0), pt2(1.0, 1.0), 1.0, WHITE_OPAQUE);
        assert_eq!(list.circle_count(), 1);
        assert_eq!(list.line_count(), 1);

        list.clear();
        assert_eq!(list.commands(), &[DrawCommand::Clear]);
    }

    #[test]
    fn test_color_fade_scales_alpha_only() {
        let faded = Color::new(0.2, 0.4, 0.6, 0.8).fade(0.5);
        assert_eq!(faded, Color::new(0.2, 0.4, 0.6, 0.4));
    }
}
