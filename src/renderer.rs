/*
 * Renderer Module
 *
 * This module draws one complete frame of the network background:
 * background gradient, center glow, nodes, then the proximity edges.
 *
 * The edge pass checks every unordered pair of nodes, so its cost grows
 * quadratically with the node count. That is fine for the default population
 * (85 nodes, 3,570 pairs); populations in the thousands would need a spatial
 * grid and are outside what this renderer is tuned for.
 *
 * `replay` turns a recorded DisplayList into nannou draw calls.
 */

use nannou::prelude::*;
use std::f32::consts::TAU;

use crate::field::NodeField;
use crate::surface::{sample_stops, Color, DisplayList, DrawCommand, GradientStop, Paint, Surface};
use crate::viewport::Viewport;
use crate::{
    CONNECT_DISTANCE, EDGE_MAX_ALPHA, EDGE_WIDTH_SCALE, GLOW_INNER_RADIUS, GLOW_OUTER_RADIUS,
    HALO_SCALE,
};

// Palette
pub const BACKGROUND_TOP_LEFT: Color = Color::new(0.043_137, 0.062_745, 0.125_490, 1.0);
pub const BACKGROUND_BOTTOM_RIGHT: Color = Color::new(0.101_961, 0.078_431, 0.250_980, 1.0);
pub const GLOW_COLOR: Color = Color::new(0.388_235, 0.4, 0.945_098, 0.18);
pub const HALO_COLOR: Color = Color::new(0.505_882, 0.549_020, 0.972_549, 0.18);
pub const CORE_COLOR: Color = Color::new(0.878_431, 0.905_882, 1.0, 0.9);
pub const EDGE_COLOR: Color = Color::new(0.647_059, 0.705_882, 0.988_235, 1.0);

// Tessellation of radial fills when replaying onto nannou
const RADIAL_BANDS: usize = 16;
const RADIAL_SEGMENTS: usize = 64;

// Per-frame inputs that are not part of the node field.
#[derive(Clone, Copy, Debug)]
pub struct FrameContext {
    pub viewport: Viewport,
    pub parallax: Vec2,
    pub connect_distance: f32,
    // Fade-in multiplier applied to every alpha, in `[0, 1]`.
    pub opacity: f32,
}

impl FrameContext {
    pub fn new(viewport: Viewport, parallax: Vec2) -> Self {
        Self {
            viewport,
            parallax,
            connect_distance: CONNECT_DISTANCE,
            opacity: 1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameStats {
    pub nodes: usize,
    pub edges: usize,
    pub pair_checks: usize,
    pub opacity: f32,
}

// Strength of the edge between two nodes `distance` apart, or `None` when
// they are too far apart to be joined. The strength is `1` for coincident
// nodes and falls linearly to `0` at the connect distance.
#[inline]
pub fn edge_strength(distance: f32, connect_distance: f32) -> Option<f32> {
    if distance < connect_distance {
        Some(1.0 - distance / connect_distance)
    } else {
        None
    }
}

pub fn edge_alpha(strength: f32) -> f32 {
    (strength * EDGE_MAX_ALPHA).max(0.0)
}

pub fn edge_width(strength: f32) -> f32 {
    strength * EDGE_WIDTH_SCALE
}

// Draw one frame of the network onto the surface
pub fn draw<S: Surface + ?Sized>(surface: &mut S, field: &NodeField, ctx: &FrameContext) -> FrameStats {
    let viewport = ctx.viewport;
    let opacity = ctx.opacity.clamp(0.0, 1.0);

    surface.resize(viewport);
    surface.clear();

    // Background gradient, corner to corner
    surface.fill_rect(
        pt2(0.0, 0.0),
        viewport.size(),
        Paint::Linear {
            start: pt2(0.0, 0.0),
            end: pt2(viewport.width(), viewport.height()),
            stops: vec![
                GradientStop::new(0.0, BACKGROUND_TOP_LEFT.fade(opacity)),
                GradientStop::new(1.0, BACKGROUND_BOTTOM_RIGHT.fade(opacity)),
            ],
        },
    );

    // Soft glow in the middle of the viewport
    surface.fill_rect(
        pt2(0.0, 0.0),
        viewport.size(),
        Paint::Radial {
            center: viewport.center(),
            inner_radius: GLOW_INNER_RADIUS,
            outer_radius: GLOW_OUTER_RADIUS,
            stops: vec![
                GradientStop::new(0.0, GLOW_COLOR.fade(opacity)),
                GradientStop::new(1.0, GLOW_COLOR.with_alpha(0.0)),
            ],
        },
    );

    let positions = field.rendered_positions(ctx.parallax);

    // Nodes: faint halo under a bright core
    for (node, &pos) in field.iter().zip(positions.iter()) {
        surface.fill_circle(pos, node.visual_radius() * HALO_SCALE, HALO_COLOR.fade(opacity));
        surface.fill_circle(pos, node.visual_radius(), CORE_COLOR.fade(opacity));
    }

    // Edges between every pair closer than the connect distance
    let mut edges = 0;
    let mut pair_checks = 0;
    for i in 0..positions.len() {
        for j in (i + 1)..positions.len() {
            pair_checks += 1;
            let distance = positions[i].distance(positions[j]);
            if let Some(strength) = edge_strength(distance, ctx.connect_distance) {
                surface.stroke_line(
                    positions[i],
                    positions[j],
                    edge_width(strength),
                    EDGE_COLOR.with_alpha(edge_alpha(strength) * opacity),
                );
                edges += 1;
            }
        }
    }

    FrameStats {
        nodes: positions.len(),
        edges,
        pair_checks,
        opacity,
    }
}

// Replay a recorded frame onto a nannou Draw, mapping surface space to window space
pub fn replay(list: &DisplayList, draw: &Draw) {
    let viewport = list.viewport();

    for command in list.commands() {
        match command {
            DrawCommand::Clear => {
                draw.background().color(BLACK);
            }
            DrawCommand::FillRect { origin, size, paint } => {
                replay_fill_rect(draw, viewport, *origin, *size, paint);
            }
            DrawCommand::FillCircle { center, radius, color } => {
                draw.ellipse()
                    .xy(viewport.surface_to_window(*center))
                    .radius(*radius)
                    .color(to_rgba(*color));
            }
            DrawCommand::StrokeLine { from, to, width, color } => {
                draw.line()
                    .start(viewport.surface_to_window(*from))
                    .end(viewport.surface_to_window(*to))
                    .weight(*width)
                    .color(to_rgba(*color));
            }
        }
    }
}

fn to_rgba(color: Color) -> Rgba {
    rgba(color.r, color.g, color.b, color.a)
}

fn replay_fill_rect(draw: &Draw, viewport: Viewport, origin: Point2, size: Vec2, paint: &Paint) {
    match paint {
        Paint::Solid(color) => {
            let center = viewport.surface_to_window(origin + size / 2.0);
            draw.rect().xy(center).wh(size).color(to_rgba(*color));
        }
        Paint::Linear { .. } => {
            // The gradient parameter is affine in x and y, so per-vertex colors
            // on the two triangles reproduce a two-stop gradient exactly.
            let corners = [
                origin,
                origin + vec2(size.x, 0.0),
                origin + size,
                origin + vec2(0.0, size.y),
            ];
            let vertices: Vec<(Vec3, Rgba)> = corners
                .iter()
                .map(|&corner| {
                    (
                        viewport.surface_to_window(corner).extend(0.0),
                        to_rgba(paint.color_at(corner)),
                    )
                })
                .collect();
            draw.mesh().indexed_colored(vertices, vec![0, 1, 2, 0, 2, 3]);
        }
        Paint::Radial {
            center,
            inner_radius,
            outer_radius,
            stops,
        } => {
            if *inner_radius > 0.0 {
                if let Some(first) = stops.first() {
                    draw.ellipse()
                        .xy(viewport.surface_to_window(*center))
                        .radius(*inner_radius)
                        .color(to_rgba(first.color));
                }
            }

            // Concentric bands from the inner to the outer radius. Past the
            // outer radius nothing is drawn, so radial paints are expected to
            // end on a transparent stop.
            let span = (outer_radius - inner_radius).max(0.0);
            let mut vertices = Vec::with_capacity((RADIAL_BANDS + 1) * RADIAL_SEGMENTS);
            for band in 0..=RADIAL_BANDS {
                let t = band as f32 / RADIAL_BANDS as f32;
                let radius = inner_radius + span * t;
                let color = to_rgba(sample_stops(stops, t));
                for segment in 0..RADIAL_SEGMENTS {
                    let angle = segment as f32 / RADIAL_SEGMENTS as f32 * TAU;
                    let point = *center + vec2(angle.cos(), angle.sin()) * radius;
                    vertices.push((viewport.surface_to_window(point).extend(0.0), color));
                }
            }

            let mut indices = Vec::with_capacity(RADIAL_BANDS * RADIAL_SEGMENTS * 6);
            for band in 0..RADIAL_BANDS {
                let inner = band * RADIAL_SEGMENTS;
                let outer = inner + RADIAL_SEGMENTS;
                for segment in 0..RADIAL_SEGMENTS {
                    let next = (segment + 1) % RADIAL_SEGMENTS;
                    indices.extend_from_slice(&[
                        inner + segment,
                        outer + segment,
                        outer + next,
                        inner + segment,
                        outer + next,
                        inner + next,
                    ]);
                }
            }
            draw.mesh().indexed_colored(vertices, indices);
        }
    }
}
