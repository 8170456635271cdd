/*
 * UI Module
 *
 * This module contains the control panel, built with nannou_egui, for
 * adjusting the network parameters at runtime, plus the on-canvas debug
 * overlay. Parameter change detection is handled by NetworkParams.
 */

use nannou_egui::{egui, Egui};
use crate::params::NetworkParams;
use crate::debug::DebugInfo;

// Update the UI and return whether nodes should be regenerated and whether the node count changed
pub fn update_ui(
    egui: &mut Egui,
    params: &mut NetworkParams,
    debug_info: &DebugInfo
) -> (bool, bool) {
    let mut should_regenerate = false;

    // Take a snapshot of current parameter values for change detection
    params.take_snapshot();

    let ctx = egui.begin_frame();

    if params.show_controls {
        egui::Window::new("Network Controls")
            .default_pos([10.0, 10.0])
            .show(&ctx, |ui| {
                ui.collapsing("Nodes", |ui| {
                    ui.add(egui::Slider::new(&mut params.node_count, NetworkParams::node_count_range()).text("Number of Nodes"));

                    if ui.button("Regenerate Nodes").clicked() {
                        should_regenerate = true;
                    }

                    ui.add(egui::Slider::new(&mut params.drift_speed, NetworkParams::drift_speed_range()).text("Drift Speed"));
                });

                ui.collapsing("Edges", |ui| {
                    ui.add(egui::Slider::new(&mut params.connect_distance, NetworkParams::connect_distance_range()).text("Connect Distance"));
                    ui.add(egui::Slider::new(&mut params.parallax_factor, NetworkParams::parallax_factor_range()).text("Parallax Factor"));
                });

                ui.collapsing("Performance", |ui| {
                    for line in performance_lines(debug_info) {
                        ui.label(line);
                    }
                });

                ui.checkbox(&mut params.show_debug, "Show Debug Info");
            });
    }

    // Detect parameter changes
    let node_count_changed = params.detect_changes();

    (should_regenerate, node_count_changed)
}

// Lines shared by the Performance section and the debug overlay
pub fn performance_lines(debug_info: &DebugInfo) -> Vec<String> {
    let stats = &debug_info.last_frame;
    vec![
        format!("FPS: {:.1}", debug_info.fps),
        format!("Frame time: {:.2} ms", debug_info.frame_time.as_secs_f64() * 1000.0),
        format!("Frames drawn: {}", debug_info.frames_drawn),
        format!("Frames skipped: {}", debug_info.frames_skipped),
        format!("Nodes: {}", stats.nodes),
        format!("Edges: {}", stats.edges),
        format!("Pair checks: {}", stats.pair_checks),
        format!("Opacity: {:.2}", stats.opacity),
    ]
}

// Draw debug information on the screen
pub fn draw_debug_info(
    draw: &nannou::Draw,
    debug_info: &DebugInfo,
    window_rect: nannou::geom::Rect,
) {
    // Create a background panel in the top-left corner
    let margin = 20.0;
    let line_height = 20.0;
    let panel_width = 200.0;
    let debug_texts = performance_lines(debug_info);
    let panel_height = line_height * debug_texts.len() as f32 + margin;
    let panel_x = window_rect.left() + panel_width / 2.0;
    let panel_y = window_rect.top() - panel_height / 2.0;

    draw.rect()
        .x_y(panel_x, panel_y)
        .w_h(panel_width, panel_height)
        .color(nannou::color::rgba(0.0, 0.0, 0.0, 0.7));

    let text_x = window_rect.left() + margin;
    let text_y = window_rect.top() - margin;

    for (i, text) in debug_texts.iter().enumerate() {
        let y = text_y - (i as f32 * line_height);

        // Fixed offset from the left edge, text is centered on its position
        draw.text(text)
            .x_y(text_x + 70.0, y)
            .color(nannou::color::WHITE)
            .font_size(14);
    }
}
