/*
 * Input Module
 *
 * This module forwards window events to the background. Pointer positions
 * arrive in window space and are converted to surface space first.
 *
 * Keys:
 * - D toggles the debug overlay
 * - C toggles the control panel
 * - R regenerates the nodes
 */

use nannou::prelude::*;

use crate::app::Model;
use crate::viewport::Viewport;

// Mouse moved event handler
pub fn mouse_moved(_app: &App, model: &mut Model, pos: Point2) {
    let viewport = model.background.viewport();
    model.background.pointer_moved(viewport.window_to_surface(pos));
}

// Window resized event handler
pub fn resized(_app: &App, model: &mut Model, size: Vec2) {
    model.background.resized(Viewport::new(size.x, size.y));
}

// Keyboard shortcuts, unless egui has keyboard focus
pub fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    if model.egui.ctx().wants_keyboard_input() {
        return;
    }

    match key {
        Key::D => {
            let params = model.background.params_mut();
            params.show_debug = !params.show_debug;
        }
        Key::C => {
            let params = model.background.params_mut();
            params.show_controls = !params.show_controls;
        }
        Key::R => {
            model.background.regenerate();
            log::debug!("nodes regenerated from keyboard");
        }
        _ => {}
    }
}

// Pass raw window events through to egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}
