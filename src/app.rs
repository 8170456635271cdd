/*
 * Application Module
 *
 * This module defines the nannou host for the network background. It owns
 * one Background and plays the host's part for it: a frame queue polled once
 * per update, a DisplayList as the drawing surface, and window events
 * forwarded through the input module.
 *
 * Frames are simulated and recorded in `update` and replayed in `view`.
 */

use nannou::prelude::*;
use nannou_egui::Egui;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::debug::DebugInfo;
use crate::error::SurfaceError;
use crate::input;
use crate::params::NetworkParams;
use crate::renderer;
use crate::scheduler::{Background, FrameQueue, TickOutcome};
use crate::surface::DisplayList;
use crate::ui;
use crate::viewport::Viewport;

// Main model for the application
pub struct Model {
    pub window_id: WindowId,
    pub background: Background<FrameQueue, StdRng>,
    pub display_list: DisplayList,
    pub egui: Egui,
    pub debug_info: DebugInfo,
}

// Initialize the model
pub fn model(app: &App) -> Model {
    // Size the window at 80% of the primary monitor when there is one
    let (window_width, window_height) = match app.primary_monitor() {
        Some(monitor) => {
            let size = monitor.size();
            (size.width as f32 * 0.8, size.height as f32 * 0.8)
        }
        None => (1280.0, 800.0),
    };

    let window_id = app
        .new_window()
        .title("Plexus")
        .size(window_width as u32, window_height as u32)
        .view(view)
        .mouse_moved(input::mouse_moved)
        .resized(input::resized)
        .key_pressed(input::key_pressed)
        .raw_event(input::raw_window_event)
        .build()
        .expect("failed to create the background window");

    let window = app
        .window(window_id)
        .expect("window disappeared right after creation");
    let egui = Egui::from_window(&window);
    let viewport = Viewport::from_rect(window.rect());

    let mut background = Background::new(
        FrameQueue::new(),
        StdRng::from_entropy(),
        NetworkParams::default(),
    );
    background.start(viewport);

    Model {
        window_id,
        background,
        display_list: DisplayList::new(viewport),
        egui,
        debug_info: DebugInfo::default(),
    }
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;
    model.egui.set_elapsed_time(update.since_start);

    let (should_regenerate, node_count_changed) =
        ui::update_ui(&mut model.egui, model.background.params_mut(), &model.debug_info);

    if should_regenerate || node_count_changed {
        model.background.regenerate();
    }

    // Run the background's frame if one was requested for this repaint
    if let Some(handle) = model.background.clock_mut().take_due() {
        let surface = if app.window(model.window_id).is_some() {
            Ok(&mut model.display_list)
        } else {
            Err(SurfaceError::WindowClosed)
        };

        match model.background.on_frame(handle, surface) {
            TickOutcome::Drawn(stats) => model.debug_info.record_frame(stats),
            TickOutcome::Skipped => model.debug_info.record_skip(),
            TickOutcome::Ignored => {}
        }
    }
}

// Render the last recorded frame
pub fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();

    if model.display_list.is_empty() {
        draw.background().color(BLACK);
    } else {
        renderer::replay(&model.display_list, &draw);
    }

    if model.background.params().show_debug {
        ui::draw_debug_info(&draw, &model.debug_info, app.window_rect());
    }

    if let Err(err) = draw.to_frame(app, &frame) {
        log::warn!("failed to draw background frame: {:?}", err);
    }

    if let Err(err) = model.egui.draw_to_frame(&frame) {
        log::warn!("failed to draw control panel: {:?}", err);
    }
}

// Teardown when the app exits
pub fn exit(_app: &App, mut model: Model) {
    model.background.stop();
}
