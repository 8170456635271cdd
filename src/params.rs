/*
 * Network Parameters Module
 *
 * This module defines the NetworkParams struct that contains the tunable
 * parameters of the background. The defaults reproduce the stock look; the
 * control panel can adjust them at runtime. It also provides snapshot-based
 * change detection so the host knows when the field has to be regenerated.
 */

use crate::{CONNECT_DISTANCE, DRIFT_SPEED, FADE_IN_FRAMES, NODE_COUNT, PARALLAX_FACTOR};

// Parameters for the network that can be adjusted via UI
#[derive(Clone, Debug)]
pub struct NetworkParams {
    pub node_count: usize,
    pub connect_distance: f32,
    pub drift_speed: f32,
    pub parallax_factor: f32,
    pub fade_in_frames: u32,
    pub show_debug: bool,
    pub show_controls: bool,

    // Internal state for tracking changes
    previous_values: Option<ParamSnapshot>,
}

// A snapshot of parameter values used for change detection
#[derive(Clone, Debug)]
struct ParamSnapshot {
    node_count: usize,
}

impl Default for NetworkParams {
    fn default() -> Self {
        Self {
            node_count: NODE_COUNT,
            connect_distance: CONNECT_DISTANCE,
            drift_speed: DRIFT_SPEED,
            parallax_factor: PARALLAX_FACTOR,
            fade_in_frames: FADE_IN_FRAMES,
            show_debug: false,
            show_controls: false,
            previous_values: None,
        }
    }
}

impl NetworkParams {
    // Take a snapshot of current parameter values for change detection
    pub fn take_snapshot(&mut self) {
        self.previous_values = Some(ParamSnapshot {
            node_count: self.node_count,
        });
    }

    // Check whether the node count changed since the last snapshot. The
    // other parameters are read fresh every frame and need no regeneration.
    pub fn detect_changes(&self) -> bool {
        // If we don't have previous values, nothing has changed
        match &self.previous_values {
            Some(prev) => self.node_count != prev.node_count,
            None => false,
        }
    }

    // Opacity after `frames_drawn` frames of the fade-in.
    pub fn fade_opacity(&self, frames_drawn: u64) -> f32 {
        if self.fade_in_frames == 0 {
            return 1.0;
        }
        (frames_drawn as f32 / self.fade_in_frames as f32).min(1.0)
    }

    // Get parameter ranges for UI sliders

    // Every frame checks all node pairs, so the count is capped well below
    // the point where that stops being interactive.
    pub fn node_count_range() -> std::ops::RangeInclusive<usize> {
        0..=400
    }

    pub fn connect_distance_range() -> std::ops::RangeInclusive<f32> {
        0.0..=400.0
    }

    pub fn drift_speed_range() -> std::ops::RangeInclusive<f32> {
        0.0..=2.0
    }

    pub fn parallax_factor_range() -> std::ops::RangeInclusive<f32> {
        0.0..=0.1
    }
}
