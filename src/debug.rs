/*
 * Debug Information Module
 *
 * This module defines the DebugInfo struct that contains performance metrics
 * to be displayed in the control panel and the debug overlay.
 */

use std::time::Duration;

use crate::renderer::FrameStats;

// Debug information to display
#[derive(Clone, Debug, Default)]
pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub frames_drawn: u64,
    pub frames_skipped: u64,
    pub last_frame: FrameStats,
}

impl DebugInfo {
    pub fn record_frame(&mut self, stats: FrameStats) {
        self.frames_drawn += 1;
        self.last_frame = stats;
    }

    pub fn record_skip(&mut self) {
        self.frames_skipped += 1;
    }
}
