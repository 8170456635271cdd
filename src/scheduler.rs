/*
 * Scheduler Module
 *
 * This module drives the background's frame loop. Background is the explicit
 * state object for one mounted instance: it owns the node field, pointer and
 * viewport, and moves through Idle -> Running -> Stopped.
 *
 * While Running, every frame steps the field, draws it, and requests the next
 * frame from the host's FrameScheduler. Resize and pointer events arrive
 * between frames and are picked up by the next one. Stopping cancels the
 * pending frame and detaches the event listeners.
 *
 * The loop never reports errors to the host: if the drawing surface is gone
 * when a frame comes due, that frame is skipped and the loop halts.
 */

use nannou::prelude::*;
use rand::Rng;

use crate::error::SurfaceError;
use crate::field::NodeField;
use crate::params::NetworkParams;
use crate::physics;
use crate::pointer::PointerState;
use crate::renderer::{self, FrameContext, FrameStats};
use crate::surface::Surface;
use crate::viewport::Viewport;

// Identifies one requested frame so it can be cancelled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameHandle(u64);

impl FrameHandle {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn id(&self) -> u64 {
        self.0
    }
}

// The host's "run this before the next repaint" primitive.
pub trait FrameScheduler {
    fn request_frame(&mut self) -> FrameHandle;
    fn cancel_frame(&mut self, handle: FrameHandle);
}

// Single-slot frame queue polled once per host frame.
#[derive(Debug, Default)]
pub struct FrameQueue {
    next_id: u64,
    pending: Option<FrameHandle>,
}

impl FrameQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> Option<FrameHandle> {
        self.pending
    }

    // Hand out the frame that is due this repaint, if any
    pub fn take_due(&mut self) -> Option<FrameHandle> {
        self.pending.take()
    }
}

impl FrameScheduler for FrameQueue {
    fn request_frame(&mut self) -> FrameHandle {
        self.next_id += 1;
        let handle = FrameHandle(self.next_id);
        self.pending = Some(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if self.pending == Some(handle) {
            self.pending = None;
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchedulerState {
    Idle,
    Running,
    Stopped,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TickOutcome {
    // The frame was simulated and drawn, and the next one requested.
    Drawn(FrameStats),
    // The surface was unavailable; nothing was drawn and the loop halted.
    Skipped,
    // Not running, or the handle is not the pending frame.
    Ignored,
}

pub struct Background<C, R> {
    clock: C,
    rng: R,
    params: NetworkParams,
    state: SchedulerState,
    field: NodeField,
    pointer: PointerState,
    viewport: Viewport,
    pending: Option<FrameHandle>,
    listening: bool,
    frames_drawn: u64,
}

impl<C: FrameScheduler, R: Rng> Background<C, R> {
    pub fn new(clock: C, rng: R, params: NetworkParams) -> Self {
        let viewport = Viewport::new(0.0, 0.0);
        Self {
            clock,
            rng,
            params,
            state: SchedulerState::Idle,
            field: NodeField::default(),
            pointer: PointerState::centered(viewport),
            viewport,
            pending: None,
            listening: false,
            frames_drawn: 0,
        }
    }

    // Mount: build the field, attach listeners and request the first frame
    pub fn start(&mut self, viewport: Viewport) {
        if self.state != SchedulerState::Idle {
            log::debug!("start ignored, background is {:?}", self.state);
            return;
        }

        self.viewport = viewport;
        self.pointer = PointerState::centered(viewport);
        self.field = NodeField::generate(viewport, self.params.node_count, &mut self.rng);
        self.frames_drawn = 0;
        self.listening = true;
        self.pending = Some(self.clock.request_frame());
        self.state = SchedulerState::Running;

        log::info!(
            "background started: {} nodes on {}x{}",
            self.field.len(),
            viewport.width(),
            viewport.height()
        );
    }

    // Run the frame identified by `handle`: step, draw, re-arm.
    pub fn on_frame<S: Surface + ?Sized>(
        &mut self,
        handle: FrameHandle,
        surface: Result<&mut S, SurfaceError>,
    ) -> TickOutcome {
        if self.state != SchedulerState::Running || self.pending != Some(handle) {
            return TickOutcome::Ignored;
        }
        self.pending = None;

        let surface = match surface {
            Ok(surface) => surface,
            Err(err) => {
                log::debug!("frame {} skipped, halting loop: {}", handle.id(), err);
                return TickOutcome::Skipped;
            }
        };

        physics::step(&mut self.field, self.params.drift_speed);

        self.frames_drawn += 1;
        let ctx = FrameContext {
            viewport: self.viewport,
            parallax: self.parallax(),
            connect_distance: self.params.connect_distance,
            opacity: self.params.fade_opacity(self.frames_drawn),
        };
        let stats = renderer::draw(surface, &self.field, &ctx);

        self.pending = Some(self.clock.request_frame());
        TickOutcome::Drawn(stats)
    }

    pub fn pointer_moved(&mut self, position: Point2) {
        if !self.listening {
            return;
        }
        self.pointer.move_to(position);
    }

    // A resize throws the old field away and starts over at the new size
    pub fn resized(&mut self, viewport: Viewport) {
        if !self.listening {
            return;
        }
        self.viewport = viewport;
        self.regenerate();
        log::debug!(
            "viewport resized to {}x{}, field regenerated",
            viewport.width(),
            viewport.height()
        );
    }

    pub fn regenerate(&mut self) {
        if self.state != SchedulerState::Running {
            return;
        }
        self.field = NodeField::generate(self.viewport, self.params.node_count, &mut self.rng);
    }

    // Teardown: cancel the pending frame and detach listeners
    pub fn stop(&mut self) {
        if self.state == SchedulerState::Stopped {
            log::debug!("stop ignored, background already stopped");
            return;
        }

        if let Some(handle) = self.pending.take() {
            self.clock.cancel_frame(handle);
        }
        self.listening = false;
        self.state = SchedulerState::Stopped;

        log::info!("background stopped after {} frames", self.frames_drawn);
    }

    pub fn parallax(&self) -> Vec2 {
        physics::parallax(&self.pointer, self.viewport, self.params.parallax_factor)
    }
}

impl<C, R> Background<C, R> {
    pub fn state(&self) -> SchedulerState {
        self.state
    }

    pub fn field(&self) -> &NodeField {
        &self.field
    }

    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn params(&self) -> &NetworkParams {
        &self.params
    }

    pub fn params_mut(&mut self) -> &mut NetworkParams {
        &mut self.params
    }

    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.pending
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }
}
