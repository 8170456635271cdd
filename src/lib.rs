/*
 * Plexus Particle Network - Module Definitions
 *
 * This file defines the module structure for the animated network background.
 * The simulation core (nodes, field, physics, renderer, scheduler) is kept free
 * of window state so it can be driven by the nannou host or by tests.
 */

// Re-export key components for easier access
pub use node::NodePoint;
pub use field::NodeField;
pub use viewport::Viewport;
pub use pointer::PointerState;
pub use surface::{Color, DisplayList, DrawCommand, GradientStop, Paint, Surface};
pub use renderer::FrameStats;
pub use scheduler::{Background, FrameHandle, FrameQueue, FrameScheduler, SchedulerState, TickOutcome};
pub use params::NetworkParams;
pub use debug::DebugInfo;
pub use error::SurfaceError;
pub use app::Model;

// Define modules
pub mod node;
pub mod field;
pub mod viewport;
pub mod pointer;
pub mod physics;
pub mod surface;
pub mod renderer;
pub mod scheduler;
pub mod params;
pub mod debug;
pub mod error;
pub mod ui;
pub mod input;
pub mod app;

// Population
pub const NODE_COUNT: usize = 85;

// Creation-time ranges, all inclusive
pub const VISUAL_RADIUS_MIN: f32 = 0.8;
pub const VISUAL_RADIUS_MAX: f32 = 2.6;
pub const ORBIT_RADIUS_MIN: f32 = 20.0;
pub const ORBIT_RADIUS_MAX: f32 = 60.0;
pub const ANGULAR_SPEED_MIN: f64 = 0.0012;
pub const ANGULAR_SPEED_MAX: f64 = 0.0042;

// Motion
pub const DRIFT_SPEED: f32 = 0.35;
pub const PARALLAX_FACTOR: f32 = 0.02;

// Rendering
pub const CONNECT_DISTANCE: f32 = 150.0;
pub const HALO_SCALE: f32 = 2.2;
pub const EDGE_MAX_ALPHA: f32 = 0.5;
pub const EDGE_WIDTH_SCALE: f32 = 1.2;
pub const GLOW_INNER_RADIUS: f32 = 0.0;
pub const GLOW_OUTER_RADIUS: f32 = 520.0;
pub const FADE_IN_FRAMES: u32 = 60;
