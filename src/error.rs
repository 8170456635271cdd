/*
 * Error Module
 *
 * The only thing that can go wrong is the drawing surface not being there
 * when a frame comes due. The scheduler swallows it and stops the loop.
 */

use std::fmt;

// Reasons a frame could not get hold of its drawing surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    // The host window has been closed
    WindowClosed,
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurfaceError::WindowClosed => write!(f, "host window is closed"),
        }
    }
}

impl std::error::Error for SurfaceError {}
