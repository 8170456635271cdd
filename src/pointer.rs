/*
 * Pointer Module
 *
 * Tracks the latest known pointer position in surface coordinates.
 */

use nannou::prelude::*;

use crate::viewport::Viewport;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    position: Point2,
}

impl PointerState {
    // Before any pointer event the pointer is assumed to sit at the center
    pub fn centered(viewport: Viewport) -> Self {
        Self {
            position: viewport.center(),
        }
    }

    pub fn position(&self) -> Point2 {
        self.position
    }

    pub fn move_to(&mut self, position: Point2) {
        self.position = position;
    }
}
