//! Coordinate conversion between screen and canvas space.
//!
//! The interaction engine works purely in canvas coordinates; hosts receive
//! pointer events in screen pixels and convert them here before handing
//! them over. Centralizing the formulas keeps the conversion identical on
//! every call site.

use crate::constants::{DEFAULT_ZOOM, MAX_ZOOM, MIN_ZOOM};
use crate::geometry::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// Pan/zoom transform of the canvas viewport.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CanvasTransform {
    /// Screen offset of the canvas viewport's top-left corner (window
    /// chrome such as docks and headers)
    pub viewport_origin: Vec2,
    /// Current pan offset in screen pixels
    pub pan: Vec2,
    /// Zoom factor, clamped to the supported range
    pub zoom: f32,
}

impl Default for CanvasTransform {
    fn default() -> Self {
        Self {
            viewport_origin: Vec2::ZERO,
            pan: Vec2::ZERO,
            zoom: DEFAULT_ZOOM,
        }
    }
}

impl CanvasTransform {
    /// Convert a screen position to canvas coordinates.
    pub fn screen_to_canvas(&self, screen: Point) -> Point {
        Point::new(
            (screen.x - self.viewport_origin.x - self.pan.x) / self.zoom,
            (screen.y - self.viewport_origin.y - self.pan.y) / self.zoom,
        )
    }

    /// Convert a canvas position back to screen coordinates.
    pub fn canvas_to_screen(&self, canvas: Point) -> Point {
        Point::new(
            canvas.x * self.zoom + self.pan.x + self.viewport_origin.x,
            canvas.y * self.zoom + self.pan.y + self.viewport_origin.y,
        )
    }

    /// Convert a screen-space displacement to canvas units.
    pub fn screen_delta_to_canvas(&self, delta: Vec2) -> Vec2 {
        Vec2::new(delta.x / self.zoom, delta.y / self.zoom)
    }

    /// Set the zoom factor, clamped to the supported range.
    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Pan the viewport by a screen-space delta.
    pub fn pan_by(&mut self, delta: Vec2) {
        self.pan = self.pan + delta;
    }
}
