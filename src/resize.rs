//! Resize handle model and transform math.
//!
//! Eight handles sit on a selection's bounding box: four corners and four
//! edge midpoints. Each handle owns a fixed directional policy for which of
//! width/height/x/y a pointer delta affects. [`compute_resize`] is a pure
//! function of the handle, the delta from gesture origin, and the *initial*
//! captured rectangle - never intermediate results, so repeated calls with
//! a growing delta cannot accumulate drift. The gesture snapshot and update
//! throttling live in the input state machine, not here.

use crate::geometry::{Point, Rect, Size, Vec2};
use crate::types::Modifiers;
use serde::{Deserialize, Serialize};

/// One of the eight resize handles on a selection bounding box.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Handle {
    Nw,
    N,
    Ne,
    W,
    E,
    Sw,
    S,
    Se,
}

impl Handle {
    /// All handles, corners first so they win hit-testing ties on small
    /// bounding boxes.
    pub const ALL: [Handle; 8] = [
        Handle::Nw,
        Handle::Ne,
        Handle::Sw,
        Handle::Se,
        Handle::N,
        Handle::S,
        Handle::W,
        Handle::E,
    ];

    pub fn is_corner(self) -> bool {
        matches!(self, Handle::Nw | Handle::Ne | Handle::Sw | Handle::Se)
    }

    /// The handle's grab point on the given bounding box.
    pub fn anchor(self, bounds: Rect) -> Point {
        let cx = bounds.x + bounds.width / 2.0;
        let cy = bounds.y + bounds.height / 2.0;
        match self {
            Handle::Nw => Point::new(bounds.x, bounds.y),
            Handle::N => Point::new(cx, bounds.y),
            Handle::Ne => Point::new(bounds.max_x(), bounds.y),
            Handle::W => Point::new(bounds.x, cy),
            Handle::E => Point::new(bounds.max_x(), cy),
            Handle::Sw => Point::new(bounds.x, bounds.max_y()),
            Handle::S => Point::new(cx, bounds.max_y()),
            Handle::Se => Point::new(bounds.max_x(), bounds.max_y()),
        }
    }

    /// CSS-style cursor name hosts show while over or dragging the handle.
    pub fn cursor(self) -> &'static str {
        match self {
            Handle::Nw => "nw-resize",
            Handle::N => "n-resize",
            Handle::Ne => "ne-resize",
            Handle::W => "w-resize",
            Handle::E => "e-resize",
            Handle::Sw => "sw-resize",
            Handle::S => "s-resize",
            Handle::Se => "se-resize",
        }
    }
}

/// Find the handle whose grab target contains `p`, if any.
///
/// Grab targets are squares of side `handle_size` centered on the handle
/// anchors. A degenerate bounding box exposes no handles.
pub fn handle_at(bounds: Rect, p: Point, handle_size: f32) -> Option<Handle> {
    if bounds.is_degenerate() {
        return None;
    }

    let half = handle_size / 2.0;
    Handle::ALL.into_iter().find(|handle| {
        let anchor = handle.anchor(bounds);
        Rect::new(anchor.x - half, anchor.y - half, handle_size, handle_size).contains(p)
    })
}

/// Result of one resize step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResizeOutcome {
    pub size: Size,
    pub position: Point,
}

/// Compute the rectangle a resize gesture produces.
///
/// `delta` is the pointer displacement from the gesture origin and `initial`
/// the rectangle captured at gesture start. Modifier policies apply in
/// order: aspect-lock (shift, corner handles only), center-anchored scaling
/// (alt, any handle), then the minimum-size floor. The floor clamps width
/// and height without re-anchoring position, so the anchored edge can jump
/// visibly right at the floor boundary.
pub fn compute_resize(
    handle: Handle,
    delta: Vec2,
    initial: Rect,
    modifiers: Modifiers,
    min_size: f32,
) -> ResizeOutcome {
    let Vec2 { x: dx, y: dy } = delta;
    let mut width = initial.width;
    let mut height = initial.height;
    let mut x = initial.x;
    let mut y = initial.y;

    match handle {
        Handle::Nw => {
            width -= dx;
            height -= dy;
            x += dx;
            y += dy;
        }
        Handle::Ne => {
            width += dx;
            height -= dy;
            y += dy;
        }
        Handle::Sw => {
            width -= dx;
            height += dy;
            x += dx;
        }
        Handle::Se => {
            width += dx;
            height += dy;
        }
        Handle::N => {
            height -= dy;
            y += dy;
        }
        Handle::S => {
            height += dy;
        }
        Handle::W => {
            width -= dx;
            x += dx;
        }
        Handle::E => {
            width += dx;
        }
    }

    if modifiers.aspect_lock() && handle.is_corner() {
        let ratio = initial.width / initial.height;
        if width / height > ratio {
            // Width overshoots the locked ratio; recompute it from height
            // and keep the right edge fixed for west-side handles.
            width = height * ratio;
            if matches!(handle, Handle::Nw | Handle::Sw) {
                x = initial.x + (initial.width - width);
            }
        } else {
            height = width / ratio;
            if matches!(handle, Handle::Nw | Handle::Ne) {
                y = initial.y + (initial.height - height);
            }
        }
    }

    if modifiers.center_anchor() {
        let center = initial.center();
        x = center.x - width / 2.0;
        y = center.y - height / 2.0;
    }

    width = width.max(min_size);
    height = height.max(min_size);

    ResizeOutcome {
        size: Size::new(width, height),
        position: Point::new(x, y),
    }
}
