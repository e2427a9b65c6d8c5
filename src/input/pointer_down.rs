//! Pointer-down handling - gesture start, click selection, marquee arming.
//!
//! A press resolves in priority order: resize handle grab, press on the
//! existing selection (armed as a drag), press on any visible element
//! (immediate click selection), empty canvas (armed as a marquee).

use crate::geometry::Point;
use crate::input::engine::{InteractionEngine, Response};
use crate::input::state::{Gesture, PendingIntent};
use crate::profile_scope;
use crate::store::{ElementStore, MutationSink};
use crate::types::Modifiers;
use tracing::debug;

impl InteractionEngine {
    /// Handle a pointer press at canvas point `p`.
    ///
    /// If a gesture is somehow still open (a missed release), it is
    /// forcibly cancelled before the new press is interpreted.
    pub fn pointer_down(
        &mut self,
        store: &ElementStore,
        p: Point,
        modifiers: Modifiers,
        sink: &mut dyn MutationSink,
    ) -> Response {
        profile_scope!("pointer_down");

        let mut response = Response::default();
        if !self.gesture.is_idle() {
            response = response.union(self.cancel(sink));
        }

        // Handle grabs are unambiguous, already-precise targets: enter the
        // resize gesture immediately, bypassing the drag threshold.
        if let Some((id, handle, initial)) = self.resize_grab_at(store, p) {
            debug!(element = id, handle = ?handle, "resize gesture started");
            self.gesture = Gesture::Resizing {
                id,
                handle,
                origin: p,
                initial,
                emitted: false,
            };
            self.throttle.reset();
            return response.union(Response::OVERLAY);
        }

        match store.topmost_at(p) {
            // Press on the existing selection: defer to the threshold to
            // decide between a group drag and a plain click.
            Some(element) if self.selection.contains(element.id) && !element.locked => {
                let targets = self.drag_targets(store);
                self.gesture = Gesture::Pending {
                    origin: p,
                    intent: PendingIntent::Drag {
                        pressed: element.id,
                        targets,
                    },
                };
            }
            // Any other visible element (including locked ones) resolves to
            // a click right away.
            Some(element) => {
                let changed = self.apply_click_selection(element.id, modifiers);
                debug!(element = element.id, "click selection");
                self.gesture = Gesture::Clicking;
                response.selection_changed |= changed;
            }
            // Empty canvas: arm a marquee. Without the additive modifier
            // the selection clears immediately.
            None => {
                let additive = modifiers.additive();
                let base = self.selection.sorted_ids();
                if !additive {
                    response.selection_changed |= self.selection.clear();
                }
                self.gesture = Gesture::Pending {
                    origin: p,
                    intent: PendingIntent::Marquee { additive, base },
                };
            }
        }

        self.throttle.reset();
        response
    }
}
