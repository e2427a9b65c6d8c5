//! Pointer-up handling - authoritative final emits and gesture teardown.
//!
//! Release always returns the machine to idle. Drag and resize emit one
//! final update computed from the release point, never throttled, and
//! issued last so no stale intermediate update can overwrite it.

use crate::geometry::{Point, Rect};
use crate::input::engine::{InteractionEngine, Response, emit_move_steps};
use crate::input::state::{Gesture, PendingIntent};
use crate::profile_scope;
use crate::resize::compute_resize;
use crate::store::{ElementStore, MutationSink};
use crate::types::Modifiers;
use tracing::{debug, warn};

impl InteractionEngine {
    /// Handle pointer release at canvas point `p`.
    pub fn pointer_up(
        &mut self,
        store: &ElementStore,
        p: Point,
        modifiers: Modifiers,
        sink: &mut dyn MutationSink,
    ) -> Response {
        profile_scope!("pointer_up");

        let gesture = std::mem::take(&mut self.gesture);
        self.throttle.reset();

        match gesture {
            Gesture::Idle | Gesture::Clicking => Response::default(),

            Gesture::Pending { intent, .. } => match intent {
                // Never crossed the threshold: a plain click on the
                // already-selected element, honoring the modifiers.
                PendingIntent::Drag { pressed, .. } => {
                    let changed = self.apply_click_selection(pressed, modifiers);
                    debug!(element = pressed, "press resolved as click");
                    Response {
                        selection_changed: changed,
                        overlay_changed: false,
                    }
                }
                // Empty-area click; the selection was already cleared on
                // the press unless the marquee was additive.
                PendingIntent::Marquee { .. } => Response::default(),
            },

            Gesture::Dragging { origin, mut targets } => {
                let delta = p - origin;
                emit_move_steps(&mut targets, delta, sink);
                debug!(count = targets.len(), "drag gesture finished");
                Response::OVERLAY
            }

            Gesture::MarqueeSelecting {
                origin,
                additive,
                base,
                ..
            } => {
                let rect = Rect::from_corners(origin, p);
                let mut ids = store.intersecting(&rect);
                if additive {
                    ids.extend(base);
                }
                let changed = self.selection.set_many(ids);
                debug!(selected = self.selection.len(), "marquee gesture finished");
                Response {
                    selection_changed: changed,
                    overlay_changed: true,
                }
            }

            Gesture::Resizing {
                id,
                handle,
                origin,
                initial,
                ..
            } => {
                let delta = p - origin;
                let outcome = compute_resize(
                    handle,
                    delta,
                    initial,
                    modifiers,
                    self.config.min_element_size,
                );
                if let Err(error) = sink.resize_to(id, outcome.size, outcome.position) {
                    warn!(%error, element = id, "final resize intent rejected by mutation sink");
                }
                debug!(element = id, "resize gesture finished");
                Response::OVERLAY
            }
        }
    }
}
