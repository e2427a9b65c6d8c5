//! Pointer-move handling - threshold commitment, drag, marquee, resize.
//!
//! Mouse move is the hot path during interaction (60+ events per second).
//! Committed drag and resize gestures compute against the gesture-start
//! snapshot on every event but only forward intents at the throttled rate;
//! marquee selection re-derives against the live element list each move.

use crate::geometry::{Point, Rect};
use crate::input::engine::{InteractionEngine, Response, emit_move_steps};
use crate::input::state::{Gesture, PendingIntent};
use crate::profile_scope;
use crate::resize::compute_resize;
use crate::store::{ElementStore, MutationSink};
use crate::types::Modifiers;
use tracing::{debug, warn};

impl InteractionEngine {
    /// Handle pointer motion to canvas point `p`.
    pub fn pointer_move(
        &mut self,
        store: &ElementStore,
        p: Point,
        modifiers: Modifiers,
        sink: &mut dyn MutationSink,
    ) -> Response {
        profile_scope!("pointer_move");

        // A pending press commits once cumulative travel from the origin
        // exceeds the threshold; below it, jitter has no visible effect.
        if let Gesture::Pending { origin, .. } = &self.gesture {
            if (p - *origin).length() <= self.config.drag_threshold {
                return Response::default();
            }
            let Gesture::Pending { origin, intent } = std::mem::take(&mut self.gesture) else {
                unreachable!("matched Pending above");
            };
            match intent {
                PendingIntent::Drag { targets, .. } => {
                    debug!(count = targets.len(), "drag gesture started");
                    self.gesture = Gesture::Dragging { origin, targets };
                }
                PendingIntent::Marquee { additive, base } => {
                    debug!("marquee gesture started");
                    self.gesture = Gesture::MarqueeSelecting {
                        origin,
                        current: p,
                        additive,
                        base,
                    };
                }
            }
        }

        match &mut self.gesture {
            Gesture::Dragging { origin, targets } => {
                let delta = p - *origin;
                if self.throttle.ready() {
                    emit_move_steps(targets, delta, sink);
                }
                Response::OVERLAY
            }
            Gesture::MarqueeSelecting {
                origin,
                current,
                additive,
                base,
            } => {
                *current = p;
                let rect = Rect::from_corners(*origin, p);
                let mut ids = store.intersecting(&rect);
                if *additive {
                    ids.extend(base.iter().copied());
                }
                let changed = self.selection.set_many(ids);
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
                emitted,
            } => {
                let delta = p - *origin;
                if self.throttle.ready() {
                    let outcome = compute_resize(
                        *handle,
                        delta,
                        *initial,
                        modifiers,
                        self.config.min_element_size,
                    );
                    if let Err(error) = sink.resize_to(*id, outcome.size, outcome.position) {
                        warn!(%error, element = *id, "resize intent rejected by mutation sink");
                    }
                    *emitted = true;
                }
                Response::OVERLAY
            }
            Gesture::Idle | Gesture::Pending { .. } | Gesture::Clicking => Response::default(),
        }
    }
}
