//! The interaction engine - owned state and shared gesture plumbing.
//!
//! [`InteractionEngine`] is the single entry point for pointer events on
//! the canvas surface. It owns the selection, the active [`Gesture`] and
//! the emission throttle; elements themselves stay in the caller's
//! [`ElementStore`] and are only ever changed through [`MutationSink`]
//! intents. Event handlers live in the sibling `pointer_down` /
//! `pointer_move` / `pointer_up` modules.

use crate::config::InteractionConfig;
use crate::geometry::{Point, Rect, Vec2};
use crate::input::state::{DragTarget, Gesture, GestureKind};
use crate::input::throttle::UpdateThrottle;
use crate::resize::{Handle, handle_at};
use crate::selection::SelectionManager;
use crate::store::{ElementStore, MutationSink};
use crate::types::{ElementId, Modifiers};
use tracing::{debug, warn};

/// What a pointer event changed, for the host's re-render decision.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Response {
    /// The selection set changed; hosts re-render highlights and notify
    /// selection listeners.
    pub selection_changed: bool,
    /// Gesture visual state changed (marquee rectangle, drag/resize
    /// feedback); hosts repaint the overlay.
    pub overlay_changed: bool,
}

impl Response {
    pub(super) const OVERLAY: Response = Response {
        selection_changed: false,
        overlay_changed: true,
    };

    pub fn union(self, other: Response) -> Response {
        Response {
            selection_changed: self.selection_changed || other.selection_changed,
            overlay_changed: self.overlay_changed || other.overlay_changed,
        }
    }

    pub fn any(&self) -> bool {
        self.selection_changed || self.overlay_changed
    }
}

/// Pointer-driven interaction state machine for the canvas.
pub struct InteractionEngine {
    pub(super) config: InteractionConfig,
    pub(super) selection: SelectionManager,
    pub(super) gesture: Gesture,
    pub(super) throttle: UpdateThrottle,
}

impl Default for InteractionEngine {
    fn default() -> Self {
        Self::new(InteractionConfig::default())
    }
}

impl InteractionEngine {
    pub fn new(config: InteractionConfig) -> Self {
        Self {
            throttle: UpdateThrottle::new(config.throttle_interval()),
            config,
            selection: SelectionManager::new(),
            gesture: Gesture::Idle,
        }
    }

    pub fn config(&self) -> &InteractionConfig {
        &self.config
    }

    /// The selection set this engine maintains; the source of truth hosts
    /// render back as highlights.
    pub fn selection(&self) -> &SelectionManager {
        &self.selection
    }

    /// Mutable selection access for explicit host commands (select-all,
    /// clear from a menu). Not for use mid-gesture.
    pub fn selection_mut(&mut self) -> &mut SelectionManager {
        &mut self.selection
    }

    pub fn gesture_kind(&self) -> GestureKind {
        self.gesture.kind()
    }

    /// The live marquee rectangle for the rubber-band indicator, if a
    /// marquee gesture is active.
    pub fn marquee_rect(&self) -> Option<Rect> {
        self.gesture.marquee_rect()
    }

    /// Bounding box of the current selection; [`Rect::ZERO`] when nothing
    /// resolvable is selected (hosts must not draw it).
    pub fn selection_bounds(&self, store: &ElementStore) -> Rect {
        self.selection.bounds(store)
    }

    /// The resize handle under `p`, when the selection exposes handles.
    ///
    /// Handles are active only for a single-element selection whose element
    /// is visible and unlocked; locked elements stay selectable but reject
    /// transforms at gesture start.
    pub fn handle_under(&self, store: &ElementStore, p: Point) -> Option<Handle> {
        self.resize_grab_at(store, p).map(|(_, handle, _)| handle)
    }

    /// CSS-style cursor name for the pointer at `p`.
    pub fn cursor_at(&self, store: &ElementStore, p: Point) -> &'static str {
        match &self.gesture {
            Gesture::Dragging { .. } => "grabbing",
            Gesture::Resizing { handle, .. } => handle.cursor(),
            Gesture::MarqueeSelecting { .. } => "crosshair",
            Gesture::Pending { .. } | Gesture::Clicking => "default",
            Gesture::Idle => {
                if let Some(handle) = self.handle_under(store, p) {
                    handle.cursor()
                } else if let Some(element) = store.topmost_at(p) {
                    if self.selection.contains(element.id) {
                        "grab"
                    } else {
                        "pointer"
                    }
                } else {
                    "default"
                }
            }
        }
    }

    /// Abort the active gesture. Hosts route pointer-capture loss, pointer
    /// leave, window blur and the escape key here.
    ///
    /// Rolls emitted state back to the gesture-start snapshot on a best
    /// effort basis and always returns the machine to idle.
    pub fn cancel(&mut self, sink: &mut dyn MutationSink) -> Response {
        let gesture = std::mem::take(&mut self.gesture);
        self.throttle.reset();

        match gesture {
            Gesture::Idle => Response::default(),
            Gesture::Pending { .. } | Gesture::Clicking => Response::default(),
            Gesture::Dragging { mut targets, .. } => {
                debug!("drag gesture cancelled");
                emit_move_steps(&mut targets, Vec2::ZERO, sink);
                Response::OVERLAY
            }
            Gesture::MarqueeSelecting { base, .. } => {
                debug!("marquee gesture cancelled");
                let changed = self.selection.set_many(base);
                Response {
                    selection_changed: changed,
                    overlay_changed: true,
                }
            }
            Gesture::Resizing {
                id,
                initial,
                emitted,
                ..
            } => {
                debug!(element = id, "resize gesture cancelled");
                if emitted {
                    if let Err(error) = sink.resize_to(id, initial.size(), initial.origin()) {
                        warn!(%error, element = id, "rollback resize intent rejected");
                    }
                }
                Response::OVERLAY
            }
        }
    }

    /// Resolve a press on a resize handle: the selected element, the handle
    /// and the element's rectangle to snapshot.
    pub(super) fn resize_grab_at(
        &self,
        store: &ElementStore,
        p: Point,
    ) -> Option<(ElementId, Handle, Rect)> {
        let id = self.selection.single()?;
        let element = store.get(id)?;
        if element.locked || !element.visible {
            return None;
        }
        let rect = element.rect();
        let handle = handle_at(rect, p, self.config.handle_size)?;
        Some((id, handle, rect))
    }

    /// Apply click selection semantics for the sampled modifiers.
    pub(super) fn apply_click_selection(&mut self, id: ElementId, modifiers: Modifiers) -> bool {
        if modifiers.multi_select() {
            self.selection.toggle(id)
        } else if modifiers.additive() {
            self.selection.add(id)
        } else {
            self.selection.select_only(id)
        }
    }

    /// Snapshot the selected, unlocked, still-existing elements as drag
    /// targets. Locked elements stay selected but are never moved.
    pub(super) fn drag_targets(&self, store: &ElementStore) -> Vec<DragTarget> {
        self.selection
            .sorted_ids()
            .into_iter()
            .filter_map(|id| store.get(id))
            .filter(|element| !element.locked)
            .map(|element| DragTarget::new(element.id, element.position))
            .collect()
    }
}

/// Forward the move intents that bring every target to `start + delta`,
/// with each resulting position clamped component-wise to >= 0.
///
/// Steps are computed against what was already emitted, so repeated calls
/// with a growing delta never compound. Targets sharing the same step are
/// batched into one intent; sink failures are logged and do not disturb
/// gesture state.
pub(super) fn emit_move_steps(
    targets: &mut [DragTarget],
    delta: Vec2,
    sink: &mut dyn MutationSink,
) {
    let mut groups: Vec<(Vec2, Vec<ElementId>)> = Vec::new();

    for target in targets.iter_mut() {
        let desired = (target.start + delta).max(Point::ZERO);
        let step = desired - (target.start + target.applied);
        if step.is_zero() {
            continue;
        }
        target.applied = desired - target.start;

        match groups.iter_mut().find(|(s, _)| *s == step) {
            Some((_, ids)) => ids.push(target.id),
            None => groups.push((step, vec![target.id])),
        }
    }

    for (step, ids) in groups {
        if let Err(error) = sink.move_by(&ids, step) {
            warn!(%error, count = ids.len(), "move intent rejected by mutation sink");
        }
    }
}
