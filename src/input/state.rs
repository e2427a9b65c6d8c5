//! Gesture state machine - unified state for all pointer interactions.
//!
//! One [`Gesture`] value replaces scattered "operation in progress" flags:
//! every consumer inspects the same authoritative state, so two handlers can
//! never race to interpret the same pointer event.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Resizing          (pointer down on a resize handle; no threshold)
//! Idle -> Pending(Drag)     (pointer down on a selected, unlocked element)
//! Idle -> Clicking          (pointer down on any other visible element)
//! Idle -> Pending(Marquee)  (pointer down on empty canvas)
//!
//! Pending -> Dragging | MarqueeSelecting   (travel exceeds the threshold)
//! Pending -> Idle                          (pointer up: resolves as a click)
//!
//! Any -> Idle               (pointer up finalizes; cancel aborts)
//! ```

use crate::geometry::{Point, Rect, Vec2};
use crate::resize::Handle;
use crate::types::ElementId;

/// Snapshot of one drag target captured at gesture start.
///
/// Deltas are always computed against `start`, never against already-moved
/// positions, so a long drag cannot accumulate rounding drift.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragTarget {
    pub id: ElementId,
    /// Element position at gesture start
    pub start: Point,
    /// Cumulative delta already forwarded to the mutation sink
    pub applied: Vec2,
}

impl DragTarget {
    pub fn new(id: ElementId, start: Point) -> Self {
        Self {
            id,
            start,
            applied: Vec2::ZERO,
        }
    }
}

/// What a pending press will become once it crosses the drag threshold.
#[derive(Clone, Debug, PartialEq)]
pub enum PendingIntent {
    /// Press on an already-selected, unlocked element.
    Drag {
        /// The element under the pointer; a sub-threshold release resolves
        /// as a click on it.
        pressed: ElementId,
        targets: Vec<DragTarget>,
    },
    /// Press on empty canvas.
    Marquee {
        additive: bool,
        /// Selection at gesture start, kept for additive union and for
        /// best-effort rollback on cancellation.
        base: Vec<ElementId>,
    },
}

/// The single active pointer gesture. Exactly one is live at a time.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Gesture {
    /// No active pointer operation
    #[default]
    Idle,

    /// Pointer is down but has not yet crossed the drag threshold
    Pending { origin: Point, intent: PendingIntent },

    /// Press resolved immediately to a selection click; nothing further
    /// happens until release
    Clicking,

    /// Moving the selected elements as a batch
    Dragging {
        origin: Point,
        targets: Vec<DragTarget>,
    },

    /// Rubber-band selection over empty canvas
    MarqueeSelecting {
        origin: Point,
        current: Point,
        additive: bool,
        base: Vec<ElementId>,
    },

    /// Resizing a single element via a handle
    Resizing {
        id: ElementId,
        handle: Handle,
        origin: Point,
        /// Element rectangle at gesture start
        initial: Rect,
        /// Whether any intent has been forwarded yet (drives rollback)
        emitted: bool,
    },
}

/// Discriminant of [`Gesture`] for consumers that only branch on the kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureKind {
    Idle,
    Pending,
    Clicking,
    Dragging,
    MarqueeSelecting,
    Resizing,
}

impl Gesture {
    pub fn kind(&self) -> GestureKind {
        match self {
            Gesture::Idle => GestureKind::Idle,
            Gesture::Pending { .. } => GestureKind::Pending,
            Gesture::Clicking => GestureKind::Clicking,
            Gesture::Dragging { .. } => GestureKind::Dragging,
            Gesture::MarqueeSelecting { .. } => GestureKind::MarqueeSelecting,
            Gesture::Resizing { .. } => GestureKind::Resizing,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Gesture::Idle)
    }

    /// True while a committed drag or resize is mutating elements.
    pub fn is_transforming(&self) -> bool {
        matches!(self, Gesture::Dragging { .. } | Gesture::Resizing { .. })
    }

    pub fn is_marquee(&self) -> bool {
        matches!(self, Gesture::MarqueeSelecting { .. })
    }

    /// The live marquee rectangle, normalized; presentation-only state for
    /// the rubber-band indicator.
    pub fn marquee_rect(&self) -> Option<Rect> {
        match self {
            Gesture::MarqueeSelecting {
                origin, current, ..
            } => Some(Rect::from_corners(*origin, *current)),
            _ => None,
        }
    }

    /// The element being resized, if a resize gesture is active.
    pub fn resizing_element(&self) -> Option<ElementId> {
        match self {
            Gesture::Resizing { id, .. } => Some(*id),
            _ => None,
        }
    }
}
