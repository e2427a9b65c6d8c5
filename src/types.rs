//! Core types for the report canvas.
//!
//! This module defines the element model the interaction core operates on:
//! identifiers, the element record with its position/size/visibility/lock
//! flags, and the typed content payloads a report page is built from. The
//! interaction logic never looks inside [`ElementContent`]; it is carried
//! for the rendering and persistence layers.

use crate::constants::{
    DEFAULT_FIELD_SIZE, DEFAULT_FONT_SIZE, DEFAULT_IMAGE_SIZE, DEFAULT_SHAPE_SIZE,
    DEFAULT_TEXT_SIZE,
};
use crate::geometry::{Point, Rect, Size};
use serde::{Deserialize, Serialize};

/// Unique identifier for a canvas element.
pub type ElementId = u64;

/// A single element on the report page.
///
/// Elements are stored in z-order (last = topmost). Invisible elements are
/// excluded from hit-testing and marquee inclusion; locked elements can be
/// selected but reject move and resize intents.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Element {
    /// Unique identifier for this element
    pub id: ElementId,
    /// Top-left corner in canvas coordinates
    pub position: Point,
    /// Extent in canvas units
    pub size: Size,
    /// Hidden elements are skipped by hit-testing and marquee selection
    pub visible: bool,
    /// Locked elements stay selectable but cannot be moved or resized
    pub locked: bool,
    /// What this element displays
    pub content: ElementContent,
}

impl Element {
    /// The element's bounding rectangle.
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.position, self.size)
    }
}

/// Content payload of a report element.
///
/// Opaque to the interaction core; rendering and the backend give these
/// meaning.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum ElementContent {
    /// Static text block
    Text { text: String, font_size: f32 },
    /// Vector shape with stroke styling
    Shape {
        shape: ShapeKind,
        stroke_width: f32,
        fill: Option<String>,
    },
    /// Image referenced by path or URL
    Image { source: String },
    /// Data-bound field resolved by the backend at render time
    Field {
        binding: String,
        format: Option<String>,
        font_size: f32,
    },
}

impl ElementContent {
    /// Default size for newly placed elements of this content type.
    pub fn default_size(&self) -> Size {
        let (w, h) = match self {
            ElementContent::Text { .. } => DEFAULT_TEXT_SIZE,
            ElementContent::Shape { .. } => DEFAULT_SHAPE_SIZE,
            ElementContent::Image { .. } => DEFAULT_IMAGE_SIZE,
            ElementContent::Field { .. } => DEFAULT_FIELD_SIZE,
        };
        Size::new(w, h)
    }

    /// Short label for logs and the layer list.
    pub fn type_label(&self) -> &'static str {
        match self {
            ElementContent::Text { .. } => "text",
            ElementContent::Shape { .. } => "shape",
            ElementContent::Image { .. } => "image",
            ElementContent::Field { .. } => "field",
        }
    }

    /// Convenience constructor for a text block with default styling.
    pub fn text(text: impl Into<String>) -> Self {
        ElementContent::Text {
            text: text.into(),
            font_size: DEFAULT_FONT_SIZE,
        }
    }
}

/// Shape variants for the shape content type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeKind {
    #[default]
    Rectangle,
    RoundedRect,
    Ellipse,
    Line,
}

/// Modifier-key state sampled at each pointer event.
///
/// The caller reads these from its windowing layer; the core only consumes
/// the semantic accessors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub control: bool,
    pub shift: bool,
    pub alt: bool,
    /// Cmd on macOS, Win elsewhere
    pub platform: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        control: false,
        shift: false,
        alt: false,
        platform: false,
    };

    /// Ctrl/Cmd: toggle an element in and out of the selection.
    pub fn multi_select(&self) -> bool {
        self.control || self.platform
    }

    /// Shift: add to the selection without removing others; also makes a
    /// marquee additive.
    pub fn additive(&self) -> bool {
        self.shift
    }

    /// Shift during a corner resize: preserve the original aspect ratio.
    pub fn aspect_lock(&self) -> bool {
        self.shift
    }

    /// Alt during a resize: scale around the original center.
    pub fn center_anchor(&self) -> bool {
        self.alt
    }
}
