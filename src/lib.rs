//! Pointer interaction core for the report designer canvas.
//!
//! This crate implements the interactive front-end of the report designer:
//! selecting, marquee-selecting, dragging and resizing the elements of a
//! report page. Rendering, persistence, undo history and backend transport
//! are external collaborators - the core reads a z-ordered element list,
//! owns the selection, and writes back exclusively through move/resize
//! intents.
//!
//! ## Modules
//!
//! - `geometry` - Point/size/rectangle primitives and bounding-box math
//! - `types` - Element model, content payloads, modifier-key state
//! - `spatial_index` - R-tree candidate queries for hit testing
//! - `store` - Z-ordered element store and the mutation-intent boundary
//! - `selection` - Selected-id set with notify-on-change semantics
//! - `resize` - Eight-handle resize model and transform math
//! - `input` - The pointer gesture state machine
//! - `config` - Interaction tuning knobs with JSON persistence
//! - `error` - Error types for the fallible crate surface
//! - `perf` - Profiling instrumentation for interaction hot paths

pub mod config;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod input;
pub mod perf;
pub mod resize;
pub mod selection;
pub mod spatial_index;
pub mod store;
pub mod types;

pub use config::InteractionConfig;
pub use error::{CanvasError, CanvasResult};
pub use geometry::{Point, Rect, Size, Vec2, bounding_box};
pub use input::coords::CanvasTransform;
pub use input::{Gesture, GestureKind, InteractionEngine, Response};
pub use resize::{Handle, ResizeOutcome, compute_resize, handle_at};
pub use selection::SelectionManager;
pub use store::{ElementStore, MutationSink};
pub use types::{Element, ElementContent, ElementId, Modifiers, ShapeKind};
