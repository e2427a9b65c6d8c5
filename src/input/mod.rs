//! Pointer input handling for the canvas.
//!
//! This module implements the interaction state machine that unifies
//! click-to-select, multi-select, marquee selection, drag-to-move and
//! drag-to-resize into one coherent event-handling core.
//!
//! ## Architecture
//!
//! All pointer events funnel through [`InteractionEngine`], which holds a
//! single explicit [`Gesture`] state. One authoritative gesture value
//! replaces flag-based suppression, so independent consumers can never
//! race to interpret the same pointer event.
//!
//! ## Modules
//!
//! - `state` - Gesture state machine enum and helper methods
//! - `engine` - Engine state, response type, shared emission plumbing
//! - `pointer_down` - Press handling (selection, gesture arming)
//! - `pointer_move` - Motion handling (threshold, drag, marquee, resize)
//! - `pointer_up` - Release handling (authoritative final emits)
//! - `throttle` - Bounded-rate intent emission
//! - `coords` - Screen/canvas coordinate conversion for hosts

pub mod coords;
mod engine;
mod pointer_down;
mod pointer_move;
mod pointer_up;
mod state;
mod throttle;

pub use engine::{InteractionEngine, Response};
pub use state::{DragTarget, Gesture, GestureKind, PendingIntent};
pub use throttle::UpdateThrottle;
