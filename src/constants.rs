//! Crate-wide constants.
//!
//! Centralizes magic numbers and interaction tuning values to make the
//! codebase more maintainable and self-documenting.

// ============================================================================
// Input Handling
// ============================================================================

/// Pointer travel (in canvas units) before a pending press commits to a
/// drag or marquee gesture. Below this, jitter resolves as a plain click.
pub const DRAG_THRESHOLD: f32 = 3.0;

/// Minimum element width/height after any resize operation
pub const MIN_ELEMENT_SIZE: f32 = 20.0;

/// Side length of a resize handle's grab target (at zoom 1.0)
pub const HANDLE_SIZE: f32 = 8.0;

/// Minimum interval between move/resize intents emitted during an active
/// gesture. The release emit is never throttled.
pub const UPDATE_THROTTLE_MS: u64 = 50;

// ============================================================================
// Zoom & Pan
// ============================================================================

/// Minimum zoom level
pub const MIN_ZOOM: f32 = 0.1;

/// Maximum zoom level
pub const MAX_ZOOM: f32 = 5.0;

/// Default zoom level
pub const DEFAULT_ZOOM: f32 = 1.0;

// ============================================================================
// Element Defaults
// ============================================================================

/// Default text element size
pub const DEFAULT_TEXT_SIZE: (f32, f32) = (160.0, 40.0);

/// Default shape element size
pub const DEFAULT_SHAPE_SIZE: (f32, f32) = (120.0, 80.0);

/// Default image element size
pub const DEFAULT_IMAGE_SIZE: (f32, f32) = (200.0, 150.0);

/// Default data-bound field size
pub const DEFAULT_FIELD_SIZE: (f32, f32) = (140.0, 28.0);

/// Default font size for text and field elements
pub const DEFAULT_FONT_SIZE: f32 = 14.0;
