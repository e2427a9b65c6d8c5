//! Error types for the canvas core.
//!
//! The interaction paths themselves are total: stale element references and
//! degenerate geometry are handled as no-ops, never as errors. What remains
//! fallible is the boundary with the filesystem (config and document
//! persistence) and document validation on load.

use crate::types::ElementId;
use thiserror::Error;

/// Errors from the fallible surface of the crate.
#[derive(Error, Debug)]
pub enum CanvasError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A loaded document contains the same element id twice
    #[error("duplicate element id: {0}")]
    DuplicateElement(ElementId),
}

/// Result type alias for canvas operations.
pub type CanvasResult<T> = Result<T, CanvasError>;
