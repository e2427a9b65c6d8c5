//! Interaction tuning configuration.
//!
//! Hosts can persist and reload these values; unknown or missing fields
//! fall back to the defaults in [`crate::constants`].

use crate::constants::{DRAG_THRESHOLD, HANDLE_SIZE, MIN_ELEMENT_SIZE, UPDATE_THROTTLE_MS};
use crate::error::CanvasError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Tunable parameters of the interaction engine.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionConfig {
    /// Pointer travel before a pending press commits to drag or marquee
    pub drag_threshold: f32,
    /// Floor for element width and height after a resize
    pub min_element_size: f32,
    /// Side length of a resize handle's grab target
    pub handle_size: f32,
    /// Minimum milliseconds between throttled move/resize intents
    pub update_throttle_ms: u64,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            drag_threshold: DRAG_THRESHOLD,
            min_element_size: MIN_ELEMENT_SIZE,
            handle_size: HANDLE_SIZE,
            update_throttle_ms: UPDATE_THROTTLE_MS,
        }
    }
}

impl InteractionConfig {
    pub fn throttle_interval(&self) -> Duration {
        Duration::from_millis(self.update_throttle_ms)
    }

    /// Load configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self, CanvasError> {
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Persist configuration as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<(), CanvasError> {
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}
