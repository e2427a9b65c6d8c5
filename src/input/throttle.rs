//! Bounded-rate gating for move/resize intent emission.
//!
//! Pointer-move events arrive far faster than the backing store wants
//! updates, so committed drag and resize gestures gate their emissions
//! through [`UpdateThrottle`]. The release emit bypasses the throttle
//! entirely; only intermediate feedback is rate-limited.

use std::time::{Duration, Instant};

/// Passes at most one emission per interval.
#[derive(Debug)]
pub struct UpdateThrottle {
    interval: Duration,
    last: Option<Instant>,
}

impl UpdateThrottle {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: None,
        }
    }

    /// True when an emission is allowed now; records the emission time.
    pub fn ready(&mut self) -> bool {
        self.ready_at(Instant::now())
    }

    /// Clock-injected variant of [`UpdateThrottle::ready`].
    pub fn ready_at(&mut self, now: Instant) -> bool {
        if self.interval.is_zero() {
            return true;
        }
        match self.last {
            Some(last) if now.saturating_duration_since(last) < self.interval => false,
            _ => {
                self.last = Some(now);
                true
            }
        }
    }

    /// Forget the last emission; the next check passes immediately.
    pub fn reset(&mut self) {
        self.last = None;
    }
}
