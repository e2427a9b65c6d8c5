//! Performance instrumentation for interaction hot paths.
//!
//! Hit testing and pointer-move handling run at interactive rates, so their
//! timing is instrumented behind the `profiling` cargo feature. With the
//! feature disabled the macros compile to nothing.
//!
//! ```ignore
//! fn hit_test(&self) {
//!     profile_scope!("hit_test");
//!     // ... work ...
//! }
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;
use tracing::trace;

/// Global flag to enable/disable profiling at runtime
static PROFILING_ENABLED: AtomicBool = AtomicBool::new(cfg!(feature = "profiling"));

/// Enable or disable profiling at runtime.
/// Only affects code compiled with the `profiling` feature.
pub fn set_profiling_enabled(enabled: bool) {
    PROFILING_ENABLED.store(enabled, Ordering::Relaxed);
}

/// Check if profiling is currently enabled.
#[inline]
pub fn is_profiling_enabled() -> bool {
    PROFILING_ENABLED.load(Ordering::Relaxed)
}

/// RAII timer that traces the elapsed time of a scope on drop.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
}

impl ScopedTimer {
    pub fn for_profiling(name: &'static str) -> Self {
        Self {
            name,
            start: Instant::now(),
        }
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        if is_profiling_enabled() {
            trace!(
                scope = self.name,
                elapsed_us = self.start.elapsed().as_micros() as u64,
                "scope timing"
            );
        }
    }
}

/// Profile a scope with the given name. Zero-cost when profiling is disabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::for_profiling($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name; // Suppress unused variable warning
    };
}
