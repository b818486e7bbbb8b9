//! Cooperative cancellation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A shared flag checked by searches at coarse points.
///
/// The frontier engine polls it once per loop iteration; depth-limited search
/// polls it once per recursive call. Cancellation is advisory: in-flight work
/// finishes the current step and unwinds normally.
///
/// Clones share the same flag, so one handle can be given to the search and
/// another kept (or sent to another thread) to request the stop.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    /// A token that has not been cancelled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation of every search holding this token.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation has been requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}
