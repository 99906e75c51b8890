//! Progress reporting for long-running operations.
//!
//! The engine reports progress through a [`ProgressContext`] scoped to a
//! single operation. The context finalizes its sink from `Drop`, so the
//! sink is released on every exit path — success, cancellation, or error.

use std::sync::Arc;

/// Receives progress messages for a long-running operation.
///
/// Implementations must tolerate `update` being called from the middle
/// of a traversal at arbitrary frequency. The `AssetHub` core never
/// reports a numeric percentage, only messages.
pub trait ProgressSink: Send + Sync {
    /// Report a progress message.
    fn update(&self, message: &str);

    /// Called exactly once when the operation's scope closes.
    fn finish(&self) {}
}

/// A sink that discards all progress messages.
#[derive(Debug, Default)]
pub struct NullProgress;

impl ProgressSink for NullProgress {
    fn update(&self, _message: &str) {}
}

/// A progress scope bound to one operation.
///
/// Constructed with the operation title, which is reported immediately.
/// When `enabled` is false every call is a no-op, but the scope still
/// exists so callers do not branch on the flag.
pub struct ProgressContext {
    sink: Arc<dyn ProgressSink>,
    enabled: bool,
}

impl ProgressContext {
    /// Open a progress scope and report the operation title.
    pub fn open(sink: Arc<dyn ProgressSink>, enabled: bool, title: &str) -> Self {
        if enabled {
            sink.update(title);
        }
        Self { sink, enabled }
    }

    /// Report a progress message.
    pub fn update(&self, message: &str) {
        if self.enabled {
            self.sink.update(message);
        }
    }
}

impl Drop for ProgressContext {
    fn drop(&mut self) {
        if self.enabled {
            self.sink.finish();
        }
    }
}

impl std::fmt::Debug for ProgressContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProgressContext")
            .field("enabled", &self.enabled)
            .finish()
    }
}
