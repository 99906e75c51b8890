//! Processing-time budget extension.

use std::time::Duration;

/// Extends the allowed processing window for the current unit of work.
///
/// Request-scoped environments abort work that exceeds a deadline; a
/// single file move can legitimately run for hours. The engine calls
/// [`TimeBudget::extend`] before each transfer so the embedding
/// application can push its deadline out.
pub trait TimeBudget: Send + Sync {
    /// Grant at least `window` of additional processing time.
    fn extend(&self, window: Duration);
}

/// A budget for contexts without request-scoped deadlines.
#[derive(Debug, Default)]
pub struct NoopBudget;

impl TimeBudget for NoopBudget {
    fn extend(&self, _window: Duration) {}
}
