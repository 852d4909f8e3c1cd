//! Cancellation for superseded searches.
//!
//! Searches are versioned by a monotonically increasing query counter.
//! Starting a new search bumps the active version, which implicitly
//! cancels every in-flight search holding an older version; a canceled
//! search's results are discarded, never displayed.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Tracks the active search version.
///
/// Call [`next_version`](Self::next_version) when a new search starts;
/// tokens minted for earlier versions report as canceled from then on.
#[derive(Debug, Default)]
pub struct SearchVersionTracker {
    active_version: Arc<AtomicU64>,
}

impl SearchVersionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increments the active version and returns the new version number.
    pub fn next_version(&self) -> u64 {
        self.active_version.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Returns the current active version without incrementing.
    pub fn current_version(&self) -> u64 {
        self.active_version.load(Ordering::SeqCst)
    }

    /// Creates a cancellation token tied to the given version.
    pub fn token(&self, version: u64) -> CancellationToken {
        CancellationToken {
            active_version: Arc::clone(&self.active_version),
            version,
        }
    }
}

/// A token a long-running search checks between units of work.
#[derive(Clone, Debug)]
pub struct CancellationToken {
    active_version: Arc<AtomicU64>,
    version: u64,
}

impl CancellationToken {
    /// A token that is never canceled, for callers outside any tracker.
    pub fn noop() -> Self {
        Self {
            active_version: Arc::new(AtomicU64::new(0)),
            version: 0,
        }
    }

    /// Returns `Some(())` while still active, `None` once canceled.
    ///
    /// The `Option` shape enables early returns with the `?` operator.
    #[inline]
    pub fn is_cancelled(&self) -> Option<()> {
        if self.version != self.active_version.load(Ordering::Relaxed) {
            None
        } else {
            Some(())
        }
    }
}

impl Default for CancellationToken {
    fn default() -> Self {
        Self::noop()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_token_is_never_cancelled() {
        let token = CancellationToken::noop();
        assert!(token.is_cancelled().is_some());
    }

    #[test]
    fn current_token_stays_active() {
        let tracker = SearchVersionTracker::new();
        let version = tracker.next_version();
        let token = tracker.token(version);
        assert!(token.is_cancelled().is_some());
        assert_eq!(tracker.current_version(), version);
    }

    #[test]
    fn newer_version_cancels_older_tokens() {
        let tracker = SearchVersionTracker::new();
        let old = tracker.token(tracker.next_version());
        let new = tracker.token(tracker.next_version());

        assert!(old.is_cancelled().is_none());
        assert!(new.is_cancelled().is_some());
    }

    #[test]
    fn versions_are_monotonic() {
        let tracker = SearchVersionTracker::new();
        let a = tracker.next_version();
        let b = tracker.next_version();
        assert!(b > a);
    }
}
